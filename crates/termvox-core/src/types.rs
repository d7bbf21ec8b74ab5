//! Core voxel types.

/// Identity of a block type.
///
/// The stored byte is the glyph the block renders as, so the frame buffer can
/// hold block identities directly. [`BlockId::AIR`] is the empty sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct BlockId(pub u8);

impl BlockId {
    /// Air block (empty space)
    pub const AIR: Self = Self(b' ');
    /// Stone block, used for the ground layer and for placed blocks
    pub const STONE: Self = Self(b'@');
    /// Marker written over the targeted block while a frame is cast
    pub const HIGHLIGHT: Self = Self(b'o');

    /// Returns true if this block is air (empty)
    #[inline]
    pub const fn is_air(self) -> bool {
        self.0 == Self::AIR.0
    }

    /// Returns true if this block is solid (not air)
    #[inline]
    pub const fn is_solid(self) -> bool {
        !self.is_air()
    }

    /// Returns true if this is the highlight marker
    #[inline]
    pub const fn is_highlight(self) -> bool {
        self.0 == Self::HIGHLIGHT.0
    }

    /// Display glyph.
    #[inline]
    pub const fn glyph(self) -> char {
        self.0 as char
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::AIR
    }
}
