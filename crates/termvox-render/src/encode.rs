//! ANSI encoding of a frame buffer.
//!
//! Highlighted cells are drawn green. Escapes are only emitted where the
//! highlight state changes within a row, and every row ends with a reset so
//! color never bleeds into the next line.

use termvox_core::BlockId;

use crate::framebuffer::FrameBuffer;

/// Switches the foreground to green.
pub const COLOR_HIGHLIGHT: &str = "\x1B[32m";
/// Resets all attributes.
pub const COLOR_RESET: &str = "\x1B[0m";

/// Encode the whole buffer into a fresh string.
pub fn encode(buffer: &FrameBuffer) -> String {
    let mut out = String::with_capacity(buffer.as_slice().len() + buffer.height() * 16);
    encode_into(buffer, &mut out);
    out
}

/// Append the encoded buffer to `out`.
pub fn encode_into(buffer: &FrameBuffer, out: &mut String) {
    let highlight = BlockId::HIGHLIGHT.glyph();
    for row in buffer.rows() {
        let mut colored = false;
        for &c in row {
            let is_highlight = c == highlight;
            if is_highlight && !colored {
                out.push_str(COLOR_HIGHLIGHT);
                colored = true;
            } else if !is_highlight && colored {
                out.push_str(COLOR_RESET);
                colored = false;
            }
            out.push(c);
        }
        out.push_str(COLOR_RESET);
        out.push('\n');
    }
}
