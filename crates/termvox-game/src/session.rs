//! One frame of the game: move, target, edit, render.

use glam::Vec3;
use termvox_core::{BlockId, CellPos, Result};
use termvox_input::{Action, InputManager};
use termvox_render::{encode, FrameBuffer, WorldRenderer};
use termvox_world::{place_adjacent, remove_targeted, GroundConfig, VoxelWorld};
use tracing::debug;

use crate::player::{Controls, PlayerController, PlayerState};

/// Block edit requested this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edit {
    Remove,
    Place,
}

impl Edit {
    /// Removal wins when both edit actions are held.
    fn from_input(input: &InputManager) -> Option<Self> {
        if input.is_action_held(Action::RemoveBlock) {
            Some(Self::Remove)
        } else if input.is_action_held(Action::PlaceBlock) {
            Some(Self::Place)
        } else {
            None
        }
    }
}

/// World, player and renderer for a running game.
#[derive(Debug, Clone)]
pub struct GameSession {
    world: VoxelWorld,
    player: PlayerState,
    controller: PlayerController,
    renderer: WorldRenderer,
    place_block: BlockId,
    target: Option<Vec3>,
}

impl GameSession {
    /// Create a session rendering to the fixed terminal screen.
    pub fn new(world: VoxelWorld, player: PlayerState) -> Result<Self> {
        Ok(Self {
            world,
            player,
            controller: PlayerController::default(),
            renderer: WorldRenderer::for_screen()?,
            place_block: BlockId::STONE,
            target: None,
        })
    }

    /// Default ground and the default starting pose.
    pub fn standard() -> Result<Self> {
        Self::new(
            VoxelWorld::with_ground(&GroundConfig::default()),
            PlayerState::default(),
        )
    }

    /// Block written by the place action.
    #[must_use]
    pub const fn with_place_block(mut self, block: BlockId) -> Self {
        self.place_block = block;
        self
    }

    pub const fn world(&self) -> &VoxelWorld {
        &self.world
    }

    pub const fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    /// Hit point targeted in the latest frame.
    pub const fn target(&self) -> Option<Vec3> {
        self.target
    }

    /// The most recently rendered frame.
    pub const fn frame(&self) -> &FrameBuffer {
        self.renderer.buffer()
    }

    /// The most recently rendered frame as terminal text.
    pub fn encoded_frame(&self) -> String {
        encode(self.renderer.buffer())
    }

    /// Advance one frame using the latest input snapshot.
    ///
    /// The edit is applied before rendering, so the targeted cell is
    /// highlighted only if it still holds a block.
    pub fn step(&mut self, input: &InputManager) -> &FrameBuffer {
        self.controller
            .update(&mut self.player, &self.world, &Controls::from_input(input));

        self.target = self
            .controller
            .target(&self.player, &self.world, self.renderer.marcher());

        if let (Some(target), Some(edit)) = (self.target, Edit::from_input(input)) {
            self.apply_edit(edit, target);
        }

        self.renderer.render(
            &mut self.world,
            self.player.position,
            self.player.orientation,
            self.target.map(CellPos::from_world),
        )
    }

    fn apply_edit(&mut self, edit: Edit, target: Vec3) {
        let result = match edit {
            Edit::Remove => remove_targeted(target, &mut self.world),
            Edit::Place => place_adjacent(target, &mut self.world, self.place_block),
        };
        if let Err(e) = result {
            debug!(?edit, "Edit skipped: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;
    use termvox_core::Orientation;
    use termvox_input::{ActionMap, ScriptedKeys};
    use termvox_render::COLOR_HIGHLIGHT;

    fn input(frames: &[&str]) -> InputManager {
        InputManager::new(
            Box::new(ScriptedKeys::from_chars(frames)),
            ActionMap::default_bindings(),
        )
    }

    fn looking_down() -> GameSession {
        GameSession::new(
            VoxelWorld::with_ground(&GroundConfig::default()),
            PlayerState::new(Vec3::new(5.5, 5.5, 5.5), Orientation::new(-FRAC_PI_2, 0.0)),
        )
        .unwrap()
    }

    #[test]
    fn targeted_ground_is_highlighted() {
        let mut session = looking_down();
        let mut input = input(&[""]);
        input.poll();

        session.step(&input);
        let target = session.target().unwrap();
        assert_eq!(CellPos::from_world(target), CellPos::new(5, 5, 3));
        assert!(session.frame().as_slice().contains(&'o'));
        assert!(session.encoded_frame().contains(COLOR_HIGHLIGHT));
        assert_eq!(
            session.world(),
            &VoxelWorld::with_ground(&GroundConfig::default())
        );
    }

    #[test]
    fn removed_cell_is_not_highlighted() {
        let mut session = looking_down();
        let mut input = input(&["x"]);
        input.poll();

        session.step(&input);
        assert!(session.world().is_empty(CellPos::new(5, 5, 3)));
        assert!(!session.frame().as_slice().contains(&'o'));
    }

    #[test]
    fn remove_then_replace_restores_frame() {
        let mut session = looking_down();
        let mut input = input(&["", "x", " ", ""]);

        input.poll();
        let original = session.step(&input).clone();
        let original_text = session.encoded_frame();

        // Remove the block underfoot.
        input.poll();
        session.step(&input);
        assert!(session.world().is_empty(CellPos::new(5, 5, 3)));

        // The player drops into the hole and fills it back in.
        input.poll();
        session.step(&input);
        assert!((session.player().position.z - 4.5).abs() < 1e-6);
        assert!(session.world().is_solid(CellPos::new(5, 5, 3)));

        // Pushed back up to where the first frame was rendered.
        input.poll();
        let restored = session.step(&input);
        assert_eq!(&original, restored);
        assert_eq!(original_text, session.encoded_frame());
    }

    #[test]
    fn remove_wins_over_place() {
        let mut session = looking_down();
        let mut input = input(&["x "]);
        input.poll();

        session.step(&input);
        assert!(session.world().is_empty(CellPos::new(5, 5, 3)));
        assert!(session.world().is_empty(CellPos::new(5, 5, 4)));
    }

    #[test]
    fn no_target_means_no_edit() {
        let mut session = looking_down();
        session.player_mut().orientation = Orientation::new(FRAC_PI_2, 0.0);
        let before = session.world().clone();
        let mut input = input(&["x", " "]);

        for _ in 0..2 {
            input.poll();
            session.step(&input);
            assert!(session.target().is_none());
            assert_eq!(session.world(), &before);
        }
    }

    #[test]
    fn place_block_is_configurable() {
        let marker = BlockId(b'#');
        let mut session = looking_down().with_place_block(marker);
        let mut input = input(&[" "]);
        input.poll();

        session.step(&input);
        assert_eq!(session.world().get(CellPos::new(5, 5, 4)), Some(marker));
        // The new block covers the highlighted cell underneath it.
        assert!(session.frame().as_slice().contains(&'#'));
        assert!(!session.frame().as_slice().contains(&'o'));
    }

    #[test]
    fn standard_session_starts_at_rest() {
        let mut session = GameSession::standard().unwrap();
        let input = InputManager::default();
        session.step(&input);
        assert_eq!(session.player(), &PlayerState::default());
        assert_eq!(session.frame().width(), 100);
        assert_eq!(session.frame().height(), 40);
    }
}
