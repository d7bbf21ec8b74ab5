//! Player pose and the per-frame controller.

use glam::Vec3;
use termvox_core::constants::EYE_HEIGHT;
use termvox_core::{CellPos, Orientation};
use termvox_input::{Action, InputManager};
use termvox_render::RayMarcher;
use termvox_world::VoxelWorld;

/// Where the player's eye is and where it looks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    pub position: Vec3,
    pub orientation: Orientation,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            position: Vec3::new(5.0, 5.0, 5.0),
            orientation: Orientation::default(),
        }
    }
}

impl PlayerState {
    pub const fn new(position: Vec3, orientation: Orientation) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Unit facing direction.
    pub fn facing(&self) -> Vec3 {
        self.orientation.direction()
    }
}

/// Movement actions held this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Controls {
    pub look_up: bool,
    pub look_down: bool,
    pub look_left: bool,
    pub look_right: bool,
    pub forward: bool,
    pub back: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
}

impl Controls {
    /// Read the movement actions from the latest input snapshot.
    pub fn from_input(input: &InputManager) -> Self {
        Self {
            look_up: input.is_action_held(Action::LookUp),
            look_down: input.is_action_held(Action::LookDown),
            look_left: input.is_action_held(Action::LookLeft),
            look_right: input.is_action_held(Action::LookRight),
            forward: input.is_action_held(Action::MoveForward),
            back: input.is_action_held(Action::MoveBack),
            strafe_left: input.is_action_held(Action::StrafeLeft),
            strafe_right: input.is_action_held(Action::StrafeRight),
        }
    }
}

/// Tuning for [`PlayerController`].
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Horizontal distance covered per frame while a move action is held.
    pub move_speed: f32,
    /// Radians turned per frame while a look action is held.
    pub rotation_step: f32,
    /// Height of the eye above the feet.
    pub eye_height: f32,
    /// Offset of the ground probes from the feet.
    pub epsilon: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            move_speed: 0.3,
            rotation_step: 0.1,
            eye_height: EYE_HEIGHT,
            epsilon: 0.01,
        }
    }
}

/// Applies one frame of player movement.
#[derive(Debug, Clone, Default)]
pub struct PlayerController {
    config: ControllerConfig,
}

impl PlayerController {
    pub const fn new(config: ControllerConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Ground correction, then rotation, then translation.
    pub fn update(&self, player: &mut PlayerState, world: &VoxelWorld, controls: &Controls) {
        self.stand_on_ground(player, world);
        self.rotate(player, controls);
        self.translate(player, controls);
    }

    /// Keep the feet on top of the ground, one unit per frame at most in
    /// each direction.
    ///
    /// Feet inside a solid cell push the player up; the second probe then
    /// uses the updated height and drops the player if nothing is beneath.
    /// Probes outside the world change nothing.
    pub fn stand_on_ground(&self, player: &mut PlayerState, world: &VoxelWorld) {
        let ControllerConfig {
            eye_height,
            epsilon,
            ..
        } = self.config;
        let probe = |pos: Vec3, dz: f32| CellPos::from_world(Vec3::new(pos.x, pos.y, pos.z + dz));

        if world.is_solid(probe(player.position, epsilon - eye_height)) {
            player.position.z += 1.0;
        }
        if world.is_empty(probe(player.position, -epsilon - eye_height)) {
            player.position.z -= 1.0;
        }
    }

    /// Turn while look actions are held. Angles are not wrapped or clamped.
    pub fn rotate(&self, player: &mut PlayerState, controls: &Controls) {
        let step = self.config.rotation_step;
        let o = &mut player.orientation;
        if controls.look_up {
            o.pitch += step;
        }
        if controls.look_down {
            o.pitch -= step;
        }
        if controls.look_left {
            o.yaw -= step;
        }
        if controls.look_right {
            o.yaw += step;
        }
    }

    /// Move in the horizontal plane. There is no collision.
    ///
    /// The facing direction is projected onto the plane without
    /// renormalizing, so looking up or down slows walking.
    pub fn translate(&self, player: &mut PlayerState, controls: &Controls) {
        let facing = player.facing();
        let forward = Vec3::new(facing.x, facing.y, 0.0) * self.config.move_speed;
        let left = Vec3::new(facing.y, -facing.x, 0.0) * self.config.move_speed;

        if controls.forward {
            player.position += forward;
        }
        if controls.back {
            player.position -= forward;
        }
        if controls.strafe_left {
            player.position += left;
        }
        if controls.strafe_right {
            player.position -= left;
        }
    }

    /// First sample in a non-empty cell along the facing direction.
    pub fn target(
        &self,
        player: &PlayerState,
        world: &VoxelWorld,
        marcher: &RayMarcher,
    ) -> Option<Vec3> {
        marcher.find_target(player.position, player.facing(), world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;
    use termvox_world::GroundConfig;

    fn ground() -> VoxelWorld {
        VoxelWorld::with_ground(&GroundConfig::default())
    }

    fn at(x: f32, y: f32, z: f32) -> PlayerState {
        PlayerState::new(Vec3::new(x, y, z), Orientation::default())
    }

    #[test]
    fn start_pose_is_stable_on_ground() {
        let world = ground();
        let controller = PlayerController::default();
        let mut player = PlayerState::default();
        for _ in 0..5 {
            controller.update(&mut player, &world, &Controls::default());
            assert_eq!(player, PlayerState::default());
        }
    }

    #[test]
    fn standing_height_is_stable() {
        let world = ground();
        let controller = PlayerController::default();
        let mut player = at(5.5, 5.5, 5.5);
        controller.stand_on_ground(&mut player, &world);
        assert_relative_eq!(player.position.z, 5.5);
    }

    #[test]
    fn feet_in_ground_push_up_one_step() {
        let world = ground();
        let controller = PlayerController::default();
        let mut player = at(5.5, 5.5, 4.5);
        controller.stand_on_ground(&mut player, &world);
        assert_relative_eq!(player.position.z, 5.5);

        let mut buried = at(5.5, 5.5, 2.5);
        controller.stand_on_ground(&mut buried, &world);
        assert_relative_eq!(buried.position.z, 3.5);
    }

    #[test]
    fn nothing_beneath_drops_one_step() {
        let world = VoxelWorld::new();
        let controller = PlayerController::default();
        let mut player = at(5.5, 5.5, 8.5);
        controller.stand_on_ground(&mut player, &world);
        assert_relative_eq!(player.position.z, 7.5);
        controller.stand_on_ground(&mut player, &world);
        assert_relative_eq!(player.position.z, 6.5);
    }

    #[test]
    fn probes_outside_world_do_nothing() {
        let world = VoxelWorld::new();
        let controller = PlayerController::default();
        for start in [at(5.5, 5.5, 1.0), at(-2.0, 5.5, 8.5), at(5.5, 25.0, 8.5)] {
            let mut player = start;
            controller.stand_on_ground(&mut player, &world);
            assert_eq!(player, start);
        }
    }

    #[test]
    fn look_actions_rotate_by_step() {
        let controller = PlayerController::default();
        let mut player = PlayerState::default();

        let up_left = Controls {
            look_up: true,
            look_left: true,
            ..Default::default()
        };
        controller.rotate(&mut player, &up_left);
        assert_relative_eq!(player.orientation.pitch, 0.1, epsilon = 1e-5);
        assert_relative_eq!(player.orientation.yaw, -0.1, epsilon = 1e-5);

        let all = Controls {
            look_up: true,
            look_down: true,
            look_left: true,
            look_right: true,
            ..Default::default()
        };
        controller.rotate(&mut player, &all);
        assert_relative_eq!(player.orientation.pitch, 0.1, epsilon = 1e-5);
        assert_relative_eq!(player.orientation.yaw, -0.1, epsilon = 1e-5);
    }

    #[test]
    fn forward_and_strafe_follow_yaw() {
        let controller = PlayerController::default();
        let mut player = at(5.0, 5.0, 5.0);

        controller.translate(
            &mut player,
            &Controls {
                forward: true,
                ..Default::default()
            },
        );
        assert_relative_eq!(player.position.x, 5.3, epsilon = 1e-5);
        assert_relative_eq!(player.position.y, 5.0, epsilon = 1e-5);

        controller.translate(
            &mut player,
            &Controls {
                strafe_left: true,
                ..Default::default()
            },
        );
        // Facing +x, left is -y.
        assert_relative_eq!(player.position.x, 5.3, epsilon = 1e-5);
        assert_relative_eq!(player.position.y, 4.7, epsilon = 1e-5);

        player.orientation.yaw = FRAC_PI_2;
        controller.translate(
            &mut player,
            &Controls {
                strafe_right: true,
                back: true,
                ..Default::default()
            },
        );
        // Facing +y: back is -y, right is -x.
        assert_relative_eq!(player.position.x, 5.0, epsilon = 1e-5);
        assert_relative_eq!(player.position.y, 4.4, epsilon = 1e-5);
    }

    #[test]
    fn pitched_view_walks_slower() {
        let controller = PlayerController::default();
        let mut player = at(5.0, 5.0, 5.0);
        player.orientation.pitch = 1.0;
        controller.translate(
            &mut player,
            &Controls {
                forward: true,
                ..Default::default()
            },
        );
        assert_relative_eq!(player.position.x, 5.0 + 0.3 * 1.0_f32.cos(), epsilon = 1e-6);
        assert_relative_eq!(player.position.z, 5.0);
    }

    #[test]
    fn target_is_ground_below() {
        let world = ground();
        let controller = PlayerController::default();
        let marcher = RayMarcher::default();

        let mut player = at(5.5, 5.5, 5.5);
        player.orientation.pitch = -FRAC_PI_2;
        let target = controller.target(&player, &world, &marcher).unwrap();
        assert_eq!(CellPos::from_world(target), CellPos::new(5, 5, 3));

        player.orientation.pitch = FRAC_PI_2;
        assert!(controller.target(&player, &world, &marcher).is_none());
    }
}
