use termvox_app::{AppContext, FrameContext, TerminalApp};
use termvox_game::GameSession;
use termvox_render::encode_into;
use tracing::info;

/// Walks the default world with the standard controls.
pub struct Explorer {
    session: GameSession,
}

impl TerminalApp for Explorer {
    fn init(_ctx: &mut AppContext) -> anyhow::Result<Self> {
        let session = GameSession::standard()?;
        info!(
            "World {:?} ready, {} solid blocks",
            session.world().dimensions(),
            session.world().solid_count()
        );
        Ok(Self { session })
    }

    fn update(&mut self, ctx: &AppContext) {
        self.session.step(&ctx.input);
    }

    fn render(&mut self, _ctx: &AppContext, frame: &mut FrameContext) -> anyhow::Result<()> {
        encode_into(self.session.frame(), &mut frame.text);
        Ok(())
    }

    fn cleanup(&mut self, _ctx: &mut AppContext) {
        let player = self.session.player();
        info!(
            "Leaving at {:?}, pitch {:.2}, yaw {:.2}",
            player.position, player.orientation.pitch, player.orientation.yaw
        );
    }
}
