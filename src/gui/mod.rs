mod app;
mod message;
mod state;
mod screens;
mod widgets;

pub use app::DermascanApp;
pub use message::Message;
pub use state::AppState;

use crate::Artifacts;

/// Open the desktop window; blocks until it is closed
pub fn run(artifacts: Artifacts) -> anyhow::Result<()> {
    iced::application(
        move || DermascanApp::new(artifacts.clone()),
        DermascanApp::update,
        DermascanApp::view,
    )
    .title(DermascanApp::title)
    .window_size((1000.0, 760.0))
    .run()
    .map_err(|e| anyhow::anyhow!("GUI error: {}", e))
}
