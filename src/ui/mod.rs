#[cfg(windows)]
pub mod calculator;
pub mod layout;
#[cfg(windows)]
pub mod main_window;

#[cfg(windows)]
pub use calculator::CalculatorWindow;
#[cfg(windows)]
pub use main_window::MainWindow;

#[cfg(windows)]
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("Failed to create {0} window")]
    WindowCreationFailed(&'static str),
    #[error("Message loop failed")]
    MessageLoopFailed,
    #[error(transparent)]
    Platform(#[from] crate::platform::windows::PlatformError),
}
