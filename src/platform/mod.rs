//! Platform-specific Windows implementations
//!
//! This module encapsulates all Win32 API interactions and provides
//! a clean interface to the rest of the application.

pub mod dialogs;
pub mod windows;
