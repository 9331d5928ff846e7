//! Configuration module for tutor-win
//!
//! Holds the fixed ontology location and window geometry shared between the
//! controller and the Win32 windows.

pub mod app;

pub use app::AppConfig;
