//! Application orchestration layer
//!
//! This module coordinates between the Win32 windows and the domain layer.
//! Click handlers call into the controller and only render what it returns.

pub mod controller;
pub mod state;

pub use controller::{AppController, QueryOutcome};
pub use state::CalculatorState;
