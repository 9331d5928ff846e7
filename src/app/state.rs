//! Calculator display state
//!
//! Each calculator window owns one of these. It changes only when a
//! calculation succeeds, so a rejected input leaves the previous result on
//! screen.

use crate::domain::area::AreaResult;

pub const INITIAL_RESULT_TEXT: &str = "Result will appear here";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorState {
    result_text: String,
}

impl CalculatorState {
    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    /// Replaces the result label with a fresh calculation
    pub fn show(&mut self, result: &AreaResult) {
        self.result_text = result.to_string();
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            result_text: INITIAL_RESULT_TEXT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::area::{square_area, triangle_area};

    #[test]
    fn starts_with_placeholder() {
        assert_eq!(CalculatorState::default().result_text(), INITIAL_RESULT_TEXT);
    }

    #[test]
    fn show_replaces_previous_result() {
        let mut state = CalculatorState::default();
        state.show(&triangle_area("3", "4").unwrap());
        assert_eq!(state.result_text(), "Triangle Area: 6.0");

        state.show(&square_area("3").unwrap());
        assert_eq!(state.result_text(), "Square Area: 9.0");
    }
}
