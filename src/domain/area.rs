//! Area formulas for the shapes taught by the calculator
//!
//! Inputs arrive as raw text from edit controls. Parsing and arithmetic live
//! here so the Win32 layer only moves strings in and out of controls.

use std::fmt;
use thiserror::Error;

/// Shapes the calculator knows how to measure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Triangle,
    Square,
}

impl Shape {
    pub fn label(&self) -> &'static str {
        match self {
            Shape::Triangle => "Triangle",
            Shape::Square => "Square",
        }
    }
}

/// Parsed dimensions for a single calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AreaInput {
    Triangle { base: f64, height: f64 },
    Square { side: f64 },
}

impl AreaInput {
    pub fn shape(&self) -> Shape {
        match self {
            AreaInput::Triangle { .. } => Shape::Triangle,
            AreaInput::Square { .. } => Shape::Square,
        }
    }

    /// Applies the shape's formula
    pub fn area(&self) -> f64 {
        match *self {
            AreaInput::Triangle { base, height } => 0.5 * base * height,
            AreaInput::Square { side } => side * side,
        }
    }
}

/// Outcome of a successful calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaResult {
    pub shape: Shape,
    pub area: f64,
}

impl From<AreaInput> for AreaResult {
    fn from(input: AreaInput) -> Self {
        Self {
            shape: input.shape(),
            area: input.area(),
        }
    }
}

impl fmt::Display for AreaResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Area: {}", self.shape.label(), format_number(self.area))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AreaError {
    #[error("Please enter valid numbers for Triangle Area Calculation")]
    InvalidTriangleInput { field: &'static str, input: String },
    #[error("Please enter valid numbers for Square Area Calculation")]
    InvalidSquareInput { field: &'static str, input: String },
}

/// Error raised by [`parse_dimension`] before it is tied to a shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} is not a number: {input:?}")]
pub struct DimensionParseError {
    pub field: &'static str,
    pub input: String,
}

/// Parses one numeric field, ignoring surrounding whitespace.
///
/// Special values are only accepted spelled exactly `NaN` or `Infinity`
/// (optionally signed); `inf`, `nan` and other spellings are rejected.
pub fn parse_dimension(field: &'static str, text: &str) -> Result<f64, DimensionParseError> {
    let trimmed = text.trim();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let is_word = unsigned.chars().all(|c| c.is_ascii_alphabetic());
    if trimmed.is_empty() || (is_word && unsigned != "NaN" && unsigned != "Infinity") {
        return Err(DimensionParseError {
            field,
            input: text.to_string(),
        });
    }

    trimmed.parse::<f64>().map_err(|_| DimensionParseError {
        field,
        input: text.to_string(),
    })
}

/// Computes `0.5 * base * height` from the two text fields
pub fn triangle_area(base_text: &str, height_text: &str) -> Result<AreaResult, AreaError> {
    let to_error = |e: DimensionParseError| AreaError::InvalidTriangleInput {
        field: e.field,
        input: e.input,
    };
    let base = parse_dimension("base", base_text).map_err(to_error)?;
    let height = parse_dimension("height", height_text).map_err(to_error)?;

    Ok(AreaInput::Triangle { base, height }.into())
}

/// Computes `side * side` from the text field
pub fn square_area(side_text: &str) -> Result<AreaResult, AreaError> {
    let side = parse_dimension("side", side_text).map_err(|e| AreaError::InvalidSquareInput {
        field: e.field,
        input: e.input,
    })?;

    Ok(AreaInput::Square { side }.into())
}

/// Formats a value the way the calculator has always displayed doubles:
/// plain decimals with at least one fractional digit inside
/// `[1e-3, 1e7)`, `1.5E8` style scientific notation outside it.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return format!("{:?}", value);
    }

    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{}E{}", mantissa, exponent),
        Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
        None => scientific,
    }
}
