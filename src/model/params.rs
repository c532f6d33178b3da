//! Input parameter records.
//!
//! Every computation takes one of these records by value or reference and
//! never mutates it. The shell replaces the whole [`ParameterSet`] on each
//! committed edit.

use crate::model::error::ParameterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ===== Mode =====

/// Which rail geometry is being laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Horizontal rail; the layout axis is the rail length.
    #[default]
    Flat,
    /// Stair stringer triangle; the layout axis is the triangle base.
    Triangle,
}

/// Rejected mode name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown mode '{0}': expected 'flat' or 'triangle'")]
pub struct InvalidMode(pub String);

impl Mode {
    /// Both modes in display order.
    pub const ALL: [Mode; 2] = [Mode::Flat, Mode::Triangle];

    /// The other mode.
    pub fn toggle(self) -> Self {
        match self {
            Mode::Flat => Mode::Triangle,
            Mode::Triangle => Mode::Flat,
        }
    }

    /// Machine name used in config files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Flat => "flat",
            Mode::Triangle => "triangle",
        }
    }

    /// Human-readable title.
    pub fn title(self) -> &'static str {
        match self {
            Mode::Flat => "Flat Rail",
            Mode::Triangle => "Triangle Stair",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = InvalidMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(Mode::Flat),
            "triangle" => Ok(Mode::Triangle),
            _ => Err(InvalidMode(s.to_string())),
        }
    }
}

// ===== LayoutParameters =====

/// Sizing for a one-dimensional layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutParameters {
    /// Total length available along the axis.
    pub span: f64,
    /// Width of one item.
    pub item_width: f64,
    /// Gap between adjacent items.
    pub gap: f64,
}

impl LayoutParameters {
    /// Bundle span and item sizing.
    pub fn new(span: f64, item_width: f64, gap: f64) -> Self {
        Self {
            span,
            item_width,
            gap,
        }
    }

    /// Strict check of the nominal preconditions.
    ///
    /// The layout engine accepts anything and degrades to an empty layout;
    /// this is for callers that want to tell the user why.
    pub fn validate(&self) -> Result<(), ParameterError> {
        require_positive("span", self.span)?;
        require_positive("baluster width", self.item_width)?;
        require_non_negative("spacing", self.gap)
    }
}

// ===== TriangleParameters =====

/// Stair triangle dimensions as entered.
///
/// A positive `angle_degrees` overrides `height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TriangleParameters {
    /// Horizontal run of the triangle.
    pub base: f64,
    /// Manually entered rise. Ignored when the angle is positive.
    pub height: f64,
    /// Slope angle in degrees; zero means "use the height".
    pub angle_degrees: f64,
}

impl TriangleParameters {
    /// Bundle triangle dimensions.
    pub fn new(base: f64, height: f64, angle_degrees: f64) -> Self {
        Self {
            base,
            height,
            angle_degrees,
        }
    }

    /// Strict check of the nominal preconditions.
    pub fn validate(&self) -> Result<(), ParameterError> {
        require_positive("triangle base", self.base)?;
        require_non_negative("triangle angle", self.angle_degrees)?;
        if self.angle_degrees <= 0.0 {
            require_positive("triangle height", self.height)?;
        }
        Ok(())
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ParameterError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::NonPositive { field, value })
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<(), ParameterError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::Negative { field, value })
    }
}

// ===== ParameterField =====

/// One of the numeric inputs of a [`ParameterSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterField {
    /// Flat rail length.
    RailLength,
    /// Baluster width, shared by both modes.
    BalusterWidth,
    /// Space between balusters, shared by both modes.
    Spacing,
    /// Triangle base length.
    TriangleBase,
    /// Manual triangle height.
    TriangleHeight,
    /// Optional triangle angle in degrees.
    TriangleAngle,
}

impl ParameterField {
    /// Lowercase name used in messages.
    pub fn name(self) -> &'static str {
        match self {
            ParameterField::RailLength => "rail length",
            ParameterField::BalusterWidth => "baluster width",
            ParameterField::Spacing => "spacing",
            ParameterField::TriangleBase => "triangle base",
            ParameterField::TriangleHeight => "triangle height",
            ParameterField::TriangleAngle => "triangle angle",
        }
    }
}

// ===== ParameterSet =====

/// The full set of calculator inputs for one session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterSet {
    /// Active mode.
    pub mode: Mode,
    /// Flat rail length.
    pub rail_length: f64,
    /// Baluster width.
    pub baluster_width: f64,
    /// Space between balusters.
    pub spacing: f64,
    /// Triangle base length.
    pub triangle_base: f64,
    /// Manual triangle height.
    pub triangle_height: f64,
    /// Triangle angle in degrees; overrides the height when positive.
    pub triangle_angle_degrees: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            mode: Mode::Flat,
            rail_length: 150.0,
            baluster_width: 1.2,
            spacing: 9.0,
            triangle_base: 150.0,
            triangle_height: 80.0,
            triangle_angle_degrees: 0.0,
        }
    }
}

impl ParameterSet {
    /// Layout sizing along the flat rail.
    pub fn flat_layout(&self) -> LayoutParameters {
        LayoutParameters::new(self.rail_length, self.baluster_width, self.spacing)
    }

    /// Layout sizing along the triangle base.
    pub fn triangle_layout(&self) -> LayoutParameters {
        LayoutParameters::new(self.triangle_base, self.baluster_width, self.spacing)
    }

    /// Triangle dimensions.
    pub fn triangle(&self) -> TriangleParameters {
        TriangleParameters::new(
            self.triangle_base,
            self.triangle_height,
            self.triangle_angle_degrees,
        )
    }

    /// Read a single field.
    pub fn get(&self, field: ParameterField) -> f64 {
        match field {
            ParameterField::RailLength => self.rail_length,
            ParameterField::BalusterWidth => self.baluster_width,
            ParameterField::Spacing => self.spacing,
            ParameterField::TriangleBase => self.triangle_base,
            ParameterField::TriangleHeight => self.triangle_height,
            ParameterField::TriangleAngle => self.triangle_angle_degrees,
        }
    }

    /// Copy of this set with one field replaced.
    #[must_use]
    pub fn with_value(mut self, field: ParameterField, value: f64) -> Self {
        match field {
            ParameterField::RailLength => self.rail_length = value,
            ParameterField::BalusterWidth => self.baluster_width = value,
            ParameterField::Spacing => self.spacing = value,
            ParameterField::TriangleBase => self.triangle_base = value,
            ParameterField::TriangleHeight => self.triangle_height = value,
            ParameterField::TriangleAngle => self.triangle_angle_degrees = value,
        }
        self
    }

    /// Copy of this set in another mode.
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
}
