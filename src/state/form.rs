//! Input form fields and the text edit buffer.
//!
//! Pure data: which fields each mode shows, how they are labelled, and how
//! typed text becomes a number.

use crate::model::{Mode, ParameterError, ParameterField};

const FLAT_FIELDS: [ParameterField; 3] = [
    ParameterField::RailLength,
    ParameterField::BalusterWidth,
    ParameterField::Spacing,
];

const TRIANGLE_FIELDS: [ParameterField; 5] = [
    ParameterField::TriangleBase,
    ParameterField::TriangleHeight,
    ParameterField::TriangleAngle,
    ParameterField::BalusterWidth,
    ParameterField::Spacing,
];

/// Fields shown by the form, top to bottom.
pub fn fields_for(mode: Mode) -> &'static [ParameterField] {
    match mode {
        Mode::Flat => &FLAT_FIELDS,
        Mode::Triangle => &TRIANGLE_FIELDS,
    }
}

/// Form label for a field.
pub fn label(field: ParameterField) -> &'static str {
    match field {
        ParameterField::RailLength => "Rail Length",
        ParameterField::BalusterWidth => "Baluster Width",
        ParameterField::Spacing => "Space Between",
        ParameterField::TriangleBase => "Triangle Base Length",
        ParameterField::TriangleHeight => "Triangle Height",
        ParameterField::TriangleAngle => "Triangle Angle (deg, optional)",
    }
}

/// Amount one increment or decrement changes a field by.
pub fn step(field: ParameterField) -> f64 {
    match field {
        ParameterField::RailLength
        | ParameterField::TriangleBase
        | ParameterField::TriangleHeight => 1.0,
        ParameterField::BalusterWidth => 0.1,
        ParameterField::Spacing => 0.5,
        ParameterField::TriangleAngle => 1.0,
    }
}

/// Whether the field is measured in the configured length unit.
///
/// The angle is in degrees and carries no unit label.
pub fn has_length_unit(field: ParameterField) -> bool {
    field != ParameterField::TriangleAngle
}

/// Parse typed text for a field.
///
/// Surrounding whitespace is ignored. Anything that is not a finite number
/// is rejected; range checks are left to the caller.
///
/// # Examples
///
/// ```
/// use balcalc::model::ParameterField;
/// use balcalc::state::form::parse_field_value;
///
/// assert_eq!(parse_field_value(ParameterField::Spacing, " 4.5 "), Ok(4.5));
/// assert!(parse_field_value(ParameterField::Spacing, "inf").is_err());
/// ```
pub fn parse_field_value(field: ParameterField, text: &str) -> Result<f64, ParameterError> {
    let not_a_number = || ParameterError::NotANumber {
        field: field.name(),
        input: text.to_string(),
    };

    let value: f64 = text.trim().parse().map_err(|_| not_a_number())?;
    if !value.is_finite() {
        return Err(not_a_number());
    }
    Ok(value)
}

/// Format a field value the way the form shows it.
///
/// Trailing zeros are dropped so `9.0` reads as `9` and `1.20` as `1.2`.
pub fn format_value(value: f64) -> String {
    let text = format!("{:.4}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

// ===== EditBuffer =====

/// Text being typed into one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    field: ParameterField,
    text: String,
}

impl EditBuffer {
    /// Start editing `field` with an empty buffer.
    pub fn new(field: ParameterField) -> Self {
        Self {
            field,
            text: String::new(),
        }
    }

    /// Field being edited.
    pub fn field(&self) -> ParameterField {
        self.field
    }

    /// Text typed so far.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Append a character if it can be part of a number.
    ///
    /// Returns whether the character was accepted.
    pub fn push(&mut self, ch: char) -> bool {
        if Self::accepts(ch) {
            self.text.push(ch);
            true
        } else {
            false
        }
    }

    /// Remove the last character.
    pub fn pop(&mut self) {
        self.text.pop();
    }

    /// Parse the buffer into a value.
    pub fn parse(&self) -> Result<f64, ParameterError> {
        parse_field_value(self.field, &self.text)
    }

    fn accepts(ch: char) -> bool {
        ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E')
    }
}
