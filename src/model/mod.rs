//! Domain model types (pure).
//!
//! All types in this module are plain values with no I/O.

pub mod error;
pub mod key_action;
pub mod params;

// Re-export for convenience
pub use error::{AppError, ParameterError};
pub use key_action::KeyAction;
pub use params::{
    InvalidMode, LayoutParameters, Mode, ParameterField, ParameterSet, TriangleParameters,
};
