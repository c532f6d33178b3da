//! Plain text and JSON renditions of a [`Calculation`].
//!
//! Used by the `--print` and `--json` command line modes.

use crate::calculation::Calculation;
use crate::model::Mode;
use std::fmt::Write as _;

/// Results for the active mode as plain text, two decimals per length.
pub fn render_text(calc: &Calculation, unit: &str) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = match calc.mode() {
        Mode::Flat => write_flat(&mut out, calc, unit),
        Mode::Triangle => write_triangle(&mut out, calc, unit),
    };
    out
}

/// The whole calculation as pretty-printed JSON.
pub fn render_json(calc: &Calculation) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(calc)
}

/// Note appended to the height line when the angle drove the height.
pub fn height_source_note(calc: &Calculation) -> Option<String> {
    let triangle = &calc.triangle.triangle;
    triangle
        .height_from_angle
        .then(|| format!("(derived from angle {:.2}°)", triangle.angle_used_degrees))
}

fn write_flat(out: &mut String, calc: &Calculation, unit: &str) -> std::fmt::Result {
    writeln!(out, "Mode: flat rail")?;
    writeln!(out, "Balusters that fit: {}", calc.flat.count)?;
    writeln!(out, "Used length: {:.2} {unit}", calc.flat.used_length)?;
    writeln!(out, "Remaining: {:.2} {unit}", calc.flat.remaining_length)
}

fn write_triangle(out: &mut String, calc: &Calculation, unit: &str) -> std::fmt::Result {
    let triangle = &calc.triangle;

    writeln!(out, "Mode: triangle stair")?;
    writeln!(out, "Balusters that fit: {}", triangle.layout.count)?;
    match height_source_note(calc) {
        Some(note) => writeln!(
            out,
            "Using height: {:.2} {unit} {note}",
            triangle.triangle.height_used
        )?,
        None => writeln!(out, "Using height: {:.2} {unit}", triangle.triangle.height_used)?,
    }
    writeln!(out, "Slope angle: {:.2}°", triangle.summary.angle_degrees)?;
    writeln!(
        out,
        "Hypotenuse: {:.2} {unit}",
        triangle.summary.hypotenuse_length
    )?;

    if triangle.placements.is_empty() {
        return Ok(());
    }

    writeln!(
        out,
        "{:<4} {:>10} {:>12}",
        "#",
        format!("X ({unit})"),
        format!("Height ({unit})")
    )?;
    for placement in &triangle.placements {
        writeln!(
            out,
            "{:<4} {:>10.2} {:>12.2}",
            placement.index, placement.x, placement.height
        )?;
    }
    Ok(())
}
