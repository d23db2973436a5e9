//! Shared test infrastructure for colorbox integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use colorbox::{ColorValue, Message};

// ============================================================================
// Sample inputs
// ============================================================================

/// `#336699` in every textual notation the parser accepts.
pub const STEEL_NOTATIONS: [&str; 7] = [
    "#336699",
    "#369",
    "336699",
    "rgb(51, 102, 153)",
    "rgb(51 102 153)",
    "hsl(210, 50%, 40%)",
    "hsl(210deg 50% 40%)",
];

/// Inputs that must be rejected.
pub const NOT_COLORS: [&str; 12] = [
    "",
    "   ",
    "not-a-color",
    "#12345",
    "#ggg",
    "rgb(1, 2)",
    "rgb(1, 2, 3, 4, 5)",
    "rgb(a, b, c)",
    "rgb(1, 2, 3",
    "cmyk(1, 2, 3, 4)",
    "hsl(nan, 50%, 50%)",
    "rgb(1 2 3 /)",
];

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two RGB triples allowing `tolerance` units per channel
pub fn rgb_close(a: [u8; 3], b: [u8; 3], tolerance: u8) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| x.abs_diff(*y) <= tolerance)
}

/// Compare two f32 RGB triples allowing `tolerance` units per channel
pub fn channels_close(a: [f32; 3], b: [f32; 3], tolerance: f32) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= tolerance)
}

/// Compare alpha values with floating-point tolerance
pub fn alpha_close(a: f32, b: f32) -> bool {
    (a - b).abs() < 0.001
}

/// Asserts that `color` is the sentinel of a rejected input
pub fn assert_sentinel(color: &ColorValue) {
    assert!(!color.is_valid());
    assert_eq!(color.rgb(), [0, 0, 0]);
    assert_eq!(color.hsv(), [0, 0, 0]);
    assert_eq!(color.hsl(), [0, 0, 0]);
    assert_eq!(color.alpha(), 0.0);
    assert_eq!(color.name(), None);
}

/// Builds a message from a string literal
pub fn message(text: &str) -> Option<Message> {
    let mut out = Message::new();
    out.push_str(text).ok()?;
    Some(out)
}

/// A translator that knows French and nothing else
pub fn french(key: &str, locale: &str) -> Option<Message> {
    if locale != "fr" {
        return None;
    }
    match key {
        "invalidColor" => message("Couleur invalide"),
        "alphaNotSupported" => message("Alpha non pris en charge"),
        "primary" => message("primaire"),
        _ => None,
    }
}
