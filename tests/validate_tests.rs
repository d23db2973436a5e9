//! Integration tests for the validator

mod common;
use common::*;

use colorbox::{validate, ColorSpace, ErrorKind, NoTranslation, Validator};

#[test]
fn disabled_alpha_is_forced_to_one() {
    let color = validate("rgba(10,20,30,0.4)", true, &NoTranslation, "en").color;
    assert!(color.is_valid());
    assert_eq!(color.rgb(), [10, 20, 30]);
    assert_eq!(color.alpha(), 1.0);
}

#[test]
fn enabled_alpha_is_kept() {
    let color = validate("rgba(10,20,30,0.4)", false, &NoTranslation, "en").color;
    assert!(alpha_close(color.alpha(), 0.4));
}

#[test]
fn alpha_correction_is_reported_but_not_an_error() {
    let validator = Validator::new(true, &NoTranslation, "en");
    let validation = validator.check("#33669980");
    assert_eq!(validation.correction, Some(ErrorKind::AlphaNotSupported));
    assert_eq!(validation.color.error(), None);
    assert_eq!(validation.color.alpha(), 1.0);
}

#[test]
fn opaque_input_needs_no_correction() {
    let validator = Validator::new(true, &NoTranslation, "en");
    let validation = validator.check("red");
    assert_eq!(validation.correction, None);
    // Untouched, so the keyword name survives
    assert_eq!(validation.color.name(), Some("red"));
}

#[test]
fn corrected_keywords_lose_their_name() {
    let color = validate("transparent", true, &NoTranslation, "en").color;
    assert_eq!(color.alpha(), 1.0);
    assert_eq!(color.name(), None);
}

#[test]
fn invalid_input_is_marked_not_raised() {
    let color = validate("not-a-color", false, &NoTranslation, "en").color;
    assert_eq!(color.error(), Some(ErrorKind::InvalidColor));
    assert_sentinel(&color);

    // Still renderable
    assert_eq!(color.css().hex.as_str(), "#00000000");
}

#[test]
fn invalid_input_is_not_repaired_by_disabling_alpha() {
    let color = validate("rgb(1, 2)", true, &NoTranslation, "en").color;
    assert_eq!(color.error(), Some(ErrorKind::InvalidColor));
    assert_eq!(color.alpha(), 0.0);
}

#[test]
fn messages_fall_back_to_english() {
    let validator = Validator::new(false, &NoTranslation, "de");
    let color = validator.validate("#xyz");
    let message = validator.error_message(&color).unwrap();
    assert_eq!(message.as_str(), "Invalid color");
    assert_eq!(
        validator.message(ErrorKind::AlphaNotSupported).as_str(),
        "Alpha not supported"
    );
}

#[test]
fn messages_are_translated_per_locale() {
    let french_validator = Validator::new(false, &french, "fr");
    let english_validator = Validator::new(false, &french, "en");

    let in_french = french_validator.validate("bogus");
    let in_english = english_validator.validate("bogus");

    // The stored kind does not depend on the locale
    assert_eq!(in_french, in_english);
    assert_eq!(in_french.error(), Some(ErrorKind::InvalidColor));

    assert_eq!(
        french_validator.error_message(&in_french).unwrap().as_str(),
        "Couleur invalide"
    );
    assert_eq!(
        english_validator.error_message(&in_english).unwrap().as_str(),
        "Invalid color"
    );
}

#[test]
fn reports_carry_the_translated_message() {
    let in_french = Validator::new(false, &french, "fr").check("not-a-color");
    let in_english = Validator::new(false, &french, "en").check("not-a-color");

    assert_eq!(in_french.color.error(), Some(ErrorKind::InvalidColor));
    assert_eq!(in_english.color.error(), Some(ErrorKind::InvalidColor));
    assert_eq!(in_french.message, message("Couleur invalide"));
    assert_eq!(in_english.message, message("Invalid color"));
    assert_ne!(in_french.message, in_english.message);
}

#[test]
fn free_validate_uses_translator_and_locale() {
    let report = validate("not-a-color", false, &french, "fr");
    assert_eq!(report.message, message("Couleur invalide"));

    let corrected = validate("rgba(1, 2, 3, 0.5)", true, &french, "fr");
    assert_eq!(corrected.correction, Some(ErrorKind::AlphaNotSupported));
    assert_eq!(corrected.message, message("Alpha non pris en charge"));

    let clean = validate("#123456", true, &french, "fr");
    assert_eq!(clean.message, None);
}

#[test]
fn closures_can_translate() {
    let shout = |key: &str, _locale: &str| message(if key == "invalidColor" { "NOPE" } else { "?" });
    let validator = Validator::new(false, &shout, "xx");
    assert_eq!(validator.message(ErrorKind::InvalidColor).as_str(), "NOPE");
}

#[test]
fn valid_colors_have_no_message() {
    let validator = Validator::new(false, &NoTranslation, "en");
    let color = validator.validate("#fff");
    assert_eq!(validator.error_message(&color), None);
}

#[test]
fn hint_applies_to_tuples() {
    let validator = Validator::new(true, &NoTranslation, "en").hint(ColorSpace::Hsv);
    let color = validator.validate(&[0.0_f32, 100.0, 100.0, 0.2]);
    assert_eq!(color.rgb(), [255, 0, 0]);
    assert_eq!(color.alpha(), 1.0);
    assert!(validator.disables_alpha());

    // Without a hint the same tuple is ambiguous
    let unhinted = Validator::new(true, &NoTranslation, "en");
    assert_eq!(
        unhinted.validate(&[0.0_f32, 100.0, 100.0]).error(),
        Some(ErrorKind::InvalidColor)
    );
}

#[test]
fn error_kinds_have_stable_keys() {
    assert_eq!(ErrorKind::InvalidColor.key(), "invalidColor");
    assert_eq!(ErrorKind::AlphaNotSupported.key(), "alphaNotSupported");
    assert_eq!(ErrorKind::InvalidColor.to_string(), "invalid color");
}
