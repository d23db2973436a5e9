//! Integration tests for the parser

mod common;
use common::*;

use colorbox::{parse, ColorInput, ColorSpace, ColorValue, ErrorKind};

#[test]
fn every_notation_of_the_same_color_agrees() {
    for text in STEEL_NOTATIONS {
        let color = parse(text, None);
        assert!(color.is_valid(), "{text} was rejected");
        assert_eq!(color.rgb(), [0x33, 0x66, 0x99], "{text}");
        assert_eq!(color.alpha(), 1.0, "{text}");
    }
}

#[test]
fn hex_is_case_insensitive() {
    let upper = parse("#ABCDEF", None);
    let lower = parse("#abcdef", None);
    assert_eq!(upper.rgb(), [0xab, 0xcd, 0xef]);
    assert_eq!(upper, lower);
}

#[test]
fn hex_alpha_defaults_to_opaque() {
    assert_eq!(parse("#336699", None).alpha(), 1.0);
    assert_eq!(parse("#fff", None).alpha(), 1.0);

    let translucent = parse("#33669980", None);
    assert_eq!(translucent.rgb(), [0x33, 0x66, 0x99]);
    assert!((translucent.alpha() - 0.50).abs() < 0.01);

    let short = parse("#f008", None);
    assert_eq!(short.rgb(), [255, 0, 0]);
    assert!(alpha_close(short.alpha(), 0x88 as f32 / 255.0));
}

#[test]
fn rgb_channels_are_clamped_not_rejected() {
    let color = parse("rgb(300, -10, 128)", None);
    assert!(color.is_valid());
    assert_eq!(color.rgb(), [255, 0, 128]);
}

#[test]
fn overflowing_numbers_are_clamped_not_rejected() {
    let red = parse("rgb(1e39, 0, -1e39)", None);
    assert!(red.is_valid());
    assert_eq!(red.rgb(), [255, 0, 0]);

    let saturated = parse("hsl(0, 1e40%, 50%)", None);
    assert_eq!(saturated.hsl(), [0, 100, 50]);

    // Still some hue in [0, 360)
    let spun = parse("hsl(1e40, 50%, 50%)", None);
    assert!(spun.is_valid());
    assert!(spun.hue() < 360);
    assert_eq!(spun.hsl()[1..], [50, 50]);

    assert_eq!(parse("rgba(0, 0, 0, -1e39)", None).alpha(), 0.0);
    assert_eq!(parse("rgba(0, 0, 0, 1e39%)", None).alpha(), 1.0);
}

#[test]
fn functional_notation_tolerates_whitespace_and_case() {
    let color = parse("  RGBA( 10 ,20,  30 , 0.25 )  ", None);
    assert_eq!(color.rgb(), [10, 20, 30]);
    assert!(alpha_close(color.alpha(), 0.25));
}

#[test]
fn rgb_accepts_percentages_and_slash_alpha() {
    let color = parse("rgb(100% 0% 50% / 40%)", None);
    assert_eq!(color.rgb(), [255, 0, 128]);
    assert!(alpha_close(color.alpha(), 0.4));
}

#[test]
fn alpha_is_clamped() {
    assert_eq!(parse("rgba(1, 2, 3, 7)", None).alpha(), 1.0);
    assert_eq!(parse("rgba(1, 2, 3, -1)", None).alpha(), 0.0);
}

#[test]
fn hsl_strings_parse_with_or_without_percent_signs() {
    let with = parse("hsla(210, 50%, 40%, 0.5)", None);
    let without = parse("hsla(210, 50, 40, 0.5)", None);
    assert_eq!(with.hsl(), [210, 50, 40]);
    assert_eq!(with.rgb(), [51, 102, 153]);
    assert!(alpha_close(with.alpha(), 0.5));
    assert_eq!(with, without);
}

#[test]
fn hue_wraps_and_accepts_units() {
    assert_eq!(parse("hsl(-120, 100%, 50%)", None).rgb(), [0, 0, 255]);
    assert_eq!(parse("hsl(480, 100%, 50%)", None).rgb(), [0, 255, 0]);
    assert_eq!(parse("hsl(0.5turn, 100%, 50%)", None).rgb(), [0, 255, 255]);
    assert_eq!(parse("hsl(200grad, 100%, 50%)", None).rgb(), [0, 255, 255]);
}

#[test]
fn hsv_strings_are_supported() {
    let color = parse("hsv(120, 100%, 100%)", None);
    assert_eq!(color.rgb(), [0, 255, 0]);
    assert_eq!(color.hsv(), [120, 100, 100]);

    let translucent = parse("hsva(0, 100%, 100%, 0.3)", None);
    assert_eq!(translucent.rgb(), [255, 0, 0]);
    assert!(alpha_close(translucent.alpha(), 0.3));
}

#[test]
fn named_colors_resolve_and_carry_their_name() {
    let red = parse("red", None);
    assert_eq!(red.rgb(), [255, 0, 0]);
    assert_eq!(red.name(), Some("red"));

    let rebecca = parse("RebeccaPurple", None);
    assert_eq!(rebecca.rgb(), [102, 51, 153]);
    assert_eq!(rebecca.name(), Some("rebeccapurple"));

    let transparent = parse("transparent", None);
    assert!(transparent.is_valid());
    assert_eq!(transparent.alpha(), 0.0);
    assert_eq!(transparent.name(), Some("transparent"));
}

#[test]
fn parsed_channel_colors_have_no_name() {
    assert_eq!(parse("#ff0000", None).name(), None);
    assert_eq!(parse(0xff0000u32, None).name(), None);
}

#[test]
fn packed_integers_are_24_bit_rgb() {
    let color = parse(0x336699u32, None);
    assert_eq!(color.rgb(), [0x33, 0x66, 0x99]);
    assert_eq!(color.alpha(), 1.0);
    assert_eq!(color.packed(), 0x336699);

    assert_eq!(parse(0u32, None).rgb(), [0, 0, 0]);
    assert_eq!(parse(0xFFFFFFu32, None).rgb(), [255, 255, 255]);
    assert_eq!(parse(0x0100_0000u32, None).error(), Some(ErrorKind::InvalidColor));
}

#[test]
fn tuples_follow_the_hint() {
    let channels = [0.0_f32, 100.0, 100.0];
    assert_eq!(parse(&channels, Some(ColorSpace::Hsv)).rgb(), [255, 0, 0]);
    assert_eq!(parse(&channels, Some(ColorSpace::Rgb)).rgb(), [0, 100, 100]);
    assert_eq!(parse(&channels, Some(ColorSpace::Hsl)).rgb(), [255, 255, 255]);
}

#[test]
fn four_element_tuples_carry_alpha() {
    let color = parse(&[10.0_f32, 20.0, 30.0, 0.4], Some(ColorSpace::Rgb));
    assert_eq!(color.rgb(), [10, 20, 30]);
    assert!(alpha_close(color.alpha(), 0.4));
}

#[test]
fn ambiguous_inputs_fail_closed() {
    // A tuple does not say which space it is in
    let tuple = parse(&[10.0_f32, 20.0, 30.0], None);
    assert_eq!(tuple.error(), Some(ErrorKind::InvalidColor));

    // Neither does a bare comma list
    let list = parse("255, 0, 0", None);
    assert_eq!(list.error(), Some(ErrorKind::InvalidColor));

    let hinted = parse("255, 0, 0", Some(ColorSpace::Rgb));
    assert_eq!(hinted.rgb(), [255, 0, 0]);
}

#[test]
fn hint_does_not_override_self_describing_strings() {
    let color = parse("#ff0000", Some(ColorSpace::Hsl));
    assert_eq!(color.rgb(), [255, 0, 0]);
}

#[test]
fn malformed_tuples_are_rejected() {
    let short: &[f32] = &[1.0, 2.0];
    let long: &[f32] = &[1.0, 2.0, 3.0, 0.5, 9.0];
    let nan = [f32::NAN, 0.0, 0.0];
    let infinite = [0.0, f32::INFINITY, 0.0];

    assert_sentinel(&parse(short, Some(ColorSpace::Rgb)));
    assert_sentinel(&parse(long, Some(ColorSpace::Rgb)));
    assert_sentinel(&parse(&nan, Some(ColorSpace::Hsv)));
    assert_sentinel(&parse(&infinite, Some(ColorSpace::Hsl)));
}

#[test]
fn unparseable_strings_yield_the_sentinel() {
    for text in NOT_COLORS {
        let color = parse(text, None);
        assert_eq!(color.error(), Some(ErrorKind::InvalidColor), "{text:?}");
        assert_sentinel(&color);
    }
}

#[test]
fn reparsing_a_value_is_the_identity() {
    for text in STEEL_NOTATIONS.iter().chain(["red", "#33669980"].iter()) {
        let once = parse(*text, None);
        let twice = parse(&once, None);
        assert_eq!(once, twice);
    }

    let invalid = parse("not-a-color", None);
    assert_eq!(parse(&invalid, Some(ColorSpace::Rgb)), invalid);
}

#[test]
fn input_conversions_pick_the_right_variant() {
    let value = ColorValue::from_rgb([1.0, 2.0, 3.0], 1.0);
    assert!(matches!(ColorInput::from("red"), ColorInput::Text("red")));
    assert!(matches!(ColorInput::from(7u32), ColorInput::Packed(7)));
    assert!(matches!(ColorInput::from(&[1.0_f32, 2.0, 3.0]), ColorInput::Channels(c) if c.len() == 3));
    assert!(matches!(ColorInput::from(&value), ColorInput::Value(_)));
}

#[test]
fn gray_hue_follows_the_source() {
    // From RGB, a gray reports hue 0
    let from_rgb = parse("rgb(128, 128, 128)", None);
    assert_eq!(from_rgb.hsv()[0], 0);
    assert_eq!(from_rgb.hsv()[1], 0);

    // From HSV or HSL, the given hue is kept
    let from_hsv = parse(&[120.0_f32, 0.0, 50.0], Some(ColorSpace::Hsv));
    assert_eq!(from_hsv.hsv(), [120, 0, 50]);
    assert_eq!(from_hsv.hsl()[0], 120);
    assert_eq!(from_hsv.rgb(), [128, 128, 128]);

    let from_hsl = parse("hsl(300, 0%, 20%)", None);
    assert_eq!(from_hsl.hsv()[0], 300);
    assert_eq!(from_hsl.hsl(), [300, 0, 20]);
}
