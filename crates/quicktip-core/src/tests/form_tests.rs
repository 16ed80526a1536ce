//! Tests for the tip form reducer
//!
//! Tests keystroke-level editing, the segment policy (custom unlocks its
//! field, switching clears the custom amount), rejected input leaving the
//! form untouched, and the derived view.

use super::fixtures::{dec, decimal_form, integer_form, type_text};
use crate::{Error, Field, TipForm};
use quicktip_types::{NumericInputMode, TipMode};

#[test]
fn test_new_form_is_empty_and_hidden() {
    let form = decimal_form();
    let view = form.view();

    assert!(!view.show_options);
    assert!(!view.custom_enabled);
    assert_eq!(view.segment, 1);
    assert_eq!(view.tip, "0.00");
    assert_eq!(view.total, "0.00");
    assert!(!form.is_dirty());
}

#[test]
fn test_new_form_rejects_unknown_segment() {
    let result = TipForm::new(NumericInputMode::Decimal, 4);
    assert!(matches!(result, Err(Error::UnknownSegment(4))));
}

#[test]
fn test_typing_price_updates_view() {
    let mut form = decimal_form();
    type_text(&mut form, "20.00");

    let view = form.view();
    assert!(view.show_options);
    assert_eq!(view.tip, "2.00");
    assert_eq!(view.total, "22.00");
    assert!(form.is_dirty());
}

#[test]
fn test_leading_point_keeps_options_hidden() {
    let mut form = decimal_form();
    type_text(&mut form, ".5");

    assert_eq!(form.price_text(), ".5");
    assert!(form.price().is_none());
    assert!(!form.view().show_options);
}

#[test]
fn test_rejected_keystroke_keeps_previous_text() {
    let mut form = decimal_form();
    type_text(&mut form, "12.5");

    let err = form.push_char('.').unwrap_err();
    assert!(matches!(err, Error::MalformedNumber(_)));
    assert_eq!(form.price_text(), "12.5");

    let err = form.push_char('x').unwrap_err();
    assert!(err.is_input_error());
    assert_eq!(form.price_text(), "12.5");
}

#[test]
fn test_set_price_text_rejects_malformed() {
    let mut form = decimal_form();
    form.set_price_text("10").unwrap();

    assert!(form.set_price_text("1..0").is_err());
    assert!(form.set_price_text("-3").is_err());
    assert_eq!(form.price_text(), "10");
}

#[test]
fn test_integer_mode_rejects_point() {
    let mut form = integer_form();
    type_text(&mut form, "40");

    let err = form.push_char('.').unwrap_err();
    assert!(matches!(err, Error::FractionNotAllowed(ref text) if text == "40."));
    assert_eq!(form.view().total, "44.00");
}

#[test]
fn test_pop_char_and_clear() {
    let mut form = decimal_form();
    type_text(&mut form, "15");

    form.pop_char().unwrap();
    assert_eq!(form.price_text(), "1");

    form.clear_focused().unwrap();
    assert_eq!(form.price_text(), "");
    assert!(!form.view().show_options);

    // Popping an empty field is a no-op
    form.pop_char().unwrap();
    assert_eq!(form.price_text(), "");
}

#[test]
fn test_segment_selects_preset_percentages() {
    let mut form = decimal_form();
    form.set_price_text("40").unwrap();

    form.select_segment(0).unwrap();
    assert_eq!(form.view().tip, "0.00");
    assert_eq!(form.view().total, "40.00");

    form.select_segment(2).unwrap();
    assert_eq!(form.view().tip, "6.00");
    assert_eq!(form.view().total, "46.00");
    assert_eq!(
        form.mode().unwrap(),
        TipMode::Fixed {
            percent: dec("15")
        }
    );
}

#[test]
fn test_select_unknown_segment_keeps_state() {
    let mut form = decimal_form();
    assert!(matches!(
        form.select_segment(7),
        Err(Error::UnknownSegment(7))
    ));
    assert_eq!(form.segment(), 1);
}

#[test]
fn test_custom_segment_unlocks_and_focuses_custom_field() {
    let mut form = decimal_form();
    form.set_price_text("50").unwrap();

    assert!(matches!(
        form.set_custom_tip_text("5"),
        Err(Error::CustomTipLocked)
    ));
    assert!(matches!(
        form.focus(Field::CustomTip),
        Err(Error::CustomTipLocked)
    ));

    form.select_segment(3).unwrap();
    assert!(form.view().custom_enabled);
    assert_eq!(form.focused(), Field::CustomTip);

    type_text(&mut form, "7.5");
    let view = form.view();
    assert_eq!(view.tip, "7.50");
    assert_eq!(view.total, "57.50");
    assert_eq!(
        form.mode().unwrap(),
        TipMode::Custom {
            amount: dec("7.5")
        }
    );
}

#[test]
fn test_incomplete_custom_tip_shows_zero_tip_and_price_total() {
    let mut form = decimal_form();
    form.set_price_text("18.40").unwrap();
    form.select_segment(3).unwrap();

    let view = form.view();
    assert_eq!(view.tip, "0.00");
    assert_eq!(view.total, "18.40");

    type_text(&mut form, ".");
    let view = form.view();
    assert_eq!(view.tip, "0.00");
    assert_eq!(view.total, "18.40");
    assert_eq!(
        form.mode().unwrap(),
        TipMode::Custom {
            amount: rust_decimal::Decimal::ZERO
        }
    );
}

#[test]
fn test_switching_away_from_custom_clears_amount() {
    let mut form = decimal_form();
    form.set_price_text("10").unwrap();
    form.select_segment(3).unwrap();
    form.set_custom_tip_text("4").unwrap();

    form.select_segment(2).unwrap();
    assert_eq!(form.custom_tip_text(), "");
    assert_eq!(form.focused(), Field::Price);
    assert_eq!(form.view().tip, "1.50");

    form.select_segment(3).unwrap();
    assert_eq!(form.custom_tip_text(), "");
    assert_eq!(form.view().total, "10.00");
}

#[test]
fn test_reselecting_custom_keeps_amount() {
    let mut form = decimal_form();
    form.select_segment(3).unwrap();
    form.set_custom_tip_text("2").unwrap();

    form.select_segment(3).unwrap();
    assert_eq!(form.custom_tip_text(), "2");
}

#[test]
fn test_custom_text_validated_without_price() {
    let mut form = decimal_form();
    form.select_segment(3).unwrap();

    assert!(form.set_custom_tip_text("abc").is_err());
    assert_eq!(form.custom_tip_text(), "");
}

#[test]
fn test_next_and_prev_segment_wrap() {
    let mut form = decimal_form();

    form.next_segment().unwrap();
    form.next_segment().unwrap();
    assert_eq!(form.segment(), 3);
    form.next_segment().unwrap();
    assert_eq!(form.segment(), 0);

    form.prev_segment().unwrap();
    assert_eq!(form.segment(), 3);
}

#[test]
fn test_focus_next_only_toggles_in_custom() {
    let mut form = decimal_form();
    form.focus_next();
    assert_eq!(form.focused(), Field::Price);

    form.select_segment(3).unwrap();
    form.focus_next();
    assert_eq!(form.focused(), Field::Price);
    form.focus_next();
    assert_eq!(form.focused(), Field::CustomTip);
}

#[test]
fn test_overflowing_edit_is_rejected() {
    let mut form = decimal_form();
    // Fits in a Decimal on its own but not once the tip is added
    let huge = "79228162514264337593543950335";
    assert!(form.set_price_text(huge).is_err());
    assert_eq!(form.price_text(), "");
}

#[test]
fn test_price_too_large_to_show_cents_is_rejected() {
    let mut form = decimal_form();
    form.select_segment(0).unwrap();
    form.set_price_text("12").unwrap();

    let err = form.set_price_text(&"9".repeat(27)).unwrap_err();
    assert!(matches!(err, Error::Overflow));
    assert_eq!(form.price_text(), "12");
    assert_eq!(form.view().total, "12.00");
}

#[test]
fn test_reset_clears_everything() {
    let mut form = decimal_form();
    form.set_price_text("99").unwrap();
    form.select_segment(3).unwrap();
    form.set_custom_tip_text("9").unwrap();

    form.reset();

    assert_eq!(form.price_text(), "");
    assert_eq!(form.custom_tip_text(), "");
    assert_eq!(form.segment(), 1);
    assert_eq!(form.focused(), Field::Price);
    assert!(!form.is_dirty());
}

#[test]
fn test_view_is_stable_across_calls() {
    let mut form = decimal_form();
    form.set_price_text("64.20").unwrap();
    assert_eq!(form.view(), form.view());
    assert_eq!(form.calculate().unwrap(), form.calculate().unwrap());
}
