//! Test fixtures and helpers

use crate::TipForm;
use quicktip_types::NumericInputMode;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a decimal literal
pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Decimal-mode form on the 10% segment
pub fn decimal_form() -> TipForm {
    TipForm::new(NumericInputMode::Decimal, 1).unwrap()
}

/// Integer-mode form on the 10% segment
pub fn integer_form() -> TipForm {
    TipForm::new(NumericInputMode::Integer, 1).unwrap()
}

/// Type `text` into the focused field one character at a time
pub fn type_text(form: &mut TipForm, text: &str) {
    for c in text.chars() {
        form.push_char(c).unwrap();
    }
}
