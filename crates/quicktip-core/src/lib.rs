pub mod amount;
pub mod calculator;
pub mod config;
pub mod form;
pub mod selector;

mod error;

#[cfg(test)]
mod tests;

pub use amount::{CustomTipEntry, format_amount, parse_custom_tip, parse_price, round2};
pub use calculator::{compute_custom_tip, compute_fixed_tip, compute_for_mode};
pub use error::{Error, Result};
pub use form::{Field, TipForm, TipView};
pub use selector::{choice_for_segment, segment_choices, segment_for_percent};

pub use quicktip_types::*;
