//! Screen state for the single tip form.
//!
//! `TipForm` owns the raw field texts and the selected segment. Every edit
//! is validated against the calculator before it is committed, so a
//! rejected keystroke leaves the form exactly as it was.

use crate::amount::{parse_custom_tip, parse_price};
use crate::calculator::{compute_custom_tip, compute_fixed_tip};
use crate::selector::choice_for_segment;
use crate::{Error, Result};
use quicktip_types::{CalculationResult, NumericInputMode, SEGMENT_COUNT, TipChoice, TipMode};
use rust_decimal::Decimal;
use tracing::debug;

/// Editable text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Price,
    CustomTip,
}

/// What a front end should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipView {
    /// Selector and tip panel are hidden until a price is present
    pub show_options: bool,
    /// Custom tip field accepts input
    pub custom_enabled: bool,
    pub segment: usize,
    pub tip: String,
    pub total: String,
}

#[derive(Debug, Clone)]
pub struct TipForm {
    input_mode: NumericInputMode,
    default_segment: usize,
    segment: usize,
    price_text: String,
    custom_tip_text: String,
    focused: Field,
}

impl TipForm {
    /// Create an empty form with `default_segment` selected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSegment`] if `default_segment` is not a selector index.
    pub fn new(input_mode: NumericInputMode, default_segment: usize) -> Result<Self> {
        choice_for_segment(default_segment)?;
        Ok(Self {
            input_mode,
            default_segment,
            segment: default_segment,
            price_text: String::new(),
            custom_tip_text: String::new(),
            focused: Field::Price,
        })
    }

    #[must_use]
    pub fn input_mode(&self) -> NumericInputMode {
        self.input_mode
    }

    #[must_use]
    pub fn segment(&self) -> usize {
        self.segment
    }

    #[must_use]
    pub fn focused(&self) -> Field {
        self.focused
    }

    #[must_use]
    pub fn price_text(&self) -> &str {
        &self.price_text
    }

    #[must_use]
    pub fn custom_tip_text(&self) -> &str {
        &self.custom_tip_text
    }

    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(choice_for_segment(self.segment), Ok(TipChoice::Custom))
    }

    /// Whether anything has been entered.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        !self.price_text.is_empty()
            || !self.custom_tip_text.is_empty()
            || self.segment != self.default_segment
    }

    /// Current price, `None` while the field is empty or incomplete.
    #[must_use]
    pub fn price(&self) -> Option<Decimal> {
        parse_price(&self.price_text, self.input_mode)
            .ok()
            .flatten()
    }

    /// Active tip mode. An incomplete custom entry counts as a zero tip.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSegment`] if the selected segment is not a
    /// selector index.
    pub fn mode(&self) -> Result<TipMode> {
        match choice_for_segment(self.segment)? {
            TipChoice::Percent { percent } => Ok(TipMode::Fixed { percent }),
            TipChoice::Custom => {
                let amount = parse_custom_tip(&self.custom_tip_text, self.input_mode)?
                    .amount()
                    .unwrap_or(Decimal::ZERO);
                Ok(TipMode::Custom { amount })
            }
        }
    }

    /// Replace the price text.
    ///
    /// # Errors
    ///
    /// Returns an input error and keeps the previous text if `text` is not a
    /// valid price.
    pub fn set_price_text(&mut self, text: &str) -> Result<()> {
        self.commit(|next| {
            next.price_text = text.to_string();
        })
    }

    /// Replace the custom tip text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CustomTipLocked`] unless the custom segment is
    /// selected, or an input error if `text` is not a valid amount.
    pub fn set_custom_tip_text(&mut self, text: &str) -> Result<()> {
        if !self.is_custom() {
            return Err(Error::CustomTipLocked);
        }
        self.commit(|next| {
            next.custom_tip_text = text.to_string();
        })
    }

    /// Switch the tip selector. Any custom amount is cleared on change.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSegment`] for an invalid index.
    pub fn select_segment(&mut self, index: usize) -> Result<()> {
        let choice = choice_for_segment(index)?;
        if index == self.segment {
            return Ok(());
        }
        self.commit(|next| {
            next.segment = index;
            next.custom_tip_text.clear();
            next.focused = if choice.is_custom() {
                Field::CustomTip
            } else {
                Field::Price
            };
        })?;
        debug!("Tip segment changed to {index} ({})", choice.label());
        Ok(())
    }

    /// Move to the next segment, wrapping around.
    ///
    /// # Errors
    ///
    /// Propagates calculation errors from the new mode.
    pub fn next_segment(&mut self) -> Result<()> {
        self.select_segment((self.segment + 1) % SEGMENT_COUNT)
    }

    /// Move to the previous segment, wrapping around.
    ///
    /// # Errors
    ///
    /// Propagates calculation errors from the new mode.
    pub fn prev_segment(&mut self) -> Result<()> {
        self.select_segment((self.segment + SEGMENT_COUNT - 1) % SEGMENT_COUNT)
    }

    /// Focus a field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CustomTipLocked`] when focusing the custom tip field
    /// while a preset is selected.
    pub fn focus(&mut self, field: Field) -> Result<()> {
        if field == Field::CustomTip && !self.is_custom() {
            return Err(Error::CustomTipLocked);
        }
        self.focused = field;
        Ok(())
    }

    /// Toggle focus between the two fields when both are editable.
    pub fn focus_next(&mut self) {
        self.focused = match self.focused {
            Field::Price if self.is_custom() => Field::CustomTip,
            _ => Field::Price,
        };
    }

    /// Append a typed character to the focused field.
    ///
    /// # Errors
    ///
    /// Returns an input error, leaving the field unchanged, if the character
    /// would make the text invalid.
    pub fn push_char(&mut self, c: char) -> Result<()> {
        let mut text = self.focused_text().to_string();
        text.push(c);
        if c == '.' && !self.input_mode.allows_fraction() {
            return Err(Error::FractionNotAllowed(text));
        }
        if !self.input_mode.accepts_char(c) {
            return Err(Error::MalformedNumber(text));
        }
        self.set_focused_text(&text)
    }

    /// Delete the last character of the focused field.
    ///
    /// # Errors
    ///
    /// Propagates validation errors; shortening a valid amount never fails
    /// in practice.
    pub fn pop_char(&mut self) -> Result<()> {
        let mut text = self.focused_text().to_string();
        if text.pop().is_none() {
            return Ok(());
        }
        self.set_focused_text(&text)
    }

    /// Empty the focused field.
    ///
    /// # Errors
    ///
    /// Same as [`TipForm::pop_char`].
    pub fn clear_focused(&mut self) -> Result<()> {
        self.set_focused_text("")
    }

    /// Clear all input and return to the default segment.
    pub fn reset(&mut self) {
        self.segment = self.default_segment;
        self.price_text.clear();
        self.custom_tip_text.clear();
        self.focused = Field::Price;
        debug!("Tip form reset");
    }

    /// Compute the amounts for the current state.
    ///
    /// # Errors
    ///
    /// Returns the calculator error for the current inputs. Committed states
    /// always calculate.
    pub fn calculate(&self) -> Result<CalculationResult> {
        let price = parse_price(&self.price_text, self.input_mode)?;
        match choice_for_segment(self.segment)? {
            TipChoice::Percent { percent } => compute_fixed_tip(price, percent),
            TipChoice::Custom => {
                // Validate even without a price; the calculator skips the text then
                parse_custom_tip(&self.custom_tip_text, self.input_mode)?;
                compute_custom_tip(price, &self.custom_tip_text, self.input_mode)
            }
        }
    }

    #[must_use]
    pub fn view(&self) -> TipView {
        let result = self.calculate().unwrap_or_default();
        TipView {
            show_options: self.price().is_some(),
            custom_enabled: self.is_custom(),
            segment: self.segment,
            tip: result.tip,
            total: result.total,
        }
    }

    fn focused_text(&self) -> &str {
        match self.focused {
            Field::Price => &self.price_text,
            Field::CustomTip => &self.custom_tip_text,
        }
    }

    fn set_focused_text(&mut self, text: &str) -> Result<()> {
        match self.focused {
            Field::Price => self.set_price_text(text),
            Field::CustomTip => self.set_custom_tip_text(text),
        }
    }

    /// Apply `edit` to a copy and keep it only if the result still calculates.
    fn commit(&mut self, edit: impl FnOnce(&mut Self)) -> Result<()> {
        let mut next = self.clone();
        edit(&mut next);
        if let Err(e) = next.calculate() {
            debug!("Rejected edit: {e}");
            return Err(e);
        }
        *self = next;
        Ok(())
    }
}
