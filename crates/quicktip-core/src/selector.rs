//! Four-way tip selector: three preset percentages and a custom segment.

use crate::{Error, Result};
use quicktip_types::{CUSTOM_SEGMENT, PRESET_PERCENTAGES, SEGMENT_COUNT, TipChoice};
use rust_decimal::Decimal;

/// Meaning of the segment at `index`.
///
/// # Errors
///
/// Returns [`Error::UnknownSegment`] for an index past the custom segment.
pub fn choice_for_segment(index: usize) -> Result<TipChoice> {
    if index == CUSTOM_SEGMENT {
        return Ok(TipChoice::Custom);
    }
    PRESET_PERCENTAGES
        .get(index)
        .map(|&percent| TipChoice::Percent {
            percent: Decimal::from(percent),
        })
        .ok_or(Error::UnknownSegment(index))
}

/// All segments in display order.
#[must_use]
pub fn segment_choices() -> Vec<TipChoice> {
    (0..SEGMENT_COUNT)
        .filter_map(|index| choice_for_segment(index).ok())
        .collect()
}

/// Segment index of a preset percentage, if it is one.
#[must_use]
pub fn segment_for_percent(percent: Decimal) -> Option<usize> {
    PRESET_PERCENTAGES
        .iter()
        .position(|&preset| Decimal::from(preset) == percent)
}
