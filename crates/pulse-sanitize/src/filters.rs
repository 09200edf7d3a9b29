//! Filter sanitization.
//!
//! Raw, stringly-typed filter input becomes validated [`Filters`]:
//! string sets are lower-cased and sanitized element-wise, the date
//! range is coerced to the default on anything outside the fixed
//! vocabulary. Invalid input is never an error at this layer.

use std::collections::BTreeSet;

use pulse_core::{DateRange, Filters, RawFilters};

use crate::text::sanitize_text;

/// Sanitize raw filter input into validated filter state.
pub fn sanitize_filters(raw: &RawFilters) -> Filters {
    Filters {
        date_range: DateRange::parse_lenient(&raw.date_range),
        category: sanitize_set(&raw.category),
        region: sanitize_set(&raw.region),
        user_type: sanitize_set(&raw.user_type),
    }
}

fn sanitize_set(values: &[String]) -> BTreeSet<String> {
    values
        .iter()
        .map(|v| sanitize_text(&v.to_lowercase()))
        .filter(|v| !v.is_empty())
        .collect()
}
