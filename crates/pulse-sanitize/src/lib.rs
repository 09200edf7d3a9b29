//! Display sanitization.
//!
//! Strips script-injection patterns from user-supplied filter values and
//! generated record labels before they reach the presentation layer.
//! Stripping is lossy by design (characters are removed, not escaped)
//! and idempotent: a second pass is always a no-op.

pub mod filters;
pub mod records;
pub mod text;

pub use filters::sanitize_filters;
pub use records::{sanitize_rows, sanitize_value};
pub use text::sanitize_text;
