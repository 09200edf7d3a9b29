//! Dashboard state store.
//!
//! All state mutations flow through typed [`Action`]s applied by the pure
//! [`reduce`] function. The [`Store`] handle owns the single mutable
//! [`DashboardState`] aggregate and publishes every post-dispatch state on
//! a watch channel so consumers can read it reactively.

pub mod state;
pub mod store;

pub use state::{reduce, Action, DashboardState};
pub use store::Store;
