//! Request middleware composed around the memo routes.
//!
//! - [`rate_limit::enforce_rate_limit`] -- Per-route, per-client fixed-window limiting.

pub mod rate_limit;
