//! Domain types shared by the memo storage and HTTP layers.
//!
//! Nothing in this crate performs I/O.

pub mod codes;
pub mod error;
pub mod memo;
pub mod types;
