//! Service layer sitting between HTTP handlers and the repositories.

pub mod memo;
