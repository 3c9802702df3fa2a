pub mod health;
pub mod memo;
