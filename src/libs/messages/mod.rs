//! User-facing messages and the macros that print them.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
