//! Event Handlers
//!
//! - keyboard: key events → App intents

pub mod keyboard;
