//! Text helpers for stored prompt messages.

pub mod html;
pub mod placeholder;
