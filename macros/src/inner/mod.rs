//! Macros used by capmath itself.

pub mod depth;
