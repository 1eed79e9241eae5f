//! Structural elements module

mod support;

pub use support::{Support, SupportKind};
