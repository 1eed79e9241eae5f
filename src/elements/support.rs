//! Support conditions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of support restraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportKind {
    /// Restrains translation, free to rotate
    Pin,
    /// Restrains vertical translation only
    Roller,
    /// Restrains translation and rotation
    Fixed,
}

impl SupportKind {
    /// Whether this support develops a reaction moment
    pub fn restrains_rotation(&self) -> bool {
        matches!(self, SupportKind::Fixed)
    }

    /// Wire name of the support kind
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportKind::Pin => "pin",
            SupportKind::Roller => "roller",
            SupportKind::Fixed => "fixed",
        }
    }

    /// Parse a wire name (case-insensitive)
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "pin" | "pinned" => Some(SupportKind::Pin),
            "roller" => Some(SupportKind::Roller),
            "fixed" => Some(SupportKind::Fixed),
            _ => None,
        }
    }
}

impl fmt::Display for SupportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A support at a position along the beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Support {
    /// Support kind
    pub kind: SupportKind,
    /// Distance from the left end of the beam
    pub position: f64,
}

impl Support {
    /// Create a new support
    pub fn new(kind: SupportKind, position: f64) -> Self {
        Self { kind, position }
    }

    /// Create a pinned support
    pub fn pin(position: f64) -> Self {
        Self::new(SupportKind::Pin, position)
    }

    /// Create a roller support
    pub fn roller(position: f64) -> Self {
        Self::new(SupportKind::Roller, position)
    }

    /// Create a fixed support
    pub fn fixed(position: f64) -> Self {
        Self::new(SupportKind::Fixed, position)
    }
}
