//! Support pattern classification

use crate::elements::{Support, SupportKind};

use super::SupportPolicy;

/// The closed-form rule a set of supports maps to
#[derive(Debug, Clone, PartialEq)]
pub enum BeamSupportPattern {
    /// Fixed at one support, free elsewhere
    Cantilever { fixed: Support },
    /// Pinned at one support, on a roller at another
    SimplySupported { pin: Support, roller: Support },
    /// No closed-form rule applies
    Unsupported(String),
}

impl BeamSupportPattern {
    /// Classify a support list
    pub fn classify(supports: &[Support], policy: SupportPolicy) -> Self {
        match policy {
            SupportPolicy::Strict => Self::classify_strict(supports),
            SupportPolicy::FirstOfEachKind => Self::classify_first_of_each_kind(supports),
        }
    }

    /// Short name of the pattern
    pub fn name(&self) -> &'static str {
        match self {
            BeamSupportPattern::Cantilever { .. } => "cantilever",
            BeamSupportPattern::SimplySupported { .. } => "simply supported",
            BeamSupportPattern::Unsupported(_) => "unsupported",
        }
    }

    fn classify_strict(supports: &[Support]) -> Self {
        match supports {
            [] => Self::Unsupported("no supports".to_string()),
            [s] if s.kind == SupportKind::Fixed => Self::Cantilever { fixed: *s },
            [a, b] => match (a.kind, b.kind) {
                (SupportKind::Pin, SupportKind::Roller) => {
                    Self::SimplySupported { pin: *a, roller: *b }
                }
                (SupportKind::Roller, SupportKind::Pin) => {
                    Self::SimplySupported { pin: *b, roller: *a }
                }
                _ => Self::Unsupported(describe(supports)),
            },
            _ => Self::Unsupported(describe(supports)),
        }
    }

    fn classify_first_of_each_kind(supports: &[Support]) -> Self {
        let first = |kind: SupportKind| supports.iter().find(|s| s.kind == kind).copied();

        if let Some(fixed) = first(SupportKind::Fixed) {
            return Self::Cantilever { fixed };
        }
        match (first(SupportKind::Pin), first(SupportKind::Roller)) {
            (Some(pin), Some(roller)) => Self::SimplySupported { pin, roller },
            _ => Self::Unsupported(describe(supports)),
        }
    }
}

/// Human-readable summary of a support list, e.g. "2 roller supports"
fn describe(supports: &[Support]) -> String {
    if supports.is_empty() {
        return "no supports".to_string();
    }

    let count = |kind: SupportKind| supports.iter().filter(|s| s.kind == kind).count();
    let parts: Vec<String> = [SupportKind::Fixed, SupportKind::Pin, SupportKind::Roller]
        .into_iter()
        .filter_map(|kind| match count(kind) {
            0 => None,
            1 => Some(format!("1 {kind} support")),
            n => Some(format!("{n} {kind} supports")),
        })
        .collect();

    let summary = parts.join(" + ");
    if supports.len() > 2 || (supports.len() == 2 && count(SupportKind::Fixed) > 0) {
        format!("{summary} (statically indeterminate)")
    } else {
        format!("{summary} (unstable or unrecognised)")
    }
}
