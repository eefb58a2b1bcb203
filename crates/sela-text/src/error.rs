use thiserror::Error;

use crate::WideText;

/// Failure reported by a bidi or shaping engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("shaping buffer could not be allocated")]
    AllocationFailure,
    #[error("font rejected by shaping engine: {0}")]
    BindFailure(String),
    #[error("unit {0:#X} is not a Unicode scalar value")]
    InvalidCodepoint(u32),
    #[error("bidi reordering failed: {0}")]
    Reorder(String),
    #[error("shaping failed: {0}")]
    Shape(String),
}

/// Strict UTF-8 <-> wide conversion failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("invalid UTF-8 after {valid_up_to} bytes")]
    InvalidUtf8 { valid_up_to: usize },
    #[error("unit {unit:#X} at index {index} is not a Unicode scalar value")]
    InvalidScalar { index: usize, unit: u32 },
}

/// Why a stage handed its input back untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnchangedReason {
    Empty,
    NoArabicScript,
    NotInitialized,
    /// The bidi engine resolved every character to level 0.
    NoReorderingNeeded,
    EmptyShapeResult,
    Engine(EngineError),
}

/// Result of a pipeline stage.
///
/// Stages never fail outright: text that cannot be processed is returned
/// as-is so it still renders. `Unchanged` records the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Processed(WideText),
    Unchanged {
        text: WideText,
        reason: UnchangedReason,
    },
}

impl Outcome {
    pub(crate) fn unchanged(text: &WideText, reason: UnchangedReason) -> Self {
        Outcome::Unchanged {
            text: text.clone(),
            reason,
        }
    }

    pub fn text(&self) -> &WideText {
        match self {
            Outcome::Processed(text) | Outcome::Unchanged { text, .. } => text,
        }
    }

    pub fn into_text(self) -> WideText {
        match self {
            Outcome::Processed(text) | Outcome::Unchanged { text, .. } => text,
        }
    }

    pub fn is_processed(&self) -> bool {
        matches!(self, Outcome::Processed(_))
    }

    pub fn reason(&self) -> Option<&UnchangedReason> {
        match self {
            Outcome::Processed(_) => None,
            Outcome::Unchanged { reason, .. } => Some(reason),
        }
    }
}
