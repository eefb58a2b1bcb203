//! Glyph shaping built on `harfrust`.

mod shaper;

pub use shaper::HarfrustShaper;

use crate::EngineError;

/// Logical direction of a shaped segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

/// Script tag for a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Latin,
    Arabic,
}

impl Script {
    /// ISO 15924 tag.
    pub const fn iso15924(self) -> &'static [u8; 4] {
        match self {
            Script::Latin => b"Latn",
            Script::Arabic => b"Arab",
        }
    }
}

/// Segment properties set on the shaping buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub direction: Direction,
    pub script: Script,
    /// BCP 47 language tag.
    pub language: &'static str,
}

impl Segment {
    /// Right-to-left Arabic, language `ar`. Applied to a whole string once
    /// any Arabic unit is present; script is not detected per character.
    pub const fn arabic() -> Self {
        Self {
            direction: Direction::RightToLeft,
            script: Script::Arabic,
            language: "ar",
        }
    }
}

/// A shaping engine session bound to at most one font at a time.
pub trait GlyphShaper {
    /// Font resource the engine binds to.
    type Font;

    /// Bind `font`, replacing any previous binding. On error the previous
    /// binding is left as it was.
    fn bind(&mut self, font: &Self::Font) -> Result<(), EngineError>;

    fn is_bound(&self) -> bool;

    /// Shape `text` (logical order) and return output glyph ids in engine
    /// order. Each input unit carries its logical index as cluster value.
    fn shape(&mut self, text: &[u32], segment: &Segment) -> Result<Vec<u32>, EngineError>;
}
