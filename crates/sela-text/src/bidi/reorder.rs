use unicode_bidi::{BidiInfo, Level};

use crate::bidi::{ParagraphDirection, mirrored_bracket};
use crate::{EngineError, WideText};

/// Visual-order output of a bidi engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reordered {
    /// Units in visual order, bracket-mirrored on right-to-left levels.
    pub visual: WideText,
    /// `order[v]` is the logical index of the unit shown at visual index `v`.
    pub order: Vec<usize>,
    /// Highest embedding level in the text. Zero means nothing moves.
    pub max_level: u8,
}

/// Computes visual order from logical order and a forced paragraph
/// direction.
pub trait BidiEngine {
    fn reorder(
        &self,
        text: &[u32],
        direction: ParagraphDirection,
    ) -> Result<Reordered, EngineError>;
}

/// [`BidiEngine`] backed by the UAX-9 implementation in `unicode-bidi`.
///
/// Text containing paragraph separators is reordered paragraph by
/// paragraph, each with the same forced base direction.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeBidiEngine;

impl BidiEngine for UnicodeBidiEngine {
    fn reorder(
        &self,
        text: &[u32],
        direction: ParagraphDirection,
    ) -> Result<Reordered, EngineError> {
        let chars = text
            .iter()
            .map(|&u| char::from_u32(u).ok_or(EngineError::InvalidCodepoint(u)))
            .collect::<Result<Vec<char>, _>>()?;
        let s: String = chars.iter().collect();

        let info = BidiInfo::new(&s, Some(direction.to_level()));
        let max_level = info.levels.iter().map(Level::number).max().unwrap_or(0);
        if max_level == 0 {
            return Ok(Reordered {
                visual: WideText::from_units(text.to_vec()),
                order: (0..text.len()).collect(),
                max_level,
            });
        }

        let mut visual = Vec::with_capacity(chars.len());
        let mut order = Vec::with_capacity(chars.len());
        let mut char_cursor = 0usize;
        for para in &info.paragraphs {
            let para_chars = s[para.range.clone()].chars().count();
            // Levels for the whole text with line rules applied to this
            // paragraph; only this paragraph's slice is meaningful.
            let levels = info.reordered_levels_per_char(para, para.range.clone());
            let para_levels = levels
                .get(char_cursor..char_cursor + para_chars)
                .ok_or_else(|| EngineError::Reorder("level count mismatch".into()))?;

            for logical in BidiInfo::reorder_visual(para_levels) {
                let ch = chars[char_cursor + logical];
                let ch = if para_levels[logical].is_rtl() {
                    mirrored_bracket(ch)
                } else {
                    ch
                };
                visual.push(u32::from(ch));
                order.push(char_cursor + logical);
            }
            char_cursor += para_chars;
        }

        if visual.len() != text.len() {
            return Err(EngineError::Reorder(format!(
                "visual length {} differs from logical length {}",
                visual.len(),
                text.len()
            )));
        }

        Ok(Reordered {
            visual: WideText::from_units(visual),
            order,
            max_level,
        })
    }
}
