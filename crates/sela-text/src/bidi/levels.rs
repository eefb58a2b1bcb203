use unicode_bidi::{LTR_LEVEL, Level, RTL_LEVEL};

use crate::script::contains_arabic_script;

/// Base direction forced onto a paragraph before reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphDirection {
    Ltr,
    Rtl,
}

impl ParagraphDirection {
    /// Right-to-left as soon as any Arabic-script unit is present.
    pub fn for_text(text: &[u32]) -> Self {
        if contains_arabic_script(text) {
            ParagraphDirection::Rtl
        } else {
            ParagraphDirection::Ltr
        }
    }

    pub fn to_level(self) -> Level {
        match self {
            ParagraphDirection::Ltr => LTR_LEVEL,
            ParagraphDirection::Rtl => RTL_LEVEL,
        }
    }
}
