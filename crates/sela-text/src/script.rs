//! Script classification of wide units.
//!
//! Ranges are fixed Unicode block boundaries; no property tables are
//! consulted.

/// Coarse script class of a single unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptClass {
    Arabic,
    /// ASCII or (Extended) Arabic-Indic digit. Arabic-Indic digits live in
    /// the Arabic block, so they also satisfy [`is_arabic_script`].
    Digit,
    Other,
}

impl ScriptClass {
    pub const fn of(unit: u32) -> Self {
        if is_digit(unit) {
            ScriptClass::Digit
        } else if is_arabic_script(unit) {
            ScriptClass::Arabic
        } else {
            ScriptClass::Other
        }
    }
}

/// Returns `true` if `unit` falls in one of the Arabic script blocks.
pub const fn is_arabic_script(unit: u32) -> bool {
    matches!(
        unit,
        0x0600..=0x06FF     // Arabic
            | 0x0750..=0x077F // Arabic Supplement
            | 0x08A0..=0x08FF // Arabic Extended-A
            | 0xFB50..=0xFDFF // Arabic Presentation Forms-A
            | 0xFE70..=0xFEFF // Arabic Presentation Forms-B
    )
}

/// Returns `true` for ASCII, Arabic-Indic and Extended Arabic-Indic digits.
pub const fn is_digit(unit: u32) -> bool {
    matches!(unit, 0x30..=0x39 | 0x0660..=0x0669 | 0x06F0..=0x06F9)
}

pub fn contains_arabic_script(text: &[u32]) -> bool {
    text.iter().any(|&u| is_arabic_script(u))
}
