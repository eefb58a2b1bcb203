//! Bracket mirroring for characters that land on a right-to-left level.
//!
//! Covers ASCII brackets and the common guillemets; full Unicode
//! Bidi_Mirroring_Glyph data is not consulted.

/// Return the mirrored counterpart of a paired bracket.
///
/// If `ch` does not have a known mirror, it is returned unchanged.
pub fn mirrored_bracket(ch: char) -> char {
    match ch {
        '(' => ')',
        ')' => '(',
        '[' => ']',
        ']' => '[',
        '{' => '}',
        '}' => '{',
        '<' => '>',
        '>' => '<',
        '«' => '»',
        '»' => '«',
        '‹' => '›',
        '›' => '‹',
        _ => ch,
    }
}
