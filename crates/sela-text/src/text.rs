use core::fmt;
use core::ops::Deref;

/// Logical-order text as fixed-width wide units.
///
/// Each unit is a 32-bit value. Units are usually Unicode scalar values,
/// but the lossy decode fallback and glyph-id output from shaping can
/// produce values that are not, so the type does not promise validity.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct WideText(Vec<u32>);

impl WideText {
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn from_units(units: Vec<u32>) -> Self {
        Self(units)
    }

    pub fn units(&self) -> &[u32] {
        &self.0
    }

    pub fn into_units(self) -> Vec<u32> {
        self.0
    }

    /// Iterate the units that are valid scalar values, replacing the rest
    /// with U+FFFD.
    pub fn chars_lossy(&self) -> impl Iterator<Item = char> + '_ {
        self.0
            .iter()
            .map(|&u| char::from_u32(u).unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    pub fn to_string_lossy(&self) -> String {
        self.chars_lossy().collect()
    }

    /// Convert to a `String` if every unit is a scalar value.
    pub fn to_string_strict(&self) -> Option<String> {
        self.0.iter().map(|&u| char::from_u32(u)).collect()
    }
}

impl Deref for WideText {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        &self.0
    }
}

impl From<&str> for WideText {
    fn from(s: &str) -> Self {
        s.chars().collect()
    }
}

impl From<Vec<u32>> for WideText {
    fn from(units: Vec<u32>) -> Self {
        Self(units)
    }
}

impl FromIterator<char> for WideText {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self(iter.into_iter().map(u32::from).collect())
    }
}

impl FromIterator<u32> for WideText {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Debug for WideText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WideText({:?})", self.to_string_lossy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_yields_one_unit_per_char() {
        let text = WideText::from("aب1");
        assert_eq!(text.units(), &[0x61, 0x0628, 0x31]);
    }

    #[test]
    fn strict_conversion_rejects_surrogates() {
        let text = WideText::from_units(vec![0x61, 0xD800]);
        assert_eq!(text.to_string_strict(), None);
        assert_eq!(text.to_string_lossy(), "a\u{FFFD}");
    }
}
