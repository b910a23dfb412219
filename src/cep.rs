use std::fmt;
use std::sync::LazyLock;
use regex::Regex;

/// number of digits in a complete CEP
pub const CEP_LEN: usize = 8;

// `\D` is unicode aware, so spell out the ASCII range.
static NON_DIGIT_REG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9]").unwrap());

/// Postal code as typed by the user, reduced to at most [`CEP_LEN`] ASCII digits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct InputCode(String);

impl InputCode {
    /// sanitize raw keystrokes: drop every non-digit, keep the leading 8 digits
    pub fn from_raw(raw: &str) -> Self {
        let mut digits = NON_DIGIT_REG.replace_all(raw, "").into_owned();
        // only ASCII digits are left, so byte truncation is safe
        digits.truncate(CEP_LEN);
        Self(digits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// the code, if it has exactly [`CEP_LEN`] digits
    pub fn complete(&self) -> Option<&str> {
        (self.0.len() == CEP_LEN).then_some(self.0.as_str())
    }
}

impl fmt::Display for InputCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
