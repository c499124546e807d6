//! Password strength heuristics.
use serde::Serialize;
use std::fmt;
use zxcvbn::{zxcvbn, Entropy};

/// Highest score a password can be awarded.
pub const MAX_SCORE: u8 = 8;

/// Strength category derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum StrengthLabel {
    /// Score of zero.
    VeryWeak,
    /// Score of one or two.
    Weak,
    /// Score of three or four.
    Medium,
    /// Score of five or six.
    Strong,
    /// Score of seven or more.
    VeryStrong,
}

impl From<u8> for StrengthLabel {
    fn from(score: u8) -> Self {
        match score {
            7.. => Self::VeryStrong,
            5..=6 => Self::Strong,
            3..=4 => Self::Medium,
            1..=2 => Self::Weak,
            0 => Self::VeryWeak,
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::VeryWeak => "Very Weak",
                Self::Weak => "Weak",
                Self::Medium => "Medium",
                Self::Strong => "Strong",
                Self::VeryStrong => "Very Strong",
            }
        )
    }
}

/// Result of scoring a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthReport {
    /// Sum of the points awarded, at most [MAX_SCORE].
    pub score: u8,
    /// Category for the score.
    pub label: StrengthLabel,
    /// Advice for every check that failed, in check order.
    pub suggestions: Vec<String>,
}

/// Score a password with simple composition checks.
///
/// | Check                             | Points  |
/// |-----------------------------------|---------|
/// | 12 or more characters             | 2       |
/// | 8 to 11 characters                | 1       |
/// | lowercase letter                  | 1       |
/// | uppercase letter                  | 1       |
/// | digit                             | 1       |
/// | character other than `[a-zA-Z0-9]`| 2       |
/// | no run of 3 identical characters  | 1       |
///
/// Total over every input; the empty string scores one as it has no
/// repeated run.
pub fn check_strength(password: &str) -> StrengthReport {
    let mut score = 0;
    let mut suggestions = Vec::new();
    let mut check = |passed: bool, points: u8, advice: &str| {
        if passed {
            score += points;
        } else {
            suggestions.push(advice.to_owned());
        }
    };

    let length = password.chars().count();
    check(
        length >= 8,
        if length >= 12 { 2 } else { 1 },
        "Use at least 8 characters",
    );
    check(
        password.chars().any(|c| c.is_ascii_lowercase()),
        1,
        "Include lowercase letters",
    );
    check(
        password.chars().any(|c| c.is_ascii_uppercase()),
        1,
        "Include uppercase letters",
    );
    check(
        password.chars().any(|c| c.is_ascii_digit()),
        1,
        "Include numbers",
    );
    check(
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
        2,
        "Include special characters",
    );
    check(!has_repeated_run(password, 3), 1, "Avoid repeated characters");

    StrengthReport {
        score,
        label: score.into(),
        suggestions,
    }
}

/// Line terminators never form part of a repeated run.
const LINE_TERMINATORS: &[char] = &['\n', '\r', '\u{2028}', '\u{2029}'];

/// Whether `password` contains `run` identical consecutive characters.
fn has_repeated_run(password: &str, run: usize) -> bool {
    let mut previous = None;
    let mut count = 0;
    for c in password.chars() {
        if LINE_TERMINATORS.contains(&c) {
            previous = None;
            count = 0;
        } else if previous == Some(c) {
            count += 1;
        } else {
            previous = Some(c);
            count = 1;
        }
        if count >= run {
            return true;
        }
    }
    false
}

/// Measure the entropy in a password.
pub fn measure_entropy(password: &str, user_inputs: &[&str]) -> Entropy {
    zxcvbn(password, user_inputs)
}
