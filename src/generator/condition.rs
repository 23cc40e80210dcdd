//! Condition normalization.
//!
//! Manifest conditions are written in free text (`WIN32 and not APPLE`).
//! CMake only recognizes its logical operators in upper case, so recognized
//! operator tokens are upper-cased and everything else is left alone. No
//! validation happens here; malformed expressions are rejected by CMake.

/// Operators rewritten to their canonical upper-case form.
pub const OPERATORS: &[&str] = &[
    "and", "or", "not", "exists", "strequal", "less", "greater", "matches",
];

/// Normalize a condition expression.
///
/// Tokens are split on whitespace and rejoined with single spaces.
pub fn normalize(condition: &str) -> String {
    condition
        .split_whitespace()
        .map(|token| {
            if OPERATORS.iter().any(|op| op.eq_ignore_ascii_case(token)) {
                token.to_ascii_uppercase()
            } else {
                token.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
