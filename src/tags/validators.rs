//! Attribute validators
//!
//! Small pure predicates over a raw attribute value. They never fail;
//! `false` just means the value does not conform.

use std::sync::LazyLock;

use regex::Regex;

/// `width,height`. Only the start of the value is matched, so trailing
/// text after the second number is tolerated.
static IMAGE_SIZE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[0-9]+,[0-9]+").ok());

/// Membership test against a fixed set of literals
pub fn one_of(value: &str, choices: &[&str]) -> bool {
    choices.contains(&value)
}

/// Alignment modes
pub fn alignment(value: &str) -> bool {
    one_of(value, &["left", "center", "right"])
}

/// Font size levels 1 through 6
pub fn font_size(value: &str) -> bool {
    one_of(value, &["1", "2", "3", "4", "5", "6"])
}

/// The list toggle only knows `1` (ordered)
pub fn list_style(value: &str) -> bool {
    value == "1"
}

/// Image dimensions
pub fn image_size(value: &str) -> bool {
    IMAGE_SIZE
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(value))
}
