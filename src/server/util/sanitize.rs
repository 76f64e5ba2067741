//! Cleaning of user-submitted form text.

/// Trims surrounding whitespace and drops control characters.
///
/// Markup is kept as typed. Pages render through `rsx!`, which escapes text and
/// attribute values on output, so cleaning twice yields the same string.
pub fn clean(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| !c.is_control())
        .collect()
}
