//! Common utility functions shared across the codebase.

/// Uppercases the first character of `text` and leaves the rest untouched.
///
/// # Examples
///
/// ```
/// use resgen::utils::capitalize_first;
///
/// assert_eq!(capitalize_first("capatect"), "Capatect");
/// assert_eq!(capitalize_first("nlNL"), "NlNL");
/// assert_eq!(capitalize_first("_"), "_");
/// assert_eq!(capitalize_first(""), "");
/// ```
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
