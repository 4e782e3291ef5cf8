// Class-string helpers shared by the button components

/// Joins class fragments with single spaces, in order.
///
/// Each fragment may hold several whitespace-separated tokens; blank
/// fragments are skipped and nothing is deduplicated, so a later fragment
/// can only add to the earlier ones.
pub fn merge_classes(parts: &[&str]) -> String {
    parts
        .iter()
        .flat_map(|part| part.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Iterates the tokens of a `class` attribute value.
pub fn class_tokens(class_attr: &str) -> impl Iterator<Item = &str> {
    class_attr.split_whitespace()
}

/// True when every token of `wanted` is present in `class_attr`.
///
/// An empty `wanted` never matches.
pub fn has_classes(class_attr: &str, wanted: &str) -> bool {
    let mut wanted = wanted.split_whitespace().peekable();
    if wanted.peek().is_none() {
        return false;
    }
    wanted.all(|token| class_tokens(class_attr).any(|have| have == token))
}
