/// Raw query string pairs as axum decodes them.
pub type QueryPairs = Vec<(String, String)>;

/// Value of `name`; repeated occurrences are joined with `,`.
///
/// An empty value counts as absent.
pub fn param(pairs: &[(String, String)], name: &str) -> Option<String> {
    let values: Vec<&str> = pairs
        .iter()
        .filter(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
        .collect();

    match values.as_slice() {
        [] => None,
        [single] if single.is_empty() => None,
        _ => Some(values.join(",")),
    }
}
