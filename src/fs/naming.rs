//! Output filename generation.

/// Maximum length of a generated file stem, in characters.
const MAX_STEM_LENGTH: usize = 100;

/// Make a string safe to use as a file stem.
///
/// Every character that is not alphanumeric becomes `_`, trailing `_` are
/// trimmed and the result is cut to 100 characters.
pub fn make_safe_filename(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();

    replaced
        .trim_end_matches('_')
        .chars()
        .take(MAX_STEM_LENGTH)
        .collect()
}

/// Pick the output stem: the requested name, else the post title, else the
/// post identifier.
pub fn output_stem(requested: Option<&str>, title: &str, post_id: &str) -> String {
    [requested.unwrap_or_default(), title]
        .into_iter()
        .map(make_safe_filename)
        .find(|stem| !stem.is_empty())
        .unwrap_or_else(|| make_safe_filename(post_id))
}
