//! URI template placeholder rewriting.

/// Rewrites `{name}` into `:name` for each name, first occurrence only.
///
/// Placeholders that are not named are left as they are.
pub fn rewrite_placeholders<'a, I>(template: &str, names: I) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    names.into_iter().fold(template.to_string(), |uri, name| {
        uri.replacen(&format!("{{{}}}", name), &format!(":{}", name), 1)
    })
}
