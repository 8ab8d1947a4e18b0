//! Hook name and slug derivation.

/// Derive the hook name from a docs file name.
///
/// The docs generator emits one `<hookName>.md` file per hook, so the hook
/// name is the file name minus its last three characters. Names shorter than
/// three characters collapse to the empty string.
pub fn hook_name(file_name: &str) -> String {
    let keep = file_name.chars().count().saturating_sub(3);
    file_name.chars().take(keep).collect()
}

/// Convert a camel-case or Pascal-case hook name to a documentation slug.
///
/// A hyphen is inserted before every uppercase letter (except a leading one)
/// and the result is lowercased: `useSetState` becomes `use-set-state`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len() + 4);

    for c in name.chars() {
        if c.is_ascii_uppercase() {
            if !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c.to_ascii_lowercase());
        } else {
            slug.extend(c.to_lowercase());
        }
    }

    slug
}
