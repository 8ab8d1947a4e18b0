//! Annotation block rendering and insertion.

/// Render the links block for a hook.
///
/// The block is a two-item markdown list: the hook's page on the external
/// documentation site (keyed by slug) and its source file in the upstream
/// repository (keyed by the original hook name).
pub fn annotation_block(
    docs_base_url: &str,
    source_base_url: &str,
    slug: &str,
    name: &str,
) -> String {
    format!(
        "\n- [Documentation]({}/{})\n\n- [Source]({}/{}/index.ts)\n",
        docs_base_url.trim_end_matches('/'),
        slug,
        source_base_url.trim_end_matches('/'),
        name,
    )
}

/// Insert `block` immediately after the first newline in `content`.
///
/// Returns `None` when the content has no newline to anchor on. Callers are
/// expected to leave such files untouched rather than append.
pub fn insert_after_first_newline(content: &str, block: &str) -> Option<String> {
    let pos = content.find('\n')?;

    let mut out = String::with_capacity(content.len() + block.len());
    out.push_str(&content[..=pos]);
    out.push_str(block);
    out.push_str(&content[pos + 1..]);

    Some(out)
}
