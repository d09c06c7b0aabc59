//! `favicon.svg` generation.
//!
//! The avatar SVG is copied with the root `<svg>` tag's `width` and `height`
//! forced to a fixed size. This is textual surgery on the first `<svg ...>`
//! tag only, everything around that tag is kept byte for byte. No XML
//! parsing happens, so attribute values containing `>` are not supported.
//! When no root tag is found the source is copied unchanged.

use anyhow::{Context, Result};
use regex::{NoExpand, Regex};
use std::{path::Path, sync::LazyLock};

use crate::utils::fs::{ensure_parent_dir, write_file};

/// Declared `width`/`height` of the generated `favicon.svg`.
pub const FAVICON_SVG_SIZE: u32 = 48;

// ASCII-only classes: the regex crate is built without Unicode tables
static RE_ROOT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(?i-u:svg)(?-u:\b)[^>]*>").unwrap());
static RE_WIDTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?-u:\b)width="[^"]*""#).unwrap());
static RE_HEIGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?-u:\b)height="[^"]*""#).unwrap());

/// Write `svg` to `dest` with its root size set to `size`.
///
/// Falls back to a verbatim copy when the document has no `<svg>` tag.
pub fn write_favicon_svg(svg: &Path, dest: &Path, size: u32) -> Result<()> {
    let content = std::fs::read_to_string(svg)
        .with_context(|| format!("Failed to read `{}`", svg.display()))?;

    match rewrite_root_size(&content, size) {
        Some(rewritten) => write_file(dest, rewritten),
        None => {
            ensure_parent_dir(dest)?;
            std::fs::copy(svg, dest).with_context(|| {
                format!("Failed to copy `{}` to `{}`", svg.display(), dest.display())
            })?;
            Ok(())
        }
    }
}

/// Rewrite the first `<svg ...>` tag of `content`, or `None` if there is none.
pub fn rewrite_root_size(content: &str, size: u32) -> Option<String> {
    let found = RE_ROOT_TAG.find(content)?;

    let tag = set_attr(found.as_str(), &RE_WIDTH, "width", size);
    let tag = set_attr(&tag, &RE_HEIGHT, "height", size);

    let mut out = String::with_capacity(content.len() + 32);
    out.push_str(&content[..found.start()]);
    out.push_str(&tag);
    out.push_str(&content[found.end()..]);
    Some(out)
}

/// Replace every `name="..."` in `tag`, or append one before the closing.
fn set_attr(tag: &str, re: &Regex, name: &str, size: u32) -> String {
    let attr = format!(r#"{name}="{size}""#);

    if re.is_match(tag) {
        return re.replace_all(tag, NoExpand(&attr)).into_owned();
    }

    // Self-closing root keeps its `/>`
    let (head, closing) = match tag.strip_suffix("/>") {
        Some(head) => (head, "/>"),
        None => (&tag[..tag.len() - 1], ">"),
    };
    format!("{head} {attr}{closing}")
}
