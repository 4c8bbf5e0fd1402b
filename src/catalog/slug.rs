//! Name to slug transform used for variety URLs.

use crate::error::CatalogError;

/// Lower-case `name`, collapse every run of characters outside `[a-z0-9]`
/// into a single hyphen, and strip hyphens from both ends.
///
/// A name without any ASCII alphanumerics produces an empty slug; catalog
/// construction rejects those.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// True when `slug` is non-empty lowercase kebab-case.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

pub(crate) fn validate_slug(what: &'static str, slug: &str) -> Result<(), CatalogError> {
    if is_valid_slug(slug) {
        Ok(())
    } else {
        Err(CatalogError::InvalidSlug {
            what,
            value: slug.to_string(),
        })
    }
}
