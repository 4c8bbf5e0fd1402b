//! Route grammar for hash-fragment paths.
//!
//! | path                        | route             |
//! |-----------------------------|-------------------|
//! | `/`                         | `Home`            |
//! | `/products`                 | `ProductsIndex`   |
//! | `/products/<group>`         | `ProductsGroup`   |
//! | `/products/<group>/<slug>`  | `ProductsVariety` |
//! | `/contacts`                 | `Contacts`        |
//!
//! Anything else, including the empty string, parses to `Unknown` carrying
//! the raw input. Parsing never fails.

use crate::catalog::CatalogRepository;
use serde::Serialize;
use std::fmt;

const PRODUCTS_PREFIX: &str = "/products/";

/// Marker that precedes a path inside a URL fragment.
pub const FRAGMENT_MARKER: char = '#';

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    Home,
    ProductsIndex,
    ProductsGroup { group: String },
    ProductsVariety { group: String, slug: String },
    Contacts,
    Unknown { raw_path: String },
}

impl Route {
    pub fn parse(path: &str) -> Self {
        match path {
            "/" => Route::Home,
            "/products" => Route::ProductsIndex,
            "/contacts" => Route::Contacts,
            _ => parse_products(path).unwrap_or_else(|| Route::Unknown {
                raw_path: path.to_string(),
            }),
        }
    }

    /// Parse a raw fragment such as `#/products`, dropping one leading `#`.
    pub fn from_fragment(fragment: &str) -> Self {
        Self::parse(strip_marker(fragment))
    }

    /// Canonical path for this route. `Unknown` renders its raw input.
    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::ProductsIndex => "/products".to_string(),
            Route::ProductsGroup { group } => format!("{PRODUCTS_PREFIX}{group}"),
            Route::ProductsVariety { group, slug } => format!("{PRODUCTS_PREFIX}{group}/{slug}"),
            Route::Contacts => "/contacts".to_string(),
            Route::Unknown { raw_path } => raw_path.clone(),
        }
    }

    /// Link target for this route, e.g. `#/products/oats`.
    pub fn href(&self) -> String {
        format!("{FRAGMENT_MARKER}{}", self.to_path())
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Route::Unknown { .. })
    }

    pub fn group(group: impl Into<String>) -> Self {
        Route::ProductsGroup {
            group: group.into(),
        }
    }

    pub fn variety(group: impl Into<String>, slug: impl Into<String>) -> Self {
        Route::ProductsVariety {
            group: group.into(),
            slug: slug.into(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

pub(crate) fn strip_marker(fragment: &str) -> &str {
    fragment.strip_prefix(FRAGMENT_MARKER).unwrap_or(fragment)
}

fn parse_products(path: &str) -> Option<Route> {
    let rest = path.strip_prefix(PRODUCTS_PREFIX)?;
    let mut segments = rest.split('/');
    let group = segments.next().filter(|segment| !segment.is_empty())?;
    match (segments.next(), segments.next()) {
        (None, _) => Some(Route::group(group)),
        (Some(slug), None) if !slug.is_empty() => Some(Route::variety(group, slug)),
        _ => None,
    }
}

/// Every route the catalog can answer with a real page, in navigation order:
/// top-level pages, then each merged category followed by its varieties.
pub fn addressable_routes(catalog: &CatalogRepository) -> Vec<Route> {
    let mut routes = vec![Route::Home, Route::ProductsIndex];
    for category in catalog.categories() {
        routes.push(Route::group(category.id.as_str()));
        routes.extend(
            category
                .varieties
                .iter()
                .map(|variety| Route::variety(category.id.as_str(), variety.slug.as_str())),
        );
    }
    routes.push(Route::Contacts);
    routes
}
