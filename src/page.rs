//! Route resolution into page descriptors.
//!
//! `resolve` is the single place where every `Route` variant is matched, so a
//! new route cannot be added without deciding what page it produces. The
//! descriptors borrow from the route and the catalog; nothing is cached and
//! resolving the same route twice yields equal values.

use crate::catalog::{CatalogRepository, CategoryTitle, Season, Variety};
use crate::routing::Route;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// One season's column on the products index.
pub struct SeasonIndex<'a> {
    pub season: Season,
    pub label: &'static str,
    pub groups: &'a [CategoryTitle],
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageDescriptor<'a> {
    HomePage,
    ProductsIndexPage {
        winter: SeasonIndex<'a>,
        spring: SeasonIndex<'a>,
    },
    /// Listing for one group. Unknown groups produce an empty listing titled
    /// with the raw group id.
    GroupPage {
        group: &'a str,
        title: &'a str,
        varieties: &'a [Variety],
    },
    VarietyPage {
        group: &'a str,
        title: &'a str,
        variety: &'a Variety,
    },
    VarietyNotFound {
        group: &'a str,
        slug: &'a str,
    },
    ContactsPage,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub label: String,
    pub route: Route,
}

impl PageLink {
    fn new(label: impl Into<String>, route: Route) -> Self {
        Self {
            label: label.into(),
            route,
        }
    }

    pub fn href(&self) -> String {
        self.route.href()
    }
}

/// Resolve `route` against `catalog`. Total: unknown paths fall back to the
/// home page and catalog misses become data, never errors.
pub fn resolve<'a>(route: &'a Route, catalog: &'a CatalogRepository) -> PageDescriptor<'a> {
    match route {
        Route::Home | Route::Unknown { .. } => PageDescriptor::HomePage,
        Route::ProductsIndex => PageDescriptor::ProductsIndexPage {
            winter: season_index(catalog, Season::Winter),
            spring: season_index(catalog, Season::Spring),
        },
        Route::ProductsGroup { group } => PageDescriptor::GroupPage {
            group,
            title: catalog.title_of(group).unwrap_or(group),
            varieties: catalog.varieties_of(group),
        },
        Route::ProductsVariety { group, slug } => match catalog.find_variety(group, slug) {
            Some(variety) => PageDescriptor::VarietyPage {
                group,
                title: catalog.title_of(group).unwrap_or(group),
                variety,
            },
            None => PageDescriptor::VarietyNotFound { group, slug },
        },
        Route::Contacts => PageDescriptor::ContactsPage,
    }
}

fn season_index(catalog: &CatalogRepository, season: Season) -> SeasonIndex<'_> {
    SeasonIndex {
        season,
        label: season.label(),
        groups: catalog.category_titles(season),
    }
}

/// Site-wide navigation shown on every page.
pub fn nav_links() -> Vec<PageLink> {
    vec![
        PageLink::new("Home", Route::Home),
        PageLink::new("Products", Route::ProductsIndex),
        PageLink::new("Contacts", Route::Contacts),
    ]
}

impl PageDescriptor<'_> {
    /// Short machine name of the page kind.
    pub fn kind(&self) -> &'static str {
        match self {
            PageDescriptor::HomePage => "home_page",
            PageDescriptor::ProductsIndexPage { .. } => "products_index_page",
            PageDescriptor::GroupPage { .. } => "group_page",
            PageDescriptor::VarietyPage { .. } => "variety_page",
            PageDescriptor::VarietyNotFound { .. } => "variety_not_found",
            PageDescriptor::ContactsPage => "contacts_page",
        }
    }

    /// Page-specific links. Group and variety links are built from the group
    /// the page was resolved under, never by searching the catalog for a slug.
    pub fn links(&self) -> Vec<PageLink> {
        match self {
            PageDescriptor::HomePage | PageDescriptor::ContactsPage => Vec::new(),
            PageDescriptor::ProductsIndexPage { winter, spring } => winter
                .groups
                .iter()
                .chain(spring.groups.iter())
                .map(|entry| PageLink::new(entry.title.clone(), Route::group(entry.id.as_str())))
                .collect(),
            PageDescriptor::GroupPage {
                group, varieties, ..
            } => varieties
                .iter()
                .map(|variety| {
                    PageLink::new(variety.name.clone(), Route::variety(*group, &variety.slug))
                })
                .collect(),
            PageDescriptor::VarietyPage { group, .. } => vec![
                PageLink::new("Back to group", Route::group(*group)),
                PageLink::new("Return to products", Route::ProductsIndex),
            ],
            PageDescriptor::VarietyNotFound { .. } => {
                vec![PageLink::new("Return to products", Route::ProductsIndex)]
            }
        }
    }
}
