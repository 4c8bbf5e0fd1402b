//! Seed catalog behind a hash-fragment router.
//!
//! A navigation change flows through four stages:
//! [`RouteStore`] observes the fragment, [`Route::parse`] types it,
//! [`resolve`] looks it up in the [`CatalogRepository`], and the resulting
//! [`PageDescriptor`] is handed to whatever renders pages.

pub mod catalog;
pub mod config;
pub mod error;
pub mod page;
pub mod routing;
pub mod schema_loader;
pub mod telemetry;

pub use catalog::{
    CatalogDocument, CatalogRepository, Category, CategoryId, CategoryTitle, Contact,
    MergePolicy, Phone, Season, SiteInfo, Variety, is_valid_slug, load_catalog_from_path,
    parse_catalog, slugify,
};
pub use config::SiteConfig;
pub use error::CatalogError;
pub use page::{PageDescriptor, PageLink, SeasonIndex, nav_links, resolve};
pub use routing::{
    MemoryNavigator, NavigationEvent, Navigator, Route, RouteStore, SubscriptionId,
    addressable_routes,
};
