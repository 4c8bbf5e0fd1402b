//! Hash-fragment routing: grammar, navigation seam and reactive store.

pub mod navigator;
pub mod route;
pub mod store;

pub use navigator::{ListenerId, MemoryNavigator, NavigationEvent, NavigationListener, Navigator};
pub use route::{FRAGMENT_MARKER, Route, addressable_routes};
pub use store::{HOME_FRAGMENT, RouteObserver, RouteStore, SubscriptionId};
