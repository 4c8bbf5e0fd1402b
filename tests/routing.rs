// Route grammar and store behaviour driven through the in-memory navigator.
mod support;

use seedroute::{
    MemoryNavigator, Navigator, Route, RouteStore, addressable_routes, page::PageDescriptor,
    resolve,
};
use std::cell::RefCell;
use std::rc::Rc;

use support::bundled;

fn recorder<N: Navigator + 'static>(store: &RouteStore<N>) -> Rc<RefCell<Vec<Route>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |route| sink.borrow_mut().push(route.clone()));
    seen
}

#[test]
fn route_paths_round_trip() {
    let catalog = bundled();
    for route in addressable_routes(&catalog) {
        assert_eq!(Route::parse(&route.to_path()), route, "{route}");
        assert_eq!(Route::from_fragment(&route.href()), route);
    }
}

#[test]
fn malformed_paths_are_unknown() {
    for path in [
        "",
        "products",
        "/products/",
        "/products//dayn",
        "/products/oats/",
        "/products/oats/monida/extra",
        "/contacts/",
        "/bogus/x/y/z",
    ] {
        let route = Route::parse(path);
        assert_eq!(
            route,
            Route::Unknown {
                raw_path: path.to_string()
            },
            "{path:?}"
        );
    }
}

#[test]
fn addressable_routes_cover_every_variety() {
    let catalog = bundled();
    let routes = addressable_routes(&catalog);
    assert_eq!(routes.first(), Some(&Route::Home));
    assert_eq!(routes.last(), Some(&Route::Contacts));
    let variety_routes = routes
        .iter()
        .filter(|route| matches!(route, Route::ProductsVariety { .. }))
        .count();
    assert_eq!(variety_routes, catalog.variety_count());
    assert!(routes.contains(&Route::variety("hard-white-spring-wheat", "dayn")));
}

#[test]
fn startup_without_fragment_lands_on_home() {
    let navigator = Rc::new(MemoryNavigator::new());
    let store = RouteStore::attach(Rc::clone(&navigator));

    assert_eq!(store.current(), Route::Home);
    assert_eq!(navigator.current_fragment(), "#/");
    assert_eq!(navigator.history(), vec!["#/".to_string()]);
}

#[test]
fn startup_with_fragment_keeps_it() {
    let navigator = Rc::new(MemoryNavigator::with_fragment("#/products/oats"));
    let store = RouteStore::attach(Rc::clone(&navigator));

    assert_eq!(store.current(), Route::group("oats"));
    assert!(navigator.history().is_empty());
}

#[test]
fn navigation_sequence_resolves_to_expected_pages() {
    let catalog = bundled();
    let navigator = Rc::new(MemoryNavigator::new());
    let store = RouteStore::attach(Rc::clone(&navigator));
    let seen = recorder(&store);

    navigator.navigate("#/products");
    navigator.navigate("#/products/hard-white-spring-wheat");
    navigator.navigate("#/products/hard-white-spring-wheat/dayn");
    navigator.navigate("#/products/hard-white-spring-wheat/nonexistent");
    navigator.navigate("#/contacts");

    let kinds: Vec<&str> = seen
        .borrow()
        .iter()
        .map(|route| resolve(route, &catalog).kind())
        .collect();
    assert_eq!(
        kinds,
        vec![
            "products_index_page",
            "group_page",
            "variety_page",
            "variety_not_found",
            "contacts_page"
        ]
    );
    assert_eq!(store.current(), Route::Contacts);
}

#[test]
fn store_navigate_goes_through_navigator() {
    let navigator = Rc::new(MemoryNavigator::new());
    let store = RouteStore::attach(Rc::clone(&navigator));
    let seen = recorder(&store);

    store.navigate(&Route::variety("oats", "monida"));

    assert_eq!(navigator.current_fragment(), "#/products/oats/monida");
    assert_eq!(*seen.borrow(), vec![Route::variety("oats", "monida")]);
}

#[test]
fn repeating_the_current_fragment_publishes_nothing() {
    let navigator = Rc::new(MemoryNavigator::with_fragment("#/products"));
    let store = RouteStore::attach(Rc::clone(&navigator));
    let seen = recorder(&store);

    navigator.navigate("#/products");

    assert!(seen.borrow().is_empty());
}

#[test]
fn clearing_the_fragment_publishes_unknown_that_resolves_home() {
    let catalog = bundled();
    let navigator = Rc::new(MemoryNavigator::with_fragment("#/contacts"));
    let store = RouteStore::attach(Rc::clone(&navigator));
    let seen = recorder(&store);

    navigator.navigate("");

    let current = store.current();
    assert!(current.is_unknown());
    assert_eq!(resolve(&current, &catalog), PageDescriptor::HomePage);
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn dropped_store_stops_listening() {
    let navigator = Rc::new(MemoryNavigator::new());
    {
        let _store = RouteStore::attach(Rc::clone(&navigator));
        assert_eq!(navigator.listener_count(), 1);
    }
    assert_eq!(navigator.listener_count(), 0);
    navigator.navigate("#/products");
    assert_eq!(navigator.current_fragment(), "#/products");
}

#[test]
fn each_event_publishes_its_own_fragment() {
    let navigator = Rc::new(MemoryNavigator::with_fragment("#/"));

    // Registered ahead of the store, so it moves the fragment on before the
    // store hears about /products.
    let weak = Rc::downgrade(&navigator);
    navigator.listen(Rc::new(move |event: &seedroute::NavigationEvent| {
        if event.new_fragment == "#/products" {
            if let Some(navigator) = weak.upgrade() {
                navigator.navigate("#/contacts");
            }
        }
    }));

    let store = RouteStore::attach(Rc::clone(&navigator));
    let seen = recorder(&store);

    store.navigator().navigate("#/products");

    assert_eq!(navigator.current_fragment(), "#/contacts");
    assert_eq!(*seen.borrow(), vec![Route::ProductsIndex, Route::Contacts]);
    assert_eq!(store.current(), Route::Contacts);
}
