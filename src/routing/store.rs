//! Reactive current-route state driven by a [`Navigator`].

use crate::routing::navigator::{ListenerId, NavigationEvent, Navigator};
use crate::routing::route::{Route, strip_marker};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, info};

/// Fragment written when the store starts without one.
pub const HOME_FRAGMENT: &str = "#/";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub type RouteObserver = Rc<dyn Fn(&Route)>;

struct RouteState {
    current: RefCell<Route>,
    observers: RefCell<Vec<(SubscriptionId, RouteObserver)>>,
    next_id: Cell<u64>,
}

impl RouteState {
    fn new(initial: Route) -> Self {
        Self {
            current: RefCell::new(initial),
            observers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.observers
            .borrow()
            .iter()
            .any(|(registered, _)| *registered == id)
    }

    // Observers run against a snapshot so they may (un)subscribe freely.
    fn publish(&self, route: Route) {
        debug!(route = %route, "route published");
        self.current.replace(route.clone());
        let observers: Vec<(SubscriptionId, RouteObserver)> = self
            .observers
            .borrow()
            .iter()
            .map(|(id, observer)| (*id, Rc::clone(observer)))
            .collect();
        for (id, observer) in observers {
            if self.is_subscribed(id) {
                observer(&route);
            }
        }
    }
}

/// Bridges fragment changes to subscribers.
///
/// On attach the store reads the current fragment; when it is empty the store
/// performs one corrective navigation to [`HOME_FRAGMENT`] and starts at
/// `Route::Home`. Every later change event is parsed and published
/// synchronously, in arrival order, to all subscribers. Dropping the store
/// removes its navigation listener.
pub struct RouteStore<N: Navigator + 'static> {
    navigator: Rc<N>,
    state: Rc<RouteState>,
    listener: ListenerId,
}

impl<N: Navigator + 'static> RouteStore<N> {
    pub fn attach(navigator: Rc<N>) -> Self {
        let fragment = navigator.current_fragment();
        let initial = if strip_marker(&fragment).is_empty() {
            info!("no initial fragment; redirecting to {HOME_FRAGMENT}");
            // Not yet listening, so the redirect is not published twice.
            navigator.navigate(HOME_FRAGMENT);
            Route::Home
        } else {
            Route::from_fragment(&fragment)
        };
        debug!(route = %initial, "route store attached");

        let state = Rc::new(RouteState::new(initial));
        let weak_state = Rc::downgrade(&state);
        let listener = navigator.listen(Rc::new(move |event: &NavigationEvent| {
            if let Some(state) = weak_state.upgrade() {
                state.publish(Route::from_fragment(&event.new_fragment));
            }
        }));

        Self {
            navigator,
            state,
            listener,
        }
    }

    pub fn current(&self) -> Route {
        self.state.current.borrow().clone()
    }

    pub fn subscribe(&self, observer: impl Fn(&Route) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.state.next_id.get());
        self.state.next_id.set(self.state.next_id.get() + 1);
        self.state
            .observers
            .borrow_mut()
            .push((id, Rc::new(observer)));
        id
    }

    /// Returns false when `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.state.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|(registered, _)| *registered != id);
        observers.len() != before
    }

    /// Navigate to `route` through the underlying navigator.
    pub fn navigate(&self, route: &Route) {
        self.navigator.navigate(&route.href());
    }

    pub fn navigator(&self) -> &Rc<N> {
        &self.navigator
    }
}

impl<N: Navigator + 'static> Drop for RouteStore<N> {
    fn drop(&mut self) {
        self.navigator.unlisten(self.listener);
        debug!("route store detached");
    }
}
