//! Navigation mechanism seam.
//!
//! The route store only needs three things from its host: read the current
//! fragment, write a new one, and hear about changes. `Navigator` captures
//! exactly that surface. `MemoryNavigator` is the in-process implementation
//! used by the CLI and tests; a browser binding would wrap `location.hash`
//! and the `hashchange` event behind the same trait.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
/// A fragment change, delivered after the new fragment is in place.
pub struct NavigationEvent {
    pub old_fragment: String,
    pub new_fragment: String,
}

pub type NavigationListener = Rc<dyn Fn(&NavigationEvent)>;

pub trait Navigator {
    /// Current fragment including its leading `#`, or empty when unset.
    fn current_fragment(&self) -> String;

    /// Replace the fragment. Listeners hear about it only when it changes.
    fn navigate(&self, fragment: &str);

    fn listen(&self, listener: NavigationListener) -> ListenerId;

    /// Returns false when `id` was not registered.
    fn unlisten(&self, id: ListenerId) -> bool;
}

/// Single-threaded in-memory fragment holder.
///
/// Change events are queued and delivered strictly in order: a navigation
/// requested from inside a listener is dispatched only after every listener
/// has seen the current event.
#[derive(Default)]
pub struct MemoryNavigator {
    fragment: RefCell<String>,
    listeners: RefCell<Vec<(ListenerId, NavigationListener)>>,
    next_id: Cell<u64>,
    queue: RefCell<VecDeque<NavigationEvent>>,
    dispatching: Cell<bool>,
    history: RefCell<Vec<String>>,
}

impl MemoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigator whose fragment is already set, as on a page load with a
    /// hash in the URL. No event is emitted for the initial value.
    pub fn with_fragment(fragment: &str) -> Self {
        let navigator = Self::default();
        *navigator.fragment.borrow_mut() = normalize(fragment);
        navigator
    }

    /// Fragments written through `navigate` that changed the location.
    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn is_listening(&self, id: ListenerId) -> bool {
        self.listeners
            .borrow()
            .iter()
            .any(|(registered, _)| *registered == id)
    }

    fn dispatch(&self, event: NavigationEvent) {
        self.queue.borrow_mut().push_back(event);
        if self.dispatching.replace(true) {
            return;
        }

        loop {
            let Some(event) = self.queue.borrow_mut().pop_front() else {
                break;
            };
            let listeners: Vec<(ListenerId, NavigationListener)> = self
                .listeners
                .borrow()
                .iter()
                .map(|(id, listener)| (*id, Rc::clone(listener)))
                .collect();
            for (id, listener) in listeners {
                if self.is_listening(id) {
                    listener(&event);
                }
            }
        }
        self.dispatching.set(false);
    }
}

impl Navigator for MemoryNavigator {
    fn current_fragment(&self) -> String {
        self.fragment.borrow().clone()
    }

    fn navigate(&self, fragment: &str) {
        let new_fragment = normalize(fragment);
        let old_fragment = self.fragment.replace(new_fragment.clone());
        if old_fragment == new_fragment {
            return;
        }
        debug!(from = %old_fragment, to = %new_fragment, "fragment changed");
        self.history.borrow_mut().push(new_fragment.clone());
        self.dispatch(NavigationEvent {
            old_fragment,
            new_fragment,
        });
    }

    fn listen(&self, listener: NavigationListener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    fn unlisten(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(registered, _)| *registered != id);
        listeners.len() != before
    }
}

// `/x` and `#/x` name the same location; a bare `#` is no fragment at all.
fn normalize(fragment: &str) -> String {
    match fragment {
        "" | "#" => String::new(),
        f if f.starts_with('#') => f.to_string(),
        f => format!("#{f}"),
    }
}
