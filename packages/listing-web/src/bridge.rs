//! Adapters that let the shared pipeline driver run against Dioxus state.

use dioxus::prelude::*;
use dioxus::router::prelude::Navigator as History;
use listing_core::{HandOff, HandOffSlot, MachineHandle, Navigator, Screen};

use crate::routes::Route;

/// A state machine kept in a component signal.
pub struct SignalHandle<M: 'static>(pub Signal<M>);

impl<M: 'static> Clone for SignalHandle<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: 'static> Copy for SignalHandle<M> {}

impl<M: 'static> MachineHandle<M> for SignalHandle<M> {
    fn update<R>(&self, f: impl FnOnce(&mut M) -> R) -> R {
        let mut signal = self.0;
        let mut machine = signal.write();
        f(&mut machine)
    }
}

/// Routes between the two pages, passing hand-offs through the shared slot.
#[derive(Clone)]
pub struct RouteNavigator {
    history: History,
    slot: HandOffSlot,
}

impl Navigator for RouteNavigator {
    fn navigate(&self, screen: Screen, handoff: Option<HandOff>) {
        self.slot.navigate(screen, handoff);
        match screen {
            Screen::Listings => {
                self.history.push(Route::Listings {});
            }
            // Redirects replace the entry so "back" doesn't bounce again
            Screen::Capture => {
                self.history.replace(Route::Capture {});
            }
        }
    }
}

/// Hook combining the router with the app's hand-off slot
pub fn use_route_navigator() -> RouteNavigator {
    RouteNavigator {
        history: use_navigator(),
        slot: use_context::<HandOffSlot>(),
    }
}
