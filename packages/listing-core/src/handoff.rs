//! Navigation between the two screens and the one-shot hand-off payload.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::types::HandOff;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Capture,
    Listings,
}

/// Something that can switch screens, optionally carrying a hand-off.
pub trait Navigator {
    fn navigate(&self, screen: Screen, handoff: Option<HandOff>);
}

#[derive(Debug, Default)]
struct SlotInner {
    screen: Screen,
    handoff: Option<HandOff>,
}

/// In-memory route state: the current screen plus at most one pending
/// hand-off.
///
/// Taking the payload moves it out, so a second visit to the results screen
/// finds nothing and is redirected.
#[derive(Debug, Clone, Default)]
pub struct HandOffSlot {
    inner: Arc<Mutex<SlotInner>>,
}

impl HandOffSlot {
    fn lock(&self) -> MutexGuard<'_, SlotInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn current_screen(&self) -> Screen {
        self.lock().screen
    }

    /// Store a payload for the next results visit, replacing any unread one.
    pub fn put(&self, handoff: HandOff) {
        self.lock().handoff = Some(handoff);
    }

    /// Move the pending payload out.
    pub fn take(&self) -> Option<HandOff> {
        self.lock().handoff.take()
    }

    pub fn is_pending(&self) -> bool {
        self.lock().handoff.is_some()
    }
}

impl Navigator for HandOffSlot {
    fn navigate(&self, screen: Screen, handoff: Option<HandOff>) {
        debug!(screen = ?screen, with_payload = handoff.is_some(), "navigating");
        let mut inner = self.lock();
        inner.screen = screen;
        inner.handoff = handoff;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContentData, ListingIncludes, SourceType};

    fn handoff() -> HandOff {
        HandOff {
            content_data: ContentData::default(),
            source_type: SourceType::Url,
            source: Some("https://example.com".into()),
            category: None,
            includes: ListingIncludes::default(),
        }
    }

    #[test]
    fn payload_is_read_once() {
        let slot = HandOffSlot::default();
        slot.navigate(Screen::Listings, Some(handoff()));

        assert_eq!(slot.current_screen(), Screen::Listings);
        assert!(slot.take().is_some());
        assert!(slot.take().is_none());
    }

    #[test]
    fn clones_share_the_slot() {
        let slot = HandOffSlot::default();
        let other = slot.clone();
        other.put(handoff());

        assert!(slot.is_pending());
        assert_eq!(slot.take().unwrap().source_type, SourceType::Url);
        assert!(!other.is_pending());
    }

    #[test]
    fn navigating_back_clears_the_payload() {
        let slot = HandOffSlot::default();
        slot.navigate(Screen::Listings, Some(handoff()));
        slot.navigate(Screen::Capture, None);

        assert_eq!(slot.current_screen(), Screen::Capture);
        assert!(!slot.is_pending());
    }
}
