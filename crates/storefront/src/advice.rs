//! Per-product stylist note state machine.
//!
//! The product detail view shows a "Stylist's Note" panel with three states:
//! nothing requested yet, a request in flight, and advice on screen. A
//! request is only accepted from the initial state (the triggering control is
//! disabled while loading), and a response is only applied if it belongs to
//! the product this panel was built for. A response that arrives after the
//! user has moved to a different product is discarded rather than applied to
//! stale UI. Shown is terminal; selecting another product builds a fresh
//! panel.

use larashen_core::ProductId;
use tracing::debug;

/// Advice panel state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AdviceState {
    /// No advice requested for this product view yet.
    #[default]
    NotRequested,
    /// A request is in flight; further requests are rejected.
    Loading,
    /// Advice text is on screen. Terminal for this panel.
    Shown(String),
}

/// The stylist note panel for one product detail view instance.
#[derive(Debug, Clone)]
pub struct StylistNote {
    product_id: ProductId,
    state: AdviceState,
}

impl StylistNote {
    /// Fresh panel for `product_id`, with nothing requested.
    #[must_use]
    pub const fn new(product_id: ProductId) -> Self {
        Self {
            product_id,
            state: AdviceState::NotRequested,
        }
    }

    /// The product this panel belongs to.
    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &AdviceState {
        &self.state
    }

    /// Try to start a request. Returns `true` if the caller should fire one;
    /// `false` while a request is loading or advice is already shown.
    pub fn begin(&mut self) -> bool {
        if self.state == AdviceState::NotRequested {
            self.state = AdviceState::Loading;
            true
        } else {
            false
        }
    }

    /// Apply a response for `product_id`.
    ///
    /// Discarded unless a request is in flight and the response is for this
    /// panel's product; the stale-response guard for results that arrive
    /// after navigation.
    pub fn resolve(&mut self, product_id: &ProductId, text: String) {
        if self.state != AdviceState::Loading {
            return;
        }
        if product_id != &self.product_id {
            debug!(expected = %self.product_id, got = %product_id, "discarding stale advice");
            return;
        }
        self.state = AdviceState::Shown(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_transitions_once() {
        let mut note = StylistNote::new(ProductId::new("1"));
        assert_eq!(note.state(), &AdviceState::NotRequested);

        assert!(note.begin());
        assert_eq!(note.state(), &AdviceState::Loading);

        // A second request while one is pending is rejected.
        assert!(!note.begin());
        assert_eq!(note.state(), &AdviceState::Loading);
    }

    #[test]
    fn resolve_shows_advice_for_the_right_product() {
        let mut note = StylistNote::new(ProductId::new("1"));
        assert!(note.begin());

        note.resolve(&ProductId::new("1"), "Pair with coral beads.".to_owned());
        assert_eq!(
            note.state(),
            &AdviceState::Shown("Pair with coral beads.".to_owned())
        );

        // Shown is terminal: no further requests for this panel.
        assert!(!note.begin());
    }

    #[test]
    fn stale_response_for_another_product_is_discarded() {
        let mut note = StylistNote::new(ProductId::new("1"));
        assert!(note.begin());

        note.resolve(&ProductId::new("2"), "Wrong product.".to_owned());
        assert_eq!(note.state(), &AdviceState::Loading);
    }

    #[test]
    fn response_without_a_request_is_ignored() {
        let mut note = StylistNote::new(ProductId::new("1"));
        note.resolve(&ProductId::new("1"), "Unasked.".to_owned());
        assert_eq!(note.state(), &AdviceState::NotRequested);
    }
}
