//! Single-selection over the ordered service cards.
//!
//! The selected index is the only source of truth. Which card carries the
//! `active` class and which detail panel is shown are computed from it by the
//! view layer and never read back.

use super::service_id::ServiceId;
use crate::shared::input::keys::is_activation_key;
use crate::shared::input::swipe::{SwipeDirection, SwipeTracker};
use serde::{Deserialize, Serialize};

/// One selectable service. Selection lives on [`ServiceCardSelector`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCard {
    pub id: ServiceId,
    pub index: usize,
    pub is_flipped: bool,
    /// Recomputed on every flip toggle; empty until the first one.
    pub accessible_description: String,
}

/// Expanded content for a service, looked up by `"<id>-detail"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailPanel {
    pub service: ServiceId,
    pub element_id: String,
}

impl DetailPanel {
    pub fn new(service: ServiceId) -> Self {
        let element_id = service.detail_id();
        Self {
            service,
            element_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServiceCardSelector {
    cards: Vec<ServiceCard>,
    panels: Vec<DetailPanel>,
    selected: Option<usize>,
    swipe: SwipeTracker,
}

impl ServiceCardSelector {
    /// Build the selector from the cards in document order and the detail
    /// panels present on the page. Nothing is selected until
    /// [`initialize_default`](Self::initialize_default) runs.
    pub fn new<C, P>(cards: C, panels: P) -> Self
    where
        C: IntoIterator<Item = ServiceId>,
        P: IntoIterator<Item = ServiceId>,
    {
        let cards = cards
            .into_iter()
            .enumerate()
            .map(|(index, id)| ServiceCard {
                id,
                index,
                is_flipped: false,
                accessible_description: String::new(),
            })
            .collect();
        let panels = panels.into_iter().map(DetailPanel::new).collect();

        Self {
            cards,
            panels,
            selected: None,
            swipe: SwipeTracker::default(),
        }
    }

    /// Every card gets a panel with the same id.
    pub fn with_matching_panels<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = ServiceId>,
    {
        let ids: Vec<ServiceId> = ids.into_iter().collect();
        Self::new(ids.clone(), ids)
    }

    pub fn with_swipe_threshold(mut self, threshold_px: f64) -> Self {
        self.swipe = SwipeTracker::new(threshold_px);
        self
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[ServiceCard] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&ServiceCard> {
        self.cards.get(index)
    }

    pub fn panels(&self) -> &[DetailPanel] {
        &self.panels
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.cards.iter().position(|c| c.id.as_str() == id)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_card(&self) -> Option<&ServiceCard> {
        self.selected.and_then(|i| self.cards.get(i))
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// The panel currently shown, if the selected card has one.
    pub fn visible_panel(&self) -> Option<&DetailPanel> {
        let card = self.selected_card()?;
        self.panels.iter().find(|p| p.service == card.id)
    }

    pub fn is_panel_visible(&self, element_id: &str) -> bool {
        self.visible_panel()
            .is_some_and(|p| p.element_id == element_id)
    }

    /// Select the card at `index`. Indices outside the collection are
    /// ignored. Returns whether `index` is now the selected card.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.cards.len() {
            return false;
        }
        self.selected = Some(index);
        true
    }

    pub fn select_id(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) => self.select(index),
            None => false,
        }
    }

    /// Pointer activation.
    pub fn activate(&mut self, index: usize) -> bool {
        self.select(index)
    }

    /// Keyboard activation. Returns `true` when `key` is an activation key;
    /// the caller must then prevent the default action so the page does not
    /// scroll on space.
    pub fn activate_with_key(&mut self, index: usize, key: &str) -> bool {
        if !is_activation_key(key) {
            return false;
        }
        self.activate(index);
        true
    }

    /// Select the first card. No-op on an empty collection.
    pub fn initialize_default(&mut self) {
        if !self.cards.is_empty() {
            self.select(0);
        }
    }

    /// Move the selection one step. There is no wraparound, and nothing
    /// happens while no card is selected. Returns whether the selection moved.
    pub fn on_swipe(&mut self, direction: SwipeDirection) -> bool {
        let Some(current) = self.selected else {
            return false;
        };
        let target = match direction {
            SwipeDirection::Left => current.checked_add(1),
            SwipeDirection::Right => current.checked_sub(1),
        };
        match target {
            Some(next) if next < self.cards.len() => self.select(next),
            _ => false,
        }
    }

    pub fn touch_start(&mut self, screen_x: f64) {
        self.swipe.touch_start(screen_x);
    }

    /// Drop a gesture the browser interrupted; the next `touch_end` without a
    /// fresh `touch_start` is ignored.
    pub fn touch_cancel(&mut self) {
        self.swipe.cancel();
    }

    /// Finish a touch gesture and apply it if it was a swipe.
    pub fn touch_end(&mut self, screen_x: f64) -> Option<SwipeDirection> {
        let direction = self.swipe.touch_end(screen_x)?;
        self.on_swipe(direction);
        Some(direction)
    }

    /// Invert the flip state of one card and refresh its accessible
    /// description. Returns the new description, or `None` for an unknown
    /// index.
    pub fn toggle_flip(&mut self, index: usize) -> Option<&str> {
        let card = self.cards.get_mut(index)?;
        card.is_flipped = !card.is_flipped;
        card.accessible_description = card.id.accessible_name().to_string();
        Some(card.accessible_description.as_str())
    }

    /// Keyboard path of [`toggle_flip`](Self::toggle_flip). Returns whether the
    /// key was handled.
    pub fn toggle_flip_with_key(&mut self, index: usize, key: &str) -> bool {
        if !is_activation_key(key) {
            return false;
        }
        self.toggle_flip(index);
        true
    }

    /// A press on a card's flip face: the face flips and the card it belongs
    /// to is activated, as two independent transitions. Returns `false` for
    /// an unknown index.
    pub fn press_flip_face(&mut self, index: usize) -> bool {
        if self.toggle_flip(index).is_none() {
            return false;
        }
        self.activate(index)
    }

    pub fn press_flip_face_with_key(&mut self, index: usize, key: &str) -> bool {
        if !is_activation_key(key) {
            return false;
        }
        self.press_flip_face(index)
    }

    pub fn is_flipped(&self, index: usize) -> bool {
        self.cards.get(index).is_some_and(|c| c.is_flipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_cards() -> ServiceCardSelector {
        ServiceCardSelector::with_matching_panels([
            ServiceId::Civil,
            ServiceId::Electrical,
            ServiceId::Complementary,
        ])
    }

    #[test]
    fn test_nothing_selected_before_init() {
        let selector = three_cards();
        assert_eq!(selector.selected_index(), None);
        assert!(selector.visible_panel().is_none());
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut selector = three_cards();
        selector.initialize_default();
        assert!(!selector.select(3));
        assert_eq!(selector.selected_index(), Some(0));
    }

    #[test]
    fn test_select_by_id() {
        let mut selector = three_cards();
        assert!(selector.select_id("complementary"));
        assert_eq!(selector.selected_index(), Some(2));
        assert!(!selector.select_id("hydraulic"));
        assert_eq!(selector.selected_index(), Some(2));
    }

    #[test]
    fn test_missing_panel_hides_all() {
        let mut selector = ServiceCardSelector::new(
            [ServiceId::Civil, ServiceId::from("solar")],
            [ServiceId::Civil],
        );
        selector.initialize_default();
        assert!(selector.is_panel_visible("civil-detail"));

        assert!(selector.select(1));
        assert!(selector.visible_panel().is_none());
        assert!(!selector.is_panel_visible("civil-detail"));
    }

    #[test]
    fn test_orphan_panel_never_shown() {
        let mut selector =
            ServiceCardSelector::new([ServiceId::Civil], [ServiceId::Civil, ServiceId::Electrical]);
        selector.initialize_default();
        assert!(!selector.is_panel_visible("electrical-detail"));
    }

    #[test]
    fn test_empty_collection() {
        let mut selector = ServiceCardSelector::with_matching_panels(Vec::new());
        selector.initialize_default();
        assert_eq!(selector.selected_index(), None);
        assert!(!selector.on_swipe(SwipeDirection::Left));
        assert!(!selector.on_swipe(SwipeDirection::Right));
        assert!(!selector.activate(0));
        assert_eq!(selector.toggle_flip(0), None);
    }

    #[test]
    fn test_swipe_without_selection_is_noop() {
        let mut selector = three_cards();
        assert!(!selector.on_swipe(SwipeDirection::Right));
        assert!(!selector.on_swipe(SwipeDirection::Left));
        assert_eq!(selector.selected_index(), None);
    }

    #[test]
    fn test_swipe_right_goes_back() {
        let mut selector = three_cards();
        selector.select(2);
        assert!(selector.on_swipe(SwipeDirection::Right));
        assert_eq!(selector.selected_index(), Some(1));
        assert!(selector.on_swipe(SwipeDirection::Right));
        assert!(!selector.on_swipe(SwipeDirection::Right));
        assert_eq!(selector.selected_index(), Some(0));
    }

    #[test]
    fn test_keyboard_activation() {
        let mut selector = three_cards();
        selector.initialize_default();

        assert!(!selector.activate_with_key(1, "ArrowRight"));
        assert_eq!(selector.selected_index(), Some(0));

        assert!(selector.activate_with_key(1, "Enter"));
        assert_eq!(selector.selected_index(), Some(1));

        assert!(selector.activate_with_key(2, " "));
        assert_eq!(selector.selected_index(), Some(2));
    }

    #[test]
    fn test_flip_sets_description_and_toggles_back() {
        let mut selector = three_cards();
        assert_eq!(selector.toggle_flip(1), Some("Engenharia Elétrica"));
        assert!(selector.is_flipped(1));

        selector.toggle_flip(1);
        assert!(!selector.is_flipped(1));
        assert_eq!(
            selector.card(1).map(|c| c.accessible_description.as_str()),
            Some("Engenharia Elétrica")
        );
    }

    #[test]
    fn test_flip_unknown_service_has_empty_description() {
        let mut selector = ServiceCardSelector::with_matching_panels([ServiceId::from("solar")]);
        assert_eq!(selector.toggle_flip(0), Some(""));
        assert!(selector.is_flipped(0));
    }

    #[test]
    fn test_flip_key_filter() {
        let mut selector = three_cards();
        assert!(!selector.toggle_flip_with_key(0, "a"));
        assert!(!selector.is_flipped(0));
        assert!(selector.toggle_flip_with_key(0, " "));
        assert!(selector.is_flipped(0));
    }

    #[test]
    fn test_touch_gesture_uses_configured_threshold() {
        let mut selector = three_cards().with_swipe_threshold(100.0);
        selector.initialize_default();

        selector.touch_start(300.0);
        assert_eq!(selector.touch_end(240.0), None);
        assert_eq!(selector.selected_index(), Some(0));

        selector.touch_start(300.0);
        assert_eq!(selector.touch_end(180.0), Some(SwipeDirection::Left));
        assert_eq!(selector.selected_index(), Some(1));
    }

    #[test]
    fn test_cancelled_touch_does_not_pair_with_later_end() {
        let mut selector = three_cards();
        selector.initialize_default();

        selector.touch_start(300.0);
        selector.touch_cancel();
        assert_eq!(selector.touch_end(100.0), None);
        assert_eq!(selector.selected_index(), Some(0));
    }

    #[test]
    fn test_pressing_flip_face_flips_and_selects() {
        let mut selector = three_cards();
        selector.initialize_default();

        assert!(selector.press_flip_face(2));
        assert!(selector.is_flipped(2));
        assert_eq!(selector.selected_index(), Some(2));
        assert!(selector.is_panel_visible("complementary-detail"));

        assert!(selector.press_flip_face(2));
        assert!(!selector.is_flipped(2));
        assert_eq!(selector.selected_index(), Some(2));

        assert!(!selector.press_flip_face(7));
        assert_eq!(selector.selected_index(), Some(2));
    }

    #[test]
    fn test_flip_face_key_filter() {
        let mut selector = three_cards();
        selector.initialize_default();

        assert!(!selector.press_flip_face_with_key(1, "ArrowRight"));
        assert!(!selector.is_flipped(1));
        assert_eq!(selector.selected_index(), Some(0));

        assert!(selector.press_flip_face_with_key(1, "Enter"));
        assert!(selector.is_flipped(1));
        assert_eq!(selector.selected_index(), Some(1));
    }
}
