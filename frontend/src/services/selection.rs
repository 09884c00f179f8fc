//! Selection tracker.
//!
//! Keeps every measure card's `selected` look equal to its checkbox. Cards
//! can be toggled from two places (the card body or the checkbox itself)
//! and in bulk through the select-all button.

use crate::config::{DESELECT_ALL_LABEL_HTML, SELECT_ALL_LABEL_HTML};

/// A selectable card paired with its checkbox.
pub trait SelectionCard {
    fn is_checked(&self) -> bool;
    fn set_checked(&self, checked: bool);
    /// Apply or remove the selected visual state.
    fn set_selected(&self, selected: bool);
}

/// Where a click on a card landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickSource {
    /// Anywhere on the card except the checkbox.
    Body,
    /// The checkbox; the browser has already flipped it.
    Checkbox,
}

/// Label of the select-all button, derived from the aggregate state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectAllLabel {
    SelectAll,
    DeselectAll,
}

impl SelectAllLabel {
    /// Button markup, including the feather icon placeholder.
    pub fn html(&self) -> &'static str {
        match self {
            SelectAllLabel::SelectAll => SELECT_ALL_LABEL_HTML,
            SelectAllLabel::DeselectAll => DESELECT_ALL_LABEL_HTML,
        }
    }
}

/// Copy the checkbox state onto the card.
pub fn sync_card(card: &impl SelectionCard) {
    card.set_selected(card.is_checked());
}

/// Handle a click on `card`. Returns the resulting checked state.
pub fn on_card_click(card: &impl SelectionCard, source: ClickSource) -> bool {
    if source == ClickSource::Body {
        card.set_checked(!card.is_checked());
    }
    sync_card(card);
    card.is_checked()
}

/// Initial pass for server-rendered, pre-checked cards.
pub fn sync_all<C: SelectionCard>(cards: &[C]) {
    cards.iter().for_each(sync_card);
}

/// Select-all toggle: uncheck everything if everything is checked,
/// otherwise check everything. Returns the label the button should take.
pub fn toggle_all<C: SelectionCard>(cards: &[C]) -> SelectAllLabel {
    let all_checked = cards.iter().all(|card| card.is_checked());
    for card in cards {
        card.set_checked(!all_checked);
        sync_card(card);
    }
    log::debug!("Select-all toggled {} cards to {}", cards.len(), !all_checked);

    if all_checked {
        SelectAllLabel::SelectAll
    } else {
        SelectAllLabel::DeselectAll
    }
}

/// Number of checked cards.
pub fn checked_count<C: SelectionCard>(cards: &[C]) -> usize {
    cards.iter().filter(|card| card.is_checked()).count()
}
