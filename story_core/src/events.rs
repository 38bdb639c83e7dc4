//! Input events and the latch between the click listener and the update tick.
//!
//! The listener side only records events. The update tick consumes at most
//! one per frame, highest priority first: option 1, option 2, option 3, then
//! a plain click.

use serde::{Deserialize, Serialize};

/// One of the three choice buttons on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionSlot {
    First,
    Second,
    Third,
}

impl OptionSlot {
    /// All slots, in priority order.
    pub const ALL: [OptionSlot; 3] = [OptionSlot::First, OptionSlot::Second, OptionSlot::Third];

    /// Zero-based position of the slot.
    pub fn index(self) -> usize {
        match self {
            OptionSlot::First => 0,
            OptionSlot::Second => 1,
            OptionSlot::Third => 2,
        }
    }

    /// Slot at a zero-based position, if there is one.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Element id of the matching button in the page markup.
    pub fn element_id(self) -> &'static str {
        match self {
            OptionSlot::First => "button1",
            OptionSlot::Second => "button2",
            OptionSlot::Third => "button3",
        }
    }
}

impl std::fmt::Display for OptionSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index() + 1)
    }
}

/// A click, as seen by the story engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    /// A choice button was clicked.
    Option(OptionSlot),
    /// Anywhere else was clicked; advances linear dialogue.
    Other,
}

impl InputEvent {
    /// Map the id of the clicked element to an event.
    pub fn from_element_id(id: Option<&str>) -> Self {
        id.and_then(|id| OptionSlot::ALL.into_iter().find(|slot| slot.element_id() == id))
            .map(InputEvent::Option)
            .unwrap_or(InputEvent::Other)
    }
}

/// Edge-triggered click flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputLatch {
    options: [bool; 3],
    other: bool,
}

impl InputLatch {
    /// A latch with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch an event until the next update consumes it.
    pub fn record(&mut self, event: InputEvent) {
        match event {
            InputEvent::Option(slot) => self.options[slot.index()] = true,
            InputEvent::Other => self.other = true,
        }
    }

    /// Take the highest-priority pending event, clearing only its flag.
    pub fn take_next(&mut self) -> Option<InputEvent> {
        for slot in OptionSlot::ALL {
            let flag = &mut self.options[slot.index()];
            if *flag {
                *flag = false;
                return Some(InputEvent::Option(slot));
            }
        }
        if self.other {
            self.other = false;
            return Some(InputEvent::Other);
        }
        None
    }

    /// Whether `event` is latched and not yet taken.
    pub fn is_pending(&self, event: InputEvent) -> bool {
        match event {
            InputEvent::Option(slot) => self.options[slot.index()],
            InputEvent::Other => self.other,
        }
    }

    /// Whether nothing is latched.
    pub fn is_idle(&self) -> bool {
        !self.other && self.options.iter().all(|f| !f)
    }

    /// Drop every pending event.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
