//! The capabilities a host environment lends to the story engine.
//!
//! A browser page, a terminal, or a test harness implements [`StoryHost`].
//! Every method has a no-op default so a host only wires up what it has.

use crate::dialogue::DialogueNode;
use crate::stats::StatKind;

/// Presentation surface for pages, choice buttons, and stat displays.
pub trait StoryHost {
    /// Bring a page on screen.
    fn show_node(&mut self, _index: usize, _node: &DialogueNode) {}

    /// Take a page off screen.
    fn hide_node(&mut self, _index: usize) {}

    /// Remove the choice buttons of a page after one was picked.
    fn remove_choices(&mut self, _index: usize) {}

    /// Replace the text of one stat display.
    fn set_stat_text(&mut self, _kind: StatKind, _text: &str) {}

    /// A page started its shake effect.
    fn play_effect(&mut self, _index: usize) {}
}

/// Host with no surfaces, for headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHost;

impl StoryHost for NullHost {}
