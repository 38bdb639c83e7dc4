//! Dialogue pages and their choices.

use engine_core::Oscillation;
use serde::{Deserialize, Serialize};

use crate::events::OptionSlot;
use crate::stats::{StatBlock, StatLabels};

/// Maximum number of choices a page can offer.
pub const MAX_OPTIONS: usize = 3;

/// A choice the player can make on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueOption {
    pub text: String,
    /// Change applied to the running stat totals.
    pub delta: StatBlock,
    /// Zero-based index of the page this choice leads to.
    pub target: usize,
    /// Whether picking this choice shakes the target page.
    pub effect: bool,
}

impl DialogueOption {
    /// A choice leading to the zero-based page `target`, with no stat change.
    pub fn new(text: impl Into<String>, target: usize) -> Self {
        Self {
            text: text.into(),
            delta: StatBlock::default(),
            target,
            effect: false,
        }
    }

    /// Set the stat change applied when the choice is picked.
    pub fn with_delta(mut self, delta: StatBlock) -> Self {
        self.delta = delta;
        self
    }

    /// Set whether the target page shakes.
    pub fn with_effect(mut self, effect: bool) -> Self {
        self.effect = effect;
        self
    }
}

/// One page of the story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueNode {
    pub speaker: Option<String>,
    pub text: String,
    pub labels: StatLabels,
    options: Vec<DialogueOption>,
    visible: bool,
    effect: Option<Oscillation>,
    effect_offset: f32,
}

impl DialogueNode {
    /// A hidden page with no speaker and no choices.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            speaker: None,
            text: text.into(),
            labels: StatLabels::default(),
            options: Vec::new(),
            visible: false,
            effect: None,
            effect_offset: 0.0,
        }
    }

    /// Set who is talking.
    pub fn with_speaker(mut self, speaker: impl Into<String>) -> Self {
        self.speaker = Some(speaker.into());
        self
    }

    /// Rename the stat displays while this page is shown.
    pub fn with_labels(mut self, labels: StatLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Append a choice. The limit of [`MAX_OPTIONS`] is checked when the
    /// node is placed in a [`crate::DialogueScript`].
    pub fn with_option(mut self, option: DialogueOption) -> Self {
        self.options.push(option);
        self
    }

    /// Choices, in slot order.
    pub fn options(&self) -> &[DialogueOption] {
        &self.options
    }

    /// Choice behind a button, if the page offers it.
    pub fn option(&self, slot: OptionSlot) -> Option<&DialogueOption> {
        self.options.get(slot.index())
    }

    /// Pages without choices are advanced by a plain click.
    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    /// Whether this is the page on screen.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Start (or restart) the shake effect on this page.
    pub fn trigger_effect(&mut self, oscillation: Oscillation) {
        self.effect = Some(oscillation);
        self.effect_offset = 0.0;
    }

    /// Whether the shake effect is still running.
    pub fn is_effect_active(&self) -> bool {
        self.effect.is_some()
    }

    /// Horizontal offset to apply to the page this frame.
    pub fn effect_offset(&self) -> f32 {
        self.effect_offset
    }

    /// Advance the effect by one frame.
    pub fn update(&mut self) {
        let Some(effect) = self.effect.as_mut() else {
            return;
        };
        self.effect_offset = effect.next_value();
        if effect.is_done() {
            self.effect = None;
            self.effect_offset = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_builder() {
        let node = DialogueNode::new("The river is cold.")
            .with_speaker("Elder Mo")
            .with_option(DialogueOption::new("Jump in", 3).with_delta(StatBlock::new(-5, 2, 0, 0)))
            .with_option(DialogueOption::new("Walk away", 4));

        assert_eq!(node.speaker.as_deref(), Some("Elder Mo"));
        assert_eq!(node.options().len(), 2);
        assert_eq!(node.option(OptionSlot::First).unwrap().delta.health, -5);
        assert!(node.option(OptionSlot::Third).is_none());
        assert!(node.has_options());
        assert!(!node.is_visible());
    }

    #[test]
    fn test_effect_runs_out() {
        let mut node = DialogueNode::new("Thunder!");
        node.trigger_effect(Oscillation::new(1.0, 0.0, 3));
        assert!(node.is_effect_active());

        node.update();
        assert!(node.effect_offset() > 0.0);
        node.update();
        node.update();

        assert!(!node.is_effect_active());
        assert_eq!(node.effect_offset(), 0.0);
    }

    #[test]
    fn test_update_without_effect_is_noop() {
        let mut node = DialogueNode::new("Quiet.");
        node.update();
        assert_eq!(node.effect_offset(), 0.0);
    }
}
