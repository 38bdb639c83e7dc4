//! Dialogue session - the per-frame state machine that walks a script.
//!
//! Exactly one page is current and visible at a time. Each frame the session:
//! 1. **Effects**: advances every page's shake effect by one frame
//! 2. **Input**: takes the highest-priority latched click, if any
//! 3. **Transition**: a choice jumps to its target page and applies its stat
//!    delta; a plain click moves to the next page in order

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::dialogue::{DialogueNode, DialogueScript};
use crate::error::{StoryError, StoryResult};
use crate::events::{InputEvent, InputLatch, OptionSlot};
use crate::host::StoryHost;
use crate::stats::{StatBlock, StatKind};

/// Unique identifier for a play session, carried in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a handled event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A choice was picked on page `from`, leading to page `to`.
    Chose {
        from: usize,
        to: usize,
        slot: OptionSlot,
    },
    /// A plain click moved from page `from` to the following page.
    Advanced { from: usize, to: usize },
}

impl Transition {
    /// Page the transition landed on.
    pub fn target(&self) -> usize {
        match self {
            Transition::Chose { to, .. } | Transition::Advanced { to, .. } => *to,
        }
    }
}

/// A play-through of one script.
#[derive(Debug, Clone)]
pub struct DialogueSession {
    id: SessionId,
    script: DialogueScript,
    current: usize,
    stats: StatBlock,
    config: SessionConfig,
}

impl DialogueSession {
    /// Create a session positioned on the first page.
    pub fn new(mut script: DialogueScript, config: SessionConfig) -> Self {
        for node in script.nodes_mut() {
            node.set_visible(false);
        }
        script.nodes_mut()[0].set_visible(true);

        Self {
            id: SessionId::new(),
            script,
            current: 0,
            stats: config.initial_stats,
            config,
        }
    }

    /// Create a session with default configuration.
    pub fn with_defaults(script: DialogueScript) -> Self {
        Self::new(script, SessionConfig::default())
    }

    /// Present the first page and the starting stats to the host.
    pub fn start<H: StoryHost + ?Sized>(&mut self, host: &mut H) {
        info!(session = %self.id, nodes = self.script.len(), "starting dialogue session");
        host.show_node(self.current, self.current_node());
        self.refresh_stats(host, self.current);
    }

    /// Identifier carried in this session's logs.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Index of the current page.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The current, visible page.
    pub fn current_node(&self) -> &DialogueNode {
        &self.script.nodes()[self.current]
    }

    /// Running stat totals.
    pub fn stats(&self) -> &StatBlock {
        &self.stats
    }

    /// The script being played.
    pub fn script(&self) -> &DialogueScript {
        &self.script
    }

    /// Configuration the session was created with.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// True on the last page when it offers no way forward.
    pub fn is_finished(&self) -> bool {
        self.current + 1 >= self.script.len() && !self.current_node().has_options()
    }

    /// Run one frame: advance effects, then handle at most one latched event.
    ///
    /// The consumed flag stays cleared even when handling it fails.
    pub fn update<H: StoryHost + ?Sized>(
        &mut self,
        latch: &mut InputLatch,
        host: &mut H,
    ) -> StoryResult<Option<Transition>> {
        for node in self.script.nodes_mut() {
            node.update();
        }

        match latch.take_next() {
            Some(event) => self.handle(event, host).map(Some),
            None => Ok(None),
        }
    }

    /// Apply a single event immediately.
    pub fn handle<H: StoryHost + ?Sized>(
        &mut self,
        event: InputEvent,
        host: &mut H,
    ) -> StoryResult<Transition> {
        match event {
            InputEvent::Option(slot) => self.choose(slot, host),
            InputEvent::Other => self.advance(host),
        }
    }

    /// Pick a choice on the current page.
    ///
    /// Hides the page, applies the choice's stat delta, refreshes the stat
    /// displays with this page's labels, starts the effect on the target if
    /// requested, and shows the target page.
    pub fn choose<H: StoryHost + ?Sized>(
        &mut self,
        slot: OptionSlot,
        host: &mut H,
    ) -> StoryResult<Transition> {
        let from = self.current;
        let option = self
            .current_node()
            .option(slot)
            .cloned()
            .ok_or(StoryError::MissingOption { node: from, slot })?;

        let len = self.script.len();
        let to = option.target;
        if to >= len {
            return Err(StoryError::InvalidTarget {
                node: from,
                slot,
                page: to + 1,
                len,
            });
        }

        self.script.nodes_mut()[from].set_visible(false);
        host.hide_node(from);
        host.remove_choices(from);

        self.stats.apply(&option.delta);
        self.refresh_stats(host, from);

        if option.effect {
            let oscillation = self.config.oscillation.build();
            self.script.nodes_mut()[to].trigger_effect(oscillation);
            host.play_effect(to);
        }

        self.current = to;
        self.script.nodes_mut()[to].set_visible(true);
        host.show_node(to, self.current_node());

        debug!(
            session = %self.id,
            from,
            to,
            %slot,
            health = self.stats.health,
            qi = self.stats.qi,
            attack = self.stats.attack,
            defend = self.stats.defend,
            "choice taken"
        );

        Ok(Transition::Chose { from, to, slot })
    }

    /// Move to the next page in script order.
    ///
    /// On the last page this fails with [`StoryError::SequenceExhausted`]
    /// and nothing changes.
    pub fn advance<H: StoryHost + ?Sized>(&mut self, host: &mut H) -> StoryResult<Transition> {
        let from = self.current;
        let to = from + 1;
        let len = self.script.len();
        if to >= len {
            warn!(session = %self.id, len, "advance past the last page");
            return Err(StoryError::SequenceExhausted { len });
        }

        self.script.nodes_mut()[from].set_visible(false);
        host.hide_node(from);

        self.current = to;
        self.script.nodes_mut()[to].set_visible(true);
        host.show_node(to, self.current_node());

        self.refresh_stats(host, to);

        debug!(session = %self.id, from, to, "advanced");
        Ok(Transition::Advanced { from, to })
    }

    fn refresh_stats<H: StoryHost + ?Sized>(&self, host: &mut H, labels_from: usize) {
        let labels = &self.script.nodes()[labels_from].labels;
        for kind in StatKind::ALL {
            host.set_stat_text(kind, &labels.display(kind, self.stats.get(kind)));
        }
    }
}
