//! A [`StoryHost`] that draws pages and stats to a terminal.

use std::io::{self, Write};

use story_core::{DialogueNode, StatKind, StoryHost};

/// Writes each page as it is shown, followed by the stat line.
///
/// [`StoryHost`] callbacks cannot fail, so the first write error they hit is
/// kept and returned by the next [`TerminalHost::print_stats`].
pub struct TerminalHost<W: Write> {
    out: W,
    stat_line: [String; 4],
    error: Option<io::Error>,
}

impl<W: Write> TerminalHost<W> {
    /// A host writing to `out`, with empty stat displays.
    pub fn new(out: W) -> Self {
        Self {
            out,
            stat_line: Default::default(),
            error: None,
        }
    }

    /// Print the four stat displays on one line.
    ///
    /// Fails with the first error a host callback ran into, if any.
    pub fn print_stats(&mut self) -> io::Result<()> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        writeln!(self.out, "[ {} ]", self.stat_line.join(" | "))
    }

    /// Print one line of narration.
    pub fn print(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{message}")
    }

    fn keep_error(&mut self, result: io::Result<()>) {
        if let Err(err) = result {
            self.error.get_or_insert(err);
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn slot(kind: StatKind) -> usize {
    match kind {
        StatKind::Health => 0,
        StatKind::Qi => 1,
        StatKind::Attack => 2,
        StatKind::Defend => 3,
    }
}

impl<W: Write> StoryHost for TerminalHost<W> {
    fn show_node(&mut self, index: usize, node: &DialogueNode) {
        let result = writeln!(self.out);
        self.keep_error(result);
        let result = match &node.speaker {
            Some(speaker) => writeln!(self.out, "#{} {}: {}", index + 1, speaker, node.text),
            None => writeln!(self.out, "#{} {}", index + 1, node.text),
        };
        self.keep_error(result);
        for (i, option) in node.options().iter().enumerate() {
            let result = writeln!(self.out, "  {}) {}", i + 1, option.text);
            self.keep_error(result);
        }
    }

    fn remove_choices(&mut self, _index: usize) {
        let result = writeln!(self.out, "  ...");
        self.keep_error(result);
    }

    fn set_stat_text(&mut self, kind: StatKind, text: &str) {
        self.stat_line[slot(kind)] = text.to_string();
    }

    fn play_effect(&mut self, index: usize) {
        let result = writeln!(self.out, "  *page {} trembles*", index + 1);
        self.keep_error(result);
    }
}
