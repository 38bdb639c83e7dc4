//! Loading and validating dialogue scripts.
//!
//! Scripts are authored as TOML or JSON. Choices name their destination as a
//! 1-based `next_page`, the way writers number pages; the loader converts
//! that to a zero-based index and rejects anything that does not resolve.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{DialogueNode, DialogueOption, MAX_OPTIONS};
use crate::error::{StoryError, StoryResult};
use crate::events::OptionSlot;
use crate::stats::{StatBlock, StatLabels};

/// On-disk form of a script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptFile {
    pub nodes: Vec<NodeSpec>,
}

/// On-disk form of a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSpec {
    #[serde(default)]
    pub speaker: Option<String>,
    pub text: String,
    #[serde(default)]
    pub labels: StatLabels,
    #[serde(default)]
    pub options: Vec<OptionSpec>,
}

/// On-disk form of a choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionSpec {
    pub text: String,
    #[serde(default)]
    pub delta: StatBlock,
    /// 1-based page number of the destination.
    pub next_page: usize,
    #[serde(default)]
    pub effect: bool,
}

/// An ordered, validated list of pages.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogueScript {
    nodes: Vec<DialogueNode>,
}

impl DialogueScript {
    /// Build a script, checking that it is non-empty, that no page has more
    /// than [`MAX_OPTIONS`] choices, and that every choice targets a page.
    pub fn new(nodes: Vec<DialogueNode>) -> StoryResult<Self> {
        if nodes.is_empty() {
            return Err(StoryError::EmptyScript);
        }

        let len = nodes.len();
        for (index, node) in nodes.iter().enumerate() {
            let count = node.options().len();
            if count > MAX_OPTIONS {
                return Err(StoryError::TooManyOptions { node: index, count });
            }
            for (slot, option) in OptionSlot::ALL.into_iter().zip(node.options()) {
                if option.target >= len {
                    return Err(StoryError::InvalidTarget {
                        node: index,
                        slot,
                        page: option.target + 1,
                        len,
                    });
                }
            }
        }

        Ok(Self { nodes })
    }

    /// Convert a parsed script file, turning 1-based pages into indices.
    pub fn from_file(file: ScriptFile) -> StoryResult<Self> {
        let len = file.nodes.len();
        let mut nodes = Vec::with_capacity(len);

        for (index, raw) in file.nodes.into_iter().enumerate() {
            if raw.options.len() > MAX_OPTIONS {
                return Err(StoryError::TooManyOptions {
                    node: index,
                    count: raw.options.len(),
                });
            }

            let mut node = DialogueNode::new(raw.text).with_labels(raw.labels);
            if let Some(speaker) = raw.speaker {
                node = node.with_speaker(speaker);
            }

            for (slot, option) in OptionSlot::ALL.into_iter().zip(raw.options) {
                if option.next_page == 0 || option.next_page > len {
                    return Err(StoryError::InvalidTarget {
                        node: index,
                        slot,
                        page: option.next_page,
                        len,
                    });
                }
                node = node.with_option(
                    DialogueOption::new(option.text, option.next_page - 1)
                        .with_delta(option.delta)
                        .with_effect(option.effect),
                );
            }
            nodes.push(node);
        }

        Self::new(nodes)
    }

    /// Parse and validate a TOML script.
    pub fn from_toml_str(source: &str) -> StoryResult<Self> {
        let file: ScriptFile = toml::from_str(source)?;
        Self::from_file(file)
    }

    /// Parse and validate a JSON script.
    pub fn from_json_str(source: &str) -> StoryResult<Self> {
        let file: ScriptFile = serde_json::from_str(source)?;
        Self::from_file(file)
    }

    /// Read a script from disk. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> StoryResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| StoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let script = if is_json {
            Self::from_json_str(&source)?
        } else {
            Self::from_toml_str(&source)?
        };

        info!(path = %path.display(), nodes = script.len(), "loaded dialogue script");
        Ok(script)
    }

    /// Number of pages.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false for a validated script.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Page at a zero-based index.
    pub fn get(&self, index: usize) -> Option<&DialogueNode> {
        self.nodes.get(index)
    }

    /// All pages, in script order.
    pub fn nodes(&self) -> &[DialogueNode] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [DialogueNode] {
        &mut self.nodes
    }

    /// Index of the page currently marked visible, if any.
    pub fn visible_index(&self) -> Option<usize> {
        self.nodes.iter().position(DialogueNode::is_visible)
    }
}
