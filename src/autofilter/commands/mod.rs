//! # Command Layer
//!
//! One module per user operation. Each `run` takes the project (and the store
//! key where definitions are involved) as plain arguments and returns plain
//! Rust values: mutating commands return a [`CmdResult`], read-only ones
//! return the data itself.
//!
//! Commands never print. Anything worth telling the user goes into
//! [`CmdResult::messages`].

use crate::config::AutofilterConfig;
use std::path::PathBuf;

pub mod apply;
pub mod clear;
pub mod config;
pub mod delete;
pub mod fields;
pub mod helpers;
pub mod list;
pub mod load;
pub mod save;
pub mod status;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Ids of layers whose subset expression was rewritten.
    pub affected_layers: Vec<String>,
    pub config: Option<AutofilterConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    /// Records a rewritten layer once, keeping first-touch order.
    pub fn mark_affected(&mut self, layer_id: &str) {
        if !self.affected_layers.iter().any(|id| id == layer_id) {
            self.affected_layers.push(layer_id.to_string());
        }
    }

    pub fn with_config(mut self, config: AutofilterConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Active filters on one tabular layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerStatus {
    pub layer_id: String,
    pub layer_name: String,
    pub active_filters: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct AutofilterPaths {
    pub config_dir: Option<PathBuf>,
}
