use crate::config::PicstashConfig;
use crate::model::{Slot, SlotInfo};

pub mod add;
pub mod config;
pub mod list;
pub mod next;

#[derive(Debug, Clone)]
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
    pub slot: Option<Slot>,
    pub next_id: Option<u32>,
    pub listed_slots: Vec<SlotInfo>,
    pub config: Option<PicstashConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_slot(mut self, slot: Slot) -> Self {
        self.slot = Some(slot);
        self
    }

    pub fn with_next_id(mut self, id: u32) -> Self {
        self.next_id = Some(id);
        self
    }

    pub fn with_listed_slots(mut self, slots: Vec<SlotInfo>) -> Self {
        self.listed_slots = slots;
        self
    }

    pub fn with_config(mut self, config: PicstashConfig) -> Self {
        self.config = Some(config);
        self
    }
}
