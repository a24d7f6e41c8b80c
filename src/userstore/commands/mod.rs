use crate::model::User;

pub mod add;
pub mod find;
pub mod helpers;
pub mod list;
pub mod remove;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
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
}

/// What a command did, for callers that want to report on it.
///
/// Query output is not part of this; it goes straight to the output sink.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_users: Vec<User>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_users(mut self, users: Vec<User>) -> Self {
        self.affected_users = users;
        self
    }
}
