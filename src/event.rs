//! Incoming message events and reply sinks.
//!
//! A [`MessageEvent`] is an immutable snapshot of one incoming chat message:
//! who sent it, what it said, and where replies to it go. The chat runtime
//! owns message delivery; the adapter only holds an event for the duration
//! of one dispatch cycle.

use crate::error::ReplyError;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

/// A protocol-level user identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    /// Nickname, unique on the network at any instant.
    pub nick: String,
    /// Username (ident).
    pub user: String,
    /// Visible hostname.
    pub host: String,
}

impl User {
    /// Create a user identity.
    pub fn new(nick: impl Into<String>, user: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            nick: nick.into(),
            user: user.into(),
            host: host.into(),
        }
    }

    /// Full `nick!user@host` mask, used in logs.
    pub fn mask(&self) -> String {
        format!("{}!{}@{}", self.nick, self.user, self.host)
    }
}

/// Where replies for one event go.
///
/// `Channel` forwards to the connection writer; `Buffer` captures replies
/// for callers that batch or inspect them.
#[derive(Clone, Debug)]
pub enum ReplySink {
    Channel(mpsc::Sender<String>),
    Buffer(Arc<Mutex<Vec<String>>>),
}

impl ReplySink {
    /// Send or buffer one line of reply text.
    pub async fn send(&self, text: String) -> Result<(), ReplyError> {
        match self {
            Self::Channel(tx) => tx.send(text).await.map_err(|_| ReplyError),
            Self::Buffer(buf) => {
                buf.lock().await.push(text);
                Ok(())
            }
        }
    }
}

/// Immutable snapshot of one incoming chat message.
#[derive(Clone, Debug)]
pub struct MessageEvent {
    user: User,
    text: String,
    reply: ReplySink,
}

impl MessageEvent {
    /// Create an event from its parts.
    pub fn new(user: User, text: impl Into<String>, reply: ReplySink) -> Self {
        Self {
            user,
            text: text.into(),
            reply,
        }
    }

    /// The user who sent the message.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// The raw message text, prefix included.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Send a single line of text back into the originating context.
    pub async fn respond_with(&self, text: impl Into<String>) -> Result<(), ReplyError> {
        self.reply.send(text.into()).await
    }
}
