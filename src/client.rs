//! Chat runtime seam.
//!
//! The adapter does not speak the wire protocol. It sees the chat client
//! through [`ChatClient`]: enough to install the message listener and to
//! resolve nicknames for argument parsing. Everything else (connection
//! handling, user/channel bookkeeping) stays on the runtime's side.

use crate::event::{MessageEvent, User};
use async_trait::async_trait;
use std::sync::Arc;

/// Receives every incoming message from the chat runtime.
///
/// Installed once via [`ChatClient::install_listener`]; invoked on whatever
/// task the runtime delivers events from, so implementations must not assume
/// affinity with any particular thread.
#[async_trait]
pub trait MessageListener: Send + Sync {
    /// Called for every incoming message, command or not.
    async fn message_received(&self, event: MessageEvent);
}

/// Handle to the chat-client runtime.
pub trait ChatClient: Send + Sync + 'static {
    /// Install a listener that will receive every incoming message.
    fn install_listener(&self, listener: Arc<dyn MessageListener>);

    /// Resolve a connected user by nickname.
    fn find_user(&self, nick: &str) -> Option<User>;
}
