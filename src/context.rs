//! Per-invocation command context.
//!
//! The context is a key/value store created for each dispatch and destroyed
//! when the invocation completes. The adapter seeds it with the originating
//! event and the chat-client handle before handing it to the framework;
//! command bodies and the failure translator read them back out. Values are
//! stored type-erased and recovered by downcast, either through a typed
//! [`ContextKey`] or a plain string key.

use crate::client::ChatClient;
use crate::event::MessageEvent;
use std::any::Any;
use std::borrow::Cow;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

/// Typed key into a [`CommandContext`].
pub struct ContextKey<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ContextKey<T> {
    /// Create a key with a unique name.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    /// The key's name. Typed and string keys share one namespace.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Key under which the adapter stores the originating [`MessageEvent`].
///
/// The event stays retrievable for the whole context lifetime; the failure
/// translator depends on it.
pub const MESSAGE_EVENT_KEY: ContextKey<MessageEvent> =
    ContextKey::new("__internal_message_event__");

/// String key under which the adapter stores the `Arc<dyn ChatClient>`
/// handle, for command bodies that need the runtime.
pub const CLIENT_KEY: &str = "__internal_chat_client__";

/// Per-invocation key/value store passed through the dispatch seam.
#[derive(Default)]
pub struct CommandContext {
    values: HashMap<Cow<'static, str>, Box<dyn Any + Send + Sync>>,
}

impl CommandContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under a typed key, replacing any previous value.
    pub fn set<T: Send + Sync + 'static>(&mut self, key: &ContextKey<T>, value: T) {
        self.values.insert(Cow::Borrowed(key.name), Box::new(value));
    }

    /// Read a value back through its typed key.
    pub fn get<T: Send + Sync + 'static>(&self, key: &ContextKey<T>) -> Option<&T> {
        self.values.get(key.name).and_then(|v| v.downcast_ref())
    }

    /// Store a value under a string key, replacing any previous value.
    pub fn store<T: Send + Sync + 'static>(&mut self, key: impl Into<String>, value: T) {
        self.values.insert(Cow::Owned(key.into()), Box::new(value));
    }

    /// Read a string-keyed value, downcast to the requested type.
    pub fn get_as<T: Send + Sync + 'static>(&self, key: &str) -> Option<&T> {
        self.values.get(key).and_then(|v| v.downcast_ref())
    }

    /// The chat-client handle seeded by the adapter, if present.
    pub fn chat_client(&self) -> Option<&Arc<dyn ChatClient>> {
        self.get_as(CLIENT_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{ReplySink, User};
    use tokio::sync::mpsc;

    fn sample_event() -> MessageEvent {
        let (tx, _rx) = mpsc::channel(1);
        MessageEvent::new(
            User::new("alice", "ada", "host.example"),
            "!foo bar",
            ReplySink::Channel(tx),
        )
    }

    #[test]
    fn test_typed_key_roundtrip() {
        let mut ctx = CommandContext::new();
        ctx.set(&MESSAGE_EVENT_KEY, sample_event());

        let event = ctx.get(&MESSAGE_EVENT_KEY).expect("Event missing from context");
        assert_eq!(event.text(), "!foo bar");
        assert_eq!(event.user().nick, "alice");
    }

    #[test]
    fn test_string_key_roundtrip() {
        let mut ctx = CommandContext::new();
        ctx.store("attempts", 3u32);
        assert_eq!(ctx.get_as::<u32>("attempts"), Some(&3));
    }

    #[test]
    fn test_wrong_type_downcast_is_none() {
        let mut ctx = CommandContext::new();
        ctx.store("attempts", 3u32);
        assert_eq!(ctx.get_as::<String>("attempts"), None);
    }

    #[test]
    fn test_missing_key_is_none() {
        let ctx = CommandContext::new();
        assert!(ctx.get(&MESSAGE_EVENT_KEY).is_none());
        assert!(ctx.chat_client().is_none());
    }

    #[test]
    fn test_set_replaces_previous_value() {
        const KEY: ContextKey<u32> = ContextKey::new("count");
        let mut ctx = CommandContext::new();
        ctx.set(&KEY, 1);
        ctx.set(&KEY, 2);
        assert_eq!(ctx.get(&KEY), Some(&2));
    }
}
