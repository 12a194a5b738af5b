//! Integration test common infrastructure.
//!
//! Provides a fake chat client, a scripted dispatcher, and buffered events
//! for asserting on the dispatch flow end to end. The sender type used
//! throughout is a plain `String` (the nick), which is enough to observe
//! identity mapping without a real application type.

use async_trait::async_trait;
use ircbind::{
    ChatClient, CommandContext, CommandDispatcher, CommandRegistration,
    CommandRegistrationHandler, DispatchError, MessageEvent, MessageListener, ReplySink, User,
};
use std::sync::{Arc, Mutex};
use tokio::sync::Mutex as AsyncMutex;

/// Chat client double: records installed listeners and serves a fixed user
/// directory.
pub struct FakeClient {
    listeners: Mutex<Vec<Arc<dyn MessageListener>>>,
    users: Mutex<Vec<User>>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self {
            listeners: Mutex::new(Vec::new()),
            users: Mutex::new(Vec::new()),
        }
    }

    #[allow(dead_code)]
    pub fn add_user(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }

    /// The listener installed by `attach`.
    pub fn listener(&self) -> Arc<dyn MessageListener> {
        self.listeners
            .lock()
            .unwrap()
            .first()
            .cloned()
            .expect("No listener installed")
    }

    #[allow(dead_code)]
    pub fn install_count(&self) -> usize {
        self.listeners.lock().unwrap().len()
    }
}

impl ChatClient for FakeClient {
    fn install_listener(&self, listener: Arc<dyn MessageListener>) {
        self.listeners.lock().unwrap().push(listener);
    }

    fn find_user(&self, nick: &str) -> Option<User> {
        self.users.lock().unwrap().iter().find(|u| u.nick == nick).cloned()
    }
}

/// Dispatcher double: records every execution and returns a scripted result.
#[allow(dead_code)]
pub struct ScriptedDispatcher {
    calls: Mutex<Vec<(String, String)>>,
    script: Box<dyn Fn() -> Result<(), DispatchError> + Send + Sync>,
}

#[allow(dead_code)]
impl ScriptedDispatcher {
    pub fn succeeding() -> Self {
        Self::with_script(|| Ok(()))
    }

    pub fn with_script(
        script: impl Fn() -> Result<(), DispatchError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            script: Box::new(script),
        }
    }

    /// Recorded `(sender, input)` pairs, in dispatch order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandDispatcher<String> for ScriptedDispatcher {
    async fn execute(
        &self,
        sender: String,
        input: &str,
        _context: &mut CommandContext,
    ) -> Result<(), DispatchError> {
        self.calls.lock().unwrap().push((sender, input.to_string()));
        (self.script)()
    }
}

/// Registration handler double accepting everything.
pub struct AcceptAll;

impl CommandRegistrationHandler for AcceptAll {
    fn command_registered(&self, _registration: &CommandRegistration) -> bool {
        true
    }
}

/// Build an event whose replies land in the returned buffer.
pub fn buffered_event(nick: &str, text: &str) -> (MessageEvent, Arc<AsyncMutex<Vec<String>>>) {
    let buf = Arc::new(AsyncMutex::new(Vec::new()));
    let user = User::new(nick, nick, "host.example");
    let event = MessageEvent::new(user, text, ReplySink::Buffer(Arc::clone(&buf)));
    (event, buf)
}
