//! The command manager: fixed adapter configuration and the callbacks the
//! framework and the embedding application drive it through.

use crate::client::ChatClient;
use crate::config::AdapterConfig;
use crate::dispatch::{
    Capability, CommandDispatcher, CommandRegistration, CommandRegistrationHandler,
    ExecutionCoordinator,
};
use crate::error::SenderMapError;
use crate::event::User;
use crate::listener::CommandListener;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};

/// Maps a protocol user to the application sender type.
///
/// Called once per incoming command message, never memoized. Must be fast
/// and non-blocking.
pub type SenderMapper<C> = Arc<dyn Fn(&User) -> Result<C, SenderMapError> + Send + Sync>;

/// Decides whether a sender holds a permission. Must be side-effect-free and
/// safe to call from whichever task the coordinator selects.
pub type PermissionFn<C> = Arc<dyn Fn(&C, &str) -> bool + Send + Sync>;

/// Adapter between a command framework and an IRC-style chat client.
///
/// Construction wires the fixed configuration; nothing is registered with
/// the chat client until [`attach`](Self::attach) installs the listener.
///
/// The sender type `C` is whatever the embedding application uses to
/// represent "who issued this command"; the adapter never inspects it.
pub struct IrcCommandManager<C: Send + Sync + 'static> {
    inner: Arc<ManagerInner<C>>,
    attached: AtomicBool,
}

/// Immutable configuration shared between the manager and its listener.
pub(crate) struct ManagerInner<C: Send + Sync + 'static> {
    client: Arc<dyn ChatClient>,
    dispatcher: Arc<dyn CommandDispatcher<C>>,
    coordinator: ExecutionCoordinator,
    registrations: Arc<dyn CommandRegistrationHandler>,
    permission_fn: PermissionFn<C>,
    sender_mapper: SenderMapper<C>,
    command_prefix: String,
    capabilities: Vec<Capability>,
}

impl<C: Send + Sync + 'static> ManagerInner<C> {
    pub(crate) fn command_prefix(&self) -> &str {
        &self.command_prefix
    }

    pub(crate) fn coordinator(&self) -> ExecutionCoordinator {
        self.coordinator
    }

    pub(crate) fn client(&self) -> &Arc<dyn ChatClient> {
        &self.client
    }

    pub(crate) fn dispatcher(&self) -> &Arc<dyn CommandDispatcher<C>> {
        &self.dispatcher
    }

    pub(crate) fn map_sender(&self, user: &User) -> Result<C, SenderMapError> {
        (self.sender_mapper)(user)
    }
}

impl<C: Send + Sync + 'static> IrcCommandManager<C> {
    /// Create a manager. Every parameter is required; there are no defaults.
    pub fn new(
        client: Arc<dyn ChatClient>,
        dispatcher: Arc<dyn CommandDispatcher<C>>,
        coordinator: ExecutionCoordinator,
        registrations: Arc<dyn CommandRegistrationHandler>,
        permission_fn: PermissionFn<C>,
        sender_mapper: SenderMapper<C>,
        command_prefix: impl Into<String>,
    ) -> Self {
        Self {
            inner: Arc::new(ManagerInner {
                client,
                dispatcher,
                coordinator,
                registrations,
                permission_fn,
                sender_mapper,
                command_prefix: command_prefix.into(),
                // No native command system to conflict with, so root
                // commands can be deleted freely.
                capabilities: vec![Capability::RootCommandDeletion],
            }),
            attached: AtomicBool::new(false),
        }
    }

    /// Create a manager from a loaded [`AdapterConfig`] plus the
    /// non-serializable collaborators.
    pub fn from_config(
        config: AdapterConfig,
        client: Arc<dyn ChatClient>,
        dispatcher: Arc<dyn CommandDispatcher<C>>,
        registrations: Arc<dyn CommandRegistrationHandler>,
        permission_fn: PermissionFn<C>,
        sender_mapper: SenderMapper<C>,
    ) -> Self {
        Self::new(
            client,
            dispatcher,
            config.coordinator,
            registrations,
            permission_fn,
            sender_mapper,
            config.command_prefix,
        )
    }

    /// Install the message listener into the chat client.
    ///
    /// Separate from construction so the manager is fully built before any
    /// external registry can see it. Second and later calls are no-ops.
    pub fn attach(&self) {
        if self.attached.swap(true, Ordering::SeqCst) {
            warn!("Command listener already attached");
            return;
        }
        let listener = Arc::new(CommandListener::new(Arc::clone(&self.inner)));
        self.inner.client.install_listener(listener);
        info!(prefix = %self.inner.command_prefix, "Command listener attached");
    }

    /// Whether `sender` holds `permission`, by the configured predicate.
    pub fn has_permission(&self, sender: &C, permission: &str) -> bool {
        (self.inner.permission_fn)(sender, permission)
    }

    /// The configured command prefix. A message is classed as a command if,
    /// and only if, it starts with this prefix.
    pub fn command_prefix(&self) -> &str {
        &self.inner.command_prefix
    }

    /// Forward a command registration to the framework's handler.
    pub fn register_command(&self, registration: &CommandRegistration) -> bool {
        let accepted = self.inner.registrations.command_registered(registration);
        debug!(command = %registration.name, accepted, "Command registration forwarded");
        accepted
    }

    /// Framework features this adapter supports.
    pub fn capabilities(&self) -> &[Capability] {
        &self.inner.capabilities
    }

    /// Handle to the underlying chat client.
    pub fn client(&self) -> &Arc<dyn ChatClient> {
        &self.inner.client
    }
}
