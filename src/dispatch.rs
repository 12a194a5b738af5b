//! Command framework seam.
//!
//! The framework that matches, parses, and runs commands lives behind these
//! traits. The adapter's obligations at this seam: hand over the mapped
//! sender, the input with the prefix already stripped, and a seeded context;
//! then translate whatever failure comes back.

use crate::context::CommandContext;
use crate::error::DispatchError;
use async_trait::async_trait;
use serde::Deserialize;

/// Execution entry point of the command framework.
#[async_trait]
pub trait CommandDispatcher<C>: Send + Sync
where
    C: Send + Sync + 'static,
{
    /// Match, parse, and run one command invocation.
    ///
    /// `input` is the message text with the command prefix stripped,
    /// everything after it preserved byte-for-byte. The context arrives
    /// seeded with [`crate::context::MESSAGE_EVENT_KEY`] and
    /// [`crate::context::CLIENT_KEY`] and stays alive until this call
    /// returns.
    async fn execute(
        &self,
        sender: C,
        input: &str,
        context: &mut CommandContext,
    ) -> Result<(), DispatchError>;
}

/// Descriptor forwarded to the framework when a command is registered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandRegistration {
    /// Root command word, without prefix.
    pub name: String,
    /// Human-readable syntax, e.g. `"ban <user> [reason]"`.
    pub syntax: String,
    /// Permission string gating the command, if any.
    pub permission: Option<String>,
}

/// Called by the manager every time a command is registered.
pub trait CommandRegistrationHandler: Send + Sync {
    /// Accept or reject a registration.
    fn command_registered(&self, registration: &CommandRegistration) -> bool;
}

/// How dispatched commands are scheduled.
///
/// `Simple` runs each command on the task delivering the event; `Spawned`
/// hands off to the tokio runtime. Parsers and command bodies must be
/// thread safe under `Spawned`; commands that block should not run under
/// `Simple`.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionCoordinator {
    Simple,
    Spawned,
}

/// Optional framework features the adapter advertises.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    /// Root commands can be unregistered at runtime.
    RootCommandDeletion,
}
