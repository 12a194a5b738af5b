//! ircbind - command dispatch bindings for IRC-style chat clients.
//!
//! This crate adapts a generic command-processing framework to an IRC-style
//! chat runtime. It decides which incoming messages are command invocations,
//! maps protocol users to the application's sender type, seeds the
//! per-invocation context, and turns dispatch failures into single-line
//! chat replies.
//!
//! The framework and the chat runtime stay behind trait seams
//! ([`CommandDispatcher`] and [`ChatClient`]); the adapter owns no command
//! matching and no wire protocol. Wiring order is two-phase: build an
//! [`IrcCommandManager`], then call [`IrcCommandManager::attach`] to start
//! receiving messages.

pub mod arguments;
pub mod client;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod event;
mod listener;
pub mod manager;
pub mod prefix;
mod telemetry;
mod translate;

pub use client::{ChatClient, MessageListener};
pub use config::{AdapterConfig, ConfigError};
pub use context::{CLIENT_KEY, CommandContext, ContextKey, MESSAGE_EVENT_KEY};
pub use dispatch::{
    Capability, CommandDispatcher, CommandRegistration, CommandRegistrationHandler,
    ExecutionCoordinator,
};
pub use error::{DispatchError, ReplyError, SenderMapError};
pub use event::{MessageEvent, ReplySink, User};
pub use manager::{IrcCommandManager, PermissionFn, SenderMapper};
pub use prefix::strip_command_prefix;
