//! Unified error handling for ircbind.
//!
//! Dispatch failures form a closed taxonomy matching the command framework's
//! own failure kinds. Each variant has exactly one user-visible reply,
//! produced by [`DispatchError::reply_text`]; the exhaustive match means a
//! new kind cannot land without also deciding its reply.

use thiserror::Error;

// ============================================================================
// Reply templates
// ============================================================================

/// Fixed reply for command bodies that failed internally. The cause goes to
/// the diagnostic log, never into the chat channel.
pub const MESSAGE_INTERNAL_ERROR: &str =
    "An internal error occurred while attempting to perform this command.";

/// Reply prefix for syntax failures, followed by the command prefix and the
/// framework-computed correct syntax.
pub const MESSAGE_INVALID_SYNTAX: &str = "Invalid Command Syntax. Correct command syntax is: ";

/// Fixed reply for permission denials.
pub const MESSAGE_NO_PERMS: &str =
    "I'm sorry, but you do not have permission to perform this command. \
     Please contact the server administrators if you believe that this is in error.";

/// Fixed reply for unmatched command words.
pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";

// ============================================================================
// Dispatch errors (command processing)
// ============================================================================

/// Errors the command framework can raise while dispatching one invocation.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Unclassified failure; its message is shown to the user as-is.
    #[error("{0}")]
    Other(String),

    /// The command body itself failed.
    #[error("command execution failed")]
    Execution(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// An argument parser rejected its input.
    #[error("invalid command argument: {detail}")]
    ArgumentParse {
        /// Parser-supplied failure detail, appended to the reply.
        detail: String,
    },

    /// No registered command matched the input.
    #[error("unknown command")]
    UnknownCommand,

    /// The sender failed the permission check for the matched command.
    #[error("no permission")]
    NoPermission,

    /// The matched command does not accept this sender type.
    #[error("{message}")]
    InvalidSender {
        /// Framework-supplied explanation, shown to the user as-is.
        message: String,
    },

    /// The input matched a command but not its syntax.
    #[error("invalid syntax, expected: {correct_syntax}")]
    InvalidSyntax {
        /// Framework-computed correct syntax, without the command prefix.
        correct_syntax: String,
    },
}

impl DispatchError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Other(_) => "other",
            Self::Execution(_) => "execution",
            Self::ArgumentParse { .. } => "argument_parse",
            Self::UnknownCommand => "unknown_command",
            Self::NoPermission => "no_permission",
            Self::InvalidSender { .. } => "invalid_sender",
            Self::InvalidSyntax { .. } => "invalid_syntax",
        }
    }

    /// Produce the single-line reply sent back into the originating context.
    ///
    /// `command_prefix` is only consulted for syntax failures, where the
    /// corrected invocation must be shown the way the user would type it.
    pub fn reply_text(&self, command_prefix: &str) -> String {
        match self {
            Self::Other(message) => message.clone(),
            Self::Execution(_) => MESSAGE_INTERNAL_ERROR.to_string(),
            Self::ArgumentParse { detail } => format!("Invalid Command Argument{detail}"),
            Self::UnknownCommand => MESSAGE_UNKNOWN_COMMAND.to_string(),
            Self::NoPermission => MESSAGE_NO_PERMS.to_string(),
            Self::InvalidSender { message } => message.clone(),
            Self::InvalidSyntax { correct_syntax } => {
                format!("{MESSAGE_INVALID_SYNTAX}{command_prefix}{correct_syntax}")
            }
        }
    }
}

// ============================================================================
// Adapter-level errors
// ============================================================================

/// A protocol user could not be mapped to the application sender type.
///
/// Raised by the embedding application's sender mapper; the listener logs it
/// and drops the event without entering the framework.
#[derive(Debug, Error)]
#[error("sender mapping failed: {0}")]
pub struct SenderMapError(pub String);

/// The reply sink for an event is gone (connection writer dropped).
#[derive(Debug, Error)]
#[error("reply channel closed")]
pub struct ReplyError;
