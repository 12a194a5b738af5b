//! Argument parsers for chat-protocol domain types.
//!
//! Parsers resolve one raw token against the invocation context. They are
//! pluggable: the framework owns when they run, this module only supplies
//! implementations for types the chat runtime knows about.

use crate::context::CommandContext;
use crate::error::DispatchError;
use crate::event::User;

/// Failure detail for user parse failures. Variables: `<input>`.
pub const ARGUMENT_PARSE_FAILURE_USER: &str = "'<input>' is not a valid user";

/// Resolves one raw argument token against the invocation context.
pub trait ArgumentParser: Send + Sync {
    /// Parsed value type.
    type Output;

    /// Parse a single token.
    fn parse(&self, context: &CommandContext, input: &str) -> Result<Self::Output, DispatchError>;
}

/// Parses a nickname into the [`User`] connected under that nick.
///
/// Resolution goes through the chat-client handle seeded into the context;
/// an unknown nick fails with [`ARGUMENT_PARSE_FAILURE_USER`] as the detail.
pub struct UserParser;

impl ArgumentParser for UserParser {
    type Output = User;

    fn parse(&self, context: &CommandContext, input: &str) -> Result<User, DispatchError> {
        let Some(client) = context.chat_client() else {
            return Err(DispatchError::Other(
                "chat client missing from command context".to_string(),
            ));
        };
        client
            .find_user(input)
            .ok_or_else(|| DispatchError::ArgumentParse {
                detail: ARGUMENT_PARSE_FAILURE_USER.replace("<input>", input),
            })
    }
}
