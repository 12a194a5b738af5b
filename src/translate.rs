//! Failure-to-reply translation.
//!
//! Every failing dispatch produces exactly one reply, sent through the event
//! recovered from the invocation context. The translator never retries and
//! never re-raises. Internal causes go to the diagnostic log, not into the
//! chat channel.

use crate::context::{CommandContext, MESSAGE_EVENT_KEY};
use crate::error::DispatchError;
use tracing::{debug, error};

/// Reply to the event whose dispatch produced `error`.
///
/// The event must have been seeded into the context before dispatch. A
/// context without one is a defect in the embedding; it is logged rather
/// than panicking, and the failure stays unanswered.
pub(crate) async fn respond_to_failure(
    context: &CommandContext,
    error: &DispatchError,
    command_prefix: &str,
) {
    let Some(event) = context.get(&MESSAGE_EVENT_KEY) else {
        error!(
            code = error.error_code(),
            "No message event in context for failed dispatch"
        );
        return;
    };

    if let DispatchError::Execution(cause) = error {
        error!(error = %cause, "Command execution failed");
    }

    let reply = error.reply_text(command_prefix);
    if let Err(e) = event.respond_with(reply).await {
        debug!(error = %e, code = error.error_code(), "Failed to deliver failure reply");
    }
}
