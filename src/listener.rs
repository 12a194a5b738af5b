//! Message event listener: the adapter's dispatch path.
//!
//! One listener instance serves the whole client lifetime; each incoming
//! message is processed independently against the fixed configuration.
//! Flow per message: prefix check, sender mapping, context seeding, one
//! call into the framework seam. Failures come back as values and are
//! translated right here; nothing escapes to the chat runtime.

use crate::client::MessageListener;
use crate::context::{CLIENT_KEY, CommandContext, MESSAGE_EVENT_KEY};
use crate::dispatch::ExecutionCoordinator;
use crate::event::MessageEvent;
use crate::manager::ManagerInner;
use crate::prefix::strip_command_prefix;
use crate::{telemetry, translate};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{Instrument, warn};

/// Listener installed into the chat client by
/// [`IrcCommandManager::attach`](crate::manager::IrcCommandManager::attach).
pub(crate) struct CommandListener<C: Send + Sync + 'static> {
    inner: Arc<ManagerInner<C>>,
}

impl<C: Send + Sync + 'static> CommandListener<C> {
    pub(crate) fn new(inner: Arc<ManagerInner<C>>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<C: Send + Sync + 'static> MessageListener for CommandListener<C> {
    async fn message_received(&self, event: MessageEvent) {
        let Some(input) = strip_command_prefix(self.inner.command_prefix(), event.text()) else {
            return;
        };
        let input = input.to_string();

        let span = telemetry::spans::dispatch(&event.user().nick, &input);
        match self.inner.coordinator() {
            ExecutionCoordinator::Simple => {
                dispatch_one(Arc::clone(&self.inner), event, input)
                    .instrument(span)
                    .await;
            }
            ExecutionCoordinator::Spawned => {
                tokio::spawn(dispatch_one(Arc::clone(&self.inner), event, input).instrument(span));
            }
        }
    }
}

/// Run one full dispatch cycle: map the sender, seed the context, execute,
/// translate any failure.
async fn dispatch_one<C: Send + Sync + 'static>(
    inner: Arc<ManagerInner<C>>,
    event: MessageEvent,
    input: String,
) {
    let sender = match inner.map_sender(event.user()) {
        Ok(sender) => sender,
        Err(e) => {
            warn!(user = %event.user().mask(), error = %e, "Dropping command from unmappable user");
            return;
        }
    };

    let mut context = CommandContext::new();
    context.set(&MESSAGE_EVENT_KEY, event);
    context.store(CLIENT_KEY, Arc::clone(inner.client()));

    if let Err(e) = inner.dispatcher().execute(sender, &input, &mut context).await {
        translate::respond_to_failure(&context, &e, inner.command_prefix()).await;
    }
}
