//! Telemetry utilities for dispatch observability.

/// Standardized span constructors.
pub mod spans {
    use tracing::{Span, info_span};

    /// Create a span covering one command dispatch.
    ///
    /// Only the command word goes into the span; arguments may carry user
    /// content and stay out of the telemetry stream.
    pub fn dispatch(nick: &str, input: &str) -> Span {
        let command = input.split_whitespace().next().unwrap_or("");
        info_span!("dispatch", nick = %nick, command = %command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_span_from_empty_input() {
        // Must not panic on a prefix-only message.
        let _span = spans::dispatch("alice", "");
    }
}
