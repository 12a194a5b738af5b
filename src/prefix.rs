//! Command prefix detection.
//!
//! A message is a command invocation if and only if it starts with the
//! configured prefix. The comparison is a byte-exact match at position 0;
//! no case folding or whitespace trimming is applied.

/// Strip the command prefix from a raw message.
///
/// Returns the remainder after the prefix, byte-for-byte, or `None` when the
/// message does not start with the prefix. An empty prefix matches every
/// message; whether that is sensible is the caller's configuration choice.
pub fn strip_command_prefix<'a>(prefix: &str, raw: &'a str) -> Option<&'a str> {
    raw.strip_prefix(prefix)
}
