//! Stable exit codes for `toolkit` CLI commands.

use crate::error::ErrorKind;

/// Command succeeded and printed its result.
pub const OK: i32 = 0;
/// Invalid argument (unknown operation, malformed unit) or other failure.
pub const INVALID: i32 = 1;
/// Input is outside the operation's mathematical domain.
pub const DOMAIN: i32 = 2;
/// Input exceeds a computation bound.
pub const RESOURCE_LIMIT: i32 = 3;

/// Map an error classification to its exit code.
pub fn for_kind(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::InvalidArgument => INVALID,
        ErrorKind::Domain => DOMAIN,
        ErrorKind::ResourceLimit => RESOURCE_LIMIT,
    }
}
