//! Error codes and exit status for aiqctl
//!
//! Standard exit codes for different failure modes, so scripts driving
//! the tracker can branch on the outcome.

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when a milestone was already completed
pub const EXIT_ALREADY_COMPLETED: i32 = 64;

/// Exit code when a level id is not in the learning path
pub const EXIT_UNKNOWN_LEVEL: i32 = 65;
