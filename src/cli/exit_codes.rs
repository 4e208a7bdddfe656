//! Process exit codes.

/// Successful operation, including a verification that found the signature invalid.
pub const EXIT_SUCCESS: i32 = 0;

/// Any failure: bad arguments, unknown key type, unreadable key, I/O error.
pub const EXIT_ERROR: i32 = 1;
