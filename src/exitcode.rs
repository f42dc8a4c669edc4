//! Process exit codes

/// Successful termination
pub const OK: i32 = 0;

/// Command input failed validation
pub const VALIDATION: i32 = 2;
