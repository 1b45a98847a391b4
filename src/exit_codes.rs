//! Exit code constants for the promptsmith CLI.
//!
//! - 0: Success
//! - 1: User error (bad args)
//! - 2: Configuration error (missing override file, invalid config)
//! - 3: Filesystem failure (read, capture write)
//! - 4: Template failure (malformed built-in skeleton)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or flag combinations.
pub const USER_ERROR: i32 = 1;

/// Configuration error: missing override file, unparsable or invalid config.
pub const CONFIG_ERROR: i32 = 2;

/// Filesystem failure: override read, memory read, capture write.
pub const IO_FAILURE: i32 = 3;

/// Template failure: the built-in skeleton could not be rendered.
pub const TEMPLATE_FAILURE: i32 = 4;
