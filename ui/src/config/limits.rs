/// Hard limits applied when validating user configuration

/// Smallest page a source may be asked for
pub const MIN_PAGE_SIZE: u32 = 1;

/// Largest page a source may be asked for
pub const MAX_PAGE_SIZE: u32 = 500;

/// Largest trigger distance, in rows, from the arrival edge
pub const MAX_THRESHOLD_ROWS: u32 = 1000;

/// Longest fetch timeout (10 minutes)
pub const MAX_FETCH_TIMEOUT_MS: u64 = 600_000;

/// Bounds of the demo source's simulated failure probability
pub const MIN_FAILURE_RATE: f64 = 0.0;
pub const MAX_FAILURE_RATE: f64 = 1.0;

/// Bounds of the concurrent fetch pool
pub const MIN_TASK_POOL_SIZE: usize = 1;
pub const MAX_TASK_POOL_SIZE: usize = 64;
