//! Parallelism configuration for the CPU runtime

/// Default minimum number of rows handed to one rayon task
pub const DEFAULT_MIN_ROWS_PER_TASK: usize = 64;

/// Controls how the CPU runtime spreads rows over threads.
///
/// # Example
///
/// ```
/// use rowsort::runtime::cpu::ParallelismConfig;
/// let config = ParallelismConfig::default()
///     .with_max_threads(4)
///     .with_min_rows_per_task(16);
/// assert_eq!(config.max_threads(), Some(4));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParallelismConfig {
    max_threads: Option<usize>,
    min_rows_per_task: usize,
}

impl Default for ParallelismConfig {
    fn default() -> Self {
        Self {
            max_threads: None,
            min_rows_per_task: DEFAULT_MIN_ROWS_PER_TASK,
        }
    }
}

impl ParallelismConfig {
    /// Run every call on the calling thread.
    pub fn sequential() -> Self {
        Self::default().with_max_threads(1)
    }

    /// Use a dedicated pool of `threads` workers instead of the global rayon pool.
    pub fn with_max_threads(mut self, threads: usize) -> Self {
        self.max_threads = Some(threads);
        self
    }

    /// Minimum rows per rayon task; inputs with fewer than twice this many
    /// rows run sequentially.
    pub fn with_min_rows_per_task(mut self, rows: usize) -> Self {
        self.min_rows_per_task = rows;
        self
    }

    /// Dedicated pool size, `None` for the global pool
    #[inline]
    pub fn max_threads(&self) -> Option<usize> {
        self.max_threads
    }

    /// Minimum rows per rayon task
    #[inline]
    pub fn min_rows_per_task(&self) -> usize {
        self.min_rows_per_task
    }

    /// Whether this configuration forbids multi-threading
    #[inline]
    pub fn is_sequential(&self) -> bool {
        self.max_threads == Some(1)
    }
}
