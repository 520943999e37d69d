//! CPU client

use super::config::ParallelismConfig;
use crate::error::{Error, Result};
#[cfg(feature = "rayon")]
use std::sync::Arc;

/// CPU client for operation dispatch
///
/// Cheap to construct and clone. Without a dedicated thread count, work runs
/// on rayon's global pool.
#[derive(Clone, Debug, Default)]
pub struct CpuClient {
    config: ParallelismConfig,
    #[cfg(feature = "rayon")]
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl CpuClient {
    /// Create a client with the default parallelism settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client with explicit parallelism settings.
    ///
    /// A `max_threads` above one builds a dedicated rayon pool of that size.
    /// Fails if `max_threads` is zero or the pool cannot be built.
    pub fn with_parallelism(config: ParallelismConfig) -> Result<Self> {
        if config.max_threads() == Some(0) {
            return Err(Error::InvalidArgument {
                arg: "max_threads",
                reason: "thread count must be at least 1".to_string(),
            });
        }

        #[cfg(feature = "rayon")]
        let pool = match config.max_threads() {
            Some(threads) if threads > 1 => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("rowsort-{i}"))
                    .build()
                    .map_err(|e| Error::ThreadPool(e.to_string()))?;
                log::debug!("rowsort: built dedicated pool with {threads} threads");
                Some(Arc::new(pool))
            }
            _ => None,
        };

        Ok(Self {
            config,
            #[cfg(feature = "rayon")]
            pool,
        })
    }

    /// Parallelism settings of this client
    #[inline]
    pub fn parallelism(&self) -> &ParallelismConfig {
        &self.config
    }

    /// Minimum rows per rayon task (never zero)
    #[inline]
    pub fn rayon_min_len(&self) -> usize {
        self.config.min_rows_per_task().max(1)
    }

    /// Run `op` inside this client's dedicated pool, or directly if it has none.
    #[cfg(feature = "rayon")]
    pub fn install_parallelism<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }

    /// Whether a call over `rows` rows should fan out across threads
    pub(crate) fn should_parallelize(&self, rows: usize) -> bool {
        #[cfg(feature = "rayon")]
        {
            !self.config.is_sequential() && rows >= 2 * self.rayon_min_len()
        }
        #[cfg(not(feature = "rayon"))]
        {
            let _ = rows;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_threads_rejected() {
        let err = CpuClient::with_parallelism(ParallelismConfig::default().with_max_threads(0))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { arg: "max_threads", .. }));
    }

    #[test]
    fn test_sequential_client_never_parallelizes() {
        let client = CpuClient::with_parallelism(ParallelismConfig::sequential()).unwrap();
        assert!(!client.should_parallelize(1_000_000));
    }

    #[test]
    fn test_small_inputs_stay_sequential() {
        let client = CpuClient::with_parallelism(
            ParallelismConfig::default().with_min_rows_per_task(8),
        )
        .unwrap();
        assert!(!client.should_parallelize(15));
        assert_eq!(client.should_parallelize(16), cfg!(feature = "rayon"));
    }

    #[test]
    fn test_min_len_never_zero() {
        let client =
            CpuClient::with_parallelism(ParallelismConfig::default().with_min_rows_per_task(0))
                .unwrap();
        assert_eq!(client.rayon_min_len(), 1);
    }
}
