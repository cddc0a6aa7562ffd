//! Per-call endpoint pool with random draw-without-replacement
//!
//! A call may be attempted against several base URLs for failover. Each
//! logical call duplicates the configured URL list into an `EndpointPool`
//! and draws one URL per attempt, uniformly at random and without
//! replacement, so the same URL is never retried twice within one call.
//! The configured list on the client handle is never mutated.
//!
//! This is best-effort failover across a small static list, not load
//! balancing: no health tracking, no weighting, no ordering guarantees on
//! the remaining elements.

use rand::Rng;

/// Shrinking working copy of the configured endpoint URLs
///
/// # Examples
///
/// ```rust
/// use callr_client::EndpointPool;
///
/// let mut pool = EndpointPool::new(&["https://a/".to_string(), "https://b/".to_string()]);
/// let first = pool.draw().unwrap();
/// let second = pool.draw().unwrap();
/// assert_ne!(first, second);
/// assert!(pool.draw().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct EndpointPool {
    urls: Vec<String>,
}

impl EndpointPool {
    /// Duplicate the configured URL list into a working pool
    pub fn new(urls: &[String]) -> Self {
        Self {
            urls: urls.to_vec(),
        }
    }

    /// Number of URLs still available in this pool
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Whether the pool has been consumed
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Remove and return one URL chosen uniformly at random
    ///
    /// Returns `None` once the pool is exhausted. Uses `swap_remove`, so the
    /// order of the remaining elements is not preserved.
    pub fn draw(&mut self) -> Option<String> {
        if self.urls.is_empty() {
            return None;
        }
        let index = rand::thread_rng().gen_range(0..self.urls.len());
        Some(self.urls.swap_remove(index))
    }
}
