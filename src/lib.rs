//! # tidepool
//!
//! Bounded, concurrency-safe object pool with transparent auto-return.
//!
//! Resources are produced by a caller-supplied [`ResourceFactory`], borrowed
//! through [`Pool::acquire`], and handed back by simply dropping the returned
//! [`Pooled`] facade — the drop is intercepted and routed to the pool's
//! release path instead of tearing the resource down. Two background tasks
//! keep the pool between its configured bounds: a grow loop that tops it up
//! to the minimum and a prune loop that destroys surplus idle resources.
//!
//! ## Features
//!
//! - Lock-free fast path for acquire and release
//! - On-demand creation up to a hard maximum, with CAS admission so
//!   concurrent acquires never overshoot it
//! - Bounded wait with timeout and cancellation when the pool is exhausted
//! - Periodic background grow and prune maintenance
//! - Activation/passivation gates around resource lifecycle
//!
//! ## Quick start
//!
//! ```
//! use tidepool::{BoxError, Pool, PoolOptions, ResourceFactory};
//!
//! struct BufferFactory;
//!
//! impl ResourceFactory for BufferFactory {
//!     type Resource = Vec<u8>;
//!
//!     fn create(&self) -> Result<Vec<u8>, BoxError> {
//!         Ok(Vec::with_capacity(4096))
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> tidepool::PoolResult<()> {
//! let pool = Pool::new(BufferFactory, PoolOptions::default())?;
//!
//! let mut buffer = pool.acquire().await?;
//! buffer.extend_from_slice(b"hello");
//! drop(buffer); // done-signal: back to the pool, not deallocated
//!
//! assert_eq!(pool.available_count(), 1);
//! pool.shutdown()?;
//! # Ok(())
//! # }
//! ```

mod errors;
mod factory;
mod handle;
mod options;
mod pool;

pub use errors::{BoxError, PoolError, PoolResult};
pub use factory::ResourceFactory;
pub use handle::Pooled;
pub use options::PoolOptions;
pub use pool::{LifecycleGate, Pool, PoolBuilder};
