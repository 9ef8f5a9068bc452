//! Error types for the pool

use std::time::Duration;
use thiserror::Error;

/// Boxed error produced by [`ResourceFactory`](crate::ResourceFactory)
/// implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum PoolError {
    /// The factory failed while instantiating a new resource.
    #[error("error instantiating pooled resource")]
    Creation(#[source] BoxError),

    /// The factory failed while activating a freshly created resource.
    /// The half-built resource has already been destroyed.
    #[error("error activating pooled resource")]
    Activation(#[source] BoxError),

    /// The pool was at capacity and nothing was released within the
    /// acquisition timeout.
    #[error("pool exhausted: no resource became available within {0:?}")]
    Exhausted(Duration),

    /// The caller's cancellation token fired during acquisition.
    #[error("acquisition was cancelled")]
    Cancelled,

    /// Shutdown was requested while resources are still borrowed.
    #[error("cannot shut down: {active} resource(s) still active")]
    ActiveResources { active: usize },

    /// The pool has been shut down and no longer lends resources.
    #[error("pool has been shut down")]
    Closed,

    /// The supplied [`PoolOptions`](crate::PoolOptions) are inconsistent.
    #[error("invalid pool options: {0}")]
    InvalidOptions(&'static str),
}

pub type PoolResult<T> = Result<T, PoolError>;
