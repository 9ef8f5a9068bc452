//! Factory contract for producing pooled resources

use crate::errors::BoxError;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Produces and prepares resources on behalf of a pool.
///
/// `create` runs synchronously, both on the acquire creation path and inside
/// the background grow loop. `activate` runs after a successful `create`
/// unless the pool's activation gate vetoes it; if activation fails, the
/// half-built resource is destroyed before the error is surfaced to the
/// caller. The cancellation token handed to `activate` is the caller's (or
/// the maintenance loop's) — the pool itself does not interrupt an in-flight
/// activation, but the factory may choose to observe the token.
///
/// # Examples
///
/// ```
/// use tidepool::{BoxError, ResourceFactory};
///
/// struct BufferFactory;
///
/// impl ResourceFactory for BufferFactory {
///     type Resource = Vec<u8>;
///
///     fn create(&self) -> Result<Vec<u8>, BoxError> {
///         Ok(Vec::with_capacity(4096))
///     }
/// }
/// ```
#[async_trait]
pub trait ResourceFactory: Send + Sync + 'static {
    type Resource: Send + 'static;

    /// Instantiate a new resource.
    fn create(&self) -> Result<Self::Resource, BoxError>;

    /// Prepare a freshly created resource for use. Defaults to a no-op.
    async fn activate(
        &self,
        _resource: &mut Self::Resource,
        _cancel: &CancellationToken,
    ) -> Result<(), BoxError> {
        Ok(())
    }
}
