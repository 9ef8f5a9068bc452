//! Pool engine: acquire/release protocol and background maintenance

use crate::errors::{PoolError, PoolResult};
use crate::factory::ResourceFactory;
use crate::handle::{Handle, Pooled, ReturnFn};
use crate::options::PoolOptions;

use crossbeam::queue::ArrayQueue;
use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Interval between polls while waiting on an exhausted pool.
const ACQUIRE_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Gate consulted before factory activation and before destruction during
/// shutdown passivation. Defaults to "always true" when not supplied.
pub type LifecycleGate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Bounded, concurrency-safe pool of factory-produced resources.
///
/// Cloning is cheap and yields another handle to the same pool. The two
/// maintenance tasks (grow and prune) are spawned at construction and stop
/// when the pool is shut down or the last clone is dropped.
pub struct Pool<F: ResourceFactory> {
    inner: Arc<PoolInner<F>>,
}

impl<F: ResourceFactory> std::fmt::Debug for Pool<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pool").finish_non_exhaustive()
    }
}

impl<F: ResourceFactory> Clone for Pool<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct PoolInner<F: ResourceFactory> {
    factory: F,
    options: PoolOptions,
    /// Idle handles, safe for lock-free concurrent push/pop.
    available: ArrayQueue<Handle<F::Resource>>,
    /// Ids of currently borrowed handles; the resource itself travels inside
    /// the caller's facade while borrowed.
    active: DashMap<u64, ()>,
    /// Live resources plus creation slots reserved but not yet filled.
    /// Admission goes through a CAS on this counter so concurrent creations
    /// cannot overshoot `max_objects`.
    resident: AtomicUsize,
    next_id: AtomicU64,
    closed: AtomicBool,
    maintenance: CancellationToken,
    activation_gate: Option<LifecycleGate<F::Resource>>,
    passivation_gate: Option<LifecycleGate<F::Resource>>,
}

/// Builder for [`Pool`], carrying the optional lifecycle gates.
pub struct PoolBuilder<F: ResourceFactory> {
    factory: F,
    options: PoolOptions,
    activation_gate: Option<LifecycleGate<F::Resource>>,
    passivation_gate: Option<LifecycleGate<F::Resource>>,
}

impl<F: ResourceFactory> PoolBuilder<F> {
    /// Replace the default [`PoolOptions`].
    pub fn options(mut self, options: PoolOptions) -> Self {
        self.options = options;
        self
    }

    /// Gate whether a freshly created resource goes through factory
    /// activation. A `false` verdict skips activation for that resource.
    pub fn activation_gate(
        mut self,
        gate: impl Fn(&F::Resource) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.activation_gate = Some(Arc::new(gate));
        self
    }

    /// Gate whether an idle resource is actually destroyed during shutdown.
    /// A `false` verdict skips destruction, leaving teardown to whoever
    /// manages the resource outside the pool.
    pub fn passivation_gate(
        mut self,
        gate: impl Fn(&F::Resource) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.passivation_gate = Some(Arc::new(gate));
        self
    }

    /// Validate the options, build the pool, and spawn its maintenance
    /// tasks. Must be called within a Tokio runtime.
    pub fn build(self) -> PoolResult<Pool<F>> {
        self.options.validate()?;
        let inner = Arc::new(PoolInner {
            available: ArrayQueue::new(self.options.max_objects),
            active: DashMap::new(),
            resident: AtomicUsize::new(0),
            next_id: AtomicU64::new(0),
            closed: AtomicBool::new(false),
            maintenance: CancellationToken::new(),
            activation_gate: self.activation_gate,
            passivation_gate: self.passivation_gate,
            factory: self.factory,
            options: self.options,
        });
        PoolInner::spawn_maintenance(&inner);
        Ok(Pool { inner })
    }
}

impl<F: ResourceFactory> Pool<F> {
    /// Start building a pool around `factory`.
    pub fn builder(factory: F) -> PoolBuilder<F> {
        PoolBuilder {
            factory,
            options: PoolOptions::default(),
            activation_gate: None,
            passivation_gate: None,
        }
    }

    /// Create a pool with the given options and default lifecycle gates.
    /// Must be called within a Tokio runtime.
    pub fn new(factory: F, options: PoolOptions) -> PoolResult<Self> {
        Self::builder(factory).options(options).build()
    }

    /// Borrow a resource from the pool.
    ///
    /// Tries the available set first, then creates a new resource if the
    /// pool is under `max_objects`, and otherwise waits for a release until
    /// `acquisition_timeout` elapses. Dropping the returned [`Pooled`]
    /// facade hands the resource back.
    pub async fn acquire(&self) -> PoolResult<Pooled<F::Resource>> {
        self.acquire_with(CancellationToken::new()).await
    }

    /// [`acquire`](Pool::acquire), observing a caller-supplied cancellation
    /// token before any work and between polls while waiting.
    pub async fn acquire_with(&self, cancel: CancellationToken) -> PoolResult<Pooled<F::Resource>> {
        let inner = &self.inner;
        if inner.closed.load(Ordering::Acquire) {
            return Err(PoolError::Closed);
        }
        if cancel.is_cancelled() {
            return Err(PoolError::Cancelled);
        }

        if let Some(handle) = inner.available.pop() {
            return Ok(inner.lend(handle));
        }

        if inner.reserve_slot() {
            match inner.create_resource(&cancel).await {
                Ok(handle) => return Ok(inner.lend(handle)),
                Err(err) => {
                    inner.forfeit_slot();
                    return Err(err);
                }
            }
        }

        self.block_for_available(cancel).await
    }

    /// Bounded wait for a release on an exhausted pool. Waiters poll on a
    /// fixed interval; no FIFO fairness is guaranteed among them.
    async fn block_for_available(
        &self,
        cancel: CancellationToken,
    ) -> PoolResult<Pooled<F::Resource>> {
        let timeout = self.inner.options.acquisition_timeout;
        let inner = Arc::clone(&self.inner);

        tokio::time::timeout(timeout, async move {
            loop {
                if let Some(handle) = inner.available.pop() {
                    return Ok(inner.lend(handle));
                }
                tokio::select! {
                    _ = cancel.cancelled() => return Err(PoolError::Cancelled),
                    _ = tokio::time::sleep(ACQUIRE_POLL_INTERVAL) => {}
                }
            }
        })
        .await
        .map_err(|_| PoolError::Exhausted(timeout))?
    }

    /// Number of idle resources.
    pub fn available_count(&self) -> usize {
        self.inner.available.len()
    }

    /// Number of currently borrowed resources.
    pub fn active_count(&self) -> usize {
        self.inner.active.len()
    }

    /// Shut the pool down.
    ///
    /// Fails with [`PoolError::ActiveResources`] while any resource is still
    /// borrowed, leaving the pool unchanged. On success the maintenance
    /// tasks are cancelled, every idle resource is passivated (destroyed
    /// unless the passivation gate vetoes it), and all later acquires fail
    /// with [`PoolError::Closed`]. Calling shutdown again is a no-op.
    pub fn shutdown(&self) -> PoolResult<()> {
        let inner = &self.inner;
        if inner.closed.swap(true, Ordering::AcqRel) {
            return Ok(());
        }

        let active = inner.active.len();
        if active > 0 {
            inner.closed.store(false, Ordering::Release);
            return Err(PoolError::ActiveResources { active });
        }

        inner.maintenance.cancel();

        let mut destroyed = 0usize;
        let mut vetoed = 0usize;
        while let Some(handle) = inner.available.pop() {
            inner.forfeit_slot();
            let resource = handle.resource;
            let destroy = inner
                .passivation_gate
                .as_ref()
                .is_none_or(|gate| gate(&resource));
            if destroy {
                drop(resource);
                destroyed += 1;
            } else {
                // Passivation veto: teardown belongs to whoever manages the
                // resource outside the pool.
                std::mem::forget(resource);
                vetoed += 1;
            }
        }
        debug!(destroyed, vetoed, "pool shut down");
        Ok(())
    }
}

impl<F: ResourceFactory> PoolInner<F> {
    /// Move a handle into the active set and wrap it in a caller facade.
    fn lend(self: &Arc<Self>, handle: Handle<F::Resource>) -> Pooled<F::Resource> {
        self.active.insert(handle.id, ());
        Pooled::new(handle.resource, handle.id, self.return_fn())
    }

    /// Type-erased return path captured by each facade. Holds a weak
    /// reference so a facade outliving the pool just drops its resource.
    fn return_fn(self: &Arc<Self>) -> ReturnFn<F::Resource> {
        let inner = Arc::downgrade(self);
        Arc::new(move |resource, id| {
            if let Some(inner) = inner.upgrade() {
                inner.release(Handle { id, resource });
            }
        })
    }

    /// Return a borrowed handle to the available set.
    ///
    /// Guarded by active-set membership: a handle whose id is not currently
    /// active (already returned, or never lent by this pool) is dropped
    /// without touching the sets.
    fn release(&self, handle: Handle<F::Resource>) {
        if self.active.remove(&handle.id).is_some() && self.available.push(handle).is_err() {
            self.forfeit_slot();
        }
    }

    fn reserve_slot(&self) -> bool {
        let max = self.options.max_objects;
        self.resident
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                (n < max).then_some(n + 1)
            })
            .is_ok()
    }

    fn forfeit_slot(&self) {
        self.resident.fetch_sub(1, Ordering::AcqRel);
    }

    /// Instantiate and (unless gated off) activate one resource. An
    /// activation failure drops the half-built resource before the error
    /// propagates.
    async fn create_resource(
        &self,
        cancel: &CancellationToken,
    ) -> PoolResult<Handle<F::Resource>> {
        let mut resource = self.factory.create().map_err(PoolError::Creation)?;
        let wants_activation = self
            .activation_gate
            .as_ref()
            .is_none_or(|gate| gate(&resource));
        if wants_activation {
            if let Err(err) = self.factory.activate(&mut resource, cancel).await {
                drop(resource);
                return Err(PoolError::Activation(err));
            }
        }
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        Ok(Handle { id, resource })
    }

    /// Spawn the grow and prune loops. Each holds only a weak reference and
    /// watches the maintenance token, so they stop on shutdown or once the
    /// last pool clone is gone.
    fn spawn_maintenance(inner: &Arc<Self>) {
        let frequency = inner.options.sweep_frequency;

        let weak = Arc::downgrade(inner);
        let token = inner.maintenance.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(frequency);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {}
                }
                let Some(inner) = weak.upgrade() else { break };
                inner.grow().await;
            }
        });

        let weak = Arc::downgrade(inner);
        let token = inner.maintenance.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(frequency);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {}
                }
                let Some(inner) = weak.upgrade() else { break };
                inner.prune();
            }
        });
    }

    /// One grow run: create resources toward `min_objects`, attempting at
    /// most `2 * min_objects` creations so a perpetually failing factory
    /// cannot spin the loop. A failed run does not stop future runs.
    async fn grow(&self) {
        let target = self.options.min_objects;
        let mut attempts = 0;
        while self.active.len() + self.available.len() < target && attempts < target * 2 {
            attempts += 1;
            if !self.reserve_slot() {
                break;
            }
            match self.create_resource(&self.maintenance).await {
                Ok(handle) => {
                    if self.available.push(handle).is_err() {
                        self.forfeit_slot();
                        break;
                    }
                }
                Err(err) => {
                    self.forfeit_slot();
                    warn!(error = %err, "background grow failed, retrying next sweep");
                    break;
                }
            }
        }
    }

    /// One prune run: destroy idle resources until the total size reaches
    /// `min_objects`. Active handles are never touched.
    fn prune(&self) {
        let min = self.options.min_objects;
        let mut current = self.active.len() + self.available.len();
        if current <= min || self.available.is_empty() {
            return;
        }

        let batch = self.available.len();
        let mut pruned = 0;
        for _ in 0..batch {
            if current <= min {
                break;
            }
            let Some(handle) = self.available.pop() else { break };
            drop(handle);
            self.forfeit_slot();
            current -= 1;
            pruned += 1;
        }
        if pruned > 0 {
            debug!(pruned, "pruned idle resources");
        }
    }
}

impl<F: ResourceFactory> Drop for PoolInner<F> {
    fn drop(&mut self) {
        self.maintenance.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::BoxError;
    use async_trait::async_trait;
    use std::io;
    use std::time::Instant;

    struct Conn {
        serial: usize,
        drops: Arc<AtomicUsize>,
    }

    impl Drop for Conn {
        fn drop(&mut self) {
            self.drops.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct ConnFactory {
        created: Arc<AtomicUsize>,
        activated: Arc<AtomicUsize>,
        drops: Arc<AtomicUsize>,
        fail_create: bool,
        fail_activate: bool,
    }

    fn factory() -> ConnFactory {
        ConnFactory {
            created: Arc::new(AtomicUsize::new(0)),
            activated: Arc::new(AtomicUsize::new(0)),
            drops: Arc::new(AtomicUsize::new(0)),
            fail_create: false,
            fail_activate: false,
        }
    }

    #[async_trait]
    impl ResourceFactory for ConnFactory {
        type Resource = Conn;

        fn create(&self) -> Result<Conn, BoxError> {
            // counts attempts, successful or not
            let serial = self.created.fetch_add(1, Ordering::SeqCst);
            if self.fail_create {
                return Err(io::Error::other("connect refused").into());
            }
            Ok(Conn {
                serial,
                drops: Arc::clone(&self.drops),
            })
        }

        async fn activate(
            &self,
            _resource: &mut Conn,
            _cancel: &CancellationToken,
        ) -> Result<(), BoxError> {
            if self.fail_activate {
                return Err(io::Error::other("handshake failed").into());
            }
            self.activated.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn options(min: usize, max: usize) -> PoolOptions {
        PoolOptions::new()
            .with_min_objects(min)
            .with_max_objects(max)
            .with_sweep_frequency(Duration::from_millis(20))
            .with_acquisition_timeout(Duration::from_millis(50))
    }

    #[tokio::test]
    async fn acquire_creates_on_demand_and_returns_on_drop() {
        let pool = Pool::new(factory(), options(0, 4)).unwrap();

        let conn = pool.acquire().await.unwrap();
        assert_eq!(pool.active_count(), 1);
        assert_eq!(pool.available_count(), 0);

        drop(conn);
        assert_eq!(pool.active_count(), 0);
        assert_eq!(pool.available_count(), 1);
    }

    #[tokio::test]
    async fn released_resource_is_reused() {
        let pool = Pool::new(factory(), options(0, 4)).unwrap();

        let first = pool.acquire().await.unwrap();
        let serial = first.serial;
        drop(first);

        let second = pool.acquire().await.unwrap();
        assert_eq!(second.serial, serial);
    }

    #[tokio::test]
    async fn exhausted_pool_times_out_then_recovers_after_release() {
        let pool = Pool::new(factory(), options(0, 1)).unwrap();
        let held = pool.acquire().await.unwrap();

        let started = Instant::now();
        let err = pool.acquire().await.unwrap_err();
        assert!(matches!(err, PoolError::Exhausted(_)));
        assert!(started.elapsed() >= Duration::from_millis(45));

        drop(held);
        let retry = pool.acquire().await.unwrap();
        assert_eq!(retry.serial, 0);
    }

    #[tokio::test]
    async fn blocked_acquire_succeeds_after_release() {
        // long sweep so prune cannot reclaim the released resource before
        // the waiter's next poll
        let pool = Pool::new(
            factory(),
            options(0, 1)
                .with_acquisition_timeout(Duration::from_secs(1))
                .with_sweep_frequency(Duration::from_secs(10)),
        )
        .unwrap();
        let held = pool.acquire().await.unwrap();

        let waiter = {
            let pool = pool.clone();
            tokio::spawn(async move { pool.acquire().await })
        };
        tokio::time::sleep(Duration::from_millis(30)).await;
        drop(held);

        let got = waiter.await.unwrap().unwrap();
        assert_eq!(got.serial, 0);
    }

    #[tokio::test]
    async fn concurrent_acquires_respect_max_objects() {
        let pool = Pool::new(factory(), options(0, 4)).unwrap();

        let mut tasks = Vec::new();
        for _ in 0..16 {
            let pool = pool.clone();
            tasks.push(tokio::spawn(async move { pool.acquire().await }));
        }

        let mut held = Vec::new();
        let mut exhausted = 0;
        for task in tasks {
            match task.await.unwrap() {
                Ok(conn) => held.push(conn),
                Err(PoolError::Exhausted(_)) => exhausted += 1,
                Err(other) => panic!("unexpected error: {other}"),
            }
        }

        assert_eq!(held.len(), 4);
        assert_eq!(exhausted, 12);
        assert_eq!(pool.active_count(), 4);
    }

    #[tokio::test]
    async fn double_release_of_the_same_id_is_a_noop() {
        let f = factory();
        let drops = Arc::clone(&f.drops);
        let pool = Pool::new(f, options(0, 4)).unwrap();

        let conn = pool.acquire().await.unwrap();
        let id = conn.id();
        drop(conn);
        assert_eq!(pool.available_count(), 1);

        // A stray handle carrying an id that is no longer active is dropped
        // without growing the available set.
        let stray = Handle {
            id,
            resource: Conn {
                serial: 99,
                drops: Arc::clone(&drops),
            },
        };
        pool.inner.release(stray);

        assert_eq!(pool.available_count(), 1);
        assert_eq!(pool.active_count(), 0);
    }

    #[tokio::test]
    async fn release_of_an_unknown_id_is_a_noop() {
        let f = factory();
        let drops = Arc::clone(&f.drops);
        let pool = Pool::new(f, options(0, 4)).unwrap();

        let _held = pool.acquire().await.unwrap();
        pool.inner.release(Handle {
            id: 4242,
            resource: Conn {
                serial: 77,
                drops,
            },
        });

        assert_eq!(pool.available_count(), 0);
        assert_eq!(pool.active_count(), 1);
    }

    #[tokio::test]
    async fn grow_raises_the_pool_to_min_objects() {
        let f = factory();
        let created = Arc::clone(&f.created);
        let pool = Pool::new(f, options(3, 10)).unwrap();

        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(pool.available_count(), 3);
        assert_eq!(created.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn prune_reclaims_idle_resources_down_to_min() {
        let f = factory();
        let drops = Arc::clone(&f.drops);
        let pool = Pool::new(f, options(1, 10)).unwrap();

        let mut held = Vec::new();
        for _ in 0..4 {
            held.push(pool.acquire().await.unwrap());
        }
        held.clear();

        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(pool.available_count(), 1);
        assert_eq!(drops.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn prune_leaves_active_resources_alone() {
        let pool = Pool::new(factory(), options(0, 10)).unwrap();

        let held = pool.acquire().await.unwrap();
        let idle = pool.acquire().await.unwrap();
        drop(idle);

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(pool.available_count(), 0);
        assert_eq!(pool.active_count(), 1);

        drop(held);
        assert_eq!(pool.available_count(), 1);
    }

    #[tokio::test]
    async fn failing_factory_surfaces_creation_error_and_grow_keeps_trying() {
        let mut f = factory();
        f.fail_create = true;
        let created = Arc::clone(&f.created);
        let pool = Pool::new(f, options(2, 10)).unwrap();

        let err = pool.acquire().await.unwrap_err();
        assert!(matches!(err, PoolError::Creation(_)));

        tokio::time::sleep(Duration::from_millis(100)).await;

        // each sweep attempts again despite the previous failure
        assert!(created.load(Ordering::SeqCst) >= 2);
        assert_eq!(pool.available_count(), 0);
    }

    #[tokio::test]
    async fn activation_failure_destroys_the_half_built_resource() {
        let mut f = factory();
        f.fail_activate = true;
        let drops = Arc::clone(&f.drops);
        let pool = Pool::new(f, options(0, 4)).unwrap();

        let err = pool.acquire().await.unwrap_err();
        assert!(matches!(err, PoolError::Activation(_)));
        assert_eq!(drops.load(Ordering::SeqCst), 1);
        assert_eq!(pool.active_count(), 0);
        assert_eq!(pool.available_count(), 0);
    }

    #[tokio::test]
    async fn activation_gate_can_skip_activation() {
        let f = factory();
        let activated = Arc::clone(&f.activated);
        let pool = Pool::builder(f)
            .options(options(0, 4))
            .activation_gate(|_conn: &Conn| false)
            .build()
            .unwrap();

        let _conn = pool.acquire().await.unwrap();
        assert_eq!(activated.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn shutdown_fails_while_resources_are_active() {
        let pool = Pool::new(factory(), options(0, 4)).unwrap();
        let held = pool.acquire().await.unwrap();

        let err = pool.shutdown().unwrap_err();
        assert!(matches!(err, PoolError::ActiveResources { active: 1 }));

        // the failed shutdown left the pool usable
        drop(held);
        assert_eq!(pool.available_count(), 1);
        pool.shutdown().unwrap();
    }

    #[tokio::test]
    async fn shutdown_destroys_idle_resources_and_rejects_new_acquires() {
        let f = factory();
        let drops = Arc::clone(&f.drops);
        let pool = Pool::new(f, options(0, 4)).unwrap();

        let conn = pool.acquire().await.unwrap();
        drop(conn);
        pool.shutdown().unwrap();

        assert_eq!(drops.load(Ordering::SeqCst), 1);
        assert_eq!(pool.available_count(), 0);
        assert!(matches!(pool.acquire().await, Err(PoolError::Closed)));

        // shutdown is idempotent
        pool.shutdown().unwrap();
    }

    #[tokio::test]
    async fn passivation_veto_skips_destruction_on_shutdown() {
        let f = factory();
        let drops = Arc::clone(&f.drops);
        let pool = Pool::builder(f)
            .options(options(0, 4))
            .passivation_gate(|_conn: &Conn| false)
            .build()
            .unwrap();

        let conn = pool.acquire().await.unwrap();
        drop(conn);
        pool.shutdown().unwrap();

        assert_eq!(drops.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn pre_cancelled_acquire_fails_immediately() {
        let pool = Pool::new(factory(), options(0, 1)).unwrap();
        let token = CancellationToken::new();
        token.cancel();

        let err = pool.acquire_with(token).await.unwrap_err();
        assert!(matches!(err, PoolError::Cancelled));
    }

    #[tokio::test]
    async fn cancellation_interrupts_a_blocked_acquire() {
        let pool = Pool::new(
            factory(),
            options(0, 1).with_acquisition_timeout(Duration::from_secs(5)),
        )
        .unwrap();
        let _held = pool.acquire().await.unwrap();

        let token = CancellationToken::new();
        let waiter = {
            let pool = pool.clone();
            let token = token.clone();
            tokio::spawn(async move { pool.acquire_with(token).await })
        };
        tokio::time::sleep(Duration::from_millis(30)).await;
        token.cancel();

        let err = waiter.await.unwrap().unwrap_err();
        assert!(matches!(err, PoolError::Cancelled));
    }

    #[tokio::test]
    async fn builder_rejects_invalid_options() {
        let err = Pool::new(factory(), options(5, 2)).unwrap_err();
        assert!(matches!(err, PoolError::InvalidOptions(_)));
    }
}
