//! Minimal pool usage: a factory, a few borrows, shutdown.
//!
//! Run with: cargo run --example basic

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tidepool::{BoxError, Pool, PoolOptions, PoolResult, ResourceFactory};

struct Session {
    id: usize,
}

struct SessionFactory {
    next: AtomicUsize,
}

impl ResourceFactory for SessionFactory {
    type Resource = Session;

    fn create(&self) -> Result<Session, BoxError> {
        Ok(Session {
            id: self.next.fetch_add(1, Ordering::Relaxed),
        })
    }
}

#[tokio::main]
async fn main() -> PoolResult<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let options = PoolOptions::new()
        .with_min_objects(2)
        .with_max_objects(8)
        .with_sweep_frequency(Duration::from_millis(100));
    let pool = Pool::new(
        SessionFactory {
            next: AtomicUsize::new(0),
        },
        options,
    )?;

    {
        let session = pool.acquire().await?;
        println!("borrowed session {}", session.id);
    } // dropped here: returned to the pool, not destroyed

    // give the grow loop a couple of sweeps to reach min_objects
    tokio::time::sleep(Duration::from_millis(300)).await;
    println!(
        "available: {}, active: {}",
        pool.available_count(),
        pool.active_count()
    );

    pool.shutdown()?;
    Ok(())
}
