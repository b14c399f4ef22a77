//! Capabilities the sampler depends on but does not implement.
//!
//! Each trait has exactly one method so production backends and test doubles
//! can be swapped freely. Implementations must not retry on the sampler's
//! behalf; any error they return ends the current run.

pub mod delay;
pub mod json_lines;
pub mod memory;
pub mod redis;

use async_trait::async_trait;
use chrono::TimeDelta;

use crate::error::BoxError;
use crate::sample::DepthSample;

pub use delay::TokioDelay;
pub use json_lines::JsonLinesSampleStore;
pub use memory::MemorySampleStore;
pub use self::redis::{QueueKind, RedisDepthSource, RedisSampleStore};

// ─── Capabilities ────────────────────────────────────────────────

/// Reports how many items are currently pending in a named queue.
#[async_trait]
pub trait DepthSource: Send + Sync {
    async fn depth(&self, queue_name: &str) -> Result<i64, BoxError>;
}

/// Suspends the caller for roughly `duration`.
///
/// The duration is signed. What a zero or negative value means is up to the
/// implementation.
#[async_trait]
pub trait Delay: Send + Sync {
    async fn delay(&self, duration: TimeDelta) -> Result<(), BoxError>;
}

/// Persists depth samples.
#[async_trait]
pub trait SampleStore: Send + Sync {
    async fn save(&self, sample: DepthSample) -> Result<(), BoxError>;
}
