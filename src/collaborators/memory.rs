use async_trait::async_trait;
use parking_lot::Mutex;

use super::SampleStore;
use crate::error::BoxError;
use crate::sample::DepthSample;

/// Thread-safe in-process store. `save()` appends, `samples()` snapshots.
#[derive(Debug, Default)]
pub struct MemorySampleStore {
    inner: Mutex<Vec<DepthSample>>,
}

impl MemorySampleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything saved so far, in save order.
    pub fn samples(&self) -> Vec<DepthSample> {
        self.inner.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

#[async_trait]
impl SampleStore for MemorySampleStore {
    async fn save(&self, sample: DepthSample) -> Result<(), BoxError> {
        self.inner.lock().push(sample);
        Ok(())
    }
}
