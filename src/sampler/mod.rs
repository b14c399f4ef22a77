use std::sync::Arc;

use chrono::TimeDelta;
use tracing::{debug, info, instrument, warn};

use crate::collaborators::{Delay, DepthSource, SampleStore};
use crate::error::{Result, SamplerError};
use crate::sample::DepthSample;


/// Polls one named queue for its depth and records each reading.
///
/// Holds no state besides its collaborators and the queue name, so a single
/// instance can be run any number of times. Calls to [`Sampler::run`] on the
/// same instance must not overlap; build one sampler per concurrent task.
pub struct Sampler {
    source: Arc<dyn DepthSource>,
    delay: Arc<dyn Delay>,
    store: Arc<dyn SampleStore>,
    queue_name: String,
}

impl Sampler {
    /// Binds the three collaborators to `queue_name`. Performs no I/O.
    pub fn new(
        source: Arc<dyn DepthSource>,
        delay: Arc<dyn Delay>,
        store: Arc<dyn SampleStore>,
        queue_name: impl Into<String>,
    ) -> Self {
        Self {
            source,
            delay,
            store,
            queue_name: queue_name.into(),
        }
    }

    pub fn queue_name(&self) -> &str {
        &self.queue_name
    }

    /// Takes `execution_count` samples, waiting `delay_between` between
    /// consecutive samples and never after the last one.
    ///
    /// Each iteration queries the depth source, stamps the reading with the
    /// current UTC time and saves it. The first collaborator error ends the
    /// run; samples saved before it stay saved.
    #[instrument(
        name = "sampler.run",
        skip(self),
        fields(queue = %self.queue_name, delay_ms = delay_between.num_milliseconds())
    )]
    pub async fn run(&self, execution_count: u32, delay_between: TimeDelta) -> Result<()> {
        let result = self.sample_loop(execution_count, delay_between).await;

        match &result {
            Ok(()) => info!(samples = execution_count, "sampling run complete"),
            Err(e) => warn!(iteration = e.iteration(), error = %e, "sampling run failed"),
        }

        result
    }

    async fn sample_loop(&self, execution_count: u32, delay_between: TimeDelta) -> Result<()> {
        for i in 0..execution_count {
            let depth = self.source.depth(&self.queue_name).await.map_err(|source| {
                SamplerError::SourceUnavailable {
                    queue: self.queue_name.clone(),
                    iteration: i,
                    source,
                }
            })?;

            // Timestamp as close to the save as possible
            let sample = DepthSample::now(&self.queue_name, depth);
            debug!(iteration = i, depth, observed_at = %sample.observed_at, "saving sample");

            self.store
                .save(sample)
                .await
                .map_err(|source| SamplerError::PersistenceFailure {
                    queue: self.queue_name.clone(),
                    iteration: i,
                    source,
                })?;

            // Delay between samples only, never after the last one
            if i + 1 < execution_count {
                self.delay
                    .delay(delay_between)
                    .await
                    .map_err(|source| SamplerError::DelayFailure {
                        queue: self.queue_name.clone(),
                        iteration: i,
                        source,
                    })?;
            }
        }

        Ok(())
    }
}
