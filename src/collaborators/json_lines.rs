use std::io::Write;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::SampleStore;
use crate::error::BoxError;
use crate::sample::DepthSample;

/// Writes each sample as one JSON object per line and flushes after every
/// line, so a reader tailing the output sees samples as they are taken.
pub struct JsonLinesSampleStore<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesSampleStore<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl JsonLinesSampleStore<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

#[async_trait]
impl<W: Write + Send> SampleStore for JsonLinesSampleStore<W> {
    async fn save(&self, sample: DepthSample) -> Result<(), BoxError> {
        let line = serde_json::to_string(&sample)?;
        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}
