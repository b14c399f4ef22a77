use async_trait::async_trait;
use chrono::TimeDelta;

use super::Delay;
use crate::error::BoxError;

/// Sleeps on the Tokio timer. Zero and negative durations return at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn delay(&self, duration: TimeDelta) -> Result<(), BoxError> {
        // to_std() rejects negative values
        match duration.to_std() {
            Ok(d) if !d.is_zero() => tokio::time::sleep(d).await,
            _ => {}
        }
        Ok(())
    }
}
