use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use queue_profiler::collaborators::{
    JsonLinesSampleStore, RedisDepthSource, RedisSampleStore, SampleStore, TokioDelay,
};
use queue_profiler::config::{Settings, StoreKind};
use queue_profiler::{redis_client, telemetry, Sampler};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::parse();
    telemetry::init();

    info!(
        queue = %settings.queue,
        kind = ?settings.queue_kind,
        count = settings.count,
        delay_ms = settings.delay_ms,
        store = ?settings.store,
        "starting queue profiler"
    );

    // ── 1. Connect to Redis ──────────────────────────────────────
    let redis = redis_client::connect(&settings.redis_url)
        .await
        .with_context(|| format!("cannot connect to Redis at {}", settings.redis_url))?;

    // ── 2. Wire collaborators ────────────────────────────────────
    let source = Arc::new(RedisDepthSource::new(redis.clone(), settings.queue_kind));
    let store: Arc<dyn SampleStore> = match settings.store {
        StoreKind::Redis => Arc::new(
            RedisSampleStore::new(redis)
                .with_key_prefix(settings.key_prefix.clone())
                .with_max_len(settings.max_len),
        ),
        StoreKind::Stdout => Arc::new(JsonLinesSampleStore::stdout()),
    };
    let sampler = Sampler::new(source, Arc::new(TokioDelay), store, settings.queue.clone());

    // ── 3. Sample until done, failed, or interrupted ─────────────
    tokio::select! {
        result = sampler.run(settings.count, settings.delay()) => {
            result.with_context(|| format!("sampling queue '{}' failed", settings.queue))?;
        }
        _ = tokio::signal::ctrl_c() => {
            warn!("interrupted; samples already saved are kept");
        }
    }

    Ok(())
}
