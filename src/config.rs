//! Command-line configuration. Every flag can also be set from a
//! `QUEUE_PROFILER_*` environment variable.

use chrono::TimeDelta;
use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, ValueEnum};

use crate::collaborators::redis::DEFAULT_KEY_PREFIX;
use crate::collaborators::QueueKind;

pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379/";

/// Where samples are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// Append to a Redis stream per queue
    Redis,
    /// Print one JSON object per line
    Stdout,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "queue-profiler", version, about)]
pub struct Settings {
    /// Name (Redis key) of the queue to sample
    #[arg(long, env = "QUEUE_PROFILER_QUEUE", value_parser = NonEmptyStringValueParser::new())]
    pub queue: String,

    #[arg(long, env = "QUEUE_PROFILER_REDIS_URL", default_value = DEFAULT_REDIS_URL)]
    pub redis_url: String,

    /// How the queue is stored in Redis
    #[arg(long, env = "QUEUE_PROFILER_QUEUE_KIND", value_enum, default_value_t = QueueKind::List)]
    pub queue_kind: QueueKind,

    /// Number of samples to take
    #[arg(long, env = "QUEUE_PROFILER_COUNT", default_value_t = 60)]
    pub count: u32,

    /// Pause between samples in milliseconds. Zero or negative means no pause.
    #[arg(
        long,
        env = "QUEUE_PROFILER_DELAY_MS",
        default_value_t = 1000,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i64).range(-i64::MAX..)
    )]
    pub delay_ms: i64,

    #[arg(long, env = "QUEUE_PROFILER_STORE", value_enum, default_value_t = StoreKind::Redis)]
    pub store: StoreKind,

    /// Prefix for the per-queue sample stream key
    #[arg(long, env = "QUEUE_PROFILER_KEY_PREFIX", default_value = DEFAULT_KEY_PREFIX)]
    pub key_prefix: String,

    /// Approximate cap on the sample stream length
    #[arg(long, env = "QUEUE_PROFILER_MAX_LEN")]
    pub max_len: Option<u64>,
}

impl Settings {
    pub fn delay(&self) -> TimeDelta {
        TimeDelta::milliseconds(self.delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::try_parse_from(["queue-profiler", "--queue", "jobs"]).unwrap();

        assert_eq!(s.queue, "jobs");
        assert_eq!(s.redis_url, DEFAULT_REDIS_URL);
        assert_eq!(s.queue_kind, QueueKind::List);
        assert_eq!(s.count, 60);
        assert_eq!(s.delay(), TimeDelta::seconds(1));
        assert_eq!(s.store, StoreKind::Redis);
        assert_eq!(s.key_prefix, "queue-depth:");
        assert_eq!(s.max_len, None);
    }

    #[test]
    fn all_flags() {
        let s = Settings::try_parse_from([
            "queue-profiler",
            "--queue",
            "emails",
            "--redis-url",
            "redis://cache:6380/2",
            "--queue-kind",
            "sorted-set",
            "--count",
            "5",
            "--delay-ms",
            "250",
            "--store",
            "stdout",
            "--key-prefix",
            "depth:",
            "--max-len",
            "10000",
        ])
        .unwrap();

        assert_eq!(s.queue, "emails");
        assert_eq!(s.redis_url, "redis://cache:6380/2");
        assert_eq!(s.queue_kind, QueueKind::SortedSet);
        assert_eq!(s.count, 5);
        assert_eq!(s.delay(), TimeDelta::milliseconds(250));
        assert_eq!(s.store, StoreKind::Stdout);
        assert_eq!(s.key_prefix, "depth:");
        assert_eq!(s.max_len, Some(10_000));
    }

    #[test]
    fn negative_delay_is_accepted() {
        let s = Settings::try_parse_from(["queue-profiler", "--queue", "jobs", "--delay-ms", "-20"])
            .unwrap();
        assert_eq!(s.delay(), TimeDelta::milliseconds(-20));
    }

    #[test]
    fn empty_queue_name_is_rejected() {
        assert!(Settings::try_parse_from(["queue-profiler", "--queue", ""]).is_err());
    }
}
