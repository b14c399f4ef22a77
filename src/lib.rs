//! Samples the depth of a named message queue a fixed number of times and
//! hands every reading, stamped with the UTC time, to a sample store.
//!
//! The [`Sampler`] owns only the loop. Reading the depth, waiting between
//! samples and persisting them are capabilities passed in at construction;
//! see [`collaborators`] for the traits and the Redis, Tokio and in-process
//! implementations.

pub mod collaborators;
pub mod config;
pub mod error;
pub mod redis_client;
pub mod sample;
pub mod sampler;
pub mod telemetry;

pub use collaborators::{Delay, DepthSource, SampleStore};
pub use error::{BoxError, SamplerError};
pub use sample::DepthSample;
pub use sampler::Sampler;
