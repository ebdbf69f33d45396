//! Pipeline conversions module
//!
//! Orchestration that owns the registries and runs operations by name.

mod channel_pipeline;

pub use channel_pipeline::ChannelPipeline;
