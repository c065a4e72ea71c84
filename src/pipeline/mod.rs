// src/pipeline/mod.rs
mod builder;
mod orchestrator;

pub use builder::{OfferPipelineBuilder, DEFAULT_PRODUCER};
pub use orchestrator::{render_offer, render_offer_json, OfferPipeline};
