//! `jewelai-ai`
//!
//! **Responsibility:** optional generative-AI boundary (keyword market intelligence).
//!
//! This crate is deliberately **not** part of the analytics path:
//! - It does not depend on the inventory or analytics crates.
//! - Nothing in aggregation or reporting needs it; with the feature switched
//!   off every other command works unchanged.
//! - Model replies are treated as untrusted input and validated before use.

pub mod error;
pub mod gemini;
pub mod job;
pub mod keyword;
pub mod model;
pub mod parser;
pub mod scheduler;

pub use error::AiError;
pub use gemini::{GeminiClient, GeminiConfig};
pub use job::AiJob;
pub use keyword::{
    AiRecommendation, CategoryDemand, DemandLevel, ImpactLevel, InterestPoint, KeywordAnalysis,
    KeywordAnalysisJob, RelatedSearch, TrendDirection, keyword_prompt, parse_keyword_response,
};
pub use model::GenerativeModel;
pub use scheduler::{AiFeature, AiScheduler, LocalAiScheduler};
