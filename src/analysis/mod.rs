pub mod client;
mod error;
mod model;

pub use client::{AnalyzeEvent, AnalyzerClient};
pub use error::{AnalyzeError, FailureKind};
pub use model::{AnalysisResult, Emotions, Sentiment, SentenceResult};
