//! Service layer

mod analysis_service;
mod prompt_service;
mod response_extractor;

pub use analysis_service::AnalysisService;
