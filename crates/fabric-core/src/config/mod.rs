//! Configuration system.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod analysis_config;
pub mod fabric_config;
pub mod insight_config;
pub mod scoring_config;

pub use analysis_config::AnalysisConfig;
pub use fabric_config::{ConfigOverrides, FabricConfig};
pub use insight_config::InsightConfig;
pub use scoring_config::ScoringConfig;
