//! Analysis pipeline
//! Skill extraction, match scoring, experience tiers, strengths and recommendations

pub mod analyzer;
pub mod experience;
pub mod match_scorer;
pub mod recommendations;
pub mod skill_extractor;
pub mod strengths;
pub mod vocabulary;

pub use analyzer::{AnalysisEngine, AnalysisResult, FitAnalysis};
pub use skill_extractor::SkillSet;
