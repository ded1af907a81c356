//! Report structures wrapping an analysis result for presentation

use crate::processing::analyzer::AnalysisResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const ALL_SKILLS_COVERED_TITLE: &str = "Excellent Match!";
pub const ALL_SKILLS_COVERED_MESSAGE: &str = "You have all the required skills for this position.";
pub const NO_REQUIREMENTS_MESSAGE: &str =
    "No recognised skills were found in the job description, so the match score defaults to 0%.";

/// Everything a formatter needs: the analysis, its verdict and run metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub verdict: MatchVerdict,
    pub result: AnalysisResult,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictTier {
    Excellent,         // >= 80%
    Good,              // 60-79%
    NeedsImprovement,  // < 60%
    /// The job description named no recognised skills
    Unscored,
}

/// Headline shown next to the match percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchVerdict {
    pub tier: VerdictTier,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub analyzer_version: String,
    /// File path, or a label such as "inline text" / "sample job description"
    pub resume_source: String,
    pub job_source: String,
    pub processing_time_ms: u64,
    pub vocabulary_size: usize,
}

impl VerdictTier {
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            80..=u8::MAX => VerdictTier::Excellent,
            60..=79 => VerdictTier::Good,
            _ => VerdictTier::NeedsImprovement,
        }
    }
}

impl MatchVerdict {
    pub fn for_percentage(percentage: u8) -> Self {
        let tier = VerdictTier::from_percentage(percentage);
        let (title, description) = match tier {
            VerdictTier::Excellent => ("Excellent Match!", "You're a strong candidate for this position."),
            VerdictTier::Good => ("Good Match", "You meet most requirements with some skill gaps."),
            VerdictTier::NeedsImprovement => ("Needs Improvement", "Focus on developing key missing skills."),
            VerdictTier::Unscored => return Self::no_requirements(),
        };

        Self {
            tier,
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

impl MatchVerdict {
    /// Neutral verdict for a job description without recognised skills.
    pub fn no_requirements() -> Self {
        Self {
            tier: VerdictTier::Unscored,
            title: "No Skills Detected".to_string(),
            description: "The job description does not mention any skills this analyzer recognises."
                .to_string(),
        }
    }
}

impl ReportMetadata {
    pub fn new(resume_source: impl Into<String>, job_source: impl Into<String>) -> Self {
        Self {
            generated_at: Utc::now(),
            analyzer_version: env!("CARGO_PKG_VERSION").to_string(),
            resume_source: resume_source.into(),
            job_source: job_source.into(),
            processing_time_ms: 0,
            vocabulary_size: 0,
        }
    }

    pub fn with_processing_time(mut self, millis: u64) -> Self {
        self.processing_time_ms = millis;
        self
    }

    pub fn with_vocabulary_size(mut self, size: usize) -> Self {
        self.vocabulary_size = size;
        self
    }
}

impl Report {
    pub fn new(result: AnalysisResult, metadata: ReportMetadata) -> Self {
        let verdict = if result.has_no_requirements() {
            MatchVerdict::no_requirements()
        } else {
            MatchVerdict::for_percentage(result.match_percentage)
        };

        Self {
            verdict,
            result,
            metadata,
        }
    }

    /// Matched plus missing, i.e. the job's required skill count.
    pub fn required_skill_count(&self) -> usize {
        self.result.analysis.total_required_skills
    }

    pub fn all_skills_covered(&self) -> bool {
        self.result.recommendations.is_empty() && !self.result.has_no_requirements()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::AnalysisEngine;

    #[test]
    fn test_verdict_tiers() {
        assert_eq!(VerdictTier::from_percentage(100), VerdictTier::Excellent);
        assert_eq!(VerdictTier::from_percentage(80), VerdictTier::Excellent);
        assert_eq!(VerdictTier::from_percentage(79), VerdictTier::Good);
        assert_eq!(VerdictTier::from_percentage(60), VerdictTier::Good);
        assert_eq!(VerdictTier::from_percentage(59), VerdictTier::NeedsImprovement);
        assert_eq!(VerdictTier::from_percentage(0), VerdictTier::NeedsImprovement);
    }

    #[test]
    fn test_verdict_text() {
        let verdict = MatchVerdict::for_percentage(65);
        assert_eq!(verdict.title, "Good Match");
        assert_eq!(verdict.description, "You meet most requirements with some skill gaps.");
    }

    #[test]
    fn test_report_flags() {
        let engine = AnalysisEngine::new().unwrap();

        let covered = Report::new(engine.analyze_job_fit("Git", "Git"), ReportMetadata::new("a", "b"));
        assert!(covered.all_skills_covered());
        assert_eq!(covered.verdict.tier, VerdictTier::Excellent);

        let empty = Report::new(engine.analyze_job_fit("Git", "nothing"), ReportMetadata::new("a", "b"));
        assert!(!empty.all_skills_covered());
        assert_eq!(empty.required_skill_count(), 0);
    }

    #[test]
    fn test_no_requirements_gets_neutral_verdict() {
        let engine = AnalysisEngine::new().unwrap();
        let report = Report::new(engine.analyze_job_fit("Python", "Must love dogs"), ReportMetadata::new("a", "b"));

        assert_eq!(report.verdict.tier, VerdictTier::Unscored);
        assert_eq!(report.verdict.title, "No Skills Detected");
        assert!(!report.verdict.description.contains("missing"));
    }

    #[test]
    fn test_report_keys_are_camel_case() {
        let engine = AnalysisEngine::new().unwrap();
        let report = Report::new(
            engine.analyze_job_fit("Git", "Git"),
            ReportMetadata::new("cv.txt", "job.txt").with_processing_time(4),
        );
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["metadata"]["resumeSource"], "cv.txt");
        assert_eq!(json["metadata"]["processingTimeMs"], 4);
        assert!(json["metadata"].get("generatedAt").is_some());
        assert!(json["metadata"].get("resume_source").is_none());
        assert_eq!(json["verdict"]["tier"], "excellent");
        assert_eq!(json["result"]["matchPercentage"], 100);
    }
}
