//! Analysis engine combining skill extraction, scoring, experience and recommendations

use crate::error::{JobFitError, Result};
use crate::processing::experience::{ExperienceClassifier, ExperienceLevel};
use crate::processing::match_scorer::{MatchScorer, ScoreStatus};
use crate::processing::recommendations::{RecommendationBuilder, SkillRecommendation};
use crate::processing::skill_extractor::{SkillExtractor, SkillSet};
use crate::processing::strengths::identify_strengths;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Stateless pipeline turning a resume and a job description into an [`AnalysisResult`].
///
/// Holds only immutable compiled matchers, so one engine can serve any number
/// of analyses, from any thread.
pub struct AnalysisEngine {
    skill_extractor: SkillExtractor,
    match_scorer: MatchScorer,
    experience_classifier: ExperienceClassifier,
    recommendation_builder: RecommendationBuilder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Share of job-required skills found in the resume (0-100)
    pub match_percentage: u8,

    pub matched_skills: SkillSet,
    pub missing_skills: SkillSet,

    /// One entry per missing skill, at most eight
    pub recommendations: Vec<SkillRecommendation>,

    pub analysis: FitAnalysis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitAnalysis {
    pub total_required_skills: usize,
    pub matched_count: usize,
    pub skills_gap: usize,
    pub experience_level: ExperienceLevel,
    pub key_strengths: Vec<String>,
    pub score_status: ScoreStatus,
}

impl AnalysisResult {
    /// True when the job description named no recognised skills.
    pub fn has_no_requirements(&self) -> bool {
        self.analysis.score_status == ScoreStatus::NoRequirements
    }
}

impl AnalysisEngine {
    pub fn new() -> Result<Self> {
        Ok(Self {
            skill_extractor: SkillExtractor::new()?,
            match_scorer: MatchScorer,
            experience_classifier: ExperienceClassifier::new()?,
            recommendation_builder: RecommendationBuilder::new(),
        })
    }

    /// Analyze how well `resume_text` fits `job_text`.
    ///
    /// Empty inputs are valid: they produce an empty skill comparison rather
    /// than an error.
    pub fn analyze_job_fit(&self, resume_text: &str, job_text: &str) -> AnalysisResult {
        // 1. Skill extraction on both texts
        let job_skills = self.skill_extractor.extract_skills(job_text);
        let resume_skills = self.skill_extractor.extract_skills(resume_text);
        debug!("Job skills: {:?}", job_skills.names());
        debug!("Resume skills: {:?}", resume_skills.names());

        // 2. Match scoring
        let outcome = self.match_scorer.score(&job_skills, &resume_skills);
        if outcome.status == ScoreStatus::NoRequirements {
            warn!("Job description contains no recognised skills; match percentage set to 0");
        }
        debug!(
            "Matched {}/{} job skills ({}%)",
            outcome.matched.len(),
            job_skills.len(),
            outcome.percentage
        );

        // 3. Resume-only signals
        let experience_level = self.experience_classifier.classify(resume_text);
        let key_strengths = identify_strengths(resume_text, &outcome.matched);
        debug!("Experience level: {}, strengths: {:?}", experience_level, key_strengths);

        // 4. Recommendations for the gap
        let recommendations = self.recommendation_builder.build_recommendations(&outcome.missing);

        AnalysisResult {
            match_percentage: outcome.percentage,
            recommendations,
            analysis: FitAnalysis {
                total_required_skills: job_skills.len(),
                matched_count: outcome.matched.len(),
                skills_gap: outcome.missing.len(),
                experience_level,
                key_strengths,
                score_status: outcome.status,
            },
            matched_skills: outcome.matched,
            missing_skills: outcome.missing,
        }
    }

    /// Byte-oriented entry point for callers holding raw file or form data.
    /// Fails with [`JobFitError::InvalidInput`] when either side is not UTF-8 text.
    pub fn analyze_job_fit_bytes(&self, resume: &[u8], job: &[u8]) -> Result<AnalysisResult> {
        let resume_text = std::str::from_utf8(resume)
            .map_err(|e| JobFitError::InvalidInput(format!("Resume is not valid UTF-8 text: {}", e)))?;
        let job_text = std::str::from_utf8(job).map_err(|e| {
            JobFitError::InvalidInput(format!("Job description is not valid UTF-8 text: {}", e))
        })?;

        Ok(self.analyze_job_fit(resume_text, job_text))
    }

    pub fn vocabulary_size(&self) -> usize {
        self.skill_extractor.vocabulary_size()
    }
}
