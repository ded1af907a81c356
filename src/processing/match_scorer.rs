//! Job skill vs resume skill matching and percentage scoring

use crate::processing::skill_extractor::SkillSet;
use serde::{Deserialize, Serialize};

/// Whether a percentage could be computed from the job's requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreStatus {
    Scored,
    /// The job description named no recognised skills; the percentage is pinned to 0.
    NoRequirements,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    pub matched: SkillSet,
    pub missing: SkillSet,
    pub percentage: u8,
    pub status: ScoreStatus,
}

/// Scores how many job-required skills a resume covers.
///
/// A job skill counts as matched when any resume skill contains it, or is
/// contained by it, ignoring case.
pub struct MatchScorer;

impl MatchScorer {
    pub fn score(&self, job_skills: &SkillSet, resume_skills: &SkillSet) -> MatchOutcome {
        let resume_lower: Vec<String> = resume_skills.iter().map(|s| s.to_lowercase()).collect();

        let (matched, missing): (Vec<&String>, Vec<&String>) = job_skills.iter().partition(|skill| {
            let skill_lower = skill.to_lowercase();
            resume_lower
                .iter()
                .any(|r| r.contains(&skill_lower) || skill_lower.contains(r.as_str()))
        });

        let matched: SkillSet = matched.into_iter().cloned().collect();
        let missing: SkillSet = missing.into_iter().cloned().collect();

        let (percentage, status) = if job_skills.is_empty() {
            (0, ScoreStatus::NoRequirements)
        } else {
            (
                Self::rounded_percentage(matched.len(), job_skills.len()),
                ScoreStatus::Scored,
            )
        };

        MatchOutcome {
            matched,
            missing,
            percentage,
            status,
        }
    }

    /// `round(part / total * 100)` with halves rounded up, in integer arithmetic.
    fn rounded_percentage(part: usize, total: usize) -> u8 {
        let scaled = (200 * part + total) / (2 * total);
        scaled.min(100) as u8
    }
}
