//! Key strength identification

use crate::processing::skill_extractor::SkillSet;

pub const STRONG_TECHNICAL: &str = "Strong technical skill set";
pub const LEADERSHIP: &str = "Leadership experience";
pub const PROJECT_MANAGEMENT: &str = "Project management capabilities";
pub const RELEVANT_EXPERIENCE: &str = "Relevant experience";

/// More matched skills than this earns the technical strength.
const STRONG_SKILL_COUNT: usize = 5;

/// Derive strength labels from resume text. Never returns an empty list.
pub fn identify_strengths(text: &str, matched_skills: &SkillSet) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut strengths = Vec::new();

    if matched_skills.len() > STRONG_SKILL_COUNT {
        strengths.push(STRONG_TECHNICAL.to_string());
    }
    if lower.contains("lead") || lower.contains("manage") {
        strengths.push(LEADERSHIP.to_string());
    }
    if lower.contains("project") {
        strengths.push(PROJECT_MANAGEMENT.to_string());
    }

    if strengths.is_empty() {
        strengths.push(RELEVANT_EXPERIENCE.to_string());
    }
    strengths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_strength_when_nothing_fires() {
        assert_eq!(identify_strengths("", &SkillSet::new()), vec![RELEVANT_EXPERIENCE]);
    }

    #[test]
    fn test_rules_are_additive_and_ordered() {
        let matched: SkillSet = ["Python", "Java", "SQL", "Git", "AWS", "Docker"].into_iter().collect();
        let strengths = identify_strengths("Team lead on a PROJECT rollout", &matched);
        assert_eq!(strengths, vec![STRONG_TECHNICAL, LEADERSHIP, PROJECT_MANAGEMENT]);
    }

    #[test]
    fn test_exactly_five_skills_is_not_strong() {
        let matched: SkillSet = ["Python", "Java", "SQL", "Git", "AWS"].into_iter().collect();
        assert_eq!(identify_strengths("", &matched), vec![RELEVANT_EXPERIENCE]);
    }

    #[test]
    fn test_manage_substring_counts_as_leadership() {
        let strengths = identify_strengths("Management of vendor contracts", &SkillSet::new());
        assert_eq!(strengths, vec![LEADERSHIP]);
    }
}
