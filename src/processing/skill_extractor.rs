//! Vocabulary-driven skill extraction

use crate::error::{JobFitError, Result};
use crate::processing::vocabulary::SKILL_VOCABULARY;
use aho_corasick::{AhoCorasick, MatchKind};
use serde::{Deserialize, Serialize};

/// Ordered, duplicate-free list of skills. Order follows the vocabulary when
/// produced by [`SkillExtractor`], so displays stay stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SkillSet(Vec<String>);

impl SkillSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.0.iter().any(|s| s == skill)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Borrowed view of the skill names, handy for joins and comparisons.
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(String::as_str).collect()
    }

    /// Appends `skill` unless it is already present.
    fn push(&mut self, skill: String) {
        if !self.contains(&skill) {
            self.0.push(skill);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SkillSet::new();
        for skill in iter {
            set.push(skill.into());
        }
        set
    }
}

impl<'a> IntoIterator for &'a SkillSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Deserialized lists go through `collect` so duplicates are dropped.
impl From<Vec<String>> for SkillSet {
    fn from(skills: Vec<String>) -> Self {
        skills.into_iter().collect()
    }
}

impl From<SkillSet> for Vec<String> {
    fn from(set: SkillSet) -> Self {
        set.0
    }
}

/// Finds vocabulary skills mentioned anywhere in a piece of text.
///
/// Matching is a plain case-insensitive substring test per vocabulary entry:
/// no tokenization and no word boundaries, so "JavaScript" also yields "Java".
pub struct SkillExtractor {
    matcher: AhoCorasick,
}

impl SkillExtractor {
    pub fn new() -> Result<Self> {
        let patterns: Vec<String> = SKILL_VOCABULARY.iter().map(|s| s.to_lowercase()).collect();

        // Standard semantics so overlapping search reports every pattern present
        let matcher = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&patterns)
            .map_err(|e| JobFitError::AnalysisFailed(format!("Failed to build skill matcher: {}", e)))?;

        Ok(Self { matcher })
    }

    /// Extract vocabulary skills from `text`, in vocabulary order.
    pub fn extract_skills(&self, text: &str) -> SkillSet {
        let haystack = text.to_lowercase();
        let mut found = vec![false; SKILL_VOCABULARY.len()];

        for mat in self.matcher.find_overlapping_iter(&haystack) {
            found[mat.pattern().as_usize()] = true;
        }

        SKILL_VOCABULARY
            .iter()
            .zip(found)
            .filter(|(_, hit)| *hit)
            .map(|(skill, _)| *skill)
            .collect()
    }

    pub fn vocabulary_size(&self) -> usize {
        SKILL_VOCABULARY.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> SkillExtractor {
        SkillExtractor::new().unwrap()
    }

    #[test]
    fn test_empty_text_yields_no_skills() {
        assert!(extractor().extract_skills("").is_empty());
    }

    #[test]
    fn test_case_insensitive_extraction() {
        let skills = extractor().extract_skills("fluent in PYTHON, docker and kubernetes");
        assert_eq!(skills.names(), vec!["Python", "Docker", "Kubernetes"]);
    }

    #[test]
    fn test_substring_matching_counts_java_inside_javascript() {
        let skills = extractor().extract_skills("Expert JavaScript developer");
        assert_eq!(skills.names(), vec!["JavaScript", "Java"]);
    }

    #[test]
    fn test_results_follow_vocabulary_order() {
        // Text order is the reverse of vocabulary order
        let skills = extractor().extract_skills("Sales, SEO, Tableau, Git, React");
        assert_eq!(skills.names(), vec!["React", "Git", "Tableau", "SEO", "Sales"]);
    }

    #[test]
    fn test_repeated_mentions_are_not_duplicated() {
        let skills = extractor().extract_skills("SQL, sql, Sql and more SQL");
        assert_eq!(skills.names(), vec!["SQL"]);
    }

    #[test]
    fn test_postgresql_also_contains_sql() {
        let skills = extractor().extract_skills("PostgreSQL");
        assert_eq!(skills.names(), vec!["SQL", "PostgreSQL"]);
    }

    #[test]
    fn test_multi_word_skills() {
        let skills = extractor().extract_skills("Strong problem solving and time management");
        assert_eq!(skills.names(), vec!["Problem Solving", "Time Management"]);
    }

    #[test]
    fn test_output_is_subset_of_vocabulary() {
        let text = "JavaScript TypeScript Node.js Vue.js MongoDB AWS Agile Scrum Leadership Excel";
        let skills = extractor().extract_skills(text);
        assert!(!skills.is_empty());
        let mut last_index = None;
        for skill in &skills {
            let index = SKILL_VOCABULARY.iter().position(|v| v == skill).unwrap();
            if let Some(previous) = last_index {
                assert!(index > previous);
            }
            last_index = Some(index);
        }
    }

    #[test]
    fn test_deserialize_drops_duplicates() {
        let set: SkillSet = serde_json::from_str(r#"["AWS", "Git", "AWS"]"#).unwrap();
        assert_eq!(set.names(), vec!["AWS", "Git"]);

        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["AWS","Git"]"#);
    }

    #[test]
    fn test_into_vec_keeps_order() {
        let set: SkillSet = ["SQL", "React"].into_iter().collect();
        let skills: Vec<String> = set.into();
        assert_eq!(skills, vec!["SQL".to_string(), "React".to_string()]);
    }

    #[test]
    fn test_skill_set_from_iter_dedups() {
        let set: SkillSet = ["AWS", "Git", "AWS"].into_iter().collect();
        assert_eq!(set.names(), vec!["AWS", "Git"]);
    }
}
