//! Learning resource recommendations for missing skills

use crate::processing::skill_extractor::SkillSet;
use crate::processing::vocabulary::{LearningPlatform, ResourceType, LEARNING_PLATFORMS};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

pub const MAX_RECOMMENDATIONS: usize = 8;
pub const RESOURCES_PER_SKILL: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningResource {
    pub platform: String,
    pub url: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecommendation {
    pub skill: String,
    pub resources: Vec<LearningResource>,
}

/// Pairs missing skills with search links on fixed learning platforms.
///
/// Links are only built, never fetched.
pub struct RecommendationBuilder {
    max_skills: usize,
    platforms: &'static [LearningPlatform],
}

impl Default for RecommendationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationBuilder {
    pub fn new() -> Self {
        Self {
            max_skills: MAX_RECOMMENDATIONS,
            platforms: &LEARNING_PLATFORMS[..RESOURCES_PER_SKILL],
        }
    }

    pub fn build_recommendations(&self, missing_skills: &SkillSet) -> Vec<SkillRecommendation> {
        missing_skills
            .iter()
            .take(self.max_skills)
            .map(|skill| SkillRecommendation {
                skill: skill.clone(),
                resources: self
                    .platforms
                    .iter()
                    .map(|platform| Self::resource_for(platform, skill))
                    .collect(),
            })
            .collect()
    }

    fn resource_for(platform: &LearningPlatform, skill: &str) -> LearningResource {
        LearningResource {
            platform: platform.name.to_string(),
            url: format!("{}/search?q={}", platform.base_url, encode_uri_component(skill)),
            resource_type: platform.resource_type,
        }
    }
}

/// Percent-encode a query value the way browsers encode URI components:
/// ASCII alphanumerics and `-_.!~*'()` pass through, every other UTF-8 byte
/// becomes `%XX`.
pub fn encode_uri_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => encoded.push(byte as char),
            _ => {
                let _ = write!(encoded, "%{:02X}", byte);
            }
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("Node.js"), "Node.js");
        assert_eq!(encode_uri_component("Machine Learning"), "Machine%20Learning");
        assert_eq!(encode_uri_component("C++ & C#"), "C%2B%2B%20%26%20C%23");
        assert_eq!(encode_uri_component("a/b?c=d"), "a%2Fb%3Fc%3Dd");
        assert_eq!(encode_uri_component("café"), "caf%C3%A9");
        assert_eq!(encode_uri_component("it's (fine)!*~"), "it's%20(fine)!*~");
    }

    #[test]
    fn test_three_resources_per_skill() {
        let missing: SkillSet = ["AWS", "Docker"].into_iter().collect();
        let recs = RecommendationBuilder::new().build_recommendations(&missing);

        assert_eq!(recs.len(), 2);
        for rec in &recs {
            assert_eq!(rec.resources.len(), RESOURCES_PER_SKILL);
            let platforms: Vec<&str> = rec.resources.iter().map(|r| r.platform.as_str()).collect();
            assert_eq!(platforms, vec!["Coursera", "Udemy", "Pluralsight"]);
            assert!(rec.resources.iter().all(|r| r.resource_type == ResourceType::Course));
        }
        assert_eq!(recs[0].resources[0].url, "https://coursera.org/search?q=AWS");
        assert_eq!(recs[1].resources[2].url, "https://pluralsight.com/search?q=Docker");
    }

    #[test]
    fn test_capped_at_eight_skills_in_order() {
        let missing: SkillSet = [
            "Python", "Java", "React", "SQL", "HTML", "CSS", "Git", "AWS", "Docker", "Excel",
        ]
        .into_iter()
        .collect();
        let recs = RecommendationBuilder::new().build_recommendations(&missing);

        assert_eq!(recs.len(), MAX_RECOMMENDATIONS);
        let skills: Vec<&str> = recs.iter().map(|r| r.skill.as_str()).collect();
        assert_eq!(skills, vec!["Python", "Java", "React", "SQL", "HTML", "CSS", "Git", "AWS"]);
    }

    #[test]
    fn test_urls_carry_encoded_skill() {
        let missing: SkillSet = ["Adobe Creative Suite"].into_iter().collect();
        let recs = RecommendationBuilder::new().build_recommendations(&missing);
        for resource in &recs[0].resources {
            assert!(resource.url.starts_with("https://"));
            assert!(resource.url.ends_with("/search?q=Adobe%20Creative%20Suite"));
        }
    }

    #[test]
    fn test_no_missing_skills_no_recommendations() {
        assert!(RecommendationBuilder::new().build_recommendations(&SkillSet::new()).is_empty());
    }

    #[test]
    fn test_resource_type_serializes_as_type() {
        let missing: SkillSet = ["SEO"].into_iter().collect();
        let recs = RecommendationBuilder::new().build_recommendations(&missing);
        let json = serde_json::to_value(&recs[0].resources[0]).unwrap();
        assert_eq!(json["type"], "Course");
        assert_eq!(json["platform"], "Coursera");
    }
}
