//! Static skill vocabulary, learning platform table and sample data

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical skill names recognised by the extractor, in display order.
pub static SKILL_VOCABULARY: [&str; 39] = [
    // Technical
    "JavaScript",
    "Python",
    "Java",
    "React",
    "Node.js",
    "SQL",
    "HTML",
    "CSS",
    "TypeScript",
    "Angular",
    "Vue.js",
    "MongoDB",
    "PostgreSQL",
    "Git",
    "AWS",
    "Docker",
    "Kubernetes",
    "Machine Learning",
    "Data Analysis",
    "Project Management",
    "Agile",
    "Scrum",
    // Soft skills
    "Communication",
    "Leadership",
    "Problem Solving",
    "Team Collaboration",
    "Critical Thinking",
    "Time Management",
    // Tools and business
    "Excel",
    "PowerPoint",
    "Tableau",
    "Figma",
    "Adobe Creative Suite",
    "Marketing",
    "SEO",
    "Content Writing",
    "Social Media",
    "Sales",
    "Customer Service",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceType {
    Course,
    Free,
    Interactive,
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ResourceType::Course => "Course",
            ResourceType::Free => "Free",
            ResourceType::Interactive => "Interactive",
        };
        f.write_str(label)
    }
}

/// An external learning site that exposes a `/search?q=` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LearningPlatform {
    pub name: &'static str,
    pub base_url: &'static str,
    pub resource_type: ResourceType,
}

pub static LEARNING_PLATFORMS: [LearningPlatform; 6] = [
    LearningPlatform {
        name: "Coursera",
        base_url: "https://coursera.org",
        resource_type: ResourceType::Course,
    },
    LearningPlatform {
        name: "Udemy",
        base_url: "https://udemy.com",
        resource_type: ResourceType::Course,
    },
    LearningPlatform {
        name: "Pluralsight",
        base_url: "https://pluralsight.com",
        resource_type: ResourceType::Course,
    },
    LearningPlatform {
        name: "YouTube",
        base_url: "https://youtube.com",
        resource_type: ResourceType::Free,
    },
    LearningPlatform {
        name: "freeCodeCamp",
        base_url: "https://freecodecamp.org",
        resource_type: ResourceType::Free,
    },
    LearningPlatform {
        name: "Codecademy",
        base_url: "https://codecademy.com",
        resource_type: ResourceType::Interactive,
    },
];

/// Job description offered to users who want to try the analyzer without one of their own.
pub const SAMPLE_JOB_DESCRIPTION: &str = "We are seeking a Senior Software Engineer to join our dynamic team. The ideal candidate will have:

Required Skills:
• 5+ years of experience in JavaScript and React
• Strong knowledge of Node.js and Express
• Experience with SQL databases (PostgreSQL preferred)
• Proficiency in Git version control
• Understanding of RESTful APIs and GraphQL
• Experience with AWS cloud services
• Knowledge of Docker and containerization

Preferred Skills:
• TypeScript experience
• Knowledge of microservices architecture
• Experience with CI/CD pipelines
• Understanding of Agile/Scrum methodologies
• Leadership and mentoring experience

Responsibilities:
• Design and develop scalable web applications
• Collaborate with cross-functional teams
• Code review and maintain code quality
• Mentor junior developers
• Participate in architectural decisions";
