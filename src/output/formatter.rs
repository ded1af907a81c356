//! Output formatters: console, JSON, Markdown and HTML renderings of a report

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::*;
use crate::processing::recommendations::SkillRecommendation;
use crate::processing::vocabulary::ResourceType;
use askama::Template;
use colored::{Color, Colorize};
use log::debug;
use std::path::Path;

/// Trait for formatting reports
pub trait OutputFormatter {
    fn format_report(&self, report: &Report) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and integration
pub struct JsonFormatter {
    pretty: bool,
    include_metadata: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// HTML formatter with recommendation cards and outbound links
pub struct HtmlFormatter {
    include_styles: bool,
    include_metadata: bool,
}

/// Report generator that dispatches to the formatter for a given format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

/// Askama template for HTML output
#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Job Fit Analysis</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #1f2937;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f1f5f9;
        }
        .card {
            background: white;
            padding: 24px 30px;
            border-radius: 16px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.08);
            margin-bottom: 24px;
        }
        .score { font-size: 3em; font-weight: bold; }
        .score-excellent { color: #16a34a; }
        .score-good { color: #ca8a04; }
        .score-poor { color: #dc2626; }
        .score-unscored { color: #6b7280; }
        .skills { display: grid; grid-template-columns: 1fr 1fr; gap: 20px; }
        .matched li { color: #166534; }
        .missing li { color: #991b1b; }
        .badge {
            display: inline-block;
            padding: 4px 10px;
            border-radius: 8px;
            font-weight: 600;
            background: #ede9fe;
            color: #5b21b6;
        }
        .resources { display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px; }
        .resource {
            display: block;
            padding: 12px;
            background: #f9fafb;
            border-radius: 8px;
            text-decoration: none;
            color: #111827;
        }
        .resource:hover { background: #f3f4f6; }
        .type-course { color: #1e40af; }
        .type-free { color: #854d0e; }
        .type-interactive { color: #166534; }
        .metadata { font-size: 0.9em; color: #6b7280; }
    </style>
    {% endif %}
</head>
<body>
    <div class="card">
        <h1>Match Score</h1>
        <div class="score {{ score_class }}">{{ match_percentage }}%</div>
        <h3>{{ verdict_title }}</h3>
        <p>{{ verdict_description }}</p>
        {% if no_requirements %}
        <p><em>{{ no_requirements_message }}</em></p>
        {% endif %}
    </div>

    <div class="card">
        <h2>Skills Analysis</h2>
        <div class="skills">
            <div class="matched">
                <h3>Matched Skills ({{ matched_skills.len() }} found)</h3>
                {% if matched_skills.is_empty() %}
                <p><em>No matching skills found</em></p>
                {% else %}
                <ul>
                    {% for skill in matched_skills %}
                    <li>{{ skill }}</li>
                    {% endfor %}
                </ul>
                {% endif %}
            </div>
            <div class="missing">
                <h3>Missing Skills ({{ missing_skills.len() }} to develop)</h3>
                {% if missing_skills.is_empty() %}
                <p><em>No missing skills</em></p>
                {% else %}
                <ul>
                    {% for skill in missing_skills %}
                    <li>{{ skill }}</li>
                    {% endfor %}
                </ul>
                {% endif %}
            </div>
        </div>
    </div>

    <div class="card">
        <h2>Experience Level</h2>
        <span class="badge">{{ experience_level }}</span>
        <h2>Skills Overview</h2>
        <p>Required Skills: <strong>{{ total_required }}</strong> |
           Skills Matched: <strong>{{ matched_count }}</strong> |
           Skills Gap: <strong>{{ skills_gap }}</strong></p>
        <h2>Key Strengths</h2>
        <ul>
            {% for strength in key_strengths %}
            <li>{{ strength }}</li>
            {% endfor %}
        </ul>
    </div>

    <div class="card">
        <h2>Learning Recommendations</h2>
        {% if all_covered %}
        <h3>{{ all_covered_title }}</h3>
        <p>{{ all_covered_message }}</p>
        {% endif %}
        {% for rec in recommendations %}
        <h3>{{ rec.skill }} <span class="badge">Priority Skill</span></h3>
        <div class="resources">
            {% for res in rec.resources %}
            <a class="resource" href="{{ res.url|safe }}" target="_blank" rel="noopener noreferrer">
                <strong>{{ res.platform }}</strong><br>
                <span class="{{ res.type_class }}">{{ res.type_label }}</span>
            </a>
            {% endfor %}
        </div>
        {% endfor %}
    </div>

    {% if include_metadata %}
    <div class="metadata">
        <p>Generated: {{ generated_at }} | Processing time: {{ processing_time }}ms</p>
        <p>Resume: {{ resume_source }} | Job: {{ job_source }}</p>
        <p>Job Fit Analyzer v{{ version }}</p>
    </div>
    {% endif %}
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    include_metadata: bool,
    match_percentage: u8,
    score_class: String,
    verdict_title: String,
    verdict_description: String,
    no_requirements: bool,
    no_requirements_message: String,
    matched_skills: Vec<String>,
    missing_skills: Vec<String>,
    experience_level: String,
    total_required: usize,
    matched_count: usize,
    skills_gap: usize,
    key_strengths: Vec<String>,
    recommendations: Vec<HtmlRecommendation>,
    all_covered: bool,
    all_covered_title: String,
    all_covered_message: String,
    generated_at: String,
    processing_time: u64,
    resume_source: String,
    job_source: String,
    version: String,
}

#[derive(Debug, Clone)]
struct HtmlRecommendation {
    skill: String,
    resources: Vec<HtmlResource>,
}

#[derive(Debug, Clone)]
struct HtmlResource {
    platform: String,
    url: String,
    type_label: String,
    type_class: String,
}

fn format_timestamp(report: &Report) -> String {
    report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn score_color(tier: VerdictTier) -> Color {
        match tier {
            VerdictTier::Excellent => Color::Green,
            VerdictTier::Good => Color::Yellow,
            VerdictTier::NeedsImprovement => Color::Red,
            VerdictTier::Unscored => Color::BrightBlack,
        }
    }

    fn format_score_badge(&self, verdict: &MatchVerdict) -> String {
        let badge = match verdict.tier {
            VerdictTier::Excellent => "EXCELLENT",
            VerdictTier::Good => "GOOD",
            VerdictTier::NeedsImprovement => "NEEDS WORK",
            VerdictTier::Unscored => "UNSCORED",
        };

        if self.use_colors {
            format!("[{}]", badge.color(Self::score_color(verdict.tier)).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_resource_type(&self, resource_type: ResourceType) -> String {
        let color = match resource_type {
            ResourceType::Course => Color::Blue,
            ResourceType::Free => Color::Yellow,
            ResourceType::Interactive => Color::Green,
        };
        self.colorize(&resource_type.to_string(), color)
    }

    fn format_recommendation(&self, index: usize, rec: &SkillRecommendation) -> String {
        let mut output = format!("{}. {}\n", index, self.colorize(&rec.skill, Color::White));
        for resource in &rec.resources {
            output.push_str(&format!(
                "   - {} ({}): {}\n",
                resource.platform,
                self.format_resource_type(resource.resource_type),
                self.colorize(&resource.url, Color::BrightBlack)
            ));
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let result = &report.result;
        let mut output = String::new();

        // Header
        output.push_str(&self.format_header("🎯 JOB FIT ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            format_timestamp(report),
            report.metadata.processing_time_ms
        ));

        // Match score
        output.push_str(&self.format_header("Match Score", 2));
        let score_text = format!("{}%", result.match_percentage);
        output.push_str(&format!(
            "Match: {} {}\n",
            self.colorize(&score_text, Self::score_color(report.verdict.tier)),
            self.format_score_badge(&report.verdict)
        ));
        output.push_str(&format!(
            "{} {}\n",
            self.colorize(&report.verdict.title, Color::Cyan),
            report.verdict.description
        ));
        if result.has_no_requirements() {
            output.push_str(&format!("⚠️  {}\n", self.colorize(NO_REQUIREMENTS_MESSAGE, Color::Yellow)));
        }

        // Skills
        output.push_str(&self.format_header("Skills Analysis", 2));
        output.push_str(&format!("✅ Matched Skills ({} found)\n", result.matched_skills.len()));
        if result.matched_skills.is_empty() {
            output.push_str("  No matching skills found\n");
        }
        for skill in &result.matched_skills {
            output.push_str(&format!("  • {}\n", self.colorize(skill, Color::Green)));
        }
        output.push_str(&format!("❌ Missing Skills ({} to develop)\n", result.missing_skills.len()));
        for skill in &result.missing_skills {
            output.push_str(&format!("  • {}\n", self.colorize(skill, Color::Red)));
        }

        // Experience and strengths
        output.push_str(&self.format_header("Experience & Strengths", 2));
        output.push_str(&format!(
            "Experience Level: {}\n",
            self.colorize(result.analysis.experience_level.label(), Color::Magenta)
        ));
        output.push_str("Key Strengths:\n");
        for strength in &result.analysis.key_strengths {
            output.push_str(&format!("  • {}\n", self.colorize(strength, Color::Green)));
        }

        if self.detailed {
            output.push_str(&self.format_header("Skills Overview", 3));
            output.push_str(&format!("Required Skills: {}\n", result.analysis.total_required_skills));
            output.push_str(&format!("Skills Matched:  {}\n", result.analysis.matched_count));
            output.push_str(&format!("Skills Gap:      {}\n", result.analysis.skills_gap));
            output.push_str(&format!("Resume: {}\n", report.metadata.resume_source));
            output.push_str(&format!("Job:    {}\n", report.metadata.job_source));
        }

        // Recommendations
        output.push_str(&self.format_header("📚 Learning Recommendations", 2));
        if report.all_skills_covered() {
            output.push_str(&format!(
                "{} {}\n",
                self.colorize(ALL_SKILLS_COVERED_TITLE, Color::Green),
                ALL_SKILLS_COVERED_MESSAGE
            ));
        } else if result.recommendations.is_empty() {
            output.push_str("No recommendations.\n");
        }
        for (i, rec) in result.recommendations.iter().enumerate() {
            output.push_str(&self.format_recommendation(i + 1, rec));
        }
        if result.missing_skills.len() > result.recommendations.len() {
            output.push_str(&format!(
                "   ... and {} more missing skills\n",
                result.missing_skills.len() - result.recommendations.len()
            ));
        }

        // Footer
        output.push_str(&format!(
            "\n{} Job Fit Analyzer v{} | {} skills in vocabulary\n",
            self.colorize("ℹ️", Color::Blue),
            report.metadata.analyzer_version,
            report.metadata.vocabulary_size
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool, include_metadata: bool) -> Self {
        Self {
            pretty,
            include_metadata,
        }
    }
}

impl OutputFormatter for JsonFormatter {
    /// Full report with metadata, or the bare analysis result without it.
    fn format_report(&self, report: &Report) -> Result<String> {
        let value = if self.include_metadata {
            serde_json::to_value(report)?
        } else {
            serde_json::to_value(&report.result)?
        };

        if self.pretty {
            Ok(serde_json::to_string_pretty(&value)?)
        } else {
            Ok(serde_json::to_string(&value)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(tier: VerdictTier) -> &'static str {
        match tier {
            VerdictTier::Excellent => "🟢",
            VerdictTier::Good => "🟡",
            VerdictTier::NeedsImprovement => "🔴",
            VerdictTier::Unscored => "⚪",
        }
    }

    fn format_markdown_recommendation(index: usize, rec: &SkillRecommendation) -> String {
        let mut output = format!("### {}. {}\n\n", index, rec.skill);
        for resource in &rec.resources {
            output.push_str(&format!(
                "- [{}]({}) ({})\n",
                resource.platform, resource.url, resource.resource_type
            ));
        }
        output.push('\n');
        output
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let result = &report.result;
        let mut output = String::new();

        output.push_str("# 🎯 Job Fit Analysis\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms\n",
                format_timestamp(report),
                report.metadata.processing_time_ms
            ));
            output.push_str(&format!(
                "**Resume:** `{}` | **Job:** `{}`\n\n",
                report.metadata.resume_source, report.metadata.job_source
            ));
        }

        output.push_str("## Match Score\n\n");
        output.push_str(&format!(
            "**{}%** {} {}\n\n",
            result.match_percentage,
            Self::markdown_score_badge(report.verdict.tier),
            report.verdict.title
        ));
        output.push_str(&format!("{}\n\n", report.verdict.description));
        if result.has_no_requirements() {
            output.push_str(&format!("> ⚠️ {}\n\n", NO_REQUIREMENTS_MESSAGE));
        }

        output.push_str("## Skills Analysis\n\n");
        output.push_str("| | Skills |\n|---|---|\n");
        output.push_str(&format!(
            "| ✅ Matched ({}) | {} |\n",
            result.matched_skills.len(),
            result.matched_skills.names().join(", ")
        ));
        output.push_str(&format!(
            "| ❌ Missing ({}) | {} |\n\n",
            result.missing_skills.len(),
            result.missing_skills.names().join(", ")
        ));

        output.push_str("## Detailed Analysis\n\n");
        output.push_str(&format!("**Experience Level:** {}\n\n", result.analysis.experience_level));
        output.push_str(&format!(
            "**Required Skills:** {} | **Skills Matched:** {} | **Skills Gap:** {}\n\n",
            result.analysis.total_required_skills, result.analysis.matched_count, result.analysis.skills_gap
        ));
        output.push_str("### Key Strengths\n\n");
        for strength in &result.analysis.key_strengths {
            output.push_str(&format!("- {}\n", strength));
        }
        output.push('\n');

        output.push_str("## 📚 Learning Recommendations\n\n");
        if report.all_skills_covered() {
            output.push_str(&format!("**{}** {}\n\n", ALL_SKILLS_COVERED_TITLE, ALL_SKILLS_COVERED_MESSAGE));
        }
        for (i, rec) in result.recommendations.iter().enumerate() {
            output.push_str(&Self::format_markdown_recommendation(i + 1, rec));
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*Generated by Job Fit Analyzer v{}*\n",
                report.metadata.analyzer_version
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool, include_metadata: bool) -> Self {
        Self {
            include_styles,
            include_metadata,
        }
    }

    fn create_template_data(&self, report: &Report) -> HtmlTemplate {
        let result = &report.result;
        let score_class = match report.verdict.tier {
            VerdictTier::Excellent => "score-excellent",
            VerdictTier::Good => "score-good",
            VerdictTier::NeedsImprovement => "score-poor",
            VerdictTier::Unscored => "score-unscored",
        };

        let recommendations = result
            .recommendations
            .iter()
            .map(|rec| HtmlRecommendation {
                skill: rec.skill.clone(),
                resources: rec
                    .resources
                    .iter()
                    .map(|res| HtmlResource {
                        platform: res.platform.clone(),
                        url: res.url.clone(),
                        type_label: res.resource_type.to_string(),
                        type_class: format!("type-{}", res.resource_type.to_string().to_lowercase()),
                    })
                    .collect(),
            })
            .collect();

        HtmlTemplate {
            include_styles: self.include_styles,
            include_metadata: self.include_metadata,
            match_percentage: result.match_percentage,
            score_class: score_class.to_string(),
            verdict_title: report.verdict.title.clone(),
            verdict_description: report.verdict.description.clone(),
            no_requirements: result.has_no_requirements(),
            no_requirements_message: NO_REQUIREMENTS_MESSAGE.to_string(),
            matched_skills: result.matched_skills.as_slice().to_vec(),
            missing_skills: result.missing_skills.as_slice().to_vec(),
            experience_level: result.analysis.experience_level.to_string(),
            total_required: result.analysis.total_required_skills,
            matched_count: result.analysis.matched_count,
            skills_gap: result.analysis.skills_gap,
            key_strengths: result.analysis.key_strengths.clone(),
            recommendations,
            all_covered: report.all_skills_covered(),
            all_covered_title: ALL_SKILLS_COVERED_TITLE.to_string(),
            all_covered_message: ALL_SKILLS_COVERED_MESSAGE.to_string(),
            generated_at: format_timestamp(report),
            processing_time: report.metadata.processing_time_ms,
            resume_source: report.metadata.resume_source.clone(),
            job_source: report.metadata.job_source.clone(),
            version: report.metadata.analyzer_version.clone(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let template = self.create_template_data(report);
        Ok(template.render()?)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true, true)
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json, include_metadata),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles, include_metadata),
        }
    }

    pub fn generate_report(&self, report: &Report, format: &OutputFormat) -> Result<String> {
        let formatter: &dyn OutputFormatter = match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
            OutputFormat::Html => &self.html_formatter,
        };
        debug!("Rendering {:?} report", formatter.supports_format());
        formatter.format_report(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();
    let base_name = if base_name.is_empty() { "resume".into() } else { base_name };

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };

    format!("{}_fit{}.{}", base_name, timestamp_suffix, extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::AnalysisEngine;

    fn sample_report(resume: &str, job: &str) -> Report {
        let engine = AnalysisEngine::new().unwrap();
        let result = engine.analyze_job_fit(resume, job);
        Report::new(
            result,
            ReportMetadata::new("resume.txt", "job.txt").with_vocabulary_size(engine.vocabulary_size()),
        )
    }

    #[test]
    fn test_console_output_without_colors() {
        let report = sample_report("4 years of Python and Docker", "Python, Docker, AWS");
        let output = ConsoleFormatter::new(false, true).format_report(&report).unwrap();

        assert!(output.contains("Match: 67% [GOOD]"));
        assert!(output.contains("Good Match"));
        assert!(output.contains("  • Python"));
        assert!(output.contains("Experience Level: Mid-Level"));
        assert!(output.contains("Skills Gap:      1"));
        assert!(output.contains("1. AWS"));
        assert!(output.contains("https://coursera.org/search?q=AWS"));
        assert!(!output.contains("\u{1b}["));
    }

    #[test]
    fn test_console_all_skills_covered() {
        let report = sample_report("Git and SQL", "Git, SQL");
        let output = ConsoleFormatter::new(false, false).format_report(&report).unwrap();
        assert!(output.contains(ALL_SKILLS_COVERED_MESSAGE));
        assert!(!output.contains("Skills Overview"));
    }

    #[test]
    fn test_console_no_requirements_warning() {
        let report = sample_report("Git", "Friendly office with snacks");
        let output = ConsoleFormatter::new(false, false).format_report(&report).unwrap();
        assert!(output.contains(NO_REQUIREMENTS_MESSAGE));
        assert!(!output.contains(ALL_SKILLS_COVERED_MESSAGE));
    }

    #[test]
    fn test_json_without_metadata_is_bare_result() {
        let report = sample_report("Git", "Git, AWS");
        let json = JsonFormatter::new(false, false).format_report(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["matchPercentage"], 50);
        assert!(value.get("metadata").is_none());
    }

    #[test]
    fn test_json_with_metadata() {
        let report = sample_report("Git", "Git, AWS");
        let json = JsonFormatter::new(true, true).format_report(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["result"]["missingSkills"][0], "AWS");
        assert_eq!(value["verdict"]["tier"], "needs_improvement");
        assert_eq!(value["metadata"]["resumeSource"], "resume.txt");
    }

    #[test]
    fn test_markdown_contains_links() {
        let report = sample_report("Python", "Python, Machine Learning");
        let output = MarkdownFormatter::new(true).format_report(&report).unwrap();

        assert!(output.contains("# 🎯 Job Fit Analysis"));
        assert!(output.contains("**50%**"));
        assert!(output.contains("[Coursera](https://coursera.org/search?q=Machine%20Learning)"));
        assert!(output.contains("*Generated by Job Fit Analyzer v"));
    }

    #[test]
    fn test_html_renders_recommendation_cards() {
        let report = sample_report("Python", "Python, SEO");
        let html = HtmlFormatter::new(false, true).format_report(&report).unwrap();

        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("https://udemy.com/search?q=SEO"));
        assert!(html.contains("Priority Skill"));
        assert!(!html.contains("<style>"));
        assert!(html.contains("Resume: resume.txt"));
    }

    #[test]
    fn test_generator_dispatch() {
        let report = sample_report("Git", "Git");
        let generator = ReportGenerator::with_options(false, false, true, true, false);
        let html = generator.generate_report(&report, &OutputFormat::Html).unwrap();
        let md = generator.generate_report(&report, &OutputFormat::Markdown).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(md.starts_with("# "));
    }

    #[test]
    fn test_formatters_report_their_format() {
        let formatters: Vec<Box<dyn OutputFormatter>> = vec![
            Box::new(ConsoleFormatter::new(false, false)),
            Box::new(JsonFormatter::new(true, true)),
            Box::new(MarkdownFormatter::new(true)),
            Box::new(HtmlFormatter::new(true, true)),
        ];
        let formats: Vec<OutputFormat> = formatters.iter().map(|f| f.supports_format()).collect();
        assert_eq!(
            formats,
            vec![OutputFormat::Console, OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Html]
        );
    }

    #[test]
    fn test_console_unscored_badge() {
        let report = sample_report("Git", "Friendly office with snacks");
        let output = ConsoleFormatter::new(false, false).format_report(&report).unwrap();
        assert!(output.contains("Match: 0% [UNSCORED]"));
        assert!(output.contains("No Skills Detected"));
        assert!(!output.contains("Focus on developing key missing skills."));
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(suggest_filename(&OutputFormat::Json, "docs/jane_cv.txt", false), "jane_cv_fit.json");
        assert_eq!(suggest_filename(&OutputFormat::Html, "", false), "resume_fit.html");
        assert!(suggest_filename(&OutputFormat::Markdown, "cv.md", true).starts_with("cv_fit_"));
    }
}
