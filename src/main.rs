//! Job fit analyzer: compare a resume against a job description

use clap::Parser;
use indicatif::ProgressBar;
use job_fit_analyzer::cli::{self, AnalyzeArgs, Cli, Commands, ConfigAction};
use job_fit_analyzer::config::{Config, OutputFormat};
use job_fit_analyzer::error::{JobFitError, Result};
use job_fit_analyzer::input::manager::{prepare_text, InputManager};
use job_fit_analyzer::output::formatter::{save_report_to_file, suggest_filename};
use job_fit_analyzer::output::{Report, ReportGenerator, ReportMetadata};
use job_fit_analyzer::processing::recommendations::RESOURCES_PER_SKILL;
use job_fit_analyzer::processing::vocabulary::{LEARNING_PLATFORMS, SAMPLE_JOB_DESCRIPTION, SKILL_VOCABULARY};
use job_fit_analyzer::processing::AnalysisEngine;
use log::{debug, error, info};
use std::path::{Path, PathBuf};
use std::process;
use std::time::{Duration, Instant};

const INPUT_EXTENSIONS: &[&str] = &["txt", "text", "md", "markdown"];

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Execute command; configuration is loaded by the commands that need it
    if let Err(e) = run_command(cli.command, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config_override: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Analyze(args) => {
            let config = load_config(config_override.as_deref())?;
            run_analysis(args, &config).await?
        }

        Commands::Sample => {
            println!("{}", SAMPLE_JOB_DESCRIPTION);
        }

        Commands::Skills => {
            println!("📚 Recognised Skills ({})\n", SKILL_VOCABULARY.len());
            for (i, skill) in SKILL_VOCABULARY.iter().enumerate() {
                println!("  {:>2}. {}", i + 1, skill);
            }

            println!("\n🔗 Learning Platforms (first {} used for recommendations)\n", RESOURCES_PER_SKILL);
            for platform in LEARNING_PLATFORMS.iter() {
                println!("  • {} ({}) - {}", platform.name, platform.resource_type, platform.base_url);
            }
        }

        Commands::Config { action } => {
            let path = config_override.clone().unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    let config = load_config(config_override.as_deref())?;
                    println!("⚙️  Current Configuration ({})\n", path.display());
                    let content = toml::to_string_pretty(&config).map_err(|e| {
                        JobFitError::Configuration(format!("Failed to serialize config: {}", e))
                    })?;
                    println!("{}", content);
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::reset_to(&path)?;
                    println!("✅ Configuration reset successfully!");
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}

async fn run_analysis(args: AnalyzeArgs, config: &Config) -> Result<()> {
    info!("Starting job fit analysis");

    let format = match &args.output {
        Some(format) => cli::parse_output_format(format).map_err(JobFitError::InvalidInput)?,
        None => config.output.format,
    };
    let detailed = args.detailed || config.output.detailed;
    let use_colors = config.output.color_output && !args.no_color;

    let mut input_manager = InputManager::new().with_cache(config.input.enable_cache);

    let (resume_raw, resume_source) = match (&args.resume, &args.resume_text) {
        (Some(path), _) => {
            cli::validate_file_extension(path, INPUT_EXTENSIONS)
                .map_err(|e| JobFitError::InvalidInput(format!("Resume file: {}", e)))?;
            (input_manager.extract_text(path).await?, path.display().to_string())
        }
        (None, Some(text)) => (text.clone(), "inline text".to_string()),
        (None, None) => return Err(JobFitError::InvalidInput("No resume provided".to_string())),
    };

    let (job_raw, job_source) = match (&args.job, &args.job_text) {
        (Some(path), _) => {
            cli::validate_file_extension(path, INPUT_EXTENSIONS)
                .map_err(|e| JobFitError::InvalidInput(format!("Job description file: {}", e)))?;
            (input_manager.extract_text(path).await?, path.display().to_string())
        }
        (None, Some(text)) => (text.clone(), "inline text".to_string()),
        (None, None) if args.sample_job => {
            (SAMPLE_JOB_DESCRIPTION.to_string(), "sample job description".to_string())
        }
        (None, None) => {
            return Err(JobFitError::InvalidInput("No job description provided".to_string()))
        }
    };

    let resume_text = prepare_text(
        &resume_raw,
        "Resume",
        config.input.trim_whitespace,
        config.input.require_non_empty,
    )?;
    let job_text = prepare_text(
        &job_raw,
        "Job description",
        config.input.trim_whitespace,
        config.input.require_non_empty,
    )?;
    debug!(
        "Resume: {} characters, job description: {} characters",
        resume_text.len(),
        job_text.len()
    );

    if detailed && format == OutputFormat::Console {
        println!("\n📄 Resume Preview:");
        println!("{}", truncate_text(&resume_text, config.display.preview_chars));
        println!("\n💼 Job Description Preview:");
        println!("{}", truncate_text(&job_text, config.display.preview_chars));
    }

    let engine = AnalysisEngine::new()?;
    let vocabulary_size = engine.vocabulary_size();

    let spinner = (config.display.busy_indicator && format == OutputFormat::Console).then(|| {
        let spinner = ProgressBar::new_spinner();
        spinner.set_message("Analyzing job fit...");
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner
    });

    // The engine is pure CPU work; keep it off the async workers
    let start_time = Instant::now();
    let result = tokio::task::spawn_blocking(move || engine.analyze_job_fit(&resume_text, &job_text)).await?;
    let processing_time = start_time.elapsed();

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    info!(
        "Analysis complete: {}% match ({} of {} required skills)",
        result.match_percentage, result.analysis.matched_count, result.analysis.total_required_skills
    );

    let metadata = ReportMetadata::new(resume_source.clone(), job_source)
        .with_processing_time(processing_time.as_millis() as u64)
        .with_vocabulary_size(vocabulary_size);
    let report = Report::new(result, metadata);

    let generator = ReportGenerator::with_options(
        use_colors,
        detailed,
        config.output.pretty_json,
        config.output.include_metadata,
        true,
    );
    let rendered = generator.generate_report(&report, &format)?;

    if let Some(save) = &args.save {
        let target = if save.is_dir() {
            let resume_name = args
                .resume
                .as_deref()
                .map(|path| path.to_string_lossy().to_string())
                .unwrap_or_default();
            save.join(suggest_filename(&format, &resume_name, true))
        } else {
            save.clone()
        };

        // Files never get terminal color codes
        let content = if format == OutputFormat::Console && use_colors {
            ReportGenerator::with_options(
                false,
                detailed,
                config.output.pretty_json,
                config.output.include_metadata,
                true,
            )
            .generate_report(&report, &format)?
        } else {
            rendered.clone()
        };

        save_report_to_file(&content, &target)?;
        info!("Report saved to {}", target.display());
    }

    println!("{}", rendered);
    Ok(())
}

/// Truncate text to a maximum number of characters with ellipsis
fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => {
            let truncated = &text[..cut];
            // Avoid cutting words in half
            let end = truncated.rfind(' ').unwrap_or(cut);
            format!("{}...", &text[..end])
        }
    }
}
