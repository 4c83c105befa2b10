//! CSVNest CLI: turn media filenames into stock-platform metadata CSVs.
//!
//! Settings default from CSVNEST_* environment variables (or `.env`) and can
//! be overridden per run with flags.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use csvnest_cli::{expand_inputs, init_tracing, truncate_string, user_error};
use csvnest_core::models::{GenerationSettings, ImageType, Platform, PlatformRecord, Theme, Toggle};
use csvnest_core::validation::validate_settings;
use csvnest_core::Config;
use csvnest_processing::platform_headers;
use csvnest_services::{write_archive, BatchService, SessionService};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "csvnest", about = "Stock media metadata generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with an email address (checked locally only)
    Login {
        email: String,
    },
    /// Forget the logged-in user
    Logout,
    /// Show the session, theme and configured defaults
    Status,
    /// Set the theme, or toggle it when no value is given
    Theme {
        /// light or dark
        value: Option<String>,
    },
    /// Save an API key for future content-aware generation
    ApiKey {
        key: String,
    },
    /// List supported platforms and their CSV columns
    Platforms,
    /// Generate metadata for files and export a ZIP of CSVs
    Generate(GenerateArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Files or directories (directories are read one level deep)
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Target platform: "Adobe Stock", Freepik, Shutterstock, General, Vecteezy
    #[arg(long)]
    platform: Option<String>,

    /// Image type tag: None, Vector, Illustration, "3D Illustration", "3D Icon"
    #[arg(long)]
    image_type: Option<String>,

    /// Maximum title length (10-120)
    #[arg(long)]
    title_length: Option<usize>,

    /// Maximum number of keywords (5-50)
    #[arg(long)]
    keyword_count: Option<usize>,

    /// Keep duplicate keywords after merging bulk keywords
    #[arg(long)]
    keep_duplicates: bool,

    /// Extra keywords appended to every file (comma, semicolon or newline separated)
    #[arg(long)]
    bulk_keywords: Option<String>,

    /// Text placed before every title
    #[arg(long)]
    prefix: Option<String>,

    /// Text placed after every title
    #[arg(long)]
    suffix: Option<String>,

    /// Output directory for the archive (defaults to CSVNEST_OUTPUT_DIR)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print the records instead of writing an archive
    #[arg(long)]
    dry_run: bool,

    /// Output format: json or table (default: table)
    #[arg(long, default_value = "table")]
    format: String,
}

impl GenerateArgs {
    fn settings(&self, defaults: &GenerationSettings) -> anyhow::Result<GenerationSettings> {
        let mut settings = defaults.clone();

        if let Some(ref raw) = self.platform {
            settings.platform = raw.parse::<Platform>()?;
        }
        if let Some(ref raw) = self.image_type {
            settings.image_type = raw.parse::<ImageType>()?;
        }
        if let Some(title_length) = self.title_length {
            settings.title_length = title_length;
        }
        if let Some(keyword_count) = self.keyword_count {
            settings.keyword_count = keyword_count;
        }
        if self.keep_duplicates {
            settings.remove_duplicates = false;
        }
        if let Some(ref bulk) = self.bulk_keywords {
            settings.bulk_keywords = Toggle::on(bulk.clone());
        }
        if let Some(ref prefix) = self.prefix {
            settings.prefix = Toggle::on(prefix.clone());
        }
        if let Some(ref suffix) = self.suffix {
            settings.suffix = Toggle::on(suffix.clone());
        }

        validate_settings(&settings).map_err(user_error)?;
        Ok(settings)
    }
}

#[derive(Serialize)]
struct StatusReport<'a> {
    logged_in: bool,
    email: Option<String>,
    theme: Theme,
    api_key_saved: bool,
    state_dir: &'a std::path::Path,
    output_dir: &'a std::path::Path,
    defaults: &'a GenerationSettings,
}

#[derive(Serialize)]
struct PlatformInfo {
    name: &'static str,
    archive: String,
    columns: Vec<&'static str>,
}

#[derive(Serialize)]
struct GenerateSummary {
    platform: Platform,
    uploaded: usize,
    dropped: usize,
    success: usize,
    failed: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    failures: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    archive: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    records: Option<Vec<PlatformRecord>>,
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize output")?;
    println!("{}", out);
    Ok(())
}

fn print_records_table(records: &[PlatformRecord]) {
    let Some(first) = records.first() else {
        println!("\nNo records generated.");
        return;
    };

    let header = first
        .headers()
        .iter()
        .map(|h| format!("{:<30}", truncate_string(h, 30)))
        .collect::<Vec<_>>()
        .join(" ");
    println!("\n{}", header.trim_end());
    println!("{}", "-".repeat(31 * first.len()));

    for record in records {
        let row = record
            .values()
            .iter()
            .map(|v| format!("{:<30}", truncate_string(v, 30)))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{}", row.trim_end());
    }

    println!();
}

fn print_summary_table(summary: &GenerateSummary) {
    println!("\n=== Generation ({}) ===\n", summary.platform);
    println!("Uploaded: {}", summary.uploaded);
    if summary.dropped > 0 {
        println!("Dropped:  {} (queue limit reached)", summary.dropped);
    }
    println!("Success:  {}", summary.success);
    println!("Failed:   {}", summary.failed);
    for failure in &summary.failures {
        println!("  - {}", failure);
    }

    if let Some(ref records) = summary.records {
        print_records_table(records);
    }
    if let Some(ref archive) = summary.archive {
        println!("\nArchive written to {}\n", archive.display());
    }
}

async fn run_generate(
    config: &Config,
    session: &SessionService,
    args: GenerateArgs,
) -> anyhow::Result<()> {
    session.require_login().map_err(user_error)?;

    let settings = args.settings(&config.defaults)?;
    let paths = expand_inputs(&args.paths).await?;

    let mut batch = BatchService::new(session.analyzer());
    let outcome = batch.add_paths(&paths);

    let report = batch.generate_all(&settings).await.map_err(user_error)?;

    let mut summary = GenerateSummary {
        platform: settings.platform,
        uploaded: batch.progress().uploaded,
        dropped: outcome.dropped,
        success: report.success,
        failed: report.failed,
        failures: report.failures.iter().map(|e| e.to_string()).collect(),
        archive: None,
        records: None,
    };

    if args.dry_run {
        summary.records = Some(batch.records(&settings).map_err(user_error)?);
    } else {
        let archive = batch.export(&settings).map_err(user_error)?;
        let out_dir = args.out.as_deref().unwrap_or(config.output_dir.as_path());
        summary.archive = Some(write_archive(out_dir, &archive).await?);
    }

    match args.format.as_str() {
        "json" => print_json(&summary)?,
        _ => print_summary_table(&summary),
    }

    Ok(())
}

/// Load configuration and the saved session. Only commands that need them call this.
async fn load_state() -> anyhow::Result<(Config, SessionService)> {
    let config = Config::from_env().context("Failed to load configuration from CSVNEST_* variables")?;
    let session = SessionService::load(config.store_path())
        .await
        .map_err(user_error)?;
    Ok((config, session))
}

fn platform_catalog() -> Vec<PlatformInfo> {
    Platform::ALL
        .into_iter()
        .map(|p| PlatformInfo {
            name: p.as_str(),
            archive: p.archive_name(),
            columns: platform_headers(p),
        })
        .collect()
}

async fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Login { email } => {
            let (_, mut session) = load_state().await?;
            let user = session.login(&email).await.map_err(user_error)?;
            print_json(&serde_json::json!({ "logged_in": true, "email": user.email }))?;
        }
        Commands::Logout => {
            let (_, mut session) = load_state().await?;
            session.logout().await.map_err(user_error)?;
            print_json(&serde_json::json!({ "logged_in": false }))?;
        }
        Commands::Status => {
            let (config, session) = load_state().await?;
            let user = session.current_user();
            print_json(&StatusReport {
                logged_in: user.is_some(),
                email: user.map(|u| u.email),
                theme: session.theme(),
                api_key_saved: session.api_key().is_some(),
                state_dir: &config.state_dir,
                output_dir: &config.output_dir,
                defaults: &config.defaults,
            })?;
        }
        Commands::Theme { value } => {
            let (_, mut session) = load_state().await?;
            let theme = match value {
                Some(raw) => session.set_theme(raw.parse::<Theme>()?).await,
                None => session.toggle_theme().await,
            }
            .map_err(user_error)?;
            print_json(&serde_json::json!({ "theme": theme }))?;
        }
        Commands::ApiKey { key } => {
            let (_, mut session) = load_state().await?;
            session.save_api_key(&key).await.map_err(user_error)?;
            print_json(&serde_json::json!({ "api_key_saved": session.api_key().is_some() }))?;
        }
        Commands::Platforms => print_json(&platform_catalog())?,
        Commands::Generate(args) => {
            let (config, session) = load_state().await?;
            run_generate(&config, &session, args).await?;
        }
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    run(cli.command).await
}
