//! Kazi Connect job board CLI
//!
//! Lists, filters and posts jobs against the board saved in the data
//! directory (data/kaziConnectJobs.json by default).

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use clap::{Args, Parser, Subcommand};
use common::filter::{FilterSpec, LocationMatch, evaluate};
use common::preferences::{load_theme, toggle_theme};
use common::render::render_section;
use common::{FileStorage, JobStore, NewJob};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "board", about = "Browse and post jobs on the Kazi Connect board")]
struct Cli {
    /// Directory the board is saved in
    #[arg(long, env = "KAZI_DATA_DIR", default_value = "data", global = true)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the featured and full job feeds
    List(ListArgs),
    /// Publish a new job posting
    Post(PostArgs),
    /// Show the saved theme, optionally flipping it
    Theme {
        #[arg(long)]
        toggle: bool,
    },
    /// Start an application for a job
    Apply { id: i64 },
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Free-text search over title, company and description
    #[arg(short, long, default_value = "")]
    query: String,
    #[arg(long = "type", default_value = "")]
    employment_type: String,
    #[arg(long, default_value = "")]
    experience: String,
    #[arg(long, default_value = "")]
    location: String,
    /// "min-max" or "min+", e.g. 50000-70000 or 150000+
    #[arg(long, default_value = "")]
    salary: String,
    #[arg(long, env = "KAZI_LOCATION_MATCH", default_value = "exact")]
    location_match: LocationMatch,
    /// Print the feed as JSON
    #[arg(long)]
    json: bool,
}

impl ListArgs {
    fn filter_spec(&self) -> Result<FilterSpec> {
        let spec = FilterSpec::from_inputs(
            &self.query,
            &self.employment_type,
            &self.experience,
            &self.location,
            &self.salary,
        )?;
        Ok(spec.with_location_match(self.location_match))
    }
}

#[derive(Debug, Args)]
struct PostArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    company: String,
    #[arg(long)]
    location: String,
    #[arg(long = "type")]
    employment_type: String,
    #[arg(long)]
    experience: String,
    #[arg(long)]
    description: String,
    #[arg(long)]
    salary: Option<String>,
    #[arg(long)]
    logo: Option<String>,
    /// Expiry date as YYYY-MM-DD
    #[arg(long)]
    expiry: Option<String>,
}

impl From<PostArgs> for NewJob {
    fn from(args: PostArgs) -> Self {
        NewJob {
            title: args.title,
            company: args.company,
            logo: args.logo,
            location: args.location,
            salary: args.salary,
            employment_type: args.employment_type,
            experience_level: args.experience,
            expiry_date: args.expiry,
            description: args.description,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut store = JobStore::new(FileStorage::new(&cli.data_dir));

    match cli.command {
        Command::List(args) => list(&store, &args),
        Command::Post(args) => {
            let record = store
                .publish(args.into(), Utc::now().timestamp_millis())
                .context("Failed to save job")?;
            println!("✅ Job posted successfully! (id {})", record.id);
            Ok(())
        }
        Command::Theme { toggle } => {
            let theme = if toggle {
                toggle_theme(store.storage_mut()).context("Failed to save theme")?
            } else {
                load_theme(store.storage())
            };
            let icon = if theme == common::Theme::Dark { "☀️" } else { "🌙" };
            println!("{icon} Theme: {theme}");
            Ok(())
        }
        Command::Apply { id } => match store.find(id) {
            Some(job) => {
                println!("📨 Attempting to apply for Job ID: {} ({} at {})", job.id, job.title, job.company);
                Ok(())
            }
            None => anyhow::bail!("No job with id {id}"),
        },
    }
}

fn list(store: &JobStore<FileStorage>, args: &ListArgs) -> Result<()> {
    let spec = args.filter_spec()?;
    let jobs = store.load();
    let feed = evaluate(&jobs, &spec);
    tracing::debug!(?spec, matched = feed.all.len(), "filtered board");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&feed)?);
        return Ok(());
    }

    let today = Local::now().date_naive();
    println!("{}", render_section("Featured Jobs", &feed.featured, today));
    println!("{}", render_section("All Jobs", &feed.all, today));
    Ok(())
}
