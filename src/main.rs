use clap::{Parser, Subcommand};
use course_analyzer::{
    analytics::CourseAnalyzer,
    config::{Config, ObservabilityConfig},
    error::{AppError, Result},
    store::CourseStore,
};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "course-analyzer")]
#[command(version, about = "Analytical queries over an online course dataset", long_about = None)]
struct Cli {
    /// Dataset to load (overrides configuration)
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of titles returned by `recommend` (overrides configuration)
    #[arg(short = 'n', long)]
    recommend_num: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Total participants per institution
    Institutions,

    /// Total participants per institution and subject, largest first
    InstitutionSubjects,

    /// Solo and co-taught titles per instructor
    Instructors,

    /// Top distinct titles by a metric
    Rank {
        #[arg(short = 'k', long, default_value = "10")]
        top_k: usize,

        /// Metric: hours or participants
        #[arg(short, long, default_value = "participants")]
        by: String,
    },

    /// Titles matching a subject and thresholds
    Search {
        /// Case-insensitive subject substring
        #[arg(short, long, default_value = "")]
        subject: String,

        #[arg(short = 'a', long, default_value = "0")]
        min_audited: f64,

        #[arg(short = 'H', long, default_value = "inf")]
        max_hours: f64,
    },

    /// Courses whose audience best matches a learner
    Recommend {
        #[arg(short, long)]
        age: i32,

        /// 1 for male, 0 otherwise
        #[arg(short, long)]
        gender: i32,

        /// 1 if holding a bachelor's degree or higher
        #[arg(short, long)]
        bachelor: i32,
    },

    /// Averaged demographic profile per course number
    Profiles,

    /// Row counts from loading the dataset
    Stats,
}

fn main() {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    init_tracing(&config.observability);

    if let Err(e) = run(cli, config) {
        tracing::error!(error_code = e.error_code(), message = %e, "Query failed");
        exit_with(&e);
    }
}

fn run(cli: Cli, config: Config) -> Result<()> {
    let dataset = cli.dataset.unwrap_or(config.dataset.path);
    let recommend_num = cli
        .recommend_num
        .unwrap_or(config.recommendation.recommend_num);

    let store = CourseStore::load(&dataset)?;
    let analyzer = CourseAnalyzer::new(store).with_recommend_num(recommend_num);

    match cli.command {
        Commands::Institutions => print_json(&analyzer.participants_by_institution()),
        Commands::InstitutionSubjects => {
            print_json(&analyzer.participants_by_institution_and_subject())
        }
        Commands::Instructors => print_json(&analyzer.instructor_portfolios()),
        Commands::Rank { top_k, by } => print_json(&analyzer.rank_courses_by(top_k, &by)?),
        Commands::Search {
            subject,
            min_audited,
            max_hours,
        } => print_json(&analyzer.search_courses(&subject, min_audited, max_hours)),
        Commands::Recommend {
            age,
            gender,
            bachelor,
        } => print_json(&analyzer.recommend_courses(age, gender, bachelor)?),
        Commands::Profiles => print_json(&analyzer.course_profiles()),
        Commands::Stats => print_json(&analyzer.store().load_stats()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

fn init_tracing(observability: &ObservabilityConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("course_analyzer={}", observability.log_level).into()
    });
    let json = observability.json_logs;

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
        }))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}

fn exit_with(error: &AppError) -> ! {
    eprintln!("error [{}]: {}", error.error_code(), error);
    std::process::exit(error.exit_code());
}
