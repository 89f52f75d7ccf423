use analytics::{MetricsEngine, split_week};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use configuration::{Labels, Settings};
use content::PromptClient;
use core_types::Language;
use menu::{
    RecommendationEngine, analyze_category_revenue, analyze_day_patterns,
    analyze_item_performance,
};
use std::fs;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod render;

/// The main entry point for the Konoba analytics application.
#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables (API credential) from a .env file, if any.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose)?;

    let settings = configuration::load_settings().context("Failed to load settings")?;

    // Execute the appropriate command
    match &cli.command {
        Commands::Report { week_end } => handle_report(&cli, &settings, *week_end)?,
        Commands::Menu => handle_menu(&cli, &settings)?,
        Commands::Social => handle_social(&cli, &settings).await?,
        Commands::All => {
            handle_report(&cli, &settings, None)?;
            handle_menu(&cli, &settings)?;
            handle_social(&cli, &settings).await?;
        }
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Restaurant sales analytics and automation suite.
#[derive(Parser)]
#[command(name = "konoba", author, version, about, long_about = None)]
struct Cli {
    /// Path to the sales data file (CSV).
    #[arg(long, short = 'i', default_value = "data/sales_sample.csv")]
    input: PathBuf,

    /// Output directory for reports and charts.
    #[arg(long, short = 'o', default_value = "output")]
    output: PathBuf,

    /// Output language: en (English) or sr (Serbian).
    #[arg(long, short = 'l', value_enum, default_value_t = Language::En)]
    lang: Language,

    /// Enable verbose logging.
    #[arg(long, short = 'v')]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the weekly sales report.
    Report {
        /// End date of the target week (format: YYYY-MM-DD).
        /// Defaults to the latest date in the data.
        #[arg(long)]
        week_end: Option<NaiveDate>,
    },
    /// Run the menu performance analysis.
    Menu,
    /// Generate social media content.
    Social,
    /// Run all analyses.
    All,
}

fn init_tracing(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Handles the weekly report: metrics, charts, and the text report.
fn handle_report(cli: &Cli, settings: &Settings, week_end: Option<NaiveDate>) -> Result<()> {
    let labels = Labels::for_language(cli.lang);
    let outcome = ingest::load_sales_data(&cli.input);

    let window = split_week(&outcome.dataset, week_end);
    if window.current.is_empty() {
        warn!("No data found for the specified week");
        println!("No data found for the specified week.");
        return Ok(());
    }

    let report = MetricsEngine::new().calculate(&window.current, &window.previous)?;
    let performance = analyze_item_performance(&window.current);
    let categories = analyze_category_revenue(&window.current);

    let chart_paths =
        charts::render_weekly_charts(&window.current, &categories, &performance, &cli.output, labels);

    let text = render::format_weekly_report(&report, labels, &settings.restaurant.name);

    fs::create_dir_all(&cli.output)?;
    let report_path = cli.output.join("weekly_report.txt");
    fs::write(&report_path, &text)
        .with_context(|| format!("Failed to write {}", report_path.display()))?;

    println!("{text}");
    print_saved(&chart_paths, &report_path);
    Ok(())
}

/// Handles the menu analysis: rankings, recommendations, charts, and the
/// text report, over the full dataset.
fn handle_menu(cli: &Cli, settings: &Settings) -> Result<()> {
    let labels = Labels::for_language(cli.lang);
    let outcome = ingest::load_sales_data(&cli.input);

    if outcome.dataset.is_empty() {
        warn!("No data available for menu analysis");
        println!("No data available for menu analysis.");
        return Ok(());
    }

    let performance = analyze_item_performance(&outcome.dataset);
    let patterns = analyze_day_patterns(&outcome.dataset);
    let categories = analyze_category_revenue(&outcome.dataset);
    let recommendations =
        RecommendationEngine::new(settings.rules.clone()).generate(&performance, &patterns);

    let chart_paths = charts::render_menu_charts(
        &performance,
        &patterns,
        &categories,
        &cli.output,
        labels,
        cli.lang,
    );

    // Full tables on stdout, compact text report on disk.
    println!("{}", render::performance_table(&performance, labels));
    println!("{}", render::category_table(&categories, labels));

    let text = render::format_menu_report(
        &performance,
        &categories,
        &recommendations,
        labels,
        &settings.restaurant.name,
    );

    fs::create_dir_all(&cli.output)?;
    let report_path = cli.output.join("menu_analysis.txt");
    fs::write(&report_path, &text)
        .with_context(|| format!("Failed to write {}", report_path.display()))?;

    println!("{text}");
    print_saved(&chart_paths, &report_path);
    Ok(())
}

/// Handles social content generation, one output file per content piece.
async fn handle_social(cli: &Cli, settings: &Settings) -> Result<()> {
    let labels = Labels::for_language(cli.lang);
    let outcome = ingest::load_sales_data(&cli.input);

    let client = PromptClient::new(&settings.ai);
    let pieces = content::generate_all_content(
        client.as_ref(),
        &outcome.dataset,
        cli.lang,
        &settings.restaurant,
    )
    .await;

    fs::create_dir_all(&cli.output)?;
    println!("{}", render::banner(labels.social_title, &settings.restaurant.name));
    for (kind, text) in &pieces {
        let path = cli.output.join(format!("social_{}.txt", kind.file_stem()));
        fs::write(&path, text)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("\n--- {} ---", kind.title());
        println!("{text}");
    }
    println!("\nContent saved to: {}", cli.output.display());
    Ok(())
}

fn print_saved(chart_paths: &[PathBuf], report_path: &std::path::Path) {
    if !chart_paths.is_empty() {
        let joined: Vec<String> = chart_paths
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        println!("\nCharts saved: {}", joined.join(", "));
    }
    println!("Report saved: {}", report_path.display());
}
