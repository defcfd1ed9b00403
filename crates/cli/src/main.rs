use anyhow::{Context, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use siteaudit_core::{
    ContentAnalyzer, ExtractConfig, FetchConfig, GeminiAnalyzer, GeminiConfig, extract_text,
    fetch_url,
};

mod echo;

use echo::{format_size, print_banner, print_info, print_step, print_success};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Audit the marketing effectiveness of a web page
#[derive(Parser, Debug)]
#[command(name = "siteaudit")]
#[command(author = "Siteaudit Contributors")]
#[command(version = VERSION)]
#[command(about = "Audit the marketing effectiveness of web pages", long_about = None)]
struct Args {
    /// URL of the page to audit
    #[arg(value_name = "URL")]
    url: String,

    /// Print the report as raw JSON instead of styled text
    #[arg(long)]
    json: bool,

    /// HTTP timeout for the page fetch in seconds
    #[arg(long, default_value = "10", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for the page fetch
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Model identifier for the analysis call
    #[arg(long, default_value = "gemini-2.5-flash", value_name = "MODEL")]
    model: String,

    /// Timeout for the analysis call in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    model_timeout: u64,

    /// Maximum number of characters of page text sent to the model
    #[arg(long, default_value = "4000", value_name = "NUM")]
    max_chars: usize,

    /// Enable verbose progress output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        print_banner();
    }

    if args.url.trim().is_empty() {
        bail!("URL must not be empty");
    }

    // The key is read once here; a missing secret fails before any network call.
    let gemini_config = GeminiConfig::from_env()
        .context("GEMINI_API_KEY must be set to run an audit")?
        .with_model(args.model)
        .with_timeout(args.model_timeout);
    let analyzer = GeminiAnalyzer::new(gemini_config).context("Failed to build analyzer")?;

    if args.verbose {
        print_step(1, 3, &format!("Fetching {}", args.url.bright_white().underline()));
    }

    let mut fetch_config = FetchConfig { timeout: args.timeout, ..Default::default() };
    if let Some(user_agent) = args.user_agent {
        fetch_config.user_agent = user_agent;
    }

    let html = fetch_url(args.url.trim(), &fetch_config)
        .await
        .context("Failed to fetch page")?;

    if args.verbose {
        eprintln!("  {} {}", "Size:".dimmed(), format_size(html.len()).bright_white());
        print_step(2, 3, "Extracting visible text");
    }

    let extract_config = ExtractConfig { max_chars: args.max_chars };
    let text = extract_text(&html, &extract_config);

    if args.verbose {
        print_info(&format!("{} characters of text", text.chars().count()));
        print_step(3, 3, "Analyzing content");
    }

    let report = analyzer.analyze(&text).await.context("Analysis failed")?;

    if args.verbose {
        print_success("Audit complete\n");
    }

    if args.json {
        let json = report.to_json().context("Failed to serialize report")?;
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!(
            "{} {}",
            "Hook Score:".bold(),
            format!("{}/100", report.hook_score).bright_white()
        );
        println!("{} {}", "Target Audience:".bold(), report.audience_persona);

        if !report.conversion_killers.is_empty() {
            println!("{}", "Conversion Killers:".bold());
            for killer in &report.conversion_killers {
                println!("  {} {}", "-".dimmed(), killer.bright_yellow());
            }
        }
    }

    Ok(())
}
