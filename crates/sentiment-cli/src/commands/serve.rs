//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::backend::BackendArgs;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "SENTIMENT_PORT", default_value = "8000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "SENTIMENT_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Mirror logs into a file
    #[arg(long)]
    pub log: bool,

    /// Log file used with --log
    #[arg(long, default_value = "sentiment.log")]
    pub log_file: PathBuf,

    #[command(flatten)]
    pub backend: BackendArgs,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    // Loaded once; shared read-only by every request.
    let classifier = args.backend.build_classifier()?;

    println!();
    println!(
        "  {} {}",
        "Sentiment".cyan().bold(),
        "Analysis API".bold()
    );
    println!();
    println!(
        "  {}   http://{}:{}/",
        "Health".green(),
        args.host,
        args.port
    );
    println!(
        "  {}  http://{}:{}/analyze",
        "Analyze".green(),
        args.host,
        args.port
    );
    println!(
        "  {}  {}",
        "Backend".green(),
        classifier.backend_name()
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    sentiment_web::run_server(classifier, &args.host, args.port).await?;

    Ok(())
}
