//! One-shot analysis command.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use sentiment_core::{AnalysisRequest, AnalysisResult, Sentiment, SentimentClassifier};

use super::backend::BackendArgs;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Text to classify
    #[arg(default_value = "I love this product! It's amazing.")]
    pub text: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub backend: BackendArgs,
}

pub async fn execute(args: AnalyzeArgs) -> Result<()> {
    let classifier = args.backend.build_classifier()?;
    let output = run(&classifier, &args).await?;
    println!("{output}");
    Ok(())
}

/// Classify `args.text` and render the result for the terminal.
async fn run(classifier: &SentimentClassifier, args: &AnalyzeArgs) -> Result<String> {
    let result = classifier
        .analyze(AnalysisRequest::new(args.text.clone()))
        .await
        .context("Sentiment analysis failed")?;

    render(&result, args.json)
}

fn render(result: &AnalysisResult, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(result)?);
    }

    let sentiment = match result.sentiment {
        Sentiment::Positive => result.sentiment.as_str().green().bold(),
        Sentiment::Negative => result.sentiment.as_str().red().bold(),
    };

    Ok(format!(
        "{}: {}\n{}: {}",
        "Text".bold(),
        result.input_text,
        "Sentiment".bold(),
        sentiment
    ))
}
