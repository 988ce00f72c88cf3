//! commit-msg - CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use commit_msg::config::DEFAULT_TIMEOUT;
use commit_msg::{CommitAssistError, CommitAssistant, MessageConfig, Settings, Style, parse_timeout};

const STATUS_PAGE: &str = "https://status.openai.com/";

/// Suggest a commit message from filenames and the lines changed.
#[derive(Parser, Debug)]
#[command(name = "commit-msg")]
#[command(about = "A CLI tool to suggest commit messages")]
#[command(version)]
struct Cli {
    /// The file where the changes are. Usually $COMMIT_MSG_FILE in a prepare-commit-msg hook
    #[arg(long)]
    file: PathBuf,

    /// The timeout for the request to OpenAI (e.g. 5s, 500ms, 1m)
    #[arg(long, default_value = DEFAULT_TIMEOUT)]
    timeout: String,

    /// Print the cost of the request
    #[arg(long)]
    cost: bool,

    /// Tone of the message: descriptive, conversational, list or problem-solution
    #[arg(long, default_value_t = Style::Descriptive)]
    style: Style,

    /// Follow the Conventional Commits specification
    #[arg(long)]
    conventional: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(Ok(())) => ExitCode::SUCCESS,
        Ok(Err(err)) => report(&err),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Outer result: setup failures. Inner result: the suggestion itself.
async fn run(cli: Cli) -> Result<Result<(), CommitAssistError>> {
    let settings = Settings::from_env()?;

    let timeout = parse_timeout(&cli.timeout).context("Could not parse timeout duration")?;

    let git_diff = commit_msg::hook::read_diff_file(&cli.file)?;

    let assistant = CommitAssistant::new(settings.client());
    let config = MessageConfig::new(cli.style, cli.conventional);

    let response = match assistant
        .get_commit_message(&git_diff, Some(&config), timeout)
        .await
    {
        Ok(response) => response,
        Err(err) => return Ok(Err(err)),
    };

    println!("{}", response.message);

    if cli.cost {
        println!("Cost {:.2} cent", response.cost);
    }

    Ok(Ok(()))
}

/// Print a message for `err` and pick its exit code.
fn report(err: &CommitAssistError) -> ExitCode {
    match err {
        CommitAssistError::Unsure(text) => println!("{text}"),
        CommitAssistError::UnexpectedMessageCount(_) => {
            println!("Unexpected number of messages returned")
        }
        e if e.is_timeout() => {
            println!("Request timed out.");
            println!("See API status at {STATUS_PAGE:?}");
            println!("or try again with a longer timeout (see --timeout flag).");
        }
        e => println!("Unknown error {e}"),
    }

    ExitCode::from(err.exit_code() as u8)
}
