//! gitai - CLI entry point.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Password, Select};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use gitai::ai::{DEFAULT_MODEL, supported_models};
use gitai::error::GitError;
use gitai::git::{
    CheckoutRequest, check_git_installed, checkout_new_branch, collect_staged_diff,
    commit_with_message, commit_with_message_file, open_current_repo, passthrough, stage_all,
};
use gitai::{AiClient, CredentialStore, Credentials, HttpSettings, derive_branch_name};

/// Minimum accepted API key length at setup.
const MIN_API_KEY_LEN: usize = 11;

/// AI-powered git assistant.
#[derive(Parser, Debug)]
#[command(name = "gitai")]
#[command(about = "AI-powered git assistant")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a commit with AI assistance
    Commit {
        /// Commit message
        #[arg(short = 'm', long = "message")]
        message: Option<String>,

        /// Generate a commit message from the staged changes
        #[arg(long, visible_alias = "fc")]
        fix_commit: bool,

        /// Check spelling and grammar of a commit message, then commit
        #[arg(long, visible_alias = "sc", value_name = "MESSAGE")]
        spell_check: Option<String>,
    },

    /// Select the AI model and store its API key
    Configure,

    /// Any other git command. `checkout -b -i <url>` creates a branch from an
    /// issue URL; every other `checkout` is forwarded unchanged.
    #[command(external_subcommand)]
    External(Vec<String>),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Commit {
            message,
            fix_commit,
            spell_check,
        } => {
            let credentials = ensure_credentials()?;
            let client = AiClient::new(&HttpSettings::from_env());

            if fix_commit {
                handle_fix_commit(&client, &credentials).await
            } else if let Some(message) = spell_check {
                handle_spell_check(&client, &credentials, &message).await
            } else if let Some(message) = message {
                commit_with_message(&message).context("Failed to create commit")
            } else {
                eprintln!(
                    "Please provide a commit message with -m, or use --fix-commit / --spell-check for AI assistance"
                );
                std::process::exit(1);
            }
        }
        Command::Configure => {
            let store = CredentialStore::default_location()?;
            let credentials = prompt_for_credentials()?;
            store
                .save(&credentials)
                .context("Failed to save credentials")?;
            println!("✓ Saved credentials for {}", credentials.model);
            Ok(())
        }
        Command::External(args) => match args.split_first() {
            Some((command, rest)) if command == "checkout" => match CheckoutRequest::from_args(rest) {
                CheckoutRequest::IssueBranch { issue_url } => handle_issue_branch(&issue_url),
                CheckoutRequest::Passthrough(forwarded) => exit_with(passthrough(&forwarded)?),
            },
            _ => exit_with(passthrough(&args)?),
        },
    }
}

/// Log to stderr: `warn` by default, `debug` with `--verbose`, `RUST_LOG` wins.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Exit with git's status when it was not zero.
fn exit_with(code: i32) -> Result<()> {
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

/// Load stored credentials, running first-time setup when none exist.
fn ensure_credentials() -> Result<Credentials> {
    let store = CredentialStore::default_location()?;
    if let Some(credentials) = store.load().context("Failed to read stored credentials")? {
        debug!("Using model {}", credentials.model);
        return Ok(credentials);
    }

    println!("\nGitAI First-Time Setup");
    println!("We need to configure your AI provider credentials\n");

    let credentials = prompt_for_credentials()?;
    store
        .save(&credentials)
        .context("Failed to save credentials. Please try again.")?;

    store
        .load()?
        .context("Credentials were saved but could not be read back")
}

fn prompt_for_credentials() -> Result<Credentials> {
    let models = supported_models();
    let labels: Vec<&str> = models.iter().map(|m| m.display_name).collect();
    let default_index = models
        .iter()
        .position(|m| m.id == DEFAULT_MODEL)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Select an AI model")
        .items(&labels)
        .default(default_index)
        .interact()
        .context("Model selection cancelled")?;

    let api_key: String = Password::new()
        .with_prompt("Enter your API key")
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().len() >= MIN_API_KEY_LEN {
                Ok(())
            } else {
                Err("Please enter a valid API key")
            }
        })
        .interact()
        .context("API key entry cancelled")?;

    Ok(Credentials {
        model: models[selection].id.to_string(),
        api_key: api_key.trim().to_string(),
    })
}

async fn handle_fix_commit(client: &AiClient, credentials: &Credentials) -> Result<()> {
    check_git_installed().context("git is required")?;
    let repo = open_current_repo()
        .context("Not a git repository. Run gitai from within a git repository.")?;

    let diff = match collect_staged_diff(&repo) {
        Ok(diff) => diff,
        Err(GitError::NoStagedChanges) => {
            eprintln!("No staged changes found. Please stage your changes first.");
            return Ok(());
        }
        Err(e) => return Err(e).context("Failed to read staged changes"),
    };

    debug!(
        "Staged diff: {} files, +{} -{}",
        diff.files.len(),
        diff.additions,
        diff.deletions
    );
    println!("Generating commit message from staged changes...");

    let message = client
        .generate_commit_message(&credentials.model, &credentials.api_key, &diff.text)
        .await?;

    match message {
        Some(message) => {
            commit_with_message(&message).context("Failed to create commit")?;
            println!("✓ Commit created with AI-generated message");
        }
        None => {
            eprintln!("Warning: Could not generate a commit message. Nothing was committed.");
        }
    }

    Ok(())
}

async fn handle_spell_check(
    client: &AiClient,
    credentials: &Credentials,
    message: &str,
) -> Result<()> {
    check_git_installed().context("git is required")?;
    println!("Checking commit message...");

    let improved = client
        .improve_commit_message(&credentials.model, &credentials.api_key, message)
        .await?;

    if improved == message {
        stage_all().context("Failed to stage changes")?;
        commit_with_message(message).context("Failed to create commit")?;
        println!("✓ Commit created (no improvements suggested)");
        return Ok(());
    }

    println!("\nOriginal message: {}", message);
    println!("Improved message: {}", improved);

    let confirmed = Confirm::new()
        .with_prompt("Use this improved message?")
        .default(true)
        .interact()
        .context("Confirmation cancelled")?;

    if !confirmed {
        println!("Aborted. No commit created.");
        return Ok(());
    }

    stage_all().context("Failed to stage changes")?;
    commit_with_message_file(&improved).context("Failed to create commit")?;
    println!("✓ Commit created with improved message");
    Ok(())
}

fn handle_issue_branch(issue_url: &str) -> Result<()> {
    let branch = match derive_branch_name(issue_url) {
        Ok(branch) => branch,
        Err(e) => {
            eprintln!("Error creating branch from issue: {}", e);
            return Ok(());
        }
    };

    check_git_installed().context("git is required")?;
    checkout_new_branch(&branch).context("Failed to create branch")?;
    println!("✓ Branch \"{}\" created and checked out", branch);
    Ok(())
}
