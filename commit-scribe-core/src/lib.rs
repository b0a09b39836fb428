// commit-scribe-core/src/lib.rs

// declare modules
pub mod analysis;
pub mod error;
pub mod git;
pub mod message;
pub mod ticket;
pub mod types;

// re-export key structs/functions for external use by other crates
pub use anyhow::{Context, Result};
pub use clap::Parser; // re-export Parser for the CLI crate
pub use console::style; // re-export for crates that do their own printing
pub use dialoguer::{Select, theme::ColorfulTheme};
pub use indicatif::{ProgressBar, ProgressStyle};
pub use std::time::Duration;

pub use crate::analysis::ChangeAnalysis;
pub use crate::error::{AnalysisError, GitError};
pub use crate::git::{current_branch, get_staged_diff, get_staged_files, has_staged_changes};
pub use crate::message::{
    assemble_message, determine_scope, generate_body, generate_commit_message, generate_subject,
};
pub use crate::ticket::extract_ticket_number;
pub use crate::types::{CommitType, resolve_commit_type};

// argument parsing struct, shared between the core flow and the CLI crate
#[derive(Parser, Debug, Clone)]
#[command(name = "commit-scribe")]
pub struct ScribeArgs {
    /// path to git repository (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// pick the commit type interactively instead of using the inferred one
    #[arg(short, long)]
    pub interactive: bool,

    /// commit type override as a 1-based index into the type list (1 = feat .. 10 = chore);
    /// an out-of-range value silently falls back to the inferred type
    #[arg(short = 't', long = "type")]
    pub type_choice: Option<usize>,

    /// run the git commit command with the generated message
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// show detailed analysis information
    #[arg(short, long)]
    pub verbose: bool,
}

// the core message generation and interaction flow
pub fn execute_commit_scribe_flow(args: ScribeArgs) -> Result<(String, bool)> {
    let repo_path = args.path.unwrap_or_else(|| ".".to_string());

    println!("{}", style("\ncommit-scribe ✍️").cyan().bold());
    println!(
        "{}\n",
        style("conventional commit message generator").dim()
    );

    let staged_files =
        git::get_staged_files(&repo_path).context("failed to list staged files")?;
    if staged_files.is_empty() {
        return Err(AnalysisError::NoStagedChanges.into());
    }

    println!("{}", style("staged files:").cyan().bold());
    for file in &staged_files {
        println!("{}", style(format!("  - {}", file)).green());
    }
    println!();

    // branch lookup failures are treated like an unnamed branch
    let branch_name = git::current_branch(&repo_path);
    let ticket_number = ticket::extract_ticket_number(&branch_name);
    if !ticket_number.is_empty() {
        println!(
            "{} {}\n",
            style("detected ticket:").cyan().bold(),
            style(&ticket_number).yellow()
        );
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&[
                "📊 ⠋", "📊 ⠙", "📊 ⠹", "📊 ⠸", "📊 ⠼", "📊 ⠴", "📊 ⠦", "📊 ⠧", "📊 ⠇",
                "📊 ⠏",
            ])
            .template("{spinner} analysing changes...")
            .unwrap(),
    );
    spinner.enable_steady_tick(Duration::from_millis(120));

    let diff = git::get_staged_diff(&repo_path).context("failed to get staged diff")?;
    let analysis = ChangeAnalysis::from_diff(&diff, staged_files)
        .context("failed to analyse staged changes")?;

    spinner.finish_and_clear();

    if args.verbose {
        println!("found {} staged files", analysis.files.len());
        println!(
            "line deltas: {}+ / {}-",
            analysis.additions, analysis.deletions
        );
        println!("directories: {:?}", analysis.directories);
        println!("suggested type: {}", analysis.likely_type);
    }

    let commit_type = if args.interactive {
        prompt_commit_type(&analysis)?
    } else {
        types::resolve_commit_type(args.type_choice, analysis.likely_type)
    };

    let commit_message =
        message::generate_commit_message(&analysis, Some(commit_type), &ticket_number);

    println!("\n{}\n", style("✅ generated commit message:").green().bold());
    println!("{}", style(&commit_message).yellow());
    println!();

    let mut commit_succeeded = false;
    if args.yes {
        println!("{}", style("executing commit command...").cyan());
        git::run_commit(&repo_path, &commit_message)
            .context("failed to execute git commit command")?;
        println!("{}", style("✅ commit successful!").green().bold());
        commit_succeeded = true;
    }

    Ok((commit_message, commit_succeeded))
}

/// interactive commit-type selection, with the inferred type preselected
fn prompt_commit_type(analysis: &ChangeAnalysis) -> Result<CommitType> {
    println!(
        "detected changes in {} files, suggested type: {}",
        analysis.files.len(),
        style(analysis.likely_type.key()).yellow()
    );

    let items: Vec<String> = CommitType::ALL
        .iter()
        .map(|t| format!("{:10} - {}", t.key(), t.description()))
        .collect();
    let default = CommitType::ALL
        .iter()
        .position(|t| *t == analysis.likely_type)
        .unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("commit type")
        .default(default)
        .items(&items)
        .interact()?;

    // the menu is 1-indexed in the same order as the vocabulary
    Ok(types::resolve_commit_type(
        Some(selection + 1),
        analysis.likely_type,
    ))
}
