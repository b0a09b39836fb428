use clap::Parser;
use commit_scribe_core::{ScribeArgs, execute_commit_scribe_flow, style};

fn main() {
    let cli_args = ScribeArgs::parse();
    match execute_commit_scribe_flow(cli_args) {
        Ok((final_commit_message, committed)) => {
            if !committed && !final_commit_message.is_empty() {
                println!("\n{}", style("✨ ready to commit! ✨").green().bold());
                println!("{}", style("run this command from your terminal:").cyan());
                let git_command = format!(
                    "git commit -m \"{}\"",
                    final_commit_message.replace("\"", "\\\"")
                );
                println!("{}\n", style(git_command).yellow().bold());
            }
        }
        Err(e) => {
            eprintln!(
                "{} {} {}",
                style("❌"),
                style("commit-scribe failed:").red().bold(),
                style(&e).red()
            );
            std::process::exit(1);
        }
    }
}
