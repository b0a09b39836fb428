// scope resolution and commit message composition

use std::collections::BTreeSet;
use std::path::Path;

use crate::analysis::ChangeAnalysis;
use crate::types::CommitType;

/// maximum subject length; anything longer is hard-truncated
const SUBJECT_LIMIT: usize = 50;

/// derive a scope label from the touched directories.
///
/// a single directory yields its final path segment. with several
/// directories the lexicographically smallest one is used as a crude
/// "common" choice; this is intentionally approximate (not a true
/// longest-common-prefix) and is kept for output compatibility.
pub fn determine_scope(directories: &BTreeSet<String>) -> String {
    match directories.iter().next() {
        Some(dir) => dir.rsplit('/').next().unwrap_or(dir).to_string(),
        None => String::new(),
    }
}

/// compose the subject line, capped at 50 characters
pub fn generate_subject(commit_type: CommitType, scope: &str, files: &[String]) -> String {
    let file_desc = match files.len() {
        1 => format!("update {}", basename(&files[0])),
        2..=3 => {
            let names: Vec<String> = files.iter().map(|f| basename(f)).collect();
            format!("update {}", names.join(", "))
        }
        n => format!("update {} files", n),
    };

    let area = if scope.is_empty() { "module" } else { scope };
    let subject = match commit_type {
        CommitType::Feat => format!("add new feature in {}", area),
        CommitType::Fix => format!("resolve issue in {}", area),
        _ => file_desc,
    };

    // hard cap, not word-aware
    subject.chars().take(SUBJECT_LIMIT).collect()
}

/// render the message body: a sorted file listing capped at ten entries,
/// then the line-delta summary
pub fn generate_body(analysis: &ChangeAnalysis) -> String {
    let mut lines = Vec::new();

    if !analysis.files.is_empty() {
        lines.push("Changes:".to_string());
        let mut sorted_files = analysis.files.clone();
        sorted_files.sort();
        for file in sorted_files.iter().take(10) {
            lines.push(format!("  - {}", file));
        }
        if sorted_files.len() > 10 {
            lines.push(format!("  ... and {} more files", sorted_files.len() - 10));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Modified: {}+ / {}- lines",
        analysis.additions, analysis.deletions
    ));

    lines.join("\n")
}

/// assemble the final message: `type[(scope)]: subject`, an optional
/// `[TICKET] ` prefix, a blank line, then the body. no shell escaping
/// happens here; quoting is the caller's problem.
pub fn assemble_message(
    commit_type: CommitType,
    scope: &str,
    subject: &str,
    ticket_number: &str,
    body: &str,
) -> String {
    let mut header = commit_type.key().to_string();
    if !scope.is_empty() {
        header.push_str(&format!("({})", scope));
    }
    header.push_str(&format!(": {}", subject));

    if !ticket_number.is_empty() {
        header = format!("[{}] {}", ticket_number, header);
    }

    format!("{}\n\n{}", header, body)
}

/// generate a complete conventional commit message from an analysis.
/// `commit_type` overrides the inferred type when given.
pub fn generate_commit_message(
    analysis: &ChangeAnalysis,
    commit_type: Option<CommitType>,
    ticket_number: &str,
) -> String {
    let commit_type = commit_type.unwrap_or(analysis.likely_type);
    let scope = determine_scope(&analysis.directories);
    let subject = generate_subject(commit_type, &scope, &analysis.files);
    let body = generate_body(analysis);
    assemble_message(commit_type, &scope, &subject, ticket_number, &body)
}

fn basename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
