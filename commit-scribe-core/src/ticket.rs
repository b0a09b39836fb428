// ticket number extraction from branch names

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // matches tracker identifiers like MKPC-0000 or PROJ-999
    static ref TICKET_PATTERN: Regex = Regex::new(r"[A-Z]+-\d+").unwrap();
}

/// extract a ticket number from a branch name.
///
/// supports branch naming schemes like `feature/MKPC-0000`,
/// `bugfix/MKPC-1234` or `hotfix/PROJ-999`. returns the first match
/// scanning left to right, or an empty string when the branch carries
/// no ticket (or the branch name itself is empty).
pub fn extract_ticket_number(branch_name: &str) -> String {
    TICKET_PATTERN
        .find(branch_name)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
