// conventional commit type vocabulary and type-selection policy

use std::fmt;

/// the fixed conventional commit type vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Build,
    Ci,
    Chore,
}

impl CommitType {
    /// all types in insertion order; the 1-based index shown in the
    /// interactive menu follows this order
    pub const ALL: [CommitType; 10] = [
        CommitType::Feat,
        CommitType::Fix,
        CommitType::Docs,
        CommitType::Style,
        CommitType::Refactor,
        CommitType::Perf,
        CommitType::Test,
        CommitType::Build,
        CommitType::Ci,
        CommitType::Chore,
    ];

    /// the short key used in the commit header
    pub fn key(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Perf => "perf",
            CommitType::Test => "test",
            CommitType::Build => "build",
            CommitType::Ci => "ci",
            CommitType::Chore => "chore",
        }
    }

    /// human-readable description for the interactive menu
    pub fn description(&self) -> &'static str {
        match self {
            CommitType::Feat => "New feature",
            CommitType::Fix => "Bug fix",
            CommitType::Docs => "Documentation changes",
            CommitType::Style => "Code style changes",
            CommitType::Refactor => "Code refactoring",
            CommitType::Perf => "Performance improvements",
            CommitType::Test => "Test changes",
            CommitType::Build => "Build system changes",
            CommitType::Ci => "CI/CD changes",
            CommitType::Chore => "Maintenance tasks",
        }
    }

    /// look up a type by its 1-based position in the menu
    pub fn from_choice(choice: usize) -> Option<CommitType> {
        if choice == 0 {
            return None;
        }
        CommitType::ALL.get(choice - 1).copied()
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// resolve the final commit type from an optional 1-based override choice.
/// an absent or out-of-range choice falls back silently to the inferred
/// type; this permissive default is deliberate, not an error path.
pub fn resolve_commit_type(override_choice: Option<usize>, inferred: CommitType) -> CommitType {
    override_choice
        .and_then(CommitType::from_choice)
        .unwrap_or(inferred)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_indexing_is_one_based() {
        assert_eq!(CommitType::from_choice(1), Some(CommitType::Feat));
        assert_eq!(CommitType::from_choice(10), Some(CommitType::Chore));
        assert_eq!(CommitType::from_choice(0), None);
        assert_eq!(CommitType::from_choice(11), None);
    }

    #[test]
    fn invalid_override_falls_back_to_inferred() {
        assert_eq!(
            resolve_commit_type(Some(42), CommitType::Docs),
            CommitType::Docs
        );
        assert_eq!(resolve_commit_type(None, CommitType::Chore), CommitType::Chore);
        assert_eq!(
            resolve_commit_type(Some(2), CommitType::Chore),
            CommitType::Fix
        );
    }

    #[test]
    fn keys_match_the_conventional_vocabulary() {
        let keys: Vec<&str> = CommitType::ALL.iter().map(|t| t.key()).collect();
        assert_eq!(
            keys,
            vec!["feat", "fix", "docs", "style", "refactor", "perf", "test", "build", "ci", "chore"]
        );
    }
}
