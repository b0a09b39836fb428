// staged-change analysis: line deltas, touched paths, commit type inference

use std::collections::BTreeSet;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::AnalysisError;
use crate::types::CommitType;

/// structured view of a set of staged changes, built once per run
pub struct ChangeAnalysis {
    /// staged file paths in the order the collaborator reported them
    pub files: Vec<String>,
    pub additions: usize,
    pub deletions: usize,
    /// extensions observed across the files, leading dot included
    pub file_extensions: BTreeSet<String>,
    /// parent directories of the files; root-level files contribute nothing
    pub directories: BTreeSet<String>,
    pub likely_type: CommitType,
}

impl ChangeAnalysis {
    /// analyse a staged diff and its file list.
    ///
    /// the diff is trusted to be in unified-diff form; a malformed diff
    /// degrades to zero line deltas and a `chore` classification rather
    /// than failing. an empty file list is the only fatal condition.
    pub fn from_diff(diff: &str, files: Vec<String>) -> Result<ChangeAnalysis, AnalysisError> {
        if files.is_empty() {
            return Err(AnalysisError::NoStagedChanges);
        }

        // historical counting formula: the `+++`/`---` file headers are
        // counted once and subtracted once, so the totals track the
        // original tool's output, not git's numstat
        let additions = count_marked_lines(diff, "+", "+++");
        let deletions = count_marked_lines(diff, "-", "---");

        let mut file_extensions = BTreeSet::new();
        let mut directories = BTreeSet::new();
        for file in &files {
            let path = Path::new(file);
            if let Some(ext) = path.extension() {
                file_extensions.insert(format!(".{}", ext.to_string_lossy()));
            }
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                directories.insert(parent.to_string_lossy().into_owned());
            }
        }

        let likely_type = classify(&RuleContext {
            diff,
            files: &files,
            file_extensions: &file_extensions,
            directories: &directories,
        });

        Ok(ChangeAnalysis {
            files,
            additions,
            deletions,
            file_extensions,
            directories,
            likely_type,
        })
    }
}

fn count_marked_lines(diff: &str, marker: &str, header_marker: &str) -> usize {
    let marked = diff.lines().filter(|l| l.starts_with(marker)).count();
    let headers = diff.lines().filter(|l| l.starts_with(header_marker)).count();
    marked.saturating_sub(headers)
}

/// inputs visible to the classification rules
struct RuleContext<'a> {
    diff: &'a str,
    files: &'a [String],
    file_extensions: &'a BTreeSet<String>,
    directories: &'a BTreeSet<String>,
}

/// the classification rules in priority order; the first matching rule
/// wins and later rules never override it
const RULES: &[(fn(&RuleContext) -> bool, CommitType)] = &[
    (is_docs_change, CommitType::Docs),
    (is_test_change, CommitType::Test),
    (is_ci_change, CommitType::Ci),
    (is_build_change, CommitType::Build),
    (mentions_fix, CommitType::Fix),
    (mentions_feature, CommitType::Feat),
    (mentions_refactor, CommitType::Refactor),
];

fn classify(ctx: &RuleContext) -> CommitType {
    RULES
        .iter()
        .find(|(matches, _)| matches(ctx))
        .map(|&(_, commit_type)| commit_type)
        .unwrap_or(CommitType::Chore)
}

fn is_docs_change(ctx: &RuleContext) -> bool {
    ctx.files.iter().any(|f| {
        f.contains(".md") || f.contains("README") || f.to_lowercase().contains("doc")
    })
}

fn is_test_change(ctx: &RuleContext) -> bool {
    ctx.directories.iter().any(|d| d.contains("test"))
        || ctx.files.iter().any(|f| f.to_lowercase().contains("test"))
}

fn touches_yaml(ctx: &RuleContext) -> bool {
    ctx.file_extensions.contains(".yml") || ctx.file_extensions.contains(".yaml")
}

fn is_ci_change(ctx: &RuleContext) -> bool {
    touches_yaml(ctx)
        && ctx
            .directories
            .iter()
            .any(|d| d.contains("ci") || d.contains(".github"))
}

fn is_build_change(ctx: &RuleContext) -> bool {
    touches_yaml(ctx)
}

lazy_static! {
    static ref FIX_KEYWORDS: Regex = Regex::new(r"(?i)(fix|bug|issue|patch)").unwrap();
    static ref FEATURE_KEYWORDS: Regex = Regex::new(r"(?i)(add|new|feature|implement)").unwrap();
    static ref REFACTOR_KEYWORDS: Regex =
        Regex::new(r"(?i)(refactor|restructure|reorganize)").unwrap();
}

fn mentions_fix(ctx: &RuleContext) -> bool {
    FIX_KEYWORDS.is_match(ctx.diff)
}

fn mentions_feature(ctx: &RuleContext) -> bool {
    FEATURE_KEYWORDS.is_match(ctx.diff)
}

fn mentions_refactor(ctx: &RuleContext) -> bool {
    REFACTOR_KEYWORDS.is_match(ctx.diff)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(files: &[&str]) -> Vec<String> {
        files.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn empty_file_list_is_fatal() {
        assert!(matches!(
            ChangeAnalysis::from_diff("", Vec::new()),
            Err(AnalysisError::NoStagedChanges)
        ));
    }

    #[test]
    fn line_deltas_follow_the_counting_formula() {
        let diff = "--- a/src/main.rs\n+++ b/src/main.rs\n@@ -1,2 +1,3 @@\n+added line\n+another\n-removed\n";
        let analysis = ChangeAnalysis::from_diff(diff, paths(&["src/main.rs"])).unwrap();
        assert_eq!(analysis.additions, 2);
        assert_eq!(analysis.deletions, 1);
    }

    #[test]
    fn extensions_keep_the_leading_dot() {
        let analysis =
            ChangeAnalysis::from_diff("", paths(&["src/main.rs", "Makefile", "a/b.yaml"])).unwrap();
        assert!(analysis.file_extensions.contains(".rs"));
        assert!(analysis.file_extensions.contains(".yaml"));
        assert_eq!(analysis.file_extensions.len(), 2);
    }

    #[test]
    fn root_level_files_contribute_no_directory() {
        let analysis =
            ChangeAnalysis::from_diff("", paths(&["README.md", "src/lib.rs"])).unwrap();
        assert_eq!(
            analysis.directories.iter().collect::<Vec<_>>(),
            vec!["src"]
        );
    }

    #[test]
    fn markdown_files_classify_as_docs() {
        let analysis = ChangeAnalysis::from_diff("", paths(&["guide.md"])).unwrap();
        assert_eq!(analysis.likely_type, CommitType::Docs);
    }

    #[test]
    fn docs_rule_outranks_fix_keywords() {
        let diff = "+fix a nasty bug in the parser\n";
        let analysis = ChangeAnalysis::from_diff(diff, paths(&["notes.md"])).unwrap();
        assert_eq!(analysis.likely_type, CommitType::Docs);
    }

    #[test]
    fn test_paths_classify_as_test() {
        let analysis =
            ChangeAnalysis::from_diff("", paths(&["tests/parser_test.rs"])).unwrap();
        assert_eq!(analysis.likely_type, CommitType::Test);
    }

    #[test]
    fn yaml_under_github_is_ci_otherwise_build() {
        let ci = ChangeAnalysis::from_diff("", paths(&[".github/workflows/ci.yml"])).unwrap();
        assert_eq!(ci.likely_type, CommitType::Ci);

        let build = ChangeAnalysis::from_diff("", paths(&["deploy/stack.yml"])).unwrap();
        assert_eq!(build.likely_type, CommitType::Build);
    }

    #[test]
    fn diff_keywords_drive_fix_feat_refactor() {
        let files = paths(&["src/lib.rs"]);
        let fix = ChangeAnalysis::from_diff("+patch the overflow\n", files.clone()).unwrap();
        assert_eq!(fix.likely_type, CommitType::Fix);

        let feat = ChangeAnalysis::from_diff("+implement retry logic\n", files.clone()).unwrap();
        assert_eq!(feat.likely_type, CommitType::Feat);

        let refactor =
            ChangeAnalysis::from_diff("+restructure the parser\n", files.clone()).unwrap();
        assert_eq!(refactor.likely_type, CommitType::Refactor);

        let chore = ChangeAnalysis::from_diff("+tidy whitespace\n", files).unwrap();
        assert_eq!(chore.likely_type, CommitType::Chore);
    }

    #[test]
    fn empty_diff_degrades_to_chore_with_zero_deltas() {
        let analysis = ChangeAnalysis::from_diff("", paths(&["src/main.c"])).unwrap();
        assert_eq!(analysis.likely_type, CommitType::Chore);
        assert_eq!(analysis.additions, 0);
        assert_eq!(analysis.deletions, 0);
    }
}
