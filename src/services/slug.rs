use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

// Runs of whitespace, underscores, en-dashes, and em-dashes become a hyphen.
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s_–—]+").unwrap());
static INVALID: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9-]").unwrap());
static HYPHEN_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").unwrap());

/// Derive a URL-safe slug candidate from a title.
///
/// NFKD-decomposes the title and keeps only ASCII (so "é" folds to "e" and
/// characters with no ASCII fold are dropped), then lowercases, turns
/// separator runs into hyphens, strips everything outside `[a-z0-9-]`,
/// collapses hyphen runs, and trims hyphens at the ends.
///
/// Titles with no alphanumeric survivors normalize to the empty string; the
/// caller routes those through the registry's fallback base.
pub fn normalize(title: &str) -> String {
    if title.is_empty() {
        return String::new();
    }
    let folded: String = title.nfkd().filter(char::is_ascii).collect();
    let lowered = folded.to_lowercase();
    let hyphenated = SEPARATORS.replace_all(lowered.trim(), "-");
    let cleaned = INVALID.replace_all(&hyphenated, "");
    let collapsed = HYPHEN_RUNS.replace_all(&cleaned, "-");
    collapsed.trim_matches('-').to_string()
}
