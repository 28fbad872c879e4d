use crate::shared::Result;
use std::cell::Cell;

/// Maximum number of ignore patterns to prevent DoS attacks
const MAX_IGNORE_PATTERNS: usize = 64;

/// Maximum length of a single ignore pattern to prevent DoS attacks
const MAX_PATTERN_LENGTH: usize = 255;

/// IgnoreRules - Drops components whose package identifier matches a pattern
///
/// Patterns are matched against the whole package identifier
/// (e.g. `npm/left-pad@1.3.0`). `*` matches zero or more characters;
/// everything else matches literally and case-sensitively.
#[derive(Debug)]
pub struct IgnoreRules {
    patterns: Vec<IgnorePattern>,
}

impl IgnoreRules {
    /// Creates the rule set from raw pattern strings
    ///
    /// # Errors
    /// - Too many patterns (> MAX_IGNORE_PATTERNS)
    /// - Empty, too long, or wildcard-only pattern
    /// - Pattern containing whitespace or control characters
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_IGNORE_PATTERNS {
            anyhow::bail!(
                "Too many ignore patterns: {} (maximum: {})",
                patterns.len(),
                MAX_IGNORE_PATTERNS
            );
        }

        let patterns = patterns
            .into_iter()
            .map(IgnorePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// An empty rule set that ignores nothing
    pub fn none() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Checks whether a package identifier matches any ignore pattern
    pub fn is_ignored(&self, package_identifier: &str) -> bool {
        // Evaluate every pattern so unmatched-pattern tracking stays accurate
        self.patterns
            .iter()
            .fold(false, |ignored, p| p.matches(package_identifier) || ignored)
    }

    /// Returns the patterns that did not match any identifier so far
    pub fn unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| p.original.clone())
            .collect()
    }
}

/// A single ignore pattern with its compiled matcher
#[derive(Debug)]
struct IgnorePattern {
    original: String,
    matcher: PatternMatcher,
    matched: Cell<bool>,
}

impl IgnorePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;
        let matcher = compile_pattern(&pattern);

        Ok(Self {
            original: pattern,
            matcher,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, package_identifier: &str) -> bool {
        let is_match = self.matcher.matches(package_identifier);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }
}

/// Pattern matcher types
#[derive(Debug, PartialEq, Eq)]
enum PatternMatcher {
    /// No wildcard: "npm/left-pad@1.3.0"
    Exact(String),
    /// Literal segments separated by wildcards: "npm/*@1.*"
    Wildcard {
        segments: Vec<String>,
        anchored_start: bool,
        anchored_end: bool,
    },
}

impl PatternMatcher {
    fn matches(&self, candidate: &str) -> bool {
        match self {
            PatternMatcher::Exact(s) => candidate == s,
            PatternMatcher::Wildcard {
                segments,
                anchored_start,
                anchored_end,
            } => {
                let mut rest = candidate;

                for (i, segment) in segments.iter().enumerate() {
                    let is_first = i == 0;
                    let is_last = i == segments.len() - 1;

                    if is_first && *anchored_start {
                        match rest.strip_prefix(segment.as_str()) {
                            Some(after) => rest = after,
                            None => return false,
                        }
                    } else if is_last && *anchored_end {
                        return rest.len() >= segment.len() && rest.ends_with(segment.as_str());
                    } else {
                        match rest.find(segment.as_str()) {
                            Some(pos) => rest = &rest[pos + segment.len()..],
                            None => return false,
                        }
                    }
                }

                !*anchored_end || rest.is_empty()
            }
        }
    }
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        anyhow::bail!("Ignore pattern cannot be empty");
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        anyhow::bail!(
            "Ignore pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        );
    }

    if let Some(ch) = pattern
        .chars()
        .find(|c| c.is_whitespace() || c.is_control())
    {
        anyhow::bail!(
            "Ignore pattern contains invalid character {:?} in pattern '{}'. \
             Whitespace and control characters are not allowed.",
            ch,
            pattern
        );
    }

    if pattern.chars().all(|c| c == '*') {
        anyhow::bail!(
            "Ignore pattern cannot contain only wildcards: '{}'",
            pattern
        );
    }

    Ok(())
}

fn compile_pattern(pattern: &str) -> PatternMatcher {
    if !pattern.contains('*') {
        return PatternMatcher::Exact(pattern.to_string());
    }

    let segments = pattern
        .split('*')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    PatternMatcher::Wildcard {
        segments,
        anchored_start: !pattern.starts_with('*'),
        anchored_end: !pattern.ends_with('*'),
    }
}
