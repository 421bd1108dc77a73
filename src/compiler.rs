//! Pattern compiler.
//!
//! Joins a list of regex fragments into one alternation. A single pass of one
//! alternation over the candidate replaces N independent scans, and the regex
//! engine keeps leftmost-first semantics: when two fragments match at the same
//! position, the one listed first wins.
//!
//! Signatures are written for ASCII User-Agents. Before searching, the few
//! non-ASCII characters that Unicode matching would equate with ASCII letters
//! or digits (the Kelvin sign, the long s, non-ASCII decimal digits) are masked
//! with same-length placeholders, so `k` never matches `\u{212A}` and `\d`
//! never matches `\u{0663}`. Match offsets stay valid for the original input.

use regex::{Regex, RegexBuilder};
use std::borrow::Cow;

/// Default ceiling for the compiled program size.
pub const DEFAULT_SIZE_LIMIT: usize = 32 * (1 << 20);

/// Flags applied to a compiled matcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchFlags {
    /// Match regardless of letter case.
    pub case_insensitive: bool,
    /// Removal touches every occurrence instead of only the first.
    pub global: bool,
}

impl MatchFlags {
    /// Flags for the crawler alternation: case-insensitive, single search.
    pub const CRAWLER: Self = Self {
        case_insensitive: true,
        global: false,
    };

    /// Flags for the exclusion alternation: case-insensitive, remove all.
    pub const EXCLUSION: Self = Self {
        case_insensitive: true,
        global: true,
    };
}

/// A compiled alternation of a signature list.
///
/// Searches carry no state between calls; every `find` starts at the
/// beginning of its input.
#[derive(Debug, Clone)]
pub struct CompiledMatcher {
    /// `None` when the source list was empty; such a matcher never matches.
    regex: Option<Regex>,
    flags: MatchFlags,
    pattern_count: usize,
}

impl CompiledMatcher {
    /// Return the leftmost match in `haystack`, if any.
    pub fn find<'h>(&self, haystack: &'h str) -> Option<&'h str> {
        let re = self.regex.as_ref()?;
        let masked = mask_non_ascii(haystack);
        re.find(&masked).map(|m| &haystack[m.range()])
    }

    /// Check whether any fragment matches `haystack`.
    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex
            .as_ref()
            .is_some_and(|re| re.is_match(&mask_non_ascii(haystack)))
    }

    /// Remove matched text from `haystack`.
    ///
    /// With the `global` flag every non-overlapping match is removed,
    /// otherwise only the first one.
    pub fn remove<'h>(&self, haystack: &'h str) -> Cow<'h, str> {
        let Some(re) = &self.regex else {
            return Cow::Borrowed(haystack);
        };
        let masked = mask_non_ascii(haystack);
        let limit = if self.flags.global { usize::MAX } else { 1 };

        let mut matches = re.find_iter(&masked).take(limit).peekable();
        if matches.peek().is_none() {
            return Cow::Borrowed(haystack);
        }

        let mut kept = String::with_capacity(haystack.len());
        let mut last = 0;
        for m in matches {
            kept.push_str(&haystack[last..m.start()]);
            last = m.end();
        }
        kept.push_str(&haystack[last..]);
        Cow::Owned(kept)
    }

    /// Flags this matcher was compiled with.
    pub fn flags(&self) -> MatchFlags {
        self.flags
    }

    /// Number of fragments in the alternation.
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// The source expression, including inline flags.
    pub fn as_str(&self) -> &str {
        self.regex.as_ref().map_or("", |re| re.as_str())
    }
}

/// Builds [`CompiledMatcher`]s from signature lists.
#[derive(Debug, Clone)]
pub struct PatternCompiler {
    size_limit: usize,
}

impl PatternCompiler {
    /// Create a compiler with the given program size limit in bytes.
    pub fn new(size_limit: usize) -> Self {
        Self { size_limit }
    }

    /// Compile `patterns` into a single alternation.
    ///
    /// Fragments are joined as-is; they are already regex syntax and are not
    /// escaped again.
    pub fn compile<S: AsRef<str>>(
        &self,
        patterns: &[S],
        flags: MatchFlags,
    ) -> Result<CompiledMatcher, regex::Error> {
        if patterns.is_empty() {
            return Ok(CompiledMatcher {
                regex: None,
                flags,
                pattern_count: 0,
            });
        }

        let alternation = patterns
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join("|");

        let regex = RegexBuilder::new(&alternation)
            .case_insensitive(flags.case_insensitive)
            .size_limit(self.size_limit)
            .build()?;

        Ok(CompiledMatcher {
            regex: Some(regex),
            flags,
            pattern_count: patterns.len(),
        })
    }
}

impl Default for PatternCompiler {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE_LIMIT)
    }
}

/// Mask characters that Unicode case folding or `\d` would treat as ASCII.
fn mask_non_ascii(haystack: &str) -> Cow<'_, str> {
    if haystack.is_ascii() || !haystack.chars().any(needs_mask) {
        return Cow::Borrowed(haystack);
    }
    haystack
        .chars()
        .map(|c| if needs_mask(c) { placeholder(c.len_utf8()) } else { c })
        .collect()
}

fn needs_mask(c: char) -> bool {
    // Kelvin sign folds to `k`, long s folds to `s`.
    matches!(c, '\u{212A}' | '\u{017F}') || (!c.is_ascii() && c.is_numeric())
}

/// A symbol with the given UTF-8 length that is neither a letter nor a digit.
fn placeholder(len: usize) -> char {
    match len {
        2 => '\u{00B7}',
        3 => '\u{FFFD}',
        _ => '\u{1F6AB}',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternation_matches_any_fragment() {
        let matcher = PatternCompiler::default()
            .compile(&["curl", "^Java\\/", "wget"], MatchFlags::CRAWLER)
            .unwrap();

        assert!(matcher.is_match("curl/7.68.0"));
        assert!(matcher.is_match("Java/1.8.0_151"));
        assert!(!matcher.is_match("my Java/1.8"));
        assert_eq!(matcher.pattern_count(), 3);
    }

    #[test]
    fn test_case_insensitive_flag() {
        let compiler = PatternCompiler::default();
        let insensitive = compiler.compile(&["Nikto"], MatchFlags::CRAWLER).unwrap();
        let sensitive = compiler.compile(&["Nikto"], MatchFlags::default()).unwrap();

        assert_eq!(insensitive.find("NIKTO scan"), Some("NIKTO"));
        assert_eq!(sensitive.find("NIKTO scan"), None);
    }

    #[test]
    fn test_leftmost_first_tie_break() {
        let compiler = PatternCompiler::default();
        let short_first = compiler.compile(&["Feed", "Feedly"], MatchFlags::CRAWLER).unwrap();
        let long_first = compiler.compile(&["Feedly", "Feed"], MatchFlags::CRAWLER).unwrap();

        assert_eq!(short_first.find("Feedly/1.0"), Some("Feed"));
        assert_eq!(long_first.find("Feedly/1.0"), Some("Feedly"));
    }

    #[test]
    fn test_global_removal() {
        let compiler = PatternCompiler::default();
        let global = compiler.compile(&["x64", "Win64"], MatchFlags::EXCLUSION).unwrap();
        let first_only = compiler
            .compile(
                &["x64", "Win64"],
                MatchFlags {
                    case_insensitive: true,
                    global: false,
                },
            )
            .unwrap();

        assert_eq!(global.remove("Win64; x64; x64"), "; ; ");
        assert_eq!(first_only.remove("Win64; x64; x64"), "; x64; x64");
    }

    #[test]
    fn test_repeated_find_is_stateless() {
        let matcher = PatternCompiler::default()
            .compile(&["bot"], MatchFlags::CRAWLER)
            .unwrap();

        for _ in 0..3 {
            assert_eq!(matcher.find("somebot"), Some("bot"));
        }
    }

    #[test]
    fn test_empty_list_never_matches() {
        let matcher = PatternCompiler::default()
            .compile::<&str>(&[], MatchFlags::CRAWLER)
            .unwrap();

        assert!(!matcher.is_match(""));
        assert_eq!(matcher.find("anything"), None);
        assert_eq!(matcher.remove("anything"), "anything");
        assert_eq!(matcher.as_str(), "");
    }

    #[test]
    fn test_invalid_fragment_is_rejected() {
        let result = PatternCompiler::default().compile(&["ok", "(unclosed"], MatchFlags::CRAWLER);
        assert!(result.is_err());
    }

    #[test]
    fn test_case_folding_is_ascii_only() {
        let matcher = PatternCompiler::default()
            .compile(&["kube-probe", "^sogou"], MatchFlags::CRAWLER)
            .unwrap();

        assert_eq!(matcher.find("KUBE-PROBE/1.27"), Some("KUBE-PROBE"));
        assert_eq!(matcher.find("\u{212A}ube-probe/1.27"), None);
        assert!(!matcher.is_match("\u{017F}ogou web spider"));
        assert!(matcher.is_match("Sogou web spider"));
    }

    #[test]
    fn test_digit_class_is_ascii_only() {
        let matcher = PatternCompiler::default()
            .compile(&[r"Firefox.[\d\.]*"], MatchFlags::EXCLUSION)
            .unwrap();

        assert_eq!(matcher.remove("Firefox/118.0"), "");
        assert_eq!(
            matcher.remove("Firefox/\u{0661}\u{0662}\u{0663}"),
            "\u{0661}\u{0662}\u{0663}"
        );
    }

    #[test]
    fn test_masked_input_keeps_original_text() {
        let matcher = PatternCompiler::default()
            .compile(&["bot.x"], MatchFlags::EXCLUSION)
            .unwrap();

        assert_eq!(matcher.find("a bot\u{212A}x"), Some("bot\u{212A}x"));
        assert_eq!(matcher.remove("\u{0663} bot\u{212A}x \u{212A}"), "\u{0663}  \u{212A}");
    }

    #[test]
    fn test_size_limit_is_enforced() {
        let result = PatternCompiler::new(16).compile(&["[a-z]{100}"], MatchFlags::CRAWLER);
        assert!(result.is_err());
    }
}
