use aho_corasick::AhoCorasick;
use regex::Regex;

use super::LanguageProfile;

/// Compiled form of a profile's signature set: a head regex anchored at the
/// start of a trimmed line, plus an Aho-Corasick pre-filter for quick
/// rejection of buffers that contain no signature at all.
pub struct SignatureMatcher {
    head: Option<Regex>,
    prefilter: Option<AhoCorasick>,
}

impl SignatureMatcher {
    /// Compile a matcher for `signatures`, which is the profile's signature
    /// set after any configured log-type filtering.
    pub fn new(profile: &LanguageProfile, signatures: &[&str]) -> Self {
        if signatures.is_empty() {
            return Self {
                head: None,
                prefilter: None,
            };
        }

        // Longest spelling first so `println` wins over `print` in the
        // alternation regardless of registry order.
        let mut sorted: Vec<&str> = signatures.to_vec();
        sorted.sort_by(|a, b| b.len().cmp(&a.len()));

        let alternation = sorted
            .iter()
            .map(|s| regex::escape(s))
            .collect::<Vec<_>>()
            .join("|");

        // The invocation head must be followed by a non-identifier character
        // (or end of line) so `print` never matches `printer`.
        let flags = if profile.case_insensitive { "(?i)" } else { "" };
        let pattern = format!("{}^({})($|[^A-Za-z0-9_$])", flags, alternation);
        let head = Regex::new(&pattern).expect("failed to compile signature pattern");

        let prefilter = AhoCorasick::builder()
            .ascii_case_insensitive(profile.case_insensitive)
            .build(&sorted)
            .expect("failed to compile signature pre-filter");

        Self {
            head: Some(head),
            prefilter: Some(prefilter),
        }
    }

    /// Quick check whether `content` contains any signature at all.
    pub fn is_relevant(&self, content: &str) -> bool {
        match &self.prefilter {
            Some(ac) => ac.is_match(content),
            None => false,
        }
    }

    /// Match a signature at the start of an already-trimmed line, returning
    /// the byte length of the matched invocation head.
    pub fn match_head(&self, trimmed: &str) -> Option<usize> {
        let head = self.head.as_ref()?;
        head.captures(trimmed)
            .and_then(|caps| caps.get(1))
            .map(|m| m.len())
    }
}
