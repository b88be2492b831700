pub mod types;

pub use types::{CandidateSpan, ScanNote, SourceBuffer, SpanKind};

use tracing::{debug, warn};

use crate::profile::{LanguageProfile, SignatureMatcher, Terminator};

/// Per-line scan state. The scanner is always `Outside` after the last line;
/// an unterminated `InSpan` is force-closed at EOF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Outside,
    InSpan,
}

/// Walks a source buffer line by line and produces candidate spans:
/// active log-call statements and commented-out log lines.
pub struct Scanner<'p> {
    profile: &'p LanguageProfile,
    matcher: SignatureMatcher,
}

impl<'p> Scanner<'p> {
    /// `signatures` is the profile's signature set after any configured
    /// log-type filtering.
    pub fn new(profile: &'p LanguageProfile, signatures: &[&str]) -> Self {
        Self {
            profile,
            matcher: SignatureMatcher::new(profile, signatures),
        }
    }

    pub fn scan(&self, buffer: &SourceBuffer) -> (Vec<CandidateSpan>, Vec<ScanNote>) {
        let mut spans = Vec::new();
        let mut notes = Vec::new();

        if buffer.line_count() == 0 || !self.matcher.is_relevant(buffer.text) {
            return (spans, notes);
        }

        let mut state = ScanState::Outside;
        let mut tracker = StatementTracker::new(self.profile.terminator);
        let mut span_start = 0usize;
        let mut in_block_comment = false;

        for idx in 0..buffer.line_count() {
            let line = buffer.line(idx);
            let trimmed = line.trim();

            match state {
                ScanState::Outside => {
                    if in_block_comment {
                        if let Some((_, close)) = self.profile.block_comment {
                            if trimmed.contains(close) {
                                in_block_comment = false;
                            }
                        }
                        continue;
                    }

                    if let Some(marker) = self.leading_comment_marker(trimmed) {
                        let body = trimmed[marker.len()..].trim_start();
                        if self.matcher.match_head(body).is_some() {
                            debug!(line = idx + 1, "commented-out log call");
                            spans.push(CandidateSpan {
                                start_line: idx,
                                end_line: idx,
                                kind: SpanKind::CommentedCall,
                                force_closed: false,
                            });
                        }
                        continue;
                    }

                    if let Some(head_len) = self.matcher.match_head(trimmed) {
                        let rem = trimmed[head_len..].trim_start();
                        if is_assignment_tail(rem) {
                            // `print = ...` rebinds the name, it does not log
                            continue;
                        }

                        tracker = StatementTracker::new(self.profile.terminator);
                        tracker.feed_line(trimmed, self.profile);

                        // A bare keyword statement (`debugger`) ends on its
                        // own line even without a terminator.
                        if !tracker.complete
                            && !tracker.saw_paren
                            && (rem.is_empty() || self.starts_with_comment(rem))
                        {
                            tracker.complete = true;
                        }

                        if tracker.complete {
                            self.push_active(&mut spans, idx, idx, false, tracker.trailing_code);
                        } else {
                            state = ScanState::InSpan;
                            span_start = idx;
                        }
                        continue;
                    }

                    if self.enters_block_comment(line) {
                        in_block_comment = true;
                    }
                }
                ScanState::InSpan => {
                    tracker.feed_line(line, self.profile);
                    if tracker.complete {
                        self.push_active(&mut spans, span_start, idx, false, tracker.trailing_code);
                        state = ScanState::Outside;
                    }
                }
            }
        }

        if state == ScanState::InSpan {
            // Never cross into the next statement; the only over-extension
            // allowed is to end of file.
            let end = buffer.line_count() - 1;
            warn!(
                line = span_start + 1,
                "log statement never terminated; span closed at end of file"
            );
            notes.push(ScanNote {
                line: span_start + 1,
                message: "log statement never terminated; span closed at end of file".to_string(),
            });
            spans.push(CandidateSpan {
                start_line: span_start,
                end_line: end,
                kind: SpanKind::ActiveCall,
                force_closed: true,
            });
        }

        (spans, notes)
    }

    fn push_active(
        &self,
        spans: &mut Vec<CandidateSpan>,
        start: usize,
        end: usize,
        force_closed: bool,
        trailing_code: bool,
    ) {
        if trailing_code {
            // Another statement shares the final line; deleting the span
            // would take it out too, so the candidate is dropped.
            debug!(line = start + 1, "skipping log call with trailing code");
            return;
        }
        spans.push(CandidateSpan {
            start_line: start,
            end_line: end,
            kind: SpanKind::ActiveCall,
            force_closed,
        });
    }

    fn leading_comment_marker(&self, trimmed: &str) -> Option<&'static str> {
        self.profile
            .line_comments
            .iter()
            .find(|m| trimmed.starts_with(**m))
            .copied()
    }

    fn starts_with_comment(&self, s: &str) -> bool {
        self.profile.line_comments.iter().any(|m| s.starts_with(m))
    }

    /// Whether the line opens a block comment that is still open at end of
    /// line. String literals are not tracked here; the cost of a false
    /// positive is skipped lines, never a deletion.
    fn enters_block_comment(&self, line: &str) -> bool {
        let Some((open, close)) = self.profile.block_comment else {
            return false;
        };

        let mut rest = line;
        let mut inside = false;
        loop {
            if inside {
                match rest.find(close) {
                    Some(p) => {
                        inside = false;
                        rest = &rest[p + close.len()..];
                    }
                    None => return true,
                }
            } else {
                let line_comment = self
                    .profile
                    .line_comments
                    .iter()
                    .filter_map(|m| rest.find(m))
                    .min();
                match (rest.find(open), line_comment) {
                    (Some(b), Some(c)) if c < b => return false,
                    (Some(b), _) => {
                        inside = true;
                        rest = &rest[b + open.len()..];
                    }
                    (None, _) => return false,
                }
            }
        }
    }
}

/// Tracks one statement across lines: paren depth, string literals, and the
/// terminator rule. `complete` flips once the statement has ended.
#[derive(Debug)]
struct StatementTracker {
    terminator: Terminator,
    depth: i32,
    string: Option<char>,
    escaped: bool,
    saw_paren: bool,
    paren_closed: bool,
    complete: bool,
    trailing_code: bool,
}

impl StatementTracker {
    fn new(terminator: Terminator) -> Self {
        Self {
            terminator,
            depth: 0,
            string: None,
            escaped: false,
            saw_paren: false,
            paren_closed: false,
            complete: false,
            trailing_code: false,
        }
    }

    fn feed_line(&mut self, line: &str, profile: &LanguageProfile) {
        let mut i = 0;
        while i < line.len() {
            let rest = &line[i..];
            let c = rest.chars().next().expect("in-bounds char");
            let step = c.len_utf8();

            if let Some(quote) = self.string {
                if self.escaped {
                    self.escaped = false;
                } else if c == '\\' {
                    self.escaped = true;
                } else if c == quote {
                    self.string = None;
                }
                i += step;
                continue;
            }

            if self.complete {
                if c.is_whitespace() {
                    i += step;
                    continue;
                }
                if profile.line_comments.iter().any(|m| rest.starts_with(m)) {
                    break;
                }
                self.trailing_code = true;
                break;
            }

            if profile.line_comments.iter().any(|m| rest.starts_with(m)) {
                break;
            }

            match c {
                '"' | '\'' | '`' => self.string = Some(c),
                '(' => {
                    self.depth += 1;
                    self.saw_paren = true;
                }
                ')' => {
                    self.depth -= 1;
                    if self.saw_paren && self.depth <= 0 {
                        self.paren_closed = true;
                    }
                }
                ';' => {
                    if self.depth <= 0 && self.terminator == Terminator::Semicolon {
                        self.complete = true;
                    }
                }
                _ => {}
            }
            i += step;
        }

        // Strings stay open across lines; an unterminated literal keeps the
        // span extending until it closes or EOF force-closes it.
        if !self.complete && self.string.is_none() && self.depth <= 0 {
            match self.terminator {
                Terminator::EndOfLine => self.complete = true,
                // Once the call's parentheses are balanced the statement
                // ends at this line even if the `;` is missing, so a span
                // can never swallow the following statement.
                Terminator::Semicolon => {
                    if self.paren_closed {
                        self.complete = true;
                    }
                }
            }
        }
    }
}

/// `head = ...` / `head += ...` is an assignment to the name, not a call.
fn is_assignment_tail(rem: &str) -> bool {
    let mut chars = rem.chars();
    match (chars.next(), chars.next()) {
        (Some('='), Some('=')) => false,
        (Some('='), _) => true,
        (Some('+' | '-' | '*' | '/' | '%'), Some('=')) => true,
        (Some('|'), Some('|')) | (Some('&'), Some('&')) => {
            rem[2..].trim_start().starts_with('=')
        }
        _ => false,
    }
}
