use crate::profile::LanguageProfile;
use crate::scanner::{CandidateSpan, SourceBuffer, SpanKind};

/// What happens to a candidate span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Remove,
    Keep,
    StripComment,
}

/// A candidate span with its resolved action. Every span resolves to
/// exactly one intent.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedIntent {
    pub span: CandidateSpan,
    pub action: Action,
}

/// Attach an intent to each span, in span order.
///
/// A preserve directive is a comment containing a preserve tag, either on
/// the line immediately preceding the span or trailing on the span's first
/// line. Directives are one-shot: adjacency scopes each one to exactly the
/// next span, and a directive with no following span is inert.
/// Commented-out log lines are stripped unconditionally; only active
/// statements can be preserved.
pub fn resolve(
    spans: &[CandidateSpan],
    buffer: &SourceBuffer,
    profile: &LanguageProfile,
    tags: &[&str],
) -> Vec<ResolvedIntent> {
    spans
        .iter()
        .map(|span| {
            let action = if span.kind == SpanKind::CommentedCall {
                Action::StripComment
            } else if has_preserve_directive(buffer, span, profile, tags) {
                Action::Keep
            } else {
                Action::Remove
            };
            ResolvedIntent {
                span: *span,
                action,
            }
        })
        .collect()
}

fn has_preserve_directive(
    buffer: &SourceBuffer,
    span: &CandidateSpan,
    profile: &LanguageProfile,
    tags: &[&str],
) -> bool {
    if let Some(prev) = span.start_line.checked_sub(1) {
        if is_directive_line(buffer.line(prev), profile, tags) {
            return true;
        }
    }
    has_trailing_tag(buffer.line(span.start_line), profile, tags)
}

/// A comment-only line carrying a preserve tag.
fn is_directive_line(line: &str, profile: &LanguageProfile, tags: &[&str]) -> bool {
    let trimmed = line.trim_start();
    let Some(marker) = profile
        .line_comments
        .iter()
        .find(|m| trimmed.starts_with(**m))
    else {
        return false;
    };
    let body = &trimmed[marker.len()..];
    tags.iter().any(|tag| body.contains(tag))
}

/// A preserve tag inside a trailing comment on a statement line.
fn has_trailing_tag(line: &str, profile: &LanguageProfile, tags: &[&str]) -> bool {
    for marker in profile.line_comments {
        if let Some(pos) = line.find(marker) {
            if pos > 0 && tags.iter().any(|tag| line[pos..].contains(tag)) {
                return true;
            }
        }
    }
    false
}
