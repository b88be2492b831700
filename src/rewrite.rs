use serde::{Deserialize, Serialize};

use crate::profile::LanguageProfile;
use crate::resolver::{Action, ResolvedIntent};
use crate::scanner::{ScanNote, SourceBuffer};

/// What to do with spans marked for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrubMode {
    /// Delete the span's lines.
    #[default]
    Delete,
    /// Comment the span's lines out in place.
    Comment,
}

/// A deletion (or comment-out) over an inclusive line range.
#[derive(Debug, Clone, Copy)]
struct EditOperation {
    start_line: usize,
    end_line: usize,
    /// Deleting the span would leave two adjacent blank lines; drop one.
    collapse_following_blank: bool,
    comment_out: bool,
}

/// The transformed buffer plus change counts and scan warnings.
#[derive(Debug, Clone, Default)]
pub struct TransformResult {
    pub text: String,
    pub removed: usize,
    pub preserved: usize,
    pub stripped_comments: usize,
    pub notes: Vec<ScanNote>,
}

/// Apply resolved intents to the buffer.
///
/// Edits are applied in a single descending pass so earlier line indices
/// stay valid throughout. Kept spans, their directive lines, and all
/// non-candidate lines come through byte-identical.
pub fn apply(
    buffer: &SourceBuffer,
    intents: &[ResolvedIntent],
    mode: ScrubMode,
    profile: &LanguageProfile,
) -> TransformResult {
    let mut result = TransformResult::default();
    let mut edits: Vec<EditOperation> = Vec::new();

    for intent in intents {
        let span = intent.span;
        match intent.action {
            Action::Keep => result.preserved += 1,
            Action::Remove => {
                result.removed += 1;
                let comment_out = mode == ScrubMode::Comment;
                edits.push(EditOperation {
                    start_line: span.start_line,
                    end_line: span.end_line,
                    collapse_following_blank: !comment_out && leaves_double_blank(buffer, &span),
                    comment_out,
                });
            }
            Action::StripComment => {
                result.stripped_comments += 1;
                edits.push(EditOperation {
                    start_line: span.start_line,
                    end_line: span.end_line,
                    collapse_following_blank: leaves_double_blank(buffer, &span),
                    comment_out: false,
                });
            }
        }
    }

    let mut lines: Vec<String> = (0..buffer.line_count())
        .map(|i| buffer.line(i).to_string())
        .collect();

    for edit in edits.iter().rev() {
        if edit.comment_out {
            let marker = profile.line_comments.first().copied().unwrap_or("//");
            for idx in edit.start_line..=edit.end_line {
                lines[idx] = format!("{} {}", marker, lines[idx]);
            }
        } else {
            if edit.collapse_following_blank {
                lines.remove(edit.end_line + 1);
            }
            lines.drain(edit.start_line..=edit.end_line);
        }
    }

    result.text = buffer.reassemble(&lines);
    result
}

/// True when the lines on both sides of the span are blank, so deleting it
/// would stack two blank lines. Only ever true for blank neighbors; code is
/// never collapsed.
fn leaves_double_blank(buffer: &SourceBuffer, span: &crate::scanner::CandidateSpan) -> bool {
    let before_blank = span
        .start_line
        .checked_sub(1)
        .map(|i| buffer.is_blank(i))
        .unwrap_or(false);
    let after_blank = span.end_line + 1 < buffer.line_count() && buffer.is_blank(span.end_line + 1);
    before_blank && after_blank
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::profile_for;
    use crate::resolver;
    use crate::scanner::Scanner;
    use pretty_assertions::assert_eq;

    fn transform(language: &str, content: &str, mode: ScrubMode) -> TransformResult {
        let profile = profile_for(language).unwrap();
        let scanner = Scanner::new(profile, profile.signatures);
        let buffer = SourceBuffer::new(content);
        let (spans, notes) = scanner.scan(&buffer);
        let intents = resolver::resolve(&spans, &buffer, profile, &["@keep", "@preserve"]);
        let mut result = apply(&buffer, &intents, mode, profile);
        result.notes = notes;
        result
    }

    #[test]
    fn test_remove_single_line() {
        let content = "int x = 1;\nSystem.out.println(x);\nint y = 2;\n";
        let result = transform("java", content, ScrubMode::Delete);
        assert_eq!(result.text, "int x = 1;\nint y = 2;\n");
        assert_eq!(result.removed, 1);
    }

    #[test]
    fn test_remove_multi_line_call() {
        let content = "a();\nconsole.log(\n    x,\n    y\n);\nb();\n";
        let result = transform("javascript", content, ScrubMode::Delete);
        assert_eq!(result.text, "a();\nb();\n");
    }

    #[test]
    fn test_keep_span_is_byte_identical() {
        let content = "// @preserve\nSystem.out.println(\"stay\");\n";
        let result = transform("java", content, ScrubMode::Delete);
        assert_eq!(result.text, content);
        assert_eq!(result.preserved, 1);
    }

    #[test]
    fn test_strip_commented_call() {
        let content = "int x;\n// System.out.println(\"dead\");\nint y;\n";
        let result = transform("java", content, ScrubMode::Delete);
        assert_eq!(result.text, "int x;\nint y;\n");
        assert_eq!(result.stripped_comments, 1);
    }

    #[test]
    fn test_blank_lines_collapse() {
        let content = "a();\n\nconsole.log(1);\n\nb();\n";
        let result = transform("javascript", content, ScrubMode::Delete);
        assert_eq!(result.text, "a();\n\nb();\n");
    }

    #[test]
    fn test_no_collapse_when_neighbor_is_code() {
        let content = "a();\nconsole.log(1);\n\nb();\n";
        let result = transform("javascript", content, ScrubMode::Delete);
        assert_eq!(result.text, "a();\n\nb();\n");
    }

    #[test]
    fn test_comment_mode() {
        let content = "x = 1\nprint(x)\n";
        let result = transform("python", content, ScrubMode::Comment);
        assert_eq!(result.text, "x = 1\n# print(x)\n");
        assert_eq!(result.removed, 1);
    }

    #[test]
    fn test_comment_mode_then_delete_mode_strips() {
        let content = "x = 1\nprint(x)\n";
        let commented = transform("python", content, ScrubMode::Comment);
        let second = transform("python", &commented.text, ScrubMode::Delete);
        assert_eq!(second.text, "x = 1\n");
        assert_eq!(second.stripped_comments, 1);
    }

    #[test]
    fn test_crlf_preserved() {
        let content = "int x = 1;\r\nSystem.out.println(x);\r\nint y = 2;\r\n";
        let result = transform("java", content, ScrubMode::Delete);
        assert_eq!(result.text, "int x = 1;\r\nint y = 2;\r\n");
    }

    #[test]
    fn test_no_trailing_newline_preserved() {
        let content = "print(1)\nx = 2";
        let result = transform("python", content, ScrubMode::Delete);
        assert_eq!(result.text, "x = 2");
    }

    #[test]
    fn test_descending_application_with_many_spans() {
        let content = "\
print(\"a\")
keep_one()
print(\"b\")
keep_two()
print(\"c\")
";
        let result = transform("python", content, ScrubMode::Delete);
        assert_eq!(result.text, "keep_one()\nkeep_two()\n");
        assert_eq!(result.removed, 3);
    }

    #[test]
    fn test_empty_input() {
        let result = transform("java", "", ScrubMode::Delete);
        assert_eq!(result.text, "");
        assert_eq!(result.removed, 0);
    }
}
