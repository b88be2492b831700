/// A source buffer decomposed into lines, keeping enough information to
/// reconstruct untouched content byte-for-byte.
#[derive(Debug, Clone)]
pub struct SourceBuffer<'a> {
    pub text: &'a str,
    lines: Vec<Line<'a>>,
    newline: &'static str,
    trailing_newline: bool,
}

#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> SourceBuffer<'a> {
    pub fn new(text: &'a str) -> Self {
        let newline = if text.contains("\r\n") { "\r\n" } else { "\n" };
        let trailing_newline = text.ends_with('\n');

        let mut lines = Vec::new();
        let mut offset = 0;
        for raw in text.split_inclusive('\n') {
            let stripped = raw
                .strip_suffix('\n')
                .map(|s| s.strip_suffix('\r').unwrap_or(s))
                .unwrap_or(raw);
            lines.push(Line {
                text: stripped,
                offset,
            });
            offset += raw.len();
        }

        Self {
            text,
            lines,
            newline,
            trailing_newline,
        }
    }

    pub fn line(&self, idx: usize) -> &'a str {
        self.lines[idx].text
    }

    pub fn line_offset(&self, idx: usize) -> usize {
        self.lines[idx].offset
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_blank(&self, idx: usize) -> bool {
        self.lines[idx].text.trim().is_empty()
    }

    pub fn newline(&self) -> &'static str {
        self.newline
    }

    pub fn trailing_newline(&self) -> bool {
        self.trailing_newline
    }

    /// Rebuild a buffer from the given line texts using the original
    /// line-ending convention.
    pub fn reassemble<S: AsRef<str>>(&self, lines: &[S]) -> String {
        let mut out = String::with_capacity(self.text.len());
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                out.push_str(self.newline);
            }
            out.push_str(line.as_ref());
        }
        if self.trailing_newline && !lines.is_empty() {
            out.push_str(self.newline);
        }
        out
    }
}

/// What a candidate span is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// An active log-call statement, possibly spanning multiple lines.
    ActiveCall,
    /// A single comment line whose content is a disabled log call.
    CommentedCall,
}

/// A contiguous run of lines identified as one logical unit.
/// Line indices are 0-based and inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateSpan {
    pub start_line: usize,
    pub end_line: usize,
    pub kind: SpanKind,
    /// The statement never found its terminator and was closed at EOF.
    pub force_closed: bool,
}

/// A warning produced while scanning; never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanNote {
    /// 1-based line number for reporting.
    pub line: usize,
    pub message: String,
}
