pub mod matcher;

pub use matcher::SignatureMatcher;

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;

use crate::error::{ScrubError, ScrubResult};

/// How a language terminates a log statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// Statement runs until a `;` outside string literals at paren depth zero.
    Semicolon,
    /// Statement ends at the first line where its parentheses are balanced.
    EndOfLine,
}

/// Static description of one supported language. Pure data, no behavior.
#[derive(Debug, Clone, Copy)]
pub struct LanguageProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub extensions: &'static [&'static str],
    /// Invocation heads that open a log-call span, longest spelling first.
    pub signatures: &'static [&'static str],
    pub line_comments: &'static [&'static str],
    pub block_comment: Option<(&'static str, &'static str)>,
    pub terminator: Terminator,
    pub case_insensitive: bool,
    pub preserve_tags: &'static [&'static str],
}

const DEFAULT_PRESERVE_TAGS: &[&str] = &["@keep", "@preserve"];

const JS_SIGNATURES: &[&str] = &[
    "console.log",
    "console.debug",
    "console.info",
    "console.warn",
    "console.error",
    "console.trace",
    "console.dir",
    "console.dirxml",
    "console.table",
    "console.group",
    "console.groupCollapsed",
    "console.groupEnd",
    "console.time",
    "console.timeEnd",
    "console.timeLog",
    "console.assert",
    "console.count",
    "console.countReset",
    "console.profile",
    "console.profileEnd",
    "console.clear",
    "debugger",
];

/// All registered language profiles.
pub const PROFILES: &[LanguageProfile] = &[
    LanguageProfile {
        id: "javascript",
        name: "JavaScript",
        aliases: &["javascriptreact", "js"],
        extensions: &["js", "jsx", "mjs", "cjs"],
        signatures: JS_SIGNATURES,
        line_comments: &["//"],
        block_comment: Some(("/*", "*/")),
        terminator: Terminator::Semicolon,
        case_insensitive: false,
        preserve_tags: DEFAULT_PRESERVE_TAGS,
    },
    LanguageProfile {
        id: "typescript",
        name: "TypeScript",
        aliases: &["typescriptreact", "ts"],
        extensions: &["ts", "tsx"],
        signatures: JS_SIGNATURES,
        line_comments: &["//"],
        block_comment: Some(("/*", "*/")),
        terminator: Terminator::Semicolon,
        case_insensitive: false,
        preserve_tags: DEFAULT_PRESERVE_TAGS,
    },
    LanguageProfile {
        id: "python",
        name: "Python",
        aliases: &["py"],
        extensions: &["py", "pyw"],
        signatures: &["print"],
        line_comments: &["#"],
        block_comment: None,
        terminator: Terminator::EndOfLine,
        case_insensitive: false,
        preserve_tags: DEFAULT_PRESERVE_TAGS,
    },
    LanguageProfile {
        id: "java",
        name: "Java",
        aliases: &[],
        extensions: &["java"],
        signatures: &[
            "System.out.println",
            "System.out.printf",
            "System.out.print",
            "System.err.println",
            "System.err.printf",
            "System.err.print",
        ],
        line_comments: &["//"],
        block_comment: Some(("/*", "*/")),
        terminator: Terminator::Semicolon,
        case_insensitive: false,
        preserve_tags: DEFAULT_PRESERVE_TAGS,
    },
    LanguageProfile {
        id: "php",
        name: "PHP",
        aliases: &[],
        extensions: &["php"],
        signatures: &["echo", "print_r", "var_dump", "var_export", "print"],
        line_comments: &["//", "#"],
        block_comment: Some(("/*", "*/")),
        terminator: Terminator::Semicolon,
        case_insensitive: false,
        preserve_tags: DEFAULT_PRESERVE_TAGS,
    },
    LanguageProfile {
        id: "csharp",
        name: "C#",
        aliases: &["cs"],
        extensions: &["cs"],
        signatures: &[
            "Console.WriteLine",
            "Console.Write",
            "Console.Error.WriteLine",
            "Console.Error.Write",
            "Console.Out.WriteLine",
            "Console.Out.Write",
        ],
        line_comments: &["//"],
        block_comment: Some(("/*", "*/")),
        terminator: Terminator::Semicolon,
        case_insensitive: false,
        preserve_tags: DEFAULT_PRESERVE_TAGS,
    },
    LanguageProfile {
        id: "go",
        name: "Go",
        aliases: &["golang"],
        extensions: &["go"],
        signatures: &[
            "fmt.Println",
            "fmt.Printf",
            "fmt.Print",
            "fmt.Fprintln",
            "fmt.Fprintf",
            "fmt.Fprint",
            "fmt.Sprintln",
            "fmt.Sprintf",
            "fmt.Sprint",
        ],
        line_comments: &["//"],
        block_comment: Some(("/*", "*/")),
        terminator: Terminator::EndOfLine,
        case_insensitive: false,
        preserve_tags: DEFAULT_PRESERVE_TAGS,
    },
    LanguageProfile {
        id: "rust",
        name: "Rust",
        aliases: &["rs"],
        extensions: &["rs"],
        signatures: &["println!", "print!", "eprintln!", "eprint!", "dbg!"],
        line_comments: &["//"],
        block_comment: Some(("/*", "*/")),
        terminator: Terminator::Semicolon,
        case_insensitive: false,
        preserve_tags: DEFAULT_PRESERVE_TAGS,
    },
    LanguageProfile {
        id: "swift",
        name: "Swift",
        aliases: &[],
        extensions: &["swift"],
        signatures: &["print", "debugPrint", "dump"],
        line_comments: &["//"],
        block_comment: Some(("/*", "*/")),
        terminator: Terminator::EndOfLine,
        case_insensitive: false,
        preserve_tags: DEFAULT_PRESERVE_TAGS,
    },
    LanguageProfile {
        id: "c",
        name: "C",
        aliases: &[],
        extensions: &["c", "h"],
        signatures: &["printf", "fprintf", "sprintf", "snprintf"],
        line_comments: &["//"],
        block_comment: Some(("/*", "*/")),
        terminator: Terminator::Semicolon,
        case_insensitive: false,
        preserve_tags: DEFAULT_PRESERVE_TAGS,
    },
    LanguageProfile {
        id: "cpp",
        name: "C++",
        aliases: &["c++", "cxx"],
        extensions: &["cpp", "cc", "cxx", "hpp", "hh"],
        signatures: &[
            "printf",
            "fprintf",
            "sprintf",
            "snprintf",
            "std::cout",
            "std::cerr",
            "cout",
            "cerr",
        ],
        line_comments: &["//"],
        block_comment: Some(("/*", "*/")),
        terminator: Terminator::Semicolon,
        case_insensitive: false,
        preserve_tags: DEFAULT_PRESERVE_TAGS,
    },
    LanguageProfile {
        id: "ruby",
        name: "Ruby",
        aliases: &["rb"],
        extensions: &["rb"],
        signatures: &["puts", "print", "pp", "p"],
        line_comments: &["#"],
        block_comment: None,
        terminator: Terminator::EndOfLine,
        case_insensitive: false,
        preserve_tags: DEFAULT_PRESERVE_TAGS,
    },
    LanguageProfile {
        id: "dart",
        name: "Dart",
        aliases: &[],
        extensions: &["dart"],
        signatures: &["print"],
        line_comments: &["//"],
        block_comment: Some(("/*", "*/")),
        terminator: Terminator::Semicolon,
        case_insensitive: false,
        preserve_tags: DEFAULT_PRESERVE_TAGS,
    },
    LanguageProfile {
        id: "shell",
        name: "Shell",
        aliases: &["shellscript", "bash", "sh"],
        extensions: &["sh", "bash", "zsh"],
        signatures: &["echo", "printf"],
        line_comments: &["#"],
        block_comment: None,
        terminator: Terminator::EndOfLine,
        case_insensitive: false,
        preserve_tags: DEFAULT_PRESERVE_TAGS,
    },
    LanguageProfile {
        id: "sql",
        name: "SQL",
        aliases: &[],
        extensions: &["sql"],
        signatures: &["PRINT", "RAISERROR"],
        line_comments: &["--"],
        block_comment: Some(("/*", "*/")),
        terminator: Terminator::EndOfLine,
        case_insensitive: true,
        preserve_tags: DEFAULT_PRESERVE_TAGS,
    },
];

static ID_INDEX: Lazy<HashMap<&'static str, &'static LanguageProfile>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for profile in PROFILES {
        index.insert(profile.id, profile);
        for alias in profile.aliases {
            index.insert(*alias, profile);
        }
    }
    index
});

static EXTENSION_INDEX: Lazy<HashMap<&'static str, &'static LanguageProfile>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for profile in PROFILES {
        for ext in profile.extensions {
            index.insert(*ext, profile);
        }
    }
    index
});

/// Look up a profile by language identifier or alias.
pub fn profile_for(language_id: &str) -> ScrubResult<&'static LanguageProfile> {
    let wanted = language_id.to_ascii_lowercase();
    ID_INDEX
        .get(wanted.as_str())
        .copied()
        .ok_or(ScrubError::UnsupportedLanguage {
            language: language_id.to_string(),
        })
}

/// Look up a profile by file extension.
pub fn profile_for_path(path: &Path) -> ScrubResult<&'static LanguageProfile> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .ok_or_else(|| ScrubError::UnknownExtension {
            path: path.to_path_buf(),
        })?;

    EXTENSION_INDEX
        .get(ext.as_str())
        .copied()
        .ok_or(ScrubError::UnknownExtension {
            path: path.to_path_buf(),
        })
}
