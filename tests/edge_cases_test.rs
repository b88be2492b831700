use logscrub::{LogScrub, ScrubError};

fn scrub(language: &str, content: &str) -> logscrub::TransformResult {
    LogScrub::default().scrub(content, language).unwrap()
}

#[test]
fn test_empty_file() {
    let result = scrub("java", "");
    assert_eq!(result.text, "");
    assert_eq!(result.removed, 0);
}

#[test]
fn test_file_of_only_logs() {
    let content = "print(\"a\")\nprint(\"b\")\n";
    let result = scrub("python", content);
    assert_eq!(result.text, "");
    assert_eq!(result.removed, 2);
}

#[test]
fn test_unterminated_statement_emits_note() {
    let content = "setup();\nconsole.log(\"never closed\n";
    let result = scrub("javascript", content);
    assert_eq!(result.removed, 1);
    assert_eq!(result.notes.len(), 1);
    assert_eq!(result.notes[0].line, 2);
    assert_eq!(result.text, "setup();\n");
}

#[test]
fn test_block_commented_call_left_alone() {
    // Multi-line commented-out calls are out of scope; they must survive
    // untouched rather than be half-deleted.
    let content = "/*\nSystem.out.println(\"in block\");\n*/\nint x = 1;\n";
    let result = scrub("java", content);
    assert_eq!(result.text, content);
    assert_eq!(result.removed, 0);
}

#[test]
fn test_signature_inside_string_is_not_a_call() {
    let content = "let s = \"console.log is noisy\";\nuse_it(s);\n";
    let result = scrub("javascript", content);
    assert_eq!(result.text, content);
}

#[test]
fn test_log_with_nested_call_and_tricky_string() {
    let content = "System.out.println(join(\"a;b\", wrap(\")\", x)));\nnext();\n";
    let result = scrub("java", content);
    assert_eq!(result.removed, 1);
    assert_eq!(result.text, "next();\n");
}

#[test]
fn test_unicode_arguments() {
    let content = "print(\"état: 完了 ✓\")\nkeep_me()\n";
    let result = scrub("python", content);
    assert_eq!(result.removed, 1);
    assert_eq!(result.text, "keep_me()\n");
}

#[test]
fn test_shared_line_with_other_code_is_untouched() {
    // Deleting the whole line would take the assignment with it.
    let content = "System.out.println(\"x\"); int y = 2;\n";
    let result = scrub("java", content);
    assert_eq!(result.text, content);
    assert_eq!(result.removed, 0);
}

#[test]
fn test_unsupported_language_is_typed_error() {
    let err = LogScrub::default().scrub("PRINT 1", "fortran").unwrap_err();
    match err {
        ScrubError::UnsupportedLanguage { language } => assert_eq!(language, "fortran"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_large_buffer() {
    let mut lines = Vec::new();
    for i in 0..5_000 {
        if i % 50 == 0 {
            lines.push(format!("console.log(\"tick {}\");", i));
        } else {
            lines.push(format!("let v{} = {};", i, i));
        }
    }
    let content = lines.join("\n");

    let result = scrub("javascript", &content);
    assert_eq!(result.removed, 100);
    assert!(!result.text.contains("console.log"));
    assert!(result.text.contains("let v4999 = 4999;"));
}

#[test]
fn test_indented_logs_keep_surrounding_indentation() {
    let content = "\
if (debug) {
        console.log(\"deep\");
        run();
}
";
    let result = scrub("javascript", content);
    assert_eq!(result.text, "if (debug) {\n        run();\n}\n");
}

#[test]
fn test_blank_line_collapse_only_touches_blanks() {
    let content = "a();\n\nconsole.log(1);\n\n\nb();\n";
    let result = scrub("javascript", content);
    // One of the stacked blanks is dropped, the code lines stay.
    assert_eq!(result.text, "a();\n\n\nb();\n");
}
