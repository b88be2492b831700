use logscrub::LogScrub;
use pretty_assertions::assert_eq;

const LANGUAGE_SAMPLES: &[(&str, &str)] = &[
    (
        "java",
        "class A {\n    void run() {\n        System.out.println(\"x\");\n        // @preserve\n        System.out.println(\"keep\");\n        work();\n        // System.out.println(\"dead\");\n    }\n}\n",
    ),
    (
        "javascript",
        "function f() {\n    console.log(\n        \"multi\"\n    );\n    return 1;\n}\n",
    ),
    (
        "python",
        "def f():\n    print(\"x\")\n    # print(\"dead\")\n    return 1\n",
    ),
    ("shell", "#!/bin/sh\necho hi\nmake all\n"),
];

#[test]
fn test_idempotence() {
    let scrub = LogScrub::default();
    for (language, content) in LANGUAGE_SAMPLES {
        let once = scrub.scrub(content, language).unwrap();
        let twice = scrub.scrub(&once.text, language).unwrap();

        assert_eq!(once.text, twice.text, "{language} transform is not stable");
        assert_eq!(twice.removed, 0, "{language} second pass removed again");
        assert_eq!(
            twice.stripped_comments, 0,
            "{language} second pass stripped again"
        );
    }
}

#[test]
fn test_non_log_lines_survive_byte_identical_and_ordered() {
    let scrub = LogScrub::default();
    for (language, content) in LANGUAGE_SAMPLES {
        let result = scrub.scrub(content, language).unwrap();

        // Every output line must appear in the input, in the same relative
        // order: the transform only deletes, never edits or reorders.
        let mut input_lines = content.lines();
        for out_line in result.text.lines() {
            assert!(
                input_lines.any(|l| l == out_line),
                "{language}: output line {out_line:?} not found in order in input"
            );
        }
    }
}

#[test]
fn test_unchanged_buffer_roundtrips_exactly() {
    let scrub = LogScrub::default();
    let content = "fn quiet() -> u32 {\n    1 + 1\n}\n";
    let result = scrub.scrub(content, "rust").unwrap();
    assert_eq!(result.text, content);
    assert_eq!(result.removed + result.preserved + result.stripped_comments, 0);
}

#[test]
fn test_crlf_convention_preserved() {
    let scrub = LogScrub::default();
    let content = "int x = 1;\r\nSystem.out.println(x);\r\nint y = 2;\r\n";
    let result = scrub.scrub(content, "java").unwrap();
    assert_eq!(result.text, "int x = 1;\r\nint y = 2;\r\n");

    let twice = scrub.scrub(&result.text, "java").unwrap();
    assert_eq!(twice.text, result.text);
}

#[test]
fn test_missing_trailing_newline_preserved() {
    let scrub = LogScrub::default();
    let content = "print(1)\nx = 2";
    let result = scrub.scrub(content, "python").unwrap();
    assert_eq!(result.text, "x = 2");
}

#[test]
fn test_counts_sum_to_candidates() {
    let scrub = LogScrub::default();
    let content = "\
console.log(\"a\");
// @keep
console.log(\"b\");
// console.log(\"c\");
console.error(\"d\");
";
    let result = scrub.scrub(content, "javascript").unwrap();
    assert_eq!(result.removed, 2);
    assert_eq!(result.preserved, 1);
    assert_eq!(result.stripped_comments, 1);
}

#[test]
fn test_selective_log_types_leave_disabled_methods_intact() {
    let mut config = logscrub::config::Config::default();
    config.data.log_types.javascript = vec!["log".to_string()];
    config.data.log_types.debugger = false;
    let scrub = LogScrub::with_config(config);

    let content = "\
console.log(\"goes away\");
console.warn(\"stays\");
debugger;
";
    let result = scrub.scrub(content, "javascript").unwrap();
    assert_eq!(result.removed, 1);
    assert_eq!(result.text, "console.warn(\"stays\");\ndebugger;\n");
}

#[test]
fn test_all_other_logs_toggle() {
    let mut config = logscrub::config::Config::default();
    config.data.log_types.all_other_logs = false;
    let scrub = LogScrub::with_config(config);

    let content = "System.out.println(\"x\");\n";
    let result = scrub.scrub(content, "java").unwrap();
    assert_eq!(result.removed, 0);
    assert_eq!(result.text, content);
}

#[test]
fn test_comment_mode_then_delete_converges() {
    let mut config = logscrub::config::Config::default();
    config.data.mode = logscrub::ScrubMode::Comment;
    let commenter = LogScrub::with_config(config);

    let content = "work();\nconsole.log(\"x\");\n";
    let commented = commenter.scrub(content, "javascript").unwrap();
    assert_eq!(commented.text, "work();\n// console.log(\"x\");\n");
    assert_eq!(commented.removed, 1);

    let deleter = LogScrub::default();
    let cleaned = deleter.scrub(&commented.text, "javascript").unwrap();
    assert_eq!(cleaned.text, "work();\n");
    assert_eq!(cleaned.stripped_comments, 1);
}
