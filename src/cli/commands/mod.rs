pub mod clean;
pub mod init;
pub mod languages;
pub mod preview;

use colored::Colorize;
use std::path::PathBuf;
use walkdir::WalkDir;

use logscrub::config::ConfigData;
use logscrub::profile;

/// Display an error message with proper formatting
pub fn display_error(err: &anyhow::Error) {
    eprintln!(
        "\n{} {}",
        "✗".bright_red().bold(),
        "Operation failed".bright_red().bold()
    );
    eprintln!("  {} {}", "├".bright_black(), err);

    // Display error chain
    for cause in err.chain().skip(1) {
        eprintln!("  {} {}", "├".bright_black(), cause);
    }

    let error_str = err.to_string();
    if error_str.contains("unsupported language") {
        eprintln!(
            "  {} Run {} to see supported languages",
            "└".bright_cyan(),
            "logscrub languages".bright_cyan()
        );
    } else if error_str.contains("no language profile") {
        eprintln!(
            "  {} Pass {} to force a language",
            "└".bright_cyan(),
            "--language <ID>".bright_cyan()
        );
    } else if error_str.contains("No such file") {
        eprintln!("  {} Check that the file path is correct", "└".bright_cyan());
    } else {
        eprintln!(
            "  {} Run with {} for more details",
            "└".bright_black(),
            "RUST_LOG=debug".bright_cyan()
        );
    }
}

/// Expand the given paths into scrubbable files. Directories are walked
/// recursively, skipping excluded directories and files whose language is
/// not enabled; explicitly listed files are taken as-is.
pub fn discover_files(paths: &[PathBuf], config: &ConfigData) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            let walker = WalkDir::new(path).into_iter().filter_entry(|entry| {
                !(entry.file_type().is_dir() && is_excluded(entry.file_name(), &config.exclude))
            });
            for entry in walker.filter_map(|e| e.ok()) {
                if !entry.file_type().is_file() {
                    continue;
                }
                if let Ok(profile) = profile::profile_for_path(entry.path()) {
                    if config.languages.iter().any(|l| l == profile.id) {
                        files.push(entry.into_path());
                    }
                }
            }
        } else {
            files.push(path.clone());
        }
    }

    files.sort();
    files
}

fn is_excluded(name: &std::ffi::OsStr, exclude: &[String]) -> bool {
    name.to_str()
        .map(|name| exclude.iter().any(|ex| ex == name))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discover_skips_excluded_dirs_and_unknown_extensions() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("src")).unwrap();
        fs::create_dir(root.join("node_modules")).unwrap();
        fs::write(root.join("src/app.py"), "print(1)\n").unwrap();
        fs::write(root.join("src/notes.txt"), "hello\n").unwrap();
        fs::write(root.join("node_modules/dep.js"), "console.log(1);\n").unwrap();

        let config = ConfigData::default();
        let files = discover_files(&[root.to_path_buf()], &config);

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("src/app.py"));
    }

    #[test]
    fn test_explicit_files_pass_through() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("anything.xyz");
        fs::write(&file, "data").unwrap();

        let config = ConfigData::default();
        let files = discover_files(&[file.clone()], &config);
        assert_eq!(files, vec![file]);
    }
}
