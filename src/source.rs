use std::env;
use std::ffi::OsStr;
use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

use anyhow::{Context, Result};

/// Collects the base name of every executable in every `$PATH` directory.
///
/// Directories that cannot be read are skipped, not fatal. Names are
/// collected in traversal order and are not deduplicated; a command
/// present in two directories appears twice. A missing `$PATH` is a fatal
/// configuration error.
pub fn path_commands() -> Result<Vec<String>> {
    let path = env::var_os("PATH").context("failed to read '$PATH'")?;
    Ok(scan_path(&path))
}

/// Reads newline-terminated candidates from stdin until end of stream,
/// in arrival order, with trailing newlines stripped.
pub fn stdin_candidates() -> Result<Vec<String>> {
    let stdin = io::stdin();
    let mut candidates = Vec::new();

    for line in stdin.lock().lines() {
        candidates.push(line.context("failed to read candidates from stdin")?);
    }

    Ok(candidates)
}

fn scan_path(path: &OsStr) -> Vec<String> {
    let mut commands = Vec::new();

    for dir in env::split_paths(path) {
        let Ok(entries) = fs::read_dir(&dir) else {
            continue;
        };

        for entry in entries.flatten() {
            let entry_path = entry.path();
            if entry_path.is_dir() || !is_executable(&entry_path) {
                continue;
            }

            commands.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    commands
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path).is_ok_and(|meta| meta.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn make_executable(path: &Path) {
        use std::os::unix::fs::PermissionsExt;

        fs::set_permissions(path, fs::Permissions::from_mode(0o755))
            .expect("Failed to set permissions");
    }

    fn add_command(dir: &Path, name: &str) {
        let path = dir.join(name);
        File::create(&path).expect("Failed to create file");
        #[cfg(unix)]
        make_executable(&path);
    }

    #[test]
    fn collects_executables_from_every_directory() {
        let first = TempDir::new().expect("Failed to create temp directory");
        let second = TempDir::new().expect("Failed to create temp directory");
        add_command(first.path(), "ls");
        add_command(second.path(), "cat");

        let path = env::join_paths([first.path(), second.path()]).expect("Failed to join paths");
        let mut commands = scan_path(&path);
        commands.sort();

        assert_eq!(commands, ["cat", "ls"]);
    }

    #[test]
    fn duplicates_across_directories_are_kept() {
        let first = TempDir::new().expect("Failed to create temp directory");
        let second = TempDir::new().expect("Failed to create temp directory");
        add_command(first.path(), "ls");
        add_command(second.path(), "ls");

        let path = env::join_paths([first.path(), second.path()]).expect("Failed to join paths");
        assert_eq!(scan_path(&path), ["ls", "ls"]);
    }

    #[test]
    fn subdirectories_are_skipped() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        fs::create_dir(dir.path().join("bin")).expect("Failed to create subdirectory");
        add_command(dir.path(), "ls");

        let path = env::join_paths([dir.path()]).expect("Failed to join paths");
        assert_eq!(scan_path(&path), ["ls"]);
    }

    #[cfg(unix)]
    #[test]
    fn non_executable_files_are_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().expect("Failed to create temp directory");
        add_command(dir.path(), "ls");

        let plain = dir.path().join("notes.txt");
        File::create(&plain).expect("Failed to create file");
        fs::set_permissions(&plain, fs::Permissions::from_mode(0o644))
            .expect("Failed to set permissions");

        let path = env::join_paths([dir.path()]).expect("Failed to join paths");
        assert_eq!(scan_path(&path), ["ls"]);
    }

    #[test]
    fn unreadable_directories_are_skipped_not_fatal() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        add_command(dir.path(), "ls");

        let missing = dir.path().join("does-not-exist");
        let path = env::join_paths([missing.as_path(), dir.path()]).expect("Failed to join paths");

        assert_eq!(scan_path(&path), ["ls"]);
    }
}
