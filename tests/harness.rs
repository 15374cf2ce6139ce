//! Test harness for canopy integration tests

use std::path::Path;
use std::process::Command;

pub use canopy::test_utils::TestTree;

/// Run the canopy binary in `dir`, returning (stdout, stderr, success).
pub fn run_canopy(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_canopy");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run canopy");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// The rendered lines below the header.
#[allow(dead_code)]
pub fn body(stdout: &str) -> Vec<&str> {
    stdout.lines().skip(1).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let tree = TestTree::new();
        let file_path = tree.add_file("nested/dir/test.rs", "fn main() {}");
        assert!(file_path.exists());
    }
}
