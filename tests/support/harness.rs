use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// TestHarness provides an isolated working directory for running the
/// aix-check binary against a page written into it.
pub struct TestHarness {
    pub dir: TempDir,
    pub binary: PathBuf,
}

impl TestHarness {
    /// Creates an empty working directory (auto-cleaned on drop).
    pub fn new() -> Self {
        TestHarness {
            dir: TempDir::new().expect("Failed to create temp dir"),
            binary: PathBuf::from(env!("CARGO_BIN_EXE_aix-check")),
        }
    }

    /// Creates a working directory containing `index.html` with `content`.
    pub fn with_page(content: &str) -> Self {
        let harness = Self::new();
        harness.write_page(content);
        harness
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn page_path(&self) -> PathBuf {
        self.path().join("index.html")
    }

    pub fn write_page(&self, content: &str) {
        fs::write(self.page_path(), content).expect("Failed to write index.html");
    }

    pub fn read_page(&self) -> String {
        fs::read_to_string(self.page_path()).expect("Failed to read index.html")
    }

    pub fn remove_page(&self) {
        fs::remove_file(self.page_path()).expect("Failed to remove index.html");
    }

    /// Writes an arbitrary file relative to the working directory.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Executes the binary with the given arguments in the working directory.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.binary)
            .args(args)
            .env("NO_COLOR", "1")
            .current_dir(self.path())
            .output()
            .expect("Failed to run aix-check")
    }
}
