//! Test environment builder for isolated export testing.
//!
//! Provides `TestEnv` - a temporary policy repository (lock file plus
//! cookbook sources), a private staging root, and helpers to run the
//! `policy-export` binary or the library against it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::{json, Map, Value};
use tempfile::TempDir;

use policy_export::ExportRequest;

use super::fixtures::DEFAULT_RECIPE;

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated repository with a lock and its cookbook sources
pub struct TestEnv {
    /// Repository root; the lock file lives here
    pub root: TempDir,
    /// Parent directory for staging areas
    pub staging: TempDir,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn lock_path(&self) -> PathBuf {
        self.path("Policyfile.lock.json")
    }

    /// Default export destination inside the repository
    pub fn destination(&self) -> PathBuf {
        self.path("export")
    }

    /// Library request for the default lock and destination
    pub fn request(&self) -> ExportRequest {
        ExportRequest::new(self.lock_path(), self.destination())
            .with_staging_root(self.staging.path())
    }

    /// Whether every staging area has been removed
    pub fn staging_is_clean(&self) -> bool {
        std::fs::read_dir(self.staging.path())
            .map(|mut entries| entries.next().is_none())
            .unwrap_or(true)
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    pub fn read_json(&self, path: &Path) -> Value {
        let content = std::fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
        serde_json::from_str(&content)
            .unwrap_or_else(|e| panic!("Invalid JSON in {}: {}", path.display(), e))
    }

    /// Run the CLI from the repository root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run the CLI from the repository root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_policy-export"));
        cmd.current_dir(self.root.path())
            .args(args)
            .env("POLICY_EXPORT_STAGING_ROOT", self.staging.path())
            .env_remove("RUST_LOG")
            .env_remove("POLICY_EXPORT_ARCHIVE")
            .env_remove("POLICY_EXPORT_FORCE")
            .env_remove("POLICY_EXPORT_VERBOSITY");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute policy-export");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

struct CookbookSpec {
    name: String,
    version: String,
    files: Vec<(String, String)>,
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    policy_name: String,
    revision_id: String,
    cookbooks: Vec<CookbookSpec>,
    files: Vec<(String, String)>,
    write_lock: bool,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            policy_name: "base".to_string(),
            revision_id: "abc123".to_string(),
            cookbooks: Vec::new(),
            files: Vec::new(),
            write_lock: true,
        }
    }

    pub fn with_policy(mut self, name: &str, revision_id: &str) -> Self {
        self.policy_name = name.to_string();
        self.revision_id = revision_id.to_string();
        self
    }

    /// Add a cookbook under `cookbooks/<name>` with a default recipe
    pub fn with_cookbook(mut self, name: &str, version: &str) -> Self {
        self.cookbooks.push(CookbookSpec {
            name: name.to_string(),
            version: version.to_string(),
            files: vec![("recipes/default.rb".to_string(), DEFAULT_RECIPE.to_string())],
        });
        self
    }

    /// Add a file to the most recently added cookbook
    pub fn with_cookbook_file(mut self, relative: &str, content: &str) -> Self {
        let cookbook = self
            .cookbooks
            .last_mut()
            .expect("with_cookbook must come first");
        cookbook.files.push((relative.to_string(), content.to_string()));
        self
    }

    /// Add an arbitrary file to the repository
    pub fn with_file(mut self, relative: &str, content: &str) -> Self {
        self.files.push((relative.to_string(), content.to_string()));
        self
    }

    /// Leave `Policyfile.lock.json` out
    pub fn without_lock(mut self) -> Self {
        self.write_lock = false;
        self
    }

    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            root: tempfile::tempdir().expect("Failed to create repository dir"),
            staging: tempfile::tempdir().expect("Failed to create staging dir"),
        };

        let mut cookbook_locks = Map::new();
        for cookbook in &self.cookbooks {
            let source = format!("cookbooks/{}", cookbook.name);
            env.write_file(
                &format!("{source}/metadata.json"),
                &json!({ "name": cookbook.name, "version": cookbook.version }).to_string(),
            );
            for (relative, content) in &cookbook.files {
                env.write_file(&format!("{source}/{relative}"), content);
            }
            cookbook_locks.insert(
                cookbook.name.clone(),
                json!({ "version": cookbook.version, "source": source }),
            );
        }

        for (relative, content) in &self.files {
            env.write_file(relative, content);
        }

        if self.write_lock {
            let lock = json!({
                "revision_id": self.revision_id,
                "name": self.policy_name,
                "run_list": self
                    .cookbooks
                    .iter()
                    .map(|c| format!("recipe[{}::default]", c.name))
                    .collect::<Vec<_>>(),
                "cookbook_locks": cookbook_locks,
            });
            env.write_file(
                "Policyfile.lock.json",
                &serde_json::to_string_pretty(&lock).expect("lock serializes"),
            );
        }

        env
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
