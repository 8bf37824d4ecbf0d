use anyhow::{bail, Context, Result};
use std::env;
use std::process::Command;

/// Extra features appended to every matrix entry.
pub const EXTRA_FEATURES_ENV: &str = "TRIGFFT_FEATURES";

/// One row of the feature matrix the crate is built and tested under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSet {
    pub default_features: bool,
    pub features: Vec<String>,
}

impl FeatureSet {
    fn new(default_features: bool, features: &[&str]) -> Self {
        Self {
            default_features,
            features: features.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Join features into a single string suitable for passing to cargo.
    pub fn features_arg(&self) -> Option<String> {
        if self.features.is_empty() {
            None
        } else {
            Some(self.features.join(" "))
        }
    }

    fn apply(&self, cmd: &mut Command) {
        if !self.default_features {
            cmd.arg("--no-default-features");
        }
        if let Some(f) = self.features_arg() {
            cmd.arg("--features").arg(f);
        }
    }
}

/// Feature matrix: bare `no_std`, the defaults, and verbose logging.
pub fn feature_matrix(extra: &str) -> Vec<FeatureSet> {
    let mut matrix = vec![
        FeatureSet::new(false, &[]),
        FeatureSet::new(true, &[]),
        FeatureSet::new(true, &["verbose-logging"]),
    ];
    for set in matrix.iter_mut() {
        set.features
            .extend(extra.split_whitespace().map(|f| f.to_string()));
    }
    matrix
}

/// Matrix with extra features taken from [`EXTRA_FEATURES_ENV`].
pub fn detect_matrix() -> Vec<FeatureSet> {
    feature_matrix(&env::var(EXTRA_FEATURES_ENV).unwrap_or_default())
}

pub fn build_command(set: &FeatureSet) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["build", "-p", "trigfft"]);
    set.apply(&mut cmd);
    cmd
}

pub fn test_command(set: &FeatureSet) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["test", "-p", "trigfft"]);
    set.apply(&mut cmd);
    cmd
}

pub fn clippy_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["clippy", "--all-targets", "--all-features"]);
    cmd
}

pub fn fmt_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["fmt", "--all"]);
    cmd
}

pub fn bench_command() -> Command {
    let mut cmd = Command::new("cargo");
    cmd.args(["bench", "-p", "trigfft-bench"]);
    cmd
}

/// Run `cmd`, failing with its rendering if it exits unsuccessfully.
pub fn run(mut cmd: Command) -> Result<()> {
    let shown = format!("{:?}", cmd);
    let status = cmd
        .status()
        .with_context(|| format!("failed to spawn {}", shown))?;
    if !status.success() {
        bail!("{} exited with {}", shown, status);
    }
    Ok(())
}
