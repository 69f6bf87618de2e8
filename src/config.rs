/// Run configuration echoed into the reports
///
/// The fields mirror what the test driver was started with. They are loaded
/// from a TOML file; the reporting layer only validates and displays them.
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportConfig {
    /// Root of the source tree under test
    pub root: PathBuf,
    pub arch: String,
    pub version: String,
    #[serde(default = "default_nproc")]
    pub nproc: u32,
    #[serde(default)]
    pub nproc_mpi: Option<u32>,
    #[serde(default)]
    pub mpi_prefix: Option<String>,
    #[serde(default)]
    pub mpi_suffix: Option<String>,
    /// Directory holding the reference outputs
    pub refdir: PathBuf,
    /// Directory holding the new outputs; reports are written here
    pub tstdir: PathBuf,
    #[serde(default)]
    pub select_dirs: Vec<String>,
    #[serde(default)]
    pub select_paths_inp: Vec<String>,
    /// Only tests faster than this many seconds were selected
    #[serde(default)]
    pub faster_than: Option<f64>,
    /// Only tests slower than this many seconds were selected
    #[serde(default)]
    pub slower_than: Option<f64>,
}

fn default_nproc() -> u32 {
    1
}

impl ReportConfig {
    /// Minimal configuration for the given directories
    pub fn new(root: impl Into<PathBuf>, refdir: impl Into<PathBuf>, tstdir: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            arch: String::new(),
            version: String::new(),
            nproc: default_nproc(),
            nproc_mpi: None,
            mpi_prefix: None,
            mpi_suffix: None,
            refdir: refdir.into(),
            tstdir: tstdir.into(),
            select_dirs: Vec::new(),
            select_paths_inp: Vec::new(),
            faster_than: None,
            slower_than: None,
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> Result<Self, String> {
        let config: ReportConfig = toml::from_str(content).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.nproc == 0 {
            return Err("nproc must be at least 1".to_string());
        }
        if self.nproc_mpi == Some(0) {
            return Err("nproc_mpi must be at least 1 when set".to_string());
        }
        for (name, value) in [("faster_than", self.faster_than), ("slower_than", self.slower_than)] {
            if let Some(seconds) = value
                && !(seconds >= 0.0)
            {
                return Err(format!("{} must be a non-negative number of seconds, got {}", name, seconds));
            }
        }
        Ok(())
    }

    /// Replace the reference and/or test directory
    pub fn with_overrides(mut self, refdir: Option<PathBuf>, tstdir: Option<PathBuf>) -> Self {
        if let Some(refdir) = refdir {
            self.refdir = refdir;
        }
        if let Some(tstdir) = tstdir {
            self.tstdir = tstdir;
        }
        self
    }
}

/// Load the configuration file
pub fn load_config(path: &Path) -> Result<ReportConfig, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
    ReportConfig::from_toml(&content).map_err(|e| format!("Invalid config {}: {}", path.display(), e))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
