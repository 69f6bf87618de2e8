use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "regtest-report")]
#[command(about = "Write the text log, HTML index and diff pages for a finished regression test run")]
#[command(version)]
pub struct CliArgs {
    /// Run configuration (TOML) echoed into the reports
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: PathBuf,

    /// Test outcomes of the run (JSON)
    #[arg(long, short = 'r', value_name = "FILE")]
    pub results: PathBuf,

    /// Override the reference directory from the configuration
    #[arg(long, value_name = "DIR")]
    pub refdir: Option<PathBuf>,

    /// Override the test directory from the configuration (reports are written here)
    #[arg(long, value_name = "DIR")]
    pub tstdir: Option<PathBuf>,

    /// Also print the text log on standard output
    #[arg(long)]
    pub stdout: bool,

    /// Only write the text log (skip index.html and diff pages)
    #[arg(long)]
    pub no_html: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if !self.config.exists() {
            return Err(format!("Config file not found: {}", self.config.display()));
        }
        if !self.results.exists() {
            return Err(format!("Results file not found: {}", self.results.display()));
        }
        if let Some(ref tstdir) = self.tstdir
            && !tstdir.is_dir()
        {
            return Err(format!("Test directory does not exist: {}", tstdir.display()));
        }
        Ok(())
    }
}
