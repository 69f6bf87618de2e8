/// Core data structures for regression test outcomes
///
/// This module defines the read-only inputs of the reporting layer: the test
/// cases found during discovery, the outcome the executor recorded for each of
/// them, and the run-wide summary that ties them together.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// One regression test as found during discovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Input file handed to the program under test
    pub path_inp: PathBuf,
    /// Reference (expected) output, relative paths resolve against the reference directory
    pub path_ref: PathBuf,
    /// Produced output, relative to the test directory
    pub path_out: PathBuf,
}

impl TestCase {
    /// Location of the reference output for a given reference directory
    pub fn reference_file(&self, refdir: &Path) -> PathBuf {
        refdir.join(&self.path_ref)
    }

    /// Location of the produced output for a given test directory
    pub fn output_file(&self, tstdir: &Path) -> PathBuf {
        tstdir.join(&self.path_out)
    }
}

/// Outcome flag names. Variants are declared in name order so that the
/// derived `Ord` matches alphabetical rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flag {
    Different,
    Error,
    Failed,
    Leak,
    Missing,
    New,
    Ok,
    Verbose,
    Wrong,
}

impl Flag {
    pub const COUNT: usize = 9;

    /// Every flag, in rendering order
    pub const ALL: [Flag; Flag::COUNT] = [
        Flag::Different,
        Flag::Error,
        Flag::Failed,
        Flag::Leak,
        Flag::Missing,
        Flag::New,
        Flag::Ok,
        Flag::Verbose,
        Flag::Wrong,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::Different => "different",
            Flag::Error => "error",
            Flag::Failed => "failed",
            Flag::Leak => "leak",
            Flag::Missing => "missing",
            Flag::New => "new",
            Flag::Ok => "ok",
            Flag::Verbose => "verbose",
            Flag::Wrong => "wrong",
        }
    }

    /// Upper-case name used in summary tables
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }

    /// Single-character tag (first letter, upper-case)
    pub fn tag(&self) -> char {
        self.as_str().chars().next().map(|c| c.to_ascii_uppercase()).unwrap_or(' ')
    }

    /// Position in `Flag::ALL`
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Whether a set flag means the test has a problem.
    ///
    /// `ok` is the absence of problems and `new` only selects a tolerance mode.
    pub fn is_problem(&self) -> bool {
        !matches!(self, Flag::Ok | Flag::New)
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Flag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Flag::ALL
            .iter()
            .copied()
            .find(|flag| flag.as_str() == s)
            .ok_or_else(|| format!("unknown outcome flag '{}'", s))
    }
}

/// Value stored for a flag: either a plain boolean or a count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    Count(u64),
}

impl FlagValue {
    /// Integer interpretation used for tallies (true = 1, false = 0)
    pub fn count(&self) -> u64 {
        match *self {
            FlagValue::Bool(b) => u64::from(b),
            FlagValue::Count(n) => n,
        }
    }
}

impl From<bool> for FlagValue {
    fn from(b: bool) -> Self {
        FlagValue::Bool(b)
    }
}

impl From<u64> for FlagValue {
    fn from(n: u64) -> Self {
        FlagValue::Count(n)
    }
}

/// One measured quantity compared between reference and test output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
    /// Human-readable descriptor of what was measured
    pub command: String,
    /// Value extracted from the reference output
    #[serde(default)]
    pub ref_value: Option<String>,
    /// Value extracted from the test output
    #[serde(default)]
    pub tst_value: Option<String>,
    /// Numeric mismatch beyond tolerance
    #[serde(default)]
    pub wrong: bool,
    /// Textual representation differs
    #[serde(default)]
    pub different: bool,
}

impl Check {
    /// Both values resolvable; with `allow_new` a missing reference value is accepted.
    pub fn complete(&self, allow_new: bool) -> bool {
        self.tst_value.is_some() && (allow_new || self.ref_value.is_some())
    }

    pub fn has_mismatch(&self) -> bool {
        self.wrong || self.different
    }
}

/// Result of running one test case
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    #[serde(default)]
    pub flags: BTreeMap<Flag, FlagValue>,
    /// Driver diagnostics, present when `error` is set
    #[serde(default)]
    pub messages: Vec<String>,
    /// Tail of standard output
    #[serde(default)]
    pub last_out_lines: Vec<String>,
    /// Tail of standard error
    #[serde(default)]
    pub last_stderr_lines: Vec<String>,
    #[serde(default)]
    pub checks: Vec<Check>,
}

impl Outcome {
    /// Outcome of a test without problems
    pub fn passed() -> Self {
        Outcome::default().with_flag(Flag::Ok, true)
    }

    /// Builder-style flag assignment
    pub fn with_flag(mut self, flag: Flag, value: impl Into<FlagValue>) -> Self {
        self.flags.insert(flag, value.into());
        self
    }

    /// Stored value of a flag as an integer (absent = 0)
    pub fn count(&self, flag: Flag) -> u64 {
        self.flags.get(&flag).map_or(0, FlagValue::count)
    }

    pub fn is_set(&self, flag: Flag) -> bool {
        self.count(flag) > 0
    }

    pub fn is_ok(&self) -> bool {
        self.is_set(Flag::Ok)
    }

    /// `ok` is set exactly when no problem flag is set
    pub fn is_consistent(&self) -> bool {
        let problems = Flag::ALL.iter().any(|flag| flag.is_problem() && self.is_set(*flag));
        self.is_ok() != problems
    }

    /// Checks flagged wrong or different
    pub fn mismatched_checks(&self) -> impl Iterator<Item = &Check> {
        self.checks.iter().filter(|check| check.has_mismatch())
    }

    /// Checks whose values could not be resolved, honouring the `new` flag
    pub fn incomplete_checks(&self) -> impl Iterator<Item = &Check> {
        let allow_new = self.is_set(Flag::New);
        self.checks.iter().filter(move |check| !check.complete(allow_new))
    }
}

/// A test case paired with its outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestRecord {
    pub case: TestCase,
    pub outcome: Outcome,
}

/// Everything one run produced, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Total wall time in seconds
    pub seconds: f64,
    /// Disk usage of the reference tree in bytes
    #[serde(default)]
    pub ref_size: u64,
    /// Disk usage of the test tree in bytes
    #[serde(default)]
    pub tst_size: u64,
    #[serde(default)]
    pub tests: Vec<TestRecord>,
}

impl RunSummary {
    /// Load a run summary from a JSON file
    pub fn load(path: &Path) -> Result<Self, String> {
        let content =
            fs::read_to_string(path).map_err(|e| format!("Failed to read results {}: {}", path.display(), e))?;
        Self::from_json(&content).map_err(|e| format!("Failed to parse results {}: {}", path.display(), e))
    }

    pub fn from_json(content: &str) -> Result<Self, String> {
        serde_json::from_str(content).map_err(|e| e.to_string())
    }

    pub fn outcomes(&self) -> impl Iterator<Item = &Outcome> {
        self.tests.iter().map(|record| &record.outcome)
    }

    /// Records whose outcome is not ok, in discovery order
    pub fn failing(&self) -> impl Iterator<Item = &TestRecord> {
        self.tests.iter().filter(|record| !record.outcome.is_ok())
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
