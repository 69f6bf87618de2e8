//! Report generation - text log, HTML index and per-test diff pages.
//!
//! # Module Organization
//!
//! - `text` - plain-text log with per-test problem blocks and the flag table
//! - `index` - HTML index page
//! - `diff_page` - standalone HTML diff pages for tests with different output
//!
//! Every file is rendered completely in memory and then written through
//! `write_file`, which replaces the target only after a complete write.

mod diff_page;
mod index;
mod text;

pub use diff_page::{DIFF_PAGE_SUFFIX, DiffPage, diff_page_link, render_diff_page, write_diff_page};
pub use index::{INDEX_TITLE, general_info, regression, render_index, summary_table};
pub use text::{TAIL_LINES, write_problems, write_summary_table, write_text_log};

use crate::config::ReportConfig;
use crate::tally::FlagTally;
use crate::types::{Flag, RunSummary};
use log::{debug, info, warn};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// File name of the text log inside the test directory
pub const TEXT_LOG_NAME: &str = "regtest.log";
/// File name of the HTML index inside the test directory
pub const INDEX_NAME: &str = "index.html";

/// Render into a temporary sibling of `path`, then rename it over `path`.
///
/// On failure the temporary file is removed, so `path` is either the complete
/// new content or untouched.
pub(crate) fn write_file<F>(path: &Path, render: F) -> io::Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let temp_path = temp_path_for(path)?;
    let result = (|| {
        let mut writer = BufWriter::new(File::create(&temp_path)?);
        render(&mut writer)?;
        writer.flush()?;
        drop(writer);
        fs::rename(&temp_path, path)
    })();
    if result.is_err() && temp_path.exists() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn temp_path_for(path: &Path) -> io::Result<PathBuf> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, format!("{} has no file name", path.display())))?;
    let mut temp_name = name.to_os_string();
    temp_name.push(".tmp");
    Ok(path.with_file_name(temp_name))
}

/// Files produced by `ReportWriter::write_all`.
///
/// Every artifact is attempted; a failure is kept next to the ones that worked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifacts {
    pub text_log: Result<PathBuf, String>,
    /// `None` when html output was not requested
    pub index: Option<Result<PathBuf, String>>,
    /// Keyed by the test's position in the run summary
    pub diff_pages: BTreeMap<usize, DiffPage>,
}

impl ReportArtifacts {
    /// Diff pages that could not be produced
    pub fn failed_diff_pages(&self) -> impl Iterator<Item = &DiffPage> {
        self.diff_pages.values().filter(|page| !page.is_written())
    }

    /// Failures of the text log and the index
    pub fn errors(&self) -> Vec<&str> {
        [Some(&self.text_log), self.index.as_ref()]
            .into_iter()
            .flatten()
            .filter_map(|r| r.as_ref().err().map(String::as_str))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.errors().is_empty()
    }
}

/// Renders every report artifact for one run
pub struct ReportWriter<'a> {
    config: &'a ReportConfig,
    summary: &'a RunSummary,
    tally: FlagTally,
}

impl<'a> ReportWriter<'a> {
    pub fn new(config: &'a ReportConfig, summary: &'a RunSummary) -> Self {
        for record in &summary.tests {
            if !record.outcome.is_consistent() {
                warn!("Outcome flags of {} disagree with its ok flag", record.case.path_inp.display());
            }
        }
        let tally = FlagTally::from_summary(summary);
        debug!("Tallied {} outcomes", tally.total());
        Self { config, summary, tally }
    }

    pub fn tally(&self) -> &FlagTally {
        &self.tally
    }

    pub fn text_log_path(&self) -> PathBuf {
        self.config.tstdir.join(TEXT_LOG_NAME)
    }

    pub fn index_path(&self) -> PathBuf {
        self.config.tstdir.join(INDEX_NAME)
    }

    /// Text log into any writer
    pub fn write_text<W: Write>(&self, w: &mut W, supports_color: bool) -> io::Result<()> {
        write_text_log(w, self.summary, &self.tally, supports_color)
    }

    /// Text log into the test directory, without colors
    pub fn write_text_log(&self) -> io::Result<PathBuf> {
        let path = self.text_log_path();
        write_file(&path, |w| self.write_text(w, false))?;
        info!("Wrote text log {}", path.display());
        Ok(path)
    }

    /// One diff page per failing test with different output.
    ///
    /// Pages are independent; a failed page is recorded and the rest continue.
    pub fn write_diff_pages(&self) -> BTreeMap<usize, DiffPage> {
        self.summary
            .tests
            .iter()
            .enumerate()
            .filter(|(_, record)| !record.outcome.is_ok() && record.outcome.is_set(Flag::Different))
            .map(|(index, record)| (index, write_diff_page(self.config, &record.case)))
            .collect()
    }

    /// Index page into the test directory
    pub fn write_index(&self, diff_pages: &BTreeMap<usize, DiffPage>) -> io::Result<PathBuf> {
        let path = self.index_path();
        let html = render_index(self.config, self.summary, &self.tally, diff_pages).render();
        write_file(&path, |w| w.write_all(html.as_bytes()))?;
        info!("Wrote html index {}", path.display());
        Ok(path)
    }

    /// Text log, then (when `html` is set) diff pages and the index.
    ///
    /// A failed artifact is logged and recorded; the others are still written.
    pub fn write_all(&self, html: bool) -> ReportArtifacts {
        let text_log = self.write_text_log().map_err(|e| {
            let msg = format!("cannot write {}: {}", self.text_log_path().display(), e);
            warn!("{}", msg);
            msg
        });
        if !html {
            return ReportArtifacts { text_log, index: None, diff_pages: BTreeMap::new() };
        }

        let diff_pages = self.write_diff_pages();
        let index = self.write_index(&diff_pages).map_err(|e| {
            let msg = format!("cannot write {}: {}", self.index_path().display(), e);
            warn!("{}", msg);
            msg
        });
        ReportArtifacts { text_log, index: Some(index), diff_pages }
    }
}
