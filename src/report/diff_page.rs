//! Standalone HTML page with the full diff of one test's output.

use crate::config::ReportConfig;
use crate::diff::{DEFAULT_CONTEXT, LineDiff, render_html_unified, split_lines};
use crate::html::{Node, page};
use crate::types::TestCase;
use log::{info, warn};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Suffix appended to the output path to name its diff page
pub const DIFF_PAGE_SUFFIX: &str = ".diff.html";

/// What happened when a diff page was requested
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffPage {
    /// Page written; `link` is relative to the test directory
    Written { link: String, path: PathBuf },
    /// Inputs could not be read or the page could not be written
    Failed { link: String, reason: String },
}

impl DiffPage {
    pub fn link(&self) -> &str {
        match self {
            DiffPage::Written { link, .. } | DiffPage::Failed { link, .. } => link,
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, DiffPage::Written { .. })
    }
}

/// Relative link of the diff page for a test case
pub fn diff_page_link(case: &TestCase) -> String {
    format!("{}{}", case.path_out.to_string_lossy(), DIFF_PAGE_SUFFIX)
}

/// Page body for already-loaded reference and test output
pub fn render_diff_page(case: &TestCase, ref_text: &str, tst_text: &str) -> Node {
    let title = format!("Diff for {}", case.path_out.display());
    let old = split_lines(ref_text);
    let new = split_lines(tst_text);
    let diff = LineDiff::new(&old, &new);
    page(
        &title,
        vec![
            Node::element("h2").with_text(title.clone()),
            render_html_unified(&diff, "ref", "tst", DEFAULT_CONTEXT),
        ],
    )
}

/// Read both outputs and write the diff page next to the test output.
///
/// Failures are returned as `DiffPage::Failed` so the caller can keep going.
pub fn write_diff_page(config: &ReportConfig, case: &TestCase) -> DiffPage {
    let link = diff_page_link(case);
    match try_write_diff_page(config, case, &link) {
        Ok(path) => {
            info!("Wrote diff page {}", path.display());
            DiffPage::Written { link, path }
        }
        Err(e) => {
            warn!("Skipping diff page for {}: {}", case.path_out.display(), e);
            DiffPage::Failed { link, reason: e.to_string() }
        }
    }
}

fn read_output(path: PathBuf) -> io::Result<String> {
    fs::read_to_string(&path).map_err(|e| io::Error::new(e.kind(), format!("cannot read {}: {}", path.display(), e)))
}

fn try_write_diff_page(config: &ReportConfig, case: &TestCase, link: &str) -> io::Result<PathBuf> {
    let ref_text = read_output(case.reference_file(&config.refdir))?;
    let tst_text = read_output(case.output_file(&config.tstdir))?;
    let html = render_diff_page(case, &ref_text, &tst_text).render();

    let path = config.tstdir.join(link);
    super::write_file(&path, |w| w.write_all(html.as_bytes()))?;
    Ok(path)
}

#[cfg(test)]
#[path = "diff_page_test.rs"]
mod diff_page_test;
