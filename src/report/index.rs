//! HTML index page: general info, flag summary and regressions.

use super::diff_page::DiffPage;
use super::text::{TAIL_LINES, tail};
use crate::config::ReportConfig;
use crate::diff::{LineDiff, render_html_inline, split_lines};
use crate::html::{Node, encode_path, key_value_table, page};
use crate::tally::FlagTally;
use crate::types::{Check, Flag, RunSummary, TestRecord};
use std::collections::BTreeMap;

pub const INDEX_TITLE: &str = "Regression test log";

/// Build the index page.
///
/// `diff_pages` is keyed by the test's position in `summary.tests`.
pub fn render_index(
    config: &ReportConfig,
    summary: &RunSummary,
    tally: &FlagTally,
    diff_pages: &BTreeMap<usize, DiffPage>,
) -> Node {
    let mut body = vec![
        Node::element("h1").with_text(INDEX_TITLE),
        Node::element("h2").with_text("General info"),
        general_info(config, summary),
        Node::element("h2").with_text("Summary"),
        summary_table(tally),
        Node::element("h2").with_text("Regressions"),
    ];

    for (index, record) in summary.tests.iter().enumerate() {
        if !record.outcome.is_ok() {
            body.extend(regression(record, diff_pages.get(&index)));
        }
    }

    page(INDEX_TITLE, body)
}

/// Run configuration echoed verbatim
pub fn general_info(config: &ReportConfig, summary: &RunSummary) -> Node {
    let mut rows = vec![
        ("Root", config.root.display().to_string()),
        ("Arch", config.arch.clone()),
        ("Version", config.version.clone()),
        ("NProc", config.nproc.to_string()),
    ];
    if let Some(prefix) = &config.mpi_prefix {
        let nproc_mpi = config.nproc_mpi.map_or_else(|| "-".to_string(), |n| n.to_string());
        rows.push(("NProc MPI", nproc_mpi));
        rows.push(("MPI prefix", prefix.clone()));
    }
    if let Some(suffix) = &config.mpi_suffix {
        rows.push(("MPI suffix", suffix.clone()));
    }
    rows.push(("Reference directory", config.refdir.display().to_string()));
    rows.push(("Test directory", config.tstdir.display().to_string()));
    for select_dir in &config.select_dirs {
        rows.push(("Select dir", select_dir.clone()));
    }
    for select_path_inp in &config.select_paths_inp {
        rows.push(("Select path inp", select_path_inp.clone()));
    }
    if let Some(seconds) = config.faster_than {
        rows.push(("Faster than", format!("{:.2}s", seconds)));
    }
    if let Some(seconds) = config.slower_than {
        rows.push(("Slower than", format!("{:.2}s", seconds)));
    }
    rows.push(("Number of test jobs", summary.tests.len().to_string()));
    rows.push(("Total wall time [s]", format!("{:.2}", summary.seconds)));
    key_value_table(rows)
}

/// Same rows as the text log's summary table
pub fn summary_table(tally: &FlagTally) -> Node {
    let header = Node::element("tr").children(["Flag", "Label", "Count"].map(|h| Node::element("th").with_text(h)));
    let rows = tally.iter().map(|(flag, count)| {
        let count_str = if count > 0 { count.to_string() } else { "-".to_string() };
        Node::element("tr")
            .child(Node::element("td").with_text(flag.tag().to_string()))
            .child(Node::element("td").with_text(flag.label()))
            .child(Node::element("td").with_text(count_str))
    });
    let total = Node::element("tr")
        .child(Node::element("td").child(Node::raw("&nbsp;")))
        .child(Node::element("td").with_text("TOTAL"))
        .child(Node::element("td").with_text(tally.total().to_string()));
    Node::element("table").child(header).children(rows).child(total)
}

fn category(text: &str) -> Node {
    Node::element("p").with_class("cat").with_text(text)
}

fn link(target: &str) -> Node {
    Node::element("a").with_attr("href", encode_path(target)).with_text(target)
}

fn captured(intro: &str, lines: &[String]) -> [Node; 2] {
    let mut content = String::new();
    for line in tail(lines) {
        content.push_str(line);
        content.push('\n');
    }
    [Node::element("p").with_text(intro), Node::element("pre").with_class("grey").with_text(content)]
}

fn check_item(check: &Check) -> Node {
    let mut item = Node::element("li").child(Node::element("pre").with_text(check.command.clone()));
    if check.wrong {
        item.push(Node::element("b").with_text("WRONG"));
    }
    if check.different {
        item.push(Node::element("b").with_text("DIFFERENT"));
    }
    if let (Some(ref_value), Some(tst_value)) = (&check.ref_value, &check.tst_value) {
        let old = split_lines(ref_value);
        let new = split_lines(tst_value);
        item.push(Node::element("br"));
        item.push(render_html_inline(&LineDiff::new(&old, &new)));
    }
    item
}

/// Subsection for one failing test, sections in the same order as the text log
pub fn regression(record: &TestRecord, diff_page: Option<&DiffPage>) -> Vec<Node> {
    let outcome = &record.outcome;
    let path_out = record.case.path_out.to_string_lossy();
    let mut nodes = vec![
        Node::element("h3").with_text(record.case.path_inp.display().to_string()),
        Node::element("p").child(link(&path_out)),
    ];

    if outcome.is_set(Flag::Error) {
        nodes.push(category("Something went wrong in the test driver."));
        nodes.push(Node::element("ol").children(
            outcome.messages.iter().map(|m| Node::element("li").child(Node::element("pre").with_text(m.clone()))),
        ));
    }
    if outcome.is_set(Flag::Wrong) || outcome.is_set(Flag::Different) {
        nodes.push(category("Some values are wrong and/or different compared to the reference."));
        match diff_page {
            Some(DiffPage::Written { link: target, .. }) => {
                nodes.push(Node::element("p").with_text("Full diff: ").child(link(target)));
            }
            Some(DiffPage::Failed { link: target, reason }) => {
                nodes.push(
                    Node::element("p")
                        .with_class("unavailable")
                        .with_text(format!("Full diff unavailable ({}): {}", target, reason)),
                );
            }
            None => {}
        }
        nodes.push(Node::element("ol").children(outcome.mismatched_checks().map(check_item)));
    }
    if outcome.is_set(Flag::Missing) {
        nodes.push(category("Some values in the output could not be found."));
        nodes.push(Node::element("ol").children(
            outcome
                .incomplete_checks()
                .map(|c| Node::element("li").child(Node::element("pre").with_text(c.command.clone()))),
        ));
    }
    if outcome.is_set(Flag::Failed) {
        nodes.push(category("Test run gave a non-zero return code."));
        nodes.extend(captured(&format!("Last {} lines of output:", TAIL_LINES), &outcome.last_out_lines));
    }
    if outcome.is_set(Flag::Verbose) {
        nodes.push(category("Test run gave some standard error."));
        nodes.extend(captured(&format!("Last {} lines of standard error:", TAIL_LINES), &outcome.last_stderr_lines));
    }
    if outcome.is_set(Flag::Leak) {
        nodes.push(category("Some memory leaks were detected. Check the stderr."));
    }
    nodes
}
