//! Plain-text run log.
//!
//! Layout: run totals, one `~`-ruled block per failing test, and a `=`-ruled
//! flag summary table.

use crate::diff::{LineDiff, render_terminal, split_lines};
use crate::tally::FlagTally;
use crate::types::{Check, Flag, RunSummary, TestRecord};
use std::io::{self, Write};

const RULE_WIDTH: usize = 80;
const BYTES_PER_MB: f64 = 1_048_576.0;

/// Captured output is shown up to this many trailing lines
pub const TAIL_LINES: usize = 20;

fn megabytes(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

/// Write the full text log
pub fn write_text_log<W: Write>(
    w: &mut W,
    summary: &RunSummary,
    tally: &FlagTally,
    supports_color: bool,
) -> io::Result<()> {
    writeln!(w, "Total wall time [s]: {:.2}", summary.seconds)?;
    writeln!(w, "Disk usage in ref-... [Mb]: {:.2}", megabytes(summary.ref_size))?;
    writeln!(w, "Disk usage in tst-... [Mb]: {:.2}", megabytes(summary.tst_size))?;

    for record in summary.failing() {
        write_problems(w, record, supports_color)?;
    }

    write_summary_table(w, tally)
}

/// Detail block for one failing test.
///
/// Flags are independent; every set flag gets its section, always in the
/// order error, different/wrong, missing, failed, verbose, leak.
pub fn write_problems<W: Write>(w: &mut W, record: &TestRecord, supports_color: bool) -> io::Result<()> {
    let outcome = &record.outcome;
    let tilde = "~".repeat(RULE_WIDTH);

    writeln!(w, "{}", tilde)?;
    writeln!(w, "Problems with {}", record.case.path_inp.display())?;

    if outcome.is_set(Flag::Error) {
        writeln!(w, " * Something went wrong in the test driver.")?;
        write_messages(w, &outcome.messages)?;
    }
    if outcome.is_set(Flag::Different) || outcome.is_set(Flag::Wrong) {
        writeln!(w, " * Some values are wrong and/or different compared to the reference.")?;
        for check in outcome.mismatched_checks() {
            write_mismatch(w, check, supports_color)?;
        }
    }
    if outcome.is_set(Flag::Missing) {
        writeln!(w, " * Some values in the output could not be found")?;
        for check in outcome.incomplete_checks() {
            writeln!(w, "    {}", check.command)?;
        }
    }
    if outcome.is_set(Flag::Failed) {
        writeln!(w, " * Test run gave a non-zero return code.")?;
        writeln!(w, "   ----- last {} lines of output -----", TAIL_LINES)?;
        write_captured(w, &outcome.last_out_lines)?;
    }
    if outcome.is_set(Flag::Verbose) {
        writeln!(w, " * Test run gave some standard error.")?;
        writeln!(w, "   ----- last {} lines of standard error -----", TAIL_LINES)?;
        write_captured(w, &outcome.last_stderr_lines)?;
    }
    if outcome.is_set(Flag::Leak) {
        writeln!(w, " * Some memory leaks were detected. Check the stderr.")?;
    }

    writeln!(w, "{}", tilde)
}

/// Each message line is prefixed with the index of the message it came from
fn write_messages<W: Write>(w: &mut W, messages: &[String]) -> io::Result<()> {
    for (counter, message) in messages.iter().enumerate() {
        for line in message.split('\n') {
            writeln!(w, "    {:03}|{}", counter, line)?;
        }
    }
    Ok(())
}

fn write_mismatch<W: Write>(w: &mut W, check: &Check, supports_color: bool) -> io::Result<()> {
    writeln!(w, "    {}", check.command)?;
    let mut verdict = String::from("    !!!");
    if check.wrong {
        verdict.push_str(" WRONG");
    }
    if check.different {
        verdict.push_str(" DIFFERENT");
    }
    writeln!(w, "{} !!!", verdict)?;

    if let (Some(ref_value), Some(tst_value)) = (&check.ref_value, &check.tst_value) {
        let old = split_lines(ref_value);
        let new = split_lines(tst_value);
        render_terminal(w, &LineDiff::new(&old, &new), "ref", "tst", "    ", supports_color)?;
    }
    Ok(())
}

fn write_captured<W: Write>(w: &mut W, lines: &[String]) -> io::Result<()> {
    for line in tail(lines) {
        writeln!(w, "{}", line)?;
    }
    Ok(())
}

/// Last `TAIL_LINES` entries of captured output
pub fn tail(lines: &[String]) -> &[String] {
    &lines[lines.len().saturating_sub(TAIL_LINES)..]
}

/// Flag counts in name order, `-` for zero, followed by the test total
pub fn write_summary_table<W: Write>(w: &mut W, tally: &FlagTally) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(w, "{}", rule)?;
    for (flag, count) in tally.iter() {
        let count_str = if count > 0 { format!("{:>5}", count) } else { "    -".to_string() };
        writeln!(w, " {:>1} {:>10} {:>5}", flag.tag(), flag.label(), count_str)?;
    }
    writeln!(w, "   {:>10} {:>5}", "TOTAL", tally.total())?;
    writeln!(w, "{}", rule)
}

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;
