//! Rendering of line diffs for terminals and HTML pages.
//!
//! Terminal output is colored with ANSI escapes only when the caller says the
//! destination supports color; stripping the escapes from colored output
//! yields exactly the plain output.

use super::engine::{DEFAULT_CONTEXT, LineDiff, LineOp, OpTag};
use crate::html::Node;
use std::io::{self, Write};

const RED: &str = "\x1b[0;31m";
const GREEN: &str = "\x1b[0;32m";
const RESET: &str = "\x1b[m";

/// Output target for `render`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffStyle {
    /// Inline edit script, one `+`/`-` line per change
    TerminalText { supports_color: bool },
    /// Unified diff wrapped in `<pre>`
    Html,
}

/// Render `diff` into `w` in the given style
pub fn render<W: Write>(w: &mut W, diff: &LineDiff, style: DiffStyle, old_label: &str, new_label: &str) -> io::Result<()> {
    match style {
        DiffStyle::TerminalText { supports_color } => render_terminal(w, diff, old_label, new_label, "", supports_color),
        DiffStyle::Html => write!(w, "{}", render_html_unified(diff, old_label, new_label, DEFAULT_CONTEXT).render()),
    }
}

/// Header line followed by every inserted and deleted line
pub fn render_terminal<W: Write>(
    w: &mut W,
    diff: &LineDiff,
    old_label: &str,
    new_label: &str,
    indent: &str,
    supports_color: bool,
) -> io::Result<()> {
    writeln!(w, "{}Diff from {} to {}:", indent, old_label, new_label)?;
    for op in diff.inline() {
        let color = match op.tag {
            OpTag::Insert => GREEN,
            OpTag::Delete => RED,
            OpTag::Equal => continue,
        };
        if supports_color {
            writeln!(w, "{}{}{} {}{}", indent, color, op.tag.marker(), op.line, RESET)?;
        } else {
            writeln!(w, "{}{} {}", indent, op.tag.marker(), op.line)?;
        }
    }
    Ok(())
}

fn line_node(op: &LineOp) -> Node {
    let text = format!("{}{}", op.tag.marker(), op.line);
    match op.tag {
        OpTag::Insert => Node::element("span").with_class("green").with_text(text),
        OpTag::Delete => Node::element("span").with_class("red").with_text(text),
        OpTag::Equal => Node::text(text),
    }
}

/// Unified diff as a `<pre>` block.
///
/// File headers are `<b>` with the `old-file`/`new-file` classes, hunk
/// headers `<i class="purple">`, and changed lines `<span>` with the
/// `red`/`green` classes. Identical inputs give an
/// empty block.
pub fn render_html_unified(diff: &LineDiff, old_label: &str, new_label: &str, context: usize) -> Node {
    let mut pre = Node::element("pre").with_text("\n");
    let hunks = diff.unified(context);
    if hunks.is_empty() {
        return pre;
    }

    pre.push(Node::element("b").with_class("old-file").with_text(format!("--- {}", old_label)));
    pre.push(Node::text("\n"));
    pre.push(Node::element("b").with_class("new-file").with_text(format!("+++ {}", new_label)));
    pre.push(Node::text("\n"));
    for hunk in &hunks {
        pre.push(Node::element("i").with_class("purple").with_text(hunk.header()));
        pre.push(Node::text("\n"));
        for op in &hunk.lines {
            pre.push(line_node(op));
            pre.push(Node::text("\n"));
        }
    }
    pre
}

/// Changed lines only, as a `<pre>` block; the HTML counterpart of `render_terminal`
pub fn render_html_inline(diff: &LineDiff) -> Node {
    let mut pre = Node::element("pre").with_class("grey");
    for op in diff.inline().iter().filter(|op| op.tag != OpTag::Equal) {
        let text = format!("{} {}", op.tag.marker(), op.line);
        let class = if op.tag == OpTag::Insert { "green" } else { "red" };
        pre.push(Node::element("span").with_class(class).with_text(text));
        pre.push(Node::text("\n"));
    }
    pre
}

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;
