//! Line-level edit scripts.
//!
//! Lines are compared without their line terminator, so `"a\n"` and `"a"`
//! are the same line.

use similar::{Algorithm, DiffOp, DiffTag, capture_diff_slices, group_diff_ops};

/// Context lines around each change in unified mode
pub const DEFAULT_CONTEXT: usize = 3;

/// Kind of a single diff line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpTag {
    Equal,
    Insert,
    Delete,
}

impl OpTag {
    /// Prefix character in unified output
    pub fn marker(&self) -> char {
        match self {
            OpTag::Equal => ' ',
            OpTag::Insert => '+',
            OpTag::Delete => '-',
        }
    }
}

/// One line of an edit script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOp {
    pub tag: OpTag,
    pub line: String,
}

impl LineOp {
    fn new(tag: OpTag, line: &str) -> Self {
        Self { tag, line: line.to_string() }
    }
}

/// Contiguous block of a unified diff
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    /// Zero-based index of the first old line covered
    pub old_start: usize,
    pub old_len: usize,
    /// Zero-based index of the first new line covered
    pub new_start: usize,
    pub new_len: usize,
    pub lines: Vec<LineOp>,
}

impl Hunk {
    /// `@@ -l,s +l,s @@` header
    pub fn header(&self) -> String {
        format!("@@ -{} +{} @@", format_range(self.old_start, self.old_len), format_range(self.new_start, self.new_len))
    }
}

/// Unified range notation: a bare line number for single-line ranges and the
/// line before the range for empty ones.
fn format_range(start: usize, len: usize) -> String {
    match len {
        0 => format!("{},0", start),
        1 => format!("{}", start + 1),
        _ => format!("{},{}", start + 1, len),
    }
}

/// Split text into lines without terminators
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

fn strip_terminator(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

/// Edit script between two line sequences
#[derive(Debug, Clone)]
pub struct LineDiff<'a> {
    old: Vec<&'a str>,
    new: Vec<&'a str>,
    ops: Vec<DiffOp>,
}

impl<'a> LineDiff<'a> {
    pub fn new<A, B>(old: &'a [A], new: &'a [B]) -> Self
    where
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let old: Vec<&'a str> = old.iter().map(|l| strip_terminator(l.as_ref())).collect();
        let new: Vec<&'a str> = new.iter().map(|l| strip_terminator(l.as_ref())).collect();
        let ops = capture_diff_slices(Algorithm::Myers, &old, &new);
        Self { old, new, ops }
    }

    pub fn old_lines(&self) -> &[&'a str] {
        &self.old
    }

    pub fn new_lines(&self) -> &[&'a str] {
        &self.new
    }

    /// No insertions or deletions
    pub fn is_identical(&self) -> bool {
        self.ops.iter().all(|op| op.tag() == DiffTag::Equal)
    }

    /// Full edit script; replaced blocks list their deletions before their insertions.
    pub fn inline(&self) -> Vec<LineOp> {
        let mut out = Vec::with_capacity(self.old.len().max(self.new.len()));
        for op in &self.ops {
            self.push_op(op, &mut out);
        }
        out
    }

    /// Changes grouped into hunks with `context` lines around them
    pub fn unified(&self, context: usize) -> Vec<Hunk> {
        if self.is_identical() {
            return Vec::new();
        }
        group_diff_ops(self.ops.clone(), context).iter().filter_map(|group| self.hunk(group)).collect()
    }

    fn hunk(&self, group: &[DiffOp]) -> Option<Hunk> {
        let first = group.first()?;
        let last = group.last()?;
        let old_start = first.old_range().start;
        let new_start = first.new_range().start;

        let mut lines = Vec::new();
        for op in group {
            self.push_op(op, &mut lines);
        }

        Some(Hunk {
            old_start,
            old_len: last.old_range().end - old_start,
            new_start,
            new_len: last.new_range().end - new_start,
            lines,
        })
    }

    fn push_op(&self, op: &DiffOp, out: &mut Vec<LineOp>) {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => out.extend(self.old[old_range].iter().map(|l| LineOp::new(OpTag::Equal, l))),
            DiffTag::Delete => out.extend(self.old[old_range].iter().map(|l| LineOp::new(OpTag::Delete, l))),
            DiffTag::Insert => out.extend(self.new[new_range].iter().map(|l| LineOp::new(OpTag::Insert, l))),
            DiffTag::Replace => {
                out.extend(self.old[old_range].iter().map(|l| LineOp::new(OpTag::Delete, l)));
                out.extend(self.new[new_range].iter().map(|l| LineOp::new(OpTag::Insert, l)));
            }
        }
    }
}

impl PartialEq for LineDiff<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.inline() == other.inline()
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;
