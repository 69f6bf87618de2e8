/// Small HTML node tree
///
/// Pages are assembled as `Node` values and serialized once. All text goes
/// through `escape` on the way out; only `Node::Raw` bypasses it and is
/// reserved for static markup such as the stylesheet.
use std::fmt::Write as _;

/// Stylesheet shared by the index and the diff pages
pub const CSS: &str = "
body { font-family: sans; font-size: 10pt; }
td { border: solid 1px #666; text-align: right; padding: 3px 3px; white-space: nowrap; }
th { border: solid 1px #666; text-align: right; padding: 3px 3px; white-space: nowrap; }
table { border-collapse: collapse; border: solid 1px black; font-size: 10pt; }
p.cat { color: #800; }
p.unavailable { color: #a00; font-style: italic; }
.grey { background-color: #AAA; }
.green { background-color: #AFA; }
.red { background-color: #FAA; }
.purple { background-color: #FAF; }
.old-file { background-color: #FAA; }
.new-file { background-color: #AFA; }
";

/// Elements followed by a line break after their opening tag
const BREAK_AFTER_OPEN: &[&str] = &["html", "head", "body", "table", "ol"];

/// Elements followed by a line break after their closing tag
const BREAK_AFTER_CLOSE: &[&str] =
    &["html", "head", "body", "title", "style", "h1", "h2", "h3", "table", "tr", "p", "ol", "li", "pre"];

const VOID: &[&str] = &["br", "meta"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element { tag: &'static str, class: Option<&'static str>, attrs: Vec<(&'static str, String)>, children: Vec<Node> },
    Text(String),
    Raw(String),
}

impl Node {
    pub fn element(tag: &'static str) -> Self {
        Node::Element { tag, class: None, attrs: Vec::new(), children: Vec::new() }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(s.into())
    }

    pub fn raw(s: impl Into<String>) -> Self {
        Node::Raw(s.into())
    }

    pub fn with_class(mut self, name: &'static str) -> Self {
        if let Node::Element { class, .. } = &mut self {
            *class = Some(name);
        }
        self
    }

    pub fn with_attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
        if let Node::Element { attrs, .. } = &mut self {
            attrs.push((key, value.into()));
        }
        self
    }

    pub fn child(mut self, node: Node) -> Self {
        self.push(node);
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        for node in nodes {
            self.push(node);
        }
        self
    }

    /// Shorthand for a text child
    pub fn with_text(self, s: impl Into<String>) -> Self {
        self.child(Node::text(s))
    }

    pub fn push(&mut self, node: Node) {
        if let Node::Element { children, .. } = self {
            children.push(node);
        }
    }

    pub fn class(&self) -> Option<&'static str> {
        match self {
            Node::Element { class, .. } => *class,
            _ => None,
        }
    }

    /// Serialize this node and its children
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) {
        match self {
            Node::Text(s) => out.push_str(&escape(s)),
            Node::Raw(s) => out.push_str(s),
            Node::Element { tag, class, attrs, children } => {
                out.push('<');
                out.push_str(tag);
                if let Some(class) = class {
                    let _ = write!(out, " class=\"{}\"", escape(class));
                }
                for (key, value) in attrs {
                    let _ = write!(out, " {}=\"{}\"", key, escape(value));
                }
                if VOID.contains(tag) {
                    out.push_str(" />");
                    return;
                }
                out.push('>');
                if BREAK_AFTER_OPEN.contains(tag) {
                    out.push('\n');
                }
                for child in children {
                    child.write_to(out);
                }
                let _ = write!(out, "</{}>", tag);
                if BREAK_AFTER_CLOSE.contains(tag) {
                    out.push('\n');
                }
            }
        }
    }
}

/// Escape text for element content and attribute values
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encode a relative path for use as a link target.
///
/// Unreserved characters and `/` pass through; every other byte of the UTF-8
/// encoding becomes `%XX`.
pub fn encode_path(path: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(path.len());
    for &byte in path.as_bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'/' => out.push(byte as char),
            _ => {
                out.push('%');
                out.push(HEX[(byte >> 4) as usize] as char);
                out.push(HEX[(byte & 0x0f) as usize] as char);
            }
        }
    }
    out
}

/// Complete document with the shared stylesheet
pub fn page(title: &str, body: Vec<Node>) -> Node {
    Node::element("html")
        .child(
            Node::element("head")
                .child(Node::element("meta").with_attr("charset", "utf-8"))
                .child(Node::element("title").with_text(title))
                .child(Node::element("style").with_attr("type", "text/css").child(Node::raw(CSS))),
        )
        .child(Node::element("body").children(body))
}

/// `<table>` of header/value rows
pub fn key_value_table(rows: Vec<(&'static str, String)>) -> Node {
    Node::element("table").children(rows.into_iter().map(|(key, value)| {
        Node::element("tr").child(Node::element("th").with_text(key)).child(Node::element("td").with_text(value))
    }))
}

#[cfg(test)]
#[path = "html_test.rs"]
mod html_test;
