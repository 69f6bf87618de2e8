/// Tests for diff rendering
#[cfg(test)]
mod tests {
    use crate::diff::*;

    fn strip_ansi(s: &str) -> String {
        s.replace("\x1b[0;31m", "").replace("\x1b[0;32m", "").replace("\x1b[m", "")
    }

    fn terminal(old: &[&str], new: &[&str], color: bool) -> String {
        let diff = LineDiff::new(old, new);
        let mut out = Vec::new();
        render_terminal(&mut out, &diff, "ref", "tst", "    ", color).expect("write to Vec");
        String::from_utf8(out).expect("utf-8")
    }

    #[test]
    fn test_terminal_plain() {
        let out = terminal(&["a", "b"], &["a", "c"], false);
        assert_eq!(out, "    Diff from ref to tst:\n    - b\n    + c\n");
    }

    #[test]
    fn test_terminal_color_matches_plain_modulo_escapes() {
        let old = ["x = 1.0001", "y = 2", "z"];
        let new = ["x = 1.0002", "y = 2"];
        let colored = terminal(&old, &new, true);
        let plain = terminal(&old, &new, false);
        assert!(colored.contains("\x1b[0;32m"));
        assert!(colored.contains("\x1b[0;31m"));
        assert!(!plain.contains('\x1b'));
        assert_eq!(strip_ansi(&colored), plain);
    }

    #[test]
    fn test_terminal_identical_has_only_header() {
        let out = terminal(&["same"], &["same"], false);
        assert_eq!(out, "    Diff from ref to tst:\n");
    }

    #[test]
    fn test_html_unified_markup() {
        let old = ["a", "b", "c"];
        let new = ["a", "B", "c"];
        let html = render_html_unified(&LineDiff::new(&old, &new), "ref", "tst", DEFAULT_CONTEXT).render();
        assert!(html.starts_with("<pre>\n<b class=\"old-file\">--- ref</b>\n<b class=\"new-file\">+++ tst</b>\n"));
        assert!(html.contains("<i class=\"purple\">@@ -1,3 +1,3 @@</i>\n"));
        assert!(html.contains(" a\n"));
        assert!(html.contains("<span class=\"red\">-b</span>\n"));
        assert!(html.contains("<span class=\"green\">+B</span>\n"));
        assert!(html.ends_with("</pre>\n"));
    }

    #[test]
    fn test_html_escapes_line_content() {
        let old = ["<tag> & more"];
        let new = ["<tag> && more"];
        let html = render_html_unified(&LineDiff::new(&old, &new), "ref", "tst", DEFAULT_CONTEXT).render();
        assert!(html.contains("-&lt;tag&gt; &amp; more"));
        assert!(html.contains("+&lt;tag&gt; &amp;&amp; more"));
        assert!(!html.contains("<tag>"));
    }

    #[test]
    fn test_html_identical_is_empty_block() {
        let html = render_html_unified(&LineDiff::new(&["a"], &["a"]), "ref", "tst", DEFAULT_CONTEXT).render();
        assert_eq!(html, "<pre>\n</pre>\n");
    }

    #[test]
    fn test_html_inline_lists_changes() {
        let html = render_html_inline(&LineDiff::new(&["1.5", "x"], &["1.6", "x"])).render();
        assert_eq!(
            html,
            "<pre class=\"grey\"><span class=\"red\">- 1.5</span>\n<span class=\"green\">+ 1.6</span>\n</pre>\n"
        );
    }

    #[test]
    fn test_render_dispatches_on_style() {
        let diff = LineDiff::new(&["a"], &["b"]);
        let mut text = Vec::new();
        render(&mut text, &diff, DiffStyle::TerminalText { supports_color: false }, "ref", "tst").expect("write");
        assert_eq!(String::from_utf8(text).expect("utf-8"), "Diff from ref to tst:\n- a\n+ b\n");

        let mut html = Vec::new();
        render(&mut html, &diff, DiffStyle::Html, "ref", "tst").expect("write");
        let html = String::from_utf8(html).expect("utf-8");
        assert!(html.contains("@@ -1 +1 @@"));
    }
}
