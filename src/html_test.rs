/// Tests for the HTML node tree
#[cfg(test)]
mod tests {
    use crate::html::*;

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(escape("a < b && c > \"d\" 'e'"), "a &lt; b &amp;&amp; c &gt; &quot;d&quot; &#39;e&#39;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_encode_path_keeps_separators() {
        assert_eq!(encode_path("QS/h2o.inp.out.diff.html"), "QS/h2o.inp.out.diff.html");
        assert_eq!(encode_path("run 1/a#b?c%d.out"), "run%201/a%23b%3Fc%25d.out");
        assert_eq!(encode_path("é&x"), "%C3%A9%26x");
    }

    #[test]
    fn test_text_is_escaped_raw_is_not() {
        let node = Node::element("p").with_text("<script>").child(Node::raw("&nbsp;"));
        assert_eq!(node.render(), "<p>&lt;script&gt;&nbsp;</p>\n");
    }

    #[test]
    fn test_class_and_attributes() {
        let node = Node::element("a").with_class("link").with_attr("href", "x.out?a=1&b=2").with_text("x");
        assert_eq!(node.render(), "<a class=\"link\" href=\"x.out?a=1&amp;b=2\">x</a>");
        assert_eq!(node.class(), Some("link"));
    }

    #[test]
    fn test_void_elements() {
        assert_eq!(Node::element("br").render(), "<br />");
    }

    #[test]
    fn test_block_elements_break_lines() {
        let node = Node::element("ol").child(Node::element("li").with_text("one"));
        assert_eq!(node.render(), "<ol>\n<li>one</li>\n</ol>\n");
    }

    #[test]
    fn test_page_embeds_stylesheet() {
        let html = page("T & U", vec![Node::element("h1").with_text("hi")]).render();
        assert!(html.starts_with("<html>\n<head>\n"));
        assert!(html.contains("<title>T &amp; U</title>"));
        assert!(html.contains(".purple { background-color: #FAF; }"));
        assert!(html.contains("<h1>hi</h1>\n</body>\n</html>\n"));
    }

    #[test]
    fn test_key_value_table() {
        let table = key_value_table(vec![("Arch", "Linux-x86-64".to_string())]).render();
        assert_eq!(table, "<table>\n<tr><th>Arch</th><td>Linux-x86-64</td></tr>\n</table>\n");
    }
}
