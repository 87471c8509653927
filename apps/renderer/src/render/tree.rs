//! Render tree — the structured document model handed to display and export
//! collaborators.
//!
//! The tree is plain data with structural equality, so two template
//! identifiers that alias the same layout produce trees that compare equal.
//! `to_html` serializes deterministically: same tree in, same markup out,
//! which the PDF export path depends on.

use serde::Serialize;

/// One node of the render tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Node {
    Element(Element),
    Text { content: String },
}

/// An element node: tag, optional class hook for the style layer, attributes,
/// children. Classes and tags are static — user data only ever lands in text
/// content and attribute values, both escaped on serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub tag: &'static str,
    pub class: Option<&'static str>,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

/// Starts an element builder.
pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        class: None,
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

/// A text node.
pub fn text(content: impl Into<String>) -> Node {
    Node::Text {
        content: content.into(),
    }
}

impl Element {
    pub fn class(mut self, class: &'static str) -> Element {
        self.class = Some(class);
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Element {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Element {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Element {
        self.children.extend(nodes);
        self
    }

    /// Appends a text child.
    pub fn text(self, content: impl Into<String>) -> Element {
        self.child(text(content))
    }

    /// Appends a child only when present. Keeps conditional fields readable
    /// at the call site.
    pub fn maybe(mut self, node: Option<Node>) -> Element {
        if let Some(node) = node {
            self.children.push(node);
        }
        self
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Node {
        Node::Element(element)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// HTML serialization
// ────────────────────────────────────────────────────────────────────────────

/// Elements serialized without a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img"];

/// Serializes a render tree to an HTML fragment.
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

/// Serializes a render tree into a minimal standalone HTML document.
/// The export collaborator supplies the stylesheet; the markup only carries
/// class hooks.
pub fn to_html_document(node: &Node, title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        to_html(node)
    )
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text { content } => out.push_str(&escape(content)),
        Node::Element(element) => write_element(element, out),
    }
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.tag);
    if let Some(class) = element.class {
        out.push_str(" class=\"");
        out.push_str(class);
        out.push('"');
    }
    for (name, value) in &element.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape(value));
        out.push('"');
    }
    if VOID_TAGS.contains(&element.tag) {
        out.push_str(" />");
        return;
    }
    out.push('>');
    for child in &element.children {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(element.tag);
    out.push('>');
}

/// Escapes HTML special characters in text and attribute values.
fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_element() {
        let node: Node = el("div").class("cv-header").text("Ayşe Yılmaz").into();
        assert_eq!(to_html(&node), r#"<div class="cv-header">Ayşe Yılmaz</div>"#);
    }

    #[test]
    fn test_nested_children_and_attrs() {
        let node: Node = el("div")
            .child(
                el("a")
                    .attr("href", "https://example.com")
                    .text("Website"),
            )
            .into();
        assert_eq!(
            to_html(&node),
            r#"<div><a href="https://example.com">Website</a></div>"#
        );
    }

    #[test]
    fn test_void_elements_self_close() {
        let node: Node = el("img").class("cv-photo").attr("src", "photo.jpg").into();
        assert_eq!(to_html(&node), r#"<img class="cv-photo" src="photo.jpg" />"#);
    }

    #[test]
    fn test_text_is_escaped() {
        let node = text("<script>alert('x')</script> & more");
        assert_eq!(
            to_html(&node),
            "&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt; &amp; more"
        );
    }

    #[test]
    fn test_attr_values_are_escaped() {
        let node: Node = el("a").attr("href", r#"x" onload="y"#).text("z").into();
        assert_eq!(
            to_html(&node),
            r#"<a href="x&quot; onload=&quot;y">z</a>"#
        );
    }

    #[test]
    fn test_maybe_skips_none() {
        let with: Node = el("div").maybe(Some(text("x"))).into();
        let without: Node = el("div").maybe(None).into();
        assert_eq!(to_html(&with), "<div>x</div>");
        assert_eq!(to_html(&without), "<div></div>");
    }

    #[test]
    fn test_document_shell() {
        let node: Node = el("div").class("cv").into();
        let html = to_html_document(&node, "My CV");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>My CV</title>"));
        assert!(html.contains(r#"<div class="cv"></div>"#));
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let build = || -> Node {
            el("div")
                .class("cv")
                .child(el("span").text("a"))
                .child(el("span").text("b"))
                .into()
        };
        assert_eq!(to_html(&build()), to_html(&build()));
    }
}
