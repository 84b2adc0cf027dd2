//! `scraper` implementation of the document traversal traits

use pollen_domain::traits::{Document, DocumentNode};
use scraper::{ElementRef, Html, Node};

/// Elements whose text is never rendered
const NON_RENDERED: [&str; 3] = ["script", "style", "template"];

/// Element handle into a parsed page
#[derive(Debug, Clone, Copy)]
pub struct HtmlNode<'a>(ElementRef<'a>);

impl<'a> DocumentNode for HtmlNode<'a> {
    fn tag_name(&self) -> &str {
        self.0.value().name()
    }

    fn parent(&self) -> Option<Self> {
        // The document root is not an element, so it never counts as a parent
        self.0.parent().and_then(ElementRef::wrap).map(HtmlNode)
    }

    fn children(&self) -> Vec<Self> {
        self.0.children().filter_map(ElementRef::wrap).map(HtmlNode).collect()
    }

    fn text_fragments(&self) -> Vec<String> {
        let mut fragments = Vec::new();
        collect_text(self.0, &mut fragments);
        fragments
    }
}

/// Rendered text below `element`, skipping script, style and template bodies
fn collect_text(element: ElementRef<'_>, out: &mut Vec<String>) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push(String::from(&**text)),
            Node::Element(el) if NON_RENDERED.contains(&el.name()) => {}
            Node::Element(_) => {
                if let Some(nested) = ElementRef::wrap(child) {
                    collect_text(nested, out);
                }
            }
            _ => {}
        }
    }
}

/// A parsed HTML page
pub struct HtmlPage {
    html: Html,
}

impl HtmlPage {
    /// Parse a complete HTML document
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// Parse a fragment without the implied `<html>`/`<body>` wrappers
    pub fn parse_fragment(markup: &str) -> Self {
        Self {
            html: Html::parse_fragment(markup),
        }
    }
}

impl<'a> Document for &'a HtmlPage {
    type Node = HtmlNode<'a>;

    fn root(&self) -> HtmlNode<'a> {
        HtmlNode(self.html.root_element())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nodes_by_tag_over_html() {
        let page = HtmlPage::parse(
            "<html><body><div><h4>Tree Pollen</h4></div><h4> Mold </h4></body></html>",
        );
        let headings = (&page).nodes_by_tag("h4");
        let texts: Vec<_> = headings.iter().map(|n| n.joined_text("")).collect();
        assert_eq!(texts, ["Tree Pollen", "Mold"]);
    }

    #[test]
    fn test_parent_chain() {
        let page =
            HtmlPage::parse("<div class=\"outer\"><div class=\"inner\"><h4>Mold</h4></div></div>");
        let h4 = (&page).nodes_by_tag("h4").remove(0);
        let parent = h4.parent().unwrap();
        let grandparent = parent.parent().unwrap();
        assert_eq!(parent.tag_name(), "div");
        assert_eq!(grandparent.tag_name(), "div");
        assert_eq!(grandparent.joined_text(" "), "Mold");
    }

    #[test]
    fn test_fragment_root_has_no_element_parent() {
        let page = HtmlPage::parse_fragment("<h4>Mold</h4>");
        let h4 = (&page).nodes_by_tag("h4").remove(0);
        let parent = h4.parent().unwrap();
        assert!(parent.parent().is_none());
    }

    #[test]
    fn test_script_and_style_text_is_skipped() {
        let page = HtmlPage::parse(
            "<head><style>h4 { color: red; }</style></head>\
             <body><div>Mold<script>var x = 1;</script><template>Low</template></div></body>",
        );
        let div = (&page).nodes_by_tag("div").remove(0);
        assert_eq!(div.joined_text(" "), "Mold");
        assert!(!(&page).full_text().contains("color"));
    }

    #[test]
    fn test_full_text_contains_date() {
        let page = HtmlPage::parse("<body><div>Updated</div><div>02/15/2026</div></body>");
        assert!((&page).full_text().contains("02/15/2026"));
    }
}
