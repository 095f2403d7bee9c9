use scraper::{ElementRef, Node};

/// Text content of a table cell with surrounding whitespace trimmed.
///
/// Text nodes are concatenated in document order. A `<br>` starts a new line unless the
/// markup already breaks the line there, so `a<br>\nb` and `a<br>b` both read `a\nb`.
pub fn cell_text(element: ElementRef<'_>) -> String {
    let mut text = String::new();
    let mut line_break = false;
    for node in element.descendants() {
        match node.value() {
            Node::Text(t) => {
                if line_break && !t.starts_with(['\r', '\n']) && !text.ends_with('\n') {
                    text.push('\n');
                }
                line_break = false;
                text.push_str(t);
            }
            Node::Element(e) if e.name() == "br" => line_break = true,
            _ => {}
        }
    }
    text.trim().to_owned()
}
