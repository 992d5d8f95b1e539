//! HTML serialization for element trees.

use crate::element::{Content, Element};

/// Tags serialized without content or a closing tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Serialize an element tree to an HTML string.
///
/// Output is deterministic: attributes render as `id`, `class`, `style`,
/// then remaining attributes in insertion order. Style declarations render
/// as `name: value;` pairs joined by a single space. Children render in
/// order with no whitespace added between them.
pub fn render(root: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, root);
    log::debug!("rendered <{}> tree, {} bytes", root.tag, out.len());
    out
}

fn write_element(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(&element.tag);

    if let Some(id) = &element.id {
        out.push_str(&format!(" id=\"{}\"", escape_attr(id)));
    }
    if !element.classes.is_empty() {
        out.push_str(&format!(
            " class=\"{}\"",
            escape_attr(&element.classes.join(" "))
        ));
    }
    if !element.style.is_empty() {
        let declarations: Vec<String> = element
            .style
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect();
        out.push_str(&format!(
            " style=\"{}\"",
            escape_attr(&declarations.join(" "))
        ));
    }
    for (name, value) in &element.attrs {
        out.push_str(&format!(" {name}=\"{}\"", escape_attr(value)));
    }
    out.push('>');

    if VOID_TAGS.contains(&element.tag.as_str()) {
        return;
    }

    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape_text(text)),
        Content::Children(children) => {
            for child in children {
                write_element(out, child);
            }
        }
    }

    out.push_str(&format!("</{}>", element.tag));
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}
