mod content;
mod handler;
mod node;

pub use content::Content;
pub use handler::{ClickEvent, ClickHandler};
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id.as_deref() == Some(id) {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find the first element carrying the given class, depth-first.
pub fn find_class<'a>(root: &'a Element, class: &str) -> Option<&'a Element> {
    if root.classes.iter().any(|c| c == class) {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_class(child, class) {
                return Some(found);
            }
        }
    }

    None
}
