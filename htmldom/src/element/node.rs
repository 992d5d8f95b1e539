use super::{ClickEvent, ClickHandler, Content};

/// An owned HTML element.
///
/// Elements form a tree via [`Content::Children`]. Builder methods consume
/// and return `self` so trees read as nested expressions; every render call
/// constructs a fresh tree and nothing holds references back into it.
#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub tag: String,
    pub id: Option<String>,

    // Presentation
    pub classes: Vec<String>,
    /// Non-class, non-style attributes in insertion order.
    pub attrs: Vec<(String, String)>,
    /// Inline style declarations in insertion order, custom properties
    /// included. Setting a name that is already present replaces its value
    /// in place.
    pub style: Vec<(String, String)>,

    // Content
    pub content: Content,

    // Interaction
    pub on_click: Option<ClickHandler>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            tag: "div".into(),
            id: None,
            classes: Vec::new(),
            attrs: Vec::new(),
            style: Vec::new(),
            content: Content::None,
            on_click: None,
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::default()
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    pub fn text(tag: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    // Classes
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn classes(mut self, classes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.classes.extend(classes.into_iter().map(Into::into));
        self
    }

    // Attributes
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self.attrs.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = value;
        } else {
            self.attrs.push((name, value));
        }
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    // Style
    pub fn style_prop(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self.style.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = value;
        } else {
            self.style.push((name, value));
        }
        self
    }

    pub fn get_style_prop(&self, name: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    // Interaction
    pub fn on_click(mut self, handler: ClickHandler) -> Self {
        self.on_click = Some(handler);
        self
    }

    /// Simulate a click on this element.
    ///
    /// Dispatches the attached handler, if any, and reports whether one ran.
    pub fn click(&self) -> bool {
        match &self.on_click {
            Some(handler) => {
                log::debug!("click dispatched on <{}>", self.tag);
                handler.call(&ClickEvent {
                    tag: self.tag.clone(),
                    id: self.id.clone(),
                });
                true
            }
            None => false,
        }
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            _ => {
                // Replace content with children
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            Content::None => self.content = Content::Children(new_children.into_iter().collect()),
            _ => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }
}
