//! Parameter schema types.
//!
//! Each component publishes the parameters it accepts so the hosting
//! explorer can render controls for them. The schema is documentation
//! shaped: names are wire names, defaults are the values the stylesheet
//! or renderer falls back to.

/// Control family the explorer renders for a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Free text input.
    Text,
    /// On/off toggle.
    Boolean,
    /// Color picker.
    Color,
    /// One value out of a fixed option table.
    Select,
    /// Callback parameter, surfaced as an action logger.
    Action,
}

/// One option of a select control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    /// Human-readable label.
    pub label: &'static str,
    /// The value substituted into the rendered output.
    pub value: &'static str,
}

impl SelectOption {
    /// Create a new select option.
    pub const fn new(label: &'static str, value: &'static str) -> Self {
        Self { label, value }
    }
}

/// Schema entry describing one parameter of a component.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    /// Wire name of the field.
    pub name: &'static str,
    /// Control family.
    pub control: Control,
    /// Option table for select controls; empty otherwise.
    pub options: &'static [SelectOption],
    /// Documented default, shown when the parameter is left unset.
    pub default_value: Option<&'static str>,
    /// Grouping category in the explorer's controls panel.
    pub category: Option<&'static str>,
    /// Short type summary.
    pub type_summary: Option<&'static str>,
    /// One-line description.
    pub description: Option<&'static str>,
}

impl ParamSpec {
    /// Create a new parameter spec with no documentation attached.
    pub const fn new(name: &'static str, control: Control) -> Self {
        Self {
            name,
            control,
            options: &[],
            default_value: None,
            category: None,
            type_summary: None,
            description: None,
        }
    }

    /// Attach an option table.
    pub const fn with_options(mut self, options: &'static [SelectOption]) -> Self {
        self.options = options;
        self
    }

    /// Attach a documented default value.
    pub const fn with_default(mut self, value: &'static str) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Attach a controls-panel category.
    pub const fn with_category(mut self, category: &'static str) -> Self {
        self.category = Some(category);
        self
    }

    /// Attach a type summary.
    pub const fn with_summary(mut self, summary: &'static str) -> Self {
        self.type_summary = Some(summary);
        self
    }

    /// Attach a description.
    pub const fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}
