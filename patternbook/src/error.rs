//! Catalog error types

/// Errors that can occur when resolving or rendering catalog entries.
///
/// Rendering itself never fails: missing optional parameters suppress the
/// corresponding feature and unmatched substitutions leave their input
/// unchanged. Errors exist only at the catalog surface, where a caller
/// names a component or supplies a parameter record.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// No component is registered under the requested title.
    #[error("unknown component: {title}")]
    UnknownComponent {
        /// The title that failed to resolve.
        title: String,
    },

    /// The component exists but has no variant with the requested name.
    #[error("unknown variant '{name}' for component {component}")]
    UnknownVariant {
        /// The component whose variants were searched.
        component: String,
        /// The variant name that failed to resolve.
        name: String,
    },

    /// The component does not render from a parameter record.
    #[error("component {title} does not take parameters")]
    NotParameterized {
        /// The component that was asked to render from parameters.
        title: String,
    },

    /// A parameter record failed to deserialize.
    #[error("invalid parameters: {0}")]
    InvalidParams(#[from] serde_json::Error),
}

impl CatalogError {
    /// Creates an unknown-component error.
    pub fn unknown_component(title: impl Into<String>) -> Self {
        Self::UnknownComponent {
            title: title.into(),
        }
    }

    /// Creates an unknown-variant error.
    pub fn unknown_variant(component: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnknownVariant {
            component: component.into(),
            name: name.into(),
        }
    }
}
