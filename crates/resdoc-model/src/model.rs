//! Provider, resource and field types.

/// A provider document: a named, ordered collection of resources.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Provider {
    /// Provider name (e.g. "triton").
    pub name: String,
    /// Resources in document order.
    pub resources: Vec<Resource>,
}

impl Provider {
    /// Trim surrounding whitespace from every resource description.
    ///
    /// Descriptions are embedded in single-line contexts (front matter,
    /// `NAME` section), so the indentation the XML source carries around
    /// them has to go.
    pub fn tidy(&mut self) {
        for resource in &mut self.resources {
            let trimmed = resource.description.trim();
            if trimmed.len() != resource.description.len() {
                resource.description = trimmed.to_owned();
            }
        }
    }
}

/// One documented API resource.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resource {
    /// Resource name (e.g. "`triton_firewall_rule`").
    pub name: String,
    /// Rich-text description.
    pub description: String,
    /// Arguments in documentation order.
    pub arguments: Vec<Argument>,
    /// Exported attributes in documentation order.
    pub attributes: Vec<Attribute>,
    /// Usage examples in documentation order.
    pub examples: Vec<Example>,
}

/// An input argument of a resource.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Argument {
    /// Argument name.
    pub name: String,
    /// Declared type label (e.g. "string", "bool").
    pub type_name: String,
    /// Whether the argument must be set.
    pub required: bool,
    /// Whether changing the argument replaces the resource.
    pub force_new: bool,
    /// Whether the value may be computed when unset.
    pub computed: bool,
    /// Default value; empty means no default.
    pub default: String,
    /// Rich-text description.
    pub description: String,
}

impl Argument {
    /// Default value, if one is declared.
    ///
    /// An empty default is indistinguishable from no default.
    #[must_use]
    pub fn default_value(&self) -> Option<&str> {
        (!self.default.is_empty()).then_some(self.default.as_str())
    }
}

/// A read-only attribute exported by a resource.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name.
    pub name: String,
    /// Declared type label.
    pub type_name: String,
    /// Rich-text description.
    pub description: String,
}

/// A usage example.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Example {
    /// Rich-text caption.
    pub description: String,
    /// Raw example source. The first line is a header that renderers drop.
    pub text: String,
}
