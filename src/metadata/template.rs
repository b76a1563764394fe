//! Template parameter and specialization descriptions.

use crate::metadata::SymbolId;

/// One template parameter or template argument.
///
/// The contents is the textual descriptor produced by the extraction layer, e.g.
/// `typename T`, `int N = 4` or, for a specialization argument, `std::string`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplateParamInfo {
    /// The parameter or argument descriptor
    pub contents: String,
}

impl TemplateParamInfo {
    /// Creates a parameter from its descriptor.
    #[must_use]
    pub fn new(contents: impl Into<String>) -> Self {
        TemplateParamInfo {
            contents: contents.into(),
        }
    }
}

/// Describes which primary template a declaration specializes, and with which arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplateSpecializationInfo {
    /// Identifier of the specialized primary template
    pub specialization_of: SymbolId,
    /// Arguments of the specialization, in declaration order
    pub params: Vec<TemplateParamInfo>,
}

/// Template information attached to a record or function.
///
/// A primary template only has `params`. A full specialization has an empty `params` list
/// and a `specialization`; a partial specialization has both.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplateInfo {
    /// Template parameters, in declaration order
    pub params: Vec<TemplateParamInfo>,
    /// Set when the declaration specializes another template
    pub specialization: Option<TemplateSpecializationInfo>,
}

impl TemplateInfo {
    /// Returns true if the declaration is a (full or partial) specialization.
    #[must_use]
    pub fn is_specialization(&self) -> bool {
        self.specialization.is_some()
    }
}
