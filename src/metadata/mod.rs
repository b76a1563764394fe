//! The documentation metadata graph.
//!
//! This module defines the node types the extraction layer produces and the
//! [`crate::bitcode`] engine serializes. Nodes are plain owned data; the writer only
//! borrows them.
//!
//! # Key Components
//!
//! - [`symbol`] - Fixed-width [`SymbolId`] keys that connect nodes across units
//! - [`types`] - Qualifier enums and flag sets shared by the nodes
//! - [`info`] - Namespaces, records, functions, enums, typedefs and their parts
//! - [`template`] - Template parameters and specializations
//! - [`javadoc`] - The structured documentation comment tree
//!
//! # Examples
//!
//! ```rust
//! use docscope::metadata::{Info, InfoKind, NamespaceInfo, Reference, SymbolId};
//!
//! let mut ns = NamespaceInfo {
//!     info: Info::new(SymbolId::from_usr("c:@N@geometry"), "geometry"),
//!     ..NamespaceInfo::default()
//! };
//! ns.children.records.push(Reference::new(
//!     SymbolId::from_usr("c:@N@geometry@S@Point"),
//!     "Point",
//!     InfoKind::Record,
//! ));
//!
//! assert_eq!(ns.children.len(), 1);
//! ```

/// Gives fieldless wire enums a `from_raw` lookup. Expects `strum::IntoEnumIterator` in scope.
macro_rules! impl_from_raw {
    ($($ty:ident),* $(,)?) => {
        $(
            impl $ty {
                /// Looks up the variant with the given wire value.
                #[must_use]
                pub fn from_raw(raw: u64) -> Option<Self> {
                    Self::iter().find(|variant| *variant as u64 == raw)
                }
            }
        )*
    };
}

/// Declaration nodes and their shared parts
pub mod info;
/// Structured documentation comments
pub mod javadoc;
/// Symbol identifiers
pub mod symbol;
/// Template descriptions
pub mod template;
/// Qualifiers and flag sets
pub mod types;

pub use info::{
    BaseRecordInfo, EnumInfo, EnumValueInfo, FieldTypeInfo, FunctionInfo, Info, InfoNode,
    Location, MemberTypeInfo, NamespaceInfo, RecordInfo, Reference, Scope, SymbolInfo,
    TypeInfo, TypedefInfo,
};
pub use javadoc::Javadoc;
pub use symbol::{SymbolId, SYMBOL_ID_SIZE};
pub use template::{TemplateInfo, TemplateParamInfo, TemplateSpecializationInfo};
pub use types::{
    AccessKind, FieldId, FunctionFlags, InfoKind, MemberFlags, RecordFlags, TagKind,
};
