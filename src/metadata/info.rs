//! Metadata node types for the declarations of a source unit.
//!
//! The graph is a tree of plain owned values. Top-level nodes ([`InfoNode`]) describe
//! namespaces, records, functions, enums and typedefs; they refer to each other only through
//! [`Reference`] values keyed by [`SymbolId`], never by pointer, so every node can be written
//! on its own.
//!
//! # Key Types
//! - [`Info`]: identity, naming and documentation shared by every top-level node
//! - [`SymbolInfo`]: source positions of declarations that have them
//! - [`Reference`]: a typed pointer to another symbol
//! - [`InfoNode`]: the closed set of nodes that can be written at the top level
//!
//! # Examples
//!
//! ```rust
//! use docscope::metadata::{FunctionInfo, Info, InfoNode, Reference, SymbolId, TypeInfo};
//!
//! let function = FunctionInfo {
//!     info: Info::new(SymbolId::from_usr("c:@F@abs#I#"), "abs"),
//!     return_type: TypeInfo::builtin("int"),
//!     ..FunctionInfo::default()
//! };
//! let node = InfoNode::from(function);
//!
//! assert_eq!(node.info().name, "abs");
//! assert_eq!(node.kind(), docscope::metadata::InfoKind::Function);
//! ```

use crate::metadata::{
    javadoc::Javadoc,
    template::TemplateInfo,
    types::{AccessKind, FunctionFlags, InfoKind, MemberFlags, RecordFlags, TagKind},
    SymbolId,
};

/// A position in a source file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    /// 1-based line number
    pub line: u32,
    /// Path of the file, relative to the source root when `in_root_dir` is set
    pub filename: String,
    /// Whether the file lives below the configured source root
    pub in_root_dir: bool,
}

impl Location {
    /// Creates a location.
    #[must_use]
    pub fn new(line: u32, filename: impl Into<String>, in_root_dir: bool) -> Self {
        Location {
            line,
            filename: filename.into(),
            in_root_dir,
        }
    }
}

/// A typed pointer to another symbol.
///
/// References to builtin types (`int`, `void`) carry the zero identifier and only a name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reference {
    /// Identifier of the target, [`SymbolId::ZERO`] when it has none
    pub id: SymbolId,
    /// Display name of the target
    pub name: String,
    /// What kind of symbol the target is
    pub kind: InfoKind,
}

impl Reference {
    /// Creates a reference to a symbol.
    #[must_use]
    pub fn new(id: SymbolId, name: impl Into<String>, kind: InfoKind) -> Self {
        Reference {
            id,
            name: name.into(),
            kind,
        }
    }
}

/// Identity, naming and documentation common to all top-level nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Info {
    /// Identifier of the declaration, mandatory when written
    pub id: SymbolId,
    /// Unqualified name
    pub name: String,
    /// Path used to place the output of the renderer
    pub path: String,
    /// Enclosing namespaces, innermost first
    pub namespace: Vec<Reference>,
    /// Attached documentation comment
    pub javadoc: Option<Javadoc>,
}

impl Info {
    /// Creates the common part of a node from its identifier and name.
    #[must_use]
    pub fn new(id: SymbolId, name: impl Into<String>) -> Self {
        Info {
            id,
            name: name.into(),
            ..Info::default()
        }
    }
}

/// Source positions of a declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolInfo {
    /// Location of the definition, if the unit contains it
    pub def_loc: Option<Location>,
    /// Locations of every other declaration
    pub loc: Vec<Location>,
}

/// Child symbols declared directly in a namespace or record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scope {
    /// Nested namespaces
    pub namespaces: Vec<Reference>,
    /// Nested records
    pub records: Vec<Reference>,
    /// Nested functions
    pub functions: Vec<Reference>,
    /// Nested typedefs
    pub typedefs: Vec<Reference>,
    /// Nested enums
    pub enums: Vec<Reference>,
}

impl Scope {
    /// Returns true if no children are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
            && self.records.is_empty()
            && self.functions.is_empty()
            && self.typedefs.is_empty()
            && self.enums.is_empty()
    }

    /// Total number of children across all lists.
    #[must_use]
    pub fn len(&self) -> usize {
        self.namespaces.len()
            + self.records.len()
            + self.functions.len()
            + self.typedefs.len()
            + self.enums.len()
    }
}

/// A type as it is spelled at a use site.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeInfo {
    /// The referenced type
    pub type_ref: Reference,
}

impl TypeInfo {
    /// A type referring to a declared symbol.
    #[must_use]
    pub fn new(type_ref: Reference) -> Self {
        TypeInfo { type_ref }
    }

    /// A builtin type that has no declaration, e.g. `int`.
    #[must_use]
    pub fn builtin(name: impl Into<String>) -> Self {
        TypeInfo {
            type_ref: Reference::new(SymbolId::ZERO, name, InfoKind::Default),
        }
    }
}

/// A typed, named field: a function parameter or the declaration part of a data member.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldTypeInfo {
    /// Declared type
    pub type_info: TypeInfo,
    /// Name, empty for unnamed parameters
    pub name: String,
    /// Default argument or member initializer as written
    pub default_value: String,
}

/// A data member of a record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemberTypeInfo {
    /// Type, name and initializer
    pub field: FieldTypeInfo,
    /// Access specifier
    pub access: AccessKind,
    /// Declaration specifiers
    pub flags: MemberFlags,
    /// Attached documentation comment
    pub javadoc: Option<Javadoc>,
}

/// A namespace.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NamespaceInfo {
    /// Common part
    pub info: Info,
    /// Symbols declared directly in the namespace
    pub children: Scope,
}

/// Describes one base class of a record, including inherited members of interest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BaseRecordInfo {
    /// Identifier of the base record, mandatory when written
    pub id: SymbolId,
    /// Unqualified name
    pub name: String,
    /// Path of the base record's output
    pub path: String,
    /// Tag keyword the base was declared with
    pub tag: TagKind,
    /// Whether the base is inherited virtually
    pub is_virtual: bool,
    /// Access of the inheritance
    pub access: AccessKind,
    /// Whether the base is a direct parent
    pub is_parent: bool,
}

/// A class, struct or union.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordInfo {
    /// Common part
    pub info: Info,
    /// Source positions
    pub symbol: SymbolInfo,
    /// Tag keyword
    pub tag: TagKind,
    /// Whether the record was introduced by a typedef (`typedef struct { } S;`)
    pub is_type_def: bool,
    /// Declaration specifiers
    pub flags: RecordFlags,
    /// Data members, in declaration order
    pub members: Vec<MemberTypeInfo>,
    /// Direct non-virtual bases
    pub parents: Vec<Reference>,
    /// Direct virtual bases
    pub virtual_parents: Vec<Reference>,
    /// All bases, transitively, with their details
    pub bases: Vec<BaseRecordInfo>,
    /// Nested symbols
    pub children: Scope,
    /// Template information
    pub template: Option<TemplateInfo>,
}

/// A free or member function.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FunctionInfo {
    /// Common part
    pub info: Info,
    /// Source positions
    pub symbol: SymbolInfo,
    /// Whether the function is a member function
    pub is_method: bool,
    /// Record the function is a member of
    pub parent: Option<Reference>,
    /// Return type
    pub return_type: TypeInfo,
    /// Parameters, in declaration order
    pub params: Vec<FieldTypeInfo>,
    /// Access specifier
    pub access: AccessKind,
    /// Declaration specifiers
    pub flags: FunctionFlags,
    /// Template information
    pub template: Option<TemplateInfo>,
}

/// One enumerator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnumValueInfo {
    /// Name of the enumerator
    pub name: String,
    /// Evaluated value
    pub value: i64,
    /// Initializer expression as written, empty when implicit
    pub value_expr: String,
}

/// An enumeration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnumInfo {
    /// Common part
    pub info: Info,
    /// Source positions
    pub symbol: SymbolInfo,
    /// Whether it is an `enum class`
    pub scoped: bool,
    /// Explicit underlying type
    pub base_type: Option<TypeInfo>,
    /// Enumerators, in declaration order
    pub members: Vec<EnumValueInfo>,
}

/// A typedef or alias declaration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypedefInfo {
    /// Common part
    pub info: Info,
    /// Source positions
    pub symbol: SymbolInfo,
    /// The aliased type
    pub underlying: TypeInfo,
    /// Whether it was declared with `using`
    pub is_using: bool,
}

/// A node that can be written as a top-level block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InfoNode {
    /// A namespace
    Namespace(NamespaceInfo),
    /// A class, struct or union
    Record(RecordInfo),
    /// A function
    Function(FunctionInfo),
    /// An enumeration
    Enum(EnumInfo),
    /// A typedef or alias
    Typedef(TypedefInfo),
}

impl InfoNode {
    /// The common part of the node.
    #[must_use]
    pub fn info(&self) -> &Info {
        match self {
            InfoNode::Namespace(node) => &node.info,
            InfoNode::Record(node) => &node.info,
            InfoNode::Function(node) => &node.info,
            InfoNode::Enum(node) => &node.info,
            InfoNode::Typedef(node) => &node.info,
        }
    }

    /// The kind of symbol the node describes.
    #[must_use]
    pub fn kind(&self) -> InfoKind {
        match self {
            InfoNode::Namespace(_) => InfoKind::Namespace,
            InfoNode::Record(_) => InfoKind::Record,
            InfoNode::Function(_) => InfoKind::Function,
            InfoNode::Enum(_) => InfoKind::Enum,
            InfoNode::Typedef(_) => InfoKind::Typedef,
        }
    }

    /// A reference pointing at this node.
    #[must_use]
    pub fn to_reference(&self) -> Reference {
        let info = self.info();
        Reference::new(info.id, info.name.clone(), self.kind())
    }
}

macro_rules! impl_from_node {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for InfoNode {
                fn from(node: $ty) -> Self {
                    InfoNode::$variant(node)
                }
            }
        )*
    };
}

impl_from_node!(
    Namespace(NamespaceInfo),
    Record(RecordInfo),
    Function(FunctionInfo),
    Enum(EnumInfo),
    Typedef(TypedefInfo),
);
