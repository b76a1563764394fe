//! Qualifiers, role tags and flag sets shared by the metadata node types.
//!
//! # Key Types
//! - [`InfoKind`]: which kind of symbol a [`crate::metadata::Reference`] points at
//! - [`FieldId`]: the structural role a reference or list plays inside its parent
//! - [`AccessKind`], [`TagKind`]: member access and record tag qualifiers
//! - [`RecordFlags`], [`FunctionFlags`], [`MemberFlags`]: declaration specifier bit sets
//!
//! All enums have dense `u8` discriminants that are written to the wire unchanged, and a
//! `from_raw` lookup for the opposite direction.

use bitflags::bitflags;
use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// Kind of symbol described by an info node or targeted by a reference.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, EnumIter, EnumCount)]
#[repr(u8)]
pub enum InfoKind {
    /// Unknown or not applicable, e.g. a builtin type
    #[default]
    Default = 0,
    /// A namespace
    Namespace = 1,
    /// A class, struct or union
    Record = 2,
    /// A free function or member function
    Function = 3,
    /// An enumeration
    Enum = 4,
    /// A typedef or alias declaration
    Typedef = 5,
}

/// The role a reference (or a list of nodes) plays inside its parent node.
///
/// The same [`crate::metadata::Reference`] shape is used for base classes, return types,
/// enclosing namespaces and child symbols; the role tag written next to it is what tells
/// them apart on the wire.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, EnumIter, EnumCount)]
#[repr(u8)]
pub enum FieldId {
    /// No particular role
    #[default]
    Default = 0,
    /// Enclosing namespace chain of a symbol
    Namespace = 1,
    /// Parent record of a method, or a direct base of a record
    Parent = 2,
    /// Virtual base of a record
    VirtualParent = 3,
    /// The referenced type of a type node
    Type = 4,
    /// Child namespaces of a scope
    ChildNamespace = 5,
    /// Child records of a scope
    ChildRecord = 6,
    /// Child functions of a scope
    ChildFunction = 7,
    /// Child typedefs of a scope
    ChildTypedef = 8,
    /// Child enums of a scope
    ChildEnum = 9,
    /// Base record descriptions of a record
    Base = 10,
    /// Data members of a record
    Member = 11,
    /// Parameters of a function
    Param = 12,
    /// Enumerators of an enum
    EnumValue = 13,
    /// Template parameters or arguments
    TemplateParam = 14,
    /// Top level blocks of a documentation comment
    JavadocBlock = 15,
    /// Inline children of a documentation paragraph
    JavadocInline = 16,
}

/// Member access specifier. The discriminants follow clang's `AccessSpecifier`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, EnumIter, EnumCount)]
#[repr(u8)]
pub enum AccessKind {
    /// `public`
    Public = 0,
    /// `protected`
    Protected = 1,
    /// `private`
    Private = 2,
    /// No access specifier applies (namespace scope)
    #[default]
    None = 3,
}

/// Tag keyword a record was declared with. The discriminants follow clang's `TagTypeKind`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, EnumIter, EnumCount)]
#[repr(u8)]
pub enum TagKind {
    /// `struct`
    #[default]
    Struct = 0,
    /// `__interface`
    Interface = 1,
    /// `union`
    Union = 2,
    /// `class`
    Class = 3,
    /// `enum`
    Enum = 4,
}

impl_from_raw!(InfoKind, FieldId, AccessKind, TagKind);

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// Declaration specifiers of a record
    pub struct RecordFlags: u32 {
        /// Declared `final`
        const IS_FINAL = 0x0001;
        /// The destructor is declared `final`
        const IS_FINAL_DESTRUCTOR = 0x0002;
        /// The record is an anonymous struct or union
        const IS_ANONYMOUS = 0x0004;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// Declaration specifiers of a function
    pub struct FunctionFlags: u32 {
        /// Takes a C-style variadic argument list
        const IS_VARIADIC = 0x0001;
        /// Declared `virtual`
        const IS_VIRTUAL = 0x0002;
        /// Pure virtual (`= 0`)
        const IS_PURE = 0x0004;
        /// Explicitly defaulted (`= default`)
        const IS_DEFAULTED = 0x0008;
        /// Explicitly deleted (`= delete`)
        const IS_DELETED = 0x0010;
        /// Marked `override`
        const IS_OVERRIDE = 0x0020;
        /// Uses a trailing return type
        const HAS_TRAILING_RETURN = 0x0040;
        /// `const` member function
        const IS_CONST = 0x0080;
        /// `volatile` member function
        const IS_VOLATILE = 0x0100;
        /// Declared `constexpr`
        const IS_CONSTEXPR = 0x0200;
        /// Declared `consteval`
        const IS_CONSTEVAL = 0x0400;
        /// Declared `noexcept`
        const IS_NOEXCEPT = 0x0800;
        /// Declared `[[nodiscard]]`
        const IS_NODISCARD = 0x1000;
        /// Declared `[[noreturn]]`
        const IS_NORETURN = 0x2000;
        /// Declared `static`
        const IS_STATIC = 0x4000;
        /// Declared `explicit`
        const IS_EXPLICIT = 0x8000;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// Declaration specifiers of a data member
    pub struct MemberFlags: u32 {
        /// Declared `mutable`
        const IS_MUTABLE = 0x0001;
        /// Declared as a bit-field
        const IS_BITFIELD = 0x0002;
        /// Declared `[[no_unique_address]]`
        const NO_UNIQUE_ADDRESS = 0x0004;
        /// Declared `[[deprecated]]`
        const IS_DEPRECATED = 0x0008;
    }
}

impl Default for RecordFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl Default for FunctionFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl Default for MemberFlags {
    fn default() -> Self {
        Self::empty()
    }
}
