//! # docscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the docscope library. Import this module to get quick access to the metadata graph
//! and the writer.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all docscope operations
pub use crate::Error;

/// The result type used throughout docscope
pub use crate::Result;

// ================================================================================================
// Writer
// ================================================================================================

/// Writes metadata nodes into a container
pub use crate::bitcode::{BitcodeWriter, BlockGuard, WriteBlock};

/// The block and record catalog
pub use crate::bitcode::{BlockId, RecordId, FORMAT_VERSION, SIGNATURE};

/// Parallel serialization of independent units
pub use crate::bitcode::{write_units, ExtractedUnit, SerializeConfig};

// ================================================================================================
// Metadata Graph
// ================================================================================================

/// Node types and their parts
pub use crate::metadata::{
    BaseRecordInfo, EnumInfo, EnumValueInfo, FieldTypeInfo, FunctionInfo, Info, InfoNode,
    Location, MemberTypeInfo, NamespaceInfo, RecordInfo, Reference, Scope, SymbolInfo, TypeInfo,
    TypedefInfo,
};

/// Templates
pub use crate::metadata::{TemplateInfo, TemplateParamInfo, TemplateSpecializationInfo};

/// Qualifiers and flags
pub use crate::metadata::{
    AccessKind, FieldId, FunctionFlags, InfoKind, MemberFlags, RecordFlags, TagKind,
};

/// Symbol identity
pub use crate::metadata::SymbolId;

/// Documentation comments
pub use crate::metadata::javadoc::Javadoc;
