//! The identifier catalog: every block kind and record kind of the container format.
//!
//! The catalog is the schema of the format. Each [`RecordId`] declares the single
//! [`BlockId`] it may appear under and the [`AbbrevShape`] of its operands; the writer
//! derives its abbreviation definitions from these declarations and a reader validates
//! record placement against them. Adding, removing or reassigning an entry changes the
//! format and requires bumping [`FORMAT_VERSION`].
//!
//! Block id `0` is reserved for the format-info block, ids `1..8` are reserved for future
//! container use, application blocks start at [`FIRST_APPLICATION_BLOCK_ID`]. Record ids
//! start at `1`.

use strum::{EnumCount, EnumIter, IntoEnumIterator};

use crate::bitcode::abbrev::AbbrevShape;

/// Magic bytes at the start of every container.
pub const SIGNATURE: [u8; 4] = *b"DOCS";

/// Version stamped into the version block.
pub const FORMAT_VERSION: u64 = 3;

/// Block id of the format-info block, which binds abbreviations to block kinds.
pub const BLOCK_INFO_BLOCK_ID: u32 = 0;

/// First block id available to [`BlockId`].
pub const FIRST_APPLICATION_BLOCK_ID: u32 = 8;

/// Abbreviation code: closes the innermost open block.
pub const END_BLOCK: u64 = 0;
/// Abbreviation code: opens a nested block.
pub const ENTER_SUBBLOCK: u64 = 1;
/// Abbreviation code: defines an abbreviation.
pub const DEFINE_ABBREV: u64 = 2;
/// Abbreviation code: a record with self-describing `vbr` operands.
pub const UNABBREV_RECORD: u64 = 3;
/// First code assigned to application abbreviations within a block.
pub const FIRST_APPLICATION_ABBREV: u64 = 4;

/// Format-info record: following definitions apply to the given block id.
pub const BLOCKINFO_CODE_SETBID: u64 = 1;
/// Format-info record: human-readable name of the current block id.
pub const BLOCKINFO_CODE_BLOCKNAME: u64 = 2;
/// Format-info record: human-readable name of a record id within the current block id.
pub const BLOCKINFO_CODE_SETRECORDNAME: u64 = 3;

/// Block kinds of the container format.
///
/// Every node of the metadata graph that is written as a block has one entry. Lists of
/// nodes share the generic [`BlockId::List`] kind, tagged with the role of the list.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, EnumIter, EnumCount)]
#[repr(u32)]
pub enum BlockId {
    /// Holds the format version record
    Version = FIRST_APPLICATION_BLOCK_ID,
    /// A namespace
    Namespace,
    /// An enumeration
    Enum,
    /// One enumerator
    EnumValue,
    /// A type at a use site
    Type,
    /// A typed, named field
    FieldType,
    /// A data member
    MemberType,
    /// A class, struct or union
    Record,
    /// A base class description
    BaseRecord,
    /// A function
    Function,
    /// A reference to another symbol
    Reference,
    /// Template information
    Template,
    /// Template specialization information
    TemplateSpecialization,
    /// One template parameter or argument
    TemplateParam,
    /// A typedef or alias
    Typedef,
    /// An ordered list of child blocks
    List,
    /// Root of a documentation comment
    Javadoc,
    /// Comment paragraph
    JavadocParagraph,
    /// Comment brief description
    JavadocBrief,
    /// Comment call-out
    JavadocAdmonition,
    /// Comment code block
    JavadocCode,
    /// Comment return value description
    JavadocReturns,
    /// Comment parameter description
    JavadocParam,
    /// Comment template parameter description
    JavadocTParam,
    /// Plain comment text
    JavadocText,
    /// Emphasized comment text
    JavadocStyledText,
}

impl BlockId {
    /// Wire value of the block kind.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self as u32
    }

    /// Looks up the block kind with the given wire value.
    #[must_use]
    pub fn from_raw(raw: u32) -> Option<Self> {
        Self::iter().find(|block| block.raw() == raw)
    }

    /// Name recorded for the block kind in the format-info block.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            BlockId::Version => "VersionBlock",
            BlockId::Namespace => "NamespaceBlock",
            BlockId::Enum => "EnumBlock",
            BlockId::EnumValue => "EnumValueBlock",
            BlockId::Type => "TypeBlock",
            BlockId::FieldType => "FieldTypeBlock",
            BlockId::MemberType => "MemberTypeBlock",
            BlockId::Record => "RecordBlock",
            BlockId::BaseRecord => "BaseRecordBlock",
            BlockId::Function => "FunctionBlock",
            BlockId::Reference => "ReferenceBlock",
            BlockId::Template => "TemplateBlock",
            BlockId::TemplateSpecialization => "TemplateSpecializationBlock",
            BlockId::TemplateParam => "TemplateParamBlock",
            BlockId::Typedef => "TypedefBlock",
            BlockId::List => "ListBlock",
            BlockId::Javadoc => "JavadocBlock",
            BlockId::JavadocParagraph => "JavadocParagraphBlock",
            BlockId::JavadocBrief => "JavadocBriefBlock",
            BlockId::JavadocAdmonition => "JavadocAdmonitionBlock",
            BlockId::JavadocCode => "JavadocCodeBlock",
            BlockId::JavadocReturns => "JavadocReturnsBlock",
            BlockId::JavadocParam => "JavadocParamBlock",
            BlockId::JavadocTParam => "JavadocTParamBlock",
            BlockId::JavadocText => "JavadocTextBlock",
            BlockId::JavadocStyledText => "JavadocStyledTextBlock",
        }
    }

    /// Record kinds that may appear directly inside this block kind, in id order.
    pub fn records(self) -> impl Iterator<Item = RecordId> {
        RecordId::iter().filter(move |record| record.block() == self)
    }
}

macro_rules! record_catalog {
    ($(
        $(#[$meta:meta])*
        $variant:ident = $value:literal => ($block:ident, $shape:ident, $name:literal),
    )*) => {
        /// Record kinds of the container format.
        ///
        /// Each record kind belongs to exactly one [`BlockId`] and has a fixed operand
        /// [`AbbrevShape`]. Values are dense, starting at `1`.
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, EnumIter, EnumCount)]
        #[repr(u32)]
        pub enum RecordId {
            $(
                $(#[$meta])*
                $variant = $value,
            )*
        }

        impl RecordId {
            /// The block kind this record may appear in.
            #[must_use]
            pub const fn block(self) -> BlockId {
                match self {
                    $(RecordId::$variant => BlockId::$block,)*
                }
            }

            /// The operand shape of this record kind.
            #[must_use]
            pub const fn shape(self) -> AbbrevShape {
                match self {
                    $(RecordId::$variant => AbbrevShape::$shape,)*
                }
            }

            /// Name recorded for this record kind in the format-info block.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(RecordId::$variant => $name,)*
                }
            }
        }
    };
}

record_catalog! {
    /// Format version
    Version = 1 => (Version, Unsigned, "Version"),

    /// Namespace identifier
    NamespaceUsr = 2 => (Namespace, SymbolId, "USR"),
    /// Namespace name
    NamespaceName = 3 => (Namespace, String, "Name"),
    /// Namespace output path
    NamespacePath = 4 => (Namespace, String, "Path"),

    /// Enum identifier
    EnumUsr = 5 => (Enum, SymbolId, "USR"),
    /// Enum name
    EnumName = 6 => (Enum, String, "Name"),
    /// Enum output path
    EnumPath = 7 => (Enum, String, "Path"),
    /// Enum definition location
    EnumDefLocation = 8 => (Enum, Location, "DefLocation"),
    /// Enum declaration location
    EnumLocation = 9 => (Enum, Location, "Location"),
    /// Whether the enum is scoped
    EnumScoped = 10 => (Enum, Bool, "Scoped"),

    /// Enumerator name
    EnumValueName = 11 => (EnumValue, String, "Name"),
    /// Enumerator value
    EnumValueValue = 12 => (EnumValue, Integer, "Value"),
    /// Enumerator initializer expression
    EnumValueExpr = 13 => (EnumValue, String, "Expr"),

    /// Field name
    FieldTypeName = 14 => (FieldType, String, "Name"),
    /// Field default value
    FieldDefaultValue = 15 => (FieldType, String, "DefaultValue"),

    /// Member access
    MemberTypeAccess = 16 => (MemberType, Unsigned, "Access"),
    /// Member flags
    MemberTypeFlags = 17 => (MemberType, Unsigned, "Flags"),

    /// Record identifier
    RecordUsr = 18 => (Record, SymbolId, "USR"),
    /// Record name
    RecordName = 19 => (Record, String, "Name"),
    /// Record output path
    RecordPath = 20 => (Record, String, "Path"),
    /// Record definition location
    RecordDefLocation = 21 => (Record, Location, "DefLocation"),
    /// Record declaration location
    RecordLocation = 22 => (Record, Location, "Location"),
    /// Record tag keyword
    RecordTagType = 23 => (Record, Unsigned, "TagType"),
    /// Whether the record was introduced by a typedef
    RecordIsTypeDef = 24 => (Record, Bool, "IsTypeDef"),
    /// Record flags
    RecordFlags = 25 => (Record, Unsigned, "Flags"),

    /// Base record identifier
    BaseRecordUsr = 26 => (BaseRecord, SymbolId, "USR"),
    /// Base record name
    BaseRecordName = 27 => (BaseRecord, String, "Name"),
    /// Base record output path
    BaseRecordPath = 28 => (BaseRecord, String, "Path"),
    /// Base record tag keyword
    BaseRecordTagType = 29 => (BaseRecord, Unsigned, "TagType"),
    /// Whether the base is virtual
    BaseRecordIsVirtual = 30 => (BaseRecord, Bool, "IsVirtual"),
    /// Inheritance access
    BaseRecordAccess = 31 => (BaseRecord, Unsigned, "Access"),
    /// Whether the base is a direct parent
    BaseRecordIsParent = 32 => (BaseRecord, Bool, "IsParent"),

    /// Function identifier
    FunctionUsr = 33 => (Function, SymbolId, "USR"),
    /// Function name
    FunctionName = 34 => (Function, String, "Name"),
    /// Function output path
    FunctionPath = 35 => (Function, String, "Path"),
    /// Function definition location
    FunctionDefLocation = 36 => (Function, Location, "DefLocation"),
    /// Function declaration location
    FunctionLocation = 37 => (Function, Location, "Location"),
    /// Function access
    FunctionAccess = 38 => (Function, Unsigned, "Access"),
    /// Whether the function is a member function
    FunctionIsMethod = 39 => (Function, Bool, "IsMethod"),
    /// Function flags
    FunctionFlags = 40 => (Function, Unsigned, "Flags"),

    /// Reference target identifier
    ReferenceUsr = 41 => (Reference, SymbolId, "USR"),
    /// Reference target name
    ReferenceName = 42 => (Reference, String, "Name"),
    /// Reference target kind and role
    ReferenceType = 43 => (Reference, TypedRef, "RefType"),

    /// Specialized primary template
    TemplateSpecializationOf = 44 => (TemplateSpecialization, SymbolId, "SpecializationOf"),
    /// Template parameter descriptor
    TemplateParamContents = 45 => (TemplateParam, String, "Contents"),

    /// Typedef identifier
    TypedefUsr = 46 => (Typedef, SymbolId, "USR"),
    /// Typedef name
    TypedefName = 47 => (Typedef, String, "Name"),
    /// Typedef output path
    TypedefPath = 48 => (Typedef, String, "Path"),
    /// Typedef definition location
    TypedefDefLocation = 49 => (Typedef, Location, "DefLocation"),
    /// Typedef declaration location
    TypedefLocation = 50 => (Typedef, Location, "Location"),
    /// Whether the typedef is an alias declaration
    TypedefIsUsing = 51 => (Typedef, Bool, "IsUsing"),

    /// Role of a list
    ListField = 52 => (List, Unsigned, "Field"),

    /// Comment text
    JavadocTextString = 53 => (JavadocText, String, "String"),
    /// Emphasized comment text
    JavadocStyledString = 54 => (JavadocStyledText, String, "String"),
    /// Emphasis of a text run
    JavadocStyle = 55 => (JavadocStyledText, Unsigned, "Style"),
    /// Call-out kind
    JavadocAdmonish = 56 => (JavadocAdmonition, Unsigned, "Admonish"),
    /// Documented parameter name
    JavadocParamName = 57 => (JavadocParam, String, "Name"),
    /// Documented parameter direction
    JavadocParamDirection = 58 => (JavadocParam, Unsigned, "Direction"),
    /// Documented template parameter name
    JavadocTParamName = 59 => (JavadocTParam, String, "Name"),
}

impl RecordId {
    /// Wire value of the record kind.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self as u32
    }

    /// Looks up the record kind with the given wire value.
    #[must_use]
    pub fn from_raw(raw: u64) -> Option<Self> {
        Self::iter().find(|record| u64::from(record.raw()) == raw)
    }
}
