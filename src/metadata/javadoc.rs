//! Structured documentation comments.
//!
//! A [`Javadoc`] is the parsed form of the documentation comment attached to a declaration.
//! Its tree has two levels: block level nodes ([`Block`]: paragraphs, briefs, admonitions,
//! code blocks, returns/param/tparam descriptions) whose children are inline nodes
//! ([`Inline`]: plain and styled text runs). Children are kept in document order.
//!
//! # Examples
//!
//! ```rust
//! use docscope::metadata::javadoc::{Block, Javadoc, Paragraph, Style};
//!
//! let doc = Javadoc::new(vec![
//!     Block::Brief(Paragraph::from_text("Adds two numbers.")),
//!     Block::Paragraph(
//!         Paragraph::default()
//!             .with_text("Overflow is ")
//!             .with_styled("undefined", Style::Bold),
//!     ),
//! ]);
//!
//! assert_eq!(doc.brief().map(|p| p.children.len()), Some(1));
//! assert_eq!(doc.blocks.len(), 2);
//! ```

use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// Emphasis applied to a [`StyledText`] run.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, EnumIter, EnumCount)]
#[repr(u8)]
pub enum Style {
    /// Plain
    #[default]
    None = 0,
    /// Monospaced (`@c`, `<tt>`)
    Mono = 1,
    /// Bold (`@b`)
    Bold = 2,
    /// Italic (`@e`, `@a`)
    Italic = 3,
}

/// Kind of an [`Admonition`] block.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, EnumIter, EnumCount)]
#[repr(u8)]
pub enum Admonish {
    /// Unspecified
    #[default]
    None = 0,
    /// `@note`
    Note = 1,
    /// `@remark`
    Tip = 2,
    /// `@important`
    Important = 3,
    /// `@attention`
    Caution = 4,
    /// `@warning`
    Warning = 5,
}

/// Direction of a documented function parameter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, EnumIter, EnumCount)]
#[repr(u8)]
pub enum ParamDirection {
    /// Not specified
    #[default]
    None = 0,
    /// `[in]`
    In = 1,
    /// `[out]`
    Out = 2,
    /// `[in,out]`
    InOut = 3,
}

impl_from_raw!(Style, Admonish, ParamDirection);

/// A run of plain text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Text {
    /// The text content
    pub string: String,
}

/// A run of emphasized text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyledText {
    /// The text content
    pub string: String,
    /// The emphasis applied to it
    pub style: Style,
}

/// Inline comment node, a child of a block level node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inline {
    /// Plain text
    Text(Text),
    /// Emphasized text
    Styled(StyledText),
}

/// A sequence of inline nodes.
///
/// Also the content model of briefs, code blocks and `@returns` descriptions, which only
/// differ from a paragraph by their block kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Paragraph {
    /// Inline children in document order
    pub children: Vec<Inline>,
}

impl Paragraph {
    /// A paragraph holding a single plain text run.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Paragraph::default().with_text(text)
    }

    /// Appends a plain text run.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Inline::Text(Text {
            string: text.into(),
        }));
        self
    }

    /// Appends an emphasized text run.
    #[must_use]
    pub fn with_styled(mut self, text: impl Into<String>, style: Style) -> Self {
        self.children.push(Inline::Styled(StyledText {
            string: text.into(),
            style,
        }));
        self
    }
}

/// A note, warning or similar call-out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Admonition {
    /// Which kind of call-out
    pub admonish: Admonish,
    /// Inline children in document order
    pub children: Vec<Inline>,
}

/// Description of a function parameter (`@param`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Param {
    /// Name of the documented parameter
    pub name: String,
    /// Declared direction
    pub direction: ParamDirection,
    /// Inline children in document order
    pub children: Vec<Inline>,
}

/// Description of a template parameter (`@tparam`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TParam {
    /// Name of the documented template parameter
    pub name: String,
    /// Inline children in document order
    pub children: Vec<Inline>,
}

/// Block level comment node, a child of the [`Javadoc`] root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    /// An ordinary paragraph
    Paragraph(Paragraph),
    /// The brief description (`@brief` or the first sentence)
    Brief(Paragraph),
    /// A call-out
    Admonition(Admonition),
    /// A code block (`@code`)
    Code(Paragraph),
    /// Description of the return value (`@returns`)
    Returns(Paragraph),
    /// Description of a parameter
    Param(Param),
    /// Description of a template parameter
    TParam(TParam),
}

/// Root of a structured documentation comment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Javadoc {
    /// Block level children in document order
    pub blocks: Vec<Block>,
}

impl Javadoc {
    /// Creates a comment from its blocks.
    #[must_use]
    pub fn new(blocks: Vec<Block>) -> Self {
        Javadoc { blocks }
    }

    /// The first brief description, if any.
    #[must_use]
    pub fn brief(&self) -> Option<&Paragraph> {
        self.blocks.iter().find_map(|block| match block {
            Block::Brief(paragraph) => Some(paragraph),
            _ => None,
        })
    }

    /// The `@returns` description, if any.
    #[must_use]
    pub fn returns(&self) -> Option<&Paragraph> {
        self.blocks.iter().find_map(|block| match block {
            Block::Returns(paragraph) => Some(paragraph),
            _ => None,
        })
    }

    /// All parameter descriptions in document order.
    pub fn params(&self) -> impl Iterator<Item = &Param> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Param(param) => Some(param),
            _ => None,
        })
    }
}
