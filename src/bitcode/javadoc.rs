//! Block layouts of the documentation comment tree.
//!
//! The comment root writes a [`BlockId::Javadoc`] block holding one list of block level
//! nodes. Every block level node kind has its own block kind; its scalar fields are records
//! and its inline children follow as a list. Inline nodes are leaf blocks.

use std::io::Write;

use crate::{
    bitcode::{
        ids::{BlockId, RecordId},
        writer::{BitcodeWriter, WriteBlock},
    },
    metadata::{
        javadoc::{Block, Inline, Javadoc},
        FieldId,
    },
};

impl WriteBlock for Javadoc {
    fn write_block<W: Write>(&self, writer: &mut BitcodeWriter<W>) {
        let mut block = writer.enter_block(BlockId::Javadoc);
        block.emit_blocks(FieldId::JavadocBlock, &self.blocks);
    }
}

/// Writes a block kind whose only content is a list of inline children.
fn write_inline_block<W: Write>(
    writer: &mut BitcodeWriter<W>,
    kind: BlockId,
    children: &[Inline],
) {
    let mut block = writer.enter_block(kind);
    block.emit_blocks(FieldId::JavadocInline, children);
}

impl WriteBlock for Block {
    fn write_block<W: Write>(&self, writer: &mut BitcodeWriter<W>) {
        match self {
            Block::Paragraph(paragraph) => {
                write_inline_block(writer, BlockId::JavadocParagraph, &paragraph.children);
            }
            Block::Brief(paragraph) => {
                write_inline_block(writer, BlockId::JavadocBrief, &paragraph.children);
            }
            Block::Code(paragraph) => {
                write_inline_block(writer, BlockId::JavadocCode, &paragraph.children);
            }
            Block::Returns(paragraph) => {
                write_inline_block(writer, BlockId::JavadocReturns, &paragraph.children);
            }
            Block::Admonition(admonition) => {
                let mut block = writer.enter_block(BlockId::JavadocAdmonition);
                block.emit_unsigned(RecordId::JavadocAdmonish, admonition.admonish as u64);
                block.emit_blocks(FieldId::JavadocInline, &admonition.children);
            }
            Block::Param(param) => {
                let mut block = writer.enter_block(BlockId::JavadocParam);
                block.emit_string(RecordId::JavadocParamName, &param.name);
                block.emit_unsigned(RecordId::JavadocParamDirection, param.direction as u64);
                block.emit_blocks(FieldId::JavadocInline, &param.children);
            }
            Block::TParam(tparam) => {
                let mut block = writer.enter_block(BlockId::JavadocTParam);
                block.emit_string(RecordId::JavadocTParamName, &tparam.name);
                block.emit_blocks(FieldId::JavadocInline, &tparam.children);
            }
        }
    }
}

impl WriteBlock for Inline {
    fn write_block<W: Write>(&self, writer: &mut BitcodeWriter<W>) {
        match self {
            Inline::Text(text) => {
                let mut block = writer.enter_block(BlockId::JavadocText);
                block.emit_string(RecordId::JavadocTextString, &text.string);
            }
            Inline::Styled(styled) => {
                let mut block = writer.enter_block(BlockId::JavadocStyledText);
                block.emit_string(RecordId::JavadocStyledString, &styled.string);
                block.emit_unsigned(RecordId::JavadocStyle, styled.style as u64);
            }
        }
    }
}
