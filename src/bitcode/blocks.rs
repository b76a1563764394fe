//! Block layouts of the metadata nodes.
//!
//! Each node kind writes one block. Records for scalar fields come first, followed by
//! nested blocks for composite fields in a fixed order. Mandatory symbol ids are checked
//! before the block is opened.

use std::io::Write;

use crate::{
    bitcode::{
        ids::{BlockId, RecordId},
        writer::{BitcodeWriter, WriteBlock},
    },
    metadata::{
        BaseRecordInfo, EnumInfo, EnumValueInfo, FieldId, FieldTypeInfo, FunctionInfo, Info,
        InfoNode, MemberTypeInfo, NamespaceInfo, RecordInfo, Reference, Scope, SymbolInfo,
        TemplateInfo, TemplateParamInfo, TemplateSpecializationInfo, TypeInfo, TypedefInfo,
    },
};

/// Record kinds used for the [`Info`] part of a node kind.
struct InfoRecords {
    usr: RecordId,
    name: RecordId,
    path: RecordId,
}

/// Record kinds used for the [`SymbolInfo`] part of a node kind.
struct SymbolRecords {
    def_loc: RecordId,
    loc: RecordId,
}

fn write_info<W: Write>(writer: &mut BitcodeWriter<W>, info: &Info, records: &InfoRecords) {
    writer.emit_symbol_id(records.usr, info.id);
    writer.emit_string(records.name, &info.name);
    writer.emit_string(records.path, &info.path);
}

/// Composite part of [`Info`], written after all records of the node.
fn write_info_blocks<W: Write>(writer: &mut BitcodeWriter<W>, info: &Info) {
    writer.emit_references(FieldId::Namespace, &info.namespace);
    if let Some(javadoc) = &info.javadoc {
        javadoc.write_block(writer);
    }
}

fn write_symbol<W: Write>(
    writer: &mut BitcodeWriter<W>,
    symbol: &SymbolInfo,
    records: &SymbolRecords,
) {
    if let Some(def_loc) = &symbol.def_loc {
        writer.emit_location(records.def_loc, def_loc);
    }
    for loc in &symbol.loc {
        writer.emit_location(records.loc, loc);
    }
}

fn write_scope<W: Write>(writer: &mut BitcodeWriter<W>, scope: &Scope) {
    writer.emit_references(FieldId::ChildNamespace, &scope.namespaces);
    writer.emit_references(FieldId::ChildRecord, &scope.records);
    writer.emit_references(FieldId::ChildFunction, &scope.functions);
    writer.emit_references(FieldId::ChildTypedef, &scope.typedefs);
    writer.emit_references(FieldId::ChildEnum, &scope.enums);
}

impl WriteBlock for InfoNode {
    fn write_block<W: Write>(&self, writer: &mut BitcodeWriter<W>) {
        match self {
            InfoNode::Namespace(node) => node.write_block(writer),
            InfoNode::Record(node) => node.write_block(writer),
            InfoNode::Function(node) => node.write_block(writer),
            InfoNode::Enum(node) => node.write_block(writer),
            InfoNode::Typedef(node) => node.write_block(writer),
        }
    }
}

impl WriteBlock for Reference {
    fn write_block<W: Write>(&self, writer: &mut BitcodeWriter<W>) {
        writer.emit_reference(self, FieldId::Default);
    }
}

impl WriteBlock for NamespaceInfo {
    fn write_block<W: Write>(&self, writer: &mut BitcodeWriter<W>) {
        writer.require_symbol(BlockId::Namespace, self.info.id);

        let mut block = writer.enter_block(BlockId::Namespace);
        write_info(
            &mut block,
            &self.info,
            &InfoRecords {
                usr: RecordId::NamespaceUsr,
                name: RecordId::NamespaceName,
                path: RecordId::NamespacePath,
            },
        );
        write_info_blocks(&mut block, &self.info);
        write_scope(&mut block, &self.children);
    }
}

impl WriteBlock for RecordInfo {
    fn write_block<W: Write>(&self, writer: &mut BitcodeWriter<W>) {
        writer.require_symbol(BlockId::Record, self.info.id);

        let mut block = writer.enter_block(BlockId::Record);
        write_info(
            &mut block,
            &self.info,
            &InfoRecords {
                usr: RecordId::RecordUsr,
                name: RecordId::RecordName,
                path: RecordId::RecordPath,
            },
        );
        write_symbol(
            &mut block,
            &self.symbol,
            &SymbolRecords {
                def_loc: RecordId::RecordDefLocation,
                loc: RecordId::RecordLocation,
            },
        );
        block.emit_unsigned(RecordId::RecordTagType, self.tag as u64);
        block.emit_bool(RecordId::RecordIsTypeDef, self.is_type_def);
        block.emit_unsigned(RecordId::RecordFlags, u64::from(self.flags.bits()));

        write_info_blocks(&mut block, &self.info);
        block.emit_blocks(FieldId::Member, &self.members);
        block.emit_references(FieldId::Parent, &self.parents);
        block.emit_references(FieldId::VirtualParent, &self.virtual_parents);
        block.emit_blocks(FieldId::Base, &self.bases);
        write_scope(&mut block, &self.children);
        if let Some(template) = &self.template {
            template.write_block(&mut block);
        }
    }
}

impl WriteBlock for BaseRecordInfo {
    fn write_block<W: Write>(&self, writer: &mut BitcodeWriter<W>) {
        writer.require_symbol(BlockId::BaseRecord, self.id);

        let mut block = writer.enter_block(BlockId::BaseRecord);
        block.emit_symbol_id(RecordId::BaseRecordUsr, self.id);
        block.emit_string(RecordId::BaseRecordName, &self.name);
        block.emit_string(RecordId::BaseRecordPath, &self.path);
        block.emit_unsigned(RecordId::BaseRecordTagType, self.tag as u64);
        block.emit_bool(RecordId::BaseRecordIsVirtual, self.is_virtual);
        block.emit_unsigned(RecordId::BaseRecordAccess, self.access as u64);
        block.emit_bool(RecordId::BaseRecordIsParent, self.is_parent);
    }
}

impl WriteBlock for FunctionInfo {
    fn write_block<W: Write>(&self, writer: &mut BitcodeWriter<W>) {
        writer.require_symbol(BlockId::Function, self.info.id);

        let mut block = writer.enter_block(BlockId::Function);
        write_info(
            &mut block,
            &self.info,
            &InfoRecords {
                usr: RecordId::FunctionUsr,
                name: RecordId::FunctionName,
                path: RecordId::FunctionPath,
            },
        );
        write_symbol(
            &mut block,
            &self.symbol,
            &SymbolRecords {
                def_loc: RecordId::FunctionDefLocation,
                loc: RecordId::FunctionLocation,
            },
        );
        block.emit_bool(RecordId::FunctionIsMethod, self.is_method);
        block.emit_unsigned(RecordId::FunctionAccess, self.access as u64);
        block.emit_unsigned(RecordId::FunctionFlags, u64::from(self.flags.bits()));

        write_info_blocks(&mut block, &self.info);
        if let Some(parent) = &self.parent {
            block.emit_reference(parent, FieldId::Parent);
        }
        self.return_type.write_block(&mut block);
        block.emit_blocks(FieldId::Param, &self.params);
        if let Some(template) = &self.template {
            template.write_block(&mut block);
        }
    }
}

impl WriteBlock for EnumInfo {
    fn write_block<W: Write>(&self, writer: &mut BitcodeWriter<W>) {
        writer.require_symbol(BlockId::Enum, self.info.id);

        let mut block = writer.enter_block(BlockId::Enum);
        write_info(
            &mut block,
            &self.info,
            &InfoRecords {
                usr: RecordId::EnumUsr,
                name: RecordId::EnumName,
                path: RecordId::EnumPath,
            },
        );
        write_symbol(
            &mut block,
            &self.symbol,
            &SymbolRecords {
                def_loc: RecordId::EnumDefLocation,
                loc: RecordId::EnumLocation,
            },
        );
        block.emit_bool(RecordId::EnumScoped, self.scoped);

        write_info_blocks(&mut block, &self.info);
        if let Some(base_type) = &self.base_type {
            base_type.write_block(&mut block);
        }
        block.emit_blocks(FieldId::EnumValue, &self.members);
    }
}

impl WriteBlock for EnumValueInfo {
    fn write_block<W: Write>(&self, writer: &mut BitcodeWriter<W>) {
        let mut block = writer.enter_block(BlockId::EnumValue);
        block.emit_string(RecordId::EnumValueName, &self.name);
        block.emit_integer(RecordId::EnumValueValue, self.value);
        block.emit_string(RecordId::EnumValueExpr, &self.value_expr);
    }
}

impl WriteBlock for TypeInfo {
    fn write_block<W: Write>(&self, writer: &mut BitcodeWriter<W>) {
        let mut block = writer.enter_block(BlockId::Type);
        block.emit_reference(&self.type_ref, FieldId::Type);
    }
}

impl WriteBlock for TypedefInfo {
    fn write_block<W: Write>(&self, writer: &mut BitcodeWriter<W>) {
        writer.require_symbol(BlockId::Typedef, self.info.id);

        let mut block = writer.enter_block(BlockId::Typedef);
        write_info(
            &mut block,
            &self.info,
            &InfoRecords {
                usr: RecordId::TypedefUsr,
                name: RecordId::TypedefName,
                path: RecordId::TypedefPath,
            },
        );
        write_symbol(
            &mut block,
            &self.symbol,
            &SymbolRecords {
                def_loc: RecordId::TypedefDefLocation,
                loc: RecordId::TypedefLocation,
            },
        );
        block.emit_bool(RecordId::TypedefIsUsing, self.is_using);

        write_info_blocks(&mut block, &self.info);
        self.underlying.write_block(&mut block);
    }
}

impl WriteBlock for FieldTypeInfo {
    fn write_block<W: Write>(&self, writer: &mut BitcodeWriter<W>) {
        let mut block = writer.enter_block(BlockId::FieldType);
        block.emit_string(RecordId::FieldTypeName, &self.name);
        block.emit_string(RecordId::FieldDefaultValue, &self.default_value);
        self.type_info.write_block(&mut block);
    }
}

impl WriteBlock for MemberTypeInfo {
    fn write_block<W: Write>(&self, writer: &mut BitcodeWriter<W>) {
        let mut block = writer.enter_block(BlockId::MemberType);
        block.emit_unsigned(RecordId::MemberTypeAccess, self.access as u64);
        block.emit_unsigned(RecordId::MemberTypeFlags, u64::from(self.flags.bits()));
        self.field.write_block(&mut block);
        if let Some(javadoc) = &self.javadoc {
            javadoc.write_block(&mut block);
        }
    }
}

impl WriteBlock for TemplateInfo {
    fn write_block<W: Write>(&self, writer: &mut BitcodeWriter<W>) {
        let mut block = writer.enter_block(BlockId::Template);
        block.emit_blocks(FieldId::TemplateParam, &self.params);
        if let Some(specialization) = &self.specialization {
            specialization.write_block(&mut block);
        }
    }
}

impl WriteBlock for TemplateSpecializationInfo {
    fn write_block<W: Write>(&self, writer: &mut BitcodeWriter<W>) {
        let mut block = writer.enter_block(BlockId::TemplateSpecialization);
        block.emit_symbol_id(RecordId::TemplateSpecializationOf, self.specialization_of);
        block.emit_blocks(FieldId::TemplateParam, &self.params);
    }
}

impl WriteBlock for TemplateParamInfo {
    fn write_block<W: Write>(&self, writer: &mut BitcodeWriter<W>) {
        let mut block = writer.enter_block(BlockId::TemplateParam);
        block.emit_string(RecordId::TemplateParamContents, &self.contents);
    }
}
