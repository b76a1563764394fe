use proptest::prelude::*;

use crate::metadata::{
    javadoc::{Block, Javadoc, Paragraph, Param, ParamDirection, Style},
    AccessKind, BaseRecordInfo, EnumInfo, EnumValueInfo, FieldTypeInfo, FunctionFlags,
    FunctionInfo, Info, InfoKind, Location, MemberFlags, MemberTypeInfo, NamespaceInfo,
    RecordFlags, RecordInfo, Reference, Scope, SymbolId, SymbolInfo, TagKind, TemplateInfo,
    TemplateParamInfo, TemplateSpecializationInfo, TypeInfo, TypedefInfo,
};

// Helper function to create a reference to a named symbol
pub fn create_reference(usr: &str, name: &str, kind: InfoKind) -> Reference {
    Reference::new(SymbolId::from_usr(usr), name, kind)
}

// Helper function to create the common part of a node nested in `ns`
pub fn create_info(usr: &str, name: &str) -> Info {
    Info {
        id: SymbolId::from_usr(usr),
        name: name.to_string(),
        path: format!("ns/{name}"),
        namespace: vec![create_reference("c:@N@ns", "ns", InfoKind::Namespace)],
        javadoc: None,
    }
}

// Helper function to create source positions with one definition and two declarations
pub fn create_symbol_info(line: u32) -> SymbolInfo {
    SymbolInfo {
        def_loc: Some(Location::new(line, "src/impl.cpp", true)),
        loc: vec![
            Location::new(line + 100, "include/api.hpp", true),
            Location::new(7, "/usr/include/stddef.h", false),
        ],
    }
}

// Helper function to create a short documentation comment
pub fn create_javadoc(brief: &str) -> Javadoc {
    Javadoc::new(vec![
        Block::Brief(Paragraph::from_text(brief)),
        Block::Paragraph(
            Paragraph::from_text("See ")
                .with_styled("details", Style::Italic)
                .with_text("."),
        ),
    ])
}

pub fn create_namespace(name: &str) -> NamespaceInfo {
    let usr = format!("c:@N@ns@N@{name}");
    let mut info = create_info(&usr, name);
    info.javadoc = Some(create_javadoc("A namespace."));

    NamespaceInfo {
        info,
        children: Scope {
            namespaces: vec![create_reference(
                &format!("{usr}@N@detail"),
                "detail",
                InfoKind::Namespace,
            )],
            records: vec![
                create_reference(&format!("{usr}@S@A"), "A", InfoKind::Record),
                create_reference(&format!("{usr}@S@B"), "B", InfoKind::Record),
            ],
            functions: vec![create_reference(
                &format!("{usr}@F@run#"),
                "run",
                InfoKind::Function,
            )],
            typedefs: Vec::new(),
            enums: vec![create_reference(
                &format!("{usr}@E@Mode"),
                "Mode",
                InfoKind::Enum,
            )],
        },
    }
}

pub fn create_member(name: &str, type_name: &str, access: AccessKind) -> MemberTypeInfo {
    MemberTypeInfo {
        field: FieldTypeInfo {
            type_info: TypeInfo::builtin(type_name),
            name: name.to_string(),
            default_value: String::new(),
        },
        access,
        flags: MemberFlags::empty(),
        javadoc: None,
    }
}

pub fn create_record(name: &str) -> RecordInfo {
    let usr = format!("c:@N@ns@S@{name}");
    let base = create_reference("c:@N@ns@S@Base", "Base", InfoKind::Record);

    let mut counter = create_member("count", "int", AccessKind::Private);
    counter.field.default_value = "0".to_string();
    counter.flags = MemberFlags::IS_MUTABLE;
    counter.javadoc = Some(create_javadoc("Number of uses."));

    RecordInfo {
        info: create_info(&usr, name),
        symbol: create_symbol_info(12),
        tag: TagKind::Class,
        is_type_def: false,
        flags: RecordFlags::IS_FINAL,
        members: vec![create_member("id", "long", AccessKind::Public), counter],
        parents: vec![base.clone()],
        virtual_parents: Vec::new(),
        bases: vec![BaseRecordInfo {
            id: base.id,
            name: base.name.clone(),
            path: "ns".to_string(),
            tag: TagKind::Struct,
            is_virtual: false,
            access: AccessKind::Public,
            is_parent: true,
        }],
        children: Scope {
            functions: vec![create_reference(
                &format!("{usr}@F@get#1"),
                "get",
                InfoKind::Function,
            )],
            ..Scope::default()
        },
        template: Some(TemplateInfo {
            params: Vec::new(),
            specialization: Some(TemplateSpecializationInfo {
                specialization_of: SymbolId::from_usr("c:@N@ns@ST>1#T@Holder"),
                params: vec![TemplateParamInfo::new("int")],
            }),
        }),
    }
}

// Helper function to create a function with `params` parameters and one template parameter
pub fn create_function(name: &str, params: usize) -> FunctionInfo {
    let usr = format!("c:@N@ns@F@{name}#");
    let mut info = create_info(&usr, name);
    info.javadoc = Some(Javadoc::new(vec![
        Block::Brief(Paragraph::from_text("Does the work.")),
        Block::Param(Param {
            name: "p0".to_string(),
            direction: ParamDirection::In,
            children: Paragraph::from_text("first").children,
        }),
    ]));

    FunctionInfo {
        info,
        symbol: create_symbol_info(40),
        is_method: false,
        parent: None,
        return_type: TypeInfo::new(create_reference(
            "c:@N@ns@S@Result",
            "Result",
            InfoKind::Record,
        )),
        params: (0..params)
            .map(|index| FieldTypeInfo {
                type_info: TypeInfo::builtin("double"),
                name: format!("p{index}"),
                default_value: if index == 2 {
                    "1.0".to_string()
                } else {
                    String::new()
                },
            })
            .collect(),
        access: AccessKind::None,
        flags: FunctionFlags::IS_NOEXCEPT | FunctionFlags::IS_CONSTEXPR,
        template: Some(TemplateInfo {
            params: vec![TemplateParamInfo::new("typename T")],
            specialization: None,
        }),
    }
}

pub fn create_enum(name: &str) -> EnumInfo {
    let usr = format!("c:@N@ns@E@{name}");
    EnumInfo {
        info: create_info(&usr, name),
        symbol: create_symbol_info(3),
        scoped: true,
        base_type: Some(TypeInfo::builtin("unsigned char")),
        members: vec![
            EnumValueInfo {
                name: "Red".to_string(),
                value: 0,
                value_expr: String::new(),
            },
            EnumValueInfo {
                name: "Green".to_string(),
                value: -4,
                value_expr: "-4".to_string(),
            },
            EnumValueInfo {
                name: "Blue".to_string(),
                value: i64::MAX,
                value_expr: "INT64_MAX".to_string(),
            },
        ],
    }
}

pub fn create_typedef(name: &str) -> TypedefInfo {
    TypedefInfo {
        info: create_info(&format!("c:@N@ns@T@{name}"), name),
        symbol: SymbolInfo {
            def_loc: None,
            loc: vec![Location::new(88, "include/types.hpp", true)],
        },
        underlying: TypeInfo::builtin("unsigned long"),
        is_using: true,
    }
}

/// Strategy producing non-zero symbol ids.
pub fn symbol_strategy() -> impl Strategy<Value = SymbolId> {
    any::<[u8; 20]>().prop_map(|mut bytes| {
        bytes[0] |= 1;
        SymbolId::new(bytes)
    })
}
