#![no_main]

use docscope::prelude::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let (head, text) = data.split_at(data.len().min(8));
    let mut seed = [0u8; 8];
    seed[..head.len()].copy_from_slice(head);
    let value = i64::from_le_bytes(seed);
    let text = String::from_utf8_lossy(text).into_owned();

    let id = SymbolId::from_usr(&text);
    let mut enumeration = EnumInfo {
        info: Info::new(id, text.clone()),
        symbol: SymbolInfo {
            def_loc: Some(Location::new(value as u32, text.clone(), value < 0)),
            loc: Vec::new(),
        },
        scoped: value & 1 == 1,
        ..EnumInfo::default()
    };
    enumeration.members.push(EnumValueInfo {
        name: text.clone(),
        value,
        value_expr: text,
    });

    let mut writer = match BitcodeWriter::new(Vec::new()) {
        Ok(writer) => writer,
        Err(_) => return,
    };
    if writer.dispatch_info(&InfoNode::Enum(enumeration)).is_ok() {
        let _ = writer.finish();
    }
});
