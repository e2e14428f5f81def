//! Symbol-table blocks.

use relf_elf::ElfFile;

use crate::render::{clip_name, SYMBOL_NAME_LIMIT, SYMBOL_NAME_PREFIX};
use crate::Result;

pub(crate) fn symbol_tables(elf: &ElfFile, wide: bool) -> Result<String> {
    let mut out = String::new();
    for table in elf.symbol_tables()? {
        out.push_str(&format!(
            "\nSymbol table '{}' contains {} entries:\n",
            table.name,
            table.symbols.len()
        ));
        out.push_str("   Num:    Value          Size Type    Bind   Vis      Ndx Name\n");
        for (index, symbol) in table.symbols.iter().enumerate() {
            let name = clip_name(&symbol.name, SYMBOL_NAME_LIMIT, SYMBOL_NAME_PREFIX, wide);
            out.push_str(&format!(
                "{index:>6}: {:016x} {:>5} {:<8}{:<6} {:<7} {:>4} {name}\n",
                symbol.value,
                symbol.size,
                symbol.type_name(),
                symbol.bind_name(),
                symbol.visibility_name(),
                symbol.ndx_string(),
            ));
        }
    }
    Ok(out)
}
