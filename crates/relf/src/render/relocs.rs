//! Relocation-table blocks.

use relf_elf::ElfFile;

use crate::Result;

pub(crate) fn relocation_tables(elf: &ElfFile) -> Result<String> {
    let tables = elf.relocation_tables()?;
    if tables.is_empty() {
        // Distinct terminal state: never a banner with zero rows.
        return Ok("\nThere are no relocations in this file.\n".to_owned());
    }

    let mut out = String::new();
    for table in tables {
        out.push_str(&format!(
            "\nRelocation section '{}' at offset 0x{:x} contains {} entries:\n",
            table.name,
            table.offset,
            table.entries.len()
        ));
        out.push_str(
            "  Offset          Info           Type           Sym. Value    Sym. Name + Addend\n",
        );
        for entry in &table.entries {
            let sign = if entry.r_addend < 0 { '-' } else { '+' };
            out.push_str(&format!(
                "{:012x}  {:012x} {:<18}{:016} {} {sign} {}\n",
                entry.r_offset,
                entry.r_info,
                entry.type_name(),
                entry.symbol_value,
                entry.symbol_name,
                entry.r_addend.unsigned_abs(),
            ));
        }
    }
    Ok(out)
}
