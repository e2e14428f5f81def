//! Section-header table block.

use relf_elf::ElfFile;

use crate::render::{clip_name, SECTION_NAME_LIMIT, SECTION_NAME_PREFIX};
use crate::Result;

const FLAG_LEGEND: &str = "Key to Flags:\n  \
    W (write), A (alloc), X (execute), M (merge), S (strings), I (info),\n  \
    L (link order), O (extra OS processing required), G (group), T (TLS),\n  \
    C (compressed), x (unknown), o (OS specific), E (exclude),\n  \
    D (mbind), l (large), p (processor specific)\n";

pub(crate) fn section_table(elf: &ElfFile, wide: bool) -> Result<String> {
    let header = elf.header();
    let mut out = format!(
        "There are {} section headers, starting at offset 0x{:x}:\n",
        header.e_shnum, header.e_shoff
    );
    if header.e_shnum > 1 {
        out.push_str("\nSection Headers:\n");
    } else {
        out.push_str("\nSection Header:\n");
    }
    out.push_str("  [Nr] Name              Type             Address           Offset\n");
    out.push_str("       Size              EntSize          Flags  Link  Info  Align\n");

    for (index, section) in elf.sections().iter().enumerate() {
        let name = clip_name(
            &elf.section_name(section)?,
            SECTION_NAME_LIMIT,
            SECTION_NAME_PREFIX,
            wide,
        );
        out.push_str(&format!(
            "  [{index:>2}] {name:<17} {:<16} {:016x}  {:08x}\n",
            section.type_name(),
            section.sh_addr,
            section.sh_offset,
        ));
        out.push_str(&format!(
            "       {:016x}  {:016x} {:>3}{:>8}{:>6}     {}\n",
            section.sh_size,
            section.sh_entsize,
            section.flag_letters(),
            section.sh_link,
            section.sh_info,
            section.sh_addralign,
        ));
    }

    out.push_str(FLAG_LEGEND);
    Ok(out)
}
