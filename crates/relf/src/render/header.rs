//! ELF header block.

use relf_elf::ElfFile;

/// Label column width shared by every header field line.
const LABEL_WIDTH: usize = 35;

fn push_field(out: &mut String, label: &str, value: &dyn std::fmt::Display) {
    out.push_str(&format!("  {label:<LABEL_WIDTH$}{value}\n"));
}

pub(crate) fn file_header(elf: &ElfFile) -> String {
    let h = elf.header();
    let mut out = String::from("ELF Header:\n  Magic:   ");
    for byte in h.ident {
        out.push_str(&format!("{byte:02x} "));
    }
    out.push('\n');

    push_field(&mut out, "Class:", &h.class_name());
    push_field(&mut out, "Data:", &h.data_name());
    push_field(
        &mut out,
        "Version:",
        &format!("{} ({})", h.e_version, h.version_name()),
    );
    push_field(&mut out, "OS/ABI:", &h.osabi_name());
    push_field(&mut out, "ABI Version:", &h.abi_version());
    push_field(&mut out, "Type:", &h.type_name());
    push_field(&mut out, "Machine:", &h.machine_name());
    push_field(&mut out, "Version:", &format!("0x{:x}", h.e_version));
    push_field(
        &mut out,
        "Entry point address:",
        &format!("0x{:x}", h.e_entry),
    );
    push_field(
        &mut out,
        "Start of program headers:",
        &format!("{} (bytes into file)", h.e_phoff),
    );
    push_field(
        &mut out,
        "Start of section headers:",
        &format!("{} (bytes into file)", h.e_shoff),
    );
    push_field(&mut out, "Flags:", &format!("0x{:x}", h.e_flags));
    push_field(
        &mut out,
        "Size of this header:",
        &format!("{} (bytes)", h.e_ehsize),
    );
    push_field(
        &mut out,
        "Size of program headers:",
        &format!("{} (bytes)", h.e_phentsize),
    );
    push_field(&mut out, "Number of program headers:", &h.e_phnum);
    push_field(
        &mut out,
        "Size of section headers:",
        &format!("{} (bytes)", h.e_shentsize),
    );
    push_field(&mut out, "Number of section headers:", &h.e_shnum);
    push_field(
        &mut out,
        "Section header string table index:",
        &h.e_shstrndx,
    );
    out
}
