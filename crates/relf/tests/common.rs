//! Shared synthetic-image builders for integration tests.

#![allow(dead_code)]

pub const SHOFF: u64 = 256;
pub const SHSTRTAB_OFF: u64 = 64;
pub const STRTAB_OFF: u64 = 108;
pub const SYMTAB_OFF: u64 = 128;
pub const RELA_OFF: u64 = 200;

pub fn put(data: &mut Vec<u8>, offset: usize, bytes: &[u8]) {
    if data.len() < offset + bytes.len() {
        data.resize(offset + bytes.len(), 0);
    }
    data[offset..offset + bytes.len()].copy_from_slice(bytes);
}

pub fn ehdr(shoff: u64, shnum: u16, shstrndx: u16) -> [u8; 64] {
    let mut h = [0u8; 64];
    h[0..4].copy_from_slice(&[0x7f, 0x45, 0x4c, 0x46]);
    h[4] = 2; // ELF64
    h[5] = 1; // little endian
    h[6] = 1;
    h[16..18].copy_from_slice(&1u16.to_le_bytes()); // ET_REL
    h[18..20].copy_from_slice(&62u16.to_le_bytes()); // EM_X86_64
    h[20..24].copy_from_slice(&1u32.to_le_bytes());
    h[40..48].copy_from_slice(&shoff.to_le_bytes());
    h[52..54].copy_from_slice(&64u16.to_le_bytes());
    h[58..60].copy_from_slice(&64u16.to_le_bytes());
    h[60..62].copy_from_slice(&shnum.to_le_bytes());
    h[62..64].copy_from_slice(&shstrndx.to_le_bytes());
    h
}

#[allow(clippy::too_many_arguments)]
pub fn shdr(
    name: u32,
    sh_type: u32,
    flags: u64,
    addr: u64,
    offset: u64,
    size: u64,
    link: u32,
    info: u32,
    align: u64,
    entsize: u64,
) -> [u8; 64] {
    let mut s = [0u8; 64];
    s[0..4].copy_from_slice(&name.to_le_bytes());
    s[4..8].copy_from_slice(&sh_type.to_le_bytes());
    s[8..16].copy_from_slice(&flags.to_le_bytes());
    s[16..24].copy_from_slice(&addr.to_le_bytes());
    s[24..32].copy_from_slice(&offset.to_le_bytes());
    s[32..40].copy_from_slice(&size.to_le_bytes());
    s[40..44].copy_from_slice(&link.to_le_bytes());
    s[44..48].copy_from_slice(&info.to_le_bytes());
    s[48..56].copy_from_slice(&align.to_le_bytes());
    s[56..64].copy_from_slice(&entsize.to_le_bytes());
    s
}

pub fn sym(name: u32, info: u8, shndx: u16, value: u64, size: u64) -> [u8; 24] {
    let mut s = [0u8; 24];
    s[0..4].copy_from_slice(&name.to_le_bytes());
    s[4] = info;
    s[6..8].copy_from_slice(&shndx.to_le_bytes());
    s[8..16].copy_from_slice(&value.to_le_bytes());
    s[16..24].copy_from_slice(&size.to_le_bytes());
    s
}

pub fn rela_entry(offset: u64, symbol: u64, type_code: u32, addend: i64) -> [u8; 24] {
    let mut r = [0u8; 24];
    let info = (symbol << 32) | u64::from(type_code);
    r[0..8].copy_from_slice(&offset.to_le_bytes());
    r[8..16].copy_from_slice(&info.to_le_bytes());
    r[16..24].copy_from_slice(&addend.to_le_bytes());
    r
}

/// Six sections: NULL, .text, .symtab (3 symbols), .strtab, .rela.text
/// (2 entries: main - 4 and .text + 5), .shstrtab.
pub fn fixture() -> Vec<u8> {
    let mut data = Vec::new();
    put(&mut data, 0, &ehdr(SHOFF, 6, 5));

    put(
        &mut data,
        SHSTRTAB_OFF as usize,
        b"\0.text\0.symtab\0.strtab\0.rela.text\0.shstrtab\0",
    );
    put(&mut data, STRTAB_OFF as usize, b"\0main\0helper\0");

    put(&mut data, SYMTAB_OFF as usize, &sym(0, 0, 0, 0, 0));
    // STB_GLOBAL << 4 | STT_FUNC
    put(
        &mut data,
        SYMTAB_OFF as usize + 24,
        &sym(1, 0x12, 1, 0x40_1000, 32),
    );
    // STB_LOCAL << 4 | STT_SECTION
    put(
        &mut data,
        SYMTAB_OFF as usize + 48,
        &sym(0, 0x03, 1, 0x40_1000, 0),
    );

    put(&mut data, RELA_OFF as usize, &rela_entry(0x19, 1, 4, -5)); // PLT32
    put(
        &mut data,
        RELA_OFF as usize + 24,
        &rela_entry(0x40, 2, 2, 5), // PC32
    );

    let sections: [[u8; 64]; 6] = [
        shdr(0, 0, 0, 0, 0, 0, 0, 0, 0, 0),
        shdr(1, 1, 0x6, 0x40_1000, 0, 0, 0, 0, 16, 0), // PROGBITS, AX
        shdr(7, 2, 0, 0, SYMTAB_OFF, 72, 3, 2, 8, 24), // SYMTAB
        shdr(15, 3, 0, 0, STRTAB_OFF, 13, 0, 0, 1, 0), // STRTAB
        shdr(23, 4, 0x40, 0, RELA_OFF, 48, 2, 1, 8, 24), // RELA, I
        shdr(34, 3, 0, 0, SHSTRTAB_OFF, 44, 0, 0, 1, 0), // STRTAB
    ];
    for (i, s) in sections.iter().enumerate() {
        put(&mut data, SHOFF as usize + i * 64, s);
    }
    data
}

/// NULL section, one empty PROGBITS section per name, then .shstrtab.
/// The string-table section index is always the last one.
pub fn named_sections(names: &[&str]) -> Vec<u8> {
    let mut blob = vec![0u8];
    let mut name_offsets = Vec::new();
    for name in names {
        name_offsets.push(blob.len() as u32);
        blob.extend_from_slice(name.as_bytes());
        blob.push(0);
    }
    let shstrtab_name = blob.len() as u32;
    blob.extend_from_slice(b".shstrtab\0");

    let shnum = names.len() as u16 + 2;
    let shoff = 64 + blob.len() as u64;

    let mut data = Vec::new();
    put(&mut data, 0, &ehdr(shoff, shnum, shnum - 1));
    put(&mut data, 64, &blob);

    let mut table = vec![shdr(0, 0, 0, 0, 0, 0, 0, 0, 0, 0)];
    for &offset in &name_offsets {
        table.push(shdr(offset, 1, 0, 0, 0, 0, 0, 0, 1, 0));
    }
    table.push(shdr(
        shstrtab_name,
        3,
        0,
        0,
        64,
        blob.len() as u64,
        0,
        0,
        1,
        0,
    ));
    for (i, s) in table.iter().enumerate() {
        put(&mut data, shoff as usize + i * 64, s);
    }
    data
}

/// NULL, .text, .symtab with one named FUNC symbol, .strtab, .shstrtab.
pub fn symbol_fixture(symbol_name: &str) -> Vec<u8> {
    let shstrtab: &[u8] = b"\0.text\0.symtab\0.strtab\0.shstrtab\0";
    let strtab_off = 64 + shstrtab.len() as u64;
    let mut strtab = vec![0u8];
    strtab.extend_from_slice(symbol_name.as_bytes());
    strtab.push(0);
    let symtab_off = strtab_off + strtab.len() as u64;
    let shoff = symtab_off + 48;

    let mut data = Vec::new();
    put(&mut data, 0, &ehdr(shoff, 5, 4));
    put(&mut data, 64, shstrtab);
    put(&mut data, strtab_off as usize, &strtab);
    put(&mut data, symtab_off as usize, &sym(0, 0, 0, 0, 0));
    put(
        &mut data,
        symtab_off as usize + 24,
        &sym(1, 0x12, 1, 0x10, 0),
    );

    let sections: [[u8; 64]; 5] = [
        shdr(0, 0, 0, 0, 0, 0, 0, 0, 0, 0),
        shdr(1, 1, 0x6, 0, 0, 0, 0, 0, 16, 0),
        shdr(7, 2, 0, 0, symtab_off, 48, 3, 1, 8, 24),
        shdr(15, 3, 0, 0, strtab_off, strtab.len() as u64, 0, 0, 1, 0),
        shdr(23, 3, 0, 0, 64, shstrtab.len() as u64, 0, 0, 1, 0),
    ];
    for (i, s) in sections.iter().enumerate() {
        put(&mut data, shoff as usize + i * 64, s);
    }
    data
}
