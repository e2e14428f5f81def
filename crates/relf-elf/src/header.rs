//! ELF file header.

use crate::constants::*;
use crate::image::ByteImage;
use crate::Result;

/// Decoded executable header (offset 0, fixed 64-byte layout).
#[derive(Clone, Debug)]
pub struct FileHeader {
    pub ident: [u8; EI_NIDENT],
    pub e_type: u16,
    pub e_machine: u16,
    pub e_version: u32,
    pub e_entry: u64,
    pub e_phoff: u64,
    pub e_shoff: u64,
    pub e_flags: u32,
    pub e_ehsize: u16,
    pub e_phentsize: u16,
    pub e_phnum: u16,
    pub e_shentsize: u16,
    pub e_shnum: u16,
    pub e_shstrndx: u16,
}

impl FileHeader {
    /// Decode the header from the start of the image.
    ///
    /// The magic bytes are not validated; whatever is there is decoded
    /// and reported as-is.
    pub fn parse(image: &ByteImage) -> Result<Self> {
        // One up-front check covers every fixed-offset field read below.
        image.bytes(0, EHDR_SIZE)?;

        let mut ident = [0u8; EI_NIDENT];
        ident.copy_from_slice(image.bytes(0, EI_NIDENT as u64)?);

        Ok(Self {
            ident,
            e_type: image.u16_at(16)?,
            e_machine: image.u16_at(18)?,
            e_version: image.u32_at(20)?,
            e_entry: image.u64_at(24)?,
            e_phoff: image.u64_at(32)?,
            e_shoff: image.u64_at(40)?,
            e_flags: image.u32_at(48)?,
            e_ehsize: image.u16_at(52)?,
            e_phentsize: image.u16_at(54)?,
            e_phnum: image.u16_at(56)?,
            e_shentsize: image.u16_at(58)?,
            e_shnum: image.u16_at(60)?,
            e_shstrndx: image.u16_at(62)?,
        })
    }

    #[must_use]
    pub fn class_name(&self) -> &'static str {
        match self.ident[EI_CLASS] {
            ELF_CLASS_32 => "ELF32",
            ELF_CLASS_64 => "ELF64",
            _ => "none",
        }
    }

    #[must_use]
    pub fn data_name(&self) -> &'static str {
        match self.ident[EI_DATA] {
            ELF_DATA_LSB => "2's complement, little endian",
            ELF_DATA_MSB => "2's complement, big endian",
            _ => "none",
        }
    }

    #[must_use]
    pub fn version_name(&self) -> &'static str {
        match self.ident[EI_VERSION] {
            EV_CURRENT => "current",
            EV_NONE => "",
            _ => "unknown",
        }
    }

    #[must_use]
    pub fn osabi_name(&self) -> &'static str {
        match self.ident[EI_OSABI] {
            ELFOSABI_NONE => "UNIX - System V",
            ELFOSABI_HPUX => "UNIX - HP-UX",
            ELFOSABI_NETBSD => "UNIX - NetBSD",
            ELFOSABI_GNU => "UNIX - GNU",
            ELFOSABI_SOLARIS => "UNIX - Solaris",
            ELFOSABI_AIX => "UNIX - AIX",
            ELFOSABI_IRIX => "UNIX - IRIX",
            ELFOSABI_FREEBSD => "UNIX - FreeBSD",
            ELFOSABI_TRU64 => "UNIX - TRU64",
            ELFOSABI_MODESTO => "Novell - Modesto",
            ELFOSABI_OPENBSD => "UNIX - OpenBSD",
            ELFOSABI_ARM => "ARM architecture ABI",
            ELFOSABI_STANDALONE => "Stand-alone (embedded) ABI",
            _ => "unknown",
        }
    }

    #[must_use]
    pub fn abi_version(&self) -> u8 {
        self.ident[EI_ABIVERSION]
    }

    /// Object-file type description.
    ///
    /// ET_DYN covers both shared objects and position-independent
    /// executables; telling them apart needs the DF_1_PIE flag from the
    /// dynamic section, which this tool does not decode. Every ET_DYN
    /// object is therefore reported as a PIE.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self.e_type {
            ET_NONE => "NONE (None)",
            ET_REL => "REL (Relocatable file)",
            ET_EXEC => "EXEC (Executable file)",
            ET_DYN => "DYN (Position-Independent Executable file)",
            ET_CORE => "CORE (Core file)",
            _ => "unknown",
        }
    }

    #[must_use]
    pub fn machine_name(&self) -> &'static str {
        match self.e_machine {
            EM_M32 => "AT&T WE 32100",
            EM_SPARC => "Sun Microsystems SPARC",
            EM_386 => "Intel 80386",
            EM_68K => "Motorola 68000",
            EM_88K => "Motorola 88000",
            EM_860 => "Intel 80860",
            EM_MIPS => "MIPS RS3000 (big-endian only)",
            EM_PARISC => "HP/PA",
            EM_SPARC32PLUS => "SPARC with enhanced instruction set",
            EM_PPC => "PowerPC",
            EM_PPC64 => "PowerPC 64-bit",
            EM_S390 => "IBM S/390",
            EM_ARM => "Advanced RISC Machines",
            EM_SH => "Renesas SuperH",
            EM_SPARCV9 => "SPARC v9 64-bit",
            EM_IA_64 => "Intel Itanium",
            EM_X86_64 => "Advanced Micro Devices X86-64",
            EM_VAX => "DEC Vax",
            _ => "An unknown machine",
        }
    }
}
