use anyhow::{Context as _, Result};
use object::{Object, ObjectKind};
use std::fmt;
use std::path::{Path, PathBuf};

/// A loaded target binary: its path plus metadata read from the
/// parsed file. The raw bytes are not retained.
#[derive(Debug, Clone)]
pub struct Binary {
    /// Path the binary was loaded from.
    pub path: PathBuf,
    /// Container format (ELF, PE, Mach-O, …).
    pub format: object::BinaryFormat,
    /// Target architecture.
    pub arch: object::Architecture,
    /// Whether this is a 64-bit binary.
    pub is_64: bool,
    /// Whether the binary is little-endian.
    pub little_endian: bool,
    /// Entry point address (load-address relative for PIE).
    pub entry: u64,
    /// Whether the executable is position-independent.
    pub pie: bool,
}

impl Binary {
    /// Read and parse the binary at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)
            .with_context(|| format!("Failed to read binary {}", path.display()))?;
        let file = object::File::parse(&*data)
            .with_context(|| format!("Failed to parse binary {}", path.display()))?;

        Ok(Self {
            path: path.to_path_buf(),
            format: file.format(),
            arch: file.architecture(),
            is_64: file.is_64(),
            little_endian: file.is_little_endian(),
            entry: file.entry(),
            pie: file.kind() == ObjectKind::Dynamic,
        })
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "path:    {}", self.path.display())?;
        writeln!(f, "format:  {:?}", self.format)?;
        writeln!(
            f,
            "arch:    {:?} ({}-bit, {}-endian)",
            self.arch,
            if self.is_64 { 64 } else { 32 },
            if self.little_endian { "little" } else { "big" },
        )?;
        writeln!(f, "entry:   {:#x}", self.entry)?;
        write!(f, "pie:     {}", self.pie)
    }
}
