//! Loading CLI input: a memory-mapped file, a literal, or stdin.

use anyhow::{Context, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::ops::Deref;
use std::path::Path;

/// Input bytes, borrowed from a mapping where possible
pub enum Input {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl Deref for Input {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Input::Mapped(map) => &map[..],
            Input::Owned(bytes) => &bytes[..],
        }
    }
}

/// Read input from `text` if given, else from `path`, else from stdin
pub fn load_input(path: Option<&Path>, text: Option<&str>) -> Result<Input> {
    if let Some(text) = text {
        return Ok(Input::Owned(text.as_bytes().to_vec()));
    }

    match path {
        Some(path) if path != Path::new("-") => map_file(path),
        _ => {
            let mut bytes = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut bytes)
                .context("Failed to read stdin")?;
            Ok(Input::Owned(bytes))
        }
    }
}

fn map_file(path: &Path) -> Result<Input> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let len = file
        .metadata()
        .with_context(|| format!("Failed to stat {}", path.display()))?
        .len();

    // Zero-length mappings are rejected by some platforms
    if len == 0 {
        return Ok(Input::Owned(Vec::new()));
    }

    // SAFETY: the mapping is read-only and dropped before the CLI exits;
    // concurrent truncation of the input file is outside our control.
    let map = unsafe { Mmap::map(&file) }
        .with_context(|| format!("Failed to map {}", path.display()))?;
    Ok(Input::Mapped(map))
}
