//! Converts X11 `keysymdef.h` into a static unicode -> keysym lookup table.

use std::fs;
use std::io::Write;
use std::path::Path;

pub use anyhow::{anyhow, Result};

pub use crate::error::GeneratorError;
use crate::parsing::split_lines;
pub use crate::table::{KeysymEntry, KeysymTable, TableStats};
pub use crate::writer::{render, render_to_string, OutputNames};

pub mod error;
pub mod logging;
pub mod parsing;
pub mod table;
pub mod writer;

pub const DEFAULT_KEYSYMDEF_PATH: &str = "/usr/include/X11/keysymdef.h";

/// Reads the whole keysym definition file into a table.
pub fn read_table(path: impl AsRef<Path>) -> Result<(KeysymTable, TableStats)> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|err| GeneratorError::input_unavailable(path, err))?;

    Ok(KeysymTable::from_lines(split_lines(&text)))
}

/// Generates the table source for `path` into `out`, nothing is written if the input can't be read.
pub fn generate(path: impl AsRef<Path>, names: &OutputNames, out: &mut impl Write) -> Result<TableStats> {
    let (table, stats) = read_table(path)?;
    render(&table, names, out)?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn test_generate() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "#define XK_Aogonek 0x01a1  /* U+0104 LATIN CAPITAL LETTER A WITH OGONEK */").unwrap();
        writeln!(file, "#define XK_BackSpace 0xff08  /* Back space, back char */").unwrap();

        let mut out = vec![];
        let stats = generate(file.path(), &OutputNames::default(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(stats.entries, 1);
        assert!(out.contains("m_unicodeToKeysymLen = 1;"));
        assert!(out.contains("m_unicodeToKeysymKeys[] = {\n0x0104\n};"));
        assert!(out.contains("m_unicodeToKeysymValues[] = {\n0x01a1\n};"));
    }

    #[test]
    fn test_read_table_old_mac_line_endings() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"#define XK_Aogonek 0x01a1  /* U+0104 A\r#define XK_breve 0x01a2  /* U+02D8 B\r").unwrap();

        let (table, stats) = read_table(file.path()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(stats.lines, 2);
    }

    #[test]
    fn test_generate_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keysymdef.h");

        let mut out = vec![];
        let err = generate(&path, &OutputNames::default(), &mut out).unwrap_err();

        assert!(matches!(err.downcast_ref::<GeneratorError>(), Some(GeneratorError::InputUnavailable { .. })));
        assert!(out.is_empty());
    }
}
