use std::io::{self, Write};

use indoc::indoc;

use crate::table::KeysymTable;

const HEADER: &str = indoc! {"
    /*
     *  Automatically generated by keysymmap from parsing keysymdef.h.
     */
"};

const COLUMNS: usize = 8;

/// Identifiers the generated definitions are emitted under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputNames {
    pub len: String,
    pub keys: String,
    pub values: String,
}

impl Default for OutputNames {
    fn default() -> Self {
        Self {
            len: "AutoTypePlatformX11::m_unicodeToKeysymLen".to_string(),
            keys: "AutoTypePlatformX11::m_unicodeToKeysymKeys".to_string(),
            values: "AutoTypePlatformX11::m_unicodeToKeysymValues".to_string(),
        }
    }
}

pub fn render(table: &KeysymTable, names: &OutputNames, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", HEADER.trim_end())?;
    writeln!(out)?;

    writeln!(out, "const int {} = {};", names.len, table.len())?;
    writeln!(out)?;

    write_array(out, &names.keys, &table.keys())?;
    writeln!(out)?;
    write_array(out, &names.values, &table.values())?;

    out.flush()
}

pub fn render_to_string(table: &KeysymTable, names: &OutputNames) -> io::Result<String> {
    let mut buf = vec![];
    render(table, names, &mut buf)?;
    String::from_utf8(buf).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}

fn write_array(out: &mut impl Write, name: &str, values: &[u32]) -> io::Result<()> {
    writeln!(out, "const uint {}[] = {{", name)?;

    let count = values.len();
    for (idx, val) in values.iter().enumerate() {
        let i = idx + 1;
        let hex = format!("{:#06x}", val);

        if i == count {
            writeln!(out, "{}", hex)?;
        } else if i % COLUMNS == 0 {
            writeln!(out, "{},", hex)?;
        } else if (i - 1) % COLUMNS == 0 {
            write!(out, "    {}, ", hex)?;
        } else {
            write!(out, "{}, ", hex)?;
        }
    }

    writeln!(out, "}};")
}
