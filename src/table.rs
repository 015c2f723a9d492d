use std::collections::BTreeMap;

use crate::parsing::{is_redundant, parse_line};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeysymEntry {
    pub unicode: u32,
    pub keysym: u32,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TableStats {
    pub lines: usize,
    pub matched: usize,
    pub filtered: usize,
    pub overwritten: usize,
    pub entries: usize,
}

/// Unicode code point -> keysym mapping, ordered by code point.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KeysymTable {
    map: BTreeMap<u32, u32>,
}

impl KeysymTable {
    pub fn new() -> Self { Self::default() }

    /// Builds the table from keysymdef.h lines, lines that don't describe a mapping are skipped.
    pub fn from_lines<I, S>(lines: I) -> (Self, TableStats)
        where
            I: IntoIterator<Item=S>,
            S: AsRef<str>,
    {
        let mut table = Self::new();
        let mut stats = TableStats::default();

        for line in lines {
            stats.lines += 1;

            let entry = match parse_line(line.as_ref()) {
                Some(entry) => entry,
                None => continue,
            };
            stats.matched += 1;

            if is_redundant(entry.keysym) {
                stats.filtered += 1;
                continue;
            }

            if table.insert(entry).is_some() {
                stats.overwritten += 1;
            }
        }

        stats.entries = table.len();
        (table, stats)
    }

    /// Inserts the mapping, a previous keysym for the same code point gets replaced and returned.
    pub fn insert(&mut self, entry: KeysymEntry) -> Option<u32> {
        self.map.insert(entry.unicode, entry.keysym)
    }

    pub fn len(&self) -> usize { self.map.len() }

    pub fn is_empty(&self) -> bool { self.map.is_empty() }

    pub fn entries(&self) -> impl ExactSizeIterator<Item=KeysymEntry> + '_ {
        self.map.iter().map(|(&unicode, &keysym)| KeysymEntry { unicode, keysym })
    }

    pub fn keys(&self) -> Vec<u32> { self.map.keys().copied().collect() }

    pub fn values(&self) -> Vec<u32> { self.map.values().copied().collect() }

    pub fn lookup(&self, unicode: u32) -> Option<u32> {
        self.map.get(&unicode).copied()
    }
}
