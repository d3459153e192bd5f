//! The NPC table row layout and its SQL rendering.

use csv::StringRecord;

use crate::error::{ConvertError, Result};

/// One row of the NPC table.
///
/// Values are kept verbatim; numeric-looking columns are emitted into SQL
/// unquoted exactly as they appear in the source (`0001` stays `0001`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NpcRecord {
    pub uniq_id: String,
    pub name: String,
    pub npc_type: String,
    pub look: String,
    pub map_id: String,
    pub x: String,
    pub y: String,
    pub base: String,
    pub sort: String,
    pub level: String,
    pub life: String,
    pub defence: String,
    pub magic_def: String,
}

impl NpcRecord {
    /// Column names of the NPC table header, in order.
    pub const COLUMNS: [&'static str; 13] = [
        "UniqId", "Name", "Type", "Look", "MapId", "X", "Y", "Base", "Sort", "Level", "Life",
        "Defence", "MagicDef",
    ];

    /// Build a row from a parsed CSV record.
    ///
    /// `line` is the 1-based source line, used in the error for short rows.
    /// Fields past the thirteenth are ignored.
    pub fn from_record(record: &StringRecord, line: u64) -> Result<Self> {
        let found = record.len();
        if found < Self::COLUMNS.len() {
            return Err(ConvertError::FieldCount {
                table: "npcs",
                line,
                expected: Self::COLUMNS.len(),
                found,
            });
        }

        let field = |i: usize| record[i].to_string();
        Ok(Self {
            uniq_id: field(0),
            name: field(1),
            npc_type: field(2),
            look: field(3),
            map_id: field(4),
            x: field(5),
            y: field(6),
            base: field(7),
            sort: field(8),
            level: field(9),
            life: field(10),
            defence: field(11),
            magic_def: field(12),
        })
    }

    /// `INSERT INTO npcs VALUES (...);` with only the name quoted.
    pub fn insert_sql(&self) -> String {
        format!(
            "INSERT INTO npcs VALUES ({}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {});",
            self.uniq_id,
            sql_string(&self.name),
            self.npc_type,
            self.look,
            self.map_id,
            self.x,
            self.y,
            self.base,
            self.sort,
            self.level,
            self.life,
            self.defence,
            self.magic_def,
        )
    }
}

/// Single-quoted SQL string literal.
fn sql_string(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}
