//! NPC table to SQL `INSERT` script, checked against the map table.
//!
//! Every NPC row yields exactly one statement, in source order. Rows whose
//! map reference is not a known map are kept but commented out, so the
//! script still loads and the orphans can be fixed by hand afterwards.

use std::io;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{ConvertError, Result};
use crate::keyset::KeySet;
use crate::npc::NpcRecord;
use crate::output::{read_source, write_output};
use crate::statement::Statement;
use crate::table::Table;

/// Counts from one NPC-to-SQL run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateReport {
    /// Distinct map ids loaded from the map table.
    pub keys: usize,
    pub active: usize,
    pub suppressed: usize,
}

impl GenerateReport {
    pub fn total(&self) -> usize {
        self.active + self.suppressed
    }
}

/// Build the statement for one row, checking its map reference.
pub fn statement_for(npc: &NpcRecord, keys: &KeySet) -> Statement {
    let sql = npc.insert_sql();
    if keys.contains(&npc.map_id) {
        Statement::active(sql)
    } else {
        warn!(
            uniq_id = %npc.uniq_id,
            map_id = %npc.map_id,
            "unknown map, statement commented out"
        );
        Statement::suppressed(sql)
    }
}

/// Generate one statement per NPC row read from `npcs`.
///
/// The first row is the header and is skipped. A row with fewer than 13
/// fields, blank rows included, aborts the run.
pub fn generate<R: io::Read>(npcs: R, keys: &KeySet) -> Result<Vec<Statement>> {
    let source = Table::read(npcs)?;
    let mut reader = source.reader();
    if reader.headers()?.is_empty() {
        return Err(ConvertError::MissingHeader { table: "npcs" });
    }

    let blank = source.first_blank_line();
    let blank_row = |line| ConvertError::FieldCount {
        table: "npcs",
        line,
        expected: NpcRecord::COLUMNS.len(),
        found: 0,
    };

    let mut statements = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        if let Some(blank) = blank
            && line >= blank
        {
            return Err(blank_row(blank));
        }
        let npc = NpcRecord::from_record(&record, line)?;
        statements.push(statement_for(&npc, keys));
    }
    if let Some(blank) = blank {
        return Err(blank_row(blank));
    }
    Ok(statements)
}

/// Render statements as newline-terminated lines.
pub fn render(statements: &[Statement]) -> String {
    let mut out = String::new();
    for statement in statements {
        out.push_str(&statement.to_string());
        out.push('\n');
    }
    out
}

/// Read the NPC and map tables and write the SQL script to `output`.
///
/// Nothing is written unless both tables parse completely.
pub fn generate_file(npcs: &Path, maps: &Path, output: &Path) -> Result<GenerateReport> {
    let keys = KeySet::from_path(maps)?;
    let npc_text = read_source(npcs)?;
    let statements = generate(npc_text.as_bytes(), &keys)?;
    write_output(output, &render(&statements))?;

    let active = statements.iter().filter(|s| s.is_active()).count();
    let report = GenerateReport {
        keys: keys.len(),
        active,
        suppressed: statements.len() - active,
    };
    info!(
        maps = report.keys,
        active = report.active,
        suppressed = report.suppressed,
        output = %output.display(),
        "generated NPC inserts"
    );
    Ok(report)
}
