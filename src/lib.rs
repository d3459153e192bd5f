//! # seed-convert
//!
//! Offline converters used while preparing game-server seed data.
//!
//! - [`splitter`] turns whitespace-delimited text into unquoted CSV.
//! - [`generator`] turns the NPC table into SQL `INSERT` statements,
//!   commenting out rows whose map id is missing from the map table.
//!
//! Both are single-pass batch jobs: read everything, build the output in
//! memory, write it once.
//!
//! ## Example
//!
//! ```
//! use seed_convert::{KeySet, generate, render};
//!
//! let maps = "MapId,Name\n1002,Market\n";
//! let npcs = "UniqId,Name,Type,Look,MapId,X,Y,Base,Sort,Level,Life,Defence,MagicDef\n\
//!             1,Storekeeper,0001,10,1002,0415,0351,0000,0000,0000,0000,0000,0000\n\
//!             2,Lost,0001,10,4040,0001,0001,0000,0000,0000,0000,0000,0000\n";
//!
//! let keys = KeySet::from_reader("maps", maps.as_bytes()).unwrap();
//! let statements = generate(npcs.as_bytes(), &keys).unwrap();
//! let sql = render(&statements);
//!
//! assert!(sql.starts_with("INSERT INTO npcs VALUES (1, 'Storekeeper'"));
//! assert!(sql.lines().nth(1).unwrap().starts_with("-- INSERT INTO npcs VALUES (2, 'Lost'"));
//! ```

pub mod error;
pub mod generator;
pub mod keyset;
pub mod logging;
pub mod npc;
pub mod output;
pub mod splitter;
pub mod statement;
mod table;

pub use error::{ConvertError, Result};
pub use generator::{GenerateReport, generate, generate_file, render, statement_for};
pub use keyset::KeySet;
pub use logging::init_logging;
pub use npc::NpcRecord;
pub use output::{read_source, write_output};
pub use splitter::{SplitReport, convert_file, render_csv, split_line, split_text};
pub use statement::{Statement, Status};
