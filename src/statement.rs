//! Generated SQL statements.

use std::fmt;

/// Whether a statement runs when the script is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    /// Written behind a `-- ` comment marker for manual review.
    Suppressed,
}

/// One line of generated SQL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub status: Status,
    pub sql: String,
}

impl Statement {
    pub const COMMENT_PREFIX: &'static str = "-- ";

    pub fn active(sql: String) -> Self {
        Self {
            status: Status::Active,
            sql,
        }
    }

    pub fn suppressed(sql: String) -> Self {
        Self {
            status: Status::Suppressed,
            sql,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Status::Active => f.write_str(&self.sql),
            Status::Suppressed => write!(f, "{}{}", Self::COMMENT_PREFIX, self.sql),
        }
    }
}
