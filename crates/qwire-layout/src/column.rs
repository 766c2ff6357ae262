//! Grouping scheduled entries into columns.

use qwire_ir::Instruction;

use crate::schedule::{Schedule, ScheduleEntry};

/// All entries sharing one start column, in program order.
#[derive(Debug, Clone, PartialEq)]
pub struct Column<'c> {
    /// Column index from the schedule.
    pub index: usize,
    /// Entries in this column. Never empty.
    pub entries: Vec<ScheduleEntry<'c>>,
}

impl<'c> Column<'c> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Instructions in this column.
    pub fn instructions(&self) -> impl Iterator<Item = &'c Instruction> + '_ {
        self.entries.iter().map(|e| e.instruction)
    }
}

/// Split a schedule into columns of ascending index.
///
/// Column indices with no entries produce no column.
pub fn group<'c>(schedule: &Schedule<'c>) -> Vec<Column<'c>> {
    group_entries(schedule.entries())
}

/// Like [`group`], for entries already sorted by `start_column`.
pub fn group_entries<'c>(entries: &[ScheduleEntry<'c>]) -> Vec<Column<'c>> {
    entries
        .chunk_by(|a, b| a.start_column == b.start_column)
        .map(|chunk| Column {
            index: chunk[0].start_column,
            entries: chunk.to_vec(),
        })
        .collect()
}
