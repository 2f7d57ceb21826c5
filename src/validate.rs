//! Structural checks on a finished dataset. Issues are reported, never fatal.

use schema::SpeciesRecord;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetIssue {
    /// `dex_no` at `index` is not greater than the one before it.
    OutOfOrder { index: usize, dex_no: u16 },
    DuplicateDexNo(u16),
    EmptyId(u16),
    /// A species must carry one or two types.
    TypeCount { dex_no: u16, count: usize },
}

impl fmt::Display for DatasetIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetIssue::OutOfOrder { index, dex_no } => {
                write!(f, "record {index} (#{dex_no}) is out of dex order")
            }
            DatasetIssue::DuplicateDexNo(dex_no) => write!(f, "dex number #{dex_no} appears more than once"),
            DatasetIssue::EmptyId(dex_no) => write!(f, "#{dex_no} has an empty id"),
            DatasetIssue::TypeCount { dex_no, count } => {
                write!(f, "#{dex_no} has {count} types, expected 1 or 2")
            }
        }
    }
}

pub fn validate_dataset(records: &[SpeciesRecord]) -> Vec<DatasetIssue> {
    let mut issues = Vec::new();

    for (index, pair) in records.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.dex_no == prev.dex_no {
            issues.push(DatasetIssue::DuplicateDexNo(next.dex_no));
        } else if next.dex_no < prev.dex_no {
            issues.push(DatasetIssue::OutOfOrder {
                index: index + 1,
                dex_no: next.dex_no,
            });
        }
    }

    for record in records {
        if record.id.is_empty() {
            issues.push(DatasetIssue::EmptyId(record.dex_no));
        }
        if !(1..=2).contains(&record.types.len()) {
            issues.push(DatasetIssue::TypeCount {
                dex_no: record.dex_no,
                count: record.types.len(),
            });
        }
    }

    issues
}
