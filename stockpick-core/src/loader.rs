use crate::{amount::Amount, candidate::Candidate};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
}

/// Reads a candidate CSV: one header row, then `name,cost,benefit%` rows.
///
/// The benefit field may carry one trailing `%`, which is stripped before
/// parsing. Fields are trimmed, blank rows skipped. The load is
/// all-or-nothing: the first malformed row aborts it. The file handle is
/// scoped to this call.
pub fn load_candidates<A: Amount>(path: &Path) -> Result<Vec<Candidate<A>>, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let mut candidates = Vec::new();
    for (i, row) in contents.lines().enumerate().skip(1) {
        let line = i + 1;
        if row.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = row.split(',').collect();
        if fields.len() != 3 {
            return Err(LoadError::MalformedRecord {
                line,
                reason: format!("expected 3 fields, found {}", fields.len()),
            });
        }
        let cost = A::parse_field(fields[1]).ok_or_else(|| LoadError::MalformedRecord {
            line,
            reason: format!("invalid cost {:?}", fields[1].trim()),
        })?;
        let pct_field = fields[2].trim();
        let pct_field = pct_field.strip_suffix('%').unwrap_or(pct_field);
        let benefit_pct = A::parse_field(pct_field).ok_or_else(|| LoadError::MalformedRecord {
            line,
            reason: format!("invalid benefit percentage {:?}", fields[2].trim()),
        })?;
        candidates.push(Candidate::new(fields[0].trim(), cost, benefit_pct));
    }
    Ok(candidates)
}
