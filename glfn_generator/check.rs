////////////////////////////////////////////////////////////////////////////////////
// Copyright (c) 2019 DasEtwas - All Rights Reserved                               /
//      Unauthorized copying of this file, via any medium is strictly prohibited   /
//      Proprietary and confidential                                               /
////////////////////////////////////////////////////////////////////////////////////

//! Compares freshly rendered documents with the files checked into a source tree.

use std::{fmt, fs, io, path::PathBuf};

use crate::{error::Result, generators::OutputKind, output::Artifact};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    UpToDate,
    /// The file exists but its bytes differ from the rendered text.
    Stale,
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckEntry {
    pub kind: OutputKind,
    pub path: PathBuf,
    pub status: Status,
}

impl fmt::Display for CheckEntry {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let what = match self.kind {
            OutputKind::Declaration => "Header file",
            OutputKind::Initializer => "Source file",
        };
        match self.status {
            Status::UpToDate => write!(fmt, "{} {} is up to date", what, self.path.display()),
            Status::Stale | Status::Missing => {
                write!(fmt, "{} {} needs to be re-generated", what, self.path.display())
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub entries: Vec<CheckEntry>,
}

impl CheckReport {
    pub fn is_up_to_date(&self) -> bool {
        self.entries.iter().all(|entry| entry.status == Status::UpToDate)
    }

    /// Entries that need to be regenerated.
    pub fn outdated(&self) -> impl Iterator<Item = &CheckEntry> {
        self.entries.iter().filter(|entry| entry.status != Status::UpToDate)
    }
}

/// Compares each artifact byte for byte with the file at its path. Never writes.
pub fn check(artifacts: &[Artifact]) -> Result<CheckReport> {
    let mut entries = Vec::with_capacity(artifacts.len());

    for artifact in artifacts {
        let status = match fs::read(&artifact.path) {
            Ok(existing) if existing == artifact.text.as_bytes() => Status::UpToDate,
            Ok(_) => Status::Stale,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Status::Missing,
            Err(e) => return Err(e.into()),
        };
        debug!("{} {}: {:?}", artifact.kind, artifact.path.display(), status);
        entries.push(CheckEntry { kind: artifact.kind, path: artifact.path.clone(), status });
    }

    Ok(CheckReport { entries })
}
