////////////////////////////////////////////////////////////////////////////////////
// Copyright (c) 2019 DasEtwas - All Rights Reserved                               /
//      Unauthorized copying of this file, via any medium is strictly prohibited   /
//      Proprietary and confidential                                               /
////////////////////////////////////////////////////////////////////////////////////

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::{
    config::GeneratorConfig,
    error::Result,
    generators::{self, OutputKind},
    registry::Registry,
    signature::Bindings,
};

/// A rendered document together with the file it belongs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: OutputKind,
    pub path: PathBuf,
    pub text: String,
}

/// Renders every requested document in memory.
///
/// Nothing is written here, so a registry error never leaves a partially generated set of files.
pub fn render_all(registry: &Registry, config: &GeneratorConfig, targets: &[(OutputKind, PathBuf)]) -> Result<Vec<Artifact>> {
    let bindings = Bindings::extract(registry, &config.profile, config.strict)?;

    targets
        .iter()
        .map(|(kind, path)| {
            Ok(Artifact { kind: *kind, path: path.clone(), text: generators::render(*kind, &bindings, config)? })
        })
        .collect()
}

/// Writes each artifact over its destination.
///
/// All documents are first written to temp files next to their destinations, and only once every
/// one of them is complete are they renamed into place. A failure while staging leaves every
/// destination untouched.
pub fn write_all(artifacts: &[Artifact]) -> Result<()> {
    let staged = artifacts
        .iter()
        .map(|artifact| Ok((stage(&artifact.path, artifact.text.as_bytes())?, artifact)))
        .collect::<io::Result<Vec<_>>>()?;

    for (file, artifact) in staged {
        file.persist(&artifact.path).map_err(|e| e.error)?;
        info!("wrote {} to {}", artifact.kind, artifact.path.display());
    }

    Ok(())
}

fn stage(path: &Path, contents: &[u8]) -> io::Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents)?;
    Ok(file)
}
