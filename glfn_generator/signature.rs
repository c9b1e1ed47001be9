////////////////////////////////////////////////////////////////////////////////////
// Copyright (c) 2019 DasEtwas - All Rights Reserved                               /
//      Unauthorized copying of this file, via any medium is strictly prohibited   /
//      Proprietary and confidential                                               /
////////////////////////////////////////////////////////////////////////////////////

use std::collections::BTreeSet;

use crate::{
    error::{Error, Result},
    registry::{Command, Profile, Registry},
};

/// The canonical C signature of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub name: String,
    pub return_type: String,
    pub param_types: Vec<String>,
}

impl Signature {
    pub fn of(command: &Command<'_>) -> Signature {
        Signature {
            name: command.name.to_owned(),
            return_type: command.return_type().normalized(),
            param_types: command.param_types().iter().map(|ty| ty.normalized()).collect(),
        }
    }
}

/// Everything the generators need: the signatures required by one profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    /// In the order the registry declares the commands.
    pub signatures: Vec<Signature>,
    /// Required names without a definition, sorted.
    pub unresolved: Vec<String>,
}

impl Bindings {
    /// Resolves the commands `profile` requires against the registry's definitions.
    ///
    /// Every definition of a required name yields a signature, so a name defined twice is
    /// emitted twice. Required names that match no definition are reported in `unresolved`; with
    /// `strict` they fail the extraction instead.
    pub fn extract(registry: &Registry, profile: &Profile, strict: bool) -> Result<Bindings> {
        let required = registry.required_commands(profile);
        let mut resolved = BTreeSet::new();
        let mut signatures = Vec::with_capacity(required.len());

        for command in registry.commands()? {
            if required.contains(command.name) {
                trace!("extracting {}", command.name);
                resolved.insert(command.name);
                signatures.push(Signature::of(&command));
            }
        }

        let unresolved: Vec<String> =
            required.iter().filter(|name| !resolved.contains(name.as_str())).cloned().collect();
        if !unresolved.is_empty() {
            if strict {
                return Err(Error::UnresolvedCommands(unresolved));
            }
            warn!(
                "{} command(s) required by {} are not defined and will be skipped: {}",
                unresolved.len(),
                profile,
                unresolved.join(", ")
            );
        }

        debug!("extracted {} signature(s) for {}", signatures.len(), profile);
        Ok(Bindings { signatures, unresolved })
    }
}
