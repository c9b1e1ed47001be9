////////////////////////////////////////////////////////////////////////////////////
// Copyright (c) 2019 DasEtwas - All Rights Reserved                               /
//      Unauthorized copying of this file, via any medium is strictly prohibited   /
//      Proprietary and confidential                                               /
////////////////////////////////////////////////////////////////////////////////////

use std::io;

use thiserror::Error;

/// Everything that can abort a generation run.
///
/// All variants are fatal: a registry that violates one of these assumptions is a broken build
/// input and nothing is written when one of them is raised.
#[derive(Debug, Error)]
pub enum Error {
    /// The input is not well-formed XML, or has no root element.
    #[error("malformed registry: {0}")]
    MalformedRegistry(String),

    /// A top-level section that must be declared once was declared again.
    #[error("registry declares more than one <{0}> section")]
    DuplicateSection(&'static str),

    /// A top-level section that must be declared once was not declared at all.
    #[error("registry has no <{0}> section")]
    MissingSection(&'static str),

    /// The first child of a `<command>` is not a `<proto>`.
    #[error("command #{index} does not start with a <proto> element")]
    MissingPrototype { index: usize },

    /// A `<proto>` without a `<name>` child, so the signature cannot be tied to a command.
    #[error("prototype of command #{index} has no <name> element")]
    MissingName { index: usize },

    /// Something other than a `<command>` inside `<commands>`.
    #[error("unexpected <{found}> element inside <commands>")]
    UnexpectedElement { found: String },

    /// Required commands that the registry never defines. Only raised in strict mode.
    #[error("{} required command(s) are not defined in the registry: {}", .0.len(), .0.join(", "))]
    UnresolvedCommands(Vec<String>),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
