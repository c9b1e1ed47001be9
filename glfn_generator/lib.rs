////////////////////////////////////////////////////////////////////////////////////
// Copyright (c) 2019 DasEtwas - All Rights Reserved                               /
//      Unauthorized copying of this file, via any medium is strictly prohibited   /
//      Proprietary and confidential                                               /
////////////////////////////////////////////////////////////////////////////////////

//! A generator for a C++ table of GL function pointers. It reads the Khronos XML registry
//! (`gl.xml`), selects the commands one API profile requires and renders two sources: a header
//! declaring a struct with one `std::function` field per command, and a source file defining a
//! function that fills that struct from the linked GL symbols.
//!
//! Output only depends on the registry and the [`GeneratorConfig`], so the generated files can be
//! checked into a repository and verified with [`check::check`].
//!
//! # Example
//!
//! ```no_run
//! use glfn_generator::{output, GeneratorConfig, OutputKind, Registry};
//! use std::path::PathBuf;
//!
//! let registry = Registry::load("third_party/OpenGL-Registry/xml/gl.xml").unwrap();
//! let artifacts = output::render_all(
//!     &registry,
//!     &GeneratorConfig::default(),
//!     &[
//!         (OutputKind::Declaration, PathBuf::from("include/gl_functions.h")),
//!         (OutputKind::Initializer, PathBuf::from("src/get_gl_functions.cc")),
//!     ],
//! )
//! .unwrap();
//! output::write_all(&artifacts).unwrap();
//! ```
//!
//! # Registry shape
//!
//! Only two kinds of top-level sections are read:
//!
//! - exactly one `<commands>`, whose `<command>` children each start with a `<proto>` holding a
//!   `<name>`, followed by `<param>` elements;
//! - any number of `<feature api="...">`, whose `<require>` blocks name the commands a profile
//!   needs with `<command name="..."/>`.
//!

extern crate lazy_static;
#[macro_use]
extern crate log;

pub mod check;
pub mod config;
mod error;
pub mod generators;
pub mod output;
pub mod registry;
pub mod signature;

pub use crate::{
    config::GeneratorConfig,
    error::{Error, Result},
    generators::{Generator, OutputKind},
    registry::{Profile, Registry},
    signature::{Bindings, Signature},
};

/// Renders one document for `config.profile`.
///
/// Rendering twice from the same registry and config yields identical text.
pub fn generate(registry: &Registry, config: &GeneratorConfig, kind: OutputKind) -> Result<String> {
    let bindings = Bindings::extract(registry, &config.profile, config.strict)?;
    generators::render(kind, &bindings, config)
}
