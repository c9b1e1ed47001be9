////////////////////////////////////////////////////////////////////////////////////
// Copyright (c) 2019 DasEtwas - All Rights Reserved                               /
//      Unauthorized copying of this file, via any medium is strictly prohibited   /
//      Proprietary and confidential                                               /
////////////////////////////////////////////////////////////////////////////////////

use std::{fmt, io, str::FromStr};

use crate::{config::GeneratorConfig, error::Result, signature::Bindings, signature::Signature};

pub mod loader_fn_gen;
pub mod struct_gen;

pub use self::{loader_fn_gen::LoaderFnGenerator, struct_gen::FunctionStructGenerator};

/// Trait for a source generator.
pub trait Generator {
    /// Writes the complete document for `bindings`.
    fn write<W>(&self, bindings: &Bindings, config: &GeneratorConfig, dest: &mut W) -> io::Result<()>
    where W: io::Write;
}

/// The documents that can be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OutputKind {
    /// Header declaring the struct of `std::function` fields.
    Declaration,
    /// Source defining the function that fills the struct.
    Initializer,
}

impl OutputKind {
    pub const ALL: [OutputKind; 2] = [OutputKind::Declaration, OutputKind::Initializer];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputKind::Declaration => "declaration",
            OutputKind::Initializer => "initializer",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(self.as_str())
    }
}

impl FromStr for OutputKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<OutputKind, String> {
        match s {
            "declaration" => Ok(OutputKind::Declaration),
            "initializer" => Ok(OutputKind::Initializer),
            other => Err(format!("unknown output kind `{}`", other)),
        }
    }
}

/// Renders one document into memory.
pub fn render(kind: OutputKind, bindings: &Bindings, config: &GeneratorConfig) -> Result<String> {
    let mut dest = Vec::new();
    match kind {
        OutputKind::Declaration => FunctionStructGenerator.write(bindings, config, &mut dest)?,
        OutputKind::Initializer => LoaderFnGenerator.write(bindings, config, &mut dest)?,
    }
    String::from_utf8(dest).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Writes the license block and the "do not edit" marker shared by every document.
pub fn write_preamble<W>(config: &GeneratorConfig, dest: &mut W) -> io::Result<()>
where W: io::Write {
    write!(dest, "{}", config.license)?;
    writeln!(dest)?;
    writeln!(dest, "// Automatically-generated file - DO NOT EDIT")?;
    writeln!(dest)
}

/// Generates the C function type of a signature, e.g. `void(GLint, const GLfloat*)`.
pub fn gen_fn_type(signature: &Signature) -> String {
    format!("{}({})", signature.return_type, signature.param_types.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signature(return_type: &str, param_types: &[&str]) -> Signature {
        Signature {
            name: "glFoo".to_owned(),
            return_type: return_type.to_owned(),
            param_types: param_types.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn fn_types() {
        assert_eq!(gen_fn_type(&signature("void", &[])), "void()");
        assert_eq!(gen_fn_type(&signature("void", &["GLint", "const GLfloat*"])), "void(GLint, const GLfloat*)");
        assert_eq!(gen_fn_type(&signature("const GLubyte*", &["GLenum"])), "const GLubyte*(GLenum)");
    }

    #[test]
    fn output_kinds_parse_from_their_names() {
        for kind in OutputKind::ALL.iter() {
            assert_eq!(kind.as_str().parse::<OutputKind>(), Ok(*kind));
        }
        assert!("header".parse::<OutputKind>().is_err());
    }

    #[test]
    fn preamble_ends_with_a_blank_line() {
        let mut dest = Vec::new();
        write_preamble(&GeneratorConfig::default(), &mut dest).unwrap();
        let text = String::from_utf8(dest).unwrap();

        assert!(text.starts_with("// Copyright 2021 The ShaderTrap Project Authors\n"));
        assert!(text.ends_with("limitations under the License.\n\n// Automatically-generated file - DO NOT EDIT\n\n"));
    }
}
