////////////////////////////////////////////////////////////////////////////////////
// Copyright (c) 2020 DasEtwas - All Rights Reserved                               /
//      Unauthorized copying of this file, via any medium is strictly prohibited   /
//      Proprietary and confidential                                               /
////////////////////////////////////////////////////////////////////////////////////

use std::io;

use crate::{config::GeneratorConfig, signature::Bindings};

/// Generates the source of the function that fills the struct from the linked GL symbols.
#[allow(missing_copy_implementations)]
pub struct LoaderFnGenerator;

impl super::Generator for LoaderFnGenerator {
    fn write<W>(&self, bindings: &Bindings, config: &GeneratorConfig, dest: &mut W) -> io::Result<()>
    where W: io::Write {
        super::write_preamble(config, dest)?;
        write_includes(config, dest)?;
        writeln!(dest, "namespace {} {{", config.namespace)?;
        writeln!(dest)?;
        write_loader_fn(bindings, config, dest)?;
        writeln!(dest)?;
        writeln!(dest)?;
        writeln!(dest, "}}  // namespace {}", config.namespace)
    }
}

/// Each include is followed by a blank line.
fn write_includes<W>(config: &GeneratorConfig, dest: &mut W) -> io::Result<()>
where W: io::Write {
    for include in &config.initializer_includes {
        writeln!(dest, "#include {}", include)?;
        writeln!(dest)?;
    }

    Ok(())
}

/// Creates the function that default-constructs the struct, assigns every GL symbol to its field
///  and returns the struct.
fn write_loader_fn<W>(bindings: &Bindings, config: &GeneratorConfig, dest: &mut W) -> io::Result<()>
where W: io::Write {
    let struct_path = format!("{}::{}", config.namespace, config.struct_name);

    writeln!(dest, "{} {}() {{", struct_path, config.loader_fn_name)?;
    writeln!(dest, "  {} result{{}};", struct_path)?;
    writeln!(dest, "  // clang-format off")?;

    for signature in &bindings.signatures {
        trace!("loading {}", signature.name);
        writeln!(
            dest,
            "  result.{field} = {symbol};",
            field = config.field_name(&signature.name),
            symbol = signature.name
        )?;
    }

    writeln!(dest, "  // clang-format on")?;
    writeln!(dest, "  return result;")?;
    writeln!(dest, "}}")
}
