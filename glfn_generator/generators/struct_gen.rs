////////////////////////////////////////////////////////////////////////////////////
// Copyright (c) 2020 DasEtwas - All Rights Reserved                               /
//      Unauthorized copying of this file, via any medium is strictly prohibited   /
//      Proprietary and confidential                                               /
////////////////////////////////////////////////////////////////////////////////////

use std::io;

use crate::{config::GeneratorConfig, signature::Bindings};

/// Generates the header declaring one `std::function` field per required command.
#[allow(missing_copy_implementations)]
pub struct FunctionStructGenerator;

impl super::Generator for FunctionStructGenerator {
    fn write<W>(&self, bindings: &Bindings, config: &GeneratorConfig, dest: &mut W) -> io::Result<()>
    where W: io::Write {
        super::write_preamble(config, dest)?;
        write_header_open(config, dest)?;
        write_struct(bindings, config, dest)?;
        write_header_close(config, dest)?;
        Ok(())
    }
}

/// Opens the include guard, pulls in the GL types and opens the namespace.
fn write_header_open<W>(config: &GeneratorConfig, dest: &mut W) -> io::Result<()>
where W: io::Write {
    writeln!(dest, "#ifndef {}", config.header_guard)?;
    writeln!(dest, "#define {}", config.header_guard)?;
    writeln!(dest)?;

    if !config.declaration_prelude.is_empty() {
        write!(dest, "{}", config.declaration_prelude)?;
        if !config.declaration_prelude.ends_with('\n') {
            writeln!(dest)?;
        }
        writeln!(dest)?;
    }

    writeln!(dest, "#include <functional>")?;
    writeln!(dest)?;
    writeln!(dest, "namespace {} {{", config.namespace)?;
    writeln!(dest)
}

/// Creates the struct with one field per signature, in registry order.
fn write_struct<W>(bindings: &Bindings, config: &GeneratorConfig, dest: &mut W) -> io::Result<()>
where W: io::Write {
    writeln!(
        dest,
        "struct {name} {{
  // clang-format off
  // We use camel case for fields so that the GL functions look familiar. We
  // use trailing underscores to avoid these names being redefined when
  // GL-related header files are included.",
        name = config.struct_name
    )?;

    for signature in &bindings.signatures {
        trace!("declaring {}", signature.name);
        writeln!(
            dest,
            "  std::function<{fn_type}> {field};",
            fn_type = super::gen_fn_type(signature),
            field = config.field_name(&signature.name)
        )?;
    }

    writeln!(dest, "  // clang-format on")?;
    writeln!(dest, "}};")
}

fn write_header_close<W>(config: &GeneratorConfig, dest: &mut W) -> io::Result<()>
where W: io::Write {
    writeln!(dest)?;
    writeln!(dest, "}}  // namespace {}", config.namespace)?;
    writeln!(dest)?;
    writeln!(dest, "#endif  // {}", config.header_guard)
}
