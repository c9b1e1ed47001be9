use std::{
    io::{self, Write},
    path::PathBuf,
    process,
};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use glfn_generator::{check, output, GeneratorConfig, OutputKind, Registry};

mod logging;

#[derive(Parser)]
#[command(name = "glfn", version, about = "Generates the GL function table sources from the Khronos XML registry")]
struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the sources and write them to their destinations
    Generate {
        #[command(flatten)]
        input: Input,
        #[command(flatten)]
        targets: Targets,
    },
    /// Fail if a destination differs from what would be generated; writes nothing
    Check {
        #[command(flatten)]
        input: Input,
        #[command(flatten)]
        targets: Targets,
    },
    /// Render one source to stdout
    Print {
        #[command(flatten)]
        input: Input,
        /// declaration or initializer
        #[arg(short, long, default_value = "declaration")]
        kind: OutputKind,
    },
}

#[derive(Args)]
struct Input {
    /// Path to gl.xml
    registry: PathBuf,

    /// Value of the `api` attribute selecting the required features
    #[arg(long, default_value = "gles2")]
    profile: String,

    #[arg(long)]
    namespace: Option<String>,

    #[arg(long)]
    struct_name: Option<String>,

    /// Name of the function filling the struct
    #[arg(long)]
    loader_fn: Option<String>,

    /// Appended to every field name
    #[arg(long)]
    field_suffix: Option<String>,

    #[arg(long)]
    header_guard: Option<String>,

    /// Fail when a required command is not defined by the registry
    #[arg(long)]
    strict: bool,
}

impl Input {
    fn config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::default().with_profile(self.profile.as_str()).strict(self.strict);
        if let Some(namespace) = &self.namespace {
            config.namespace = namespace.clone();
        }
        if let Some(struct_name) = &self.struct_name {
            config.struct_name = struct_name.clone();
        }
        if let Some(loader_fn) = &self.loader_fn {
            config.loader_fn_name = loader_fn.clone();
        }
        if let Some(field_suffix) = &self.field_suffix {
            config.field_suffix = field_suffix.clone();
        }
        if let Some(header_guard) = &self.header_guard {
            config.header_guard = header_guard.clone();
        }
        config
    }

    fn load(&self) -> Result<Registry> {
        Registry::load(&self.registry).with_context(|| format!("failed to load registry {}", self.registry.display()))
    }
}

#[derive(Args)]
struct Targets {
    /// Destination of the header declaring the struct
    #[arg(long)]
    declaration: Option<PathBuf>,

    /// Destination of the source defining the loader function
    #[arg(long)]
    initializer: Option<PathBuf>,
}

impl Targets {
    fn list(&self) -> Result<Vec<(OutputKind, PathBuf)>> {
        let targets: Vec<_> = vec![(OutputKind::Declaration, &self.declaration), (OutputKind::Initializer, &self.initializer)]
            .into_iter()
            .filter_map(|(kind, path)| path.clone().map(|path| (kind, path)))
            .collect();

        if targets.is_empty() {
            bail!("at least one of --declaration or --initializer is required");
        }
        Ok(targets)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match &cli.command {
        Command::Generate { input, targets } => generate(input, targets),
        Command::Check { input, targets } => {
            if !check_targets(input, targets)? {
                process::exit(1);
            }
            Ok(())
        },
        Command::Print { input, kind } => print(input, *kind),
    }
}

fn generate(input: &Input, targets: &Targets) -> Result<()> {
    let targets = targets.list()?;
    let registry = input.load()?;

    let artifacts = output::render_all(&registry, &input.config(), &targets).context("generation failed")?;
    output::write_all(&artifacts).context("failed to write generated sources")?;

    log::info!("generated {} file(s) for {}", artifacts.len(), input.profile);
    Ok(())
}

/// Returns whether every destination is up to date.
fn check_targets(input: &Input, targets: &Targets) -> Result<bool> {
    let targets = targets.list()?;
    let registry = input.load()?;

    let artifacts = output::render_all(&registry, &input.config(), &targets).context("generation failed")?;
    let report = check::check(&artifacts).context("failed to read generated sources")?;

    for entry in report.outdated() {
        println!("{}", entry);
    }
    Ok(report.is_up_to_date())
}

fn print(input: &Input, kind: OutputKind) -> Result<()> {
    let registry = input.load()?;
    let text = glfn_generator::generate(&registry, &input.config(), kind).context("generation failed")?;

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
