//! Command-line interface for resolving Drift module build descriptors

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use driftbuild_core::{BuildContext, EngineVersion, ModuleDescriptor, Platform};
use driftbuild_rules::ModuleRegistry;
use log::info;

#[derive(Parser)]
#[command(name = "driftbuild")]
#[command(about = "Build descriptor resolver for the Drift plugin modules")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable quiet mode (suppress non-error output)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one module (or all modules) for a build context
    Resolve {
        /// Module name; omit with --all to resolve every module
        module: Option<String>,
        /// Resolve every registered module
        #[arg(long, conflicts_with = "module")]
        all: bool,
        /// Target platform, e.g. Win64 or Mac
        #[arg(long)]
        platform: Platform,
        /// Host engine version, e.g. 4.20
        #[arg(long)]
        engine_version: EngineVersion,
        /// Resolve for an editor target
        #[arg(long)]
        editor: bool,
        /// Request unity (combined translation unit) builds
        #[arg(long)]
        unity: bool,
        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
    /// List the registered modules
    List,
    /// Validate every authored rule set and exit
    Validate,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    /// Structured descriptor as JSON
    Json,
    /// Compiler-style flag lines
    Flags,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    match cli.command {
        Commands::Resolve {
            module,
            all,
            platform,
            engine_version,
            editor,
            unity,
            format,
        } => handle_resolve(module, all, platform, engine_version, editor, unity, format),
        Commands::List => handle_list(),
        Commands::Validate => handle_validate(),
    }
}

fn init_logging(cli: &Cli) {
    let log_level = if cli.quiet {
        log::LevelFilter::Error
    } else if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp_secs()
        .init();
}

#[allow(clippy::too_many_arguments)]
fn handle_resolve(
    module: Option<String>,
    all: bool,
    platform: Platform,
    engine_version: EngineVersion,
    editor: bool,
    unity: bool,
    format: OutputFormat,
) -> Result<()> {
    let registry = ModuleRegistry::standard()?;
    let ctx = BuildContext::new(platform, engine_version)
        .with_editor(editor)
        .with_unity_build(unity);

    info!(
        "resolving for {} {} (editor: {}, unity requested: {})",
        platform, engine_version, editor, unity
    );

    let descriptors = if all {
        registry.resolve_all(&ctx)
    } else {
        let name = match module {
            Some(name) => name,
            None => bail!("pass a module name or --all"),
        };
        let rule_set = registry.get(&name).with_context(|| {
            let known: Vec<&str> = registry.module_names().collect();
            format!("unknown module '{}'; known modules: {}", name, known.join(", "))
        })?;
        vec![rule_set.resolve(&ctx)]
    };

    for descriptor in &descriptors {
        print_descriptor(descriptor, format)?;
    }
    Ok(())
}

fn print_descriptor(descriptor: &ModuleDescriptor, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(descriptor)?);
        }
        OutputFormat::Flags => {
            println!("# {}", descriptor.module_name);
            for flag in descriptor.compiler_flags() {
                println!("{}", flag);
            }
        }
    }
    Ok(())
}

fn handle_list() -> Result<()> {
    let registry = ModuleRegistry::standard()?;
    for name in registry.module_names() {
        println!("{}", name);
    }
    Ok(())
}

fn handle_validate() -> Result<()> {
    let registry = ModuleRegistry::standard().context("rule set validation failed")?;
    println!("{} module rule sets valid", registry.len());
    Ok(())
}
