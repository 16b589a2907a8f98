use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use codespan_reporting::diagnostic::Diagnostic;
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use tracing_subscriber::EnvFilter;

use site::{Catalog, SiteConfig, SiteError};

const SUBCOMMANDS: &[&str] = &["build", "check", "list", "help"];

#[derive(Parser)]
#[command(name = "exemplar", version, about = "Generate a tutorial site from annotated example sources")]
struct Cli {
    /// Config file (default: ./exemplar.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log progress (same as setting VERBOSE)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored error output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the site
    Build(BuildArgs),

    /// Collect and segment every example without writing anything
    Check,

    /// Print the catalog
    List,
}

#[derive(clap::Args)]
struct BuildArgs {
    /// Output directory (overrides the config)
    output: Option<PathBuf>,
}

fn main() {
    let args = with_default_subcommand(std::env::args().collect());
    let cli = Cli::parse_from(&args);
    init_tracing(cli.verbose);

    let color_choice = if cli.no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };

    let config = match SiteConfig::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    let config = match &cli.command {
        Command::Build(BuildArgs { output: Some(dir) }) => config.with_output_dir(dir.clone()),
        _ => config,
    };

    let mut files = SimpleFiles::new();
    let result = run(&cli.command, &config, &mut files, color_choice);
    if let Err((error, manifest_id)) = result {
        report(&error, manifest_id, &files, color_choice);
        process::exit(1);
    }
}

/// `exemplar public/` means `exemplar build public/`, and a bare
/// `exemplar` means `exemplar build`.
fn with_default_subcommand(mut args: Vec<String>) -> Vec<String> {
    match first_positional(&args) {
        Some(pos) if !SUBCOMMANDS.contains(&args[pos].as_str()) => {
            args.insert(pos, "build".to_string());
        }
        Some(_) => {}
        None => args.push("build".to_string()),
    }
    args
}

/// Index of the first argument that is neither a flag nor a flag's value.
fn first_positional(args: &[String]) -> Option<usize> {
    let mut i = 1;
    while i < args.len() {
        let arg = args[i].as_str();
        if arg == "-c" || arg == "--config" {
            i += 2;
        } else if arg.starts_with('-') {
            i += 1;
        } else {
            return Some(i);
        }
    }
    None
}

/// `DEBUG=1` turns on segmenter traces, `VERBOSE` (any non-empty value) or
/// `--verbose` turns on progress.
fn log_level(debug: Option<&str>, verbose: Option<&str>, verbose_flag: bool) -> &'static str {
    if debug == Some("1") {
        "debug"
    } else if verbose_flag || verbose.is_some_and(|v| !v.is_empty()) {
        "info"
    } else {
        "warn"
    }
}

/// `RUST_LOG` wins over `log_level`.
fn init_tracing(verbose_flag: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let debug = std::env::var("DEBUG").ok();
        let verbose = std::env::var("VERBOSE").ok();
        EnvFilter::new(log_level(debug.as_deref(), verbose.as_deref(), verbose_flag))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

type RunError = (SiteError, Option<usize>);

fn run(
    command: &Command,
    config: &SiteConfig,
    files: &mut SimpleFiles<String, String>,
    color_choice: ColorChoice,
) -> Result<(), RunError> {
    let source = site::read_manifest(config).map_err(|e| (e, None))?;
    let manifest_id = files.add(config.manifest.display().to_string(), source.clone());
    let with_id = |e: SiteError| (e, Some(manifest_id));

    let manifest = site::parse_manifest(&source, manifest_id).map_err(with_id)?;
    let warnings: Vec<Diagnostic<usize>> =
        manifest.warnings.iter().map(|w| w.to_diagnostic()).collect();
    emit_diagnostics(&warnings, files, color_choice);

    match command {
        Command::Build(_) => {
            let catalog = site::generate(config, &manifest).map_err(with_id)?;
            eprintln!(
                "ok: wrote {} examples to {}",
                catalog.len(),
                config.output_dir.display()
            );
        }
        Command::Check => {
            let catalog = site::collect(config, &manifest).map_err(with_id)?;
            eprintln!(
                "ok: {} examples, {} segments",
                catalog.len(),
                catalog.examples().iter().map(|e| e.segment_count()).sum::<usize>()
            );
        }
        Command::List => {
            let catalog = site::collect(config, &manifest).map_err(with_id)?;
            print_catalog(&catalog);
        }
    }
    Ok(())
}

fn print_catalog(catalog: &Catalog) {
    for entry in catalog.entries() {
        let example = entry.example;
        let alt = match &example.alt_name {
            Some(alt) => format!(" ({})", alt),
            None => String::new(),
        };
        println!(
            "{:>3}. {}  {}{}  [{} files, {} segments]",
            entry.position + 1,
            example.slug,
            example.name,
            alt,
            example.files.len(),
            example.segment_count()
        );
    }
}

fn report(
    error: &SiteError,
    manifest_id: Option<usize>,
    files: &SimpleFiles<String, String>,
    color_choice: ColorChoice,
) {
    let diagnostics = manifest_id
        .map(|id| error.diagnostics(id))
        .unwrap_or_default();
    if diagnostics.is_empty() {
        eprintln!("error: {}", error);
    } else {
        emit_diagnostics(&diagnostics, files, color_choice);
    }
}

fn emit_diagnostics(
    diagnostics: &[Diagnostic<usize>],
    files: &SimpleFiles<String, String>,
    color_choice: ColorChoice,
) {
    if diagnostics.is_empty() {
        return;
    }
    let writer = StandardStream::stderr(color_choice);
    let config = term::Config::default();
    for diagnostic in diagnostics {
        let _ = term::emit_to_write_style(&mut writer.lock(), &config, files, diagnostic);
    }
}
