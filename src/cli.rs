//! CLI module - Command-line interface definition and run orchestration

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::backends::collect::collect_routes;
use crate::backends::manifest::looks_like_supported_project;
use crate::backends::matcher::ExpressMatcher;
use crate::backends::scan::{source_files, DEFAULT_EXTENSION};
use crate::core::error::ScanError;
use crate::core::model::RouteSet;
use crate::core::render::{RenderConfig, Renderer, JSON_EXPORT_FILE};

/// routenum - enumerate the HTTP routes declared in a backend project.
#[derive(Parser, Debug)]
#[command(name = "routenum")]
#[command(
    author,
    version,
    about,
    long_about = r#"routenum walks a backend project, finds route registrations such as
`app.get('/users/:id', handler)` and prints them sorted by method, then path.

Matching is a line-based heuristic, not a parser: only calls on an `app`
receiver that start a line and use a literal path are recognised.

Results go to stdout; progress messages, the confirmation prompt and
diagnostics go to stderr.

Examples:
    routenum ./backend
    routenum ./backend -v
    routenum ./backend --export routes.txt --as-json -y
"#
)]
pub struct Cli {
    /// Path to the backend directory.
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Show where each route is defined.
    #[arg(
        short,
        long,
        long_help = "Append the defining file (relative to DIRECTORY) and line number to each\n\
route in console and text output. Also enables debug diagnostics on stderr."
    )]
    pub verbose: bool,

    /// Export routes to a text file.
    #[arg(
        long,
        value_name = "FILE",
        long_help = "Write the report to FILE, one route per line, instead of printing it.\n\n\
With --verbose each line carries the defining file and line number."
    )]
    pub export: Option<PathBuf>,

    /// Export routes to targets.json.
    #[arg(
        long,
        long_help = "Write the report as a JSON array of {\"method\", \"route\"} objects to\n\
targets.json in the current directory. File and line are not included.\n\n\
May be combined with --export."
    )]
    pub as_json: bool,

    /// Automatically confirm all prompts with yes.
    #[arg(
        short,
        long,
        long_help = "Skip the directory existence check, the package.json framework check and\n\
the confirmation prompt."
    )]
    pub yes: bool,

    /// Source file extensions to scan.
    #[arg(
        long,
        value_name = "EXT",
        value_delimiter = ',',
        default_value = DEFAULT_EXTENSION,
        long_help = "Comma-separated list of file extensions to scan (without the dot).\n\n\
Example: --ext js,mjs"
    )]
    pub ext: Vec<String>,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored output. Color is also disabled when stdout is not a terminal."
    )]
    pub no_color: bool,
}

/// Check that `root` exists and looks like a supported backend project
pub fn preflight(root: &Path) -> std::result::Result<(), ScanError> {
    eprintln!(
        "Checking if '{}' is a supported backend directory...",
        root.display()
    );

    if !root.exists() {
        return Err(ScanError::MissingDirectory(root.to_path_buf()));
    }

    if !looks_like_supported_project(root) {
        return Err(ScanError::UnsupportedProject(root.to_path_buf()));
    }

    Ok(())
}

/// Whether a prompt answer means "proceed". Empty input is a yes.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "" | "y" | "yes")
}

/// Write `prompt` and read one line of answer. EOF counts as empty input.
pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<bool> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

/// Decide whether console output is coloured.
///
/// Colour is only ever forced off; otherwise `colored` follows `NO_COLOR` and `CLICOLOR`.
pub fn configure_color(no_color: bool, stdout_is_terminal: bool) -> bool {
    let color = !no_color && stdout_is_terminal;
    if !color {
        colored::control::set_override(false);
    }
    color
}

/// Progress bar for route collection, hidden unless `visible`
pub fn collection_progress(total: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let progress = ProgressBar::new(total as u64);
    progress.set_style(
        ProgressStyle::with_template("{msg} {bar:40.cyan/blue} {pos}/{len} [{elapsed_precise}]")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    progress.set_message("Enumerating routes");
    progress
}

/// Print or export the collected routes, returning the exit code
pub fn report(
    routes: &RouteSet,
    root: &Path,
    config: RenderConfig,
    export: Option<&Path>,
    as_json: bool,
) -> ExitCode {
    if routes.is_empty() {
        println!("No routes found.");
        return ExitCode::SUCCESS;
    }

    let renderer = Renderer::new(root, config);
    let mut failure: Option<ScanError> = None;

    if export.is_none() && !as_json {
        print!("{}", renderer.render_console(routes));
    }

    if let Some(target) = export {
        match renderer.export_text(routes, target) {
            Ok(()) => println!("You can find the results in {}", target.display()),
            Err(e) => {
                tracing::error!("{}", e);
                failure = Some(e);
            }
        }
    }

    if as_json {
        let target = Path::new(JSON_EXPORT_FILE);
        match renderer.export_json(routes, target) {
            Ok(()) => println!("You can find the results in {}", target.display()),
            Err(e) => {
                tracing::error!("{}", e);
                failure = Some(e);
            }
        }
    }

    println!("Total number of endpoints found: {}", routes.len());

    match failure {
        Some(e) => ExitCode::from(e.exit_code()),
        None => ExitCode::SUCCESS,
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<ExitCode> {
    let color = configure_color(cli.no_color, io::stdout().is_terminal());

    let root = cli.directory.as_path();

    if !cli.yes {
        if let Err(e) = preflight(root) {
            eprintln!("{} {}", "Error:".red().bold(), e);
            return Ok(ExitCode::from(e.exit_code()));
        }

        let prompt = format!(
            "The directory '{}' is a supported backend project. \
Do you want to proceed with enumerating the routes? (Y/n): ",
            root.display()
        );
        let proceed = confirm(&mut io::stdin().lock(), &mut io::stderr(), &prompt)?;
        if !proceed {
            println!("Operation cancelled.");
            return Ok(ExitCode::SUCCESS);
        }
    }

    eprintln!("Enumerating routes, please wait...");
    let files = source_files(root, &cli.ext);
    if cli.verbose {
        eprintln!("Found {} source files. Enumerating routes...", files.len());
    }

    let progress = collection_progress(files.len(), io::stderr().is_terminal());
    let routes = collect_routes(&files, &ExpressMatcher, &progress);

    let config = RenderConfig {
        verbose: cli.verbose,
        color,
    };
    Ok(report(
        &routes,
        root,
        config,
        cli.export.as_deref(),
        cli.as_json,
    ))
}
