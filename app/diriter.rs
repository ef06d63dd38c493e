//! Command-line interface for diriter.
//!
//! Walks a directory with one of the library's iterators and prints every
//! entry in the order it was produced.

use clap::{Parser, ValueEnum};
use diriter::{DirEntry, DirIterBuilder, DirIterOptions, Traversal, walk};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::exit;

/// diriter — print a directory the way each iterator sees it
#[derive(Parser)]
#[command(name = "diriter", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    root: Option<PathBuf>,

    /// Traversal order
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// Sort each level of a recursive traversal
    #[arg(long)]
    sorted: bool,

    /// Max depth (unlimited if not set)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Ignore patterns (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,

    /// Follow symlinks to directories
    #[arg(long)]
    follow_links: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Paths)]
    format: OutputFormat,

    /// Pretty output (indented JSON)
    #[arg(short, long)]
    pretty: bool,

    /// Load base options from a JSON file; flags given here override it
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Mode {
    Flat,
    Sorted,
    DepthFirst,
    SiblingsFirst,
}

impl From<Mode> for Traversal {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Flat => Traversal::Flat,
            Mode::Sorted => Traversal::Sorted,
            Mode::DepthFirst => Traversal::DepthFirst,
            Mode::SiblingsFirst => Traversal::SiblingsFirst,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Paths,
    /// File names indented by depth, in traversal order. Siblings-first
    /// output is not nested, so this is an indented list, not a drawing.
    Tree,
    Json,
}

fn load_config(path: &Path) -> Result<DirIterOptions, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read config {}: {}", path.display(), e))?;
    serde_json::from_str(&text).map_err(|e| format!("invalid config {}: {}", path.display(), e))
}

impl Cli {
    fn into_options(self) -> Result<(DirIterOptions, OutputFormat, bool), String> {
        let base = match &self.config {
            Some(path) => load_config(path)?,
            None => DirIterOptions::default(),
        };
        let mut builder = DirIterBuilder::from_options(base);
        if let Some(root) = self.root {
            builder = builder.root(root);
        }
        if let Some(mode) = self.mode {
            builder = builder.traversal(mode.into());
        }
        if self.sorted {
            builder = builder.sorted(true);
        }
        if let Some(depth) = self.max_depth {
            builder = builder.max_depth(depth);
        }
        if self.follow_links {
            builder = builder.follow_links(true);
        }
        if !self.ignore_patterns.is_empty() {
            builder = builder.ignore_patterns(self.ignore_patterns);
        }
        Ok((builder.build(), self.format, self.pretty))
    }
}

#[cfg(feature = "logging")]
fn init_logging() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}

fn main() {
    #[cfg(feature = "logging")]
    init_logging();

    let cli = Cli::parse();
    let (options, format, pretty) = cli.into_options().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        exit(1);
    });

    match format {
        OutputFormat::Json => run_json(&options, pretty),
        OutputFormat::Paths | OutputFormat::Tree => run_streaming(&options, format),
    }
}

fn run_streaming(options: &DirIterOptions, format: OutputFormat) {
    let entries = match walk(options) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                eprintln!("Error: {}", e);
                exit(1);
            }
        };

        if writeln!(handle, "{}", format_line(&entry, format)).is_err() {
            eprintln!("Failed to write to stdout");
            exit(1);
        }
    }
}

fn format_line(entry: &DirEntry, format: OutputFormat) -> String {
    match format {
        OutputFormat::Tree => {
            let indent = "    ".repeat(entry.depth.saturating_sub(1));
            let suffix = if entry.is_dir { "/" } else { "" };
            format!("{}{}{}", indent, entry.file_name().to_string_lossy(), suffix)
        }
        _ => entry.path.display().to_string(),
    }
}

fn run_json(options: &DirIterOptions, pretty: bool) {
    let entries = match diriter::collect_entries(options) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    let json = if pretty {
        serde_json::to_string_pretty(&entries)
    } else {
        serde_json::to_string(&entries)
    }
    .unwrap_or_else(|e| {
        eprintln!("JSON serialization error: {}", e);
        exit(1);
    });
    println!("{}", json);
}
