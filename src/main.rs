//! CLI entry point for canopy

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use canopy::tree::DEFAULT_THRESHOLD;
use canopy::{
    MarkdownFormatter, OutputConfig, RenderConfig, StreamingFormatter, TreeError, TreeRenderer,
    print_json, print_markdown,
};
use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "canopy")]
#[command(about = "Print a bounded directory tree, sized for an LLM prompt")]
#[command(version)]
struct Args {
    /// Directory (or file) to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Elide a directory's children when it has more than N entries
    #[arg(short = 't', long = "threshold", value_name = "N", default_value_t = DEFAULT_THRESHOLD)]
    threshold: usize,

    /// Show hidden entries (names starting with '.')
    #[arg(short, long)]
    all: bool,

    /// Count only files toward the threshold; directories are always listed
    #[arg(long = "count-files-only")]
    count_files_only: bool,

    /// Keep entries in the order the filesystem returns them
    #[arg(long = "no-sort")]
    no_sort: bool,

    /// Ignore entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Number of parallel workers for directory scans
    /// (0 = auto-detect, 1 = sequential, N = use N workers)
    #[arg(short = 'j', long = "jobs", default_value = "1")]
    jobs: usize,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Output the lines as a JSON array
    #[arg(long = "json", conflicts_with = "markdown")]
    json: bool,

    /// Output in a Markdown code fence (suitable for LLM context)
    #[arg(long = "markdown", short = 'm', conflicts_with = "json")]
    markdown: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = RenderConfig {
        threshold: args.threshold,
        include_hidden: args.all,
        count_files_only: args.count_files_only,
        sort_entries: !args.no_sort,
        ignore_patterns: args.ignore.clone(),
    };
    log::debug!("render config: {:?}", config);

    let renderer = TreeRenderer::new(config).with_workers(args.jobs);

    let result = if args.json {
        renderer
            .render(&args.path)
            .and_then(|lines| print_json(&lines).map_err(TreeError::from))
    } else if args.markdown {
        let mut formatter = MarkdownFormatter::new(OutputConfig {
            use_color: false,
            ..Default::default()
        });
        renderer
            .render_into(&args.path, &mut formatter)
            .and_then(|()| print_markdown(&formatter).map_err(TreeError::from))
    } else {
        let mut formatter = StreamingFormatter::new(OutputConfig {
            use_color: should_use_color(args.color),
            ..Default::default()
        });
        renderer.render_into(&args.path, &mut formatter)
    };

    if let Err(e) = result {
        eprintln!("canopy: {}", e);
        process::exit(1);
    }
}
