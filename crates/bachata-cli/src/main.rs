//! CLI entry point for the Bachata Database.
//!
//! This binary opens the interactive song browser, or runs the filter once
//! and prints the result for scripts.
//!
//! # Usage
//!
//! ```bash
//! bachata [OPTIONS] [COMMAND]
//!
//! # Interactive browser (default)
//! bachata browse --category legend --search "romeo"
//!
//! # Print the sensual songs with their search links
//! bachata list --category sensual --links
//!
//! # Print the search link for the third song
//! bachata link 3
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

use std::io::Write;

use bachata_core::{AppState, Catalog, CategoryFilter, Config, Song, filter, link};
use bachata_tui::Theme;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::eyre;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use unicode_width::UnicodeWidthStr;

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Browse the Bachata Database: a curated catalog of bachata songs.
///
/// Without a subcommand the interactive browser starts.
#[derive(Parser)]
#[command(name = "bachata", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Command to execute (defaults to `browse`).
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a JSON configuration file.
    #[arg(short, long, global = true, env = "BACHATA_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Start the interactive browser.
    Browse(BrowseArgs),

    /// Print the songs matching a category and search text.
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = ListFormat::Table)]
        format: ListFormat,

        /// Append the video search link of each song.
        #[arg(short, long)]
        links: bool,
    },

    /// Print the video search link of a song.
    Link {
        /// 1-based position of the song in the full catalog.
        index: usize,
    },
}

/// Category and search preset shared by `browse` and `list`.
#[derive(Args, Default)]
struct FilterArgs {
    /// Category tab: all, legend, sensual, remix or others.
    #[arg(long)]
    category: Option<CategoryFilter>,

    /// Search text (space-separated words must all match).
    #[arg(short, long)]
    search: Option<String>,
}

/// Arguments of the `browse` command.
#[derive(Args, Default)]
struct BrowseArgs {
    #[command(flatten)]
    filter: FilterArgs,

    /// Write logs to this file (the browser owns the terminal).
    #[arg(long)]
    log_file: Option<Utf8PathBuf>,
}

/// List output format.
#[derive(Clone, Copy, ValueEnum)]
enum ListFormat {
    /// Aligned columns.
    Table,
    /// JSON array.
    Json,
    /// CSV with a header row.
    Csv,
}

/// Where log events go.
enum LogTarget<'a> {
    /// Standard error, for one-shot commands.
    Stderr,
    /// Discarded, so the browser's screen stays intact.
    Sink,
    /// Appended to a file.
    File(&'a Utf8Path),
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects the `RUST_LOG` environment variable if set. Otherwise, uses
/// `debug` level if `--verbose` is set, or `info` level by default.
///
/// The returned guard flushes the file writer and must be held until exit.
fn init_tracing(
    verbose: bool,
    use_ansi: bool,
    target: &LogTarget<'_>,
) -> color_eyre::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "info" };
        EnvFilter::new(format!("{level},mio=warn"))
    });

    let registry = tracing_subscriber::registry().with(filter);

    match target {
        LogTarget::Stderr => {
            registry
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_ansi(use_ansi)
                        .with_writer(std::io::stderr),
                )
                .init();
            Ok(None)
        }
        LogTarget::Sink => {
            registry
                .with(fmt::layer().with_writer(std::io::sink))
                .init();
            Ok(None)
        }
        LogTarget::File(path) => {
            let file_name = path
                .file_name()
                .ok_or_else(|| eyre!("Log file path has no file name: {path}"))?;
            let directory = match path.parent() {
                Some(parent) if !parent.as_str().is_empty() => parent,
                _ => Utf8Path::new("."),
            };

            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            registry
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Ok(Some(guard))
        }
    }
}

/// Loads the configuration file if one was given, defaults otherwise.
fn load_config(path: Option<&Utf8Path>) -> color_eyre::Result<Config> {
    match path {
        Some(path) => {
            let config = Config::from_json_file(path)?;
            info!(path = %path, "Loaded configuration");
            Ok(config)
        }
        None => Ok(Config::default()),
    }
}

/// Returns whether color output is allowed by the flag and `NO_COLOR`.
fn colors_enabled(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var_os("NO_COLOR").is_none_or(|value| value.is_empty())
}

/// Picks the browser theme.
fn select_theme(use_color: bool) -> Theme {
    if use_color {
        Theme::dark()
    } else {
        Theme::monochrome()
    }
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

/// Runs the interactive browser.
///
/// # Errors
///
/// Returns an error if there is no terminal or drawing fails.
async fn run_browse(
    config: Config,
    args: &BrowseArgs,
    use_color: bool,
) -> color_eyre::Result<()> {
    let category = args.filter.category.unwrap_or_default();
    let search = args.filter.search.clone().unwrap_or_default();
    info!(%category, search = %search, "Starting browser");

    let theme = select_theme(use_color);
    let state = AppState::with_preset(category, search);
    let catalog = Catalog::builtin();

    // Handle SIGTERM for graceful shutdown on Unix
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm = signal(SignalKind::terminate())?;

        tokio::select! {
            result = bachata_tui::run(config, catalog, state, theme) => {
                result.map_err(|e| eyre!("TUI error: {e}"))?;
            }
            _ = sigterm.recv() => {
                info!("Received SIGTERM, shutting down");
            }
        }
    }

    #[cfg(not(unix))]
    {
        bachata_tui::run(config, catalog, state, theme)
            .await
            .map_err(|e| eyre!("TUI error: {e}"))?;
    }

    Ok(())
}

/// Filters the catalog once and prints the result.
///
/// # Errors
///
/// Returns an error if serialization or writing to stdout fails.
fn run_list(filter_args: &FilterArgs, format: ListFormat, links: bool) -> color_eyre::Result<()> {
    let catalog = Catalog::builtin();
    let category = filter_args.category.unwrap_or_default();
    let search = filter_args.search.as_deref().unwrap_or_default();

    let songs = filter(catalog.songs(), category, search);
    debug!(%category, search, matched = songs.len(), "Filtered catalog");

    let content = match format {
        ListFormat::Table => render_table(&songs, links),
        ListFormat::Json => render_json(&songs, links)?,
        ListFormat::Csv => render_csv(&songs, links),
    };

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write!(handle, "{content}")?;

    Ok(())
}

/// Prints the search link of the song at a 1-based catalog position.
///
/// # Errors
///
/// Returns an error if the position is outside the catalog.
fn run_link(index: usize) -> color_eyre::Result<()> {
    let catalog = Catalog::builtin();
    let song = index
        .checked_sub(1)
        .and_then(|position| catalog.get(position))
        .ok_or_else(|| {
            eyre!(
                "No song at position {index} (the catalog has songs 1 to {})",
                catalog.len()
            )
        })?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", link::search_url(song))?;

    Ok(())
}

// =============================================================================
// OUTPUT HELPERS
// =============================================================================

/// Formats a 1-based display number the way the browser does.
fn display_number(position: usize) -> String {
    format!("{:02}", position + 1)
}

/// Pads `text` with spaces to `width` terminal columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

/// Renders songs as aligned columns.
fn render_table(songs: &[&Song], links: bool) -> String {
    use std::fmt::Write;

    let mut header = vec!["#", "TITLE", "YEAR", "ARTIST", "CATEGORY"];
    if links {
        header.push("LINK");
    }

    let rows: Vec<Vec<String>> = songs
        .iter()
        .enumerate()
        .map(|(position, song)| {
            let mut row = vec![
                display_number(position),
                song.title.to_owned(),
                song.year.to_string(),
                song.artist.to_owned(),
                song.category.as_str().to_uppercase(),
            ];
            if links {
                row.push(link::search_url(song));
            }
            row
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|title| title.width()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut output = String::new();
    let header_cells = header.iter().map(|title| (*title).to_owned());
    for line in std::iter::once(header_cells.collect::<Vec<_>>()).chain(rows) {
        let cells: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, width)| pad(cell, *width))
            .collect();
        let _ = writeln!(output, "{}", cells.join("  ").trim_end());
    }

    output
}

/// Renders songs as a JSON array.
fn render_json(songs: &[&Song], links: bool) -> color_eyre::Result<String> {
    #[derive(serde::Serialize)]
    struct Entry<'a> {
        number: String,
        #[serde(flatten)]
        song: &'a Song,
        #[serde(skip_serializing_if = "Option::is_none")]
        link: Option<String>,
    }

    let entries: Vec<Entry<'_>> = songs
        .iter()
        .enumerate()
        .map(|(position, song)| Entry {
            number: display_number(position),
            song,
            link: links.then(|| link::search_url(song)),
        })
        .collect();

    let mut json = serde_json::to_string_pretty(&entries)
        .map_err(|e| eyre!("Failed to serialize JSON: {e}"))?;
    json.push('\n');
    Ok(json)
}

/// Renders songs as CSV.
fn render_csv(songs: &[&Song], links: bool) -> String {
    use std::fmt::Write;

    let mut output = String::from("number,title,year,artist,category");
    output.push_str(if links { ",link\n" } else { "\n" });

    for (position, song) in songs.iter().enumerate() {
        let number = display_number(position);
        let title = escape_csv(song.title);
        let artist = escape_csv(song.artist);
        let year = song.year;
        let category = song.category.as_str();

        let _ = write!(output, "{number},{title},{year},{artist},{category}");
        if links {
            let _ = write!(output, ",{}", escape_csv(&link::search_url(song)));
        }
        output.push('\n');
    }

    output
}

/// Escapes a string for CSV output.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_owned()
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let use_color = colors_enabled(cli.no_color);

    let default_browse = BrowseArgs::default();
    let browse_args = match &cli.command {
        None => Some(&default_browse),
        Some(Commands::Browse(args)) => Some(args),
        Some(_) => None,
    };

    let target = match browse_args {
        Some(BrowseArgs {
            log_file: Some(path),
            ..
        }) => LogTarget::File(path),
        Some(_) => LogTarget::Sink,
        None => LogTarget::Stderr,
    };
    let _guard = init_tracing(cli.verbose, use_color, &target)?;

    let config = load_config(cli.config.as_deref())?;

    if let Some(args) = browse_args {
        return run_browse(config, args, use_color).await;
    }

    match &cli.command {
        Some(Commands::List {
            filter,
            format,
            links,
        }) => run_list(filter, *format, *links),
        Some(Commands::Link { index }) => run_link(*index),
        Some(Commands::Browse(_)) | None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bachata_core::Category;
    use clap::CommandFactory;

    const OBSESION: Song = Song::new("Obsesión", "Aventura", Category::Legend, 2002);
    const DARTE: Song = Song::new("Darte un Beso", "Prince Royce", Category::Others, 2013);

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_browse() {
        let cli = Cli::try_parse_from(["bachata"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_list_arguments_parse() {
        let cli = Cli::try_parse_from([
            "bachata", "list", "--category", "legend", "-s", "romeo", "--format", "csv", "--links",
        ])
        .unwrap();

        let Some(Commands::List {
            filter,
            format,
            links,
        }) = cli.command
        else {
            panic!("expected list command");
        };
        assert_eq!(filter.category, Some(CategoryFilter::Only(Category::Legend)));
        assert_eq!(filter.search.as_deref(), Some("romeo"));
        assert!(matches!(format, ListFormat::Csv));
        assert!(links);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        assert!(Cli::try_parse_from(["bachata", "list", "--category", "salsa"]).is_err());
    }

    #[test]
    fn test_display_number_is_two_digits() {
        assert_eq!(display_number(0), "01");
        assert_eq!(display_number(38), "39");
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("Promise"), "Promise");
        assert_eq!(escape_csv("Hey, Mama"), "\"Hey, Mama\"");
        assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_render_csv() {
        let csv = render_csv(&[&OBSESION, &DARTE], false);
        assert_eq!(
            csv,
            "number,title,year,artist,category\n\
             01,Obsesión,2002,Aventura,legend\n\
             02,Darte un Beso,2013,Prince Royce,others\n"
        );
    }

    #[test]
    fn test_render_csv_with_links() {
        let csv = render_csv(&[&OBSESION], true);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("number,title,year,artist,category,link"));
        assert_eq!(
            lines.next(),
            Some(
                "01,Obsesión,2002,Aventura,legend,\
                 https://www.youtube.com/results?search_query=Aventura%20Obsesi%C3%B3n%20bachata"
            )
        );
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let table = render_table(&[&OBSESION, &DARTE], false);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("#   TITLE"));
        assert!(lines[1].starts_with("01  Obsesión       2002"));
        assert!(lines[2].starts_with("02  Darte un Beso  2013"));

        let year_column = lines[0].find("YEAR").unwrap();
        assert_eq!(lines[2].find("2013"), Some(year_column));
    }

    #[test]
    fn test_render_table_empty_has_header_only() {
        let table = render_table(&[], true);
        assert_eq!(table, "#  TITLE  YEAR  ARTIST  CATEGORY  LINK\n");
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&[&DARTE], true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["number"], "01");
        assert_eq!(value[0]["title"], "Darte un Beso");
        assert_eq!(value[0]["year"], 2013);
        assert_eq!(
            value[0]["link"],
            "https://www.youtube.com/results?search_query=Prince%20Royce%20Darte%20un%20Beso%20bachata"
        );
    }

    #[test]
    fn test_render_json_without_links_omits_field() {
        let json = render_json(&[&OBSESION], false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value[0].get("link").is_none());
        assert_eq!(value[0]["category"], "legend");
    }

    #[test]
    fn test_select_theme_monochrome_without_color() {
        assert_eq!(select_theme(false), Theme::monochrome());
        assert_eq!(select_theme(true), Theme::dark());
    }
}
