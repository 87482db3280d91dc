//! Marquee terminal demo.
//!
//! A line-oriented front end over [`SearchSession`]: typed text becomes
//! query edits, `:commands` drive navigation and focus, and the stock
//! catalog backs it all. A real host would tick the session from its frame
//! loop; here we sleep through the debounce after each line instead.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marquee::{
    CatalogItem, Config, Direction, JsonFileStore, KeyValueStore, MemoryStore, SearchSession,
    SearchView, StaticCatalog,
};

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Incremental search over a demo media catalog", long_about = None)]
struct Cli {
    /// Keep recent searches in memory only
    #[arg(long)]
    ephemeral: bool,

    /// Override the debounce delay in milliseconds
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,

    /// Load configuration from a specific file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Prints the panel to stdout; rows are cached so a highlight change can
/// repaint them with a marker.
struct TerminalView {
    rows: Vec<String>,
    highlighted: Option<usize>,
}

impl TerminalView {
    fn new() -> Self {
        Self {
            rows: Vec::new(),
            highlighted: None,
        }
    }

    fn repaint(&self) {
        for (i, row) in self.rows.iter().enumerate() {
            let marker = if self.highlighted == Some(i) { ">" } else { " " };
            println!("{} {}", marker, row);
        }
    }
}

impl SearchView for TerminalView {
    fn render_results(&mut self, shown: &[CatalogItem], total: usize, query: &str) {
        self.rows = shown.iter().map(format_row).collect();
        self.highlighted = None;

        println!("Results for \"{}\":", query);
        self.repaint();
        if total > shown.len() {
            println!("  ... and {} more", total - shown.len());
        }
    }

    fn render_no_results(&mut self, query: &str) {
        self.rows.clear();
        self.highlighted = None;
        println!("No results found for \"{}\"", query);
    }

    fn render_recent(&mut self, terms: &[String]) {
        self.rows = terms.to_vec();
        self.highlighted = None;

        if terms.is_empty() {
            println!("No recent searches");
        } else {
            println!("Recent searches:");
            self.repaint();
        }
    }

    fn set_highlight(&mut self, index: Option<usize>) {
        self.highlighted = index;
        self.repaint();
    }

    fn hide(&mut self) {
        println!("(panel hidden)");
    }
}

fn format_row(item: &CatalogItem) -> String {
    let mut row = item.title.clone();
    if let Some(year) = item.year {
        row.push_str(&format!(" ({})", year));
    }
    row.push_str(&format!(" - {}", item.genre));
    if let Some(progress) = item.progress {
        row.push_str(&format!(" [{}% watched]", progress));
    }
    row
}

fn print_help() {
    println!("Type to search; an empty line shows recent searches.");
    println!("Commands: :down :up :enter :esc :clear :blur :focus :help :quit");
}

/// Fold CLI overrides into the loaded config. Overridden values pass
/// through the same clamps as file-sourced ones.
fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(ms) = cli.debounce_ms {
        config.search.debounce_ms = ms;
    }
    config.validate();
}

/// Pick the history store: in-memory, the configured file, or the default
/// per-user location, in that order.
fn build_store(ephemeral: bool, config: &Config) -> Box<dyn KeyValueStore> {
    if ephemeral {
        Box::new(MemoryStore::new())
    } else if let Some(path) = config.history.store_file.clone() {
        Box::new(JsonFileStore::open(path))
    } else {
        Box::new(JsonFileStore::open_default())
    }
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "marquee=debug"
    } else {
        "marquee=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = match cli.config.as_deref() {
        Some(path) => match Config::load_path(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Config::load(),
    };
    apply_cli_overrides(&mut config, &cli);

    let store = build_store(cli.ephemeral, &config);

    let catalog = StaticCatalog::new(marquee::sample::sample_catalog());
    let mut session = SearchSession::new(config, &catalog, store, Box::new(TerminalView::new()));

    print_help();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let now = Instant::now();
        let input = line.trim_end();

        let mut needs_settle = false;
        match input {
            ":q" | ":quit" => break,
            ":help" => print_help(),
            ":down" => session.on_navigate(Direction::Forward),
            ":up" => session.on_navigate(Direction::Backward),
            ":enter" => {
                if let Some(item) = session.on_confirm() {
                    println!("Selected: {}", item.title);
                }
            }
            ":esc" => session.on_dismiss(),
            ":clear" => session.clear_recent(),
            ":focus" => session.on_focus_gained(),
            ":blur" => {
                session.on_focus_lost(now);
                needs_settle = true;
            }
            text => {
                session.on_query_changed(text, now);
                needs_settle = true;
            }
        }

        if needs_settle {
            let config = session.config();
            let wait = config.search.debounce_ms.max(config.search.blur_grace_ms) + 10;
            std::thread::sleep(Duration::from_millis(wait));
            session.tick(Instant::now());
        }
    }
}
