// src/cli.rs
//
// Same pipeline as the dashboard, printed as Markdown:
//   cli "contract law"
//   cli "contract law" -s ik -s justia --pages 2
//   cli "native title" -s austlii --settings ./my-settings.json

use std::{io::{self, Write}, path::PathBuf};

use clap::Parser;

use crate::{
    config::settings::{Browser, Settings},
    error::SearchError,
    fetch::LiveFetcher,
    progress::Progress,
    session::SearchSession,
    source::{EnabledSources, Source},
};

#[derive(Parser, Debug)]
#[command(name = "cli", version, about = "Search public legal databases and print Markdown results")]
pub struct Args {
    /// Keyword(s) to search for; multiple words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub keyword: Vec<String>,

    /// Source to query, repeatable: ik, austlii, canlii, justia (default: all in settings)
    #[arg(short = 's', long = "source", value_parser = parse_source)]
    pub sources: Vec<Source>,

    /// Pages to fetch for paged sources (Indian Kanoon, Justia)
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=50))]
    pub pages: u32,

    /// Browser behind the WebDriver endpoint: edge, chrome, firefox
    #[arg(long, value_parser = parse_browser)]
    pub browser: Option<Browser>,

    /// WebDriver endpoint, e.g. http://localhost:9515
    #[arg(long)]
    pub webdriver: Option<String>,

    /// Show the browser window
    #[arg(long)]
    pub no_headless: bool,

    /// Settings file (default: .store/settings.json)
    #[arg(long)]
    pub settings: Option<PathBuf>,
}

fn parse_source(s: &str) -> Result<Source, String> {
    Source::from_key(s).ok_or_else(|| format!("unknown source `{s}` (ik, austlii, canlii, justia)"))
}

fn parse_browser(s: &str) -> Result<Browser, String> {
    Browser::parse(s).ok_or_else(|| format!("unknown browser `{s}` (edge, chrome, firefox)"))
}

impl Args {
    pub fn keyword(&self) -> Option<String> {
        let k = self.keyword.join(" ");
        let k = k.trim();
        (!k.is_empty()).then(|| s!(k))
    }

    pub fn enabled(&self, settings: &Settings) -> EnabledSources {
        if self.sources.is_empty() {
            settings.sources
        } else {
            EnabledSources::only(&self.sources)
        }
    }

    /// Flags win over file and environment.
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(b) = self.browser {
            settings.browser = b;
        }
        if let Some(url) = &self.webdriver {
            settings.webdriver_url = url.clone();
        }
        if self.no_headless {
            settings.headless = false;
        }
    }
}

/// Status lines go to stderr so stdout stays pure Markdown.
struct CliProgress;

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        eprintln!("Searching {total} source(s)…");
    }
    fn source_done(&mut self, source: Source, count: usize) {
        eprintln!("  {source}: {count} result(s)");
    }
    fn source_failed(&mut self, source: Source, error: &str) {
        eprintln!("  {source}: FAILED ({error})");
    }
}

pub fn run(args: Args) -> Result<(), SearchError> {
    crate::log::init();

    let mut settings = match &args.settings {
        Some(path) => {
            let mut s = Settings::load_from(path)?;
            s.apply_env(|k| std::env::var(k).ok());
            s
        }
        None => Settings::load()?,
    };
    args.apply_to(&mut settings);

    let keyword = args.keyword().ok_or(SearchError::EmptyKeyword)?;
    let enabled = args.enabled(&settings);
    logf!("CLI: keyword={keyword:?} sources={enabled:?} pages={}", args.pages);

    let fetcher = LiveFetcher::new(settings)?;
    let mut session = SearchSession::new();
    session.search(&fetcher, &keyword, &enabled, Some(&mut CliProgress));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", session.render_all(&enabled))?;

    for _ in 2..=args.pages {
        for source in enabled.iter().filter(|s| s.is_paged()) {
            session.next_page(&fetcher, source);
            if let Some(err) = &session.state(source).error {
                eprintln!("  {source}: FAILED ({err})");
            }
            writeln!(out, "\n---\n\n{}", session.render(source))?;
        }
    }

    out.flush()?;
    Ok(())
}
