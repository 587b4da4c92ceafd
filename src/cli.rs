//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::stderr_logger::StderrLogger;
use crate::adapters::text_view::TextView;
use crate::domain::config_validation::validate_config;
use crate::domain::error::GainTrackerError;
use crate::domain::form::{FormPolicy, TradeForm};
use crate::domain::format::signed_percent;
use crate::domain::overview::OverviewFormula;
use crate::domain::settings::{DEFAULT_CURRENCY_SYMBOL, Settings, parse_level, raise_level};
use crate::domain::store::PortfolioStore;
use crate::domain::trade_record::capital_gain_pct;
use crate::ports::config_port::ConfigPort;
use crate::ports::trade_source_port::TradeSourcePort;
use crate::session::Session;

#[derive(Parser, Debug)]
#[command(name = "gaintracker", about = "In-memory stock trade capital gains tracker")]
pub struct Cli {
    /// Raise log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Enter trades interactively
    Session {
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Read commands from a file instead of stdin
        #[arg(long)]
        script: Option<PathBuf>,
    },
    /// Summarise trades from a CSV file
    Report {
        #[arg(short, long)]
        trades: PathBuf,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Capital gain of a single trade
    Gain {
        #[arg(long, allow_hyphen_values = true)]
        units_bought: f64,
        #[arg(long, allow_hyphen_values = true)]
        buy_price: f64,
        #[arg(long, allow_hyphen_values = true)]
        units_sold: f64,
        #[arg(long, allow_hyphen_values = true)]
        sell_price: f64,
    },
}

/// Outcome of a batch report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    pub admitted: usize,
    pub skipped: usize,
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Session { config, script } => {
            run_session(config.as_ref(), script.as_ref(), cli.verbose)
        }
        Command::Report { trades, config } => run_report(&trades, config.as_ref(), cli.verbose),
        Command::Gain {
            units_bought,
            buy_price,
            units_sold,
            sell_price,
        } => run_gain(units_bought, buy_price, units_sold, sell_price),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, GainTrackerError> {
    FileConfigAdapter::from_file(path).map_err(|e| GainTrackerError::ConfigParse {
        file: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Validate `adapter` and resolve it into settings. Each `verbose` step
/// raises the configured log level by one.
pub fn build_settings(adapter: &dyn ConfigPort, verbose: u8) -> Result<Settings, GainTrackerError> {
    validate_config(adapter)?;

    let currency_symbol = adapter
        .get_string("display", "currency_symbol")
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string());

    let overview_formula = if adapter.get_bool("overview", "weight_by_units", false) {
        OverviewFormula::UnitWeighted
    } else {
        OverviewFormula::PerUnitPrice
    };

    let base_level = adapter
        .get_string("log", "level")
        .and_then(|l| parse_level(&l))
        .unwrap_or(Settings::default().log_level);

    Ok(Settings {
        currency_symbol,
        overview_formula,
        form_policy: FormPolicy {
            reject_negative: adapter.get_bool("form", "reject_negative", false),
        },
        log_level: raise_level(base_level, verbose),
    })
}

/// Load, validate and apply the optional config file, then install the logger.
fn prepare(config_path: Option<&PathBuf>, verbose: u8) -> Result<Settings, ExitCode> {
    let adapter = match config_path {
        Some(path) => load_config(path),
        None => Ok(FileConfigAdapter::empty()),
    };
    let settings = adapter.and_then(|a| build_settings(&a, verbose)).map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::from(&e)
    })?;

    if let Err(e) = StderrLogger::init(settings.log_level) {
        eprintln!("warning: logger already installed: {e}");
    }
    if let Some(path) = config_path {
        log::info!("loaded config from {}", path.display());
    }
    Ok(settings)
}

fn run_session(config_path: Option<&PathBuf>, script: Option<&PathBuf>, verbose: u8) -> ExitCode {
    let settings = match prepare(config_path, verbose) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let mut session = Session::new(io::stdout(), &settings);
    let result = match script {
        Some(path) => {
            log::info!("reading commands from {}", path.display());
            match File::open(path) {
                Ok(file) => session.run(BufReader::new(file), false),
                Err(e) => Err(GainTrackerError::Io(e)),
            }
        }
        None => {
            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            session.run(stdin.lock(), prompt)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

/// Feed every source record through the form, then render the page once.
///
/// Records the form refuses are skipped with a warning.
pub fn run_report_pipeline<W: Write>(
    source: &dyn TradeSourcePort,
    settings: &Settings,
    out: W,
) -> Result<ReportSummary, GainTrackerError> {
    let trades = source.load_trades()?;
    let mut store = PortfolioStore::new();
    let mut form = TradeForm::new(settings.form_policy);
    let mut skipped = 0;

    for (i, trade) in trades.into_iter().enumerate() {
        let ticker = trade.ticker.clone();
        form.fill(trade);
        if let Err(e) = form.submit(&mut store) {
            log::warn!("skipping row {} ({}): {}", i + 1, ticker, e);
            form.reset();
            skipped += 1;
        }
    }

    let view = TextView::new(out, settings);
    view.render_page(store.records())?;

    Ok(ReportSummary {
        admitted: store.len(),
        skipped,
    })
}

fn run_report(trades_path: &PathBuf, config_path: Option<&PathBuf>, verbose: u8) -> ExitCode {
    let settings = match prepare(config_path, verbose) {
        Ok(s) => s,
        Err(code) => return code,
    };

    log::info!("loading trades from {}", trades_path.display());
    let source = CsvAdapter::new(trades_path.clone());
    match run_report_pipeline(&source, &settings, io::stdout().lock()) {
        Ok(summary) => {
            log::info!(
                "{} trade(s) admitted, {} skipped",
                summary.admitted,
                summary.skipped
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_gain(units_bought: f64, buy_price: f64, units_sold: f64, sell_price: f64) -> ExitCode {
    let gain = capital_gain_pct(units_bought, buy_price, units_sold, sell_price);
    println!("{}", signed_percent(gain));
    ExitCode::SUCCESS
}
