mod app;
mod calendar;
mod config;
mod grid;
mod help;
mod selection;
mod theme;
use crate::app::App;
use crate::calendar::CalendarView;
use crate::config::{parse_year_month, Config};
use anyhow::Context;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use env_logger::{Builder, Env, Target};
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::fs::File;
use std::io;
use std::path::Path;
use time::OffsetDateTime;

/// Environment variable holding the log filter used with `--log-file`
const LOG_ENV_VAR: &str = "RANGECAL_LOG";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run(Config),
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut config = Config::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('n') | Arg::Long("months") => {
                    config.month_qty = parser.value()?.parse()?;
                }
                Arg::Long("log-file") => config.log_file = Some(parser.value()?.into()),
                Arg::Value(value) if config.start.is_none() => {
                    let value = value.string()?;
                    match parse_year_month(&value) {
                        Ok(month) => config.start = Some(month),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(config))
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run(config) => {
                if let Some(path) = config.log_file.as_deref() {
                    init_logging(path)?;
                }
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let months = config
                    .month_span(today.year())
                    .context("failed to determine months to display")?;
                log::info!("Displaying {} months: {months}", months.len());
                with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    App::new(CalendarView::new(&months)).run(terminal)?;
                    Ok(())
                })
            }
            Command::Help => {
                println!("Usage: rangecal [options] [YYYY-MM]");
                println!();
                println!("Terminal calendar for selecting a range of up to a week");
                println!();
                println!("The calendar starts at the given month, or at May of the current year");
                println!("if no month is given.");
                println!();
                println!("Options:");
                println!("  -n, --months <N>   Number of months to display [default: 6]");
                println!("  --log-file <PATH>  Write log messages to the given file; the");
                println!("                     {LOG_ENV_VAR} environment variable sets the");
                println!("                     log level [default: info]");
                println!("  -h, --help         Display this help message and exit");
                println!("  -V, --version      Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    Builder::from_env(Env::new().filter_or(LOG_ENV_VAR, "info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("failed to initialize logging")
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = execute!(io::stdout(), EnableMouseCapture)
        .context("failed to enable mouse capture")
        .and_then(|()| func(terminal));
    if let Err(e) = execute!(io::stdout(), DisableMouseCapture) {
        log::warn!("Failed to disable mouse capture: {e}");
    }
    ratatui::restore();
    r
}
