mod app;
mod calendar;
mod help;
mod meetings;
mod schedule;
mod state;
mod theme;
use crate::app::App;
use crate::meetings::Roster;
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use time::{
    format_description::FormatItem,
    macros::{format_description, time},
    Date, OffsetDateTime,
};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run { date: Option<Date> },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut date = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Value(value) if date.is_none() => {
                    let value = value.string()?;
                    match Date::parse(&value, &YMD_FMT) {
                        Ok(d) => date = Some(d),
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
        Ok(Command::Run { date })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run { date } => {
                let now = OffsetDateTime::now_local()
                    .context("failed to determine local time")?;
                // A date argument fixes the clock; meetings are then seeded
                // from 09:00 local on that day.
                let now = match date {
                    Some(d) => d.with_time(time!(9:00)).assume_offset(now.offset()),
                    None => now,
                };
                let roster = Roster::seeded(now);
                with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    App::new(now.date(), roster).run(terminal)?;
                    Ok(())
                })
            }
            Command::Help => {
                println!("Usage: meetcal [YYYY-MM-DD]");
                println!();
                println!("Terminal month calendar with a per-day meeting schedule");
                println!();
                println!("Arguments:");
                println!("  [YYYY-MM-DD]      Use the given date as \"today\"");
                println!();
                println!("Options:");
                println!("  -h, --help        Display this help message and exit");
                println!("  -V, --version     Show the program version and exit");
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

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn parse_args(args: &[&str]) -> Result<Command, lexopt::Error> {
        Command::from_parser(Parser::from_iter(
            std::iter::once("meetcal").chain(args.iter().copied()),
        ))
    }

    #[test]
    fn no_args_runs_with_the_real_clock() {
        assert_eq!(parse_args(&[]).unwrap(), Command::Run { date: None });
    }

    #[test]
    fn date_arg_fixes_the_clock() {
        assert_eq!(
            parse_args(&["2024-03-15"]).unwrap(),
            Command::Run {
                date: Some(date!(2024 - 03 - 15))
            }
        );
    }

    #[test]
    fn bad_date_is_rejected() {
        assert!(parse_args(&["Mar-2024"]).is_err());
        assert!(parse_args(&["2024-03-15", "2024-03-16"]).is_err());
    }

    #[test]
    fn help_and_version_flags() {
        assert_eq!(parse_args(&["-h"]).unwrap(), Command::Help);
        assert_eq!(parse_args(&["--version"]).unwrap(), Command::Version);
    }
}
