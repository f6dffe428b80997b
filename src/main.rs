mod app;
mod command;
mod config;
mod consts;
mod game;
mod highscore;
mod util;
mod warning;
use crate::app::App;
use crate::config::Config;
use crate::game::Game;
use crate::util::Globals;
use crate::warning::Warning;
use anyhow::Context;
use lexopt::prelude::*;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Args::parse() {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("sidewinder: {e}");
            return ExitCode::from(2);
        }
    };
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("sidewinder: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = match args.config {
        Some(ref path) => Config::load(path, false),
        None => Config::load(&Config::default_path()?, true),
    }
    .context("could not load configuration")?;
    let globals = Globals::from_config(&config);
    if args.reset_high_score {
        highscore::reset(globals.high_score_file.as_deref())
            .context("could not reset the high score")?;
        println!("High score reset.");
        return Ok(());
    }
    // A missing file means no high score yet; any other load failure is
    // reported in-game and the session starts from 0.
    let (best, warning) = if globals.save_high_score {
        match highscore::load(globals.high_score_file.as_deref()) {
            Ok(best) => (best, None),
            Err(e) => (0, Some(Warning::from(e))),
        }
    } else {
        (0, None)
    };
    let game = Game::new(globals, best, warning);
    let terminal = ratatui::init();
    let r = App::new(game).run(terminal);
    ratatui::restore();
    match r {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(e).context("terminal I/O failed"),
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct Args {
    config: Option<PathBuf>,
    reset_high_score: bool,
}

impl Args {
    /// Parse the command line.  Returns `Ok(None)` if the program should exit
    /// without running the game (`--help`/`--version`).
    fn parse() -> Result<Option<Args>, lexopt::Error> {
        let mut config = None;
        let mut reset_high_score = false;
        let mut parser = lexopt::Parser::from_env();
        while let Some(arg) = parser.next()? {
            match arg {
                Short('c') | Long("config") => config = Some(PathBuf::from(parser.value()?)),
                Long("reset-high-score") => reset_high_score = true,
                Short('h') | Long("help") => {
                    println!("Usage: sidewinder [-c|--config PATH] [--reset-high-score]");
                    println!();
                    println!("Options:");
                    println!("  -c, --config PATH     Read configuration from PATH");
                    println!("      --reset-high-score");
                    println!("                        Set the recorded high score to 0 and exit");
                    println!("  -h, --help            Show this message and exit");
                    println!("  -V, --version         Show the program version and exit");
                    return Ok(None);
                }
                Short('V') | Long("version") => {
                    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                    return Ok(None);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Some(Args {
            config,
            reset_high_score,
        }))
    }
}
