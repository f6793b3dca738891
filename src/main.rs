//! Gomoku console game
//!
//! Play White against the one-ply engine. The engine takes Black and opens.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gomoku::{AppConfig, GameError, GamePhase, GameSession, Pos, Stone};

/// Play five-in-a-row against a one-ply engine.
#[derive(Parser)]
#[command(name = "gomoku", about = "Play Gomoku against a one-ply engine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "gomoku.toml")]
    config: PathBuf,

    /// Override board size
    #[arg(long)]
    size: Option<usize>,

    /// Do not print run counts after each move
    #[arg(long)]
    no_analysis: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(size) = cli.size {
        config.board_size = size;
    }
    if cli.no_analysis {
        config.show_analysis = false;
    }
    config.validate()?;

    let mut session = GameSession::new(config.board_size)?;
    println!("Game started. Black (Computer) plays first.");
    println!("Enter moves as `row col`, or `restart` / `quit`.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        match session.phase() {
            GamePhase::ComputerThinking => {
                let result = session.play_engine_move()?;
                println!("Computer placed at {}", result.best_move);
                show(&session, &config);
                continue;
            }
            GamePhase::Finished(result) => {
                println!("Game over: {result}. Type `restart` to play again.");
            }
            GamePhase::AwaitingPlayerMove => {}
        }

        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match parse_command(&line) {
            Command::Quit => break,
            Command::Restart => {
                session.restart();
                println!("Game restarted. Black (Computer) plays first.");
            }
            Command::Play(pos) => match session.play_human_move(pos) {
                Ok(_) => {
                    println!("You placed at {pos}");
                    show(&session, &config);
                }
                Err(err @ (GameError::IllegalMove { .. } | GameError::GameOver(_))) => {
                    println!("{err}");
                }
                Err(err) => return Err(err.into()),
            },
            Command::Invalid(text) => println!("Could not read `{text}`, expected `row col`"),
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

enum Command {
    Play(Pos),
    Restart,
    Quit,
    Invalid(String),
}

fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    match trimmed {
        "quit" | "exit" | "q" => return Command::Quit,
        "restart" | "r" => return Command::Restart,
        _ => {}
    }

    let mut parts = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty());
    let coords = (
        parts.next().and_then(|s| s.parse().ok()),
        parts.next().and_then(|s| s.parse().ok()),
        parts.next(),
    );
    match coords {
        (Some(row), Some(col), None) => Command::Play(Pos::new(row, col)),
        _ => Command::Invalid(trimmed.to_string()),
    }
}

fn show(session: &GameSession, config: &AppConfig) {
    println!("{}", session.board());
    if config.show_analysis {
        println!("Black stones (Computer)");
        print!("{}", session.analysis(Stone::Black));
        println!("White stones (You)");
        print!("{}", session.analysis(Stone::White));
    }
}
