use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use clap::Parser;
use parking_lot::Mutex;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use terminal_chess::chess_errors::{ChessErrors, ChessResult};
use terminal_chess::engines::engine_random::RandomEngine;
use terminal_chess::engines::engine_trait::{Engine, SearchBudget, DEFAULT_MOVETIME_MS};
use terminal_chess::engines::engine_uci::UciEngine;
use terminal_chess::game_state::chess_types::Color;
use terminal_chess::game_state::game_state::GameState;
use terminal_chess::game_state::time_control::{TimeControl, DEFAULT_TIME_CONTROL};
use terminal_chess::utils::render_game_state::render_game_state;

const CLOCK_TICK: Duration = Duration::from_millis(100);

#[derive(Debug, Parser)]
#[command(name = "terminal_chess", version, about = "Play chess in the terminal")]
struct Cli {
    /// UCI engine executable for White, or `random`. Empty for a human player.
    #[arg(short = 'w', long, default_value = "")]
    white_engine: String,

    /// UCI engine executable for Black, or `random`. Empty for a human player.
    #[arg(short = 'b', long, default_value = "")]
    black_engine: String,

    /// Base time and increment per side.
    #[arg(short = 't', long, default_value = DEFAULT_TIME_CONTROL, value_parser = TimeControl::parse)]
    time_control: TimeControl,

    /// Start from this position instead of the standard setup.
    #[arg(long)]
    fen: Option<String>,

    /// Milliseconds an engine may think per move.
    #[arg(long, default_value_t = DEFAULT_MOVETIME_MS)]
    movetime: u64,
}

enum Player {
    Human,
    Engine(Box<dyn Engine>),
}

impl Player {
    fn from_flag(flag: &str) -> ChessResult<Self> {
        match flag.trim() {
            "" => Ok(Player::Human),
            "random" => Ok(Player::Engine(Box::new(RandomEngine::new()))),
            command => Ok(Player::Engine(Box::new(UciEngine::spawn(command)?))),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> ChessResult<()> {
    let mut game_state = match cli.fen.as_deref() {
        Some(fen) => GameState::from_fen(fen)?,
        None => GameState::new_game(),
    };
    game_state.set_time_control(cli.time_control);

    let mut white = Player::from_flag(&cli.white_engine)?;
    let mut black = Player::from_flag(&cli.black_engine)?;
    for player in [&mut white, &mut black] {
        if let Player::Engine(engine) = player {
            engine.new_game()?;
            info!(engine = engine.name(), "engine ready");
        }
    }

    game_state.start_game();
    let game = Arc::new(Mutex::new(game_state));
    let rotated = matches!((&white, &black), (Player::Engine(_), Player::Human));
    let clock = spawn_clock(Arc::clone(&game), rotated);

    let budget = SearchBudget::movetime(cli.movetime);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let (status, to_move, rendered) = {
            let game_state = game.lock();
            (
                game_state.status(),
                game_state.active_color,
                render_game_state(&game_state, rotated),
            )
        };
        println!("\n{rendered}");
        if status.is_terminal() {
            break;
        }

        let player = match to_move {
            Color::White => &mut white,
            Color::Black => &mut black,
        };
        match player {
            Player::Engine(engine) => play_engine_turn(&game, engine.as_mut(), &budget),
            Player::Human => {
                print!("{to_move}> ");
                io::stdout().flush()?;
                let Some(line) = lines.next() else {
                    game.lock().quit();
                    continue;
                };
                handle_command(&game, line?.trim());
            }
        }
    }

    if clock.join().is_err() {
        warn!("clock thread panicked");
    }
    Ok(())
}

/// Charges elapsed wall time to the side to move until the game ends.
fn spawn_clock(game: Arc<Mutex<GameState>>, rotated: bool) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut last_tick = Instant::now();
        loop {
            thread::sleep(CLOCK_TICK);
            let now = Instant::now();
            let mut game_state = game.lock();
            if game_state.status().is_terminal() {
                break;
            }
            let flag_fell = charge_clock(&mut game_state, now - last_tick, rotated);
            last_tick = now;
            if let Some(rendered) = flag_fell {
                // The main thread may be blocked on stdin.
                println!("\n{rendered}");
                break;
            }
        }
    })
}

/// Returns the final board when this tick ran a clock out.
fn charge_clock(game_state: &mut GameState, elapsed: Duration, rotated: bool) -> Option<String> {
    game_state.record_elapsed(elapsed);
    if !game_state.status().is_terminal() {
        return None;
    }
    Some(format!(
        "{}\nPress Enter to exit.",
        render_game_state(game_state, rotated)
    ))
}

fn play_engine_turn(game: &Mutex<GameState>, engine: &mut dyn Engine, budget: &SearchBudget) {
    let snapshot = game.lock().clone();
    let outcome = engine
        .choose_move(&snapshot, budget)
        .and_then(|choice| {
            let notation = choice.ok_or_else(|| {
                ChessErrors::Engine(format!("{} returned no move", engine.name()))
            })?;
            game.lock().play_notation(&notation)
        });

    match outcome {
        Ok(mv) => println!("{} plays {}", engine.name(), mv.describe()),
        Err(ChessErrors::GameNotInProgress(_)) => {}
        Err(err) => {
            warn!(engine = engine.name(), %err, "engine failed, abandoning game");
            println!("{} failed: {err}", engine.name());
            game.lock().quit();
        }
    }
}

fn handle_command(game: &Mutex<GameState>, input: &str) {
    match input {
        "" => {}
        "quit" | "exit" | "q" => game.lock().quit(),
        "help" => print_help(),
        "fen" => println!("{}", game.lock().to_fen()),
        "draw" => {
            if let Err(err) = game.lock().agree_draw() {
                println!("{err}");
            }
        }
        notation => match game.lock().play_notation(notation) {
            Ok(mv) => info!(mv = %mv, "played"),
            Err(err) => println!("{err}"),
        },
    }
}

fn print_help() {
    println!(
        "Enter moves as e4, Nf3, exd5, Rdf8, e8=Q, o-o, o-o-o or e2e4.\n\
         Commands: fen (print position), draw (agree to a draw), quit.\n\
         Clocks run while you type; a flag fall ends the game immediately."
    );
}
