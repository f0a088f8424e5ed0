use anyhow::Context;
use battleship_rules::{init_logging, shuffle, BoardSize, Counter, Player, Position, Session, Stage};
use clap::Parser;
use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

/// Play random-vs-random games and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value_t = 1)]
    games: u32,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = battleship_rules::BOARD_WIDTH)]
    width: i32,
    #[arg(long, default_value_t = battleship_rules::BOARD_HEIGHT)]
    height: i32,
}

/// Play one game to completion. Each side fires at every cell of the
/// opponent's board in a shuffled order.
fn play(rng: &mut SmallRng, board: BoardSize) -> anyhow::Result<(Player, u32)> {
    let mut session = Session::with_board(board)?;
    session.place_randomly(Player::One, rng)?;
    session.place_randomly(Player::Two, rng)?;

    let cells: Vec<Position> = board.cells().collect();
    let mut targets = [shuffle(rng, &cells), shuffle(rng, &cells)];

    while session.state().stage() == Stage::Battle {
        let shooter = session.state().active_player();
        let queue = &mut targets[shooter as usize];
        let pos = queue.pop().context("shooter ran out of targets")?;
        session.fire(pos)?;
    }

    let state = session.state();
    let winner = state.winner().context("game ended without a winner")?;
    debug!("{:?} won in {} shots", winner, state.shots_fired());
    Ok((winner, state.shots_fired()))
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(rand::random);
    let board = BoardSize::try_new(cli.width, cli.height)
        .with_context(|| format!("rejected board {}x{}", cli.width, cli.height))?;

    let mut winners = Counter::new();
    let mut total_shots = 0u64;
    for game in 0..cli.games {
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(game as u64));
        let (winner, shots) = play(&mut rng, board)?;
        winners.add([winner]);
        total_shots += shots as u64;
    }

    let result = json!({
        "seed": seed,
        "games": cli.games,
        "wins": {
            "one": winners.count(&Player::One),
            "two": winners.count(&Player::Two),
        },
        "most_wins": winners.max_count().unwrap_or(0),
        "average_shots": if cli.games == 0 { 0.0 } else { total_shots as f64 / cli.games as f64 },
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
