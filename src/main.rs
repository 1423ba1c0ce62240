//! Dama engine CLI
//!
//! Plays a seeded game between two AI difficulties and prints every move,
//! or lists the legal moves of the starting position.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dama::{
    apply_move, legal_moves, material_counts, AiEngine, Board, Color, Difficulty, GameResult,
    GameState, Pos, RulesConfig,
};

#[derive(Parser, Debug)]
#[command(name = "dama", version, about = "Filipino Dama engine: AI self-play demo")]
struct Args {
    /// JSON rules file (camelCase fields, missing fields use the defaults)
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Override the board size from the rules
    #[arg(long)]
    board_size: Option<u8>,

    /// Difficulty playing black (moves first)
    #[arg(long, default_value_t = Difficulty::Hard)]
    black: Difficulty,

    /// Difficulty playing red
    #[arg(long, default_value_t = Difficulty::Medium)]
    red: Difficulty,

    /// Random seed for both players
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Hard search depth in plies
    #[arg(long, default_value_t = dama::search::DEFAULT_DEPTH)]
    depth: u8,

    /// Stop after this many plies
    #[arg(long, default_value_t = 200)]
    max_plies: usize,

    /// Print the legal moves of the starting position and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let cfg = load_rules(&args)?;
    info!(?cfg, "rules loaded");

    let state = GameState::initial(&cfg);
    if args.list {
        list_moves(&state, &cfg);
        return Ok(());
    }

    self_play(state, &cfg, &args);
    Ok(())
}

fn load_rules(args: &Args) -> Result<RulesConfig> {
    let mut cfg = match &args.rules {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading rules file {}", path.display()))?;
            RulesConfig::from_json_str(&text)
                .with_context(|| format!("parsing rules file {}", path.display()))?
        }
        None => RulesConfig::default(),
    };
    if let Some(size) = args.board_size {
        cfg = cfg.with_board_size(size);
    }
    cfg.validate()?;
    Ok(cfg)
}

fn list_moves(state: &GameState, cfg: &RulesConfig) {
    print_board(&state.board);
    let moves = legal_moves(&state.board, state.turn, cfg);
    println!("\n{} legal moves for {}:", moves.len(), state.turn);
    for mv in &moves {
        println!("  {mv}");
    }
}

fn self_play(mut state: GameState, cfg: &RulesConfig, args: &Args) {
    println!("===========================================");
    println!("  Dama self-play: black={} red={} seed={}", args.black, args.red, args.seed);
    println!("===========================================\n");
    print_board(&state.board);

    let mut ai = AiEngine::seeded(args.seed).with_depth(args.depth);
    let mut total_nodes = 0u64;

    for ply in 1..=args.max_plies {
        let side = state.turn;
        let difficulty = match side {
            Color::Black => args.black,
            Color::Red => args.red,
        };
        let choice = ai.choose_move_with_stats(&state, side, difficulty, cfg);
        let Some(mv) = choice.best_move else {
            break;
        };
        total_nodes += choice.nodes;

        println!(
            "{ply:3}. {side:<5} {:<28} ({:?}, {}ms, {} nodes)",
            mv.to_string(),
            choice.strategy,
            choice.time_ms,
            choice.nodes
        );
        state = apply_move(&state, &mv, cfg);
        if state.is_finished() {
            break;
        }
    }

    println!();
    print_board(&state.board);
    let counts = material_counts(&state.board);
    println!(
        "\nRed: {} ({} kings)  Black: {} ({} kings)  Nodes searched: {}",
        counts.red, counts.red_kings, counts.black, counts.black_kings, total_nodes
    );
    match state.result {
        GameResult::Finished { winner, reason } => println!("Winner: {winner} ({reason:?})"),
        _ => println!("No result after {} plies", args.max_plies),
    }
}

fn print_board(board: &Board) {
    let size = board.size();
    print!("   ");
    for c in 0..size {
        print!("{c:2}");
    }
    println!();

    for r in 0..size {
        print!("{r:2} ");
        for c in 0..size {
            let ch = board.get(Pos::new(r, c)).map_or('.', |p| p.symbol());
            print!(" {ch}");
        }
        println!();
    }
}
