use lattice::board::Board;
use lattice::logger::init_logging;
use lattice::moves::execute::{legal_moves, make_move};
use lattice::moves::perft::perft_divide;
use lattice::moves::types::{Move, NULL_MOVE_UCI};
use lattice::policy::{MovePolicy, WeightedPolicy};
use std::io::{self, BufRead};
use tracing::debug;

fn main() {
    init_logging("logs/uci.log", "lattice=debug");

    let mut board = Board::new();
    let mut policy = WeightedPolicy::new();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l.trim().to_string(),
            Err(_) => break,
        };
        if line.is_empty() {
            continue;
        }

        debug!(command = %line, "uci input");
        let parts: Vec<&str> = line.split_whitespace().collect();

        match parts[0] {
            "uci" => handle_uci(),
            "isready" => println!("readyok"),
            "ucinewgame" => board.reset(),
            "setoption" => handle_setoption(&parts, &mut board),
            "position" => {
                if let Some(new_board) = handle_position(&parts, board.chess960) {
                    board = new_board;
                }
            }
            "go" => handle_go(&mut board, &mut policy),
            "printboard" | "d" | "display" => println!("{}", board.pretty()),
            "fen" => println!("{}", board.to_fen()),
            "perft" => {
                let depth = parts.get(1).and_then(|d| d.parse().ok()).unwrap_or(1);
                perft_divide(&board, depth);
            }
            "quit" => break,
            _ => {}
        }
    }
}

fn handle_uci() {
    println!("id name Lattice 0.1");
    println!("id author the Lattice developers");
    println!("option name UCI_Chess960 type check default false");
    println!("uciok");
}

fn handle_setoption(parts: &[&str], board: &mut Board) {
    // setoption name <id> value <value>
    let name = parts
        .iter()
        .position(|&p| p == "name")
        .and_then(|i| parts.get(i + 1));
    let value = parts
        .iter()
        .position(|&p| p == "value")
        .and_then(|i| parts.get(i + 1));

    if let (Some(&"UCI_Chess960"), Some(&value)) = (name, value) {
        match value {
            "true" => board.chess960 = true,
            "false" => board.chess960 = false,
            _ => {}
        }
    }
}

fn handle_position(parts: &[&str], chess960: bool) -> Option<Board> {
    let mut board = if parts.get(1) == Some(&"startpos") {
        let mut b = Board::new();
        b.chess960 = chess960;
        b
    } else if parts.get(1) == Some(&"fen") {
        let fen_start = 2;
        let fen_end = parts
            .iter()
            .position(|&p| p == "moves")
            .unwrap_or(parts.len());
        let fen_string = parts.get(fen_start..fen_end)?.join(" ");

        let mut b = Board::new_empty();
        b.chess960 = chess960;
        if let Err(err) = b.set_fen(&fen_string) {
            eprintln!("{}", err);
            return None;
        }
        b
    } else {
        return None;
    };

    if let Some(moves_idx) = parts.iter().position(|&p| p == "moves") {
        for move_str in &parts[moves_idx + 1..] {
            if !apply_uci_move(&mut board, move_str) {
                eprintln!("Invalid move: {}", move_str);
                return None;
            }
        }
    }

    Some(board)
}

/// Resolve UCI move text against the legal moves of `board` and apply it.
fn apply_uci_move(board: &mut Board, move_str: &str) -> bool {
    let Some(parsed) = Move::from_uci(move_str) else {
        return false;
    };
    // Only accept moves the generator agrees with; the parsed triple alone
    // says nothing about whether the movement rule holds.
    if !legal_moves(board).contains(&parsed) {
        return false;
    }
    make_move(board, parsed)
}

fn handle_go(board: &mut Board, policy: &mut impl MovePolicy) {
    let legal = legal_moves(board);
    if let Some(mv) = policy.select(&legal, board) {
        if make_move(board, mv) {
            println!("bestmove {}", mv.to_uci());
            return;
        }
    }
    println!("bestmove {}", NULL_MOVE_UCI);
}
