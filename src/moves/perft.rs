//! Perft: count the leaf nodes of the legal-move tree to a fixed depth.
//! The reference numbers for the standard positions pin down every special
//! rule at once, so this doubles as the movegen correctness harness.

use crate::board::Board;
use crate::moves::execute::{generate_legal, make_move};
use tracing::{debug, instrument};

#[instrument(skip(board))]
pub fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut moves = Vec::with_capacity(64);
    let mut scratch = Vec::with_capacity(128);
    generate_legal(board, &mut moves, &mut scratch);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        let mut child = *board;
        if make_move(&mut child, mv) {
            nodes += perft_inner(&child, depth - 1);
        }
    }
    nodes
}

fn perft_inner(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut moves = Vec::with_capacity(64);
    let mut scratch = Vec::with_capacity(128);
    generate_legal(board, &mut moves, &mut scratch);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        let mut child = *board;
        if make_move(&mut child, mv) {
            nodes += perft_inner(&child, depth - 1);
        }
    }
    nodes
}

/// Per-root-move breakdown, printed in the conventional `move: count` form.
#[instrument(skip(board))]
pub fn perft_divide(board: &Board, depth: u32) -> u64 {
    let mut moves = Vec::with_capacity(64);
    let mut scratch = Vec::with_capacity(128);
    generate_legal(board, &mut moves, &mut scratch);

    let mut total = 0;
    for mv in moves {
        let mut child = *board;
        if !make_move(&mut child, mv) {
            continue;
        }
        let count = if depth <= 1 {
            1
        } else {
            perft_inner(&child, depth - 1)
        };
        debug!(%mv, nodes = count, "divide: root child");
        println!("{}: {}", mv, count);
        total += count;
    }
    println!("Total: {}", total);
    total
}
