//! Move-selection policies and the engine façade that applies them.
//!
//! A policy sees the legal-move list and the position and picks one move
//! (`None` iff the list is empty). The engine owns a board and a policy and
//! plays whatever the policy returns.

use crate::board::{Board, Piece};
use crate::moves::execute::{legal_moves, make_move};
use crate::moves::square_control::in_check;
use crate::moves::types::Move;
use crate::status::is_checkmate;
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub trait MovePolicy {
    /// Pick one of `legal` for the position `board`, or `None` iff the list
    /// is empty.
    fn select(&mut self, legal: &[Move], board: &Board) -> Option<Move>;
}

/// Uniform-random choice over the legal moves.
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for tests and reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl MovePolicy for RandomPolicy {
    fn select(&mut self, legal: &[Move], _board: &Board) -> Option<Move> {
        legal.choose(&mut self.rng).copied()
    }
}

/// Samples moves in proportion to a cheap heuristic weight: captures by
/// victim value, promotions, early development, and a large bonus for
/// checking or mating moves.
pub struct WeightedPolicy {
    rng: StdRng,
}

impl WeightedPolicy {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for WeightedPolicy {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn move_weight(board: &Board, mv: Move) -> u32 {
    let mut weight: u32 = 10;

    if let Some(victim) = board.piece_type_at(mv.to) {
        weight += 10 * victim.value() as u32;
    }

    if let Some(promo) = mv.promotion {
        weight += match promo {
            Piece::Queen => 80,
            Piece::Rook => 40,
            Piece::Bishop | Piece::Knight => 20,
            _ => 0,
        };
    } else {
        match board.piece_type_at(mv.from) {
            Some(Piece::Knight) => weight += 25,
            Some(Piece::Bishop) => weight += 20,
            Some(Piece::Rook) => weight += 20,
            Some(Piece::Queen) => weight += 15,
            Some(Piece::Pawn) => {
                // Encourage pawn play while the opening unfolds, center first.
                if board.fullmove_number <= 5 {
                    weight += 50u32.saturating_sub(10 * board.fullmove_number);
                    let file = mv.from.file();
                    if file == 3 || file == 4 {
                        weight += 20;
                    }
                }
            }
            _ => {}
        }
    }

    let mut probe = *board;
    if make_move(&mut probe, mv) && in_check(&probe, probe.side_to_move) {
        weight += 40;
        if is_checkmate(&probe) {
            weight += 1000;
        }
    }

    weight
}

impl MovePolicy for WeightedPolicy {
    fn select(&mut self, legal: &[Move], board: &Board) -> Option<Move> {
        if legal.is_empty() {
            return None;
        }
        let weights: Vec<u32> = legal.iter().map(|&mv| move_weight(board, mv)).collect();
        match WeightedIndex::new(&weights) {
            Ok(dist) => Some(legal[dist.sample(&mut self.rng)]),
            // All-zero weights cannot happen (base weight is 10), but fall
            // back to uniform rather than fail the selection.
            Err(_) => legal.choose(&mut self.rng).copied(),
        }
    }
}

/// Owns a position and a policy; `play_move` asks the policy for a move and
/// applies it.
pub struct Engine<P: MovePolicy> {
    board: Board,
    policy: P,
}

impl<P: MovePolicy> Engine<P> {
    pub fn new(policy: P) -> Self {
        Self {
            board: Board::new(),
            policy,
        }
    }

    pub fn set_position(&mut self, board: Board) {
        self.board = board;
    }

    pub fn position(&self) -> &Board {
        &self.board
    }

    /// Select a legal move via the policy, apply it, and return it.
    /// `None` when the position has no legal moves.
    pub fn play_move(&mut self) -> Option<Move> {
        let legal = legal_moves(&self.board);
        let mv = self.policy.select(&legal, &self.board)?;
        if make_move(&mut self.board, mv) {
            Some(mv)
        } else {
            None
        }
    }
}
