//! Terminal-state classification for a position.

use crate::bitboard::BitboardExt;
use crate::board::{Board, Color, Piece};
use crate::moves::execute::legal_moves;
use crate::moves::square_control::in_check;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InPlay,
    DrawFiftyMove,
    DrawDeadPosition,
    Stalemate,
    Checkmate,
}

/// Fifty-move rule: claimable once 100 plies have passed without a pawn move
/// or a capture.
pub fn is_draw_by_fifty_move(board: &Board) -> bool {
    board.halfmove_clock >= 100
}

pub fn is_checkmate(board: &Board) -> bool {
    in_check(board, board.side_to_move) && legal_moves(board).is_empty()
}

pub fn is_stalemate(board: &Board) -> bool {
    !in_check(board, board.side_to_move) && legal_moves(board).is_empty()
}

/// Declares a dead position in exactly three material configurations:
/// bare kings, a lone minor piece against a bare king, and one bishop each
/// with both bishops on same-colored squares. Everything else - including
/// K+N+N vs K - is left to play on.
pub fn is_insufficient_material(board: &Board) -> bool {
    let total = board.occupied().count();

    // K vs K
    if total == 2 {
        return true;
    }

    // K vs K + single minor
    if total == 3 {
        let lone_side = board.occupancy(Color::White).count() == 1
            || board.occupancy(Color::Black).count() == 1;
        let minors = board.pieces(Piece::Knight, Color::White)
            | board.pieces(Piece::Bishop, Color::White)
            | board.pieces(Piece::Knight, Color::Black)
            | board.pieces(Piece::Bishop, Color::Black);
        return lone_side && minors.count() == 1;
    }

    // KB vs KB with bishops on the same square color
    if total == 4 {
        let white_bishops = board.pieces(Piece::Bishop, Color::White);
        let black_bishops = board.pieces(Piece::Bishop, Color::Black);
        if white_bishops.count() == 1
            && black_bishops.count() == 1
            && board.occupancy(Color::White).count() == 2
            && board.occupancy(Color::Black).count() == 2
        {
            let wb = white_bishops.trailing_zeros();
            let bb = black_bishops.trailing_zeros();
            let wb_color = (wb / 8 + wb % 8) % 2;
            let bb_color = (bb / 8 + bb % 8) % 2;
            return wb_color == bb_color;
        }
    }

    false
}

/// Classify the current position.
///
/// Priority: dead position, then the fifty-move claim, then the move-based
/// outcomes.
pub fn position_status(board: &Board) -> GameStatus {
    if is_insufficient_material(board) {
        return GameStatus::DrawDeadPosition;
    }
    if is_draw_by_fifty_move(board) {
        return GameStatus::DrawFiftyMove;
    }

    if legal_moves(board).is_empty() {
        if in_check(board, board.side_to_move) {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        }
    } else {
        GameStatus::InPlay
    }
}
