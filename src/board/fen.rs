//! FEN parsing and emission.
//!
//! Parsing builds a fresh board and commits it only when every field checks
//! out, so a failed `set_fen` leaves the position untouched.

use super::fen_tables::{piece_char, CHAR_TO_PC};
use super::{castle_string, Board, Color, Piece, COLORS};
use super::{CASTLE_BK, CASTLE_BQ, CASTLE_WK, CASTLE_WQ};
use crate::bitboard::{BitboardExt, RANK_MASKS};
use crate::square::Square;
use std::str::FromStr;

impl Board {
    /// Replaces the position with the one described by `fen`.
    /// On error the board is unchanged. The chess960 flag is preserved.
    pub fn set_fen(&mut self, fen: &str) -> Result<(), String> {
        let mut parsed = parse_fen(fen, self.chess960)?;
        parsed.chess960 = self.chess960;
        *self = parsed;
        Ok(())
    }

    /// Emits the position as a six-field FEN string.
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(90);

        for rank in (0..8).rev() {
            let mut empty_run = 0;
            for file in 0..8 {
                let sq = Square::from_file_rank(file, rank);
                match self.piece_at(sq) {
                    None => empty_run += 1,
                    Some((color, piece)) => {
                        if empty_run > 0 {
                            fen.push((b'0' + empty_run) as char);
                            empty_run = 0;
                        }
                        fen.push(piece_char(color, piece));
                    }
                }
            }
            if empty_run > 0 {
                fen.push((b'0' + empty_run) as char);
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        fen.push_str(&castle_string(self.castling_rights));

        fen.push(' ');
        match self.en_passant {
            Some(sq) => fen.push_str(&sq.to_string()),
            None => fen.push('-'),
        }

        fen.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        fen
    }
}

fn parse_fen(fen: &str, chess960: bool) -> Result<Board, String> {
    let mut fields = fen.split_whitespace();
    let placement = fields.next().ok_or("FEN: missing piece placement")?;
    let active = fields.next().ok_or("FEN: missing active color")?;
    let castling = fields.next().ok_or("FEN: missing castling rights")?;
    let en_passant = fields.next().ok_or("FEN: missing en passant field")?;
    let halfmove = fields.next().ok_or("FEN: missing halfmove clock")?;
    let fullmove = fields.next().ok_or("FEN: missing fullmove number")?;
    if fields.next().is_some() {
        return Err("FEN: trailing data after the six fields".to_string());
    }

    let mut board = Board::new_empty();

    // 1) Piece placement, rank 8 down to rank 1.
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(format!("FEN: expected 8 ranks, got {}", ranks.len()));
    }
    for (i, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - i as u8;
        let mut file = 0u8;
        for c in rank_str.chars() {
            if let Some(run) = c.to_digit(10) {
                if run == 0 || run > 8 {
                    return Err(format!("FEN: bad empty-square count `{}`", c));
                }
                file += run as u8;
            } else {
                let entry = if c.is_ascii() {
                    CHAR_TO_PC[c as usize]
                } else {
                    None
                };
                let (piece, color) = entry.ok_or(format!("FEN: unknown piece glyph `{}`", c))?;
                if file > 7 {
                    return Err(format!("FEN: rank `{}` overflows 8 files", rank_str));
                }
                let sq = Square::from_file_rank(file, rank);
                board.set_bb(color, piece, board.bb(color, piece) | sq.bb());
                file += 1;
            }
        }
        if file != 8 {
            return Err(format!("FEN: rank `{}` does not span 8 files", rank_str));
        }
    }

    // 2) Active color.
    board.side_to_move = match active {
        "w" => Color::White,
        "b" => Color::Black,
        _ => return Err(format!("FEN: bad active color `{}`", active)),
    };

    // 3) Castling rights.
    board.castling_rights = 0;
    if castling != "-" {
        for c in castling.chars() {
            let bit = match c {
                'K' => CASTLE_WK,
                'Q' => CASTLE_WQ,
                'k' => CASTLE_BK,
                'q' => CASTLE_BQ,
                'A'..='H' | 'a'..='h' if chess960 => {
                    return Err(format!(
                        "FEN: Chess960 castling file `{}` is not supported",
                        c
                    ));
                }
                _ => return Err(format!("FEN: bad castling token `{}`", c)),
            };
            if board.castling_rights & bit != 0 {
                return Err(format!("FEN: duplicate castling token `{}`", c));
            }
            board.castling_rights |= bit;
        }
    }

    // 4) En passant target.
    board.en_passant = match en_passant {
        "-" => None,
        s => {
            let sq = Square::from_str(s).map_err(|e| format!("FEN: {}", e))?;
            let expected_rank = match board.side_to_move {
                Color::White => 5, // Black just double-pushed
                Color::Black => 2, // White just double-pushed
            };
            if sq.rank() != expected_rank {
                return Err(format!("FEN: en passant square `{}` on the wrong rank", s));
            }
            Some(sq)
        }
    };

    // 5) Clocks.
    board.halfmove_clock = halfmove
        .parse::<u32>()
        .map_err(|_| format!("FEN: bad halfmove clock `{}`", halfmove))?;
    board.fullmove_number = fullmove
        .parse::<u32>()
        .map_err(|_| format!("FEN: bad fullmove number `{}`", fullmove))?;
    if board.fullmove_number == 0 {
        return Err("FEN: fullmove number must be positive".to_string());
    }

    // Structural checks the rest of the engine depends on.
    for &color in &COLORS {
        if board.pieces(Piece::King, color).count() != 1 {
            return Err(format!("FEN: {:?} must have exactly one king", color));
        }
    }
    let pawns = board.pieces(Piece::Pawn, Color::White) | board.pieces(Piece::Pawn, Color::Black);
    if pawns & (RANK_MASKS[0] | RANK_MASKS[7]) != 0 {
        return Err("FEN: pawns on the first or last rank".to_string());
    }

    // Drop any castling right whose king or rook has left its home square;
    // the rest of the engine assumes a held right implies both are in place.
    let mut rights = board.castling_rights;
    if board.pieces(Piece::King, Color::White) != 1u64 << 4 {
        rights &= !(CASTLE_WK | CASTLE_WQ);
    }
    if board.pieces(Piece::King, Color::Black) != 1u64 << 60 {
        rights &= !(CASTLE_BK | CASTLE_BQ);
    }
    let white_rooks = board.pieces(Piece::Rook, Color::White);
    let black_rooks = board.pieces(Piece::Rook, Color::Black);
    if white_rooks & (1u64 << 7) == 0 {
        rights &= !CASTLE_WK;
    }
    if white_rooks & 1u64 == 0 {
        rights &= !CASTLE_WQ;
    }
    if black_rooks & (1u64 << 63) == 0 {
        rights &= !CASTLE_BK;
    }
    if black_rooks & (1u64 << 56) == 0 {
        rights &= !CASTLE_BQ;
    }
    board.castling_rights = rights;

    Ok(board)
}
