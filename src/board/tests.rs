use super::*;
use crate::square::Square;
use std::str::FromStr;

#[test]
fn starting_bitboards_match_reference_values() {
    let b = Board::new();

    assert_eq!(b.pieces(Piece::Pawn, Color::White), 0x0000_0000_0000_FF00);
    assert_eq!(b.pieces(Piece::Knight, Color::White), 0x0000_0000_0000_0042);
    assert_eq!(b.pieces(Piece::Bishop, Color::White), 0x0000_0000_0000_0024);
    assert_eq!(b.pieces(Piece::Rook, Color::White), 0x0000_0000_0000_0081);
    assert_eq!(b.pieces(Piece::Queen, Color::White), 0x0000_0000_0000_0008);
    assert_eq!(b.pieces(Piece::King, Color::White), 0x0000_0000_0000_0010);

    assert_eq!(b.pieces(Piece::Pawn, Color::Black), 0x00FF_0000_0000_0000);
    assert_eq!(b.pieces(Piece::Knight, Color::Black), 0x0000_0000_0000_0042 << 56);
    assert_eq!(b.pieces(Piece::Bishop, Color::Black), 0x0000_0000_0000_0024 << 56);
    assert_eq!(b.pieces(Piece::Rook, Color::Black), 0x0000_0000_0000_0081u64 << 56);
    assert_eq!(b.pieces(Piece::Queen, Color::Black), 0x0000_0000_0000_0008 << 56);
    assert_eq!(b.pieces(Piece::King, Color::Black), 0x0000_0000_0000_0010 << 56);

    assert_eq!(b.occupied(), 0xFFFF_0000_0000_FFFF);
    assert_eq!(b.side_to_move, Color::White);
    assert_eq!(b.castling_rights, CASTLE_ALL);
    assert_eq!(b.en_passant, None);
    assert_eq!(b.halfmove_clock, 0);
    assert_eq!(b.fullmove_number, 1);
    assert!(b.validate().is_ok());
}

#[test]
fn occupancies_are_derived_from_piece_bitboards() {
    let b = Board::new();
    let mut white = 0u64;
    let mut black = 0u64;
    for &piece in &PIECES {
        white |= b.pieces(piece, Color::White);
        black |= b.pieces(piece, Color::Black);
    }
    assert_eq!(b.occ_white, white);
    assert_eq!(b.occ_black, black);
    assert_eq!(b.occ_all, white | black);
    assert_eq!(white & black, 0);
}

#[test]
fn piece_at_reads_the_mailbox() {
    let b = Board::new();
    let e1 = Square::from_str("e1").unwrap();
    let d8 = Square::from_str("d8").unwrap();
    let e4 = Square::from_str("e4").unwrap();

    assert_eq!(b.piece_at(e1), Some((Color::White, Piece::King)));
    assert_eq!(b.piece_at(d8), Some((Color::Black, Piece::Queen)));
    assert_eq!(b.piece_at(e4), None);
    assert_eq!(b.piece_type_at(e1), Some(Piece::King));
    assert_eq!(b.color_at(d8), Some(Color::Black));
}

#[test]
fn set_bb_keeps_mailbox_and_occupancy_in_sync() {
    let mut b = Board::new_empty();
    let d4 = Square::from_str("d4").unwrap();

    b.set_bb(Color::White, Piece::Rook, d4.bb());
    assert_eq!(b.piece_at(d4), Some((Color::White, Piece::Rook)));
    assert_eq!(b.occ_white, d4.bb());
    assert_eq!(b.occ_all, d4.bb());

    b.set_bb(Color::White, Piece::Rook, 0);
    assert_eq!(b.piece_at(d4), None);
    assert_eq!(b.occ_all, 0);
}

#[test]
fn validate_catches_overlapping_bitboards() {
    let mut b = Board::new_empty();
    let c3 = Square::from_str("c3").unwrap();
    // Bypass set_bb to force an illegal overlap.
    b.piece_bb[Color::White as usize][Piece::Rook as usize] = c3.bb();
    b.piece_bb[Color::Black as usize][Piece::Knight as usize] = c3.bb();
    assert!(b.validate().is_err());
}

#[test]
fn king_square_finds_both_kings() {
    let b = Board::new();
    assert_eq!(b.king_square(Color::White), Some(Square::from_str("e1").unwrap()));
    assert_eq!(b.king_square(Color::Black), Some(Square::from_str("e8").unwrap()));
    assert_eq!(Board::new_empty().king_square(Color::White), None);
}

#[test]
fn reset_keeps_the_chess960_flag() {
    let mut b = Board::new_empty();
    b.chess960 = true;
    b.reset();
    assert!(b.chess960);
    assert_eq!(b.to_fen(), Board::new().to_fen());
}

#[test]
fn pretty_renders_the_starting_grid() {
    let s = Board::new().pretty();
    assert!(s.contains("8 | r | n | b | q | k | b | n | r |"));
    assert!(s.contains("1 | R | N | B | Q | K | B | N | R |"));
    assert!(s.contains("Side to move: White"));
    assert!(s.contains("Castling: KQkq"));
}

#[test]
fn piece_values() {
    assert_eq!(Piece::Pawn.value(), 1);
    assert_eq!(Piece::Knight.value(), 3);
    assert_eq!(Piece::Bishop.value(), 3);
    assert_eq!(Piece::Rook.value(), 5);
    assert_eq!(Piece::Queen.value(), 9);
    assert_eq!(Piece::King.value(), 0);
}
