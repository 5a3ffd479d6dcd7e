use crate::bitboard::Bitboard;

/// Ray directions as (rank step, file step) pairs.
pub const ROOK_DIRECTIONS: [[i32; 2]; 4] = [[1, 0], [-1, 0], [0, 1], [0, -1]];
pub const BISHOP_DIRECTIONS: [[i32; 2]; 4] = [[1, 1], [1, -1], [-1, 1], [-1, -1]];

/// Rays outward from `square` in each listed direction, stopping after the
/// first occupied square. The blocker itself is included, which is what makes
/// `attacks & enemy` the capture set.
pub fn sliding_attacks(square: u8, occupied: Bitboard, directions: &[[i32; 2]]) -> Bitboard {
    let rank = (square / 8) as i32;
    let file = (square % 8) as i32;
    let mut attacks = 0u64;

    for dir in directions {
        let mut r = rank + dir[0];
        let mut f = file + dir[1];
        while (0..8).contains(&r) && (0..8).contains(&f) {
            let bit = 1u64 << (r * 8 + f);
            attacks |= bit;
            if occupied & bit != 0 {
                break;
            }
            r += dir[0];
            f += dir[1];
        }
    }
    attacks
}

#[inline]
pub fn rook_attacks(square: u8, occupied: Bitboard) -> Bitboard {
    sliding_attacks(square, occupied, &ROOK_DIRECTIONS)
}

#[inline]
pub fn bishop_attacks(square: u8, occupied: Bitboard) -> Bitboard {
    sliding_attacks(square, occupied, &BISHOP_DIRECTIONS)
}

#[inline]
pub fn queen_attacks(square: u8, occupied: Bitboard) -> Bitboard {
    rook_attacks(square, occupied) | bishop_attacks(square, occupied)
}
