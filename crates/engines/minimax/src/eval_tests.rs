use super::*;
use chess_core::Position;

fn snapshot(fen: &str) -> BoardSnapshot {
    Position::from_fen(fen).expect("test FEN").snapshot()
}

/// Swaps every piece's color and flips the board top to bottom.
fn color_flip(board: &BoardSnapshot) -> BoardSnapshot {
    let mut out = [[None; 8]; 8];
    for (r, rank) in board.iter().enumerate() {
        for (c, sq) in rank.iter().enumerate() {
            out[7 - r][c] = sq.map(|p| Piece::new(p.color.other(), p.kind));
        }
    }
    out
}

#[test]
fn test_empty_square_is_zero() {
    for r in 0..8 {
        for c in 0..8 {
            assert_eq!(piece_value(None, r, c), 0.0);
        }
    }
    assert_eq!(evaluate(&[[None; 8]; 8]), 0.0);
}

#[test]
fn test_startpos_is_balanced() {
    assert_eq!(evaluate(&Position::startpos().snapshot()), 0.0);
}

#[test]
fn test_e4_gains_four() {
    // e2 (-2.0) to e4 (+2.0) in the white pawn table
    let board = snapshot("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
    assert_eq!(evaluate(&board), 4.0);
}

#[test]
fn test_piece_value_sign_and_lookup() {
    let wn = Some(Piece::new(Color::White, PieceKind::Knight));
    let bn = Some(Piece::new(Color::Black, PieceKind::Knight));
    assert_eq!(piece_value(wn, 3, 3), 32.0);
    assert_eq!(piece_value(bn, 3, 3), -32.0);
    assert_eq!(piece_value(wn, 0, 0), 25.0);

    // Kings: castled squares for each side
    let wk = Some(Piece::new(Color::White, PieceKind::King));
    let bk = Some(Piece::new(Color::Black, PieceKind::King));
    assert_eq!(piece_value(wk, 7, 6), 903.0);
    assert_eq!(piece_value(bk, 0, 6), -903.0);

    // Black pawn one step from promotion uses the reversed table
    let bp = Some(Piece::new(Color::Black, PieceKind::Pawn));
    assert_eq!(piece_value(bp, 6, 0), -15.0);
}

#[test]
fn test_material_values() {
    let expected = [
        (PieceKind::Pawn, 10.0),
        (PieceKind::Knight, 30.0),
        (PieceKind::Bishop, 30.0),
        (PieceKind::Rook, 50.0),
        (PieceKind::Queen, 90.0),
        (PieceKind::King, 900.0),
    ];
    for (kind, value) in expected {
        assert_eq!(material(kind), value, "{kind:?}");
    }
}

#[test]
fn test_color_flip_negates_without_queens_or_knights() {
    for fen in [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/pp3ppp/2p5/4b3/3B4/8/PPP2PPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "6k1/5p1p/4p1p1/1b6/8/1P3B2/P4PPP/2R3K1 w - - 0 1",
    ] {
        let board = snapshot(fen);
        assert_eq!(evaluate(&board), -evaluate(&color_flip(&board)), "{fen}");
    }
}

#[test]
fn test_shared_queen_table_breaks_symmetry() {
    // White queen on a4 sits on a 0.0 cell; the flipped black queen on a5
    // reads -0.5 from the same table.
    let board = snapshot("4k3/8/8/8/Q7/8/8/4K3 w - - 0 1");
    let flipped = color_flip(&board);
    assert_eq!(evaluate(&board), 90.0);
    assert_eq!(evaluate(&flipped), -89.5);
    assert_ne!(evaluate(&board), -evaluate(&flipped));
}

#[test]
fn test_shared_knight_table_breaks_symmetry_off_center_files() {
    let board = snapshot("4k3/8/8/8/8/8/3N4/4K3 w - - 0 1");
    let flipped = color_flip(&board);
    // d2 reads 0.5, the flipped d7 reads 0.0
    assert_eq!(evaluate(&board), 30.5);
    assert_eq!(evaluate(&flipped), -30.0);
}
