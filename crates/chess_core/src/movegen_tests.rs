use super::*;

fn fen(s: &str) -> Position {
    Position::from_fen(s).expect("test FEN should parse")
}

#[test]
fn test_startpos_moves() {
    let pos = Position::startpos();
    let moves = legal_moves(&pos);
    // Starting position has 20 legal moves
    assert_eq!(moves.len(), 20);
    assert!(moves.iter().all(|m| m.flags.is_quiet()));
    assert_eq!(moves.iter().filter(|m| m.flags.contains(MoveFlags::BIG_PAWN)).count(), 8);
}

#[test]
fn test_kiwipete_moves() {
    // Kiwipete position - complex with many move types
    let pos = fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -");
    let moves = legal_moves(&pos);
    assert_eq!(moves.len(), 48);
    assert_eq!(moves.iter().filter(|m| m.is_capture()).count(), 8);
    assert_eq!(moves.iter().filter(|m| m.is_castle()).count(), 2);
}

#[test]
fn test_enumeration_order_is_by_origin_square() {
    let moves = legal_moves(&Position::startpos());
    let text: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
    // Knights on b1 and g1 come before the pawns on rank 2.
    assert_eq!(&text[..4], &["b1c3", "b1a3", "g1h3", "g1f3"]);
    assert_eq!(&text[4..6], &["a2a3", "a2a4"]);
    assert_eq!(&text[18..], &["h2h3", "h2h4"]);
    let origins: Vec<u8> = moves.iter().map(|m| m.from).collect();
    let mut sorted = origins.clone();
    sorted.sort();
    assert_eq!(origins, sorted);
}

#[test]
fn test_moves_from_single_square() {
    let pos = Position::startpos();
    let from_g1 = legal_moves_from(&pos, coord_to_sq("g1").unwrap());
    assert_eq!(from_g1.len(), 2);
    assert!(from_g1.iter().all(|m| m.piece == PieceKind::Knight));

    // Empty square and opponent piece yield nothing
    assert!(legal_moves_from(&pos, coord_to_sq("e4").unwrap()).is_empty());
    assert!(legal_moves_from(&pos, coord_to_sq("e7").unwrap()).is_empty());
}

#[test]
fn test_promotion_with_capture_flags() {
    let pos = fen("1n5k/P7/8/8/8/8/8/7K w - - 0 1");
    let moves = legal_moves(&pos);
    let promos: Vec<&Move> = moves.iter().filter(|m| m.is_promotion()).collect();
    // a8 push and axb8 capture, four pieces each
    assert_eq!(promos.len(), 8);
    let captures: Vec<&&Move> = promos
        .iter()
        .filter(|m| m.flags.contains(MoveFlags::CAPTURE))
        .collect();
    assert_eq!(captures.len(), 4);
    assert!(captures.iter().all(|m| m.captured == Some(PieceKind::Knight)));
    assert_eq!(promos[0].promo, Some(PieceKind::Queen));
    assert_eq!(promos[3].promo, Some(PieceKind::Knight));
}

#[test]
fn test_no_castling_through_attacked_square() {
    // Black rook on f8 covers f1: kingside castling is illegal, queenside is fine
    let pos = fen("k4r2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let castles: Vec<Move> = legal_moves(&pos).into_iter().filter(Move::is_castle).collect();
    assert_eq!(castles.len(), 1);
    assert!(castles[0].flags.contains(MoveFlags::QUEENSIDE_CASTLE));
}

#[test]
fn test_pinned_piece_cannot_move() {
    // White knight on e2 pinned by the rook on e8
    let pos = fen("4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1");
    assert!(legal_moves_from(&pos, coord_to_sq("e2").unwrap()).is_empty());
}
