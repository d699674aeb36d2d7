//! Draw and game-end detection: stalemate, fifty-move rule, repetition keys,
//! insufficient material.

use chess_core::{Color, Game, GameSituation, Position, RulesEngine, legal_moves};

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).expect("test FEN should parse")
}

#[test]
fn stalemates_have_no_moves_and_no_check() {
    for fen in [
        // Black king in the corner, queen on b6
        "k7/2K5/1Q6/8/8/8/8/8 b - - 0 1",
        // King and pawn ending
        "6k1/6P1/6K1/8/8/8/8/8 b - - 0 1",
    ] {
        let p = pos(fen);
        assert!(legal_moves(&p).is_empty(), "{fen}");
        assert!(!p.in_check(Color::Black), "{fen}");
        assert!(Game::from_fen(fen).unwrap().is_stalemate());
    }
}

#[test]
fn checkmate_is_not_stalemate() {
    let game =
        Game::from_fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4").unwrap();
    assert!(game.legal_moves(None).is_empty());
    assert!(game.is_checkmate());
    assert!(!game.is_stalemate());
    assert!(!game.is_draw());
}

#[test]
fn check_with_escape_is_not_checkmate() {
    let game =
        Game::from_fen("rnbqkbnr/ppppp1pp/8/5p1Q/4P3/8/PPPP1PPP/RNB1KBNR b KQkq - 1 2").unwrap();
    assert!(game.in_check());
    assert!(!game.legal_moves(None).is_empty());
    assert_eq!(game.situation(), GameSituation::CHECK);
}

#[test]
fn fifty_move_rule_threshold() {
    assert!(pos("8/8/8/4k3/8/4K3/8/8 w - - 100 60").is_fifty_move_draw());
    assert!(!pos("8/8/8/4k3/8/4K3/8/8 w - - 99 60").is_fifty_move_draw());

    let game = Game::from_fen("8/8/8/4k3/8/4K3/8/R7 w - - 100 60").unwrap();
    assert!(game.is_draw());
    assert!(game.situation().contains(GameSituation::DRAW | GameSituation::GAME_OVER));
}

#[test]
fn pawn_move_resets_halfmove_clock() {
    let mut game = Game::from_fen("8/8/8/4k3/8/3K4/4P3/8 w - - 99 60").unwrap();
    game.play_uci("e2e3").unwrap();
    assert_eq!(game.position().halfmove_clock, 0);
    assert!(!game.position().is_fifty_move_draw());

    game.reverse();
    assert_eq!(game.position().halfmove_clock, 99);
}

#[test]
fn insufficient_material_cases() {
    let cases = [
        ("8/8/8/4k3/8/4K3/8/8 w - - 0 1", true, "K v K"),
        ("8/8/8/4k3/8/4KB2/8/8 w - - 0 1", true, "KB v K"),
        ("8/8/8/4k3/8/4KN2/8/8 w - - 0 1", true, "KN v K"),
        ("8/8/4b3/4k3/8/4K3/8/8 w - - 0 1", true, "K v KB"),
        ("8/8/4n3/4k3/8/4K3/8/8 w - - 0 1", true, "K v KN"),
        ("5b2/8/8/4k3/8/4K3/8/2B5 w - - 0 1", true, "bishops on one square color"),
        ("2b5/8/8/4k3/8/4K3/8/2B5 w - - 0 1", false, "opposite colored bishops"),
        ("8/8/8/4k3/8/4K3/4P3/8 w - - 0 1", false, "pawn"),
        ("8/8/8/4k3/8/4K3/8/4R3 w - - 0 1", false, "rook"),
        ("8/8/8/4k3/8/4K3/8/4Q3 w - - 0 1", false, "queen"),
        ("8/8/8/4k3/8/4K3/3NN3/8 w - - 0 1", false, "two knights"),
    ];
    for (fen, expected, label) in cases {
        assert_eq!(pos(fen).is_insufficient_material(), expected, "{label}");
    }
}

#[test]
fn position_hash_ignores_move_clocks() {
    let a = pos("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3");
    let b = pos("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 6 5");
    assert_eq!(a.position_hash(), b.position_hash());
}

#[test]
fn position_hash_separates_state() {
    let base = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    let variants = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Kq - 0 1",
    ];
    for v in variants {
        assert_ne!(pos(base).position_hash(), pos(v).position_hash(), "{v}");
    }
    assert_ne!(
        pos("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1").position_hash(),
        pos("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1").position_hash()
    );
}
