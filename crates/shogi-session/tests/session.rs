//! セッション層の結合テスト
//!
//! 任意局面の持ち込み（`from_parts`）で捕獲・成り・駒打ち・終局の
//! 一連の流れを検証する。

use shogi_rules::{Board, Hand, MoveKind, Piece, PieceKind, Side, Square};
use shogi_session::{
    EndReason, GameSession, GameStatus, MoveError, MoveRequest, PerSide,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).unwrap()
}

fn put(board: &mut Board, row: u8, col: u8, side: Side, kind: PieceKind) {
    board.set_piece(sq(row, col), Some(Piece::new(side, kind)));
}

#[test]
fn test_capture_adds_unpromoted_piece_to_hand() {
    init_logger();
    let mut board = Board::empty();
    put(&mut board, 4, 4, Side::Upper, PieceKind::Rook);
    put(&mut board, 2, 4, Side::Lower, PieceKind::ProPawn);
    let mut session = GameSession::from_parts(board, PerSide::default(), Side::Upper);

    let outcome = session
        .apply(MoveRequest::Board {
            from: sq(4, 4),
            to: sq(2, 4),
            kind: MoveKind::Capture,
            promote: false,
        })
        .unwrap();

    // と金を取っても手駒には歩として入る（持ち主も取った側へ）
    assert_eq!(outcome.captured, Some(PieceKind::ProPawn));
    assert_eq!(session.hand(Side::Upper).count(PieceKind::Pawn), 1);
    assert_eq!(session.hand(Side::Upper).count(PieceKind::ProPawn), 0);
    assert_eq!(session.side_to_move(), Side::Lower);
}

#[test]
fn test_forced_promotion_is_enforced() {
    init_logger();
    let mut board = Board::empty();
    put(&mut board, 1, 4, Side::Upper, PieceKind::Pawn);
    let mut session = GameSession::from_parts(board, PerSide::default(), Side::Upper);

    let err = session
        .apply(MoveRequest::Board {
            from: sq(1, 4),
            to: sq(0, 4),
            kind: MoveKind::Move,
            promote: false,
        })
        .unwrap_err();
    assert_eq!(err, MoveError::PromotionRequired);

    let outcome = session
        .apply(MoveRequest::Board {
            from: sq(1, 4),
            to: sq(0, 4),
            kind: MoveKind::Move,
            promote: true,
        })
        .unwrap();
    assert!(outcome.promoted);
    assert_eq!(
        session.board().piece_at(sq(0, 4)),
        Some(Piece::new(Side::Upper, PieceKind::ProPawn))
    );
}

#[test]
fn test_promotion_outside_zone_is_rejected() {
    init_logger();
    let mut board = Board::empty();
    put(&mut board, 5, 4, Side::Upper, PieceKind::Silver);
    let mut session = GameSession::from_parts(board, PerSide::default(), Side::Upper);

    let err = session
        .apply(MoveRequest::Board {
            from: sq(5, 4),
            to: sq(4, 4),
            kind: MoveKind::Move,
            promote: true,
        })
        .unwrap_err();
    assert_eq!(err, MoveError::OutsidePromotionZone);
}

#[test]
fn test_promotion_of_gold_is_rejected() {
    init_logger();
    let mut board = Board::empty();
    put(&mut board, 2, 4, Side::Upper, PieceKind::Gold);
    let mut session = GameSession::from_parts(board, PerSide::default(), Side::Upper);

    let err = session
        .apply(MoveRequest::Board {
            from: sq(2, 4),
            to: sq(1, 4),
            kind: MoveKind::Move,
            promote: true,
        })
        .unwrap_err();
    assert_eq!(err, MoveError::CannotPromote);
}

#[test]
fn test_self_check_is_rejected() {
    init_logger();
    let mut board = Board::empty();
    put(&mut board, 0, 4, Side::Lower, PieceKind::King);
    put(&mut board, 1, 4, Side::Lower, PieceKind::Silver);
    put(&mut board, 8, 4, Side::Upper, PieceKind::Rook);
    let mut session = GameSession::from_parts(board.clone(), PerSide::default(), Side::Lower);

    let err = session
        .apply(MoveRequest::Board {
            from: sq(1, 4),
            to: sq(2, 5),
            kind: MoveKind::Move,
            promote: false,
        })
        .unwrap_err();
    assert_eq!(err, MoveError::SelfCheck);
    // 拒否後も盤面はそのまま
    assert_eq!(session.board(), &board);
}

#[test]
fn test_drop_consumes_hand_piece() {
    init_logger();
    let mut hand = Hand::EMPTY;
    hand.add(PieceKind::Silver);
    let hands = PerSide {
        upper: hand,
        lower: Hand::EMPTY,
    };
    let mut board = Board::empty();
    put(&mut board, 0, 4, Side::Lower, PieceKind::King);
    put(&mut board, 8, 4, Side::Upper, PieceKind::King);
    let mut session = GameSession::from_parts(board, hands, Side::Upper);

    session
        .apply(MoveRequest::Drop {
            kind: PieceKind::Silver,
            to: sq(4, 4),
        })
        .unwrap();
    assert!(session.hand(Side::Upper).is_empty());
    assert_eq!(
        session.board().piece_at(sq(4, 4)),
        Some(Piece::new(Side::Upper, PieceKind::Silver))
    );
    assert_eq!(session.side_to_move(), Side::Lower);
}

#[test]
fn test_drop_without_hand_piece_is_rejected() {
    init_logger();
    let mut board = Board::empty();
    put(&mut board, 0, 4, Side::Lower, PieceKind::King);
    put(&mut board, 8, 4, Side::Upper, PieceKind::King);
    let mut session = GameSession::from_parts(board, PerSide::default(), Side::Upper);

    let err = session
        .apply(MoveRequest::Drop {
            kind: PieceKind::Gold,
            to: sq(4, 4),
        })
        .unwrap_err();
    assert_eq!(
        err,
        MoveError::NotInHand {
            kind: PieceKind::Gold
        }
    );
}

#[test]
fn test_pawn_drop_mate_is_rejected_at_session_level() {
    init_logger();
    let mut board = Board::empty();
    put(&mut board, 0, 4, Side::Lower, PieceKind::King);
    put(&mut board, 0, 3, Side::Lower, PieceKind::Lance);
    put(&mut board, 0, 5, Side::Lower, PieceKind::Lance);
    put(&mut board, 1, 3, Side::Lower, PieceKind::Lance);
    put(&mut board, 1, 5, Side::Lower, PieceKind::Lance);
    put(&mut board, 3, 3, Side::Upper, PieceKind::Knight);
    put(&mut board, 8, 4, Side::Upper, PieceKind::King);

    let mut hand = Hand::EMPTY;
    hand.add(PieceKind::Pawn);
    let hands = PerSide {
        upper: hand,
        lower: Hand::EMPTY,
    };
    let mut session = GameSession::from_parts(board, hands, Side::Upper);

    let err = session
        .apply(MoveRequest::Drop {
            kind: PieceKind::Pawn,
            to: sq(1, 4),
        })
        .unwrap_err();
    assert_eq!(
        err,
        MoveError::Drop(shogi_rules::DropViolation::DropPawnMate)
    );
    // 手駒は消費されない
    assert_eq!(session.hand(Side::Upper).count(PieceKind::Pawn), 1);
}

#[test]
fn test_ended_game_rejects_further_moves() {
    init_logger();
    // 箱詰め: 上手が詰んでいる
    let mut board = Board::empty();
    put(&mut board, 8, 4, Side::Upper, PieceKind::King);
    put(&mut board, 8, 3, Side::Upper, PieceKind::Lance);
    put(&mut board, 8, 5, Side::Upper, PieceKind::Lance);
    put(&mut board, 7, 3, Side::Upper, PieceKind::Pawn);
    put(&mut board, 7, 5, Side::Upper, PieceKind::Pawn);
    put(&mut board, 0, 4, Side::Lower, PieceKind::Rook);
    let mut session = GameSession::from_parts(board, PerSide::default(), Side::Upper);

    assert_eq!(
        session.status(),
        GameStatus::Ended {
            winner: Side::Lower,
            reason: EndReason::Checkmate,
        }
    );
    let err = session
        .apply(MoveRequest::Board {
            from: sq(7, 3),
            to: sq(6, 3),
            kind: MoveKind::Move,
            promote: false,
        })
        .unwrap_err();
    assert_eq!(err, MoveError::GameEnded);
}

#[test]
fn test_state_snapshot_serializes() {
    init_logger();
    let session = GameSession::new();
    let state = session.state();
    assert_eq!(state.side_to_move, Side::Upper);
    assert!(!state.check.upper);
    assert!(!state.checkmate.lower);
    assert_eq!(state.game_status, GameStatus::Ongoing);

    let json = serde_json::to_string(&state).unwrap();
    assert!(json.contains("\"side_to_move\":\"upper\""));
    assert!(json.contains("\"state\":\"ongoing\""));

    let restored: shogi_session::GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, state);
}

#[test]
fn test_full_exchange_round_trip() {
    init_logger();
    // 角道を開けて角交換に進める簡単なシナリオ
    let mut session = GameSession::new();
    let moves = [
        (sq(6, 2), sq(5, 2), MoveKind::Move), // 上手: 角道の歩
        (sq(2, 2), sq(3, 2), MoveKind::Move), // 下手: 歩
        (sq(7, 1), sq(3, 5), MoveKind::Move), // 上手: 角が対角へ
    ];
    for (from, to, kind) in moves {
        session
            .apply(MoveRequest::Board {
                from,
                to,
                kind,
                promote: false,
            })
            .unwrap();
    }
    assert_eq!(session.side_to_move(), Side::Lower);
    assert_eq!(
        session.board().piece_at(sq(3, 5)),
        Some(Piece::new(Side::Upper, PieceKind::Bishop))
    );
}
