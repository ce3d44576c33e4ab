//! 駒打ちの合法性（Drop Validator）

use thiserror::Error;

use crate::board::Board;
use crate::check::is_in_check;
use crate::mate::is_checkmate;
use crate::types::{Hand, PieceKind, Side, Square};

/// 駒打ちの禁則
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DropViolation {
    /// 打ち先に駒がある
    #[error("drop target is occupied")]
    Occupied,

    /// 二歩（同じ筋に自分の生歩がある）
    #[error("two unpromoted pawns on the same file")]
    DoublePawn,

    /// 行き所のない駒（歩・香は最奥段、桂は最奥2段に打てない)
    #[error("{kind:?} dropped where it would have no legal move")]
    DeadEnd { kind: PieceKind },

    /// 打ち歩詰め
    #[error("pawn drop delivering checkmate is forbidden")]
    DropPawnMate,
}

/// 打ち先固有の制約（占有・二歩・行き所なし）を検査する
///
/// 打ち歩詰めは含まない。詰み探索の受け列挙はこちらを使うことで
/// 詰み判定との相互再帰を避ける。
pub fn can_drop_ignoring_mate(
    board: &Board,
    side: Side,
    kind: PieceKind,
    to: Square,
) -> Result<(), DropViolation> {
    if board.piece_at(to).is_some() {
        return Err(DropViolation::Occupied);
    }

    if kind == PieceKind::Pawn && board.has_unpromoted_pawn_on_col(side, to.col()) {
        return Err(DropViolation::DoublePawn);
    }

    let row = to.row();
    match kind {
        PieceKind::Pawn | PieceKind::Lance => {
            if row == side.terminal_row() {
                return Err(DropViolation::DeadEnd { kind });
            }
        }
        PieceKind::Knight => {
            let dead = match side {
                Side::Upper => row <= 1,
                Side::Lower => row >= 7,
            };
            if dead {
                return Err(DropViolation::DeadEnd { kind });
            }
        }
        _ => {}
    }

    Ok(())
}

/// 駒打ちの合法性を検査する（打ち歩詰めを含む）
///
/// 歩を打って相手が受けなしの詰みになる場合のみ `DropPawnMate`。
/// 香・桂など歩以外の駒打ちは詰みを生んでも合法。相手の受けの列挙には
/// 相手の手駒（`opponent_hand`）が要る。打った側の王手放置の検査は
/// 呼び出し側の責務（盤上移動と同じ適用境界で行う）。
pub fn can_drop(
    board: &Board,
    side: Side,
    kind: PieceKind,
    to: Square,
    opponent_hand: &Hand,
) -> Result<(), DropViolation> {
    can_drop_ignoring_mate(board, side, kind, to)?;

    if kind == PieceKind::Pawn {
        let next = board.apply_drop(side, kind, to);
        let opponent = side.opponent();
        if is_in_check(&next, opponent) && is_checkmate(&next, opponent, opponent_hand) {
            return Err(DropViolation::DropPawnMate);
        }
    }

    Ok(())
}
