//! 成り（Promotion Resolver）
//!
//! 成りの可否・強制成り・敵陣判定と、駒の成り変換を提供する。
//! 成り要求の妥当性検査（成れない駒への要求、敵陣外での要求、強制成りの
//! 拒否）は呼び出し側の責務で、ここは純粋な判定・変換のみを行う。

use crate::types::{Piece, PieceKind, Side, Square};

/// 敵陣の段数（各側3段）
const ZONE_DEPTH: u8 = 3;

/// 指定段が指定側の敵陣（成れる領域）か
#[inline]
pub const fn in_promotion_zone(side: Side, row: u8) -> bool {
    match side {
        Side::Upper => row < ZONE_DEPTH,
        Side::Lower => row >= 9 - ZONE_DEPTH,
    }
}

/// 移動の始点か終点が敵陣に入っているか
#[inline]
pub const fn is_promotion_zone(side: Side, from: Square, to: Square) -> bool {
    in_promotion_zone(side, from.row()) || in_promotion_zone(side, to.row())
}

/// 強制成りか（不成だとその段から合法手が無くなる駒）
///
/// 歩・香は最奥段、桂は最奥2段で強制。その他の駒は強制されない。
pub const fn is_forced_promotion(piece: Piece, to: Square) -> bool {
    let row = to.row();
    match piece.kind {
        PieceKind::Pawn | PieceKind::Lance => match piece.side {
            Side::Upper => row == 0,
            Side::Lower => row == 8,
        },
        PieceKind::Knight => match piece.side {
            Side::Upper => row <= 1,
            Side::Lower => row >= 7,
        },
        _ => false,
    }
}

/// 成り要求を解決した駒を返す
///
/// `promote = false` なら恒等写像。成れない駒への `promote = true` は
/// 駒をそのまま返す（要求の拒否は呼び出し側で行う）。
#[inline]
pub const fn resolve_promotion(piece: Piece, promote: bool) -> Piece {
    if promote {
        match piece.promote() {
            Some(promoted) => promoted,
            None => piece,
        }
    } else {
        piece
    }
}
