//! 詰み判定（Checkmate Search）

use log::trace;

use crate::board::Board;
use crate::check::is_in_check;
use crate::drops::can_drop_ignoring_mate;
use crate::movegen::generate_moves;
use crate::promotion::{is_forced_promotion, is_promotion_zone, resolve_promotion};
use crate::types::{Hand, Piece, Side, Square};

/// 指定側が詰んでいるか
///
/// 前提条件として王手が掛かっていなければ詰みではない（王手なしで
/// 合法手が無い局面もfalseを返す。ステイルメイトを終局として扱わない）。
/// 王手中なら、盤上の全駒の全移動（成り/不成の両候補を含む）と
/// 手駒の全打ち場所を試し、1つでも王手が解ける応手があればfalse。
pub fn is_checkmate(board: &Board, side: Side, hand: &Hand) -> bool {
    if !is_in_check(board, side) {
        return false;
    }

    // 盤上移動による受け。王の退路も他の駒と同じ生成経路で列挙される。
    for (from, piece) in board.pieces_of(side) {
        for (to, kind) in generate_moves(board, from, piece) {
            for promote in promotion_choices(piece, from, to) {
                let piece_to_place = resolve_promotion(piece, *promote);
                let (next, _) = board.apply_move(from, to, kind, piece_to_place);
                if !is_in_check(&next, side) {
                    trace!("escape found: {piece:?} {from:?} -> {to:?} (promote={promote})");
                    return false;
                }
            }
        }
    }

    // 手駒による受け。ここでは打ち歩詰め判定を挟まない（相互再帰の回避。
    // 王手を解く歩打ちは合い駒であって詰ます手ではない）。
    for kind in hand.kinds() {
        for to in Square::all() {
            if can_drop_ignoring_mate(board, side, kind, to).is_err() {
                continue;
            }
            let next = board.apply_drop(side, kind, to);
            if !is_in_check(&next, side) {
                trace!("escape found: drop {kind:?} at {to:?}");
                return false;
            }
        }
    }

    true
}

/// 移動1件に対する成り選択肢
///
/// 強制成りなら成りのみ、敵陣絡みなら不成/成りの両方、それ以外は不成のみ。
fn promotion_choices(piece: Piece, from: Square, to: Square) -> &'static [bool] {
    if piece.kind.can_promote() && is_promotion_zone(piece.side, from, to) {
        if is_forced_promotion(piece, to) {
            &[true]
        } else {
            &[false, true]
        }
    } else {
        &[false]
    }
}
