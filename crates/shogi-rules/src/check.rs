//! 王手判定（Check Detector）

use crate::board::Board;
use crate::movegen::generate_moves;
use crate::types::{Side, Square};

/// 指定側の王に王手が掛かっているか
///
/// 王が盤上にいない場合はfalse（脅かす対象がない）。相手側の全駒の
/// 到達升を生成して王の升が含まれるかを調べる。9x9では全走査で十分。
pub fn is_in_check(board: &Board, side: Side) -> bool {
    let Some(king_sq) = board.find_king(side) else {
        return false;
    };

    attacks_square(board, side.opponent(), king_sq)
}

/// 指定側の駒のいずれかが対象升に到達できるか
fn attacks_square(board: &Board, by_side: Side, target: Square) -> bool {
    board.pieces_of(by_side).any(|(sq, piece)| {
        generate_moves(board, sq, piece)
            .iter()
            .any(|&(to, _)| to == target)
    })
}
