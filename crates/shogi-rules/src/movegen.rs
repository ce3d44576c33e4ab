//! 指し手生成器
//!
//! 盤上の駒1つに対する到達可能升を列挙する。自玉への王手放置は
//! ここでは除外しない（王手判定自体がこの生成器を仮想盤面に対して
//! 使うため）。自殺手の排除は呼び出し側（詰み探索・指し手適用境界）
//! の責務。

use crate::board::{Board, CellClass};
use crate::movement::move_specs;
use crate::types::{MoveKind, Piece, Square};

/// 指定升の駒の到達可能升を (移動先, 種別) の列で返す
///
/// 列の順序は移動文法の方向順・近い升からの順で安定している。
pub fn generate_moves(board: &Board, from: Square, piece: Piece) -> Vec<(Square, MoveKind)> {
    let mut moves = Vec::new();

    for (dir, slide) in move_specs(piece.kind) {
        let (dr, dc) = dir.oriented_delta(piece.side);
        let mut row = from.row() as i8;
        let mut col = from.col() as i8;

        loop {
            row += dr;
            col += dc;
            let Some(to) = Square::from_signed(row, col) else {
                break;
            };

            match board.classify(piece.side, to) {
                CellClass::Empty => moves.push((to, MoveKind::Move)),
                CellClass::Enemy => {
                    moves.push((to, MoveKind::Capture));
                    break; // 走り駒でも取った先へは進めない
                }
                CellClass::Ally => break,
            }

            if !slide {
                break;
            }
        }
    }

    moves
}
