//! 盤面（Board）
//!
//! 9x9 の升目それぞれに駒の有無を持つ値型。変更系の操作は常に
//! 新しい盤面を返し、呼び出し元の盤面を書き換えない（値セマンティクス）。

use serde::{Deserialize, Serialize};

use crate::types::{MoveKind, Piece, PieceKind, Side, Square, BOARD_SIZE};

/// 升目の分類（移動側から見た判定）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellClass {
    /// 空き升
    Empty,
    /// 味方の駒
    Ally,
    /// 敵の駒
    Enemy,
}

/// 盤面（9x9）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// 空の盤面
    pub fn empty() -> Board {
        Board {
            cells: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// 平手の初期盤面
    ///
    /// Lower が row 0-2 側、Upper が row 6-8 側に並ぶ。
    pub fn startpos() -> Board {
        use PieceKind::*;
        let mut board = Board::empty();
        let back_rank = [Lance, Knight, Silver, Gold, King, Gold, Silver, Knight, Lance];

        for (col, &kind) in back_rank.iter().enumerate() {
            board.cells[0][col] = Some(Piece::new(Side::Lower, kind));
            board.cells[8][col] = Some(Piece::new(Side::Upper, kind));
        }
        board.cells[1][1] = Some(Piece::new(Side::Lower, Rook));
        board.cells[1][7] = Some(Piece::new(Side::Lower, Bishop));
        board.cells[7][1] = Some(Piece::new(Side::Upper, Bishop));
        board.cells[7][7] = Some(Piece::new(Side::Upper, Rook));
        for col in 0..BOARD_SIZE as usize {
            board.cells[2][col] = Some(Piece::new(Side::Lower, Pawn));
            board.cells[6][col] = Some(Piece::new(Side::Upper, Pawn));
        }
        board
    }

    /// 升目の駒を取得
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// 升目に駒を置く（Noneで取り除く）
    #[inline]
    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq.row() as usize][sq.col() as usize] = piece;
    }

    /// 移動側から見た升目の分類
    #[inline]
    pub fn classify(&self, moving_side: Side, sq: Square) -> CellClass {
        match self.piece_at(sq) {
            None => CellClass::Empty,
            Some(piece) if piece.side == moving_side => CellClass::Ally,
            Some(_) => CellClass::Enemy,
        }
    }

    /// 指定側の王の位置
    ///
    /// 見つからない場合はNone（王手が成立しないことを意味し、エラーではない）。
    pub fn find_king(&self, side: Side) -> Option<Square> {
        self.pieces_of(side)
            .find(|&(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// 指定側の駒を列挙
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| {
            self.piece_at(sq)
                .filter(|piece| piece.side == side)
                .map(|piece| (sq, piece))
        })
    }

    /// 指定筋に指定側の生歩があるか（二歩判定用）
    pub fn has_unpromoted_pawn_on_col(&self, side: Side, col: u8) -> bool {
        Square::all().filter(|sq| sq.col() == col).any(|sq| {
            self.piece_at(sq)
                .is_some_and(|piece| piece.side == side && piece.kind == PieceKind::Pawn)
        })
    }

    /// 盤上移動を適用した新しい盤面を返す
    ///
    /// `piece_to_place` は成り解決済みの駒（`resolve_promotion` の結果）。
    /// 取った駒（あれば）を盤上にあった形のまま併せて返す。手駒への
    /// 変換（生駒化・持ち主変更）は呼び出し側の責務。
    pub fn apply_move(
        &self,
        from: Square,
        to: Square,
        kind: MoveKind,
        piece_to_place: Piece,
    ) -> (Board, Option<Piece>) {
        let mut next = self.clone();
        let captured = match kind {
            MoveKind::Capture => next.piece_at(to),
            MoveKind::Move => None,
        };
        next.set_piece(to, Some(piece_to_place));
        next.set_piece(from, None);
        (next, captured)
    }

    /// 駒打ちを適用した新しい盤面を返す
    pub fn apply_drop(&self, side: Side, kind: PieceKind, to: Square) -> Board {
        let mut next = self.clone();
        next.set_piece(to, Some(Piece::new(side, kind)));
        next
    }
}
