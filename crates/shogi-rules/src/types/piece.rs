//! 駒（Piece）
//!
//! 元実装は大文字/小文字の文字列タグで先後を表現していたが、
//! ここでは {Side, PieceKind} の明示的なペアとして持つ。

use serde::{Deserialize, Serialize};

use super::{PieceKind, Side};

/// 駒（先後の区別あり）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
}

impl Piece {
    /// SideとPieceKindから生成
    #[inline]
    pub const fn new(side: Side, kind: PieceKind) -> Piece {
        Piece { side, kind }
    }

    /// 成り駒を返す（成れない場合はNone）
    #[inline]
    pub const fn promote(self) -> Option<Piece> {
        match self.kind.promote() {
            Some(kind) => Some(Piece::new(self.side, kind)),
            None => None,
        }
    }

    /// 生駒を返す（既に生駒の場合はそのまま）
    #[inline]
    pub const fn unpromote(self) -> Piece {
        Piece::new(self.side, self.kind.unpromote())
    }
}
