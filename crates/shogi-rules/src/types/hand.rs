//! 手駒（Hand）
//!
//! 捕獲した駒は必ず生駒に戻してから加える（成駒のまま手駒にはならない）。

use serde::{Deserialize, Serialize};

use super::PieceKind;

/// 片側の手駒（駒種ごとの枚数）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hand {
    counts: [u8; PieceKind::HAND_NUM],
}

impl Hand {
    /// 空の手駒
    pub const EMPTY: Hand = Hand {
        counts: [0; PieceKind::HAND_NUM],
    };

    /// 指定駒種の枚数を取得
    ///
    /// 手駒にならない駒種（王・成駒）は常に0。
    #[inline]
    pub fn count(&self, kind: PieceKind) -> u8 {
        match kind.hand_index() {
            Some(i) => self.counts[i],
            None => 0,
        }
    }

    /// 指定駒種を持っているか
    #[inline]
    pub fn has(&self, kind: PieceKind) -> bool {
        self.count(kind) > 0
    }

    /// 1枚追加
    ///
    /// 成駒を渡した場合は生駒に戻して加える。
    pub fn add(&mut self, kind: PieceKind) {
        let base = kind.unpromote();
        if let Some(i) = base.hand_index() {
            self.counts[i] += 1;
        }
    }

    /// 1枚減らす
    pub fn remove(&mut self, kind: PieceKind) {
        debug_assert!(self.has(kind));
        if let Some(i) = kind.hand_index() {
            self.counts[i] = self.counts[i].saturating_sub(1);
        }
    }

    /// 空かどうか
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// 1枚以上持っている駒種を列挙
    pub fn kinds(&self) -> impl Iterator<Item = PieceKind> + '_ {
        PieceKind::HAND_KINDS
            .into_iter()
            .filter(move |&kind| self.has(kind))
    }
}
