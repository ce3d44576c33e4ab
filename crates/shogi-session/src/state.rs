//! 対局状態のスナップショット
//!
//! フロントエンドへ渡すためのシリアライズ可能な値。セッション本体の
//! 内部状態をコピーして作り、以後セッションと独立。

use serde::{Deserialize, Serialize};

use shogi_rules::{Board, Hand, Side};

/// 両側分の値
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PerSide<T> {
    pub upper: T,
    pub lower: T,
}

impl<T> PerSide<T> {
    /// 指定側の値への参照
    #[inline]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Upper => &self.upper,
            Side::Lower => &self.lower,
        }
    }

    /// 指定側の値への可変参照
    #[inline]
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Upper => &mut self.upper,
            Side::Lower => &mut self.lower,
        }
    }
}

/// 終局理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndReason {
    Checkmate,
}

/// 対局の進行状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum GameStatus {
    Ongoing,
    Ended { winner: Side, reason: EndReason },
}

impl GameStatus {
    /// 終局しているか
    #[inline]
    pub fn is_ended(self) -> bool {
        matches!(self, GameStatus::Ended { .. })
    }
}

/// 対局状態のスナップショット
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Side,
    pub hands: PerSide<Hand>,
    pub check: PerSide<bool>,
    pub checkmate: PerSide<bool>,
    pub game_status: GameStatus,
}
