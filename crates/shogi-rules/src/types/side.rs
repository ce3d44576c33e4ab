//! 手番（Side）

use serde::{Deserialize, Serialize};

/// 手番（上手/下手）
///
/// `Upper` は row 0 方向へ前進する側（先手相当）、`Lower` は row 8 方向へ
/// 前進する側（後手相当）。盤の座標は row 0 = Upper から見た最奥段。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Side {
    Upper = 0,
    Lower = 1,
}

impl Side {
    /// 手番の数
    pub const NUM: usize = 2;

    /// 相手番を返す
    #[inline]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Upper => Side::Lower,
            Side::Lower => Side::Upper,
        }
    }

    /// インデックスとして使用（配列アクセス用）
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// この側から見た最奥段（行き場のない駒の判定に使う）
    #[inline]
    pub const fn terminal_row(self) -> u8 {
        match self {
            Side::Upper => 0,
            Side::Lower => 8,
        }
    }
}

impl std::ops::Not for Side {
    type Output = Side;

    #[inline]
    fn not(self) -> Side {
        self.opponent()
    }
}
