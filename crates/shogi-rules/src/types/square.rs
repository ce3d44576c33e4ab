//! 升目（Square）

use serde::{Deserialize, Serialize};

/// 盤面の数（9x9）
pub const BOARD_SIZE: u8 = 9;

/// 升目（row 0-8, col 0-8）
///
/// row 0 は Upper 側から見た最奥段。構築済みの `Square` は常に盤内を指す。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// 升目の数
    pub const NUM: usize = 81;

    /// row/colから生成（範囲チェックあり）
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// 符号付き座標から生成（盤外はNone）
    ///
    /// 移動ベクトルを加算した結果の判定に使う。
    #[inline]
    pub const fn from_signed(row: i8, col: i8) -> Option<Square> {
        if is_on_board(row, col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// 段を取得
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// 筋を取得
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// 全ての升を返すイテレータ（row優先）
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }
}

/// 盤内判定
#[inline]
pub const fn is_on_board(row: i8, col: i8) -> bool {
    0 <= row && row < BOARD_SIZE as i8 && 0 <= col && col < BOARD_SIZE as i8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_new() {
        assert!(Square::new(0, 0).is_some());
        assert!(Square::new(8, 8).is_some());
        assert!(Square::new(9, 0).is_none());
        assert!(Square::new(0, 9).is_none());
    }

    #[test]
    fn test_square_from_signed() {
        assert_eq!(Square::from_signed(4, 4), Square::new(4, 4));
        assert!(Square::from_signed(-1, 0).is_none());
        assert!(Square::from_signed(0, 9).is_none());
    }

    #[test]
    fn test_square_all() {
        assert_eq!(Square::all().count(), Square::NUM);
        assert!(Square::all().all(|sq| is_on_board(sq.row() as i8, sq.col() as i8)));
    }

    #[test]
    fn test_from_signed_agrees_with_is_on_board() {
        for row in -2i8..11 {
            for col in -2i8..11 {
                assert_eq!(
                    Square::from_signed(row, col).is_some(),
                    is_on_board(row, col)
                );
            }
        }
    }

    #[test]
    fn test_is_on_board() {
        assert!(is_on_board(0, 0));
        assert!(is_on_board(8, 8));
        assert!(!is_on_board(-1, 4));
        assert!(!is_on_board(4, 9));
    }
}
