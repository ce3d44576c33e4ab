//! 駒の移動文法（Piece Catalog）
//!
//! 各駒種の移動方向と走り（無制限スライド）可否を定義する。
//! 方向ベクトルは Upper 視点（前進 = row 減少）で一元定義し、
//! Lower の駒には `oriented_delta` で縦方向のみ反転して適用する。
//! 方向表を手番ごとに複製してはならない。

use crate::types::{PieceKind, Side};

/// 移動方向
///
/// N は Upper の前進方向。NNE/NNW は桂の跳び。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    /// 桂跳び（前2右1）
    JumpRight,
    /// 桂跳び（前2左1）
    JumpLeft,
}

impl Direction {
    /// Upper視点の移動ベクトル (Δrow, Δcol)
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
            Direction::JumpRight => (-2, 1),
            Direction::JumpLeft => (-2, -1),
        }
    }

    /// 手番に合わせて反転したベクトルを返す
    ///
    /// Lower は前進方向が逆なので縦成分のみ符号反転する
    /// （移動文法は左右対称なので横成分はそのまま）。
    #[inline]
    pub const fn oriented_delta(self, side: Side) -> (i8, i8) {
        let (dr, dc) = self.delta();
        match side {
            Side::Upper => (dr, dc),
            Side::Lower => (-dr, dc),
        }
    }
}

/// 金の移動方向（と金・成香・成桂・成銀も同じ）
const GOLD_DIRECTIONS: [Direction; 6] = [
    Direction::North,
    Direction::East,
    Direction::West,
    Direction::South,
    Direction::NorthEast,
    Direction::NorthWest,
];

/// 竜・馬の移動方向（全8方向、走りは一部のみ）
const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
    Direction::NorthEast,
    Direction::SouthEast,
    Direction::SouthWest,
    Direction::NorthWest,
];

/// 駒種の移動方向一覧
pub const fn directions(kind: PieceKind) -> &'static [Direction] {
    match kind {
        PieceKind::Pawn | PieceKind::Lance => &[Direction::North],
        PieceKind::Knight => &[Direction::JumpRight, Direction::JumpLeft],
        PieceKind::Silver => &[
            Direction::North,
            Direction::NorthEast,
            Direction::NorthWest,
            Direction::SouthEast,
            Direction::SouthWest,
        ],
        PieceKind::Gold
        | PieceKind::ProPawn
        | PieceKind::ProLance
        | PieceKind::ProKnight
        | PieceKind::ProSilver => &GOLD_DIRECTIONS,
        PieceKind::King => &[
            Direction::North,
            Direction::East,
            Direction::West,
            Direction::South,
            Direction::NorthEast,
            Direction::SouthEast,
            Direction::SouthWest,
            Direction::NorthWest,
        ],
        PieceKind::Rook => &[
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ],
        PieceKind::Bishop => &[
            Direction::NorthEast,
            Direction::SouthEast,
            Direction::SouthWest,
            Direction::NorthWest,
        ],
        PieceKind::Dragon | PieceKind::Horse => &ALL_DIRECTIONS,
    }
}

/// 指定方向が走り（無制限スライド）かどうか
///
/// 竜は縦横のみ、馬は斜めのみ走る。香は前方のみ。
pub const fn is_slide_direction(kind: PieceKind, dir: Direction) -> bool {
    match kind {
        PieceKind::Lance => matches!(dir, Direction::North),
        PieceKind::Rook | PieceKind::Dragon => matches!(
            dir,
            Direction::North | Direction::East | Direction::South | Direction::West
        ),
        PieceKind::Bishop | PieceKind::Horse => matches!(
            dir,
            Direction::NorthEast
                | Direction::SouthEast
                | Direction::SouthWest
                | Direction::NorthWest
        ),
        _ => false,
    }
}

/// 駒種の (方向, 走りか) の一覧を返す
pub fn move_specs(kind: PieceKind) -> impl Iterator<Item = (Direction, bool)> {
    directions(kind)
        .iter()
        .map(move |&dir| (dir, is_slide_direction(kind, dir)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oriented_delta_reflects_row_only() {
        assert_eq!(Direction::North.oriented_delta(Side::Upper), (-1, 0));
        assert_eq!(Direction::North.oriented_delta(Side::Lower), (1, 0));
        assert_eq!(Direction::JumpRight.oriented_delta(Side::Upper), (-2, 1));
        assert_eq!(Direction::JumpRight.oriented_delta(Side::Lower), (2, 1));
        // 横成分は反転しない
        assert_eq!(Direction::East.oriented_delta(Side::Lower), (0, 1));
    }

    #[test]
    fn test_slider_kinds_have_slide_direction() {
        for kind in [
            PieceKind::Lance,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Horse,
            PieceKind::Dragon,
        ] {
            assert!(kind.is_slider());
            assert!(move_specs(kind).any(|(_, slide)| slide));
        }
    }

    #[test]
    fn test_step_kinds_never_slide() {
        for kind in [
            PieceKind::Pawn,
            PieceKind::Knight,
            PieceKind::Silver,
            PieceKind::Gold,
            PieceKind::King,
            PieceKind::ProPawn,
            PieceKind::ProSilver,
        ] {
            assert!(move_specs(kind).all(|(_, slide)| !slide));
        }
    }

    #[test]
    fn test_dragon_slides_orthogonally_only() {
        assert!(is_slide_direction(PieceKind::Dragon, Direction::North));
        assert!(!is_slide_direction(PieceKind::Dragon, Direction::NorthEast));
        // 馬は逆
        assert!(is_slide_direction(PieceKind::Horse, Direction::NorthEast));
        assert!(!is_slide_direction(PieceKind::Horse, Direction::North));
    }

    #[test]
    fn test_promoted_minor_pieces_move_like_gold() {
        for kind in [
            PieceKind::ProPawn,
            PieceKind::ProLance,
            PieceKind::ProKnight,
            PieceKind::ProSilver,
        ] {
            assert_eq!(directions(kind), directions(PieceKind::Gold));
        }
    }
}
