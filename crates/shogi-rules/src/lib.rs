//! # shogi-rules
//!
//! 将棋のルールエンジン。明示的に渡された盤面・手駒に対する純粋関数の
//! 集まりで、内部に可変状態を持たない。対局の進行（手番・手駒の保持・
//! 指し手の受付）は `shogi-session` が担う。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Side, PieceKind, Piece, Square, Hand, MoveKind）
//! - `movement`: 駒の移動文法（方向表と手番による反転）
//! - `board`: 盤面の値型と指し手適用
//! - `movegen`: 到達可能升の生成（自殺手は除外しない）
//! - `check`: 王手判定
//! - `promotion`: 成りの判定と解決
//! - `drops`: 駒打ちの禁則（二歩・行き所なし・打ち歩詰め）
//! - `mate`: 詰み判定

pub mod board;
pub mod check;
pub mod drops;
pub mod mate;
pub mod movegen;
pub mod movement;
pub mod promotion;
pub mod types;

pub use board::{Board, CellClass};
pub use check::is_in_check;
pub use drops::{can_drop, can_drop_ignoring_mate, DropViolation};
pub use mate::is_checkmate;
pub use movegen::generate_moves;
pub use promotion::{
    in_promotion_zone, is_forced_promotion, is_promotion_zone, resolve_promotion,
};
pub use types::{Hand, MoveKind, Piece, PieceKind, Side, Square};
