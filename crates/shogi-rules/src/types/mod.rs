//! 基本型（手番・駒種・駒・升目・手駒・指し手種別）

mod hand;
mod moves;
mod piece;
mod piece_kind;
mod side;
mod square;

pub use hand::Hand;
pub use moves::MoveKind;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use side::Side;
pub use square::{is_on_board, Square, BOARD_SIZE};
