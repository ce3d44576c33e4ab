//! # shogi-session
//!
//! `shogi-rules` の上に載る対局セッション層。正盤面・両側の手駒・手番を
//! 所有し、指し手の受付（検証・適用・手番交代・捕獲駒の手駒化）を行う。
//! セッションは呼び出し元が所有する明示的な値で、ライブラリ内に共有状態は
//! 無い。同一セッションへの変更を直列化するのは呼び出し元の責務。
//!
//! ## モジュール構成
//!
//! - `session`: `GameSession` と指し手の要求/拒否理由
//! - `state`: シリアライズ可能な対局状態スナップショット

pub mod session;
pub mod state;

pub use session::{GameSession, MoveError, MoveOption, MoveOutcome, MoveRequest};
pub use state::{EndReason, GameState, GameStatus, PerSide};
