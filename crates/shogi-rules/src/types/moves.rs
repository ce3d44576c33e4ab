//! 指し手の種別（MoveKind）

use serde::{Deserialize, Serialize};

/// 盤上移動の種別
///
/// 駒打ちは盤上移動とは別経路（`drops` モジュール）で扱うため含まない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveKind {
    /// 空き升への移動
    Move,
    /// 敵駒を取る移動
    Capture,
}
