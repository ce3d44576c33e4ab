//! 対局セッション
//!
//! 正盤面・手駒・手番を持ち、指し手の受付と適用を行う。元実装では
//! これらがグローバル変数だったが、呼び出し元が所有する明示的な
//! セッションオブジェクトに再設計した。ルール判定はすべて
//! `shogi-rules` の純粋関数へ委譲し、検査に全て通った場合のみ
//! 状態を書き換える（拒否時は一切変更しない）。

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shogi_rules::{
    can_drop, can_drop_ignoring_mate, generate_moves, is_checkmate, is_forced_promotion,
    is_in_check, is_promotion_zone, resolve_promotion, Board, DropViolation, Hand, MoveKind,
    PieceKind, Side, Square,
};

use crate::state::{EndReason, GameState, GameStatus, PerSide};

/// 指し手の要求
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "move_type", rename_all = "lowercase")]
pub enum MoveRequest {
    /// 盤上移動（空き升へ / 敵駒を取る）
    Board {
        from: Square,
        to: Square,
        kind: MoveKind,
        promote: bool,
    },
    /// 手駒打ち
    Drop { kind: PieceKind, to: Square },
}

/// 指し手の拒否理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// 対局は終了している
    #[error("game already ended")]
    GameEnded,

    /// 移動元に駒がない
    #[error("no piece at origin square")]
    NoPieceAtOrigin,

    /// 手番側の駒ではない
    #[error("piece does not belong to the side to move")]
    NotYourTurn,

    /// 移動先が到達可能升に含まれない
    #[error("destination is not reachable")]
    IllegalDestination,

    /// 指定の種別が生成結果と一致しない
    #[error("move kind does not match the legal move (expected {expected:?})")]
    MoveKindMismatch { expected: MoveKind },

    /// 成れない駒への成り要求
    #[error("this piece cannot promote")]
    CannotPromote,

    /// 敵陣に関与しない移動での成り要求
    #[error("promotion is not allowed outside the promotion zone")]
    OutsidePromotionZone,

    /// 強制成りの拒否
    #[error("this move requires promotion")]
    PromotionRequired,

    /// 自玉を王手に晒す
    #[error("self-check is not allowed")]
    SelfCheck,

    /// 指定の駒を手駒に持っていない
    #[error("piece is not in hand")]
    NotInHand { kind: PieceKind },

    /// 駒打ちの禁則
    #[error(transparent)]
    Drop(#[from] DropViolation),
}

/// 適用結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// 取った駒（盤上にあった形のまま）
    pub captured: Option<PieceKind>,
    /// 成りを適用したか
    pub promoted: bool,
}

/// 到達先1件と成り選択肢
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOption {
    pub to: Square,
    pub kind: MoveKind,
    pub promote: bool,
}

/// 対局セッション
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    hands: PerSide<Hand>,
    side_to_move: Side,
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new()
    }
}

impl GameSession {
    /// 平手初期局面のセッション（上手番から開始）
    pub fn new() -> GameSession {
        GameSession {
            board: Board::startpos(),
            hands: PerSide::default(),
            side_to_move: Side::Upper,
        }
    }

    /// 任意の局面からのセッション（盤面持ち込み・テスト用）
    pub fn from_parts(board: Board, hands: PerSide<Hand>, side_to_move: Side) -> GameSession {
        GameSession {
            board,
            hands,
            side_to_move,
        }
    }

    /// 現在の盤面
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 指定側の手駒
    pub fn hand(&self, side: Side) -> &Hand {
        self.hands.get(side)
    }

    /// 手番
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// 対局の進行状態
    ///
    /// どちらかが詰んでいれば終局（勝者は相手側）。
    pub fn status(&self) -> GameStatus {
        for side in [Side::Upper, Side::Lower] {
            if is_checkmate(&self.board, side, self.hands.get(side)) {
                return GameStatus::Ended {
                    winner: side.opponent(),
                    reason: EndReason::Checkmate,
                };
            }
        }
        GameStatus::Ongoing
    }

    /// 対局状態のスナップショット
    pub fn state(&self) -> GameState {
        let check = PerSide {
            upper: is_in_check(&self.board, Side::Upper),
            lower: is_in_check(&self.board, Side::Lower),
        };
        let checkmate = PerSide {
            upper: is_checkmate(&self.board, Side::Upper, self.hands.get(Side::Upper)),
            lower: is_checkmate(&self.board, Side::Lower, self.hands.get(Side::Lower)),
        };
        GameState {
            board: self.board.clone(),
            side_to_move: self.side_to_move,
            hands: self.hands,
            check,
            checkmate,
            game_status: self.status(),
        }
    }

    /// 指定升の駒の着手候補を成り選択肢付きで展開する
    ///
    /// 手番側の駒でなければ空。自殺手の除外はここでは行わない
    /// （適用時に拒否される）。
    pub fn legal_moves(&self, from: Square) -> Vec<MoveOption> {
        let Some(piece) = self.board.piece_at(from) else {
            return Vec::new();
        };
        if piece.side != self.side_to_move {
            return Vec::new();
        }

        let mut options = Vec::new();
        for (to, kind) in generate_moves(&self.board, from, piece) {
            let can = piece.kind.can_promote();
            let in_zone = is_promotion_zone(piece.side, from, to);
            let forced = is_forced_promotion(piece, to);

            if can && in_zone && forced {
                options.push(MoveOption {
                    to,
                    kind,
                    promote: true,
                });
            } else if can && in_zone {
                options.push(MoveOption {
                    to,
                    kind,
                    promote: false,
                });
                options.push(MoveOption {
                    to,
                    kind,
                    promote: true,
                });
            } else {
                options.push(MoveOption {
                    to,
                    kind,
                    promote: false,
                });
            }
        }
        options
    }

    /// 指し手を検証して適用する
    ///
    /// 拒否された場合、セッションの状態は一切変化しない。
    pub fn apply(&mut self, request: MoveRequest) -> Result<MoveOutcome, MoveError> {
        if self.status().is_ended() {
            return Err(MoveError::GameEnded);
        }

        let outcome = match request {
            MoveRequest::Board {
                from,
                to,
                kind,
                promote,
            } => self.apply_board_move(from, to, kind, promote)?,
            MoveRequest::Drop { kind, to } => self.apply_drop(kind, to)?,
        };

        debug!(
            "{:?} played {:?}; next to move: {:?}",
            self.side_to_move,
            request,
            self.side_to_move.opponent()
        );
        self.side_to_move = self.side_to_move.opponent();
        Ok(outcome)
    }

    fn apply_board_move(
        &mut self,
        from: Square,
        to: Square,
        kind: MoveKind,
        promote: bool,
    ) -> Result<MoveOutcome, MoveError> {
        let side = self.side_to_move;
        let piece = self.board.piece_at(from).ok_or(MoveError::NoPieceAtOrigin)?;
        if piece.side != side {
            return Err(MoveError::NotYourTurn);
        }

        let generated = generate_moves(&self.board, from, piece);
        let matched = generated
            .iter()
            .find(|&&(target, _)| target == to)
            .ok_or(MoveError::IllegalDestination)?;
        if matched.1 != kind {
            return Err(MoveError::MoveKindMismatch { expected: matched.1 });
        }

        if promote && !piece.kind.can_promote() {
            return Err(MoveError::CannotPromote);
        }
        if promote && !is_promotion_zone(side, from, to) {
            return Err(MoveError::OutsidePromotionZone);
        }
        if !promote && is_forced_promotion(piece, to) {
            return Err(MoveError::PromotionRequired);
        }

        let piece_to_place = resolve_promotion(piece, promote);
        let (next, captured) = self.board.apply_move(from, to, kind, piece_to_place);
        if is_in_check(&next, side) {
            return Err(MoveError::SelfCheck);
        }

        // 取った駒は生駒に戻し、取った側の手駒に加える
        if let Some(captured_piece) = captured {
            self.hands.get_mut(side).add(captured_piece.kind);
        }
        self.board = next;

        Ok(MoveOutcome {
            captured: captured.map(|p| p.kind),
            promoted: promote,
        })
    }

    fn apply_drop(&mut self, kind: PieceKind, to: Square) -> Result<MoveOutcome, MoveError> {
        let side = self.side_to_move;
        if !self.hands.get(side).has(kind) {
            return Err(MoveError::NotInHand { kind });
        }

        // 打ち先の制約 → 自殺手 → 打ち歩詰め の順に検査する
        can_drop_ignoring_mate(&self.board, side, kind, to)?;
        let next = self.board.apply_drop(side, kind, to);
        if is_in_check(&next, side) {
            return Err(MoveError::SelfCheck);
        }
        can_drop(&self.board, side, kind, to, self.hands.get(side.opponent()))?;

        self.hands.get_mut(side).remove(kind);
        self.board = next;

        Ok(MoveOutcome {
            captured: None,
            promoted: false,
        })
    }
}
