//! 国际象棋及其变体的核心数据模型
//!
//! 包含:
//! - 棋盘变体与带越界检查的棋盘
//! - 六种棋子及其走法规则
//! - 错误类型
//! - 绘制接口与字符画布
//! - 内置自检

mod board;
mod constants;
mod error;
mod piece;
mod render;
pub mod selfcheck;

pub use board::{Board, Extent, Variant};
pub use constants::*;
pub use error::{Axis, ChessError, Result};
pub use piece::{Drawable, Movable, Piece, PieceKind, SpriteId};
pub use render::{Surface, TextSurface};
pub use selfcheck::{CheckOutcome, SelfCheckReport};
