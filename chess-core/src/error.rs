//! 错误类型定义

use thiserror::Error;

use crate::piece::PieceKind;

/// 坐标轴
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// 棋盘与棋子错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// 未知的棋盘变体
    #[error("Unknown board variant: {variant:?}")]
    Configuration { variant: String },

    /// 坐标越界
    #[error("The provided {axis}-coordinate {value} is out of bounds [0, {limit})")]
    OutOfBounds { axis: Axis, value: i32, limit: u32 },

    /// 不符合棋子走法的目标
    #[error("Illegal {kind} move: from ({}, {}) to ({}, {})", .from.0, .from.1, .to.0, .to.1)]
    IllegalMove {
        kind: PieceKind,
        from: (i32, i32),
        to: (i32, i32),
    },

    /// 不支持的能力
    #[error("Unsupported behaviour: {capability}")]
    UnsupportedBehavior { capability: &'static str },
}

/// 核心操作结果类型
pub type Result<T> = std::result::Result<T, ChessError>;
