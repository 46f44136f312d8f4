//! 棋子定义与走法规则

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Extent;
use crate::error::{ChessError, Result};
use crate::render::Surface;

/// 精灵图标识（对走法逻辑无意义）
pub type SpriteId = u32;

/// 棋子类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    /// 兵
    Pawn,
    /// 车
    Rook,
    /// 马
    Knight,
    /// 象
    Bishop,
    /// 王
    King,
    /// 后
    Queen,
}

impl PieceKind {
    /// 全部棋子类型
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::King,
        PieceKind::Queen,
    ];

    /// 棋子名称
    pub fn name(&self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Rook => "rook",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::King => "king",
            PieceKind::Queen => "queen",
        }
    }

    /// 文本显示字符
    pub fn symbol(&self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
        }
    }

    /// 偏移 (dx, dy) 是否符合该棋子的走法
    ///
    /// 只考虑几何形状，不考虑阻挡和吃子。零偏移永远不合法。
    pub fn allows(&self, dx: i64, dy: i64) -> bool {
        let (adx, ady) = (dx.unsigned_abs(), dy.unsigned_abs());
        match self {
            // 不区分阵营，兵固定沿 y 正方向走一步
            PieceKind::Pawn => dx == 0 && dy == 1,
            PieceKind::Rook => (adx == 0) != (ady == 0),
            PieceKind::Bishop => adx == ady && adx != 0,
            PieceKind::Queen => {
                PieceKind::Rook.allows(dx, dy) || PieceKind::Bishop.allows(dx, dy)
            }
            PieceKind::King => adx.max(ady) == 1,
            PieceKind::Knight => (adx == 1 && ady == 2) || (adx == 2 && ady == 1),
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 可移动能力
pub trait Movable: Sized {
    /// 走到目标坐标，返回新的棋子，自身不变
    ///
    /// 目标先按 `extent` 做越界检查（先 x 后 y），再按走法规则检查。
    fn move_to(&self, target_x: i32, target_y: i32, extent: Extent) -> Result<Self>;
}

/// 可绘制能力
pub trait Drawable {
    /// 绘制到给定的画布
    fn draw(&self, surface: &mut dyn Surface) -> Result<()>;
}

/// 棋子
///
/// 不可变值类型：所有走法都返回新的棋子。坐标在创建时不做校验，
/// 只有在走子时才对照调用方给出的棋盘范围。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    kind: PieceKind,
    x: i32,
    y: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sprite: Option<SpriteId>,
}

impl Piece {
    /// 创建新棋子（无精灵图）
    pub fn new(kind: PieceKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            x,
            y,
            sprite: None,
        }
    }

    /// 返回带有精灵图的新棋子
    pub fn with_sprite(self, sprite: SpriteId) -> Self {
        Self {
            sprite: Some(sprite),
            ..self
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// 当前位置 (x, y)
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn sprite(&self) -> Option<SpriteId> {
        self.sprite
    }
}

impl Movable for Piece {
    fn move_to(&self, target_x: i32, target_y: i32, extent: Extent) -> Result<Self> {
        extent.check(target_x, target_y)?;

        // 创建时坐标未校验，用 i64 计算偏移避免溢出
        let dx = i64::from(target_x) - i64::from(self.x);
        let dy = i64::from(target_y) - i64::from(self.y);
        if !self.kind.allows(dx, dy) {
            debug!(
                "Rejected {} move ({}, {}) -> ({}, {})",
                self.kind, self.x, self.y, target_x, target_y
            );
            return Err(ChessError::IllegalMove {
                kind: self.kind,
                from: self.position(),
                to: (target_x, target_y),
            });
        }

        Ok(Self {
            x: target_x,
            y: target_y,
            ..*self
        })
    }
}

impl Drawable for Piece {
    fn draw(&self, surface: &mut dyn Surface) -> Result<()> {
        match self.sprite {
            Some(sprite) => surface.blit_sprite(self.x, self.y, sprite),
            None => surface.blit(self.x, self.y, self.kind.symbol()),
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.kind, self.x, self.y)
    }
}
