//! 棋盘

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{STANDARD_HEIGHT, STANDARD_WIDTH};
use crate::error::{Axis, ChessError, Result};
use crate::piece::{Drawable, Piece};
use crate::render::Surface;

/// 坐标范围 `[0, width) × [0, height)`
///
/// 棋子走子时只依赖范围，不依赖具体的棋盘实例。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Extent {
    pub width: u32,
    pub height: u32,
}

impl Extent {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// 越界检查，先检查 x 再检查 y
    pub fn check(&self, x: i32, y: i32) -> Result<()> {
        if x < 0 || x as u32 >= self.width {
            return Err(ChessError::OutOfBounds {
                axis: Axis::X,
                value: x,
                limit: self.width,
            });
        }
        if y < 0 || y as u32 >= self.height {
            return Err(ChessError::OutOfBounds {
                axis: Axis::Y,
                value: y,
                limit: self.height,
            });
        }
        Ok(())
    }

    /// 坐标是否在范围内
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.check(x, y).is_ok()
    }

    /// 转换为数组索引（行优先），调用前必须已通过 `check`
    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// 棋盘变体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// 标准 8x8 棋盘
    Standard,
}

impl Variant {
    /// 全部已知变体
    pub const ALL: [Variant; 1] = [Variant::Standard];

    /// 变体名称
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Standard => "standard",
        }
    }

    /// 棋盘尺寸 (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Variant::Standard => (STANDARD_WIDTH, STANDARD_HEIGHT),
        }
    }
}

impl FromStr for Variant {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Variant::ALL
            .into_iter()
            .find(|variant| variant.name() == name)
            .ok_or_else(|| ChessError::Configuration {
                variant: s.to_string(),
            })
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 棋盘
///
/// 创建后尺寸不变，格子内容只读；放置棋子会返回新的棋盘。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    variant: Variant,
    extent: Extent,
    /// width * height 个格子，索引为 y * width + x
    cells: Vec<Option<Piece>>,
}

impl Board {
    /// 按变体名称创建棋盘
    pub fn new(variant: &str) -> Result<Self> {
        let variant = variant.parse::<Variant>()?;
        Ok(Self::from_variant(variant))
    }

    /// 按变体创建棋盘
    pub fn from_variant(variant: Variant) -> Self {
        let (width, height) = variant.dimensions();
        let extent = Extent::new(width, height);
        debug!("Creating {} board ({}x{})", variant, width, height);
        Self {
            variant,
            extent,
            cells: vec![None; extent.area()],
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn width(&self) -> u32 {
        self.extent.width
    }

    pub fn height(&self) -> u32 {
        self.extent.height
    }

    /// 棋盘尺寸 (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        (self.extent.width, self.extent.height)
    }

    /// 棋盘坐标范围
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// 获取指定位置的棋子
    pub fn piece_at(&self, x: i32, y: i32) -> Result<Option<Piece>> {
        self.extent.check(x, y)?;
        Ok(self.cells[self.extent.index(x, y)])
    }

    /// 在棋子自身坐标处放置棋子，返回新的棋盘
    pub fn with_piece(&self, piece: Piece) -> Result<Self> {
        let (x, y) = piece.position();
        self.extent.check(x, y)?;

        let mut board = self.clone();
        let index = board.extent.index(x, y);
        board.cells[index] = Some(piece);
        Ok(board)
    }

    /// 所有棋子（行优先）
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// 棋盘上是否没有棋子
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// 将所有棋子绘制到画布
    pub fn render(&self, surface: &mut dyn Surface) -> Result<()> {
        for piece in self.pieces() {
            piece.draw(surface)?;
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::from_variant(Variant::Standard)
    }
}
