//! 绘制接口
//!
//! 真正的图形层不在本库范围内，这里只定义棋子绘制所依赖的画布接口，
//! 并提供一个字符画布用于命令行输出和测试。

use crate::board::Extent;
use crate::constants::EMPTY_CELL;
use crate::error::{ChessError, Result};
use crate::piece::SpriteId;

/// 画布
pub trait Surface {
    /// 在 (x, y) 处绘制字符
    fn blit(&mut self, x: i32, y: i32, glyph: char) -> Result<()>;

    /// 在 (x, y) 处绘制精灵图，默认不支持
    fn blit_sprite(&mut self, _x: i32, _y: i32, _sprite: SpriteId) -> Result<()> {
        Err(ChessError::UnsupportedBehavior {
            capability: "sprite rendering",
        })
    }
}

/// 字符画布
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSurface {
    extent: Extent,
    /// 索引为 y * width + x
    glyphs: Vec<char>,
}

impl TextSurface {
    /// 创建空白画布
    pub fn new(extent: Extent) -> Self {
        Self {
            extent,
            glyphs: vec![EMPTY_CELL; extent.width as usize * extent.height as usize],
        }
    }

    /// 获取 (x, y) 处的字符
    pub fn glyph_at(&self, x: i32, y: i32) -> Result<char> {
        self.extent.check(x, y)?;
        Ok(self.glyphs[self.index(x, y)])
    }

    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.extent.width as usize + x as usize
    }
}

impl Surface for TextSurface {
    fn blit(&mut self, x: i32, y: i32, glyph: char) -> Result<()> {
        self.extent.check(x, y)?;
        let index = self.index(x, y);
        self.glyphs[index] = glyph;
        Ok(())
    }
}

impl std::fmt::Display for TextSurface {
    /// 从上（y 最大）到下逐行输出
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.extent.width as usize;
        for row in self.glyphs.chunks(width.max(1)).rev() {
            let line: String = row.iter().collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::error::Axis;
    use crate::piece::{Drawable, Piece, PieceKind};

    #[test]
    fn test_draw_every_kind() {
        let mut surface = TextSurface::new(Extent::new(8, 8));

        for (x, kind) in PieceKind::ALL.into_iter().enumerate() {
            let piece = Piece::new(kind, x as i32, 0);
            piece.draw(&mut surface).unwrap();
            assert_eq!(surface.glyph_at(x as i32, 0).unwrap(), kind.symbol());
        }
    }

    #[test]
    fn test_sprite_unsupported() {
        let mut surface = TextSurface::new(Extent::new(8, 8));
        let piece = Piece::new(PieceKind::Queen, 3, 0).with_sprite(1);

        assert_eq!(
            piece.draw(&mut surface),
            Err(ChessError::UnsupportedBehavior {
                capability: "sprite rendering"
            })
        );
        assert_eq!(surface.glyph_at(3, 0).unwrap(), EMPTY_CELL);
    }

    #[test]
    fn test_blit_out_of_bounds() {
        let mut surface = TextSurface::new(Extent::new(2, 2));
        assert!(matches!(
            surface.blit(0, 2, 'K'),
            Err(ChessError::OutOfBounds { axis: Axis::Y, .. })
        ));
    }

    #[test]
    fn test_render_board() {
        let board = Board::default()
            .with_piece(Piece::new(PieceKind::Rook, 0, 0))
            .unwrap()
            .with_piece(Piece::new(PieceKind::King, 4, 7))
            .unwrap();

        let mut surface = TextSurface::new(board.extent());
        board.render(&mut surface).unwrap();

        let text = surface.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "....K...");
        assert_eq!(lines[7], "R.......");
    }
}
