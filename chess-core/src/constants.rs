//! 常量定义

/// 标准棋盘宽度（列数）
pub const STANDARD_WIDTH: u32 = 8;

/// 标准棋盘高度（行数）
pub const STANDARD_HEIGHT: u32 = 8;

/// 文本画布中空格子的显示字符
pub const EMPTY_CELL: char = '.';
