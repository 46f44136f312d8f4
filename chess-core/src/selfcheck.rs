//! 内置自检
//!
//! 命令行 `--test` 使用：逐项运行棋盘与棋子的基本性质检查，
//! 某项失败不会中断后续检查。

use tracing::{info, warn};

use crate::board::{Board, Extent};
use crate::error::{Axis, ChessError};
use crate::piece::{Drawable, Movable, Piece, PieceKind};
use crate::render::TextSurface;

type CheckResult = std::result::Result<(), String>;

/// 单项检查
struct Check {
    name: &'static str,
    run: fn() -> CheckResult,
}

const CHECKS: &[Check] = &[
    Check {
        name: "standard board dimensions",
        run: check_standard_board,
    },
    Check {
        name: "unknown variant rejected",
        run: check_unknown_variant,
    },
    Check {
        name: "fresh board is empty",
        run: check_empty_cells,
    },
    Check {
        name: "x-axis bounds",
        run: check_x_bounds,
    },
    Check {
        name: "y-axis bounds",
        run: check_y_bounds,
    },
    Check {
        name: "x reported before y",
        run: check_bounds_order,
    },
    Check {
        name: "rook movement",
        run: check_rook,
    },
    Check {
        name: "knight movement",
        run: check_knight,
    },
    Check {
        name: "king movement",
        run: check_king,
    },
    Check {
        name: "move keeps original",
        run: check_immutability,
    },
    Check {
        name: "draw every kind",
        run: check_draw,
    },
];

/// 单项检查结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub name: &'static str,
    /// 失败原因，成功时为 None
    pub failure: Option<String>,
}

impl CheckOutcome {
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

/// 自检报告
#[derive(Debug, Clone, Default)]
pub struct SelfCheckReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl SelfCheckReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// 运行全部检查
pub fn run_all() -> SelfCheckReport {
    let mut report = SelfCheckReport::default();

    for check in CHECKS {
        let failure = (check.run)().err();
        match &failure {
            None => info!("[ok] {}", check.name),
            Some(reason) => warn!("[FAILED] {}: {}", check.name, reason),
        }
        report.outcomes.push(CheckOutcome {
            name: check.name,
            failure,
        });
    }

    info!(
        "Self-check finished: {} passed, {} failed",
        report.passed(),
        report.failed()
    );
    report
}

fn ensure(condition: bool, reason: impl Into<String>) -> CheckResult {
    if condition {
        Ok(())
    } else {
        Err(reason.into())
    }
}

fn standard() -> std::result::Result<Board, String> {
    Board::new("standard").map_err(|e| e.to_string())
}

fn is_out_of_bounds(result: Result<Option<Piece>, ChessError>, expected: Axis) -> bool {
    matches!(result, Err(ChessError::OutOfBounds { axis, .. }) if axis == expected)
}

fn check_standard_board() -> CheckResult {
    let board = standard()?;
    ensure(
        board.dimensions() == (8, 8),
        format!("expected 8x8, got {:?}", board.dimensions()),
    )
}

fn check_unknown_variant() -> CheckResult {
    ensure(
        matches!(Board::new("hexagonal"), Err(ChessError::Configuration { .. })),
        "unknown variant was accepted",
    )
}

fn check_empty_cells() -> CheckResult {
    let board = standard()?;
    for x in 0..board.width() as i32 {
        for y in 0..board.height() as i32 {
            let cell = board.piece_at(x, y).map_err(|e| e.to_string())?;
            ensure(cell.is_none(), format!("cell ({}, {}) is occupied", x, y))?;
        }
    }
    Ok(())
}

fn check_x_bounds() -> CheckResult {
    let board = standard()?;
    let width = board.width() as i32;
    for x in [-1, width, width + 1] {
        ensure(
            is_out_of_bounds(board.piece_at(x, 0), Axis::X),
            format!("x = {} was not rejected", x),
        )?;
    }
    Ok(())
}

fn check_y_bounds() -> CheckResult {
    let board = standard()?;
    let height = board.height() as i32;
    for y in [-1, height, height + 1] {
        ensure(
            is_out_of_bounds(board.piece_at(0, y), Axis::Y),
            format!("y = {} was not rejected", y),
        )?;
    }
    Ok(())
}

fn check_bounds_order() -> CheckResult {
    let board = standard()?;
    ensure(
        is_out_of_bounds(board.piece_at(-1, -1), Axis::X),
        "y-violation reported before x-violation",
    )
}

fn check_pair(piece: Piece, legal: (i32, i32), illegal: (i32, i32)) -> CheckResult {
    let extent = standard()?.extent();
    let moved = piece
        .move_to(legal.0, legal.1, extent)
        .map_err(|e| e.to_string())?;
    ensure(
        moved.position() == legal,
        format!("{} landed on {:?}", piece, moved.position()),
    )?;
    ensure(
        matches!(
            piece.move_to(illegal.0, illegal.1, extent),
            Err(ChessError::IllegalMove { .. })
        ),
        format!("{} accepted {:?}", piece, illegal),
    )
}

fn check_rook() -> CheckResult {
    check_pair(Piece::new(PieceKind::Rook, 0, 0), (0, 5), (1, 1))
}

fn check_knight() -> CheckResult {
    check_pair(Piece::new(PieceKind::Knight, 3, 3), (5, 4), (4, 4))
}

fn check_king() -> CheckResult {
    check_pair(Piece::new(PieceKind::King, 4, 4), (5, 5), (6, 6))
}

fn check_immutability() -> CheckResult {
    let rook = Piece::new(PieceKind::Rook, 0, 0);
    rook.move_to(0, 5, Extent::new(8, 8)).map_err(|e| e.to_string())?;
    ensure(rook.position() == (0, 0), "original piece moved")
}

fn check_draw() -> CheckResult {
    let extent = standard()?.extent();
    let mut surface = TextSurface::new(extent);
    for kind in PieceKind::ALL {
        Piece::new(kind, 0, 0)
            .draw(&mut surface)
            .map_err(|e| format!("{}: {}", kind, e))?;
    }
    Ok(())
}
