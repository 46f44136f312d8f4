mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chess_core::{selfcheck, Board, SelfCheckReport, TextSurface};
use clap::{arg, command};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::CliConfig;

fn main() -> Result<()> {
    let matches = command!()
        .arg(arg!(--test "Run the built-in validation suite"))
        .arg(arg!(-v --variant <NAME> "Board variant to display"))
        .arg(
            arg!(-c --config <PATH> "Path to a JSON config file")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .get_matches();

    let mut config = CliConfig::load_or_default(
        matches.get_one::<PathBuf>("config").map(PathBuf::as_path),
    )?;
    if let Some(variant) = matches.get_one::<String>("variant") {
        config.variant = variant.clone();
    }

    // 初始化日志，RUST_LOG 优先于配置文件
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_filter)?,
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();

    if matches.get_flag("test") {
        return run_validation_suite();
    }

    println!("Welcome to chess!");
    show_board(&config.variant)
}

/// 运行内置自检，有失败项时返回错误
fn run_validation_suite() -> Result<()> {
    info!("运行自检...");
    let report = selfcheck::run_all();
    summarize(&report)
}

/// 输出自检结果，有失败项时返回错误（进程以非零状态退出）
fn summarize(report: &SelfCheckReport) -> Result<()> {
    for outcome in &report.outcomes {
        match &outcome.failure {
            None => println!("ok      {}", outcome.name),
            Some(reason) => println!("FAILED  {} ({})", outcome.name, reason),
        }
    }
    println!("\n{} passed, {} failed", report.passed(), report.failed());

    if !report.is_success() {
        warn!("自检失败: {} 项", report.failed());
        anyhow::bail!("validation suite failed: {} check(s)", report.failed());
    }
    Ok(())
}

/// 打印指定变体的棋盘
fn show_board(variant: &str) -> Result<()> {
    let board = Board::new(variant).context("无法创建棋盘")?;
    info!("棋盘: {} ({}x{})", board.variant(), board.width(), board.height());

    let mut surface = TextSurface::new(board.extent());
    board.render(&mut surface)?;
    print!("{}", surface);
    Ok(())
}
