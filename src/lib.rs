// 機能モジュール構造
pub mod features;
pub mod shared;

use log::info;
use shared::config::environment::{resolve_log_level, Environment};
use std::str::FromStr;

// GUI側から使用する主要な型と関数の再エクスポート
pub use features::expenses::{
    add_expense, export_expenses, export_to_directory, list_expenses, remove_expense,
    totals_by_category, totals_by_month, validate_form, write_csv, Expense, ExpenseForm,
    ExpenseRepository, NewExpense,
};
pub use shared::config::{
    initialize_application, InitializationResult, EXPORT_DIR_NAME,
};
pub use shared::errors::{AppError, AppResult, ErrorSeverity, ExportError, ValidationError};

/// ログ出力を設定する
///
/// GUIシェルが起動直後に一度だけ呼び出す想定。ログレベルは環境変数
/// LOG_LEVEL の値を優先し、未設定なら実行環境ごとの既定値
/// （開発はdebug、プロダクションはinfo）に従う。解釈できない値は
/// infoに倒す。二重に呼ばれた場合、2回目以降は何もしない。
pub fn initialize_logging_system() {
    let environment = Environment::detect();
    let level_name = resolve_log_level(environment);
    let level = log::LevelFilter::from_str(&level_name).unwrap_or(log::LevelFilter::Info);

    let already_initialized = env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .try_init()
        .is_err();

    if already_initialized {
        return;
    }

    info!("ロガーを設定しました: 環境={environment:?}, レベル={level}");
}
