use crate::features::expenses::repository::ExpenseRepository;
use crate::shared::config::environment::Environment;
use crate::shared::errors::{AppError, AppResult};
use std::fs;
use std::path::PathBuf;

/// データディレクトリを指定する環境変数名
const DATA_DIR_ENV_VAR: &str = "EXPENSE_MEMO_DATA_DIR";

/// OS標準のデータディレクトリ配下で使用するアプリケーション名
const APP_DIR_NAME: &str = "expense-memo";

/// アプリケーション初期化の結果を表す構造体
#[derive(Debug)]
pub struct InitializationResult {
    /// 初回起動かどうか
    pub is_first_run: bool,
    /// アプリケーションデータディレクトリのパス
    pub app_data_dir: PathBuf,
    /// データベースファイルのパス
    pub database_path: PathBuf,
    /// 実行環境
    pub environment: Environment,
}

/// アプリケーションの初期化を実行する
///
/// # 引数
/// * `data_dir` - データディレクトリの明示指定（テストや埋め込み用途。
///   Noneの場合は環境変数またはOS標準のデータディレクトリを使用）
///
/// # 戻り値
/// 初期化結果、または失敗時はエラー
///
/// # 処理内容
/// 1. .envファイルの読み込み（存在する場合のみ）
/// 2. アプリケーションデータディレクトリの解決・作成
/// 3. 初回起動の判定
/// 4. データベーススキーマの初期化
///
/// 初期化の失敗はプロセス続行不可能として扱う。
pub fn initialize_application(data_dir: Option<PathBuf>) -> AppResult<InitializationResult> {
    // 環境変数を読み込み（.envファイルがある場合）
    if dotenv::dotenv().is_err() {
        log::debug!(".envファイルが見つかりません。既存の環境変数をそのまま使用します");
    }

    // 現在の実行環境を取得
    let environment = Environment::detect();

    // アプリケーションデータディレクトリを取得・作成
    let app_data_dir = ensure_app_data_directory(data_dir)?;

    // データベースファイルパスを構築
    let database_path = app_data_dir.join(environment.database_filename());

    // 初回起動かどうかを判定（データベースファイルの存在で判定）
    let is_first_run = !database_path.exists();

    if is_first_run {
        log::info!(
            "初回起動を検出しました: 環境={environment:?}, データベース={database_path:?}"
        );
    }

    // データベーススキーマを初期化
    let repository = ExpenseRepository::new(&database_path);
    repository.initialize()?;

    Ok(InitializationResult {
        is_first_run,
        app_data_dir,
        database_path,
        environment,
    })
}

/// アプリケーションデータディレクトリを確実に作成する
///
/// # 引数
/// * `data_dir` - 明示指定されたデータディレクトリ（オプション）
///
/// # 戻り値
/// アプリケーションデータディレクトリのパス、または失敗時はエラー
///
/// # 解決順序
/// 1. 引数で明示指定されたディレクトリ
/// 2. 環境変数 EXPENSE_MEMO_DATA_DIR
/// 3. OS標準のデータディレクトリ + アプリケーション名
fn ensure_app_data_directory(data_dir: Option<PathBuf>) -> AppResult<PathBuf> {
    let app_data_dir = match data_dir {
        Some(dir) => dir,
        None => match std::env::var(DATA_DIR_ENV_VAR) {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => dirs::data_dir()
                .ok_or_else(|| {
                    AppError::storage_init("OS標準のデータディレクトリを取得できませんでした")
                })?
                .join(APP_DIR_NAME),
        },
    };

    // ディレクトリが存在しない場合は作成
    if !app_data_dir.exists() {
        fs::create_dir_all(&app_data_dir).map_err(|e| {
            AppError::storage_init(format!(
                "アプリデータディレクトリの作成に失敗しました: {e}"
            ))
        })?;

        log::info!("アプリケーションデータディレクトリを作成しました: {app_data_dir:?}");
    }

    Ok(app_data_dir)
}

/// 初期化完了ログを出力する
///
/// # 引数
/// * `result` - 初期化結果
pub fn log_initialization_complete(result: &InitializationResult) {
    if result.is_first_run {
        log::info!("初回起動の初期化が正常に完了しました");
    } else {
        log::info!("アプリケーション起動完了（既存データベースを使用）");
    }
    log::info!(
        "環境: {:?}, データベース: {:?}",
        result.environment,
        result.database_path
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_application_creates_database() {
        // 一時ディレクトリを作成
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("app_data");

        // 初期化を実行
        let result = initialize_application(Some(data_dir.clone())).unwrap();

        // 初回起動であることを確認
        assert!(result.is_first_run);
        assert_eq!(result.app_data_dir, data_dir);

        // データベースファイルが作成されることを確認
        assert!(result.database_path.exists());
        assert!(result
            .database_path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .ends_with("expenses.db"));
    }

    #[test]
    fn test_initialize_application_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().to_path_buf();

        // 2回初期化しても失敗しない
        let first = initialize_application(Some(data_dir.clone())).unwrap();
        assert!(first.is_first_run);

        let second = initialize_application(Some(data_dir)).unwrap();
        assert!(!second.is_first_run);
        assert_eq!(first.database_path, second.database_path);
    }

    #[test]
    fn test_log_initialization_complete() {
        let result = InitializationResult {
            is_first_run: true,
            app_data_dir: PathBuf::from("/tmp/test_app"),
            database_path: PathBuf::from("/tmp/test_app/dev_expenses.db"),
            environment: Environment::Development,
        };

        // ログ出力関数が正常に実行されることを確認（パニックしない）
        log_initialization_complete(&result);
    }
}
