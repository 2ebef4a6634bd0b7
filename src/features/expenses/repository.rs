use crate::features::expenses::models::{Expense, NewExpense};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::get_current_jst_timestamp;
use log::info;
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};

/// 経費リポジトリ
///
/// データベースファイルのパスのみを保持し、操作ごとに接続を開いて
/// 操作完了時に必ず解放する（接続の使い回しはしない）。インスタンスは
/// 呼び出し側が明示的に構築して受け渡す。
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    database_path: PathBuf,
}

impl ExpenseRepository {
    /// リポジトリを構築する
    ///
    /// # 引数
    /// * `database_path` - データベースファイルのパス
    ///
    /// # 戻り値
    /// リポジトリ（この時点ではファイルを開かない）
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
        }
    }

    /// データベースファイルのパスを取得する
    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    /// この操作専用のデータベース接続を開く
    fn open_connection(&self) -> rusqlite::Result<Connection> {
        Connection::open(&self.database_path)
    }

    /// ストレージスキーマを初期化する
    ///
    /// # 戻り値
    /// 成功時はOk(())、失敗時はエラー
    ///
    /// # 処理内容
    /// 経費テーブルと(date, category)の複合インデックスを作成する。
    /// 冪等であり、起動のたびに呼び出してよい。
    pub fn initialize(&self) -> AppResult<()> {
        let conn = self
            .open_connection()
            .map_err(|e| AppError::storage_init(e.to_string()))?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS expenses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                category TEXT NOT NULL,
                description TEXT,
                amount REAL NOT NULL,
                created_at TEXT NOT NULL
            )",
            [],
        )
        .map_err(|e| AppError::storage_init(e.to_string()))?;

        // 日付順の一覧取得とカテゴリ集計を効率化する複合インデックス
        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_date_category ON expenses(date, category)",
            [],
        )
        .map_err(|e| AppError::storage_init(e.to_string()))?;

        info!("データベースを初期化しました: {:?}", self.database_path);

        Ok(())
    }

    /// 経費を登録する
    ///
    /// # 引数
    /// * `expense` - バリデーション済みの登録内容
    ///
    /// # 戻り値
    /// 採番された経費ID、または失敗時はエラー
    ///
    /// `created_at`はJSTの現在時刻で自動設定する。単一のINSERT文で
    /// あるため、失敗時にストレージが部分的に変化することはない。
    pub fn insert(&self, expense: &NewExpense) -> AppResult<i64> {
        let conn = self
            .open_connection()
            .map_err(|e| AppError::storage_write(e.to_string()))?;

        let created_at = get_current_jst_timestamp();

        conn.execute(
            "INSERT INTO expenses (date, category, description, amount, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                expense.date,
                expense.category,
                expense.description,
                expense.amount,
                created_at
            ],
        )
        .map_err(|e| AppError::storage_write(e.to_string()))?;

        let id = conn.last_insert_rowid();
        info!("経費を登録しました: id={id}");

        Ok(id)
    }

    /// 経費の全件を取得する
    ///
    /// # 戻り値
    /// 日付の降順（同日の場合はIDの降順）で並んだ経費のリスト、
    /// または失敗時はエラー
    ///
    /// テーブルが空の場合は空のリストを返す（エラーにはしない）。
    pub fn fetch_all(&self) -> AppResult<Vec<Expense>> {
        let conn = self
            .open_connection()
            .map_err(|e| AppError::storage_read(e.to_string()))?;

        let mut stmt = conn
            .prepare(
                "SELECT id, date, category, description, amount, created_at
                 FROM expenses ORDER BY date DESC, id DESC",
            )
            .map_err(|e| AppError::storage_read(e.to_string()))?;

        let expenses = stmt
            .query_map([], |row| {
                Ok(Expense {
                    id: row.get(0)?,
                    date: row.get(1)?,
                    category: row.get(2)?,
                    description: row.get(3)?,
                    amount: row.get(4)?,
                    created_at: row.get(5)?,
                })
            })
            .map_err(|e| AppError::storage_read(e.to_string()))?;

        expenses
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AppError::storage_read(e.to_string()))
    }

    /// 経費を削除する
    ///
    /// # 引数
    /// * `id` - 経費ID
    ///
    /// # 戻り値
    /// 削除した場合はtrue、該当IDが存在しなかった場合はfalse、
    /// I/O失敗時はエラー
    ///
    /// 該当IDの不存在は正常な結果として扱う（エラーにはしない）。
    pub fn delete(&self, id: i64) -> AppResult<bool> {
        let conn = self
            .open_connection()
            .map_err(|e| AppError::storage_write(e.to_string()))?;

        let affected_rows = conn
            .execute("DELETE FROM expenses WHERE id = ?1", params![id])
            .map_err(|e| AppError::storage_write(e.to_string()))?;

        if affected_rows > 0 {
            info!("経費を削除しました: id={id}");
        }

        Ok(affected_rows > 0)
    }
}
