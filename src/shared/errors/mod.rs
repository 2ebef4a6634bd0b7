use thiserror::Error;

/// 入力バリデーションの失敗理由
///
/// フォーム入力の検査は固定された順序で行われ、最初に失敗した規則の
/// バリアントが返される。`description` は検査対象外。
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// 必須項目（日付・カテゴリ・金額）のいずれかが未入力
    #[error("必須項目（日付・カテゴリ・金額）をすべて入力してください")]
    MissingField,

    /// 日付がYYYY-MM-DD形式の実在する日付ではない
    #[error("日付はYYYY-MM-DD形式で入力してください")]
    BadDateFormat,

    /// 金額が数値として解釈できない
    #[error("金額は数値で入力してください")]
    NotANumber,

    /// 金額がゼロ以下
    #[error("金額は正の数値で入力してください")]
    NonPositiveAmount,
}

/// CSVエクスポートの失敗理由
///
/// 「データなし」と書き込み失敗は別の理由として区別される。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// エクスポート対象の経費が1件もない
    #[error("エクスポートする経費データがありません")]
    NoData,

    /// エクスポート先への書き込みに失敗した
    #[error("エクスポート先への書き込みに失敗しました: {0}")]
    Io(String),
}

/// アプリケーション全体で使用される統一エラー型
#[derive(Debug, Error)]
pub enum AppError {
    /// 入力バリデーションエラー
    #[error("バリデーションエラー: {0}")]
    Validation(#[from] ValidationError),

    /// データベース初期化の失敗（プロセス続行不可能）
    #[error("データベース初期化エラー: {0}")]
    StorageInit(String),

    /// データベース読み取りの失敗
    #[error("データベース読み取りエラー: {0}")]
    StorageRead(String),

    /// データベース書き込みの失敗
    #[error("データベース書き込みエラー: {0}")]
    StorageWrite(String),

    /// CSVエクスポートの失敗
    #[error("エクスポートエラー: {0}")]
    Export(#[from] ExportError),
}

/// エラーの重要度を表す列挙型
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ErrorSeverity {
    /// 低重要度（ユーザー入力エラーなど）
    Low,
    /// 中重要度（エクスポート失敗など）
    Medium,
    /// 高重要度（データベース操作エラーなど）
    High,
    /// 最重要（起動不能なエラー）
    Critical,
}

impl AppError {
    /// ユーザーに表示するためのメッセージを取得
    ///
    /// # 戻り値
    /// ユーザーに表示可能なエラーメッセージ
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(e) => e.to_string(),
            AppError::StorageInit(_) => "データベースの初期化に失敗しました".to_string(),
            AppError::StorageRead(_) => "経費データの読み取りに失敗しました".to_string(),
            AppError::StorageWrite(_) => "経費データの保存に失敗しました".to_string(),
            AppError::Export(e) => e.to_string(),
        }
    }

    /// エラーの詳細情報を取得
    ///
    /// # 戻り値
    /// エラーの詳細情報（ログ出力用）
    pub fn details(&self) -> String {
        format!("{self}")
    }

    /// エラーの重要度を取得
    ///
    /// # 戻り値
    /// エラーの重要度レベル
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Validation(_) => ErrorSeverity::Low,
            AppError::StorageInit(_) => ErrorSeverity::Critical,
            AppError::StorageRead(_) => ErrorSeverity::High,
            AppError::StorageWrite(_) => ErrorSeverity::High,
            AppError::Export(_) => ErrorSeverity::Medium,
        }
    }

    /// データベース初期化エラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `message` - エラーメッセージ
    ///
    /// # 戻り値
    /// データベース初期化エラー
    pub fn storage_init<S: Into<String>>(message: S) -> Self {
        AppError::StorageInit(message.into())
    }

    /// データベース読み取りエラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `message` - エラーメッセージ
    ///
    /// # 戻り値
    /// データベース読み取りエラー
    pub fn storage_read<S: Into<String>>(message: S) -> Self {
        AppError::StorageRead(message.into())
    }

    /// データベース書き込みエラーを作成するヘルパー関数
    ///
    /// # 引数
    /// * `message` - エラーメッセージ
    ///
    /// # 戻り値
    /// データベース書き込みエラー
    pub fn storage_write<S: Into<String>>(message: S) -> Self {
        AppError::StorageWrite(message.into())
    }
}

/// AppErrorからStringへの変換（GUI側へのエラー受け渡しのため）
impl From<AppError> for String {
    fn from(error: AppError) -> Self {
        error.user_message()
    }
}

/// Result型のエイリアス（アプリケーション全体で使用）
pub type AppResult<T> = Result<T, AppError>;
