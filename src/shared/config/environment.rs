/// 実行環境の種別
///
/// 開発中のデータと配布版の家計データを同じファイルに混ぜないため、
/// 環境ごとにデータベースファイル名とログの既定値を切り替える。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// 開発ビルド用の環境
    Development,
    /// リリース配布用の環境
    Production,
}

impl Environment {
    /// 実行環境を決定する
    ///
    /// # 戻り値
    /// 決定した実行環境
    ///
    /// # 決定順序
    /// 1. 実行時の環境変数 ENVIRONMENT
    /// 2. ビルド時に埋め込まれた EXPENSE_MEMO_ENV
    /// 3. どちらも無ければビルドプロファイル（デバッグビルドは開発環境）
    pub fn detect() -> Self {
        if let Ok(name) = std::env::var("ENVIRONMENT") {
            return Self::from_name(&name);
        }

        if let Some(name) = option_env!("EXPENSE_MEMO_ENV") {
            return Self::from_name(name);
        }

        if cfg!(debug_assertions) {
            Environment::Development
        } else {
            Environment::Production
        }
    }

    /// 環境名を種別として解釈する
    ///
    /// "production"（大文字小文字を問わない）だけをプロダクションとし、
    /// それ以外の値はすべて開発環境として扱う。
    fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    /// プロダクション環境かどうかを判定する
    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }

    /// この環境で使用するデータベースファイル名を取得する
    ///
    /// # 戻り値
    /// データベースファイル名（開発環境は dev_ プレフィックス付き）
    pub fn database_filename(self) -> &'static str {
        if self.is_production() {
            "expenses.db"
        } else {
            "dev_expenses.db"
        }
    }

    /// この環境の既定ログレベル名を取得する
    ///
    /// # 戻り値
    /// ログレベル名（プロダクションはinfo、開発はdebug）
    pub fn default_log_level(self) -> &'static str {
        if self.is_production() {
            "info"
        } else {
            "debug"
        }
    }
}

/// 使用するログレベル名を解決する
///
/// # 引数
/// * `environment` - 実行環境
///
/// # 戻り値
/// 環境変数 LOG_LEVEL の値、未設定の場合は環境ごとの既定値
pub fn resolve_log_level(environment: Environment) -> String {
    std::env::var("LOG_LEVEL").unwrap_or_else(|_| environment.default_log_level().to_string())
}

/// CSVエクスポート先ディレクトリの既定名（環境共通）
pub const EXPORT_DIR_NAME: &str = "exports";
