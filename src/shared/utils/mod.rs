use chrono::Utc;
use chrono_tz::Asia::Tokyo;

/// 現在の日時をJST（日本標準時）で取得
///
/// # 戻り値
/// JST形式のRFC3339文字列
pub fn get_current_jst_timestamp() -> String {
    let now_jst = Utc::now().with_timezone(&Tokyo);
    now_jst.to_rfc3339()
}

/// 今日の日付をYYYY-MM-DD形式で取得（JST基準）
///
/// # 戻り値
/// 今日の日付文字列
pub fn get_today_date_jst() -> String {
    let now_jst = Utc::now().with_timezone(&Tokyo);
    now_jst.format("%Y-%m-%d").to_string()
}

/// エクスポートファイル名用のタイムスタンプを取得（JST基準）
///
/// # 戻り値
/// YYYYMMDD_HHMMSS形式のタイムスタンプ文字列
pub fn get_export_timestamp_jst() -> String {
    let now_jst = Utc::now().with_timezone(&Tokyo);
    now_jst.format("%Y%m%d_%H%M%S").to_string()
}

/// 文字列の正規化（前後の空白を削除）
///
/// # 引数
/// * `text` - 正規化対象の文字列
///
/// # 戻り値
/// 正規化された文字列
pub fn normalize_string(text: &str) -> String {
    text.trim().to_string()
}

/// 金額を文字列形式でフォーマット
///
/// # 引数
/// * `amount` - 金額
///
/// # 戻り値
/// フォーマットされた金額文字列
pub fn format_amount(amount: f64) -> String {
    // 小数点以下が0の場合は整数として表示
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        format!("{amount:.2}")
    }
}
