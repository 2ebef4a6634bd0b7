use crate::features::expenses::models::{ExpenseForm, NewExpense};
use crate::shared::errors::ValidationError;
use crate::shared::utils::normalize_string;
use chrono::NaiveDate;

/// フォーム送信内容を検証し、経費登録内容に変換する
///
/// # 引数
/// * `form` - フォーム送信内容（未検証のテキスト）
///
/// # 戻り値
/// バリデーション済みの登録内容、または最初に失敗した規則のエラー
///
/// # 検証規則（この順序で適用し、最初の失敗で打ち切る）
/// 1. 日付・カテゴリ・金額が空白除去後にすべて非空であること
/// 2. 日付がYYYY-MM-DD形式の実在する日付であること
/// 3. 金額が数値として解釈できること
/// 4. 金額がゼロより大きいこと
///
/// 説明は検証しない（空でもよい）。純粋関数であり、ストレージには
/// 一切触れない。
pub fn validate_form(form: &ExpenseForm) -> Result<NewExpense, ValidationError> {
    let date = form.date.trim();
    let category = form.category.trim();
    let amount_text = form.amount.trim();

    // 必須項目チェック
    if date.is_empty() || category.is_empty() || amount_text.is_empty() {
        return Err(ValidationError::MissingField);
    }

    // 日付形式チェック
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| ValidationError::BadDateFormat)?;

    // 金額の数値チェック
    let amount: f64 = amount_text
        .parse()
        .map_err(|_| ValidationError::NotANumber)?;

    // 金額の符号チェック（NaNもここで拒否する）
    if amount.is_nan() || amount <= 0.0 {
        return Err(ValidationError::NonPositiveAmount);
    }

    // 説明は空文字列の場合は未設定として扱う
    let description = normalize_string(&form.description);
    let description = if description.is_empty() {
        None
    } else {
        Some(description)
    };

    Ok(NewExpense {
        date: date.to_string(),
        category: category.to_string(),
        description,
        amount,
    })
}
