use serde::{Deserialize, Serialize};

/// 経費データモデル
///
/// `id`と`created_at`は登録時にリポジトリが採番・設定する。
/// 登録後の更新は行わない（削除のみ）。
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Expense {
    pub id: i64,
    pub date: String,
    pub category: String,
    pub description: Option<String>,
    pub amount: f64,
    pub created_at: String,
}

/// 入力フォームの送信内容
///
/// GUI側のテキスト入力をそのまま保持する（全フィールド未検証の文字列）。
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ExpenseForm {
    pub date: String,
    pub category: String,
    pub description: String,
    pub amount: String,
}

/// バリデーション済みの経費登録内容
///
/// `validation::validate_form`だけがこの型を生成する。
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub date: String,
    pub category: String,
    pub description: Option<String>,
    pub amount: f64,
}
