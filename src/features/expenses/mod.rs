/// 経費機能モジュール
///
/// このモジュールは経費管理に関連するすべての機能を提供します：
/// - 経費の登録・一覧取得・削除
/// - フォーム入力のバリデーション
/// - カテゴリ別・月別の金額集計
/// - CSVエクスポート
// サブモジュールの宣言
pub mod aggregation;
pub mod export;
pub mod models;
pub mod repository;
pub mod service;
pub mod validation;

// 公開インターフェース：外部から使用可能な型と関数をエクスポート

// モデル
pub use models::{Expense, ExpenseForm, NewExpense};

// リポジトリ
pub use repository::ExpenseRepository;

// バリデーション
pub use validation::validate_form;

// 集計
pub use aggregation::{totals_by_category, totals_by_month};

// エクスポート
pub use export::{export_to_directory, write_csv};

// サービス（GUI側から呼び出すユーザー操作の入口）
pub use service::{add_expense, export_expenses, list_expenses, remove_expense};
