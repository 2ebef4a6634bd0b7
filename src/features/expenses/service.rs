use crate::features::expenses::export::export_to_directory;
use crate::features::expenses::models::{Expense, ExpenseForm};
use crate::features::expenses::repository::ExpenseRepository;
use crate::features::expenses::validation::validate_form;
use crate::shared::errors::AppResult;
use log::info;
use std::path::{Path, PathBuf};

/// 経費を追加する
///
/// # 引数
/// * `repository` - 経費リポジトリ
/// * `form` - フォーム送信内容
///
/// # 戻り値
/// 採番された経費ID、または失敗時はエラー
///
/// バリデーションに失敗した入力はストレージに到達しない。
pub fn add_expense(repository: &ExpenseRepository, form: &ExpenseForm) -> AppResult<i64> {
    let new_expense = validate_form(form)?;

    let id = repository.insert(&new_expense)?;
    info!("経費追加成功: id={id}, category={}", new_expense.category);

    Ok(id)
}

/// 経費一覧を取得する
///
/// # 引数
/// * `repository` - 経費リポジトリ
///
/// # 戻り値
/// 日付降順の経費リスト、または失敗時はエラー
pub fn list_expenses(repository: &ExpenseRepository) -> AppResult<Vec<Expense>> {
    repository.fetch_all()
}

/// 経費を削除する
///
/// # 引数
/// * `repository` - 経費リポジトリ
/// * `id` - 経費ID
///
/// # 戻り値
/// 削除した場合はtrue、該当IDが存在しなかった場合はfalse、
/// 失敗時はエラー
pub fn remove_expense(repository: &ExpenseRepository, id: i64) -> AppResult<bool> {
    repository.delete(id)
}

/// 経費の全件をCSVファイルにエクスポートする
///
/// # 引数
/// * `repository` - 経費リポジトリ
/// * `export_dir` - エクスポート先ディレクトリ
///
/// # 戻り値
/// 作成したファイルのパス、または失敗時はエラー
///
/// 経費が1件もない場合は「データなし」のエクスポートエラーになる。
pub fn export_expenses(repository: &ExpenseRepository, export_dir: &Path) -> AppResult<PathBuf> {
    let expenses = repository.fetch_all()?;
    let path = export_to_directory(&expenses, export_dir)?;

    Ok(path)
}
