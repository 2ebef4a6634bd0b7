use crate::features::expenses::models::Expense;

/// カテゴリ別の金額合計を算出する
///
/// # 引数
/// * `expenses` - 取得済みの経費リスト（日付降順）
///
/// # 戻り値
/// (カテゴリ, 合計金額)のリスト
///
/// # 集計規則
/// - カテゴリ名は大文字小文字を区別する
/// - 出力順は入力リストでの初出順（チャート側が並べ替えない前提の、
///   取得順に由来する順序）
/// - 加算は入力リストの並び順のまま行う（丸め誤差が決定的になる）
/// - 空のリストからは空のリストを返す
pub fn totals_by_category(expenses: &[Expense]) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();

    for expense in expenses {
        match totals
            .iter_mut()
            .find(|(category, _)| category == &expense.category)
        {
            Some((_, total)) => *total += expense.amount,
            None => totals.push((expense.category.clone(), expense.amount)),
        }
    }

    totals
}

/// 月別の金額合計を算出する
///
/// # 引数
/// * `expenses` - 取得済みの経費リスト（日付降順）
///
/// # 戻り値
/// (年月, 合計金額)のリスト。年月は日付のYYYY-MM部分
///
/// 出力順・加算順の規則は`totals_by_category`と同じ。
pub fn totals_by_month(expenses: &[Expense]) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();

    for expense in expenses {
        let month = month_key(&expense.date);

        match totals.iter_mut().find(|(key, _)| key == &month) {
            Some((_, total)) => *total += expense.amount,
            None => totals.push((month.to_string(), expense.amount)),
        }
    }

    totals
}

/// 日付文字列から年月キー（YYYY-MM）を取り出す
fn month_key(date: &str) -> &str {
    date.get(..7).unwrap_or(date)
}
