use crate::features::expenses::models::Expense;
use crate::shared::errors::ExportError;
use crate::shared::utils::{format_amount, get_export_timestamp_jst, get_today_date_jst};
use log::info;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// CSVのヘッダー行
const CSV_HEADER: [&str; 6] = [
    "ID",
    "Date",
    "Category",
    "Description",
    "Amount",
    "Export Date",
];

/// 経費リストをCSVとして書き出す
///
/// # 引数
/// * `expenses` - 取得済みの経費リスト（この並び順のまま出力する）
/// * `writer` - 出力先
///
/// # 戻り値
/// 書き出したデータ行数、または失敗時はエラー
///
/// # 出力形式
/// ヘッダー行（ID, Date, Category, Description, Amount, Export Date）に
/// 続けて1経費1行。Export Dateは実行時に一度だけ取得した今日の日付
/// （JST）で、全行に同じ値が入る。カンマや引用符を含む説明文は
/// CSVの引用規則に従ってエスケープされる。
///
/// # エラー
/// - 経費が1件もない場合は`ExportError::NoData`
/// - 出力先への書き込みに失敗した場合は`ExportError::Io`
pub fn write_csv<W: Write>(expenses: &[Expense], writer: W) -> Result<usize, ExportError> {
    if expenses.is_empty() {
        return Err(ExportError::NoData);
    }

    // エクスポート日時は実行ごとに1回だけ取得し、全行で共有する
    let export_date = get_today_date_jst();

    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(CSV_HEADER)
        .map_err(|e| ExportError::Io(e.to_string()))?;

    for expense in expenses {
        csv_writer
            .write_record([
                expense.id.to_string(),
                expense.date.clone(),
                expense.category.clone(),
                expense.description.clone().unwrap_or_default(),
                format_amount(expense.amount),
                export_date.clone(),
            ])
            .map_err(|e| ExportError::Io(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExportError::Io(e.to_string()))?;

    Ok(expenses.len())
}

/// 経費リストをディレクトリ内の新規CSVファイルにエクスポートする
///
/// # 引数
/// * `expenses` - 取得済みの経費リスト
/// * `export_dir` - エクスポート先ディレクトリ（存在しなければ作成する）
///
/// # 戻り値
/// 作成したファイルのパス、または失敗時はエラー
///
/// ファイル名は`expenses_export_YYYYMMDD_HHMMSS.csv`（JSTの実行時刻）と
/// し、過去のエクスポートを上書きしない。
pub fn export_to_directory(expenses: &[Expense], export_dir: &Path) -> Result<PathBuf, ExportError> {
    // ディレクトリ作成より先にデータの有無を確認する
    if expenses.is_empty() {
        return Err(ExportError::NoData);
    }

    fs::create_dir_all(export_dir).map_err(|e| ExportError::Io(e.to_string()))?;

    let filename = format!("expenses_export_{}.csv", get_export_timestamp_jst());
    let file_path = export_dir.join(filename);

    let file = fs::File::create(&file_path).map_err(|e| ExportError::Io(e.to_string()))?;
    let count = write_csv(expenses, file)?;

    info!("経費 {count} 件をエクスポートしました: {file_path:?}");

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::utils::get_today_date_jst;
    use tempfile::TempDir;

    fn expense(id: i64, date: &str, category: &str, description: Option<&str>, amount: f64) -> Expense {
        Expense {
            id,
            date: date.to_string(),
            category: category.to_string(),
            description: description.map(str::to_string),
            amount,
            created_at: "2024-01-01T00:00:00+09:00".to_string(),
        }
    }

    #[test]
    fn test_write_csv_empty_is_no_data_error() {
        let mut output = Vec::new();
        let result = write_csv(&[], &mut output);
        assert_eq!(result, Err(ExportError::NoData));
        assert!(output.is_empty());
    }

    #[test]
    fn test_write_csv_header_and_rows() {
        let expenses = vec![
            expense(2, "2024-01-02", "交通費", None, 1500.0),
            expense(1, "2024-01-01", "食費", Some("昼食"), 980.5),
        ];

        let mut output = Vec::new();
        let count = write_csv(&expenses, &mut output).unwrap();
        assert_eq!(count, 2);

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "ID,Date,Category,Description,Amount,Export Date");

        // 入力の並び順のまま出力される
        let today = get_today_date_jst();
        assert_eq!(lines[1], format!("2,2024-01-02,交通費,,1500,{today}"));
        assert_eq!(lines[2], format!("1,2024-01-01,食費,昼食,980.50,{today}"));
    }

    #[test]
    fn test_write_csv_export_date_is_uniform() {
        let expenses: Vec<Expense> = (1..=5)
            .map(|i| expense(i, "2024-01-01", "食費", None, 100.0))
            .collect();

        let mut output = Vec::new();
        write_csv(&expenses, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let export_dates: Vec<&str> = text
            .lines()
            .skip(1)
            .map(|line| line.rsplit(',').next().unwrap())
            .collect();

        assert_eq!(export_dates.len(), 5);
        assert!(export_dates.iter().all(|d| *d == export_dates[0]));
    }

    #[test]
    fn test_write_csv_escapes_commas_in_description() {
        let expenses = vec![expense(
            1,
            "2024-01-01",
            "接待交際費",
            Some("会食, 取引先2名"),
            12000.0,
        )];

        let mut output = Vec::new();
        write_csv(&expenses, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("\"会食, 取引先2名\""));
    }

    #[test]
    fn test_export_to_directory() {
        let temp_dir = TempDir::new().unwrap();
        let export_dir = temp_dir.path().join("exports");

        let expenses = vec![expense(1, "2024-01-01", "食費", None, 100.0)];

        let path = export_to_directory(&expenses, &export_dir).unwrap();

        // ディレクトリとファイルが作成される
        assert!(export_dir.is_dir());
        assert!(path.exists());

        let filename = path.file_name().unwrap().to_string_lossy();
        assert!(filename.starts_with("expenses_export_"));
        assert!(filename.ends_with(".csv"));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("ID,Date,Category,Description,Amount,Export Date"));
        assert!(content.contains("食費"));
    }

    #[test]
    fn test_export_to_directory_empty_does_not_create_directory() {
        let temp_dir = TempDir::new().unwrap();
        let export_dir = temp_dir.path().join("exports");

        let result = export_to_directory(&[], &export_dir);
        assert_eq!(result, Err(ExportError::NoData));

        // 「データなし」の場合はディレクトリも作らない
        assert!(!export_dir.exists());
    }

    #[test]
    fn test_export_to_unwritable_destination_is_io_error() {
        let temp_dir = TempDir::new().unwrap();

        // 既存ファイルと同名のパスをディレクトリとして使おうとすると失敗する
        let blocked_path = temp_dir.path().join("blocked");
        fs::write(&blocked_path, b"occupied").unwrap();

        let expenses = vec![expense(1, "2024-01-01", "食費", None, 100.0)];
        let result = export_to_directory(&expenses, &blocked_path);
        assert!(matches!(result, Err(ExportError::Io(_))));
    }
}
