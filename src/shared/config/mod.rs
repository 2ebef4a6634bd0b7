/// 環境設定関連のモジュール
pub mod environment;
/// アプリケーション初期化のモジュール
pub mod initialization;

// 便利な再エクスポート
pub use environment::{resolve_log_level, Environment, EXPORT_DIR_NAME};
pub use initialization::{initialize_application, InitializationResult};
