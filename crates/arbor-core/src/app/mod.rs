//! App - アプリケーション層
//!
//! # 主要コンポーネント
//! - **InductionBuilder**: ストアと設定のワイヤリング、起動時検証
//! - **Induction**: 1 回分のラン（inspect / run）
//! - **RunReport**: ランの結果

pub mod builder;
pub mod report;

pub use self::builder::{BuildError, InductionBuilder};
pub use self::report::{Induction, RunReport};
