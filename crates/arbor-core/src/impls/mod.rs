//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **InMemoryDatasetStore**: 全件をメモリに保持する DatasetStore
//! - **CsvSource**: ヘッダ付き区切りテキストの ExampleSource

pub mod csv_source;
pub mod inmem_store;

pub use self::csv_source::CsvSource;
pub use self::inmem_store::InMemoryDatasetStore;
