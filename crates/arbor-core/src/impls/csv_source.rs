//! CsvSource - ExampleSource over delimited text
//!
//! One header row. The id column and the target column are located by name;
//! every other column becomes an attribute, in header order. Fields are
//! trimmed.

use crate::config::DatasetConfig;
use crate::domain::{Example, ExampleId, Label, Schema};
use crate::ports::{ExampleSource, LoadError, LoadedDataset};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, Clone)]
enum CsvInput {
    Path(PathBuf),
    Text(String),
}

#[derive(Debug, Clone)]
pub struct CsvSource {
    input: CsvInput,
    layout: DatasetConfig,
}

impl CsvSource {
    pub fn from_path(path: impl Into<PathBuf>, layout: DatasetConfig) -> Self {
        Self {
            input: CsvInput::Path(path.into()),
            layout,
        }
    }

    /// In-memory text, mostly for tests and fixtures.
    pub fn from_text(text: impl Into<String>, layout: DatasetConfig) -> Self {
        Self {
            input: CsvInput::Text(text.into()),
            layout,
        }
    }

    fn parse<R: Read>(&self, reader: R) -> Result<LoadedDataset, LoadError> {
        let delimiter = self
            .layout
            .delimiter_byte()
            .map_err(|_| LoadError::InvalidDelimiter(self.layout.delimiter))?;
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let column = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
        };
        let id_idx = column(&self.layout.id_column)?;
        let target_idx = column(&self.layout.target_column)?;

        let attributes: Vec<(usize, String)> = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != id_idx && *i != target_idx)
            .map(|(i, h)| (i, h.to_string()))
            .collect();

        let mut examples = Vec::new();
        for (n, record) in rdr.records().enumerate() {
            let record = record?;
            let raw_id = record.get(id_idx).unwrap_or_default();
            let id = raw_id
                .parse::<u32>()
                .map(ExampleId::new)
                .map_err(|_| LoadError::InvalidId {
                    record: n as u64 + 1,
                    value: raw_id.to_string(),
                })?;
            let label = Label::new(record.get(target_idx).unwrap_or_default());
            let values: BTreeMap<String, String> = attributes
                .iter()
                .filter_map(|(i, name)| record.get(*i).map(|v| (name.clone(), v.to_string())))
                .collect();
            examples.push(Example::new(id, values, label));
        }

        let schema = Schema::new(
            self.layout.id_column.clone(),
            self.layout.target_column.clone(),
            attributes.into_iter().map(|(_, name)| name).collect(),
        );
        tracing::debug!(
            examples = examples.len(),
            attributes = schema.attributes().len(),
            "parsed delimited input"
        );
        Ok(LoadedDataset { schema, examples })
    }
}

impl ExampleSource for CsvSource {
    fn load_examples(&self) -> Result<LoadedDataset, LoadError> {
        match &self.input {
            CsvInput::Path(path) => {
                let file = File::open(path).map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                })?;
                self.parse(file)
            }
            CsvInput::Text(text) => self.parse(text.as_bytes()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::InMemoryDatasetStore;
    use crate::ports::DatasetStore;

    const SMALL: &str = "\
num, color, size, wait
1, red, S, T
2, red, L, F
3, blue, S, T
";

    #[test]
    fn columns_other_than_id_and_target_are_attributes() {
        let source = CsvSource::from_text(SMALL, DatasetConfig::default());
        let dataset = source.load_examples().unwrap();
        assert_eq!(dataset.schema.attributes(), &["color", "size"]);
        assert_eq!(dataset.examples.len(), 3);

        let second = &dataset.examples[1];
        assert_eq!(second.id(), ExampleId::new(2));
        assert_eq!(second.value("color"), Some("red"));
        assert_eq!(second.value("size"), Some("L"));
        assert_eq!(second.label().as_str(), "F");
    }

    #[test]
    fn custom_layout_and_delimiter() {
        let text = "label;id;shape\nyes;10;round\nno;11;square\n";
        let layout = DatasetConfig {
            id_column: "id".to_string(),
            target_column: "label".to_string(),
            delimiter: ';',
        };
        let store = InMemoryDatasetStore::load(&CsvSource::from_text(text, layout)).unwrap();
        assert_eq!(store.schema().attributes(), &["shape"]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn missing_target_column() {
        let text = "num,color\n1,red\n";
        let err = CsvSource::from_text(text, DatasetConfig::default())
            .load_examples()
            .unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(c) if c == "wait"));
    }

    #[test]
    fn non_numeric_id() {
        let text = "num,color,wait\n1,red,T\nx7,blue,F\n";
        let err = CsvSource::from_text(text, DatasetConfig::default())
            .load_examples()
            .unwrap_err();
        assert!(matches!(err, LoadError::InvalidId { record: 2, ref value } if value == "x7"));
    }

    #[test]
    fn ragged_row_is_a_csv_error() {
        let text = "num,color,wait\n1,red\n";
        let err = CsvSource::from_text(text, DatasetConfig::default())
            .load_examples()
            .unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn header_only_input_loads_empty_and_fails_to_build() {
        let text = "num,color,wait\n";
        let store =
            InMemoryDatasetStore::load(&CsvSource::from_text(text, DatasetConfig::default()))
                .unwrap();
        assert!(store.is_empty());
        assert_eq!(store.schema().attributes(), &["color"]);
        assert!(matches!(
            crate::app::InductionBuilder::new(store).build(),
            Err(crate::app::BuildError::EmptyDataset)
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = CsvSource::from_path("/nonexistent/waittable.csv", DatasetConfig::default())
            .load_examples()
            .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
