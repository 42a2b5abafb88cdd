use std::collections::HashMap;

use csv::StringRecord;

use crate::model::IngestError;

/// A movie as stored in the movies table.
///
/// The table is keyed on `Year` (partition) and `Title` (sort), so re-ingesting a movie
/// overwrites the previous item.
#[derive(serde::Serialize, serde::Deserialize, Eq, PartialEq, Debug, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct MovieRecord {
    pub year: i64,
    pub title: String,
    pub meta: MovieMeta,
}

/// Everything about a movie other than its key.
/// Optional fields are written as explicit nulls rather than being left off the item.
#[derive(serde::Serialize, serde::Deserialize, Eq, PartialEq, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct MovieMeta {
    /// Running time in minutes, `0` when the csv leaves it blank
    pub length: i64,
    pub subject: Option<String>,
    pub actor: Option<String>,
    pub actress: Option<String>,
    pub director: Option<String>,
    pub popularity: Option<String>,
    pub awards: Option<String>,
    pub image: Option<String>,
}

/// The header line of a csv, mapping column names to their index.
#[derive(Debug, Clone, Default)]
pub struct CsvHeader {
    columns: HashMap<String, usize>,
}

impl CsvHeader {
    pub fn new(headers: &StringRecord) -> Self {
        // later columns win when a name is repeated
        let columns = headers
            .iter()
            .enumerate()
            .map(|(index, name)| (name.to_string(), index))
            .collect();
        Self { columns }
    }
}

/// A single data row of a csv, keyed by the names in its [CsvHeader].
#[derive(Debug, Clone, Copy)]
pub struct CsvRow<'a> {
    header: &'a CsvHeader,
    record: &'a StringRecord,
    line: u64,
}

impl<'a> CsvRow<'a> {
    pub fn new(header: &'a CsvHeader, record: &'a StringRecord, line: u64) -> Self {
        Self {
            header,
            record,
            line,
        }
    }

    /// Gets the value of a named column.
    ///
    /// Errors when the header has no such column. Returns `None` when the column exists but
    /// this row ends before reaching it.
    pub fn get(&self, field: &'static str) -> Result<Option<&'a str>, IngestError> {
        let index = self
            .header
            .columns
            .get(field)
            .ok_or(IngestError::MissingField {
                line: self.line,
                field,
            })?;
        Ok(self.record.get(*index))
    }

    fn required(&self, field: &'static str) -> Result<&'a str, IngestError> {
        self.get(field)?.ok_or(IngestError::MissingField {
            line: self.line,
            field,
        })
    }

    fn optional(&self, field: &'static str) -> Result<Option<String>, IngestError> {
        Ok(self
            .get(field)?
            .filter(|value| !value.is_empty())
            .map(str::to_string))
    }

    fn integer(&self, field: &'static str, value: &str) -> Result<i64, IngestError> {
        value
            .trim()
            .parse::<i64>()
            .map_err(|source| IngestError::InvalidNumber {
                line: self.line,
                field,
                value: value.to_string(),
                source,
            })
    }
}

impl TryFrom<CsvRow<'_>> for MovieRecord {
    type Error = IngestError;

    fn try_from(row: CsvRow<'_>) -> Result<Self, Self::Error> {
        // a blank Year is an error while a blank Length is 0
        let year = row.integer("Year", row.required("Year")?)?;
        let title = row.required("Title")?.to_string();
        let length = match row.get("Length")? {
            None | Some("") => 0,
            Some(value) => row.integer("Length", value)?,
        };

        Ok(MovieRecord {
            year,
            title,
            meta: MovieMeta {
                length,
                subject: row.optional("Subject")?,
                actor: row.optional("Actor")?,
                actress: row.optional("Actress")?,
                director: row.optional("Director")?,
                popularity: row.optional("Popularity")?,
                awards: row.optional("Awards")?,
                image: row.optional("Image")?,
            },
        })
    }
}
