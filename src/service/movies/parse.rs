use lambda_runtime::tracing;

use crate::model::{CsvHeader, CsvRow, IngestError, MovieRecord};

/// Parses the body of a movies csv.
///
/// The first line names the columns; every following line becomes one [MovieRecord], in file
/// order. Rows may carry more fields than the header, which are ignored.
#[tracing::instrument(skip(body), fields(size=body.len()))]
pub fn parse_movies_csv(body: &[u8]) -> Result<Vec<MovieRecord>, IngestError> {
    tracing::info!("start reading csv file");
    let text = std::str::from_utf8(body)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());
    let header = CsvHeader::new(reader.headers()?);

    let mut movies = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let movie = MovieRecord::try_from(CsvRow::new(&header, &record, line))?;
        movies.push(movie);
    }

    tracing::info!(movie_count = movies.len(), "finished adding movies");
    Ok(movies)
}
