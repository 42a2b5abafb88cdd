mod ingest;
mod parse;
mod process;

pub use ingest::*;
pub use parse::*;
pub use process::*;

#[cfg(test)]
/// Used in testing to load a csv fixture into bytes
pub(in crate::service::movies) fn load_fixture(filename: &str) -> std::io::Result<Vec<u8>> {
    std::fs::read(format!("{}/fixtures/{filename}", env!("CARGO_MANIFEST_DIR")))
}
