use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown language code: {0} (expected 'en' or 'sr')")]
    UnknownLanguage(String),
}
