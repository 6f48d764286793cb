use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot write report: {0}")]
    Io(#[from] std::io::Error),
}
