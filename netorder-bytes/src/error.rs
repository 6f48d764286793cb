use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("buffer holds {actual} bytes, but {expected} are required")]
    ShortBuffer { expected: usize, actual: usize },
}
