use std::fmt;
use std::io;

use crate::data::DataError;

#[derive(Debug)]
pub enum FoldlistError {
    IoError(io::Error),
    DataError(DataError),
}

impl From<io::Error> for FoldlistError {
    fn from(error: io::Error) -> Self {
        FoldlistError::IoError(error)
    }
}

impl From<DataError> for FoldlistError {
    fn from(error: DataError) -> Self {
        FoldlistError::DataError(error)
    }
}

impl fmt::Display for FoldlistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoldlistError::IoError(e) => write!(f, "I/O error: {}", e),
            FoldlistError::DataError(e) => write!(f, "Data error: {}", e),
        }
    }
}

pub type FoldlistResult<T> = Result<T, FoldlistError>;
