use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("[INPUT_UNAVAILABLE] failed to read keysym definitions from '{}'", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GeneratorError {
    pub fn input_unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GeneratorError::InputUnavailable { path: path.into(), source }
    }
}
