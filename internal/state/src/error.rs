use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("serialisation error: {0:?}")]
    Serialisation(#[from] bincode::Error),
}
