use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Invalid network configuration: {0}")]
    InvalidConfig(String),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
