use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("plot backend error: {0}")]
    Backend(String),

    #[error("no layer selected for plotting")]
    NoLayer,

    #[error("no plot file is open")]
    NotOpen,
}
