#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid GPX: {0}")]
    InvalidGpx(String),
    #[error("No tracks or routes found in document")]
    EmptyDocument,
}

#[derive(Debug, thiserror::Error)]
pub enum ClimbError {
    #[error("Non-finite elevation value at point {0}")]
    NonFiniteElevation(usize),
}
