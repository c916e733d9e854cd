pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The covenant toolchain rejected a parameter combination.
    #[error("Invalid covenant parameters: {0}")]
    InvalidCovenantParams(String),
}
