use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Expected outcome of a speculative drop; the board is untouched and the
    /// caller retries with other coordinates.
    #[error("Block does not fit there")]
    IllegalPlacement,
    #[error("No choice with that id is on offer")]
    UnknownChoice,
    #[error("Session already ended, no new placements are accepted")]
    AlreadyOver,
    #[error("More simultaneous choices requested than the catalog holds")]
    CatalogExhausted,
}

pub type Result<T> = std::result::Result<T, GameError>;
