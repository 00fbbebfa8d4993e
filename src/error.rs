use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandError {
    #[error("hand has no cards")]
    EmptyHand,

    #[error("invalid card: {0:?}")]
    InvalidCard(String),
}
