use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid card UID: {0}")]
    InvalidCardUid(String),

    #[error("Invalid login: {0}")]
    InvalidLogin(String),
}

pub type Result<T> = std::result::Result<T, Error>;
