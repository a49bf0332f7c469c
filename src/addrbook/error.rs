use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error(
        "Wrong format of the phone number, the phone number can contain only digits, valid length 10-13 characters"
    )]
    InvalidPhoneFormat,

    #[error("Wrong format of birthday, put data in format \"dd-mm-yyyy\"")]
    InvalidBirthdayFormat,

    #[error("Contact with name {0} has no birthday set")]
    NoBirthdaySet(String),

    #[error("There is no contact with name {0}, please enter a valid name")]
    ContactNotFound(String),

    #[error("Not enough arguments for \"{command}\", expected: {command} {usage}")]
    MissingArguments {
        command: &'static str,
        usage: &'static str,
    },

    #[error("Page size must be a non-negative number, got \"{0}\"")]
    InvalidPageSize(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BookError {
    /// Errors caused by what the user typed, as opposed to the environment.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, BookError::Io(_) | BookError::Serialization(_))
    }
}

pub type Result<T> = std::result::Result<T, BookError>;
