use serde::{Deserialize, Serialize};
use std::{backtrace::Backtrace, fmt, fmt::Debug};
use strum::{Display, EnumIter};

pub type ThreadnestResult<T> = Result<T, ThreadnestError>;

/// The error kinds surfaced to callers of the service operations.
///
/// Serializes with the variant as `error` and any payload as `message`, so a
/// presentation layer can map kinds to user-visible text.
#[derive(Display, Debug, Serialize, Deserialize, Clone, PartialEq, Eq, EnumIter, Hash)]
#[serde(tag = "error", content = "message", rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorType {
  NotFound,
  CouldntCreateThread,
  CouldntCreateReply,
  CouldntLikeThread,
  CouldntGetThreads,
  CouldntGetCommunities,
  CouldntUpdatePerson,
  InvalidName,
  InvalidUsername,
  InvalidBio,
  InvalidUrl,
  Unknown(String),
}

pub struct ThreadnestError {
  pub error_type: ErrorType,
  pub inner: anyhow::Error,
  pub context: Backtrace,
}

impl<T> From<T> for ThreadnestError
where
  T: Into<anyhow::Error>,
{
  fn from(t: T) -> Self {
    let cause = t.into();
    let error_type = match cause.downcast_ref::<diesel::result::Error>() {
      Some(&diesel::NotFound) => ErrorType::NotFound,
      _ => ErrorType::Unknown(format!("{}", &cause)),
    };
    ThreadnestError {
      error_type,
      inner: cause,
      context: Backtrace::capture(),
    }
  }
}

impl From<ErrorType> for ThreadnestError {
  fn from(error_type: ErrorType) -> Self {
    let inner = anyhow::anyhow!("{}", error_type);
    ThreadnestError {
      error_type,
      inner,
      context: Backtrace::capture(),
    }
  }
}

impl Debug for ThreadnestError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ThreadnestError")
      .field("message", &self.error_type)
      .field("inner", &self.inner)
      .field("context", &self.context)
      .finish()
  }
}

impl fmt::Display for ThreadnestError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}: ", &self.error_type)?;
    writeln!(f, "{}", self.inner)?;
    fmt::Display::fmt(&self.context, f)
  }
}

pub trait ThreadnestErrorExt<T, E: Into<anyhow::Error>> {
  fn with_error_type(self, error_type: ErrorType) -> ThreadnestResult<T>;
}

impl<T, E: Into<anyhow::Error>> ThreadnestErrorExt<T, E> for Result<T, E> {
  fn with_error_type(self, error_type: ErrorType) -> ThreadnestResult<T> {
    self.map_err(|error| ThreadnestError {
      error_type,
      inner: error.into(),
      context: Backtrace::capture(),
    })
  }
}
