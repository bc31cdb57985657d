use crate::error::{ErrorType, ThreadnestResult};
use url::Url;

// Mirrors the limits enforced by the onboarding form: name, username and bio
// all take 3 to 50 (resp. 1000) characters of any charset, and the avatar
// has to be a parseable URL.
const NAME_MIN_LENGTH: usize = 3;
const NAME_MAX_LENGTH: usize = 50;
const BIO_MIN_LENGTH: usize = 3;
const BIO_MAX_LENGTH: usize = 1000;

pub fn is_valid_display_name(name: &str) -> ThreadnestResult<()> {
  let len = name.trim().chars().count();
  if (NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&len) {
    Ok(())
  } else {
    Err(ErrorType::InvalidName.into())
  }
}

pub fn is_valid_username(username: &str) -> ThreadnestResult<()> {
  let len = username.chars().count();
  if (NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&len) {
    Ok(())
  } else {
    Err(ErrorType::InvalidUsername.into())
  }
}

pub fn is_valid_bio(bio: &str) -> ThreadnestResult<()> {
  let len = bio.chars().count();
  if (BIO_MIN_LENGTH..=BIO_MAX_LENGTH).contains(&len) {
    Ok(())
  } else {
    Err(ErrorType::InvalidBio.into())
  }
}

pub fn is_valid_avatar_url(avatar: &str) -> ThreadnestResult<()> {
  match Url::parse(avatar) {
    Ok(_) => Ok(()),
    Err(_) => Err(ErrorType::InvalidUrl.into()),
  }
}
