use crate::{newtypes::PersonId, schema::person};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = person)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A person. The id comes from the external identity provider, so there is
/// no local credential material on this row.
pub struct Person {
  pub id: PersonId,
  pub name: String,
  pub username: String,
  pub bio: Option<String>,
  /// A URL for the profile picture.
  pub avatar: Option<String>,
  /// Whether the person has completed onboarding.
  pub onboarded: bool,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, derive_new::new, Insertable, AsChangeset)]
#[diesel(table_name = person)]
pub struct PersonInsertForm {
  pub id: PersonId,
  pub name: String,
  pub username: String,
  #[new(default)]
  pub bio: Option<String>,
  #[new(default)]
  pub avatar: Option<String>,
  #[new(default)]
  pub onboarded: Option<bool>,
  #[new(default)]
  pub published: Option<DateTime<Utc>>,
}

impl PersonInsertForm {
  pub fn test_form(id: &str) -> Self {
    Self::new(
      PersonId(id.to_string()),
      format!("{id} name"),
      id.to_string(),
    )
  }
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = person)]
pub struct PersonUpdateForm {
  pub name: Option<String>,
  pub username: Option<String>,
  pub bio: Option<Option<String>>,
  pub avatar: Option<Option<String>>,
  pub onboarded: Option<bool>,
}
