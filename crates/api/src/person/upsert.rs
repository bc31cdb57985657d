use crate::{
  context::ThreadnestContext,
  person::{PersonResponse, UpsertPerson},
};
use threadnest_db_schema::source::person::{Person, PersonInsertForm};
use threadnest_utils::{
  error::{ErrorType, ThreadnestErrorExt, ThreadnestResult},
  validation::{is_valid_avatar_url, is_valid_bio, is_valid_display_name, is_valid_username},
};

/// Creates or updates the person for an external id and marks them
/// onboarded. Runs once at the end of the onboarding form and again whenever
/// the profile is edited.
#[tracing::instrument(skip(context))]
pub async fn upsert_person(
  data: UpsertPerson,
  context: &ThreadnestContext,
) -> ThreadnestResult<PersonResponse> {
  is_valid_display_name(&data.name)?;
  is_valid_username(&data.username)?;
  if let Some(bio) = &data.bio {
    is_valid_bio(bio)?;
  }
  if let Some(avatar) = &data.avatar {
    is_valid_avatar_url(avatar)?;
  }

  let mut form = PersonInsertForm::new(data.person_id, data.name, data.username);
  form.bio = data.bio;
  form.avatar = data.avatar;
  form.onboarded = Some(true);

  let person = Person::upsert(&mut context.pool(), &form)
    .await
    .with_error_type(ErrorType::CouldntUpdatePerson)?;

  Ok(PersonResponse { person })
}
