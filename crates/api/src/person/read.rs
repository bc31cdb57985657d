use crate::{context::ThreadnestContext, person::GetPerson};
use threadnest_db_schema::source::person::Person;
use threadnest_utils::error::ThreadnestResult;

/// `Ok(None)` when nobody with this id has onboarded yet; callers use that
/// to route to the onboarding form.
#[tracing::instrument(skip(context))]
pub async fn get_person(
  data: GetPerson,
  context: &ThreadnestContext,
) -> ThreadnestResult<Option<Person>> {
  Ok(Person::read_opt(&mut context.pool(), &data.person_id).await?)
}
