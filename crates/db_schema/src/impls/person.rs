use crate::{
  newtypes::PersonId,
  schema::person,
  source::person::{Person, PersonInsertForm, PersonUpdateForm},
  traits::Crud,
  utils::{get_conn, DbPool},
};
use diesel::{dsl::insert_into, result::Error, OptionalExtension, QueryDsl};
use diesel_async::RunQueryDsl;

impl Crud for Person {
  type InsertForm = PersonInsertForm;
  type UpdateForm = PersonUpdateForm;
  type IdType = PersonId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(person::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn read(pool: &mut DbPool<'_>, person_id: PersonId) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    person::table.find(person_id).first::<Self>(conn).await
  }

  async fn update(
    pool: &mut DbPool<'_>,
    person_id: PersonId,
    form: &Self::UpdateForm,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(person::table.find(person_id))
      .set(form)
      .get_result::<Self>(conn)
      .await
  }
}

impl Person {
  pub async fn read_opt(pool: &mut DbPool<'_>, person_id: &PersonId) -> Result<Option<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    person::table
      .find(person_id.clone())
      .first::<Self>(conn)
      .await
      .optional()
  }

  /// Create-or-update by external id, used by onboarding. The insert form
  /// doubles as the changeset; the id column is left alone on conflict.
  pub async fn upsert(pool: &mut DbPool<'_>, form: &PersonInsertForm) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(person::table)
      .values(form)
      .on_conflict(person::id)
      .do_update()
      .set(form)
      .get_result::<Self>(conn)
      .await
  }

  /// Cascades to the person's threads and likes.
  pub async fn delete(pool: &mut DbPool<'_>, person_id: &PersonId) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(person::table.find(person_id.clone()))
      .execute(conn)
      .await
  }
}
