use crate::{
  newtypes::{PersonId, ThreadId},
  schema::{thread, thread_like},
  source::thread::{Thread, ThreadInsertForm, ThreadLike, ThreadLikeForm},
  traits::{Crud, Likeable},
  utils::{get_conn, DbPool},
};
use diesel::{
  dsl::insert_into,
  result::Error,
  ExpressionMethods,
  OptionalExtension,
  QueryDsl,
};
use diesel_async::{scoped_futures::ScopedFutureExt, AsyncConnection, RunQueryDsl};

impl Crud for Thread {
  type InsertForm = ThreadInsertForm;
  type UpdateForm = ThreadInsertForm;
  type IdType = ThreadId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(thread::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn read(pool: &mut DbPool<'_>, thread_id: ThreadId) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    thread::table.find(thread_id).first::<Self>(conn).await
  }

  async fn update(
    pool: &mut DbPool<'_>,
    thread_id: ThreadId,
    form: &Self::UpdateForm,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(thread::table.find(thread_id))
      .set(form)
      .get_result::<Self>(conn)
      .await
  }
}

impl Thread {
  /// Creates a reply under `parent_id`. The parent read and the insert run
  /// in one transaction, so a reply can never be persisted without a live
  /// parent and the parent's children are consistent by construction.
  pub async fn create_reply(
    pool: &mut DbPool<'_>,
    parent_id: ThreadId,
    form: &ThreadInsertForm,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    conn
      .transaction::<_, Error, _>(|conn| {
        async move {
          let parent = thread::table.find(parent_id).first::<Self>(conn).await?;

          insert_into(thread::table)
            .values((form, thread::parent_id.eq(parent.id)))
            .get_result::<Self>(conn)
            .await
        }
        .scope_boxed()
      })
      .await
  }

  /// The ids of direct replies, oldest first.
  pub async fn child_ids(pool: &mut DbPool<'_>, thread_id: ThreadId) -> Result<Vec<ThreadId>, Error> {
    let conn = &mut get_conn(pool).await?;
    thread::table
      .filter(thread::parent_id.eq(thread_id))
      .order_by(thread::published.asc())
      .select(thread::id)
      .load::<ThreadId>(conn)
      .await
  }
}

impl Likeable for ThreadLike {
  type Form = ThreadLikeForm;
  type IdType = ThreadId;

  /// Adding an already-present like is a no-op at the store level.
  async fn like(pool: &mut DbPool<'_>, form: &Self::Form) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    let inserted = insert_into(thread_like::table)
      .values(form)
      .on_conflict_do_nothing()
      .get_result::<Self>(conn)
      .await
      .optional()?;
    match inserted {
      Some(like) => Ok(like),
      None => {
        thread_like::table
          .find((form.thread_id, form.person_id.clone()))
          .first::<Self>(conn)
          .await
      }
    }
  }

  async fn remove(
    pool: &mut DbPool<'_>,
    person_id: &PersonId,
    thread_id: ThreadId,
  ) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(thread_like::table.find((thread_id, person_id.clone())))
      .execute(conn)
      .await
  }
}

impl ThreadLike {
  pub async fn read(
    pool: &mut DbPool<'_>,
    thread_id: ThreadId,
    person_id: &PersonId,
  ) -> Result<Option<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    thread_like::table
      .find((thread_id, person_id.clone()))
      .first::<Self>(conn)
      .await
      .optional()
  }

  pub async fn count_for_thread(pool: &mut DbPool<'_>, thread_id: ThreadId) -> Result<i64, Error> {
    let conn = &mut get_conn(pool).await?;
    thread_like::table
      .filter(thread_like::thread_id.eq(thread_id))
      .count()
      .get_result(conn)
      .await
  }

  /// Flips whether `person_id` likes `thread_id` and returns the new state
  /// together with the authoritative like count. Membership check, write and
  /// count share one transaction, so the returned count reflects this
  /// toggle's own write rather than a racy re-fetch.
  pub async fn toggle(
    pool: &mut DbPool<'_>,
    thread_id: ThreadId,
    person_id: &PersonId,
  ) -> Result<(bool, i64), Error> {
    let conn = &mut get_conn(pool).await?;
    conn
      .transaction::<_, Error, _>(|conn| {
        async move {
          // Verifies the thread exists before touching the like set.
          thread::table
            .find(thread_id)
            .first::<Thread>(conn)
            .await?;

          let previously_liked = thread_like::table
            .find((thread_id, person_id.clone()))
            .first::<Self>(conn)
            .await
            .optional()?
            .is_some();

          if previously_liked {
            diesel::delete(thread_like::table.find((thread_id, person_id.clone())))
              .execute(conn)
              .await?;
          } else {
            let form = ThreadLikeForm::new(thread_id, person_id.clone());
            insert_into(thread_like::table)
              .values(form)
              .on_conflict_do_nothing()
              .execute(conn)
              .await?;
          }

          let like_count = thread_like::table
            .filter(thread_like::thread_id.eq(thread_id))
            .count()
            .get_result(conn)
            .await?;

          Ok((!previously_liked, like_count))
        }
        .scope_boxed()
      })
      .await
  }
}

#[cfg(test)]
mod tests {
  use crate::{
    newtypes::ThreadId,
    source::{
      person::{Person, PersonInsertForm},
      thread::{Thread, ThreadInsertForm, ThreadLike, ThreadLikeForm},
    },
    traits::{Crud, Likeable},
    utils::build_db_pool_for_tests,
  };
  use diesel::result::Error;
  use pretty_assertions::assert_eq;
  use serial_test::serial;

  #[tokio::test]
  #[serial]
  #[ignore = "requires a running postgres database"]
  async fn test_thread_crud_and_likes() -> Result<(), Error> {
    let pool = &build_db_pool_for_tests().await;
    let pool = &mut pool.into();

    let person = Person::upsert(pool, &PersonInsertForm::test_form("schema_tester")).await?;

    let thread = Thread::create(
      pool,
      &ThreadInsertForm::new("some content".to_string(), person.id.clone()),
    )
    .await?;
    assert_eq!(thread, Thread::read(pool, thread.id).await?);

    let reply = Thread::create_reply(
      pool,
      thread.id,
      &ThreadInsertForm::new("a reply".to_string(), person.id.clone()),
    )
    .await?;
    assert_eq!(Some(thread.id), reply.parent_id);
    assert_eq!(vec![reply.id], Thread::child_ids(pool, thread.id).await?);

    let orphan = Thread::create_reply(
      pool,
      ThreadId(-1),
      &ThreadInsertForm::new("orphan".to_string(), person.id.clone()),
    )
    .await;
    assert!(orphan.is_err());

    // the composite key makes a second like a no-op
    let form = ThreadLikeForm::new(thread.id, person.id.clone());
    ThreadLike::like(pool, &form).await?;
    ThreadLike::like(pool, &form).await?;
    assert_eq!(1, ThreadLike::count_for_thread(pool, thread.id).await?);

    let (liked, like_count) = ThreadLike::toggle(pool, thread.id, &person.id).await?;
    assert!(!liked);
    assert_eq!(0, like_count);

    let removed = ThreadLike::remove(pool, &person.id, thread.id).await?;
    assert_eq!(0, removed);

    Person::delete(pool, &person.id).await?;
    Ok(())
  }
}
