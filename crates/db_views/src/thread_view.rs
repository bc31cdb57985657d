use crate::structs::{ReplyBranchView, ThreadTreeView, ThreadView};
use diesel::{result::Error, ExpressionMethods, OptionalExtension, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;
use threadnest_db_schema::{
  newtypes::{PersonId, ThreadId},
  schema::{person, thread},
  utils::{get_conn, DbPool},
};

impl ThreadView {
  pub async fn read(pool: &mut DbPool<'_>, thread_id: ThreadId) -> Result<Option<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    thread::table
      .find(thread_id)
      .inner_join(person::table)
      .select(Self::as_select())
      .first::<Self>(conn)
      .await
      .optional()
  }

  /// One page of the feed: top-level threads only, newest first.
  pub async fn list_feed(
    pool: &mut DbPool<'_>,
    limit: i64,
    offset: i64,
  ) -> Result<Vec<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    thread::table
      .filter(thread::parent_id.is_null())
      .inner_join(person::table)
      // the id tie-break keeps pages stable when timestamps collide
      .order_by(thread::published.desc())
      .then_order_by(thread::id.desc())
      .limit(limit)
      .offset(offset)
      .select(Self::as_select())
      .load::<Self>(conn)
      .await
  }

  /// Total number of top-level threads, for the has-next computation.
  pub async fn count_feed(pool: &mut DbPool<'_>) -> Result<i64, Error> {
    let conn = &mut get_conn(pool).await?;
    thread::table
      .filter(thread::parent_id.is_null())
      .count()
      .get_result(conn)
      .await
  }

  /// A person's own threads, replies included, newest first.
  pub async fn list_for_creator(
    pool: &mut DbPool<'_>,
    creator_id: &PersonId,
    limit: i64,
    offset: i64,
  ) -> Result<Vec<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    thread::table
      .filter(thread::creator_id.eq(creator_id.clone()))
      .inner_join(person::table)
      .order_by(thread::published.desc())
      .then_order_by(thread::id.desc())
      .limit(limit)
      .offset(offset)
      .select(Self::as_select())
      .load::<Self>(conn)
      .await
  }

  async fn list_replies(
    pool: &mut DbPool<'_>,
    parent_ids: Vec<ThreadId>,
  ) -> Result<Vec<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    thread::table
      .filter(thread::parent_id.eq_any(parent_ids))
      .inner_join(person::table)
      .order_by(thread::published.asc())
      .then_order_by(thread::id.asc())
      .select(Self::as_select())
      .load::<Self>(conn)
      .await
  }
}

impl ThreadTreeView {
  /// Reads a thread with its author and exactly two levels of replies. The
  /// depth limit is structural: replies below the second level are simply
  /// not fetched. A missing thread is `Ok(None)`, not an error.
  pub async fn read(pool: &mut DbPool<'_>, thread_id: ThreadId) -> Result<Option<Self>, Error> {
    let root = match ThreadView::read(pool, thread_id).await? {
      Some(root) => root,
      None => return Ok(None),
    };

    let level_one = ThreadView::list_replies(pool, vec![thread_id]).await?;
    let level_one_ids = level_one.iter().map(|v| v.thread.id).collect::<Vec<_>>();
    let level_two = if level_one_ids.is_empty() {
      Vec::new()
    } else {
      ThreadView::list_replies(pool, level_one_ids).await?
    };

    Ok(Some(assemble_tree(root, level_one, level_two)))
  }
}

/// Groups the second-level replies under their first-level parents. Rows in
/// `level_two` whose parent isn't in `level_one` are dropped.
fn assemble_tree(
  root: ThreadView,
  level_one: Vec<ThreadView>,
  level_two: Vec<ThreadView>,
) -> ThreadTreeView {
  let replies = level_one
    .into_iter()
    .map(|reply| {
      let replies = level_two
        .iter()
        .filter(|v| v.thread.parent_id == Some(reply.thread.id))
        .cloned()
        .collect();
      ReplyBranchView { reply, replies }
    })
    .collect();

  ThreadTreeView {
    thread_view: root,
    replies,
  }
}
