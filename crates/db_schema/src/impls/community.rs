use crate::{
  newtypes::CommunityId,
  schema::{community, community_member},
  source::community::{Community, CommunityInsertForm, CommunityMember, CommunityMemberForm},
  traits::Joinable,
  utils::{fuzzy_search, get_conn, DbPool},
};
use diesel::{
  dsl::insert_into,
  result::Error,
  BoolExpressionMethods,
  ExpressionMethods,
  OptionalExtension,
  PgTextExpressionMethods,
  QueryDsl,
};
use diesel_async::RunQueryDsl;

impl Community {
  pub async fn read(pool: &mut DbPool<'_>, community_id: &CommunityId) -> Result<Option<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    community::table
      .find(community_id.clone())
      .first::<Self>(conn)
      .await
      .optional()
  }

  pub async fn create(pool: &mut DbPool<'_>, form: &CommunityInsertForm) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(community::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
  }

  pub async fn list(
    pool: &mut DbPool<'_>,
    search_term: Option<&str>,
    limit: i64,
    offset: i64,
  ) -> Result<Vec<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    let mut query = community::table.into_boxed();

    if let Some(term) = search_term {
      let searcher = fuzzy_search(term);
      query = query.filter(
        community::name
          .ilike(searcher.clone())
          .or(community::username.ilike(searcher)),
      );
    }

    query
      .order_by(community::published.desc())
      .limit(limit)
      .offset(offset)
      .load::<Self>(conn)
      .await
  }

  pub async fn delete(pool: &mut DbPool<'_>, community_id: &CommunityId) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(community::table.find(community_id.clone()))
      .execute(conn)
      .await
  }

  pub async fn count(pool: &mut DbPool<'_>, search_term: Option<&str>) -> Result<i64, Error> {
    let conn = &mut get_conn(pool).await?;
    let mut query = community::table.into_boxed();

    if let Some(term) = search_term {
      let searcher = fuzzy_search(term);
      query = query.filter(
        community::name
          .ilike(searcher.clone())
          .or(community::username.ilike(searcher)),
      );
    }

    query.count().get_result(conn).await
  }
}

impl Joinable for CommunityMember {
  type Form = CommunityMemberForm;

  /// Joining twice is a no-op at the store level.
  async fn join(pool: &mut DbPool<'_>, form: &Self::Form) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    let inserted = insert_into(community_member::table)
      .values(form)
      .on_conflict_do_nothing()
      .get_result::<Self>(conn)
      .await
      .optional()?;
    match inserted {
      Some(member) => Ok(member),
      None => {
        community_member::table
          .find((form.community_id.clone(), form.person_id.clone()))
          .first::<Self>(conn)
          .await
      }
    }
  }

  async fn leave(pool: &mut DbPool<'_>, form: &Self::Form) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(
      community_member::table.find((form.community_id.clone(), form.person_id.clone())),
    )
    .execute(conn)
    .await
  }
}

impl CommunityMember {
  /// Membership rows for a set of communities, oldest join first.
  pub async fn for_communities(
    pool: &mut DbPool<'_>,
    community_ids: Vec<CommunityId>,
  ) -> Result<Vec<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    community_member::table
      .filter(community_member::community_id.eq_any(community_ids))
      .order_by(community_member::published.asc())
      .load::<Self>(conn)
      .await
  }
}
