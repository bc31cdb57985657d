use crate::{
  newtypes::{CommunityId, PersonId, ThreadId},
  schema::{thread, thread_like},
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = thread)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A thread. Top-level when `parent_id` is null, otherwise a reply to the
/// thread it points at.
pub struct Thread {
  pub id: ThreadId,
  pub content: String,
  pub creator_id: PersonId,
  pub parent_id: Option<ThreadId>,
  /// The community this was posted to, if any. Replies inherit no community.
  pub community_id: Option<CommunityId>,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, derive_new::new, Insertable, AsChangeset)]
#[diesel(table_name = thread)]
pub struct ThreadInsertForm {
  pub content: String,
  pub creator_id: PersonId,
  #[new(default)]
  pub parent_id: Option<ThreadId>,
  #[new(default)]
  pub community_id: Option<CommunityId>,
  #[new(default)]
  pub published: Option<DateTime<Utc>>,
}

#[derive(PartialEq, Eq, Debug, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Thread))]
#[diesel(table_name = thread_like)]
#[diesel(primary_key(thread_id, person_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// One row per (thread, person) pair; the composite key is what gives the
/// like set its set semantics.
pub struct ThreadLike {
  pub thread_id: ThreadId,
  pub person_id: PersonId,
  pub published: DateTime<Utc>,
}

#[derive(Clone, derive_new::new, Insertable)]
#[diesel(table_name = thread_like)]
pub struct ThreadLikeForm {
  pub thread_id: ThreadId,
  pub person_id: PersonId,
  #[new(value = "Utc::now()")]
  pub published: DateTime<Utc>,
}
