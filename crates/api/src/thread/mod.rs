use serde::{Deserialize, Serialize};
use threadnest_db_schema::newtypes::{CommunityId, PersonId, ThreadId};
use threadnest_db_views::structs::ThreadView;

pub mod create;
pub mod like;
pub mod like_status;
pub mod list;
pub mod read;
pub mod reply;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateThread {
  pub content: String,
  pub creator_id: PersonId,
  pub community_id: Option<CommunityId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ThreadResponse {
  pub thread_view: ThreadView,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListThreads {
  pub page: Option<i64>,
  pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListThreadsResponse {
  pub threads: Vec<ThreadView>,
  /// Whether another page exists past this one, from a count taken in the
  /// same operation.
  pub has_next: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GetThread {
  pub thread_id: ThreadId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReply {
  pub content: String,
  pub creator_id: PersonId,
  pub parent_id: ThreadId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeThread {
  pub thread_id: ThreadId,
  pub person_id: PersonId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetLikeStatus {
  pub thread_id: ThreadId,
  pub person_id: PersonId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LikeResponse {
  pub liked: bool,
  pub like_count: i64,
}
