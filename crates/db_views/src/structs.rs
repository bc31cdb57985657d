use diesel::{Queryable, Selectable};
use serde::Serialize;
use threadnest_db_schema::{
  newtypes::PersonId,
  source::{community::Community, person::Person, thread::Thread},
};

#[derive(Debug, PartialEq, Clone, Serialize, Queryable, Selectable)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A thread with its author, joined at query time.
pub struct ThreadView {
  #[diesel(embed)]
  pub thread: Thread,
  #[diesel(embed)]
  pub creator: Person,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
/// A thread with its replies, nested exactly two levels deep. Replies below
/// the second level exist in the store but are not traversed here.
pub struct ThreadTreeView {
  pub thread_view: ThreadView,
  pub replies: Vec<ReplyBranchView>,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
/// A direct reply together with its own direct replies (the second and last
/// nesting level).
pub struct ReplyBranchView {
  pub reply: ThreadView,
  pub replies: Vec<ThreadView>,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
/// A community with the ids of its members, oldest join first. The cards in
/// the community listing render member avatars from these.
pub struct CommunityView {
  pub community: Community,
  pub member_ids: Vec<PersonId>,
}
