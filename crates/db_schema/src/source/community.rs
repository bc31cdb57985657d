use crate::{
  newtypes::{CommunityId, PersonId},
  schema::{community, community_member},
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = community)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A community. Read-only in this core; membership and moderation live with
/// the identity provider.
pub struct Community {
  pub id: CommunityId,
  pub name: String,
  pub username: String,
  pub image: Option<String>,
  pub bio: Option<String>,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, derive_new::new, Insertable)]
#[diesel(table_name = community)]
pub struct CommunityInsertForm {
  pub id: CommunityId,
  pub name: String,
  pub username: String,
  #[new(default)]
  pub image: Option<String>,
  #[new(default)]
  pub bio: Option<String>,
  #[new(default)]
  pub published: Option<DateTime<Utc>>,
}

#[derive(PartialEq, Eq, Debug, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(Community))]
#[diesel(table_name = community_member)]
#[diesel(primary_key(community_id, person_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// One row per (community, person) pair, mirrored from the identity
/// provider's organization membership.
pub struct CommunityMember {
  pub community_id: CommunityId,
  pub person_id: PersonId,
  pub published: DateTime<Utc>,
}

#[derive(Clone, derive_new::new, Insertable)]
#[diesel(table_name = community_member)]
pub struct CommunityMemberForm {
  pub community_id: CommunityId,
  pub person_id: PersonId,
  #[new(value = "Utc::now()")]
  pub published: DateTime<Utc>,
}
