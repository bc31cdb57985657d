use crate::structs::CommunityView;
use diesel::result::Error;
use threadnest_db_schema::{
  newtypes::CommunityId,
  source::community::{Community, CommunityMember},
  utils::DbPool,
};

impl CommunityView {
  pub async fn read(
    pool: &mut DbPool<'_>,
    community_id: &CommunityId,
  ) -> Result<Option<Self>, Error> {
    let community = match Community::read(pool, community_id).await? {
      Some(community) => community,
      None => return Ok(None),
    };
    let members = CommunityMember::for_communities(pool, vec![community_id.clone()]).await?;
    Ok(attach_members(vec![community], members).pop())
  }

  pub async fn list(
    pool: &mut DbPool<'_>,
    search_term: Option<&str>,
    limit: i64,
    offset: i64,
  ) -> Result<Vec<Self>, Error> {
    let communities = Community::list(pool, search_term, limit, offset).await?;
    let community_ids = communities.iter().map(|c| c.id.clone()).collect::<Vec<_>>();
    let members = if community_ids.is_empty() {
      Vec::new()
    } else {
      CommunityMember::for_communities(pool, community_ids).await?
    };
    Ok(attach_members(communities, members))
  }
}

/// Pairs each community with its member ids, keeping the membership order.
fn attach_members(
  communities: Vec<Community>,
  members: Vec<CommunityMember>,
) -> Vec<CommunityView> {
  communities
    .into_iter()
    .map(|community| {
      let member_ids = members
        .iter()
        .filter(|m| m.community_id == community.id)
        .map(|m| m.person_id.clone())
        .collect();
      CommunityView {
        community,
        member_ids,
      }
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Utc;
  use pretty_assertions::assert_eq;
  use threadnest_db_schema::newtypes::PersonId;

  fn test_community(id: &str) -> Community {
    Community {
      id: CommunityId(id.to_string()),
      name: format!("{id} name"),
      username: id.to_string(),
      image: None,
      bio: None,
      published: Utc::now(),
    }
  }

  fn test_member(community_id: &str, person_id: &str) -> CommunityMember {
    CommunityMember {
      community_id: CommunityId(community_id.to_string()),
      person_id: PersonId(person_id.to_string()),
      published: Utc::now(),
    }
  }

  #[test]
  fn test_attach_members_groups_by_community() {
    let views = attach_members(
      vec![test_community("org_a"), test_community("org_b")],
      vec![
        test_member("org_a", "alice"),
        test_member("org_b", "bob"),
        test_member("org_a", "carol"),
      ],
    );

    assert_eq!(
      vec![
        vec![PersonId("alice".to_string()), PersonId("carol".to_string())],
        vec![PersonId("bob".to_string())],
      ],
      views
        .into_iter()
        .map(|v| v.member_ids)
        .collect::<Vec<_>>()
    );
  }

  #[test]
  fn test_attach_members_empty() {
    let views = attach_members(vec![test_community("org_a")], Vec::new());
    assert_eq!(1, views.len());
    assert!(views[0].member_ids.is_empty());
  }
}
