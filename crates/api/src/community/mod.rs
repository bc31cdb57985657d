use serde::{Deserialize, Serialize};
use threadnest_db_schema::newtypes::CommunityId;
use threadnest_db_views::structs::CommunityView;

pub mod list;
pub mod read;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListCommunities {
  pub search_term: Option<String>,
  pub page: Option<i64>,
  pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListCommunitiesResponse {
  pub communities: Vec<CommunityView>,
  pub has_next: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetCommunity {
  pub community_id: CommunityId,
}

#[cfg(test)]
mod tests {
  use crate::{
    community::{list::list_communities, read::get_community, GetCommunity, ListCommunities},
    context::ThreadnestContext,
  };
  use pretty_assertions::assert_eq;
  use serial_test::serial;
  use threadnest_db_schema::{
    newtypes::CommunityId,
    source::{
      community::{Community, CommunityInsertForm, CommunityMember, CommunityMemberForm},
      person::{Person, PersonInsertForm},
    },
    traits::Joinable,
  };
  use threadnest_utils::error::{ErrorType, ThreadnestResult};

  async fn seed(context: &ThreadnestContext, id: &str, name: &str) -> ThreadnestResult<Community> {
    let form = CommunityInsertForm::new(
      CommunityId(id.to_string()),
      name.to_string(),
      id.to_string(),
    );
    Ok(Community::create(&mut context.pool(), &form).await?)
  }

  #[tokio::test]
  #[serial]
  #[ignore = "requires a running postgres database"]
  async fn test_community_listing_and_search() -> ThreadnestResult<()> {
    let context = ThreadnestContext::init_test_context().await;
    let rustaceans = seed(&context, "org_rustaceans", "Rustaceans").await?;
    let gophers = seed(&context, "org_gophers", "Gophers").await?;
    let crabs = seed(&context, "org_crabs", "Crab Collective").await?;

    let page_one = list_communities(
      ListCommunities {
        search_term: None,
        page: Some(1),
        limit: Some(2),
      },
      &context,
    )
    .await?;
    assert_eq!(2, page_one.communities.len());
    assert!(page_one.has_next);

    // fuzzy search matches name and username
    let found = list_communities(
      ListCommunities {
        search_term: Some("rusta".to_string()),
        page: None,
        limit: None,
      },
      &context,
    )
    .await?;
    assert_eq!(
      vec![rustaceans.id.clone()],
      found
        .communities
        .iter()
        .map(|v| v.community.id.clone())
        .collect::<Vec<_>>()
    );
    assert!(!found.has_next);

    // members surface on the cards, oldest join first
    let alice = Person::upsert(&mut context.pool(), &PersonInsertForm::test_form("org_alice")).await?;
    let bob = Person::upsert(&mut context.pool(), &PersonInsertForm::test_form("org_bob")).await?;
    for person in [&alice, &bob] {
      CommunityMember::join(
        &mut context.pool(),
        &CommunityMemberForm::new(crabs.id.clone(), person.id.clone()),
      )
      .await?;
    }

    let fetched = get_community(
      GetCommunity {
        community_id: crabs.id.clone(),
      },
      &context,
    )
    .await?
    .ok_or(ErrorType::NotFound)?;
    assert_eq!(crabs, fetched.community);
    assert_eq!(vec![alice.id.clone(), bob.id.clone()], fetched.member_ids);

    let listed = list_communities(
      ListCommunities {
        search_term: Some("crab".to_string()),
        page: None,
        limit: None,
      },
      &context,
    )
    .await?;
    assert_eq!(
      vec![vec![alice.id.clone(), bob.id.clone()]],
      listed
        .communities
        .iter()
        .map(|v| v.member_ids.clone())
        .collect::<Vec<_>>()
    );

    let missing = get_community(
      GetCommunity {
        community_id: CommunityId("org_missing".to_string()),
      },
      &context,
    )
    .await?;
    assert_eq!(None, missing);

    for community in [&rustaceans, &gophers, &crabs] {
      Community::delete(&mut context.pool(), &community.id).await?;
    }
    for person in [&alice, &bob] {
      Person::delete(&mut context.pool(), &person.id).await?;
    }
    Ok(())
  }
}
