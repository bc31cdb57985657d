use crate::{
  community::{ListCommunities, ListCommunitiesResponse},
  context::ThreadnestContext,
};
use threadnest_db_schema::{source::community::Community, utils::limit_and_offset};
use threadnest_db_views::structs::CommunityView;
use threadnest_utils::error::{ErrorType, ThreadnestErrorExt, ThreadnestResult};

/// Communities newest first, each with its member ids, optionally narrowed
/// by a fuzzy search over name and username.
#[tracing::instrument(skip(context))]
pub async fn list_communities(
  data: ListCommunities,
  context: &ThreadnestContext,
) -> ThreadnestResult<ListCommunitiesResponse> {
  let (limit, offset) = limit_and_offset(data.page, data.limit)?;
  let search_term = data.search_term.as_deref();

  let communities = CommunityView::list(&mut context.pool(), search_term, limit, offset)
    .await
    .with_error_type(ErrorType::CouldntGetCommunities)?;
  let total = Community::count(&mut context.pool(), search_term)
    .await
    .with_error_type(ErrorType::CouldntGetCommunities)?;

  let has_next = total > offset + communities.len() as i64;
  Ok(ListCommunitiesResponse {
    communities,
    has_next,
  })
}
