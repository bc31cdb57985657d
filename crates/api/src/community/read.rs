use crate::{community::GetCommunity, context::ThreadnestContext};
use threadnest_db_views::structs::CommunityView;
use threadnest_utils::error::ThreadnestResult;

#[tracing::instrument(skip(context))]
pub async fn get_community(
  data: GetCommunity,
  context: &ThreadnestContext,
) -> ThreadnestResult<Option<CommunityView>> {
  Ok(CommunityView::read(&mut context.pool(), &data.community_id).await?)
}
