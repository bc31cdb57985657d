use crate::{
  context::ThreadnestContext,
  thread::{GetLikeStatus, LikeResponse},
};
use threadnest_db_schema::source::thread::ThreadLike;
use threadnest_db_views::structs::ThreadView;
use threadnest_utils::error::ThreadnestResult;

/// Read-only like state. A missing thread reads as unliked with a zero
/// count; callers render that the same way as a thread nobody liked.
#[tracing::instrument(skip(context))]
pub async fn like_status(
  data: GetLikeStatus,
  context: &ThreadnestContext,
) -> ThreadnestResult<LikeResponse> {
  if ThreadView::read(&mut context.pool(), data.thread_id)
    .await?
    .is_none()
  {
    return Ok(LikeResponse {
      liked: false,
      like_count: 0,
    });
  }

  let liked = ThreadLike::read(&mut context.pool(), data.thread_id, &data.person_id)
    .await?
    .is_some();
  let like_count = ThreadLike::count_for_thread(&mut context.pool(), data.thread_id).await?;

  Ok(LikeResponse { liked, like_count })
}
