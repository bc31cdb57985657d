use crate::{
  context::ThreadnestContext,
  thread::{ListThreads, ListThreadsResponse},
};
use threadnest_db_schema::utils::limit_and_offset;
use threadnest_db_views::structs::ThreadView;
use threadnest_utils::error::{ErrorType, ThreadnestErrorExt, ThreadnestResult};

/// One page of the feed, newest first. Replies don't appear here; they are
/// only reachable through their parent thread.
#[tracing::instrument(skip(context))]
pub async fn list_threads(
  data: ListThreads,
  context: &ThreadnestContext,
) -> ThreadnestResult<ListThreadsResponse> {
  let (limit, offset) = limit_and_offset(data.page, data.limit)?;

  let threads = ThreadView::list_feed(&mut context.pool(), limit, offset)
    .await
    .with_error_type(ErrorType::CouldntGetThreads)?;
  let total = ThreadView::count_feed(&mut context.pool())
    .await
    .with_error_type(ErrorType::CouldntGetThreads)?;

  let has_next = total > offset + threads.len() as i64;
  Ok(ListThreadsResponse { threads, has_next })
}
