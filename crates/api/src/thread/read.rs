use crate::{context::ThreadnestContext, thread::GetThread};
use threadnest_db_views::structs::ThreadTreeView;
use threadnest_utils::error::ThreadnestResult;

/// A single thread with its author and two levels of replies. `Ok(None)` for
/// a missing thread; an `Err` always means the lookup itself failed.
#[tracing::instrument(skip(context))]
pub async fn get_thread(
  data: GetThread,
  context: &ThreadnestContext,
) -> ThreadnestResult<Option<ThreadTreeView>> {
  Ok(ThreadTreeView::read(&mut context.pool(), data.thread_id).await?)
}
