use crate::{
  context::ThreadnestContext,
  person::{ListPersonThreads, ListPersonThreadsResponse},
};
use threadnest_db_schema::utils::limit_and_offset;
use threadnest_db_views::structs::ThreadView;
use threadnest_utils::error::{ErrorType, ThreadnestErrorExt, ThreadnestResult};

/// Everything a person posted, replies included, newest first.
#[tracing::instrument(skip(context))]
pub async fn list_person_threads(
  data: ListPersonThreads,
  context: &ThreadnestContext,
) -> ThreadnestResult<ListPersonThreadsResponse> {
  let (limit, offset) = limit_and_offset(data.page, data.limit)?;

  let threads = ThreadView::list_for_creator(&mut context.pool(), &data.person_id, limit, offset)
    .await
    .with_error_type(ErrorType::CouldntGetThreads)?;

  Ok(ListPersonThreadsResponse { threads })
}
