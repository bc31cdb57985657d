use crate::{
  context::ThreadnestContext,
  thread::{CreateReply, ThreadResponse},
};
use threadnest_db_schema::source::thread::{Thread, ThreadInsertForm};
use threadnest_db_views::structs::ThreadView;
use threadnest_utils::error::{ErrorType, ThreadnestErrorExt, ThreadnestResult};

#[tracing::instrument(skip(context))]
pub async fn create_reply(
  data: CreateReply,
  context: &ThreadnestContext,
) -> ThreadnestResult<ThreadResponse> {
  let form = ThreadInsertForm::new(data.content, data.creator_id);

  // The parent check and the insert share a transaction, so a vanished
  // parent surfaces as NotFound rather than an orphaned row.
  let reply = match Thread::create_reply(&mut context.pool(), data.parent_id, &form).await {
    Err(diesel::NotFound) => return Err(ErrorType::NotFound.into()),
    other => other.with_error_type(ErrorType::CouldntCreateReply)?,
  };

  let thread_view = ThreadView::read(&mut context.pool(), reply.id)
    .await?
    .ok_or(ErrorType::CouldntCreateReply)?;

  Ok(ThreadResponse { thread_view })
}
