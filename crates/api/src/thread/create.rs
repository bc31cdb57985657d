use crate::{
  context::ThreadnestContext,
  thread::{CreateThread, ThreadResponse},
};
use threadnest_db_schema::{
  source::thread::{Thread, ThreadInsertForm},
  traits::Crud,
};
use threadnest_db_views::structs::ThreadView;
use threadnest_utils::error::{ErrorType, ThreadnestErrorExt, ThreadnestResult};

#[tracing::instrument(skip(context))]
pub async fn create_thread(
  data: CreateThread,
  context: &ThreadnestContext,
) -> ThreadnestResult<ThreadResponse> {
  let mut form = ThreadInsertForm::new(data.content, data.creator_id);
  form.community_id = data.community_id;

  let thread = Thread::create(&mut context.pool(), &form)
    .await
    .with_error_type(ErrorType::CouldntCreateThread)?;

  let thread_view = ThreadView::read(&mut context.pool(), thread.id)
    .await?
    .ok_or(ErrorType::CouldntCreateThread)?;

  Ok(ThreadResponse { thread_view })
}
