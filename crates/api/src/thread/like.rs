use crate::{
  context::ThreadnestContext,
  thread::{LikeResponse, LikeThread},
};
use threadnest_db_schema::source::thread::ThreadLike;
use threadnest_utils::error::{ErrorType, ThreadnestErrorExt, ThreadnestResult};

/// Flips the like state for this person and thread. The membership read, the
/// write and the count all happen in one transaction, so the returned count
/// is the one this toggle produced.
#[tracing::instrument(skip(context))]
pub async fn like_thread(
  data: LikeThread,
  context: &ThreadnestContext,
) -> ThreadnestResult<LikeResponse> {
  let (liked, like_count) =
    match ThreadLike::toggle(&mut context.pool(), data.thread_id, &data.person_id).await {
      Err(diesel::NotFound) => return Err(ErrorType::NotFound.into()),
      other => other.with_error_type(ErrorType::CouldntLikeThread)?,
    };

  Ok(LikeResponse { liked, like_count })
}
