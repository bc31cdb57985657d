use threadnest_db_schema::utils::{build_db_pool_for_tests, ActualDbPool, DbPool};

/// The handle every operation borrows its database access from. The pool is
/// built once at startup (`build_db_pool`) and injected here; dropping the
/// context tears the pool down.
#[derive(Clone)]
pub struct ThreadnestContext {
  pool: ActualDbPool,
}

impl ThreadnestContext {
  pub fn create(pool: ActualDbPool) -> Self {
    ThreadnestContext { pool }
  }

  pub fn pool(&self) -> DbPool<'_> {
    DbPool::Pool(&self.pool)
  }

  pub async fn init_test_context() -> Self {
    Self::create(build_db_pool_for_tests().await)
  }
}
