//! Transaction boundary
//!
//! Service operations run inside a transaction obtained from a
//! `TransactionManager`. The in-memory store has no real transactional
//! backend, so `NoopTransactionManager` passes everything through; the seam
//! stays in place for a backing store that needs it.

use std::future::Future;

use async_trait::async_trait;

use super::groups::StoreError;

#[async_trait]
pub trait Transaction: Send {
    async fn commit(self: Box<Self>) -> Result<(), StoreError>;

    async fn rollback(self: Box<Self>) -> Result<(), StoreError>;
}

#[async_trait]
pub trait TransactionManager: Send + Sync {
    async fn begin(&self) -> Result<Box<dyn Transaction>, StoreError>;
}

/// Pass-through transaction for stores without transactional semantics
pub struct NoopTransaction;

#[async_trait]
impl Transaction for NoopTransaction {
    async fn commit(self: Box<Self>) -> Result<(), StoreError> {
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), StoreError> {
        Ok(())
    }
}

pub struct NoopTransactionManager;

#[async_trait]
impl TransactionManager for NoopTransactionManager {
    async fn begin(&self) -> Result<Box<dyn Transaction>, StoreError> {
        Ok(Box::new(NoopTransaction))
    }
}

/// Run `f` inside a transaction: commit on success, roll back on error.
///
/// A rollback failure is logged but the original error is the one returned.
pub async fn with_transaction<T, E, F, Fut>(manager: &dyn TransactionManager, f: F) -> Result<T, E>
where
    E: From<StoreError>,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let tx = manager.begin().await?;

    match f().await {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!(error = %rollback_err, "Transaction rollback failed");
            }
            Err(err)
        }
    }
}
