//! Persistence seams for the groups domain

pub mod groups;
pub mod transactions;

pub use groups::{InMemoryStudyGroupStore, StoreError, StudyGroupRepository};
pub use transactions::{
    with_transaction, NoopTransaction, NoopTransactionManager, Transaction, TransactionManager,
};
