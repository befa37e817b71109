//! Journal module - income and expense events with trailing-window sums.

mod journal_model;
mod journal_repository;
mod journal_service;
mod journal_traits;

#[cfg(test)]
mod journal_model_tests;

// Re-export the main public entry points and types
pub use journal_model::{
    CashFlowEntry, CashFlowEvent, CashFlowEventUpdate, CashFlowKind, CashFlowWindow,
    ExpenseEventDB, IncomeEventDB, MonthlyCashFlow, NewCashFlowEvent, DEFAULT_FREQUENCY,
};
pub use journal_repository::JournalRepository;
pub use journal_service::JournalService;
pub use journal_traits::{JournalRepositoryTrait, JournalServiceTrait};
