//! Summary module - the aggregation engine and period resolver. Derives
//! monthly and historical financial summaries from raw ledger entries.

pub mod period;

mod summary_model;
mod summary_repository;
mod summary_service;
mod summary_traits;

#[cfg(test)]
mod summary_service_tests;

pub use period::{month_bounds, parse_date, resolve_period, PeriodType, ResolvedPeriod};
pub use summary_model::{HistoricalSummary, MonthlySummary};
pub use summary_repository::SummaryRepository;
pub use summary_service::SummaryService;
pub use summary_traits::{SummaryRepositoryTrait, SummaryServiceTrait};
