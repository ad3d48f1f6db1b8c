//! Cron jobs.
//!
//! - `backup` - minute-by-minute snapshot of the valor ledger to the backup channel

pub mod backup;
