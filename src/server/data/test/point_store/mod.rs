use crate::server::{data::PointStore, model::valor::ValorLedger};
use serenity::all::UserId;
use test_utils::{builder::TestBuilder, error::TestError, fixture};

mod load;
mod mutate;
mod snapshot;
