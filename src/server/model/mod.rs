//! Domain models shared by the data, service and bot layers.
//!
//! Models here are platform-neutral: Serenity objects are converted into them at the
//! bot boundary so business logic can be exercised without a Discord connection.

pub mod backup;
pub mod member;
pub mod rank;
pub mod valor;
