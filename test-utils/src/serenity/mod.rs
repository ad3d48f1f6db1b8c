//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity objects by deserializing JSON, simulating
//! what Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_role;
//!
//! let admiral = create_test_role(111111111, "Admiral", 0xFF0000, 10);
//! let seaman = create_test_role(222222222, "Able Seaman", 0, 1);
//! ```
//!
//! # Available Factories
//!
//! - `role::create_test_role` - Create Serenity Role objects
//! - `role::create_test_roles` - Create one Role per name with sequential IDs

pub mod role;

pub use role::{create_test_role, create_test_roles};
