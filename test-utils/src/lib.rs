//! Valorboard Test Utils
//!
//! Provides shared testing utilities for the valorboard bot. This crate offers a builder
//! pattern for creating test contexts backed by a temporary directory, JSON fixtures for
//! valor documents, and factories for Serenity API objects.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment owning a temporary directory and file paths
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn loads_seeded_points() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_points(serde_json::json!({ "1": 10 }))
//!         .build()?;
//!
//!     let store = PointStore::load(&test.points_path).await;
//!     // Perform store operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod fixture;
pub mod serenity;
