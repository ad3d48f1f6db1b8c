//! Bot backend and business logic.
//!
//! # Architecture
//!
//! The bot follows a layered architecture with clear separation of concerns:
//!
//! - **Bot Layer** (`bot/`) - Serenity client, event handlers and slash commands
//! - **Service Layer** (`service/`) - Valor, rank and backup business logic
//! - **Data Layer** (`data/`) - In-memory point store backed by a JSON document
//! - **Model Layer** (`model/`) - Platform-neutral domain models and rank tables
//! - **Error Layer** (`error/`) - Application error types
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **State** (`state`) - Shared state handed to the event handler
//! - **Startup** (`startup`) - Store loading and keep-alive server
//! - **Router** (`router`) - Axum keep-alive route
//! - **Scheduler** (`scheduler/`) - Cron job posting ledger backups
//!
//! # Command Flow
//!
//! 1. **Bot** receives a slash command interaction and checks authorization
//! 2. **Bot** converts Serenity objects to domain models
//! 3. **Service** validates input and updates the point store / guild roles
//! 4. **Bot** sends the reply text back as the interaction response

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
