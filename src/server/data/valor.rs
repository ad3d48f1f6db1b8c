use dioxus_logger::tracing;
use serenity::all::UserId;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::server::{error::store::StoreError, model::valor::ValorLedger};

/// In-memory valor store shared by command handlers and the backup scheduler.
///
/// Cloning is cheap and clones share the same ledger. Read-modify-write operations
/// (`add`, `subtract`) run under a single write guard, so concurrent commands for the
/// same member cannot lose updates.
#[derive(Clone, Default)]
pub struct PointStore {
    ledger: Arc<RwLock<ValorLedger>>,
}

impl PointStore {
    /// Creates a store holding the given ledger.
    pub fn new(ledger: ValorLedger) -> Self {
        Self {
            ledger: Arc::new(RwLock::new(ledger)),
        }
    }

    /// Loads the store from the points document at `path`.
    ///
    /// A missing or malformed document is not fatal: a warning is logged and the store
    /// starts empty.
    ///
    /// # Arguments
    /// - `path` - Location of the canonical points document
    ///
    /// # Returns
    /// - `PointStore` - Store holding the document's entries, or an empty store
    pub async fn load(path: &Path) -> Self {
        match Self::read_document(path).await {
            Ok(ledger) => {
                tracing::info!(
                    "Loaded {} valor records from {}",
                    ledger.len(),
                    path.display()
                );
                Self::new(ledger)
            }
            Err(e) if e.is_missing() => {
                tracing::warn!("No existing data found at {}, starting fresh", path.display());
                Self::default()
            }
            Err(e) => {
                tracing::warn!("{}, starting fresh", e);
                Self::default()
            }
        }
    }

    /// Reads and parses the points document.
    ///
    /// # Returns
    /// - `Ok(ValorLedger)` - Parsed ledger in document order
    /// - `Err(StoreError::Io)` - File could not be read
    /// - `Err(StoreError::Json)` - File is not an object of non-negative integers
    pub async fn read_document(path: &Path) -> Result<ValorLedger, StoreError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| StoreError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        serde_json::from_str(&raw).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Stored valor for a member, or 0 if absent.
    pub async fn get(&self, member: UserId) -> u64 {
        self.ledger.read().await.get(&ValorLedger::key(member))
    }

    /// Overwrites a member's valor, creating the entry if absent.
    pub async fn set(&self, member: UserId, amount: u64) {
        self.ledger
            .write()
            .await
            .set(&ValorLedger::key(member), amount);
    }

    /// Adds to a member's valor and returns the new total.
    ///
    /// Saturates at `u64::MAX`.
    pub async fn add(&self, member: UserId, amount: u64) -> u64 {
        let key = ValorLedger::key(member);
        let mut ledger = self.ledger.write().await;
        let total = ledger.get(&key).saturating_add(amount);
        ledger.set(&key, total);
        total
    }

    /// Subtracts from a member's valor, clamping at zero, and returns the new total.
    pub async fn subtract(&self, member: UserId, amount: u64) -> u64 {
        let key = ValorLedger::key(member);
        let mut ledger = self.ledger.write().await;
        let total = ledger.get(&key).saturating_sub(amount);
        ledger.set(&key, total);
        total
    }

    /// Immutable copy of the current ledger.
    pub async fn snapshot(&self) -> ValorLedger {
        self.ledger.read().await.clone()
    }
}
