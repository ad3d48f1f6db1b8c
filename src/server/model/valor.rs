//! Valor ledger domain models.
//!
//! The ledger is the in-memory form of the points document: a JSON object mapping
//! stringified member IDs to non-negative integers. Entry order is the document's
//! order, with new members appended at the end, and that order is what the
//! leaderboard renders.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serenity::all::UserId;
use std::collections::HashMap;
use std::fmt;

/// A single member's valor score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberScore {
    /// Stringified Discord user ID, the key used in the points document.
    pub member_id: String,
    /// Current valor, never negative.
    pub valor: u64,
}

/// Ordered mapping of member ID to valor.
///
/// Serializes as a JSON object. Deserialization rejects anything that is not an
/// object of non-negative integers, and a repeated key keeps its first position
/// with the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValorLedger {
    entries: Vec<MemberScore>,
    index: HashMap<String, usize>,
}

impl ValorLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key used for a Discord user in the points document.
    pub fn key(member: UserId) -> String {
        member.get().to_string()
    }

    /// Stored valor for a key, or 0 if the member has no entry.
    pub fn get(&self, member_id: &str) -> u64 {
        self.index
            .get(member_id)
            .map(|&i| self.entries[i].valor)
            .unwrap_or(0)
    }

    /// Overwrites the valor for a key, appending a new entry if absent.
    pub fn set(&mut self, member_id: &str, valor: u64) {
        match self.index.get(member_id) {
            Some(&i) => self.entries[i].valor = valor,
            None => {
                self.index.insert(member_id.to_string(), self.entries.len());
                self.entries.push(MemberScore {
                    member_id: member_id.to_string(),
                    valor,
                });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ledger order.
    pub fn entries(&self) -> &[MemberScore] {
        &self.entries
    }
}

impl FromIterator<(String, u64)> for ValorLedger {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut ledger = Self::new();
        for (member_id, valor) in iter {
            ledger.set(&member_id, valor);
        }
        ledger
    }
}

impl Serialize for ValorLedger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|e| (&e.member_id, e.valor)))
    }
}

struct LedgerVisitor;

impl<'de> Visitor<'de> for LedgerVisitor {
    type Value = ValorLedger;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of member IDs to non-negative integers")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut ledger = ValorLedger::new();
        while let Some((member_id, valor)) = access.next_entry::<String, u64>()? {
            ledger.set(&member_id, valor);
        }
        Ok(ledger)
    }
}

impl<'de> Deserialize<'de> for ValorLedger {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LedgerVisitor)
    }
}

/// Result of a successful add or remove command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValorChange {
    Added {
        display_name: String,
        amount: u64,
        total: u64,
    },
    Removed {
        display_name: String,
        amount: u64,
        total: u64,
    },
}

impl ValorChange {
    /// Valor held after the change.
    pub fn total(&self) -> u64 {
        match self {
            Self::Added { total, .. } | Self::Removed { total, .. } => *total,
        }
    }
}

impl fmt::Display for ValorChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added {
                display_name,
                amount,
                total,
            } => write!(f, "Added {} Valor to {}. Total: {}", amount, display_name, total),
            Self::Removed {
                display_name,
                amount,
                total,
            } => write!(
                f,
                "Removed {} Valor from {}. Total: {}",
                amount, display_name, total
            ),
        }
    }
}
