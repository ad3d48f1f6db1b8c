//! Storage layer.
//!
//! Valor scores live in memory and are backed by a single JSON document on disk. The
//! document is read once at startup; afterwards only timestamped backup copies are
//! written.

pub mod valor;

pub use valor::PointStore;

#[cfg(test)]
mod test;
