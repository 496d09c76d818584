//! The reconciliation pass.
//!
//! This module provides:
//! - The orchestrator ([`Reconciler`])
//! - Terminal outcomes of a pass ([`Outcome`])
//! - Error types ([`SyncError`])

mod reconciler;


pub use reconciler::{Outcome, Reconciler, SyncError};
