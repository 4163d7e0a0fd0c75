//! Workspace-level integration tests for tagcalc.
