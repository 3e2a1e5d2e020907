//! Integration tests for Layer 1: Storage
//!
//! Tests for rule records, snapshot stores, and collaborator catalogs.

mod catalogs;
