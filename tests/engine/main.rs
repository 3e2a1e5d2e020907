//! Integration tests for Layer 2: Engine
//!
//! Tests for rule loading, quest finalization, evaluation, and spell patches.

mod loading;
mod patches;
