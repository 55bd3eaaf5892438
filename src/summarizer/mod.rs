//! Summarization components
//!
//! Provides SumBasic extractive summarization: a decaying word distribution,
//! the greedy ranking loop, and top-N selection in document order.

pub mod distribution;
pub mod selector;
pub mod sum_basic;
