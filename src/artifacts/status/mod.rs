//! Working tree status reconciliation
//!
//! Compares the HEAD tree, the staging index and the live working tree, and
//! buckets every difference into one of six categories across two independent
//! axes: staged (index vs HEAD) and unstaged (working tree vs index).

pub mod file_change;
pub mod inspector;
pub mod status_info;
