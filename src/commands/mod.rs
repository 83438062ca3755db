//! Command implementations
//!
//! Every user-facing command is a porcelain workflow over the areas: the
//! staging index and status engine are local, everything touching objects and
//! refs is delegated through the object store.

pub mod porcelain;
