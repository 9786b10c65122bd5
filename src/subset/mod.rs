// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Subset representations shared by the strategies and the search engine.

pub mod index_set;

pub use index_set::IndexSet;
