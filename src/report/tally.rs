// uatally - GPL-3.0-or-later
// This file is part of uatally.
//
// Copyright (C) 2026 Daniel Freiermuth
//
// uatally is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// uatally is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with uatally.  If not, see <https://www.gnu.org/licenses/>.

//! Frequency counting for report sections.

use indexmap::IndexMap;
use std::hash::Hash;

/// Counts occurrences of keys, remembering the order in which keys first appeared
#[derive(Debug, Clone)]
pub struct Tally<K> {
    counts: IndexMap<K, usize>,
}

impl<K> Default for Tally<K> {
    fn default() -> Self {
        Self {
            counts: IndexMap::new(),
        }
    }
}

impl<K: Hash + Eq> Tally<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// All entries by descending count. Equal counts keep first-seen order.
    #[must_use]
    pub fn ranked(self) -> Vec<(K, usize)> {
        let mut entries: Vec<(K, usize)> = self.counts.into_iter().collect();
        // stable sort keeps insertion order among ties
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    /// The `n` most frequent entries
    #[must_use]
    pub fn top(self, n: usize) -> Vec<(K, usize)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}
