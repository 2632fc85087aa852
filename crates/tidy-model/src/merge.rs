//! Alias merging for categorical columns.
//!
//! A [`MergeMap`] records which raw values collapse into which canonical
//! term. Resolution is deliberately single-hop: when a merge target later
//! becomes the key of another merge, lookups do not chase the chain. This
//! keeps resolution order-independent of registration history and matches
//! the product's established behavior.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TidyError};

/// Per-column mapping from raw value to canonical (merged) value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MergeMap {
    entries: BTreeMap<String, String>,
}

impl MergeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register a merge group: every term maps to `target` afterwards.
    /// Returns the number of distinct terms mapped.
    ///
    /// Requires at least two distinct terms; otherwise the map is left
    /// untouched and [`TidyError::InvalidMergeRequest`] is returned. The
    /// target may itself appear among the terms (a self-mapping resolves to
    /// itself). Re-registering a term overwrites its previous mapping.
    pub fn register(&mut self, terms: &[String], target: &str) -> Result<usize> {
        let distinct: BTreeSet<&str> = terms.iter().map(String::as_str).collect();
        let mapped = distinct.len();
        if mapped < 2 {
            return Err(TidyError::InvalidMergeRequest { distinct: mapped });
        }
        for term in distinct {
            self.entries.insert(term.to_string(), target.to_string());
        }
        Ok(mapped)
    }

    /// Resolve a raw value to its canonical form.
    ///
    /// Returns the mapped value when one exists, otherwise the input
    /// unchanged. Only one indirection is applied.
    pub fn resolve<'a>(&'a self, raw: &'a str) -> &'a str {
        self.entries.get(raw).map_or(raw, String::as_str)
    }

    /// Iterate over (raw, canonical) pairs in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(raw, canonical)| (raw.as_str(), canonical.as_str()))
    }
}
