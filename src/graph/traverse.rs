// src/graph/traverse.rs

//! Transitive upstream / downstream closures.

use std::collections::BTreeSet;

use petgraph::visit::{Dfs, Reversed};

use crate::errors::Result;
use crate::graph::AssetGraph;

impl AssetGraph {
    /// Every asset that (transitively) depends on `name`.
    ///
    /// `name` itself is not part of the result.
    pub fn downstream_of(&self, name: &str) -> Result<BTreeSet<&str>> {
        let start = self.index_of(name)?;
        let mut dfs = Dfs::new(&self.graph, start);
        let mut out = BTreeSet::new();

        while let Some(ix) = dfs.next(&self.graph) {
            if ix != start {
                out.insert(self.name_of(ix));
            }
        }

        Ok(out)
    }

    /// Every asset `name` (transitively) depends on.
    ///
    /// `name` itself is not part of the result.
    pub fn upstream_of(&self, name: &str) -> Result<BTreeSet<&str>> {
        let start = self.index_of(name)?;
        let reversed = Reversed(&self.graph);
        let mut dfs = Dfs::new(reversed, start);
        let mut out = BTreeSet::new();

        while let Some(ix) = dfs.next(reversed) {
            if ix != start {
                out.insert(self.name_of(ix));
            }
        }

        Ok(out)
    }
}
