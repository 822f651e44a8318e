//! Breadth-first reachability over the schema graph.
//!
//! [`TypeReachabilityCursor`] walks node types, not data. Each step yields a
//! [`Hop`]: the hop depth plus the sorted, distinct relationship type names
//! reachable at that depth. A node type that has acted as the source of a
//! hop is recorded as visited and never contributes its relationships again,
//! which bounds the walk on cyclic schemas even when the requested depth is
//! unbounded.

use std::collections::{BTreeSet, HashSet};
use std::iter::FusedIterator;

use crate::error::Result;
use crate::graph::schema::{NodeType, RelationshipType, Schema};
use crate::types::{depth_limit, Hop, NodeTypeId, RelTypeId};

// ---------------------------------------------------------------------------
// TypeReachabilityCursor
// ---------------------------------------------------------------------------

/// Hop-by-hop cursor over the relationship types reachable from a root type.
///
/// Yields `Err` at most once, when a handle in the frontier does not resolve
/// against the schema; the cursor is exhausted afterwards.
pub struct TypeReachabilityCursor<'s> {
    schema: &'s Schema,
    max_depth: Option<u32>,
    frontier: Vec<RelTypeId>,
    visited: HashSet<NodeTypeId>,
    depth: u32,
    failed: bool,
}

impl<'s> TypeReachabilityCursor<'s> {
    /// Start at `root`. A negative `max_depth` means no hop limit.
    pub fn new(schema: &'s Schema, root: &NodeType, max_depth: i32) -> Self {
        Self {
            schema,
            max_depth: depth_limit(max_depth),
            frontier: root.relationship_ids().collect(),
            visited: HashSet::new(),
            depth: 0,
            failed: false,
        }
    }

    /// Number of hops produced so far.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Whether another hop is available.
    pub fn has_next(&self) -> bool {
        !self.failed
            && !self.frontier.is_empty()
            && self.max_depth.map_or(true, |max| self.depth < max)
    }

    /// Node types that have already contributed their relationships, sorted.
    pub fn visited(&self) -> Vec<NodeTypeId> {
        let mut visited: Vec<NodeTypeId> = self.visited.iter().copied().collect();
        visited.sort_unstable();
        visited
    }

    fn advance(&mut self) -> Result<Hop> {
        let rels: Vec<&RelationshipType> = self
            .frontier
            .iter()
            .map(|id| self.schema.relationship(*id))
            .collect::<Result<_>>()?;

        let types: Vec<String> = rels
            .iter()
            .map(|r| r.rel_type())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_owned)
            .collect();

        self.visited.extend(rels.iter().map(|r| r.start()));

        // Endpoints are collected in handle order so the next frontier does
        // not depend on hash iteration.
        let endpoints: BTreeSet<NodeTypeId> = rels
            .iter()
            .filter_map(|r| r.other(r.start()))
            .filter(|n| !self.visited.contains(n))
            .collect();

        let mut next: BTreeSet<RelTypeId> = BTreeSet::new();
        for id in endpoints {
            next.extend(self.schema.node(id)?.relationship_ids());
        }
        self.frontier = next.into_iter().collect();

        let hop = Hop {
            depth: self.depth,
            types,
        };
        self.depth += 1;

        tracing::debug!(
            depth = hop.depth,
            types = ?hop.types,
            next_frontier = self.frontier.len(),
            "schema hop"
        );
        Ok(hop)
    }
}

impl Iterator for TypeReachabilityCursor<'_> {
    type Item = Result<Hop>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }
        match self.advance() {
            Ok(hop) => Some(Ok(hop)),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for TypeReachabilityCursor<'_> {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
