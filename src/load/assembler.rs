//! Composition of schema hops into one chained `MATCH ... RETURN` fragment.
//!
//! Hop `d` binds path `p{d}` from anchor `v{d}` (plain `v` for the first hop)
//! to anchor `v{d+1}`, so consecutive segments share an anchor and the whole
//! traversal is one connected pattern:
//!
//! ```text
//! MATCH p0=(n)-[:`A`|:`B`*0..]-(n1) MATCH p1=(n1)-[:`C`*0..]-(n2) RETURN p0,p1
//! ```
//!
//! Each segment uses a `*0..` range so that instances whose real data is
//! shallower than the schema still match the full chain.

use std::fmt::Write as _;

use crate::types::Hop;

/// Accumulates pattern segments for one root variable.
#[derive(Debug, Clone)]
pub struct ClauseAssembler {
    variable: String,
    clause: String,
    hops: u32,
}

impl ClauseAssembler {
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            clause: String::new(),
            hops: 0,
        }
    }

    /// Number of segments appended so far.
    pub fn hops(&self) -> u32 {
        self.hops
    }

    /// Append the segment for `hop`.
    pub fn push_hop(&mut self, hop: &Hop) {
        let alternatives = hop
            .types
            .iter()
            .map(|t| type_pattern(t))
            .collect::<Vec<_>>()
            .join("|");

        if !self.clause.is_empty() {
            self.clause.push(' ');
        }
        let _ = write!(
            self.clause,
            "MATCH p{d}=({left})-[{alternatives}*0..]-({right})",
            d = hop.depth,
            left = self.anchor(hop.depth),
            right = self.anchor(hop.depth + 1),
        );
        self.hops += 1;
    }

    /// Append the projection and return the finished fragment.
    pub fn finish(self) -> String {
        let projection = if self.hops == 0 {
            format!("RETURN {}", self.variable)
        } else {
            let paths = (0..self.hops)
                .map(|i| format!("p{i}"))
                .collect::<Vec<_>>()
                .join(",");
            format!("RETURN {paths}")
        };

        if self.clause.is_empty() {
            projection
        } else {
            format!("{} {}", self.clause, projection)
        }
    }

    fn anchor(&self, depth: u32) -> String {
        if depth == 0 {
            self.variable.clone()
        } else {
            format!("{}{}", self.variable, depth)
        }
    }
}

/// A relationship type restriction, backtick quoted.
pub fn type_pattern(rel_type: &str) -> String {
    format!(":`{rel_type}`")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn hop(depth: u32, types: &[&str]) -> Hop {
        Hop {
            depth,
            types: types.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn no_hops_returns_variable() {
        assert_eq!(ClauseAssembler::new("n").finish(), "RETURN n");
    }

    #[test]
    fn single_hop() {
        let mut a = ClauseAssembler::new("n");
        a.push_hop(&hop(0, &["FRIEND_OF", "WORKS_AT"]));
        assert_eq!(
            a.finish(),
            "MATCH p0=(n)-[:`FRIEND_OF`|:`WORKS_AT`*0..]-(n1) RETURN p0"
        );
    }

    #[test]
    fn hops_chain_on_shared_anchors() {
        let mut a = ClauseAssembler::new("m");
        a.push_hop(&hop(0, &["R1"]));
        a.push_hop(&hop(1, &["R2"]));
        a.push_hop(&hop(2, &["R3"]));
        assert_eq!(a.hops(), 3);
        assert_eq!(
            a.finish(),
            "MATCH p0=(m)-[:`R1`*0..]-(m1) \
             MATCH p1=(m1)-[:`R2`*0..]-(m2) \
             MATCH p2=(m2)-[:`R3`*0..]-(m3) \
             RETURN p0,p1,p2"
        );
    }

    #[test_case("KNOWS", ":`KNOWS`" ; "plain identifier")]
    #[test_case("HAS ROLE", ":`HAS ROLE`" ; "space kept inside quotes")]
    #[test_case("rel-type", ":`rel-type`" ; "dash kept inside quotes")]
    fn type_pattern_quotes_name(input: &str, expected: &str) {
        assert_eq!(type_pattern(input), expected);
    }
}
