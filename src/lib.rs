//! cypher-ogm: schema-driven Cypher generation for object-graph mapping.
//!
//! Builds the clause that loads an entity together with every related entity
//! the schema says is reachable within a given depth, plus complete lookup
//! statements around it.
//!
//! ```
//! use std::sync::Arc;
//! use cypher_ogm::graph::Schema;
//! use cypher_ogm::load::{LoadClauseBuilder, SchemaNodeLoadClauseBuilder};
//!
//! let mut b = Schema::builder();
//! b.add_node("Person").unwrap();
//! b.add_node("Company").unwrap();
//! b.relate("Person", "FRIEND_OF", "Person").unwrap();
//! b.relate("Person", "WORKS_AT", "Company").unwrap();
//!
//! let builder = SchemaNodeLoadClauseBuilder::new(Arc::new(b.build()));
//! assert_eq!(
//!     builder.build("n", "Person", -1).unwrap(),
//!     "MATCH p0=(n)-[:`FRIEND_OF`|:`WORKS_AT`*0..]-(n1) RETURN p0"
//! );
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod load;
pub mod observability;
pub mod types;

pub use error::{OgmError, Result};
