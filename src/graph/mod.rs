//! Schema layer: node/relationship type arena, schema documents, and
//! type-level traversal.

pub mod definition;
pub mod schema;
pub mod traversal;

pub use definition::SchemaDefinition;
pub use schema::{NodeType, RelationshipType, Schema, SchemaBuilder};
pub use traversal::TypeReachabilityCursor;
