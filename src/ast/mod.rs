//! The `ast` module defines the Rinha AST node types.
//!
//! Unlike a typical parser's `ast` module, there is no tree-building
//! logic here: the AST arrives pre-parsed as JSON, and `serde` decodes
//! it directly into these types (see [`node`]).

pub mod node;

pub use node::{BinaryOp, File, Location, Parameter, Term};
