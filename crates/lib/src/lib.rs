//! lumen-lib: Core types and logic for the lumen build-file compiler
//!
//! This crate turns `.build` module descriptions into a validated build order:
//! - `parse`: lexer, parser, AST and descriptor builder for the `.build` DSL
//! - `module`: `ModuleDescriptor` and the aggregated `BuildGraph`
//! - `graph`: dependency graph, cycle detection and topological ordering
//! - `load`: discovery and parallel loading of `.build` files
//! - `diagnostics`: thread-safe collection of user-facing diagnostics
//! - `config`: project root and source directory resolution

pub mod config;
pub mod consts;
pub mod diagnostics;
pub mod graph;
pub mod load;
pub mod module;
pub mod parse;
