//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes the extraction, spreadsheet, and merge operations as MCP tools so AI
//! assistants can drive a localization round-trip.
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{TrsheetMcpServer, run_server};
