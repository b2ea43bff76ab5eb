//! randpic - random redirect service and CDN gallery indexer
//!
//! Two independent tools sharing one crate:
//! - `randpic`: a single-route HTTP service that redirects each visitor to a
//!   URL drawn from a newline-delimited list file, with mobile/desktop list
//!   selection and optional JSON and raw-proxy output modes.
//! - `genindex`: a one-shot generator that scans a directory tree and writes
//!   an `index.html` gallery page linking every image and video to its CDN
//!   URL.
//!
//! # Architecture
//! - `config`: configuration loading and shared application state
//! - `server`: TCP accept loop, connection serving, signal handling
//! - `handler`: request routing and the selection endpoint
//! - `sources`: URL list loading and index selection
//! - `http`: response builders, cache policies, MIME lookup
//! - `logger`: access and error logging
//! - `index`: the gallery generator

pub mod config;
pub mod handler;
pub mod http;
pub mod index;
pub mod logger;
pub mod server;
pub mod sources;
