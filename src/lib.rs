// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![allow(dead_code)]

//! # docscope
//!
//! A serializer for extracted C/C++ documentation metadata. `docscope` takes the in-memory
//! graph produced by a documentation extractor (namespaces, records, functions, enums,
//! typedefs, their templates and their parsed doc comments) and writes it into a compact,
//! self-describing binary container made of nested, length-prefixed blocks of records.
//!
//! ## Features
//!
//! - **Self-describing output** - Every container starts with a format-info block naming
//!   each block kind and record kind and defining the layout of every record
//! - **Skippable blocks** - Each block carries its byte length, so readers can skip what
//!   they do not understand
//! - **Deterministic** - The same input always produces the same bytes
//! - **Parallel batches** - Independent units are serialized on a `rayon` pool
//!
//! ## Quick Start
//!
//! ```rust
//! use docscope::prelude::*;
//!
//! let namespace = NamespaceInfo {
//!     info: Info::new(SymbolId::from_usr("c:@N@geometry"), "geometry"),
//!     ..NamespaceInfo::default()
//! };
//!
//! let mut writer = BitcodeWriter::new(Vec::new())?;
//! writer.dispatch_info(&InfoNode::Namespace(namespace))?;
//! let bytes = writer.finish()?;
//!
//! assert_eq!(&bytes[..4], b"DOCS");
//! # Ok::<(), docscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`metadata`] - The metadata graph: node types, references, templates, doc comments
//! - [`bitcode`] - The container encoding and the writer that lays the graph out in it
//!
//! Byte-level helpers live in the crate-internal `file` module.
//!
//! ## Error Handling
//!
//! Fallible operations return [`Result`]. Only sink failures are reported as errors; a
//! writer whose sink failed is poisoned and rejects further use with
//! [`Error::StreamPoisoned`]. Inputs that break the writer's contract, such as a record node
//! without its symbol id, panic.

#[macro_use]
pub(crate) mod error;
pub(crate) mod file;

/// Shared functionality which is used in unit- and integration-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use docscope::prelude::*;
///
/// let mut writer = BitcodeWriter::new(Vec::new())?;
/// assert_eq!(writer.depth(), 0);
/// # Ok::<(), docscope::Error>(())
/// ```
pub mod prelude;

/// The container encoding and the metadata writer.
///
/// # Key Components
///
/// - [`bitcode::BitcodeWriter`] - Writes metadata nodes as top-level blocks
/// - [`bitcode::WriteBlock`] - The layout of one node kind
/// - [`bitcode::BlockId`] / [`bitcode::RecordId`] - The catalog of block and record kinds
/// - [`bitcode::batch`] - Parallel serialization of independent units
pub mod bitcode;

/// The documentation metadata graph.
///
/// # Key Components
///
/// - [`metadata::InfoNode`] - A top-level node of any kind
/// - [`metadata::Reference`] - A typed pointer to another symbol
/// - [`metadata::SymbolId`] - The 20-byte identity of a symbol
/// - [`metadata::javadoc`] - The parsed doc comment tree
pub mod metadata;

/// `docscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `docscope` Error type
///
/// # Examples
///
/// ```rust
/// use docscope::{BitcodeWriter, Error};
///
/// match BitcodeWriter::new(Vec::new()) {
///     Ok(_) => println!("preamble written"),
///     Err(Error::Io(error)) => println!("sink failed: {error}"),
///     Err(error) => println!("error: {error}"),
/// }
/// ```
pub use error::Error;

/// Main entry point for writing containers.
///
/// See [`bitcode::BitcodeWriter`] for details.
pub use bitcode::BitcodeWriter;
