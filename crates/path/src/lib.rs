//! Path addressing over plain values and encoded attribute trees.
//!
//! A [`PathIndex`] records every field and list index reachable in a plain
//! value. A [`PathResolver`] validates a [`Path`] against that index, against
//! the plain value itself, or against the value's encoded attribute tree.

mod error;
mod index;
mod path;
mod resolve;

pub use error::PathError;
pub use index::{build_path_index, PathIndex, PathStep};
pub use path::Path;
pub use resolve::{AttributeLookup, PathOptions, PathResolver, DEFAULT_DELIMITER};
