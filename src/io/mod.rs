/*!
# IO

Utilities for reading graphs from files.

## Input Formats

Currently supported input formats:
- **EdgeList**: A header `n m directed weighted` followed by the edges `u v [weight]` separated by line breaks.

Writing is covered by [`GraphSnapshot`](crate::snapshot::GraphSnapshot) which exports a graph as JSON.

## Traits

To generalize over reading:
- [`GraphReader`] is implemented by readers for a specific format,
- [`GraphRead`] is the shorthand on graphs using the default reader settings.
*/

pub mod edge_list;

use std::{
    fs::File,
    io::{BufRead, BufReader, Result},
    path::Path,
};

pub use edge_list::*;

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered reader.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let Some(token) = $iterator.next() else {
            return Err(io_error!(
                ErrorKind::InvalidData,
                format!("Premature end of line when parsing {}.", $name)
            ));
        };

        let Ok(parsed) = token.parse() else {
            return Err(io_error!(
                ErrorKind::InvalidData,
                format!("Invalid value {token:?} found. Cannot parse {}.", $name)
            ));
        };

        parsed
    }};
}

use io_error;
use parse_next_value;
use raise_error_unless;
