#![forbid(unsafe_code)]
//! deferq: deferred, pull-based sequence-query operators.
//!
//! Facade over the workspace crates. Most callers only need the
//! [`prelude`]:
//!
//! ```
//! use deferq::prelude::*;
//!
//! let squares = (0..10).select(|x| x * x).to_list();
//! assert_eq!(squares, vec![0, 1, 4, 9, 16, 25, 36, 49, 64, 81]);
//! ```

pub use deferq_core::{Error, Result};
pub use deferq_operators::{FilterBy, GroupBy, GroupMembers, Grouping, Ordered, Query, Select};

pub mod prelude {
    pub use deferq_core::{Error, Result};
    pub use deferq_operators::{Grouping, Ordered, Query};
}
