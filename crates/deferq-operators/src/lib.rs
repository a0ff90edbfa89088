#![forbid(unsafe_code)]
//! deferq-operators: pull-based sequence-query operators
//! (select/filter/group-by/order-by + materializers).
//!
//! Design intent:
//! - Every lazy operator is a plain iterator adapter; nothing is pulled until
//!   the consumer walks the chain or a materializer drains it.
//! - Eager surfaces (`order_by`, `to_list`, `to_dictionary`) fully consume
//!   their source before returning.
//! - Single-threaded by design; a grouping shares its key function with the
//!   engine that emitted it over `Rc`, so grouping types are not `Send`.

pub mod collect;
pub mod filter;
pub mod group;
pub mod select;
pub mod sort;
pub mod traits;

pub use filter::FilterBy;
pub use group::{GroupBy, GroupMembers, Grouping};
pub use select::Select;
pub use sort::Ordered;
pub use traits::Query;
