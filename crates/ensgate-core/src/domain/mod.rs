//! Domain types for name resolution.
//!
//! Everything here is pure: no I/O, no ports. Values are created per request
//! and never mutated after construction.

mod lookup;
mod name;
mod redirect;
mod selector;

pub use lookup::{Absence, Lookup};
pub use name::{Name, Node, REVERSE_SUFFIX, WireName};
pub use redirect::{CallOutcome, GatewayResponse, RedirectDescriptor, classify, decode_revert};
pub use selector::{ADDR_INTERFACE, EXTENDED_RESOLVER_INTERFACE, NAME_INTERFACE, selector};
