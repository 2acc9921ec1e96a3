//! Wire contracts shared between the admin console and the NSRS REST API.
//!
//! Everything here is plain serde data: the response envelope, page data,
//! pagination and query parameters, plus the domain records the list pages
//! display.

pub mod domain;
pub mod shared;
pub mod system;
