//! Report assembly
//!
//! Offline glue between an upstream player document and the stats engines.

pub mod upstream;
pub mod resources;
pub mod response;

pub use upstream::{PlayerPayload, normalize_uuid, UNKNOWN_USERNAME};
pub use resources::{Resources, SlumberWallet};
pub use response::{BedwarsReport, Envelope, ErrorBody, build_report};
