pub mod errors;
pub mod listing;
pub mod package;
pub mod rank;
pub mod service_state;

pub use errors::Error;
pub use listing::{ParsedListing, parse_listing, parse_listing_line};
pub use package::{ActionOutcome, AggregateResult, PackageClass, PackageRecord, StatusCategory};
pub use rank::{build_records, classify, classify_and_rank, rank};
pub use service_state::{ParsedServiceStates, ServiceStateMap, parse_service_states};
