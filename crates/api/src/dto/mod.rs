pub mod batch;
pub mod error;
pub mod index;
pub mod search;

pub use batch::BatchIpRequest;
pub use error::{ApiError, ErrorResponse};
pub use index::{EndpointInfo, ServiceIndex};
pub use search::SearchParams;
