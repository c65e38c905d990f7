pub mod forwarding;
pub mod reverse;
pub mod transport;

pub use forwarding::ForwardingRecordSource;
pub use reverse::PtrReverseResolver;
pub use transport::{DnsTransport, UdpTransport};
