pub mod record_type;
pub mod records;

pub use record_type::RecordType;
pub use records::{AAAARecord, ARecord, CNAMERecord, MXRecord, NSRecord, TXTRecord};
