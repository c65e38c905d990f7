use bytes::Bytes;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{RData, Record};
use inforecon_application::ports::DnsAnswer;
use inforecon_domain::DomainError;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    /// Answer records the lookup reports, in message order.
    pub answers: Vec<DnsAnswer>,
}

impl DnsResponse {
    pub fn is_nxdomain(&self) -> bool {
        self.rcode == ResponseCode::NXDomain
    }

    /// Any rcode other than NOERROR and NXDOMAIN: the answer section
    /// cannot be trusted as "no records".
    pub fn is_server_error(&self) -> bool {
        !matches!(self.rcode, ResponseCode::NoError | ResponseCode::NXDomain)
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse_bytes(response_bytes: Bytes) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(&response_bytes).map_err(|e| {
            DomainError::Transport(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.response_code();
        let truncated = message.truncated();
        let answers: Vec<DnsAnswer> = message.answers().iter().filter_map(to_answer).collect();

        debug!(
            rcode = ?rcode,
            answers = answers.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id: message.id(),
            rcode,
            truncated,
            answers,
        })
    }

    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        Self::parse_bytes(Bytes::copy_from_slice(response_bytes))
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}

fn display_name(name: &hickory_proto::rr::Name) -> String {
    name.to_utf8().trim_end_matches('.').to_string()
}

fn to_answer(record: &Record) -> Option<DnsAnswer> {
    let host = display_name(record.name());
    let ttl = record.ttl();

    let answer = match record.data() {
        RData::A(a) => DnsAnswer::A {
            host,
            addr: a.0,
            ttl,
        },
        RData::AAAA(aaaa) => DnsAnswer::AAAA {
            host,
            addr: aaaa.0,
            ttl,
        },
        RData::CNAME(canonical) => DnsAnswer::CNAME {
            host,
            target: display_name(canonical),
            ttl,
        },
        RData::MX(mx) => DnsAnswer::MX {
            exchange: display_name(mx.exchange()),
            preference: mx.preference(),
            ttl,
        },
        RData::NS(ns) => DnsAnswer::NS {
            host,
            nameserver: display_name(ns),
            ttl,
        },
        RData::TXT(txt) => DnsAnswer::TXT {
            host,
            text: txt
                .txt_data()
                .iter()
                .map(|chunk| String::from_utf8_lossy(chunk))
                .collect::<String>(),
            ttl,
        },
        RData::PTR(ptr) => DnsAnswer::PTR {
            host,
            target: display_name(ptr),
            ttl,
        },
        _ => return None,
    };

    Some(answer)
}
