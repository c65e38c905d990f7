#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

const TYPE_A: u16 = 1;
const TYPE_MX: u16 = 15;

/// How the mock nameserver answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBehavior {
    /// A → 93.184.216.34, MX → 10 <qname>, anything else → NODATA
    Answer,
    NxDomain,
    ServFail,
    FormErr,
    /// Never replies
    Silent,
}

/// UDP nameserver answering with hand-assembled wire messages.
pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let queries = Arc::new(AtomicUsize::new(0));
        let counter = queries.clone();

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::SeqCst);
                            if let Some(response) = build_response(&buf[..len], behavior) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// End of the question section (after QTYPE and QCLASS) and the QTYPE.
fn question_bounds(query: &[u8]) -> Option<(usize, u16)> {
    let mut pos = 12;
    loop {
        let len = *query.get(pos)? as usize;
        pos += 1;
        if len == 0 {
            break;
        }
        pos += len;
    }
    let qtype = u16::from_be_bytes([*query.get(pos)?, *query.get(pos + 1)?]);
    Some((pos + 4, qtype))
}

fn build_response(query: &[u8], behavior: MockBehavior) -> Option<Vec<u8>> {
    if behavior == MockBehavior::Silent || query.len() < 12 {
        return None;
    }
    let (question_end, qtype) = question_bounds(query)?;

    let rcode = match behavior {
        MockBehavior::NxDomain => 3,
        MockBehavior::ServFail => 2,
        MockBehavior::FormErr => 1,
        _ => 0,
    };

    let answer: Option<Vec<u8>> = match (behavior, qtype) {
        (MockBehavior::Answer, TYPE_A) => Some(vec![
            0xc0, 0x0c, // Name pointer to question
            0x00, 0x01, // Type A
            0x00, 0x01, // Class IN
            0x00, 0x00, 0x00, 0x3c, // TTL: 60 seconds
            0x00, 0x04, // Data length: 4 bytes
            93, 184, 216, 34,
        ]),
        (MockBehavior::Answer, TYPE_MX) => Some(vec![
            0xc0, 0x0c, // Name pointer to question
            0x00, 0x0f, // Type MX
            0x00, 0x01, // Class IN
            0x00, 0x00, 0x01, 0x2c, // TTL: 300 seconds
            0x00, 0x04, // Data length
            0x00, 0x0a, // Preference 10
            0xc0, 0x0c, // Exchange: pointer to question name
        ]),
        _ => None,
    };

    let mut response = Vec::with_capacity(512);
    response.extend_from_slice(&query[0..2]); // Transaction ID
    response.push(0x81); // QR=1, Opcode=0, AA=0, TC=0, RD=1
    response.push(0x80 | rcode); // RA=1, RCODE
    response.extend_from_slice(&[0x00, 0x01]); // Questions
    response.extend_from_slice(&[0x00, answer.is_some() as u8]); // Answers
    response.extend_from_slice(&[0x00, 0x00]); // Authority
    response.extend_from_slice(&[0x00, 0x00]); // Additional
    response.extend_from_slice(&query[12..question_end]);
    if let Some(answer) = answer {
        response.extend_from_slice(&answer);
    }

    Some(response)
}
