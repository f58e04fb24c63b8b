use std::io;
use std::time::Duration;

use thiserror::Error;
use tokio::net::UdpSocket;
use tokio::time::timeout;
use tracing::debug;

/// How long to wait on the connect and receive steps.
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Replies are read into a buffer of this size; anything longer is
/// truncated, which is fine since only the length threshold matters.
const RESPONSE_BUFFER_LEN: usize = 1024;

/// Replies shorter than this are not considered a real status response.
const MIN_RESPONSE_LEN: usize = 10;

/// Classification of a reply that did arrive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// At least [`MIN_RESPONSE_LEN`] bytes; carries the raw payload.
    Responsive(Vec<u8>),
    /// A datagram arrived but was too short to be a status response.
    Short(usize),
    /// A zero-length datagram.
    Empty,
}

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Request timed out")]
    ConnectTimedOut,
    #[error("Unable to connect")]
    Connect(#[source] io::Error),
    #[error("Unable to receive")]
    ReceiveTimedOut,
    #[error("Unable to receive")]
    Receive(#[source] io::Error),
}

/// Executes a single query exchange: one datagram out, at most one in.
pub struct Prober {
    timeout: Duration,
}

impl Prober {
    pub fn new() -> Self {
        Self::with_timeout(QUERY_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Send `signature` to `address:port` and classify whatever comes
    /// back. The socket lives only for the duration of the call; there
    /// are no retries and no fallback signatures.
    pub async fn query(
        &self,
        address: &str,
        port: u16,
        signature: &[u8],
    ) -> Result<Verdict, ProbeError> {
        let socket = UdpSocket::bind("0.0.0.0:0")
            .await
            .map_err(ProbeError::Connect)?;

        match timeout(self.timeout, socket.connect((address, port))).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(ProbeError::Connect(e)),
            Err(_) => return Err(ProbeError::ConnectTimedOut),
        }

        debug!(address, port, len = signature.len(), "sending status query");
        socket.send(signature).await.map_err(ProbeError::Connect)?;

        let mut buffer = vec![0; RESPONSE_BUFFER_LEN];
        let received = match timeout(self.timeout, socket.recv(&mut buffer)).await {
            Ok(Ok(n)) => n,
            Ok(Err(e)) => return Err(ProbeError::Receive(e)),
            Err(_) => return Err(ProbeError::ReceiveTimedOut),
        };
        buffer.truncate(received);
        debug!(received, "reply received");

        Ok(match received {
            0 => Verdict::Empty,
            n if n < MIN_RESPONSE_LEN => Verdict::Short(n),
            _ => Verdict::Responsive(buffer),
        })
    }
}

impl Default for Prober {
    fn default() -> Self {
        Self::new()
    }
}
