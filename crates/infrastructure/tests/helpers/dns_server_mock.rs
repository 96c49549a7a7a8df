#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// Stand-in upstream resolver on a loopback port. Records every datagram it
/// receives and, unless silent, answers with a fixed A record.
pub struct MockDnsServer {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<Vec<u8>>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start() -> Result<Self, std::io::Error> {
        Self::spawn(true).await
    }

    /// Receives but never replies.
    pub async fn start_silent() -> Result<Self, std::io::Error> {
        Self::spawn(false).await
    }

    async fn spawn(reply: bool) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let received = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&received);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            let query = buf[..len].to_vec();
                            log.lock().unwrap().push(query.clone());
                            if reply {
                                let response = Self::build_mock_response(&query);
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            received,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn received(&self) -> Vec<Vec<u8>> {
        self.received.lock().unwrap().clone()
    }

    /// The exact bytes this server answers `query` with.
    pub fn build_mock_response(query: &[u8]) -> Vec<u8> {
        if query.len() < 12 {
            return vec![];
        }

        let mut response = Vec::with_capacity(512);
        response.extend_from_slice(&query[0..2]);
        response.push(0x81);
        response.push(0x80);
        response.extend_from_slice(&query[4..6]);
        response.extend_from_slice(&[0x00, 0x01]);
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&query[12..]);
        response.extend_from_slice(&[
            0xc0, 0x0c,
            0x00, 0x01,
            0x00, 0x01,
            0x00, 0x00, 0x01, 0x2c,
            0x00, 0x04,
            93, 184, 216, 34,
        ]);
        response
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
