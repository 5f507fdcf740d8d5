//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;

use forward_proxy::{Acceptor, ProxyConfig};

/// Start the proxy on an ephemeral localhost port and return its address.
pub async fn start_proxy() -> SocketAddr {
    let mut config = ProxyConfig::default();
    config.listener.bind_host = "127.0.0.1".to_string();

    let acceptor = Acceptor::bind(0, Arc::new(config)).await.unwrap();
    let addr = acceptor.local_addr().unwrap();
    tokio::spawn(acceptor.run());
    addr
}

/// Start a mock origin that answers every connection with a fixed response
/// and then closes.
pub async fn start_origin(response: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let _ = read_request_head(&mut socket).await;
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Start a mock origin that captures each request head it receives and
/// sends it through the returned channel before responding.
#[allow(dead_code)]
pub async fn start_capturing_origin(
    response: &'static str,
) -> (SocketAddr, mpsc::UnboundedReceiver<Vec<u8>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        if let Ok(head) = read_request_head(&mut socket).await {
                            let _ = tx.send(head);
                        }
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, rx)
}

/// Read from `socket` until the blank line that ends the request head.
async fn read_request_head(socket: &mut TcpStream) -> std::io::Result<Vec<u8>> {
    let mut head = Vec::new();
    let mut byte = [0u8; 1];
    while !head.ends_with(b"\r\n\r\n") {
        let read = socket.read(&mut byte).await?;
        if read == 0 {
            break;
        }
        head.push(byte[0]);
    }
    Ok(head)
}

/// Send `request` to the proxy and collect everything it sends back until
/// it closes the connection.
#[allow(dead_code)]
pub async fn roundtrip(proxy: SocketAddr, request: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(proxy).await.unwrap();
    stream.write_all(request).await.unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    response
}
