//! HTTP server and graceful shutdown.
//!
//! On SIGTERM or Ctrl-C the server stops accepting connections and asks
//! every open connection to close once its current request is answered.
//! Idle keep-alive connections close immediately. [`Server::serve`] returns
//! after the last one is gone.

use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::watch;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use crate::error::{Error, Result};

use super::router::route;

/// Default listen address.
pub const DEFAULT_ADDR: &str = "127.0.0.1:8000";

/// Configuration for the status service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
        }
    }
}

/// The HTTP server.
#[derive(Debug, Clone)]
pub struct Server {
    config: ServerConfig,
}

impl Server {
    #[must_use]
    pub const fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Configure the server to bind to `addr` when [`serve`](Server::serve)
    /// is called.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAddress`] if `addr` is not a valid `host:port`.
    pub fn bind(addr: &str) -> Result<Self> {
        let addr = addr.parse().map_err(|source| Error::InvalidAddress {
            addr: addr.to_owned(),
            source,
        })?;
        Ok(Self::new(ServerConfig { addr }))
    }

    #[must_use]
    pub const fn addr(&self) -> SocketAddr {
        self.config.addr
    }

    /// Bind the configured address and serve until SIGTERM or Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound.
    pub async fn serve(self) -> Result<()> {
        let listener = TcpListener::bind(self.config.addr).await?;
        serve_listener(listener, shutdown_signal()).await
    }
}

/// Accept connections on `listener` until `shutdown` resolves, then close
/// every open connection gracefully and wait for them.
///
/// # Errors
///
/// Returns an error if the listener's local address cannot be read.
pub async fn serve_listener<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()>,
{
    let local = listener.local_addr()?;
    info!(addr = %local, "nilakkal listening");

    let (closing, closing_rx) = watch::channel(false);
    let mut connections = JoinSet::new();

    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;

            () = &mut shutdown => break,

            accepted = listener.accept() => match accepted {
                Ok((stream, peer)) => {
                    connections.spawn(serve_connection(stream, peer, closing_rx.clone()));
                }
                Err(e) => warn!("accept failed: {e}"),
            },

            Some(_) = connections.join_next(), if !connections.is_empty() => {}
        }
    }

    info!(open = connections.len(), "shutting down");
    closing.send_replace(true);
    while connections.join_next().await.is_some() {}

    info!("nilakkal stopped");
    Ok(())
}

/// Serve one TCP connection until the client hangs up or `closing` flips.
async fn serve_connection(
    stream: TcpStream,
    peer: SocketAddr,
    mut closing: watch::Receiver<bool>,
) {
    let svc = service_fn(move |req| async move { dispatch(req, peer) });
    let builder = ConnBuilder::new(TokioExecutor::new());
    let conn = builder.serve_connection(TokioIo::new(stream), svc);
    tokio::pin!(conn);

    let result = tokio::select! {
        res = conn.as_mut() => res,
        () = async { drop(closing.wait_for(|&flag| flag).await) } => {
            conn.as_mut().graceful_shutdown();
            conn.await
        }
    };

    if let Err(e) = result {
        debug!(%peer, "connection closed with error: {e}");
    }
}

fn dispatch(
    req: hyper::Request<Incoming>,
    peer: SocketAddr,
) -> std::result::Result<http::Response<Full<Bytes>>, Infallible> {
    let res = route(req.method(), req.uri().path());
    debug!(
        %peer,
        method = %req.method(),
        path = req.uri().path(),
        status = res.status().as_u16(),
        "request"
    );
    Ok(res)
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM. A signal that cannot be
/// installed is logged and never fires.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("cannot listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("cannot listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = interrupt => info!("received Ctrl-C"),
        () = terminate => info!("received SIGTERM"),
    }
}
