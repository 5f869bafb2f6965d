//! Serving facility: publishes a finished page over HTTP on a tokio runtime.
//!
//! Only one server may be bound per process.

mod http;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, warn};

use crate::api::PageLayout;
use crate::config::ServeConfig;
use crate::error::{SheetError, SheetResult};
use crate::template::{HtmlOptions, render_page_html};

use self::http::{Incoming, REQUEST_TIMEOUT, Response, read_request};

static SERVING: AtomicBool = AtomicBool::new(false);

#[derive(Debug)]
struct Documents {
    html: String,
    json: String,
}

/// Bound listener holding the page pre-rendered to HTML and JSON.
#[derive(Debug)]
pub struct DashboardServer {
    listener: TcpListener,
    documents: Arc<Documents>,
}

impl DashboardServer {
    /// Claims the process-wide serve slot and binds the listener.
    ///
    /// Fails with `AlreadyServing` once a server has been bound in this
    /// process. A failed bind releases the slot.
    pub async fn bind(page: &PageLayout, config: &ServeConfig) -> SheetResult<Self> {
        if SERVING
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!(address = %config.address(), "serve requested while already serving");
            return Err(SheetError::AlreadyServing);
        }

        match Self::bind_inner(page, config).await {
            Ok(server) => Ok(server),
            Err(err) => {
                SERVING.store(false, Ordering::Release);
                Err(err)
            }
        }
    }

    async fn bind_inner(page: &PageLayout, config: &ServeConfig) -> SheetResult<Self> {
        let html = render_page_html(page, &HtmlOptions::generated_now())?;
        let json = page.to_json_pretty()?;
        let listener = TcpListener::bind(config.address()).await?;
        info!(
            address = %listener.local_addr()?,
            title = page.template().title.as_str(),
            "dashboard server bound"
        );
        Ok(Self {
            listener,
            documents: Arc::new(Documents { html, json }),
        })
    }

    pub fn local_addr(&self) -> SheetResult<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accepts connections until `shutdown` resolves.
    pub async fn run_until<F>(self, shutdown: F) -> SheetResult<()>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                () = &mut shutdown => {
                    info!("dashboard server shutting down");
                    return Ok(());
                }
                accepted = self.listener.accept() => {
                    match accepted {
                        Ok((stream, peer)) => {
                            let documents = Arc::clone(&self.documents);
                            tokio::spawn(async move {
                                if let Err(err) = handle_connection(stream, &documents).await {
                                    warn!(%peer, error = %err, "connection failed");
                                }
                            });
                        }
                        Err(err) => warn!(error = %err, "accept failed"),
                    }
                }
            }
        }
    }
}

/// Binds and serves `page` until Ctrl-C.
pub async fn serve(page: &PageLayout, config: &ServeConfig) -> SheetResult<()> {
    let server = DashboardServer::bind(page, config).await?;
    info!(address = %server.local_addr()?, "serving cheat sheet, press Ctrl-C to stop");
    server
        .run_until(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                warn!(error = %err, "failed to listen for Ctrl-C");
                std::future::pending::<()>().await;
            }
        })
        .await
}

async fn handle_connection(mut stream: TcpStream, documents: &Documents) -> SheetResult<()> {
    let incoming = match tokio::time::timeout(REQUEST_TIMEOUT, read_request(&mut stream)).await {
        Ok(incoming) => incoming?,
        Err(_) => {
            debug!(timeout = ?REQUEST_TIMEOUT, "request head not received in time");
            Incoming::Rejected(Response::request_timeout())
        }
    };
    let response = match incoming {
        Incoming::Rejected(response) => {
            debug!(status = response.status, "request rejected");
            response
        }
        Incoming::Request(request) => {
            debug!(method = request.method.as_str(), path = request.path.as_str(), "request");
            route(&request.method, &request.path, documents)
        }
    };
    response.write_to(&mut stream).await
}

fn route(method: &str, path: &str, documents: &Documents) -> Response {
    if method != "GET" {
        return Response::method_not_allowed();
    }
    match path {
        "/" | "/index.html" => Response::ok("text/html; charset=utf-8", documents.html.as_bytes()),
        "/page.json" => Response::ok("application/json", documents.json.as_bytes()),
        _ => Response::not_found(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn documents() -> Documents {
        Documents {
            html: "<html></html>".to_owned(),
            json: "{}".to_owned(),
        }
    }

    #[test]
    fn routes_resolve_by_method_and_path() {
        let docs = documents();
        assert_eq!(route("GET", "/", &docs).status, 200);
        assert_eq!(route("GET", "/index.html", &docs).body, b"<html></html>");
        assert_eq!(route("GET", "/page.json", &docs).content_type, "application/json");
        assert_eq!(route("GET", "/missing", &docs).status, 404);
        assert_eq!(route("POST", "/", &docs).status, 405);
    }

    #[test]
    fn default_address_is_loopback_5006() {
        assert_eq!(ServeConfig::default().address(), "127.0.0.1:5006");
    }
}
