//! Shared canned HTTP server for client tests.

use std::io::Read;
use std::sync::mpsc;

use crate::EntryApi;

pub(crate) struct Received {
    pub method: String,
    pub url: String,
    pub body: String,
}

/// Serve one canned `(status, body)` response per expected request, recording
/// what arrived. The server thread exits once every response is consumed.
pub(crate) fn canned_server(
    responses: Vec<(u16, String)>,
) -> (EntryApi, mpsc::Receiver<Received>) {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let port = server.server_addr().to_ip().unwrap().port();
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        for (status, body) in responses {
            let Ok(mut request) = server.recv() else { break };
            let mut request_body = String::new();
            let _ = request.as_reader().read_to_string(&mut request_body);
            let _ = tx.send(Received {
                method: request.method().to_string(),
                url: request.url().to_string(),
                body: request_body,
            });
            let header =
                tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                    .unwrap();
            let response = tiny_http::Response::from_string(body)
                .with_status_code(status)
                .with_header(header);
            let _ = request.respond(response);
        }
    });
    (EntryApi::new(format!("http://127.0.0.1:{port}")), rx)
}
