//! Shared utilities for integration tests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Canned response for one request path.
#[derive(Clone)]
pub struct Canned {
    pub status: u16,
    pub body: String,
}

impl Canned {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

/// Start a mock country API answering by request path.
///
/// Paths are matched exactly, including percent-encoding and query string.
/// Unknown paths get a 404 like the real API.
pub async fn start_mock_upstream(routes: Vec<(&str, Canned)>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let routes: Arc<HashMap<String, Canned>> = Arc::new(
        routes
            .into_iter()
            .map(|(path, canned)| (path.to_string(), canned))
            .collect(),
    );

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let routes = routes.clone();
                    tokio::spawn(async move {
                        let mut buf = vec![0u8; 8192];
                        let n = socket.read(&mut buf).await.unwrap_or(0);
                        let request = String::from_utf8_lossy(&buf[..n]);
                        let path = request
                            .lines()
                            .next()
                            .and_then(|line| line.split_whitespace().nth(1))
                            .unwrap_or("/")
                            .to_string();

                        let canned = routes.get(&path).cloned().unwrap_or_else(|| {
                            Canned::status(404, r#"{"status":404,"message":"Not Found"}"#)
                        });
                        let status_text = match canned.status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            canned.body.len(),
                            canned.body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Two-country fixture in the upstream wire format.
#[allow(dead_code)]
pub const COUNTRIES_JSON: &str = r#"[
    {
        "name": {"common": "France", "official": "French Republic"},
        "population": 67391582,
        "area": 551695.0,
        "region": "Europe",
        "subregion": "Western Europe",
        "capital": ["Paris"],
        "flags": {"png": "https://flagcdn.com/w320/fr.png", "svg": "https://flagcdn.com/fr.svg"},
        "coatOfArms": {"png": "https://mainfacts.com/media/images/coats_of_arms/fr.png"},
        "languages": {"fra": "French"},
        "currencies": {"EUR": {"name": "Euro", "symbol": "€"}},
        "timezones": ["UTC+01:00"],
        "continents": ["Europe"],
        "latlng": [46.0, 2.0],
        "capitalInfo": {"latlng": [48.87, 2.33]},
        "car": {"signs": ["F"], "side": "right"},
        "postalCode": {"format": "NNNNN", "regex": "^(\\d{5})$"},
        "maps": {"googleMaps": "https://goo.gl/maps/g7QxxSFsWyTPKuzd7"},
        "independent": true,
        "landlocked": false,
        "status": "officially-assigned",
        "startOfWeek": "monday"
    },
    {
        "name": {"common": "Japan", "official": "Japan"},
        "population": 125836021,
        "area": 377930.0,
        "region": "Asia",
        "capital": ["Tokyo"],
        "flags": {"png": "https://flagcdn.com/w320/jp.png", "svg": "https://flagcdn.com/jp.svg"},
        "coatOfArms": {},
        "car": {"signs": ["J"], "side": "left"},
        "maps": {}
    }
]"#;
