//! Tests de integración: servidor y crawler reales sobre TCP
//! tests/integration_test.rs
//!
//! Cada test levanta un `Server` en un puerto efímero dentro de un thread,
//! atiende exactamente las conexiones que espera y corre el crawler contra él.

use http_mirror::client::fetch::send_http_request;
use http_mirror::client::Crawler;
use http_mirror::config::{ClientConfig, ServerConfig};
use http_mirror::http::ParsedResponse;
use http_mirror::server::Server;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpStream;
use std::path::Path;
use std::thread::{self, JoinHandle};

/// Levanta un servidor que atiende `connections` conexiones y termina
fn spawn_server(root: &Path, connections: usize) -> (u16, JoinHandle<()>) {
    let server = Server::bind(ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        root: root.to_path_buf(),
        ..ServerConfig::default()
    })
    .expect("bind");
    let port = server.local_addr().unwrap().port();

    let handle = thread::spawn(move || {
        for _ in 0..connections {
            server.handle_next().expect("accept");
        }
    });

    (port, handle)
}

fn client_config(port: u16, output_dir: &Path) -> ClientConfig {
    ClientConfig {
        host: "127.0.0.1".to_string(),
        port,
        output_dir: output_dir.to_path_buf(),
        ..ClientConfig::default()
    }
}

/// Envía bytes arbitrarios y retorna la respuesta completa
fn raw_exchange(port: u16, request: &[u8]) -> ParsedResponse {
    let mut stream = TcpStream::connect(("127.0.0.1", port)).unwrap();
    stream.write_all(request).unwrap();
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).unwrap();
    ParsedResponse::split(&buf)
}

#[test]
fn test_crawl_downloads_existing_image() {
    let public = tempfile::tempdir().unwrap();
    let downloads = tempfile::tempdir().unwrap();

    let image: Vec<u8> = (0..500u32).map(|i| (i * 7 % 256) as u8).collect();
    fs::write(
        public.path().join("index.html"),
        r#"<html><body><img src="cat.jpg"></body></html>"#,
    )
    .unwrap();
    fs::write(public.path().join("cat.jpg"), &image).unwrap();

    let (port, server) = spawn_server(public.path(), 2);
    let report = Crawler::new(client_config(port, downloads.path()))
        .run()
        .expect("crawl");
    server.join().unwrap();

    assert_eq!(report.page_status, Some(200));
    assert_eq!(report.links, vec!["cat.jpg"]);
    assert_eq!(report.images.len(), 1);

    let fetched = &report.images[0];
    assert_eq!(fetched.status, Some(200));
    assert_eq!(fetched.bytes, 500);
    assert!(!fetched.suspicious);
    assert_eq!(report.suspicious().count(), 0);

    let saved = fs::read(downloads.path().join("cat.jpg")).unwrap();
    assert_eq!(saved.len(), 500);
    assert_eq!(saved, image);
}

#[test]
fn test_crawl_missing_image_is_saved_and_flagged() {
    let public = tempfile::tempdir().unwrap();
    let downloads = tempfile::tempdir().unwrap();

    fs::write(
        public.path().join("index.html"),
        r#"<html><body><img src="cat.jpg"></body></html>"#,
    )
    .unwrap();

    let (port, server) = spawn_server(public.path(), 2);
    let report = Crawler::new(client_config(port, downloads.path()))
        .run()
        .expect("crawl");
    server.join().unwrap();

    let fetched = &report.images[0];
    assert_eq!(fetched.status, Some(404));
    assert!(fetched.suspicious);
    assert_eq!(report.suspicious().count(), 1);

    let saved = fs::read(downloads.path().join("cat.jpg")).unwrap();
    assert_eq!(saved, b"File Not Found");
}

#[test]
fn test_crawl_nested_and_duplicate_links() {
    let public = tempfile::tempdir().unwrap();
    let downloads = tempfile::tempdir().unwrap();

    fs::create_dir_all(public.path().join("img/2024")).unwrap();
    fs::write(public.path().join("img/2024/my dog.jpg"), vec![1u8; 300]).unwrap();
    fs::write(public.path().join("a.jpg"), vec![2u8; 200]).unwrap();
    fs::write(
        public.path().join("index.html"),
        r#"<img src="img/2024/my%20dog.jpg"><img src="a.jpg"><img src="a.jpg">"#,
    )
    .unwrap();

    // 1 página + 3 imágenes
    let (port, server) = spawn_server(public.path(), 4);
    let report = Crawler::new(client_config(port, downloads.path()))
        .run()
        .expect("crawl");
    server.join().unwrap();

    assert_eq!(report.links, vec!["img/2024/my%20dog.jpg", "a.jpg", "a.jpg"]);
    assert!(report.images.iter().all(|i| i.status == Some(200)));

    // El nombre local es el último segmento tal como aparece en el HTML
    assert_eq!(fs::read(downloads.path().join("my%20dog.jpg")).unwrap().len(), 300);
    assert_eq!(fs::read(downloads.path().join("a.jpg")).unwrap().len(), 200);
}

#[test]
fn test_crawl_page_without_images() {
    let public = tempfile::tempdir().unwrap();
    let downloads = tempfile::tempdir().unwrap();
    fs::write(public.path().join("index.html"), "<p>sin imágenes</p>").unwrap();

    let (port, server) = spawn_server(public.path(), 1);
    let report = Crawler::new(client_config(port, downloads.path()))
        .run()
        .expect("crawl");
    server.join().unwrap();

    assert_eq!(report.page_status, Some(200));
    assert!(report.links.is_empty());
    assert!(report.images.is_empty());
}

#[test]
fn test_crawl_missing_index() {
    let public = tempfile::tempdir().unwrap();
    let downloads = tempfile::tempdir().unwrap();

    let (port, server) = spawn_server(public.path(), 1);
    let report = Crawler::new(client_config(port, downloads.path()))
        .run()
        .expect("crawl");
    server.join().unwrap();

    assert_eq!(report.page_status, Some(404));
    assert!(report.links.is_empty());
}

#[test]
fn test_content_length_matches_file() {
    let public = tempfile::tempdir().unwrap();
    let data = vec![0xABu8; 4321];
    fs::write(public.path().join("big.jpg"), &data).unwrap();

    let (port, server) = spawn_server(public.path(), 1);
    let raw = send_http_request("127.0.0.1", port, "big.jpg").unwrap();
    server.join().unwrap();

    let parsed = ParsedResponse::split(&raw);
    assert_eq!(parsed.status_code(), Some(200));
    assert_eq!(parsed.header("Content-Type"), Some("image/jpeg"));
    assert_eq!(parsed.header("Content-Length"), Some("4321"));
    assert_eq!(parsed.body, data);
}

#[test]
fn test_error_statuses_over_the_wire() {
    let public = tempfile::tempdir().unwrap();

    let (port, server) = spawn_server(public.path(), 3);

    let not_found = raw_exchange(port, b"GET /missing.html HTTP/1.1\r\nHost: x\r\n\r\n");
    assert_eq!(not_found.status_code(), Some(404));
    assert_eq!(not_found.body, b"File Not Found");

    let bad = raw_exchange(port, b"GET /missing.html\r\n\r\n");
    assert_eq!(bad.headers, "HTTP/1.1 400 Bad Request");
    assert!(bad.body.is_empty());

    let not_allowed = raw_exchange(port, b"DELETE /missing.html HTTP/1.1\r\n\r\n");
    assert_eq!(not_allowed.headers, "HTTP/1.1 405 Method Not Allowed");
    assert!(not_allowed.body.is_empty());

    server.join().unwrap();
}

#[test]
fn test_server_survives_empty_connection() {
    let public = tempfile::tempdir().unwrap();
    fs::write(public.path().join("index.html"), "ok").unwrap();

    let (port, server) = spawn_server(public.path(), 2);

    // Conexión que cierra sin enviar nada
    drop(TcpStream::connect(("127.0.0.1", port)).unwrap());

    let raw = send_http_request("127.0.0.1", port, "").unwrap();
    assert_eq!(ParsedResponse::split(&raw).body, b"ok");

    server.join().unwrap();
}

#[test]
fn test_crawl_continues_after_failed_write() {
    let public = tempfile::tempdir().unwrap();
    let downloads = tempfile::tempdir().unwrap();

    let image = vec![9u8; 250];
    fs::write(public.path().join("x.jpg"), vec![1u8; 150]).unwrap();
    fs::write(public.path().join("cat.jpg"), &image).unwrap();
    fs::write(
        public.path().join("index.html"),
        r#"<img src="x.jpg"><img src="cat.jpg">"#,
    )
    .unwrap();

    // Un directorio con el nombre del primer archivo impide escribirlo
    fs::create_dir(downloads.path().join("x.jpg")).unwrap();

    let (port, server) = spawn_server(public.path(), 3);
    let report = Crawler::new(client_config(port, downloads.path()))
        .run()
        .expect("crawl");
    server.join().unwrap();

    assert_eq!(report.images.len(), 2);

    let blocked = &report.images[0];
    assert_eq!(blocked.link, "x.jpg");
    assert_eq!(blocked.status, Some(200));
    assert!(!blocked.saved());
    assert!(blocked.write_error.is_some());
    assert!(downloads.path().join("x.jpg").is_dir());

    let cat = &report.images[1];
    assert!(cat.saved());
    assert_eq!(fs::read(downloads.path().join("cat.jpg")).unwrap(), image);

    let failed: Vec<&str> = report.failed().map(|i| i.link.as_str()).collect();
    assert_eq!(failed, vec!["x.jpg"]);
}

#[test]
fn test_crawl_overwrites_larger_existing_file() {
    let public = tempfile::tempdir().unwrap();
    let downloads = tempfile::tempdir().unwrap();

    let image = vec![3u8; 120];
    fs::write(public.path().join("cat.jpg"), &image).unwrap();
    fs::write(public.path().join("index.html"), r#"<img src="cat.jpg">"#).unwrap();

    // Archivo previo más grande: debe quedar truncado al body nuevo
    fs::write(downloads.path().join("cat.jpg"), vec![0xEEu8; 5000]).unwrap();

    let (port, server) = spawn_server(public.path(), 2);
    let report = Crawler::new(client_config(port, downloads.path()))
        .run()
        .expect("crawl");
    server.join().unwrap();

    assert!(report.images[0].saved());
    assert_eq!(fs::read(downloads.path().join("cat.jpg")).unwrap(), image);
}
