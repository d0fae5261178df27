//! # Envío de Requests
//! src/client/fetch.rs
//!
//! Una conexión nueva por request. La respuesta se lee en chunks hasta que el
//! servidor cierra: un read de 0 bytes es la única señal de fin, no se mira
//! `Content-Length`.

use super::error::ClientError;
use crate::http::ClientRequest;
use log::debug;
use std::io::{self, Read, Write};
use std::net::TcpStream;

/// Tamaño de cada read de la respuesta
pub const RESPONSE_CHUNK_SIZE: usize = 1024;

/// Envía un GET a `host:port` y retorna la respuesta cruda completa
///
/// El socket se cierra al retornar, también en los caminos de error.
pub fn send_http_request(host: &str, port: u16, path: &str) -> Result<Vec<u8>, ClientError> {
    let address = format!("{}:{}", host, port);
    let request = ClientRequest::get(host, path);

    let mut stream = TcpStream::connect((host, port)).map_err(|source| ClientError::Connect {
        address: address.clone(),
        source,
    })?;

    debug!("{} → {}", request.request_line(), address);

    exchange(&mut stream, &request).map_err(|source| ClientError::Io { address, source })
}

fn exchange(stream: &mut TcpStream, request: &ClientRequest) -> io::Result<Vec<u8>> {
    stream.write_all(&request.to_bytes())?;
    stream.flush()?;
    read_until_close(stream)
}

/// Lee de `reader` hasta un read de 0 bytes y concatena todo
pub fn read_until_close<R: Read>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut response = Vec::new();
    let mut chunk = [0u8; RESPONSE_CHUNK_SIZE];

    loop {
        match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => response.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(response)
}
