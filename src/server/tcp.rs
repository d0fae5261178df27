//! # Servidor TCP
//! src/server/tcp.rs
//!
//! Servidor de archivos secuencial: acepta una conexión, lee un request,
//! responde y cierra. Las siguientes conexiones esperan en un backlog de
//! `ACCEPT_BACKLOG` entradas hasta que termina la actual.
//!
//! ## Limitación conocida
//!
//! El request se lee con **una sola** llamada a `read` de hasta
//! `REQUEST_CHUNK_SIZE` bytes. Un request más largo se trunca; como solo se
//! usa la primera línea, en la práctica solo afecta a paths enormes.

use crate::config::ServerConfig;
use crate::http::{Method, Request, Response, StatusCode};
use crate::server::files::serve_file;
use log::{debug, error, info};
use socket2::{Domain, Socket, Type};
use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs};
use std::path::Path;

/// Tamaño del único read que se hace por conexión
pub const REQUEST_CHUNK_SIZE: usize = 1024;

/// Conexiones pendientes que acepta el sistema operativo mientras se atiende una
pub const ACCEPT_BACKLOG: i32 = 2;

/// Servidor de archivos HTTP/1.1
pub struct Server {
    config: ServerConfig,
    listener: TcpListener,
}

impl Server {
    /// Hace bind en `config.address()`
    ///
    /// Un error aquí es fatal para el proceso.
    pub fn bind(config: ServerConfig) -> io::Result<Self> {
        let listener = listen(&config.address())?;
        info!("Servidor escuchando en {}", listener.local_addr()?);

        Ok(Self { config, listener })
    }

    /// Dirección real del listener (útil con puerto 0)
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Loop de accept. Solo termina si el listener deja de producir conexiones.
    pub fn run(&self) -> io::Result<()> {
        info!("Sirviendo archivos desde {}", self.config.root.display());

        for stream in self.listener.incoming() {
            match stream {
                Ok(stream) => self.serve(stream),
                Err(e) => error!("Error al aceptar conexión: {}", e),
            }
        }

        Ok(())
    }

    /// Acepta y atiende exactamente una conexión
    pub fn handle_next(&self) -> io::Result<()> {
        let (stream, _) = self.listener.accept()?;
        self.serve(stream);
        Ok(())
    }

    fn serve(&self, stream: TcpStream) {
        let peer = stream
            .peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        info!("Nueva conexión desde {}", peer);

        if let Err(e) = handle_connection(stream, &self.config.root, &self.config.index) {
            error!("Error atendiendo a {}: {}", peer, e);
        }
    }
}

/// Socket en escucha sobre la primera dirección que resuelve `address`,
/// con un backlog fijo de `ACCEPT_BACKLOG`
fn listen(address: &str) -> io::Result<TcpListener> {
    let addr = address.to_socket_addrs()?.next().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} no resuelve a ninguna dirección", address),
        )
    })?;

    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, None)?;
    socket.bind(&addr.into())?;
    socket.listen(ACCEPT_BACKLOG)?;

    Ok(socket.into())
}

/// Atiende una conexión completa: read, dispatch, write
///
/// El stream se cierra al salir de la función en cualquier caso.
pub fn handle_connection<S: Read + Write>(mut stream: S, root: &Path, index: &str) -> io::Result<()> {
    let mut buffer = [0u8; REQUEST_CHUNK_SIZE];
    let bytes_read = stream.read(&mut buffer)?;

    if bytes_read == 0 {
        info!("Request vacío, se descarta la conexión");
        return Ok(());
    }

    let raw = &buffer[..bytes_read];
    debug!("Request recibido:\n{}", String::from_utf8_lossy(raw));

    let response = respond(raw, root, index);
    stream.write_all(&response.to_bytes())?;
    stream.flush()?;

    info!("{}", response.status());
    Ok(())
}

/// Decide la respuesta para los bytes de un request
///
/// - request line malformada → 400
/// - método distinto de GET → 405
/// - GET → archivo (200) o 404
pub fn respond(raw: &[u8], root: &Path, index: &str) -> Response {
    let request = match Request::parse(raw) {
        Ok(request) => request,
        Err(e) => {
            info!("{}", e);
            return Response::new(StatusCode::BadRequest);
        }
    };

    if request.method() != &Method::GET {
        info!("Método no soportado: {}", request.method().as_str());
        return Response::new(StatusCode::MethodNotAllowed);
    }

    let path = if request.path().is_empty() {
        index
    } else {
        request.path()
    };

    info!("GET {}", path);
    serve_file(root, path)
}
