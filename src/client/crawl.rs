//! # Crawler de Imágenes
//! src/client/crawl.rs
//!
//! Algoritmo secuencial, sin paralelismo:
//!
//! 1. GET de la página inicial (por defecto el index del servidor)
//! 2. Buscar `src="...jpg"` en el body
//! 3. Por cada link, en orden: GET, separar el body y guardarlo en un
//!    archivo con el nombre del último segmento del path
//! 4. Un body más chico que el umbral se reporta (probablemente un 404),
//!    pero el crawl sigue
//!
//! Solo un error de transporte corta el crawl. Si una imagen no se puede
//! guardar, el error queda en su `FetchedImage` y se sigue con el próximo link.

use super::error::ClientError;
use super::fetch::send_http_request;
use super::links::find_jpg_links;
use crate::config::ClientConfig;
use crate::http::ParsedResponse;
use log::{error, info, warn};
use std::fs;
use std::path::PathBuf;

/// Resultado de descargar una imagen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedImage {
    /// Link tal como apareció en el HTML
    pub link: String,

    /// Archivo local donde se guardó el body
    pub file: PathBuf,

    /// Tamaño del body guardado
    pub bytes: usize,

    /// Código de estado de la respuesta, si se pudo leer
    pub status: Option<u16>,

    /// El body es menor al umbral configurado
    pub suspicious: bool,

    /// Error al guardar `file`, si lo hubo
    pub write_error: Option<String>,
}

impl FetchedImage {
    /// El body quedó escrito en `file`
    pub fn saved(&self) -> bool {
        self.write_error.is_none()
    }
}

/// Resumen de una corrida del crawler
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlReport {
    /// Código de estado de la página inicial
    pub page_status: Option<u16>,

    /// Links encontrados, en orden y con duplicados
    pub links: Vec<String>,

    /// Una entrada por link
    pub images: Vec<FetchedImage>,
}

impl CrawlReport {
    /// Imágenes con body sospechosamente pequeño
    pub fn suspicious(&self) -> impl Iterator<Item = &FetchedImage> {
        self.images.iter().filter(|image| image.suspicious)
    }

    /// Imágenes que no se pudieron guardar
    pub fn failed(&self) -> impl Iterator<Item = &FetchedImage> {
        self.images.iter().filter(|image| !image.saved())
    }
}

/// Crawler de una página y sus imágenes `.jpg`
pub struct Crawler {
    config: ClientConfig,
}

impl Crawler {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// GET de `path` y separación en headers/body
    pub fn fetch(&self, path: &str) -> Result<ParsedResponse, ClientError> {
        let raw = send_http_request(&self.config.host, self.config.port, path)?;
        Ok(ParsedResponse::split(&raw))
    }

    /// Ejecuta el crawl completo
    pub fn run(&self) -> Result<CrawlReport, ClientError> {
        info!("Pidiendo página /{} ...", self.config.path);
        let page = self.fetch(&self.config.path)?;
        let html = page.body_text();

        info!("Buscando links .jpg en {} bytes de HTML ...", page.body.len());
        let links = find_jpg_links(&html);
        info!("{} links encontrados", links.len());

        let mut images = Vec::with_capacity(links.len());
        for link in &links {
            images.push(self.fetch_image(link)?);
        }

        Ok(CrawlReport {
            page_status: page.status_code(),
            links,
            images,
        })
    }

    fn fetch_image(&self, link: &str) -> Result<FetchedImage, ClientError> {
        info!("Pidiendo imagen: {}", link);
        let response = self.fetch(link)?;

        let file = self.config.output_dir.join(file_name_for(link));
        let bytes = response.body.len();

        let write_error = match fs::write(&file, &response.body) {
            Ok(()) => {
                info!("Recibidos {} bytes de {} → {}", bytes, link, file.display());
                None
            }
            Err(e) => {
                error!("No se pudo guardar {}: {}", file.display(), e);
                Some(e.to_string())
            }
        };

        let suspicious = bytes < self.config.small_body_threshold;
        if suspicious {
            warn!(
                "Body sospechosamente pequeño de {}: {}",
                link,
                response.body.escape_ascii()
            );
        }

        Ok(FetchedImage {
            link: link.to_string(),
            file,
            bytes,
            status: response.status_code(),
            suspicious,
            write_error,
        })
    }
}

/// Nombre del archivo local: lo que sigue al último `/` del link
pub fn file_name_for(link: &str) -> &str {
    link.rsplit('/').next().unwrap_or(link)
}
