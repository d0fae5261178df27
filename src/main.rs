//! # HTTP Mirror - Entry Point
//! src/main.rs
//!
//! `serve` levanta el servidor de archivos, `crawl` corre el crawler.
//! Cualquier error que llegue hasta aquí es fatal: mensaje y exit code 1.

use clap::Parser;
use http_mirror::client::Crawler;
use http_mirror::config::{Cli, ClientConfig, Command, ServerConfig};
use http_mirror::server::Server;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    println!("=================================");
    println!("  HTTP Mirror (HTTP/1.1)");
    println!("=================================\n");

    let result = match cli.command {
        Command::Serve(config) => serve(config),
        Command::Crawl(config) => crawl(config),
    };

    if let Err(e) = result {
        eprintln!("💥 Error fatal: {}", e);
        process::exit(1);
    }
}

fn serve(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    config.validate()?;
    config.print_summary();

    let server = Server::bind(config)?;
    server.run()?;
    Ok(())
}

fn crawl(config: ClientConfig) -> Result<(), Box<dyn std::error::Error>> {
    config.validate()?;
    config.print_summary();

    let report = Crawler::new(config).run()?;

    println!();
    println!("✅ {} imágenes descargadas", report.images.len() - report.failed().count());
    for image in &report.images {
        let mark = if !image.saved() {
            "❌"
        } else if image.suspicious {
            "⚠️ "
        } else {
            "  "
        };
        println!("{} {:>8} bytes  {}", mark, image.bytes, image.file.display());
    }

    let failed = report.failed().count();
    if failed > 0 {
        println!("❌ {} imágenes no se pudieron guardar", failed);
    }
    Ok(())
}
