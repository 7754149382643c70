use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config;
use crate::http::server::HttpServer;
use crate::service::MusicService;
use crate::storage::operations::Storage;

#[derive(Parser)]
#[command(name = "mercury-music")]
#[command(version = "0.1")]
#[command(about = "Music catalog served over GraphQL")]
pub struct Cli {
    /// Path to the config TOML file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the GraphQL HTTP server
    Serve,
    /// List tracks in the catalog
    List,
}

/// Entrypoint for CLI
pub fn run() {
    env_logger::init();

    let cli = Cli::parse();

    let cfg = config::Config::load(cli.config.to_str().unwrap()).unwrap();

    match &cli.command {
        Commands::Serve => {
            println!("Starting HTTP server...");

            let storage = Storage::new(&cfg.database).expect("Failed to initialize storage");
            let service = MusicService::new(storage);

            let http_server = HttpServer::new(service, cfg.http);

            println!(
                "GraphQL endpoint at http://{}:{}/graphql (GraphiQL at /graphiql)",
                http_server.config.bind_addr, http_server.config.port
            );
            http_server.run();
        }

        Commands::List => {
            let storage = Storage::new(&cfg.database).expect("Failed to initialize storage");
            let service = MusicService::new(storage);

            let musics = service.find_all().unwrap();

            for music in musics {
                println!(
                    "{}: {} - {}",
                    music.id,
                    music.artist.as_deref().unwrap_or("<no artist>"),
                    music.title.as_deref().unwrap_or("<untitled>"),
                );
                if let Some(url) = &music.url {
                    println!("    url: {url}");
                }
                if let Some(cover) = &music.cover {
                    println!("    cover: {cover}");
                }
            }
        }
    }
}
