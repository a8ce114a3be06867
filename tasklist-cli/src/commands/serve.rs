//! HTTP server command
//!
//! Connects to PostgreSQL, bootstraps the schema and serves the task API.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::{Context, Result};
use clap::Parser;

use tasklist_server::db::{create_pool_with_options, migrations, pool::DEFAULT_MAX_CONNECTIONS};
use tasklist_server::{run_server, AppState, Database, PgTaskRepo, ServerConfig, TaskManager};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Database URL (required)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Port to listen on; ":8080" is accepted too
    #[arg(long, short = 'p', env = "HTTP_PORT", default_value = "8080", value_parser = parse_port)]
    pub port: u16,

    /// Address to bind to
    #[arg(long, env = "HTTP_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Maximum pooled database connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Do not create the tasks table on startup
    #[arg(long)]
    pub skip_migrations: bool,
}

impl ServeArgs {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Parse a listen port given as "8080" or ":8080".
pub fn parse_port(raw: &str) -> Result<u16, String> {
    let digits = raw.trim().trim_start_matches(':');
    digits
        .parse::<u16>()
        .map_err(|_| format!("invalid port '{}': expected a number like 8080 or :8080", raw))
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let bind_addr = args.bind_addr();
    tracing::info!("Starting tasklist server on {}", bind_addr);

    let pool = create_pool_with_options(&args.database_url, args.max_connections)
        .await
        .context("Failed to create database pool")?;

    if args.skip_migrations {
        tracing::info!("Skipping migrations");
    } else {
        migrations::run(&pool)
            .await
            .context("Failed to run migrations")?;
    }

    let service = TaskManager::new(PgTaskRepo::new(Database::new(pool)));
    let config = ServerConfig { bind_addr };

    // Blocks until shutdown
    run_server(AppState::new(service), config)
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_accepts_colon_prefix() {
        assert_eq!(parse_port("8080"), Ok(8080));
        assert_eq!(parse_port(":9000"), Ok(9000));
        assert_eq!(parse_port(" 3000 "), Ok(3000));
    }

    #[test]
    fn port_rejects_garbage() {
        assert!(parse_port("").is_err());
        assert!(parse_port("http").is_err());
        assert!(parse_port("70000").is_err());
    }

    #[test]
    fn defaults_apply() {
        let args = ServeArgs::try_parse_from([
            "serve",
            "--database-url",
            "postgres://localhost/tasks",
        ])
        .unwrap();

        assert_eq!(args.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert!(!args.skip_migrations);
        assert!(args.host.is_unspecified());
    }

    #[test]
    fn bind_addr_combines_host_and_port() {
        let args = ServeArgs::try_parse_from([
            "serve",
            "--database-url",
            "postgres://localhost/tasks",
            "--host",
            "127.0.0.1",
            "--port",
            ":3030",
        ])
        .unwrap();

        assert_eq!(args.bind_addr(), SocketAddr::from(([127, 0, 0, 1], 3030)));
    }
}
