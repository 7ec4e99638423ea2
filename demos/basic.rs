//! Basic usage example

use envbind::EnvConfig;

#[derive(Debug, Default, EnvConfig)]
struct Config {
    // Loaded from DATABASE_URL, left empty if unset
    #[env(name = "DATABASE_URL")]
    pub database_url: String,

    // With default value
    #[env(name = "SERVER_ADDR", default = "127.0.0.1:8080")]
    pub server_addr: String,

    // Numeric type
    #[env(name = "MAX_CONNECTIONS", default = "10")]
    pub max_connections: i32,

    // Boolean type: t/true/1 or f/false/0
    #[env(name = "DEBUG_MODE", default = "false")]
    pub debug_mode: bool,

    // Base64 encoded secret
    #[env(name = "SIGNING_KEY", default = "c2lsbHkgd2FiYml0")]
    pub signing_key: Vec<u8>,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("SERVER_ADDR", "0.0.0.0:3000");

    // Load configuration
    let config = Config::from_env()?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Server Address: {}", config.server_addr);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Debug Mode: {}", config.debug_mode);
    println!("  Signing Key: {} bytes", config.signing_key.len());

    Ok(())
}
