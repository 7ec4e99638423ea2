//! Example demonstrating duration fields

use envbind::EnvConfig;
use std::time::Duration;

#[derive(Debug, Default, EnvConfig)]
struct Timeouts {
    #[env(name = "REQUEST_TIMEOUT", default = "30s")]
    pub request: Duration,

    #[env(name = "IDLE_TIMEOUT", default = "15m")]
    pub idle: Duration,

    #[env(name = "SESSION_TTL", default = "2w")]
    pub session_ttl: Duration,

    #[env(name = "POLL_INTERVAL", default = "250ms")]
    pub poll: Duration,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("IDLE_TIMEOUT", "1h");

    let timeouts = Timeouts::from_env()?;

    println!("Timeouts:");
    println!("  Request: {:?}", timeouts.request);
    println!("  Idle: {:?}", timeouts.idle);
    println!("  Session TTL: {:?}", timeouts.session_ttl);
    println!("  Poll: {:?}", timeouts.poll);

    // Compound units are rejected
    std::env::set_var("IDLE_TIMEOUT", "1h30m");
    if let Err(e) = Timeouts::from_env() {
        println!("Rejected: {e}");
    }

    Ok(())
}
