//! Example demonstrating required variables

use envbind::{apply, with_error_on_missing, EnvConfig, EnvError};

#[derive(Debug, Default, EnvConfig)]
struct Config {
    #[env(name = "REGION", default = "eu-west-1")]
    pub region: String,

    #[env(name = "API_TOKEN")]
    pub api_token: String,

    #[env(name = "WORKERS", default = "4")]
    pub workers: i32,
}

fn main() -> anyhow::Result<()> {
    std::env::remove_var("API_TOKEN");

    // Fields before the missing one are still bound
    let mut config = Config::default();
    match apply(&mut config, &[with_error_on_missing()]) {
        Err(EnvError::Missing { name }) => println!("Missing {name}, partial config: {config:?}"),
        other => other?,
    }

    std::env::set_var("API_TOKEN", "token");
    let config = Config::from_env_with(&[with_error_on_missing()])?;
    println!("Configuration loaded: {config:?}");

    Ok(())
}
