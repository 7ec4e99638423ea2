// Only `prefix` is accepted at the struct level

use envbind::EnvConfig;

#[derive(EnvConfig)]
#[env(separator = "__")]
struct Config {
    #[env]
    pub port: i32,
}

fn main() {}
