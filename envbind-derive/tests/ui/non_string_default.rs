// Defaults are literal strings parsed like environment values

use envbind::EnvConfig;

#[derive(EnvConfig)]
struct Config {
    #[env(name = "PORT", default = 8080)]
    pub port: i32,
}

fn main() {}
