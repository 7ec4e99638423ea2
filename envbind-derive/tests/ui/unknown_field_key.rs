// An unknown key such as the file-based secret flag is rejected

use envbind::EnvConfig;

#[derive(EnvConfig)]
struct Config {
    #[env(from_file)]
    pub secret: String,
}

fn main() {}
