use std::env;

use lazy_static::lazy_static;

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Users generated into the mock store at start-up
    pub seed_users: usize,
    /// Forms generated into the mock store at start-up
    pub seed_forms: usize,
    /// Artificial latency added to every response, in milliseconds
    pub response_delay_ms: u64,
    pub bcrypt_cost: u32,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("SERVER_PORT must be a valid number"),
            seed_users: env::var("SEED_USERS")
                .unwrap_or_else(|_| "200".to_string())
                .parse()
                .expect("SEED_USERS must be a valid number"),
            seed_forms: env::var("SEED_FORMS")
                .unwrap_or_else(|_| "8".to_string())
                .parse()
                .expect("SEED_FORMS must be a valid number"),
            response_delay_ms: env::var("RESPONSE_DELAY_MS")
                .unwrap_or_else(|_| "750".to_string())
                .parse()
                .expect("RESPONSE_DELAY_MS must be a valid number"),
            bcrypt_cost: env::var("BCRYPT_COST")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .expect("BCRYPT_COST must be a valid number"),
        }
    }
}
