use std::env;
use std::io;

/// Server settings, read from the environment (and `.env` via dotenv).
///
/// | Env Var        | Default     |
/// |----------------|-------------|
/// | `DATABASE_URL` | `soccer.db` |
/// | `HOST`         | `0.0.0.0`   |
/// | `PORT`         | `3000`      |
/// | `CLIENT_HOST`  | unset       |
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Origin of a separately hosted front end. CORS is only enabled when set.
    pub client_host: Option<String>,
}

impl Config {
    pub fn from_env() -> io::Result<Config> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> io::Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(port) => port.trim().parse::<u16>().map_err(|err| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("PORT must be a valid port number: {}", err),
                )
            })?,
            None => 3000,
        };

        Ok(Config {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| "soccer.db".to_string()),
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            client_host: lookup("CLIENT_HOST").filter(|origin| !origin.is_empty()),
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
