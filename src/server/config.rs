use std::{collections::HashMap, net::SocketAddr, time::Duration};

use url::Url;

use crate::server::{error::config::ConfigError, region};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_SOURCE_TIMEOUT_SECS: u64 = 20;
const DEFAULT_MYSQL_PORT: u16 = 3306;

/// Connection parameters of one regional MySQL database
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub port: u16,
}

impl ConnectionConfig {
    /// Builds the `mysql://` connection URL, percent-encoding credentials
    pub fn url(&self) -> Result<Url, String> {
        let mut url = Url::parse("mysql://localhost").map_err(|e| e.to_string())?;

        url.set_host(Some(&self.host)).map_err(|e| e.to_string())?;
        url.set_port(Some(self.port))
            .map_err(|_| "port cannot be set".to_string())?;
        url.set_username(&self.user)
            .map_err(|_| "user cannot be set".to_string())?;
        if !self.password.is_empty() {
            url.set_password(Some(&self.password))
                .map_err(|_| "password cannot be set".to_string())?;
        }
        url.set_path(&self.database);

        Ok(url)
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    /// Upper bound for one regional store call, connection included
    pub source_timeout: Duration,
    /// Connections keyed by the region table's database key
    ///
    /// Keys without a complete configuration are absent; regions using them
    /// fail closed when queried.
    pub connections: HashMap<String, ConnectionConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        let source_timeout_secs = match lookup("SOURCE_TIMEOUT_SECS") {
            None => DEFAULT_SOURCE_TIMEOUT_SECS,
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "SOURCE_TIMEOUT_SECS".to_string(),
                        reason: format!("expected a positive number of seconds, got {:?}", value),
                    })
                }
            },
        };

        let mut connections = HashMap::new();
        for key in region::database_keys() {
            if let Some(connection) = connection_from_vars(key, &lookup)? {
                connections.insert(key.to_string(), connection);
            }
        }

        Ok(Self {
            bind_address,
            source_timeout: Duration::from_secs(source_timeout_secs),
            connections,
        })
    }

    /// Connection parameters for a database key, if configured
    pub fn connection(&self, database: &str) -> Option<&ConnectionConfig> {
        self.connections.get(database)
    }
}

fn connection_from_vars<F>(key: &str, lookup: &F) -> Result<Option<ConnectionConfig>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |field: &str| format!("DB_{}_{}", key, field);
    let non_empty = |field: &str| lookup(&var(field)).filter(|value| !value.trim().is_empty());

    let (Some(host), Some(user), Some(database)) =
        (non_empty("HOST"), non_empty("USER"), non_empty("DATABASE"))
    else {
        return Ok(None);
    };

    let port = match non_empty("PORT") {
        None => DEFAULT_MYSQL_PORT,
        Some(port) => port
            .trim()
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: var("PORT"),
                reason: e.to_string(),
            })?,
    };

    let connection = ConnectionConfig {
        host,
        user,
        password: lookup(&var("PASSWORD")).unwrap_or_default(),
        database,
        port,
    };

    connection
        .url()
        .map_err(|reason| ConfigError::InvalidEnvValue {
            var: var("HOST"),
            reason,
        })?;

    Ok(Some(connection))
}
