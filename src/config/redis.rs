use secrecy::SecretString;
use serde::Deserialize;

/// Redis is optional: without it alert events are logged but not published.
#[derive(Debug, Deserialize)]
pub struct RedisSettings {
    pub url: SecretString,
}
