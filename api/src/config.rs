//! Runtime configuration for the weather provider.

use std::env;
use std::time::Duration;

/// Where and how to reach the weather provider.
#[derive(Clone, PartialEq, Eq)]
pub struct WeatherConfig {
    /// Scheme and host, without a trailing path, e.g. `https://api.openweathermap.org`.
    pub base_url: String,
    /// Sent as the `appid` query parameter. Empty means "not configured".
    pub api_key: String,
    /// Applied on native targets only; in the browser `fetch` decides.
    pub timeout: Duration,
}

impl WeatherConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openweathermap.org";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Creates a WeatherConfig from environment variables, with in-code defaults.
    ///
    /// # Environment Variables
    /// - `OPENWEATHER_API_KEY`: the provider credential. No default.
    /// - `OPENWEATHER_BASE_URL`: defaults to [`Self::DEFAULT_BASE_URL`].
    /// - `OPENWEATHER_TIMEOUT_SECS`: whole seconds, defaults to 30.
    ///
    /// A variable set in the running process wins. Otherwise the value seen at
    /// compile time is used, which is the only source a wasm build has.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            env::var(key).ok().or_else(|| {
                let baked_in = match key {
                    "OPENWEATHER_API_KEY" => option_env!("OPENWEATHER_API_KEY"),
                    "OPENWEATHER_BASE_URL" => option_env!("OPENWEATHER_BASE_URL"),
                    "OPENWEATHER_TIMEOUT_SECS" => option_env!("OPENWEATHER_TIMEOUT_SECS"),
                    _ => None,
                };
                baked_in.map(str::to_owned)
            })
        })
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("OPENWEATHER_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_owned())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_owned());

        let api_key = lookup("OPENWEATHER_API_KEY")
            .map(|key| key.trim().to_owned())
            .unwrap_or_default();

        let timeout = lookup("OPENWEATHER_TIMEOUT_SECS")
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(Self::DEFAULT_TIMEOUT);

        Self {
            base_url,
            api_key,
            timeout,
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Full URL of the current-weather endpoint.
    pub fn current_weather_url(&self) -> String {
        format!("{}/data/2.5/weather", self.base_url)
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

// The API key must never end up in logs.
impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &if self.has_api_key() { "<set>" } else { "<unset>" })
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> WeatherConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        WeatherConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = config_from(&[]);

        assert_eq!(cfg.base_url, "https://api.openweathermap.org");
        assert_eq!(cfg.api_key, "");
        assert!(!cfg.has_api_key());
        assert_eq!(cfg.timeout, Duration::from_secs(30));
    }

    #[test]
    fn reads_all_settings() {
        let cfg = config_from(&[
            ("OPENWEATHER_API_KEY", "abc123"),
            ("OPENWEATHER_BASE_URL", "http://127.0.0.1:9000/"),
            ("OPENWEATHER_TIMEOUT_SECS", "5"),
        ]);

        assert_eq!(cfg.api_key, "abc123");
        assert!(cfg.has_api_key());
        assert_eq!(cfg.base_url, "http://127.0.0.1:9000");
        assert_eq!(cfg.timeout, Duration::from_secs(5));
        assert_eq!(
            cfg.current_weather_url(),
            "http://127.0.0.1:9000/data/2.5/weather"
        );
    }

    #[test]
    fn ignores_unusable_values() {
        let cfg = config_from(&[
            ("OPENWEATHER_API_KEY", "   "),
            ("OPENWEATHER_BASE_URL", ""),
            ("OPENWEATHER_TIMEOUT_SECS", "soon"),
        ]);

        assert!(!cfg.has_api_key());
        assert_eq!(cfg.base_url, WeatherConfig::DEFAULT_BASE_URL);
        assert_eq!(cfg.timeout, WeatherConfig::DEFAULT_TIMEOUT);

        let cfg = config_from(&[("OPENWEATHER_TIMEOUT_SECS", "0")]);
        assert_eq!(cfg.timeout, WeatherConfig::DEFAULT_TIMEOUT);
    }

    #[test]
    fn debug_output_hides_the_key() {
        let cfg = config_from(&[("OPENWEATHER_API_KEY", "super-secret")]);
        let printed = format!("{cfg:?}");

        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<set>"));
    }
}
