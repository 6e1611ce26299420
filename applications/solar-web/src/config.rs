use std::time::Duration;

pub const DEFAULT_DATA_URL: &str = "data/data.json";
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 60;

/// Ids of the page elements that receive the readings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds {
    pub last_refresh: String,
    pub now_power: String,
    pub today_energy: String,
    pub total_energy: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            last_refresh: "last_refresh".to_string(),
            now_power: "webdata_now_p".to_string(),
            today_energy: "webdata_today_e".to_string(),
            total_energy: "webdata_total_e".to_string(),
        }
    }
}

/// Client configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub data_url: String,
    pub refresh_interval: Duration,
    pub elements: ElementIds,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_INTERVAL_SECS),
            elements: ElementIds::default(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from window.ENV, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(env_value)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("DATA_URL").filter(|url| !url.trim().is_empty()) {
            config.data_url = url;
        }

        if let Some(raw) = lookup("REFRESH_INTERVAL_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.refresh_interval = Duration::from_secs(secs),
                _ => log::warn!(
                    "Ignoring invalid REFRESH_INTERVAL_SECS {:?}, using {}s",
                    raw,
                    DEFAULT_REFRESH_INTERVAL_SECS
                ),
            }
        }

        config
    }
}

/// Read a string value from window.ENV
#[cfg(target_arch = "wasm32")]
fn env_value(key: &str) -> Option<String> {
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let env = js_sys::Reflect::get(&window, &JsValue::from_str("ENV")).ok()?;
    if env.is_undefined() || env.is_null() {
        return None;
    }

    let value = js_sys::Reflect::get(&env, &JsValue::from_str(key)).ok()?;
    value
        .as_string()
        .or_else(|| value.as_f64().map(|n| n.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
fn env_value(_key: &str) -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_env();

        assert_eq!(config.data_url, "data/data.json");
        assert_eq!(config.refresh_interval, Duration::from_secs(60));
        assert_eq!(config.elements.now_power, "webdata_now_p");
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("DATA_URL", "https://solar.example.com/data.json"),
            ("REFRESH_INTERVAL_SECS", "30"),
        ]));

        assert_eq!(config.data_url, "https://solar.example.com/data.json");
        assert_eq!(config.refresh_interval, Duration::from_secs(30));
    }

    #[test]
    fn test_invalid_interval_falls_back() {
        for raw in ["0", "-5", "soon", ""] {
            let config = ClientConfig::from_lookup(lookup(&[("REFRESH_INTERVAL_SECS", raw)]));
            assert_eq!(config.refresh_interval, Duration::from_secs(60), "{raw}");
        }
    }

    #[test]
    fn test_blank_data_url_ignored() {
        let config = ClientConfig::from_lookup(lookup(&[("DATA_URL", "  ")]));
        assert_eq!(config.data_url, DEFAULT_DATA_URL);
    }
}
