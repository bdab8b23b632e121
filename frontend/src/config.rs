use gloo_net::http::Request;
use shared::ConfigError;

const CONFIG_PATH: &str = "config.json";

/// Fetches the raw default-wheel document served next to the app.
pub async fn fetch_wheel_config() -> Result<String, ConfigError> {
    let response = Request::get(CONFIG_PATH)
        .send()
        .await
        .map_err(|e| ConfigError::Unavailable(format!("Network error: {:?}", e)))?;

    if !response.ok() {
        return Err(ConfigError::Unavailable(format!("Error status: {}", response.status())));
    }

    response
        .text()
        .await
        .map_err(|e| ConfigError::Unavailable(format!("Error reading config: {:?}", e)))
}
