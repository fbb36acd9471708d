use std::env;

pub struct AppConfig {
    pub port: u16,
    pub summary_model: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3000);

        let summary_model = env::var("SUMMARY_MODEL").unwrap_or_else(|_| "Gemini".to_string());

        Self {
            port,
            summary_model,
        }
    }
}
