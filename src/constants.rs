/// Constants shared by the configuration layer and the HTTP repository

// Remote choose endpoint
pub const DEFAULT_BASE_URL: &str = "https://direct.dy-api.com";
pub const CHOOSE_PATH: &str = "/v2/serve/user/choose";
pub const API_KEY_HEADER: &str = "DY-API-Key";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_PAGE_TYPE: &str = "OTHER";

// Configuration sources
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const ENV_API_KEY: &str = "DY_API_KEY";
pub const ENV_BASE_URL: &str = "DY_BASE_URL";
pub const ENV_METRICS_ADDR: &str = "DY_METRICS_ADDR";

// Payload type the service uses for custom JSON variations
pub const CUSTOM_JSON_PAYLOAD: &str = "CUSTOM_JSON";
pub const DECISIONS_CHOICE_TYPE: &str = "DECISIONS";
