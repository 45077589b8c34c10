use std::env;

#[derive(Clone)]
pub struct Config {
    pub establishment_name: String,
    pub owner_name: String,
    pub timezone: String, // IANA name, e.g. "America/Recife"
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            establishment_name: env::var("ESTABLISHMENT_NAME")
                .unwrap_or_else(|_| "Barbearia Demo".to_string()),
            owner_name: env::var("OWNER_NAME").unwrap_or_else(|_| "Administrador Demo".to_string()),
            timezone: env::var("SALON_TIMEZONE").unwrap_or_else(|_| "America/Recife".to_string()),
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}
