use anyhow::{bail, Context, Result};

#[derive(Debug, Clone)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub host: String,
    pub port: u16,

    /// Public base URL of this relay. Configuration only; no logic reads it
    /// beyond startup logging.
    pub base_url: String,

    // Paystack
    pub paystack_base_url: String,
    pub paystack_secret_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let environment = Self::parse_environment()?;

        let config = Self {
            environment,
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("Invalid PORT")?,

            base_url: std::env::var("BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),

            paystack_base_url: std::env::var("PAYSTACK_BASE_URL")
                .unwrap_or_else(|_| "https://api.paystack.co".to_string()),
            paystack_secret_key: std::env::var("PAYSTACK_SECRET_KEY")
                .context("PAYSTACK_SECRET_KEY required")?,
        };

        config.validate()?;
        Ok(config)
    }

    fn parse_environment() -> Result<Environment> {
        let env = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        match env.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            _ => bail!("Unknown environment: {}", env),
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.paystack_base_url.starts_with("http") {
            bail!("PAYSTACK_BASE_URL must be HTTP(S) URL");
        }
        if self.paystack_secret_key.trim().is_empty() {
            bail!("PAYSTACK_SECRET_KEY must not be empty");
        }

        tracing::info!(
            "Configuration validated for {:?} environment",
            self.environment
        );

        Ok(())
    }
}
