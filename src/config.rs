use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::ops::RangeInclusive;

/// 订单号长度范围（上限与 orders.order_number 列宽一致）
pub const ORDER_NUMBER_LENGTH_RANGE: RangeInclusive<usize> = 4..=32;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub checkout: CheckoutConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expires_in: i64, // seconds
}

/// 下单相关参数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfig {
    #[serde(default = "default_order_number_length")]
    pub order_number_length: usize,
    /// 订单号冲突时的最大生成次数
    #[serde(default = "default_order_number_attempts")]
    pub order_number_attempts: u32,
}

fn default_order_number_length() -> usize {
    8
}

fn default_order_number_attempts() -> u32 {
    5
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            order_number_length: default_order_number_length(),
            order_number_attempts: default_order_number_attempts(),
        }
    }
}

impl CheckoutConfig {
    pub fn validate(&self) -> AppResult<()> {
        if !ORDER_NUMBER_LENGTH_RANGE.contains(&self.order_number_length) {
            return Err(AppError::ConfigError(format!(
                "checkout.order_number_length must be between {} and {}, got {}",
                ORDER_NUMBER_LENGTH_RANGE.start(),
                ORDER_NUMBER_LENGTH_RANGE.end(),
                self.order_number_length
            )));
        }
        if self.order_number_attempts == 0 {
            return Err(AppError::ConfigError(
                "checkout.order_number_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn get_env(name: &str) -> Option<String> {
    env::var(name).ok()
}

fn get_env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn from_toml() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        use std::io::ErrorKind;

        // 尝试读取配置文件，如果不存在则完全依赖环境变量
        let mut config: Config = match std::fs::read_to_string(&config_path) {
            Ok(config_str) => Self::parse(&config_str)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Self::from_env()?,
            Err(e) => {
                return Err(format!("无法读取配置文件 {config_path}: {e}").into());
            }
        };

        // 环境变量覆盖（即便文件存在时也覆盖）
        config.apply_env_overrides();
        config.checkout.validate()?;

        Ok(config)
    }

    pub fn parse(config_str: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Config =
            toml::from_str(config_str).map_err(|e| format!("解析配置文件失败: {e}"))?;
        config.checkout.validate()?;
        Ok(config)
    }

    fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        // 数据库 URL 在无配置文件时必须提供
        let database_url = get_env("DATABASE_URL")
            .ok_or("缺少 DATABASE_URL 环境变量，且未找到配置文件 config.toml")?;

        Ok(Config {
            server: ServerConfig {
                host: get_env("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: get_env_parse("SERVER_PORT", 8080u16),
            },
            database: DatabaseConfig {
                url: database_url,
                max_connections: get_env_parse("DB_MAX_CONNECTIONS", 10u32),
            },
            jwt: JwtConfig {
                secret: get_env("JWT_SECRET")
                    .unwrap_or_else(|| "change-me-in-production".to_string()),
                access_token_expires_in: get_env_parse("JWT_ACCESS_EXPIRES_IN", 7200i64),
            },
            checkout: CheckoutConfig::default(),
        })
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(v) = env::var("SERVER_HOST") {
            self.server.host = v;
        }
        if let Ok(v) = env::var("SERVER_PORT")
            && let Ok(p) = v.parse()
        {
            self.server.port = p;
        }
        if let Ok(v) = env::var("DATABASE_URL") {
            self.database.url = v;
        }
        if let Ok(v) = env::var("DB_MAX_CONNECTIONS")
            && let Ok(mc) = v.parse()
        {
            self.database.max_connections = mc;
        }
        if let Ok(v) = env::var("JWT_SECRET") {
            self.jwt.secret = v;
        }
        if let Ok(v) = env::var("JWT_ACCESS_EXPIRES_IN")
            && let Ok(n) = v.parse()
        {
            self.jwt.access_token_expires_in = n;
        }
        if let Ok(v) = env::var("ORDER_NUMBER_LENGTH")
            && let Ok(n) = v.parse()
        {
            self.checkout.order_number_length = n;
        }
        if let Ok(v) = env::var("ORDER_NUMBER_ATTEMPTS")
            && let Ok(n) = v.parse()
        {
            self.checkout.order_number_attempts = n;
        }
    }
}
