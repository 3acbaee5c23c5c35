use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::currency::CurrencyPreset;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 입력칸에 미리 채워 둘 기본값. 비율은 백분율 그대로 저장한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultInputs {
    pub total_price: f64,
    pub down_payment: f64,
    /// 할부 월 이자율 [%]
    pub financing_rate_percent: f64,
    pub months: u32,
    /// 일시불 할인율 [%]
    pub cash_discount_percent: f64,
    /// 기준 연 수익률 [%]
    pub annual_yield_percent: f64,
}

impl Default for DefaultInputs {
    fn default() -> Self {
        Self {
            total_price: 140_000.0,
            down_payment: 70_000.0,
            financing_rate_percent: 0.0,
            months: 36,
            cash_discount_percent: 10.0,
            annual_yield_percent: 10.0,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/pt-br/en-us/ko-kr)
    pub language: String,
    pub currency: CurrencyPreset,
    /// TOML 언어팩 디렉터리
    pub locale_dir: Option<String>,
    pub defaults: DefaultInputs,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            currency: CurrencyPreset::Brl,
            locale_dir: None,
            defaults: DefaultInputs::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Deserialize(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_at(Path::new(DEFAULT_CONFIG_PATH))
}

/// 지정한 경로에서 설정을 로드한다. 파일이 없으면 기본값으로 만들어 둔다.
pub fn load_or_default_at(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        info!(path = %path.display(), "created default config");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new(DEFAULT_CONFIG_PATH))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
