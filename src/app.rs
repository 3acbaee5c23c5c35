use std::io::{BufRead, Write};
use std::path::Path;
use thiserror::Error;
use tracing::Level;

use crate::config::{Config, ConfigError};
use crate::currency::CurrencyPreset;
use crate::finance::InputError;
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("입력 오류: {0}")]
    Input(#[from] InputError),
}

/// stderr로 나가는 로그 구독자를 설치한다. `-v` 횟수로 수준을 올린다.
pub fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// 설정에서 번역기를 만든다.
pub fn translator_for(config: &Config, cli_lang: &str) -> Translator {
    let lang = i18n::resolve_language(cli_lang, Some(config.language.as_str()));
    Translator::new_with_pack(&lang, config.locale_dir.as_deref())
}

/// 명령줄로 받은 이번 실행 한정 설정. 설정 파일에는 저장하지 않는다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub currency: Option<CurrencyPreset>,
    pub locale_dir: Option<String>,
}

impl Overrides {
    /// 저장된 설정 위에 덮어쓴 실행용 설정을 만든다.
    pub fn apply(&self, base: &Config) -> Config {
        let mut cfg = base.clone();
        if let Some(currency) = self.currency {
            cfg.currency = currency;
        }
        if let Some(dir) = &self.locale_dir {
            cfg.locale_dir = Some(dir.clone());
        }
        cfg
    }
}

/// 대화형 CLI의 메인 루프를 실행한다.
///
/// `config`는 파일에 저장되는 설정이고, 화면에서는 `overrides`를 덮어쓴 값을 쓴다.
/// 설정 메뉴에서 사용자가 실제로 바꾼 항목만 `config`에 반영해 저장한다.
pub fn run<R: BufRead, W: Write>(
    config: &mut Config,
    overrides: &Overrides,
    config_path: &Path,
    cli_lang: &str,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    let mut session = overrides.apply(config);
    let mut tr = translator_for(&session, cli_lang);
    loop {
        match ui_cli::main_menu(&tr, input, out)? {
            MenuChoice::Simulate => ui_cli::handle_simulation(&tr, &session, input, out)?,
            MenuChoice::Settings => {
                let (language, currency) = (session.language.clone(), session.currency);
                ui_cli::handle_settings(&tr, &mut session, input, out)?;
                if session.language != language {
                    config.language = session.language.clone();
                }
                if session.currency != currency {
                    config.currency = session.currency;
                }
                config.save_to(config_path)?;
                tr = translator_for(&session, "auto");
                writeln!(out, "{}", tr.t(i18n::keys::SETTINGS_SAVED))?;
            }
            MenuChoice::Exit => {
                writeln!(out, "{}", tr.t(i18n::keys::APP_EXIT))?;
                break;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    fn run_with(overrides: &Overrides, path: &Path, script: &str) -> (Result<(), AppError>, String) {
        let mut cfg = Config::default();
        let mut out = Vec::new();
        let res = run(&mut cfg, overrides, path, "en", &mut script.as_bytes(), &mut out);
        (res, String::from_utf8(out).unwrap())
    }

    #[test]
    fn ends_cleanly_when_input_is_closed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let (res, text) = run_with(&Overrides::default(), &path, "");
        res.unwrap();
        assert!(text.ends_with("Exiting simulator.\n"), "{text}");
        assert!(!path.exists());
    }

    #[test]
    fn command_line_currency_is_used_but_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let overrides = Overrides {
            currency: Some(CurrencyPreset::Usd),
            locale_dir: Some(dir.path().display().to_string()),
        };
        let (res, text) = run_with(&overrides, &path, "1\n\n\n\n\n\n\n2\n\n\n0\n");
        res.unwrap();
        assert!(text.contains("$126,000.00"), "{text}");

        let saved = config::load_or_default_at(&path).unwrap();
        assert_eq!(saved.currency, CurrencyPreset::Brl);
        assert_eq!(saved.locale_dir, None);
    }

    #[test]
    fn settings_choice_is_saved_over_command_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let overrides = Overrides {
            currency: Some(CurrencyPreset::Usd),
            locale_dir: None,
        };
        let (res, _) = run_with(&overrides, &path, "2\n2\n3\n0\n");
        res.unwrap();

        let saved = config::load_or_default_at(&path).unwrap();
        assert_eq!(saved.currency, CurrencyPreset::Eur);
        assert_eq!(saved.language, "en-us");
    }

    #[test]
    fn overrides_leave_other_fields_alone() {
        let base = Config::default();
        assert_eq!(Overrides::default().apply(&base), base);
        let cfg = Overrides {
            currency: Some(CurrencyPreset::Eur),
            locale_dir: None,
        }
        .apply(&base);
        assert_eq!(cfg.currency, CurrencyPreset::Eur);
        assert_eq!(cfg.defaults, base.defaults);
    }
}
