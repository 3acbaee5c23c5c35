use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;
use tracing::debug;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_TITLE: &str = "general.app_title";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_SIMULATE: &str = "main_menu.simulate";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const INPUT_TOTAL_PRICE: &str = "input.total_price";
    pub const INPUT_DOWN_PAYMENT: &str = "input.down_payment";
    pub const INPUT_FINANCING_RATE: &str = "input.financing_rate";
    pub const INPUT_MONTHS: &str = "input.months";
    pub const INPUT_CASH_DISCOUNT: &str = "input.cash_discount";
    pub const INPUT_ANNUAL_YIELD: &str = "input.annual_yield";
    pub const INPUT_KEEP_DEFAULT: &str = "input.keep_default";

    pub const REPORT_COMPARISON_HEADING: &str = "report.comparison_heading";
    pub const REPORT_MONTHLY_HEADING: &str = "report.monthly_heading";
    pub const COLUMN_SCENARIO: &str = "column.scenario";
    pub const COLUMN_COST_TOTAL: &str = "column.cost_total";
    pub const COLUMN_BALANCE: &str = "column.balance";
    pub const COLUMN_MONTH: &str = "column.month";
    pub const COLUMN_CASH_BALANCE: &str = "column.cash_balance";
    pub const COLUMN_FINANCED_BALANCE: &str = "column.financed_balance";
    pub const SCENARIO_CASH: &str = "scenario.cash";
    pub const SCENARIO_FINANCED: &str = "scenario.financed";
    pub const RESULT_INSTALLMENT: &str = "result.installment";
    pub const RESULT_MONTHLY_YIELD: &str = "result.monthly_yield";
    pub const VERDICT_CASH: &str = "verdict.cash";
    pub const VERDICT_FINANCING: &str = "verdict.financing";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_LANGUAGE_OPTIONS: &str = "settings.language_options";
    pub const SETTINGS_CURRENCY_OPTIONS: &str = "settings.currency_options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_INVALID_TERM: &str = "error.invalid_term";

    pub const GUI_LANGUAGE: &str = "gui.language";
    pub const GUI_CURRENCY: &str = "gui.currency";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Pt,
    En,
    Ko,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::Pt
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Pt => "pt-br",
            Language::En => "en-us",
            Language::Ko => "ko-kr",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드에 따라 번역기를 생성한다. 알 수 없는 코드는 pt-br로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        if overrides.is_some() {
            debug!(lang = lang_code, "language pack loaded");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 언어팩 → 내장 테이블 → 포르투갈어 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        let builtin = match self.lang {
            Language::En => en(key),
            Language::Ko => ko(key),
            Language::Pt => None,
        };
        builtin.unwrap_or_else(|| pt(key))
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "pt-br".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("pt") => Some("pt-br".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        other if other.starts_with("ko") => Some("ko-kr".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    normalize_lang(&lang)
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    for var in ["LC_ALL", "LANG"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 아래 key = "value".
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn pt(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Erro",
        APP_TITLE => "Simulador",
        APP_EXIT => "Encerrando o simulador.",
        MAIN_MENU_SIMULATE => "1) Simular compra",
        MAIN_MENU_SETTINGS => "2) Configurações",
        MAIN_MENU_EXIT => "0) Sair",
        PROMPT_MENU_SELECT => "Escolha uma opção: ",
        INVALID_SELECTION_RETRY => "Opção inválida. Tente novamente.",
        INPUT_TOTAL_PRICE => "Valor total da compra",
        INPUT_DOWN_PAYMENT => "Valor de entrada do financiamento",
        INPUT_FINANCING_RATE => "Taxa de juros do financiamento (% mensal)",
        INPUT_MONTHS => "Número de meses do financiamento",
        INPUT_CASH_DISCOUNT => "Desconto para compra à vista (%)",
        INPUT_ANNUAL_YIELD => "Rendimento anual (%)",
        INPUT_KEEP_DEFAULT => "Enter mantém o valor atual.",
        REPORT_COMPARISON_HEADING => "Comparação dos Cenários",
        REPORT_MONTHLY_HEADING => "Saldos Mensais",
        COLUMN_SCENARIO => "Cenário",
        COLUMN_COST_TOTAL => "CET Total",
        COLUMN_BALANCE => "Saldo",
        COLUMN_MONTH => "Mês",
        COLUMN_CASH_BALANCE => "Saldo - Compra à Vista",
        COLUMN_FINANCED_BALANCE => "Saldo - Financiamento",
        SCENARIO_CASH => "Compra à Vista",
        SCENARIO_FINANCED => "Financiamento",
        RESULT_INSTALLMENT => "Parcela mensal:",
        RESULT_MONTHLY_YIELD => "Rendimento mensal equivalente:",
        VERDICT_CASH => "Compra à vista é mais vantajosa.",
        VERDICT_FINANCING => "Financiamento é mais vantajoso.",
        SETTINGS_HEADING => "\n-- Configurações --",
        SETTINGS_CURRENT => "Atual:",
        SETTINGS_LANGUAGE_OPTIONS => "Idioma: 1) Português  2) English  3) 한국어",
        SETTINGS_CURRENCY_OPTIONS => "Moeda: 1) BRL  2) USD  3) EUR",
        SETTINGS_PROMPT_CHANGE => "Número para alterar (Enter para manter): ",
        SETTINGS_INVALID => "Entrada inválida; nada foi alterado.",
        SETTINGS_SAVED => "Configurações salvas.",
        ERROR_INVALID_NUMBER => "Digite um número inteiro.",
        ERROR_INVALID_TERM => "O número de meses deve ser pelo menos 1.",
        GUI_LANGUAGE => "Idioma",
        GUI_CURRENCY => "Moeda",
        _ => "[tradução ausente]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_TITLE => "Simulator",
        APP_EXIT => "Exiting simulator.",
        MAIN_MENU_SIMULATE => "1) Simulate purchase",
        MAIN_MENU_SETTINGS => "2) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        INPUT_TOTAL_PRICE => "Total purchase price",
        INPUT_DOWN_PAYMENT => "Financing down payment",
        INPUT_FINANCING_RATE => "Financing interest rate (% per month)",
        INPUT_MONTHS => "Financing term (months)",
        INPUT_CASH_DISCOUNT => "Cash purchase discount (%)",
        INPUT_ANNUAL_YIELD => "Annual yield (%)",
        INPUT_KEEP_DEFAULT => "Press enter to keep the current value.",
        REPORT_COMPARISON_HEADING => "Scenario Comparison",
        REPORT_MONTHLY_HEADING => "Monthly Balances",
        COLUMN_SCENARIO => "Scenario",
        COLUMN_COST_TOTAL => "Total cost",
        COLUMN_BALANCE => "Balance",
        COLUMN_MONTH => "Month",
        COLUMN_CASH_BALANCE => "Balance - Cash",
        COLUMN_FINANCED_BALANCE => "Balance - Financed",
        SCENARIO_CASH => "Cash purchase",
        SCENARIO_FINANCED => "Financing",
        RESULT_INSTALLMENT => "Monthly installment:",
        RESULT_MONTHLY_YIELD => "Equivalent monthly yield:",
        VERDICT_CASH => "Paying cash is the better deal.",
        VERDICT_FINANCING => "Financing is the better deal.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current:",
        SETTINGS_LANGUAGE_OPTIONS => "Language: 1) Português  2) English  3) 한국어",
        SETTINGS_CURRENCY_OPTIONS => "Currency: 1) BRL  2) USD  3) EUR",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to keep): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings saved.",
        ERROR_INVALID_NUMBER => "Please enter a whole number.",
        ERROR_INVALID_TERM => "The term must be at least 1 month.",
        GUI_LANGUAGE => "Language",
        GUI_CURRENCY => "Currency",
        _ => return None,
    })
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_TITLE => "시뮬레이터",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_SIMULATE => "1) 구매 시뮬레이션",
        MAIN_MENU_SETTINGS => "2) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        INPUT_TOTAL_PRICE => "총 구매가",
        INPUT_DOWN_PAYMENT => "할부 계약금",
        INPUT_FINANCING_RATE => "할부 이자율 (% 월)",
        INPUT_MONTHS => "할부 개월 수",
        INPUT_CASH_DISCOUNT => "일시불 할인율 (%)",
        INPUT_ANNUAL_YIELD => "연 수익률 (%)",
        INPUT_KEEP_DEFAULT => "엔터를 누르면 현재 값을 유지합니다.",
        REPORT_COMPARISON_HEADING => "시나리오 비교",
        REPORT_MONTHLY_HEADING => "월별 잔액",
        COLUMN_SCENARIO => "시나리오",
        COLUMN_COST_TOTAL => "총지급액",
        COLUMN_BALANCE => "잔액",
        COLUMN_MONTH => "월",
        COLUMN_CASH_BALANCE => "잔액 - 일시불",
        COLUMN_FINANCED_BALANCE => "잔액 - 할부",
        SCENARIO_CASH => "일시불",
        SCENARIO_FINANCED => "할부",
        RESULT_INSTALLMENT => "월 납입액:",
        RESULT_MONTHLY_YIELD => "동등 월 수익률:",
        VERDICT_CASH => "일시불 구매가 더 유리합니다.",
        VERDICT_FINANCING => "할부 구매가 더 유리합니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재:",
        SETTINGS_LANGUAGE_OPTIONS => "언어: 1) Português  2) English  3) 한국어",
        SETTINGS_CURRENCY_OPTIONS => "통화: 1) BRL  2) USD  3) EUR",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(유지하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        ERROR_INVALID_NUMBER => "정수를 입력하세요.",
        ERROR_INVALID_TERM => "기간은 1개월 이상이어야 합니다.",
        GUI_LANGUAGE => "언어",
        GUI_CURRENCY => "통화",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_codes_fall_back_to_portuguese() {
        let tr = Translator::new("xx");
        assert_eq!(tr.language(), Language::Pt);
        assert_eq!(tr.t(keys::VERDICT_CASH), "Compra à vista é mais vantajosa.");
    }

    #[test]
    fn english_and_korean_tables() {
        assert_eq!(Translator::new("en-us").t(keys::COLUMN_BALANCE), "Balance");
        assert_eq!(Translator::new("ko").t(keys::COLUMN_BALANCE), "잔액");
    }

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language("en", Some("ko-kr")), "en-us");
        assert_eq!(resolve_language("auto", Some("pt")), "pt-br");
    }

    #[test]
    fn pack_overrides_builtin_strings() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("en.toml"),
            "[verdict]\ncash = \"Pay up front.\"\n",
        )
        .unwrap();
        let tr = Translator::new_with_pack("en-us", dir.path().to_str());
        assert_eq!(tr.t(keys::VERDICT_CASH), "Pay up front.");
        assert_eq!(tr.t(keys::VERDICT_FINANCING), "Financing is the better deal.");
    }

    #[test]
    fn nested_tables_flatten_to_dotted_keys() {
        let map = parse_toml_to_map("a = \"1\"\n[b.c]\nd = \"2\"\n").unwrap();
        assert_eq!(map.get("a").map(String::as_str), Some("1"));
        assert_eq!(map.get("b.c.d").map(String::as_str), Some("2"));
    }
}
