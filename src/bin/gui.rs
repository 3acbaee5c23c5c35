#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점. 입력이 바뀔 때마다 전체를 다시 계산한다.

use eframe::{egui, App, Frame};
use std::env;
use tracing::warn;

use financing_simulator::{
    app, config,
    currency::{
        format_currency, format_percent, parse_currency_or_zero, CurrencyFormat, CurrencyPreset,
    },
    finance::{simulate, InputError},
    i18n::{self, keys},
    input::{TextInputs, MAX_MONTHS},
    report::Report,
};

const LANGUAGES: [(&str, &str); 3] = [("pt-br", "Português"), ("en-us", "English"), ("ko-kr", "한국어")];

fn main() -> Result<(), eframe::Error> {
    // --lang xx 또는 --lang=xx (xx: auto/pt/en/ko), -v 반복으로 로그 수준
    let mut cli_lang = String::from("auto");
    let mut verbosity = 0u8;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = val.to_string();
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = args[i + 1].clone();
                i += 1;
            }
        } else if a.starts_with("-v") && a[1..].chars().all(|c| c == 'v') {
            verbosity = verbosity.saturating_add((a.len() - 1) as u8);
        }
        i += 1;
    }
    app::init_tracing(verbosity);

    let app_cfg = match config::load_or_default() {
        Ok(cfg) => cfg,
        Err(err) => {
            warn!(%err, "config unavailable, using defaults");
            config::Config::default()
        }
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([640.0, 780.0]),
        ..Default::default()
    };
    let title = app::translator_for(&app_cfg, &cli_lang).t(keys::APP_TITLE).to_string();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg, &cli_lang))),
    )
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_code: String,
    inputs: TextInputs,
}

impl GuiApp {
    fn new(config: config::Config, cli_lang: &str) -> Self {
        let tr = app::translator_for(&config, cli_lang);
        let inputs = TextInputs::from_defaults(&config.defaults, &config.currency.format());
        Self {
            lang_code: tr.language_code().to_string(),
            tr,
            inputs,
            config,
        }
    }

    fn compute(&self) -> Result<Report, InputError> {
        let fmt = self.config.currency.format();
        let sim = self.inputs.to_simulation_input(&fmt)?;
        Ok(Report::build(&simulate(&sim), &fmt, &self.tr))
    }

    /// 통화를 바꾸면 입력칸의 표기도 새 형식으로 다시 쓴다.
    fn set_currency(&mut self, preset: CurrencyPreset) {
        let old = self.config.currency.format();
        let new = preset.format();
        let amount = |text: &str| format_currency(parse_currency_or_zero(text, &old), &new);
        let percent = |text: &str| reformat_percent(text, &old, &new);
        self.inputs.total_price = amount(&self.inputs.total_price);
        self.inputs.down_payment = amount(&self.inputs.down_payment);
        self.inputs.financing_rate = percent(&self.inputs.financing_rate);
        self.inputs.cash_discount = percent(&self.inputs.cash_discount);
        self.inputs.annual_yield = percent(&self.inputs.annual_yield);
        self.config.currency = preset;
        self.persist();
    }

    fn set_language(&mut self, code: &str) {
        self.config.language = code.to_string();
        self.tr = app::translator_for(&self.config, code);
        self.persist();
    }

    fn persist(&self) {
        if let Err(err) = self.config.save() {
            warn!(%err, "failed to save config");
        }
    }

    fn ui_settings(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mut lang = self.lang_code.clone();
            egui::ComboBox::from_label(self.tr.t(keys::GUI_LANGUAGE))
                .selected_text(language_label(&lang))
                .show_ui(ui, |ui| {
                    for (code, label) in LANGUAGES {
                        ui.selectable_value(&mut lang, code.to_string(), label);
                    }
                });
            if lang != self.lang_code {
                self.lang_code = lang;
                let code = self.lang_code.clone();
                self.set_language(&code);
            }

            let mut preset = self.config.currency;
            egui::ComboBox::from_label(self.tr.t(keys::GUI_CURRENCY))
                .selected_text(preset.code())
                .show_ui(ui, |ui| {
                    for p in CurrencyPreset::ALL {
                        ui.selectable_value(&mut preset, p, p.code());
                    }
                });
            if preset != self.config.currency {
                self.set_currency(preset);
            }
        });
    }

    fn ui_inputs(&mut self, ui: &mut egui::Ui) {
        let tr = &self.tr;
        let inputs = &mut self.inputs;
        egui::Grid::new("inputs")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label(tr.t(keys::INPUT_TOTAL_PRICE));
                ui.text_edit_singleline(&mut inputs.total_price);
                ui.end_row();
                ui.label(tr.t(keys::INPUT_DOWN_PAYMENT));
                ui.text_edit_singleline(&mut inputs.down_payment);
                ui.end_row();
                ui.label(tr.t(keys::INPUT_FINANCING_RATE));
                ui.text_edit_singleline(&mut inputs.financing_rate);
                ui.end_row();
                ui.label(tr.t(keys::INPUT_MONTHS));
                ui.add(egui::DragValue::new(&mut inputs.months).clamp_range(1..=MAX_MONTHS));
                ui.end_row();
                ui.label(tr.t(keys::INPUT_CASH_DISCOUNT));
                ui.text_edit_singleline(&mut inputs.cash_discount);
                ui.end_row();
                ui.label(tr.t(keys::INPUT_ANNUAL_YIELD));
                ui.text_edit_singleline(&mut inputs.annual_yield);
                ui.end_row();
            });
    }

    fn ui_report(&self, ui: &mut egui::Ui, report: &Report) {
        let tr = &self.tr;
        ui.heading(tr.t(keys::REPORT_COMPARISON_HEADING));
        egui::Grid::new("comparison")
            .num_columns(3)
            .striped(true)
            .show(ui, |ui| {
                ui.strong(tr.t(keys::COLUMN_SCENARIO));
                ui.strong(tr.t(keys::COLUMN_COST_TOTAL));
                ui.strong(tr.t(keys::COLUMN_BALANCE));
                ui.end_row();
                ui.label(tr.t(keys::SCENARIO_CASH));
                ui.label(report.cash_total.as_str());
                ui.label(report.cash_balance.as_str());
                ui.end_row();
                ui.label(tr.t(keys::SCENARIO_FINANCED));
                ui.label(report.financed_total.as_str());
                ui.label(report.financed_balance.as_str());
                ui.end_row();
            });
        ui.label(format!("{} {}", tr.t(keys::RESULT_INSTALLMENT), report.installment));
        ui.label(format!("{} {}", tr.t(keys::RESULT_MONTHLY_YIELD), report.monthly_yield));
        ui.add_space(6.0);
        ui.label(egui::RichText::new(report.verdict.as_str()).strong().size(16.0));
        ui.separator();

        ui.heading(tr.t(keys::REPORT_MONTHLY_HEADING));
        egui::ScrollArea::vertical()
            .auto_shrink([false, true])
            .show(ui, |ui| {
                egui::Grid::new("monthly")
                    .num_columns(3)
                    .striped(true)
                    .show(ui, |ui| {
                        ui.strong(tr.t(keys::COLUMN_MONTH));
                        ui.strong(tr.t(keys::COLUMN_CASH_BALANCE));
                        ui.strong(tr.t(keys::COLUMN_FINANCED_BALANCE));
                        ui.end_row();
                        for row in &report.rows {
                            ui.label(row.month.to_string());
                            ui.label(row.cash_balance.as_str());
                            ui.label(row.financed_balance.as_str());
                            ui.end_row();
                        }
                    });
            });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.tr.t(keys::APP_TITLE));
            self.ui_settings(ui);
            ui.separator();
            self.ui_inputs(ui);
            ui.separator();
            match self.compute() {
                Ok(report) => self.ui_report(ui, &report),
                Err(err) => {
                    ui.colored_label(
                        egui::Color32::RED,
                        format!("{}: {err}", self.tr.t(keys::ERROR_PREFIX)),
                    );
                }
            }
        });
    }
}

fn language_label(code: &str) -> &'static str {
    LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
        .unwrap_or("auto")
}

fn reformat_percent(text: &str, old: &CurrencyFormat, new: &CurrencyFormat) -> String {
    format_percent(parse_currency_or_zero(text, old), new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_prefers_cash() {
        let app = GuiApp::new(config::Config::default(), "pt");
        let report = app.compute().unwrap();
        assert_eq!(report.cash_total, "R$ 126.000,00");
        assert_eq!(report.verdict, "Compra à vista é mais vantajosa.");
        assert_eq!(report.rows.len(), 36);
    }

    #[test]
    fn percent_fields_follow_decimal_separator() {
        let brl = CurrencyPreset::Brl.format();
        let usd = CurrencyPreset::Usd.format();
        assert_eq!(reformat_percent("10,5", &brl, &usd), "10.5");
        assert_eq!(reformat_percent("1,25", &brl, &usd), "1.25");
        assert_eq!(reformat_percent("0,79", &brl, &usd), "0.79");
        assert_eq!(reformat_percent("abc", &brl, &usd), "0.0");
    }

    #[test]
    fn language_labels() {
        assert_eq!(language_label("en-us"), "English");
        assert_eq!(language_label("xx"), "auto");
    }
}
