#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 GUI 진입점. 기본 폼과 확장 폼(보호층, 케이스 저장, CSV) 두 탭을 제공한다.

use eframe::{egui, App, Frame};
use egui_plot::{Bar, BarChart, Legend, Plot};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};
use solar_glazing_toolbox::{
    config, glazing, i18n,
    input::{self, CalculationInput, CalculationReport},
    session::{CaseSession, SavedCase},
    units::{
        convert_area, convert_irradiance, convert_power, AreaUnit, IrradianceUnit, PowerUnit,
    },
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/ko/en)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }

    let mut viewport = egui::ViewportBuilder::default().with_inner_size([1000.0, 720.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_else(|e| {
        eprintln!("Config load failed, using defaults: {e}");
        config::Config::default()
    });
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    eframe::run_native(
        "Solar Glazing Toolbox",
        native,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    // 기본 글꼴 뒤에 두어 라틴 문자는 기본 글꼴로, 한글만 대체 글꼴로 그린다.
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(font_name.clone());
    }
    ctx.set_fonts(fonts);
}

/// 한글 표시용 글꼴을 찾는다.
/// 1) assets/fonts/ 2) Windows 글꼴 폴더 3) 리눅스/맥 CJK 글꼴 경로
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<std::path::PathBuf> = vec![
        "assets/fonts/malgun.ttf".into(),
        "assets/fonts/NanumGothic.ttf".into(),
    ];
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for cand in ["malgun.ttf", "gulim.ttc"] {
            candidates.push(fonts.join(cand));
        }
    }
    candidates.extend(
        [
            "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
            "/System/Library/Fonts/AppleSDGothicNeo.ttc",
        ]
        .iter()
        .map(std::path::PathBuf::from),
    );

    for p in candidates {
        if p.exists() {
            let bytes = fs::read(&p)
                .map_err(|e| format!("Failed to read font file ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "hangul_font");
            return Ok(());
        }
    }
    Err("No Hangul font found; Korean labels may not render.".into())
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

fn heading_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.heading(text).on_hover_text(tip)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Tab {
    Basic,
    Extended,
}

/// 한 번 계산된 결과와 그때의 입력.
#[derive(Clone, Debug)]
struct Computed {
    material_name: String,
    input: CalculationInput,
    report: CalculationReport,
}

/// 폼 입력 상태. 면적/일사량은 현재 표시 단위 기준으로 보관한다.
#[derive(Clone, Debug)]
struct FormState {
    material_id: u32,
    area: f64,
    irradiance: f64,
    layer_enabled: bool,
    layer_absorption: f64,
    result: Option<Computed>,
    error: Option<String>,
}

impl FormState {
    fn from_config(cfg: &config::Config) -> Self {
        let units = &cfg.default_units;
        let material_id = if glazing::find_material(cfg.default_material_id).is_some() {
            cfg.default_material_id
        } else {
            glazing::materials().first().map(|m| m.id).unwrap_or(1)
        };
        Self {
            material_id,
            area: convert_area(cfg.default_area_m2, AreaUnit::SquareMeter, units.area),
            irradiance: convert_irradiance(
                cfg.default_irradiance_w_m2,
                IrradianceUnit::WattPerSquareMeter,
                units.irradiance,
            ),
            layer_enabled: false,
            layer_absorption: cfg.default_layer_absorption.clamp(0.0, 1.0),
            result: None,
            error: None,
        }
    }

    /// 표시 단위 입력을 SI로 환산해 계산한다. 결과/오류를 상태에 기록한다.
    fn compute(&mut self, units: &config::DefaultUnits, with_layer: bool) {
        match self.evaluate(units, with_layer) {
            Ok(c) => {
                self.result = Some(c);
                self.error = None;
            }
            Err(e) => {
                self.result = None;
                self.error = Some(e);
            }
        }
    }

    fn evaluate(&self, units: &config::DefaultUnits, with_layer: bool) -> Result<Computed, String> {
        let transmittance =
            glazing::transmittance_of(self.material_id).map_err(|e| e.to_string())?;
        let material_name = glazing::find_material(self.material_id)
            .map(|m| m.name)
            .unwrap_or_default();
        let mut input = CalculationInput::new(
            convert_area(self.area, units.area, AreaUnit::SquareMeter),
            convert_irradiance(
                self.irradiance,
                units.irradiance,
                IrradianceUnit::WattPerSquareMeter,
            ),
            transmittance,
        );
        if with_layer && self.layer_enabled {
            input = input.with_layer(self.layer_absorption);
        }
        let report = input::evaluate(&input).map_err(|e| e.to_string())?;
        Ok(Computed {
            material_name: material_name.to_string(),
            input,
            report,
        })
    }

    /// 단위 시스템이 바뀌면 같은 물리량이 되도록 입력 값을 환산한다.
    fn convert_units(&mut self, from: &config::DefaultUnits, to: &config::DefaultUnits) {
        self.area = convert_area(self.area, from.area, to.area);
        self.irradiance = convert_irradiance(self.irradiance, from.irradiance, to.irradiance);
    }
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    export_dir_input: String,
    settings_status: Option<String>,
    tab: Tab,
    show_settings_modal: bool,
    show_formula_modal: bool,
    show_help_modal: bool,
    basic: FormState,
    extended: FormState,
    label_input: String,
    session: CaseSession,
    export_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let has_overrides = tr.lookup("gui.nav.app_title").is_some();
        eprintln!("GUI language resolved: {lang_code}, overrides_loaded={has_overrides}");
        let basic = FormState::from_config(&config);
        let mut extended = FormState::from_config(&config);
        extended.compute(&config.default_units, true);
        Self {
            lang_input: config.language.clone(),
            export_dir_input: config.export_dir.clone().unwrap_or_default(),
            settings_status: None,
            tab: Tab::Basic,
            show_settings_modal: false,
            show_formula_modal: false,
            show_help_modal: false,
            basic,
            extended,
            label_input: String::new(),
            session: CaseSession::new(),
            export_status: None,
            tr,
            config,
        }
    }

    fn txt(&self, key: &str, default: &str) -> String {
        self.tr.lookup(key).unwrap_or_else(|| default.to_string())
    }

    /// 단위 프리셋을 적용하고 두 폼의 입력 값을 새 단위로 환산한다.
    fn apply_unit_preset(&mut self, system: config::UnitSystem) {
        let before = self.config.default_units.clone();
        self.config.apply_unit_system(system);
        let after = self.config.default_units.clone();
        self.basic.convert_units(&before, &after);
        self.extended.convert_units(&before, &after);
        if self.basic.result.is_some() {
            self.basic.compute(&after, false);
        }
        self.extended.compute(&after, true);
    }

    /// 확장 폼의 현재 결과를 세션에 저장한다. 라벨이 비어 있으면 "Case n"을 쓴다.
    fn save_current_case(&mut self) -> bool {
        let Some(c) = self.extended.result.clone() else {
            return false;
        };
        let label = match self.label_input.trim() {
            "" => self.session.next_default_label(),
            s => s.to_string(),
        };
        self.session.push(SavedCase {
            label,
            material_name: c.material_name,
            input: c.input,
            report: c.report,
        });
        self.label_input.clear();
        true
    }

    fn export_csv(&mut self) {
        if self.session.is_empty() {
            self.export_status = Some(self.txt("gui.cases.export_empty", "No saved cases to export."));
            return;
        }
        let mut dialog = FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name("glazing_cases.csv");
        if let Some(dir) = self.config.export_dir.as_deref().filter(|d| !d.is_empty()) {
            dialog = dialog.set_directory(dir);
        }
        let Some(path) = dialog.save_file() else {
            return;
        };
        match self.session.write_csv(&path) {
            Ok(()) => {
                self.export_status = Some(format!(
                    "{} {}",
                    self.txt("gui.cases.exported", "Exported:"),
                    path.display()
                ));
            }
            Err(e) => {
                eprintln!("CSV export failed: {e}");
                self.export_status = Some(e.to_string());
            }
        }
    }

    /// 사이드 메뉴를 제공한다.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        ui.style_mut().wrap = Some(false);
        ui.vertical_centered(|ui| {
            ui.heading(txt("gui.nav.heading", "Menu"));
            ui.add_space(8.0);
        });
        for (tab, label) in [
            (Tab::Basic, txt("gui.tab.basic", "Basic calculator")),
            (Tab::Extended, txt("gui.tab.extended", "Protective layer & cases")),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            let resp = ui
                .add(button)
                .on_hover_text(txt("gui.nav.switch_tip", "Switch menu"));
            if resp.clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
    }

    /// 재료/면적/일사량 (+보호층) 입력 그리드. 값이 바뀌면 true.
    fn input_grid(
        ui: &mut egui::Ui,
        id: &str,
        form: &mut FormState,
        units: &config::DefaultUnits,
        show_layer: bool,
        txt: &dyn Fn(&str, &str) -> String,
    ) -> bool {
        let mut changed = false;
        egui::Grid::new(id)
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                label_with_tip(
                    ui,
                    &txt("gui.input.material", "Glazing type"),
                    &txt("gui.input.material_tip", "Transmittance τ comes from the material table"),
                );
                let selected = glazing::find_material(form.material_id)
                    .map(|m| m.name.to_string())
                    .unwrap_or_default();
                egui::ComboBox::from_id_source(format!("{id}_material"))
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        for m in glazing::materials() {
                            let label = format!("{} (τ = {:.2})", m.name, m.transmittance);
                            if ui.selectable_value(&mut form.material_id, m.id, label).changed() {
                                changed = true;
                            }
                        }
                    });
                ui.end_row();

                label_with_tip(
                    ui,
                    &format!("{} [{}]", txt("gui.input.area", "Window area"), units.area.symbol()),
                    &txt("gui.input.area_tip", "Glazed area, 0 or more"),
                );
                changed |= ui
                    .add(
                        egui::DragValue::new(&mut form.area)
                            .speed(0.1)
                            .clamp_range(0.0..=f64::MAX),
                    )
                    .changed();
                ui.end_row();

                label_with_tip(
                    ui,
                    &format!(
                        "{} [{}]",
                        txt("gui.input.irradiance", "Solar irradiance"),
                        units.irradiance.symbol()
                    ),
                    &txt("gui.input.irradiance_tip", "Incident solar power per unit area"),
                );
                changed |= ui
                    .add(
                        egui::DragValue::new(&mut form.irradiance)
                            .speed(5.0)
                            .clamp_range(0.0..=f64::MAX),
                    )
                    .changed();
                ui.end_row();

                if show_layer {
                    label_with_tip(
                        ui,
                        &txt("gui.input.layer", "Extra protective layer"),
                        &txt(
                            "gui.input.layer_tip",
                            "Film/screen in front of the glazing that removes part of the irradiance",
                        ),
                    );
                    changed |= ui
                        .checkbox(&mut form.layer_enabled, txt("gui.input.layer_enable", "Enabled"))
                        .changed();
                    ui.end_row();

                    if form.layer_enabled {
                        ui.label(txt("gui.input.layer_absorption", "Layer absorption (0-1)"));
                        changed |= ui
                            .add(egui::Slider::new(&mut form.layer_absorption, 0.0..=1.0).step_by(0.01))
                            .changed();
                        ui.end_row();
                    }
                }
            });
        changed
    }

    fn result_grid(
        ui: &mut egui::Ui,
        id: &str,
        c: &Computed,
        units: &config::DefaultUnits,
        txt: &dyn Fn(&str, &str) -> String,
    ) {
        let p = |w: f64| {
            format!(
                "{:.2} {}",
                convert_power(w, PowerUnit::Watt, units.power),
                units.power.symbol()
            )
        };
        egui::Grid::new(id)
            .num_columns(3)
            .striped(true)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                ui.label(txt("gui.result.material", "Selected material"));
                ui.strong(&c.material_name);
                ui.label(format!("τ = {:.2}", c.input.transmittance));
                ui.end_row();

                ui.label("");
                ui.strong(txt("gui.result.base", "Without layer"));
                if c.report.with_layer.is_some() {
                    ui.strong(txt("gui.result.with_layer", "With layer"));
                } else {
                    ui.label("");
                }
                ui.end_row();

                ui.label(txt("gui.result.absorbed", "Absorbed radiation"));
                ui.strong(p(c.report.base.absorbed_w));
                match c.report.with_layer {
                    Some(l) => ui.strong(p(l.absorbed_w)),
                    None => ui.label(""),
                };
                ui.end_row();

                ui.label(txt("gui.result.transmitted", "Transmitted radiation"));
                ui.strong(p(c.report.base.transmitted_w));
                match c.report.with_layer {
                    Some(l) => ui.strong(p(l.transmitted_w)),
                    None => ui.label(""),
                };
                ui.end_row();

                if let (Some(g), Some(r)) = (
                    c.report.attenuated_irradiance_w_m2,
                    c.report.reduction_percent,
                ) {
                    ui.label(txt("gui.result.attenuated", "Irradiance behind layer"));
                    ui.label("");
                    ui.label(format!(
                        "{:.2} {}",
                        convert_irradiance(g, IrradianceUnit::WattPerSquareMeter, units.irradiance),
                        units.irradiance.symbol()
                    ));
                    ui.end_row();

                    ui.label(txt("gui.result.reduction", "Transmitted reduction"));
                    ui.label("");
                    ui.strong(format!("{r:.1} %"));
                    ui.end_row();
                }
            });
    }

    fn radiation_chart(
        ui: &mut egui::Ui,
        id: &str,
        report: &CalculationReport,
        unit: PowerUnit,
        txt: &dyn Fn(&str, &str) -> String,
    ) {
        let conv = |w: f64| convert_power(w, PowerUnit::Watt, unit);
        let abs_label = txt("gui.result.absorbed", "Absorbed radiation");
        let trans_label = txt("gui.result.transmitted", "Transmitted radiation");
        let offset = if report.with_layer.is_some() { 0.2 } else { 0.0 };
        let bars = |values: (f64, f64), shift: f64| {
            vec![
                Bar::new(shift, conv(values.0)).name(&abs_label),
                Bar::new(1.0 + shift, conv(values.1)).name(&trans_label),
            ]
        };
        let base = BarChart::new(bars(
            (report.base.absorbed_w, report.base.transmitted_w),
            -offset,
        ))
        .width(0.35)
        .name(txt("gui.result.base", "Without layer"));
        let layer = report.with_layer.map(|l| {
            BarChart::new(bars((l.absorbed_w, l.transmitted_w), offset))
                .width(0.35)
                .name(txt("gui.result.with_layer", "With layer"))
        });
        Plot::new(id)
            .legend(Legend::default())
            .height(220.0)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .y_axis_label(unit.symbol())
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(base);
                if let Some(l) = layer {
                    plot_ui.bar_chart(l);
                }
            });
    }

    fn ui_basic(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.basic.heading", "Solar radiation through glazing"),
            &txt(
                "gui.basic.tip",
                "Absorbed = (1-τ)·G·A, transmitted = τ·G·A",
            ),
        );
        ui.add_space(8.0);
        let units = self.config.default_units.clone();
        egui::Frame::group(ui.style()).show(ui, |ui| {
            Self::input_grid(ui, "basic_grid", &mut self.basic, &units, false, &txt);
            ui.add_space(6.0);
            if ui.button(txt("gui.basic.calculate", "Calculate")).clicked() {
                self.basic.compute(&units, false);
            }
        });
        ui.add_space(10.0);
        if let Some(err) = &self.basic.error {
            ui.colored_label(ui.visuals().error_fg_color, err);
        }
        if let Some(c) = &self.basic.result {
            ui.heading(txt("gui.result.heading", "Results"));
            Self::result_grid(ui, "basic_result", c, &units, &txt);
            ui.add_space(8.0);
            ui.heading(txt("gui.result.chart", "Radiation distribution"));
            Self::radiation_chart(ui, "basic_chart", &c.report, units.power, &txt);
        }
    }

    fn ui_extended(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        heading_with_tip(
            ui,
            &txt("gui.extended.heading", "Glazing with protective layer"),
            &txt(
                "gui.extended.tip",
                "Results update as you edit. The layer removes a fraction of the irradiance before it reaches the glazing.",
            ),
        );
        ui.add_space(8.0);
        let units = self.config.default_units.clone();
        let changed = egui::Frame::group(ui.style())
            .show(ui, |ui| {
                Self::input_grid(ui, "extended_grid", &mut self.extended, &units, true, &txt)
            })
            .inner;
        if changed {
            self.extended.compute(&units, true);
        }
        ui.add_space(10.0);
        if let Some(err) = &self.extended.error {
            ui.colored_label(ui.visuals().error_fg_color, err);
        }
        if let Some(c) = &self.extended.result {
            ui.heading(txt("gui.result.heading", "Results"));
            Self::result_grid(ui, "extended_result", c, &units, &txt);
            ui.add_space(8.0);
            Self::radiation_chart(ui, "extended_chart", &c.report, units.power, &txt);
        }

        ui.add_space(10.0);
        ui.separator();
        ui.heading(txt("gui.cases.heading", "Saved cases"));
        ui.horizontal(|ui| {
            ui.label(txt("gui.cases.label", "Label"));
            ui.add(
                egui::TextEdit::singleline(&mut self.label_input)
                    .hint_text(self.session.next_default_label())
                    .desired_width(180.0),
            );
            let can_save = self.extended.result.is_some();
            if ui
                .add_enabled(can_save, egui::Button::new(txt("gui.cases.save", "Save case")))
                .clicked()
            {
                self.save_current_case();
            }
            if ui.button(txt("gui.cases.export", "Export CSV")).clicked() {
                self.export_csv();
            }
            if ui
                .add_enabled(
                    !self.session.is_empty(),
                    egui::Button::new(txt("gui.cases.clear", "Clear all")),
                )
                .clicked()
            {
                self.session.clear();
            }
        });
        if let Some(msg) = &self.export_status {
            ui.small(msg);
        }
        ui.add_space(6.0);
        if self.session.is_empty() {
            ui.label(txt("gui.cases.empty", "No cases saved yet."));
            return;
        }
        let p = |w: f64| format!("{:.1}", convert_power(w, PowerUnit::Watt, units.power));
        let mut to_remove = None;
        egui::Grid::new("cases_table")
            .striped(true)
            .spacing([10.0, 4.0])
            .show(ui, |ui| {
                for h in [
                    "#".to_string(),
                    txt("gui.cases.label", "Label"),
                    txt("gui.input.material", "Glazing type"),
                    "τ".to_string(),
                    format!("A [{}]", units.area.symbol()),
                    format!("G [{}]", units.irradiance.symbol()),
                    txt("gui.cases.col_layer", "Layer"),
                    format!("{} [{}]", txt("gui.cases.col_abs", "Abs."), units.power.symbol()),
                    format!("{} [{}]", txt("gui.cases.col_trans", "Trans."), units.power.symbol()),
                    format!("{} [{}]", txt("gui.cases.col_abs_layer", "Abs.+layer"), units.power.symbol()),
                    format!("{} [{}]", txt("gui.cases.col_trans_layer", "Trans.+layer"), units.power.symbol()),
                    txt("gui.cases.col_reduction", "Reduction %"),
                    String::new(),
                ] {
                    ui.strong(h);
                }
                ui.end_row();
                for (idx, case) in self.session.iter().enumerate() {
                    ui.label(format!("{}", idx + 1));
                    ui.label(&case.label);
                    ui.label(&case.material_name);
                    ui.label(format!("{:.2}", case.input.transmittance));
                    ui.label(format!(
                        "{:.2}",
                        convert_area(case.input.area_m2, AreaUnit::SquareMeter, units.area)
                    ));
                    ui.label(format!(
                        "{:.1}",
                        convert_irradiance(
                            case.input.irradiance_w_m2,
                            IrradianceUnit::WattPerSquareMeter,
                            units.irradiance
                        )
                    ));
                    ui.label(
                        case.input
                            .layer_absorption
                            .map(|a| format!("{a:.2}"))
                            .unwrap_or_else(|| "-".into()),
                    );
                    ui.label(p(case.report.base.absorbed_w));
                    ui.label(p(case.report.base.transmitted_w));
                    match case.report.with_layer {
                        Some(l) => {
                            ui.label(p(l.absorbed_w));
                            ui.label(p(l.transmitted_w));
                        }
                        None => {
                            ui.label("-");
                            ui.label("-");
                        }
                    }
                    ui.label(
                        case.report
                            .reduction_percent
                            .map(|r| format!("{r:.1}"))
                            .unwrap_or_else(|| "-".into()),
                    );
                    if ui
                        .small_button("🗑")
                        .on_hover_text(txt("gui.cases.delete", "Delete"))
                        .clicked()
                    {
                        to_remove = Some(idx);
                    }
                    ui.end_row();
                }
            });
        if let Some(idx) = to_remove {
            self.session.remove(idx);
        }
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());
        let mut open = self.show_settings_modal;
        let mut new_unit_system = self.config.unit_system;
        let mut save_clicked = false;
        egui::Window::new(txt("gui.settings.title", "Program Settings"))
            .collapsible(false)
            .resizable(true)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(txt("gui.settings.unit_preset", "Unit system preset"));
                ui.horizontal(|ui| {
                    for (label, us) in [
                        ("SI", config::UnitSystem::SI),
                        ("Imperial", config::UnitSystem::Imperial),
                    ] {
                        ui.selectable_value(&mut new_unit_system, us, label);
                    }
                });
                ui.separator();
                ui.label(txt("gui.settings.lang", "Language"));
                egui::ComboBox::from_id_source("lang_choice")
                    .selected_text(&self.lang_input)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut self.lang_input,
                            "auto".into(),
                            txt("gui.settings.lang_auto", "System"),
                        );
                        ui.selectable_value(&mut self.lang_input, "en-us".into(), "English (US)");
                        ui.selectable_value(&mut self.lang_input, "ko-kr".into(), "한국어");
                    });
                ui.separator();
                ui.label(txt("gui.settings.export_dir", "Default CSV export folder"));
                ui.text_edit_singleline(&mut self.export_dir_input);
                ui.separator();
                if ui.button(txt("gui.settings.save", "Save settings")).clicked() {
                    save_clicked = true;
                }
                if let Some(msg) = &self.settings_status {
                    ui.label(msg);
                }
            });
        self.show_settings_modal = open;
        if new_unit_system != self.config.unit_system {
            self.apply_unit_preset(new_unit_system);
        }
        if save_clicked {
            self.save_settings();
        }
    }

    fn save_settings(&mut self) {
        self.config.language = self.lang_input.clone();
        let dir = self.export_dir_input.trim();
        self.config.export_dir = (!dir.is_empty()).then(|| dir.to_string());
        self.config.default_material_id = self.basic.material_id;
        // 언어 즉시 반영
        let resolved = i18n::resolve_language(&self.config.language, None);
        self.tr = i18n::Translator::new_with_pack(&resolved, self.config.language_pack_dir.as_deref());
        self.settings_status = Some(match self.config.save() {
            Ok(()) => self.txt("gui.settings.saved", "Saved."),
            Err(e) => {
                eprintln!("Config save failed: {e}");
                format!("Save error: {e}")
            }
        });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let tr = self.tr.clone();
        let txt = move |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(txt("gui.nav.app_title", "Solar Glazing Toolbox"));
                ui.separator();
                if ui.button(txt("gui.formula.button", "Formula reference")).clicked() {
                    self.show_formula_modal = true;
                }
                if ui.button(txt("gui.settings.title", "Settings")).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(txt("gui.about.title", "Help / About")).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        if self.show_settings_modal {
            self.ui_settings(ctx);
        }

        if self.show_help_modal {
            egui::Window::new(txt("gui.about.title", "Help / About"))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    ui.heading(txt(
                        "gui.about.app",
                        "Educational calculator for solar radiation through windows",
                    ));
                    ui.label(txt("gui.about.version", "Version: 0.1.0"));
                    ui.separator();
                    ui.label(txt(
                        "gui.about.cases",
                        "Saved cases live only while the window is open; export them to CSV to keep them.",
                    ));
                    ui.label(txt(
                        "gui.about.units",
                        "Switch SI/Imperial units in settings; calculations are done in SI.",
                    ));
                });
        }

        if self.show_formula_modal {
            egui::Window::new(txt("gui.formula.title", "Formula reference"))
                .collapsible(true)
                .resizable(true)
                .open(&mut self.show_formula_modal)
                .show(ctx, |ui| {
                    ui.style_mut().wrap = Some(true);
                    ui.label(txt("gui.formula.absorbed", "Absorbed: Q_abs = (1 - τ) · G · A"));
                    ui.label(txt("gui.formula.transmitted", "Transmitted: Q_tr = τ · G · A"));
                    ui.label(txt("gui.formula.layer", "Behind layer: G' = (1 - α_layer) · G"));
                    ui.label(txt(
                        "gui.formula.reduction",
                        "Reduction: 100 · (1 - Q_tr,layer / Q_tr) (0 when Q_tr = 0)",
                    ));
                    ui.separator();
                    ui.small(txt(
                        "gui.formula.note",
                        "No reflectance term: everything not transmitted counts as absorbed.",
                    ));
                });
        }

        // 좌측 네비 + 본문
        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(140.0)
            .default_width(200.0)
            .max_width(400.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::Basic => self.ui_basic(ui),
                    Tab::Extended => self.ui_extended(ui),
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> GuiApp {
        GuiApp::new(config::Config::default())
    }

    #[test]
    fn extended_form_computes_on_start() {
        let app = app();
        let c = app.extended.result.as_ref().expect("initial result");
        // Clear float glass, 1 m², 800 W/m²
        assert!((c.report.base.transmitted_w - 680.0).abs() < 1e-9);
        assert!(c.report.with_layer.is_none());
    }

    #[test]
    fn layer_toggle_adds_layer_figures() {
        let mut app = app();
        app.extended.material_id = 1;
        app.extended.area = 2.0;
        app.extended.layer_enabled = true;
        app.extended.layer_absorption = 0.5;
        let units = app.config.default_units.clone();
        app.extended.compute(&units, true);
        let c = app.extended.result.as_ref().unwrap();
        assert!((c.report.reduction_percent.unwrap() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn basic_form_ignores_layer() {
        let mut app = app();
        app.basic.layer_enabled = true;
        let units = app.config.default_units.clone();
        app.basic.compute(&units, false);
        assert!(app.basic.result.as_ref().unwrap().input.layer_absorption.is_none());
    }

    #[test]
    fn save_and_delete_cases() {
        let mut app = app();
        assert!(app.save_current_case());
        app.label_input = "south window".into();
        assert!(app.save_current_case());
        let labels: Vec<_> = app.session.iter().map(|c| c.label.clone()).collect();
        assert_eq!(labels, vec!["Case 1", "south window"]);
        assert!(app.label_input.is_empty());
        app.session.remove(0);
        assert_eq!(app.session.len(), 1);
        assert_eq!(app.session.iter().next().unwrap().label, "south window");
    }

    #[test]
    fn imperial_preset_converts_form_values() {
        let mut app = app();
        app.apply_unit_preset(config::UnitSystem::Imperial);
        assert_eq!(app.config.default_units.area, AreaUnit::SquareFoot);
        assert!((app.basic.area - 10.763_910_4).abs() < 1e-4);
        // 같은 물리량이므로 결과는 변하지 않는다.
        let c = app.extended.result.as_ref().unwrap();
        assert!((c.report.base.transmitted_w - 680.0).abs() < 1e-6);
    }

    #[test]
    fn unknown_material_reports_error() {
        let mut app = app();
        app.basic.material_id = 999;
        let units = app.config.default_units.clone();
        app.basic.compute(&units, false);
        assert!(app.basic.result.is_none());
        assert!(app.basic.error.as_deref().unwrap().contains("999"));
    }
}
