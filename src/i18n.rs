use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const CLI_TITLE: &str = "cli.title";
    pub const PROMPT_AREA: &str = "prompt.area";
    pub const PROMPT_IRRADIANCE: &str = "prompt.irradiance";
    pub const MATERIAL_LIST_HEADING: &str = "material.list_heading";
    pub const PROMPT_MATERIAL: &str = "prompt.material";
    pub const PROMPT_LAYER: &str = "prompt.layer";
    pub const PROMPT_LABEL: &str = "prompt.label";
    pub const PROMPT_AGAIN: &str = "prompt.again";

    pub const RESULT_HEADING: &str = "result.heading";
    pub const RESULT_MATERIAL: &str = "result.material";
    pub const RESULT_ABSORBED: &str = "result.absorbed";
    pub const RESULT_TRANSMITTED: &str = "result.transmitted";
    pub const RESULT_LAYER_HEADING: &str = "result.layer_heading";
    pub const RESULT_ATTENUATED: &str = "result.attenuated_irradiance";
    pub const RESULT_LAYER_ABSORPTION: &str = "result.layer_absorption";
    pub const CHART_LAYER_SUFFIX: &str = "result.chart_layer_suffix";
    pub const RESULT_REDUCTION: &str = "result.reduction";
    pub const CHART_HEADING: &str = "result.chart_heading";
    pub const CSV_APPENDED: &str = "result.csv_appended";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_UNKNOWN_MATERIAL: &str = "error.unknown_material";
    pub const ERROR_OUT_OF_RANGE: &str = "error.out_of_range";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
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
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 언어팩을 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 언어팩 → 내장 문자열 순으로 번역을 찾는다. 한국어 번역이 없으면 영어를 쓴다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        let s = match self.lang {
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        };
        s.to_string()
    }

    /// `{name}` 자리표시자를 채운 번역을 반환한다.
    pub fn tf(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(&self.t(key), vars)
    }
}

pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" | "ko-kr" => Some("ko-kr".into()),
        "en" | "en-us" | "en-uk" | "en-gb" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko-kr".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko-kr".into()),
        "en" => Some("en-us".into()),
        _ => None,
    }
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

/// `{dir}/{lang}.toml` 언어팩을 읽는다. lang은 resolve_language가 돌려준 ko-kr/en-us 형태이다.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
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

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        CLI_TITLE => "\n=== 유리 일사 흡수/투과 계산기 ===",
        PROMPT_AREA => "창 면적 [{unit}]: ",
        PROMPT_IRRADIANCE => "일사량 [{unit}]: ",
        MATERIAL_LIST_HEADING => "유리 종류:",
        PROMPT_MATERIAL => "재료 선택: ",
        PROMPT_LAYER => "추가 보호층 흡수율 0~1 (없으면 엔터): ",
        PROMPT_LABEL => "케이스 이름 (엔터 시 기본값): ",
        PROMPT_AGAIN => "다시 계산할까요? (y/N): ",
        RESULT_HEADING => "\n=== 결과 ===",
        RESULT_MATERIAL => "선택한 재료:",
        RESULT_ABSORBED => "흡수 일사량:",
        RESULT_TRANSMITTED => "투과 일사량:",
        RESULT_LAYER_HEADING => "\n--- 보호층 적용 ---",
        RESULT_ATTENUATED => "보호층 통과 일사량:",
        RESULT_LAYER_ABSORPTION => "보호층 흡수율 = {value}",
        CHART_LAYER_SUFFIX => " (+보호층)",
        RESULT_REDUCTION => "투과량 감소율:",
        CHART_HEADING => "\n일사량 분포",
        CSV_APPENDED => "CSV에 저장했습니다:",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ERROR_UNKNOWN_MATERIAL => "목록에 없는 재료입니다. 다시 선택하세요.",
        ERROR_OUT_OF_RANGE => "범위를 벗어난 값입니다:",
        _ => return None,
    })
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        CLI_TITLE => "\n=== Glazing Solar Radiation Calculator ===",
        PROMPT_AREA => "Window area [{unit}]: ",
        PROMPT_IRRADIANCE => "Solar irradiance [{unit}]: ",
        MATERIAL_LIST_HEADING => "Glazing types:",
        PROMPT_MATERIAL => "Choose your material: ",
        PROMPT_LAYER => "Extra protective layer absorption 0-1 (enter for none): ",
        PROMPT_LABEL => "Case label (enter for default): ",
        PROMPT_AGAIN => "Run another case? (y/N): ",
        RESULT_HEADING => "\n=== Results ===",
        RESULT_MATERIAL => "Selected material:",
        RESULT_ABSORBED => "Absorbed radiation:",
        RESULT_TRANSMITTED => "Transmitted radiation:",
        RESULT_LAYER_HEADING => "\n--- With protective layer ---",
        RESULT_ATTENUATED => "Irradiance behind layer:",
        RESULT_LAYER_ABSORPTION => "Layer absorption = {value}",
        CHART_LAYER_SUFFIX => " (+layer)",
        RESULT_REDUCTION => "Transmitted reduction:",
        CHART_HEADING => "\nRadiation distribution",
        CSV_APPENDED => "Case appended to CSV:",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ERROR_UNKNOWN_MATERIAL => "Unknown material; choose again.",
        ERROR_OUT_OF_RANGE => "Value out of range:",
        _ => "",
    }
}
