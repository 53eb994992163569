//! 핵심 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 코드를 쓰게 한다.

pub mod app;
pub mod config;
pub mod glazing;
pub mod i18n;
pub mod input;
pub mod session;
pub mod ui_cli;
pub mod units;
