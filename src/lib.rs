//! 변환 엔진을 라이브러리로 분리하여 CLI 외의 화면에서도 그대로 쓸 수 있게 한다.

pub mod app;
pub mod category;
pub mod cli;
pub mod config;
pub mod conversion;
pub mod form;
pub mod i18n;
pub mod ui_cli;
pub mod units;

pub use category::Category;
pub use conversion::{convert, Conversion, ConversionError, ConversionRequest, Converted};
pub use form::{ConverterForm, FormError};
pub use units::{Unit, UnitPair};
