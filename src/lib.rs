//! Rotulagem Nutricional ANVISA (rotulo) Library
//!
//! Nutrition facts table, front-of-pack warnings and mandatory declarations
//! under RDC 429/2020, IN 75/2020 and RDC 727/2022, plus PDF and image export.

pub mod build_info;
pub mod config;
pub mod error;
pub mod models;
pub mod nutrition;
pub mod render;
pub mod tools;

pub use error::{LabelError, LabelResult};
