pub mod app;
pub mod booklet;
pub mod config;
pub mod docx;
pub mod error;
pub mod language;
pub mod lrc;
pub mod song;
pub mod utility;
