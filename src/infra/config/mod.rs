pub mod formatter_toml;
pub mod manifest;
