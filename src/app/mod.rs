pub mod code_buffer;
pub mod column_renderer;
pub mod config;
pub mod entity;
pub mod ports;
pub mod type_hint;

#[cfg(test)]
pub(crate) mod test_support;
