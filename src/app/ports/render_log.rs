pub trait RenderLog: Send + Sync {
    fn add_log(&self, message: &str);
}
