#[derive(Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory whose index.html is served on GET /; the embedded page is
    /// used when unset or unreadable.
    pub frontend_dir_path: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: 8000,
            frontend_dir_path: None,
        }
    }
}
