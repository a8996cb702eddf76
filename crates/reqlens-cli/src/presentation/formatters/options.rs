#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    pub enable_color: bool,
}
