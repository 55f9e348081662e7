#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Fail with `CountMismatch` when bytes remain after the final field of a
    /// length-bounded input.
    pub require_exhausted: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            require_exhausted: true,
        }
    }
}
