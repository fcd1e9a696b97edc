/// Controls how sizes are picked out of log text.
///
/// # Remarks
///
/// The defaults extract every `<number> KiB` and `<number> MiB` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtractorSettings {
    /// Set this to 'true' to ignore transfer rates such as `1.5 MiB/s`.
    /// Download progress lines report speeds next to sizes; those are not
    /// artifact sizes.
    pub skip_transfer_rates: bool,
}

impl ExtractorSettings {
    /// Creates a new `ExtractorSettings` with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns these settings with transfer rate skipping set to `skip`.
    pub fn with_skip_transfer_rates(mut self, skip: bool) -> Self {
        self.skip_transfer_rates = skip;
        self
    }
}
