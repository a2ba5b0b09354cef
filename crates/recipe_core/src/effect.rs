#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Issue one request against the configured endpoint.
    StartFetch,
}
