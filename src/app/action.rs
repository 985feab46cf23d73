/// Side effects the main loop performs outside of application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Write the current config back to disk (e.g. after a theme toggle).
    PersistConfig,
    Quit,
}
