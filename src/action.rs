#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    EnterFilterMode,
    ExitFilterMode,
    ClearFilter,
    UpdateFilter(String),
    CycleSortMode,
    Kill(u32),
    LaunchTerminal,
    LaunchFileManager,
    ToggleHelp,
    Refresh,
    None,
}
