#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BuildState {
    Unconfigured,
    StoresLoaded,
    PolicyApplied,
    Live,
}
