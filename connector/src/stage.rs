use std::fmt;

/// Progress of a single fetch.
///
/// Stages advance strictly forward. A failure in any stage moves to `Failed`,
/// which ends the fetch with the empty cloud. Nothing is retried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FetchStage {
    /// Before a fetch has started.
    #[default]
    Idle,
    PathResolving,
    Reading,
    Uploading,
    Decoding,
    Done,
    Failed,
}

impl FetchStage {
    pub fn is_terminal(&self) -> bool {
        matches!(self, FetchStage::Done | FetchStage::Failed)
    }
}

impl fmt::Display for FetchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FetchStage::Idle => "idle",
            FetchStage::PathResolving => "path resolving",
            FetchStage::Reading => "reading",
            FetchStage::Uploading => "uploading",
            FetchStage::Decoding => "decoding",
            FetchStage::Done => "done",
            FetchStage::Failed => "failed",
        };
        f.write_str(name)
    }
}
