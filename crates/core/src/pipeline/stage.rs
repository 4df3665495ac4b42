/// Coarse progress label reported while a pipeline run advances. Stages
/// execute strictly in this order; a run never revisits an earlier stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Acquiring,
    Uploading,
    Transcribing,
    Counting,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Stage::Acquiring => "Acquiring audio",
            Stage::Uploading => "Uploading audio",
            Stage::Transcribing => "Transcribing",
            Stage::Counting => "Counting words",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
