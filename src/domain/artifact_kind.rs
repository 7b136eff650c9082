use std::fmt;

/// Role of a file in the shared artifact directory, encoded as its name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Input,
    Model,
    Index,
    Chunk,
    Cloned,
}

impl ArtifactKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            ArtifactKind::Input => "input",
            ArtifactKind::Model => "model",
            ArtifactKind::Index => "index",
            ArtifactKind::Chunk => "chunk",
            ArtifactKind::Cloned => "cloned",
        }
    }

    pub fn default_extension(&self) -> &'static str {
        match self {
            ArtifactKind::Input | ArtifactKind::Chunk | ArtifactKind::Cloned => "wav",
            ArtifactKind::Model => "pth",
            ArtifactKind::Index => "index",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "input" => Some(ArtifactKind::Input),
            "model" => Some(ArtifactKind::Model),
            "index" => Some(ArtifactKind::Index),
            "chunk" => Some(ArtifactKind::Chunk),
            "cloned" => Some(ArtifactKind::Cloned),
            _ => None,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}
