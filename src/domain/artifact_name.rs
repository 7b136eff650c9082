use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use super::ArtifactKind;

const MAX_NAME_LENGTH: usize = 128;
const MAX_EXTENSION_LENGTH: usize = 8;

/// A flat file name inside the artifact directory.
///
/// Names are always a single path component: `<stem>.<ext>` where the stem is
/// ASCII alphanumerics, `_` or `-`, and the extension is ASCII alphanumerics.
/// Anything else, including separators and `..`, is rejected by [`ArtifactName::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactName(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid artifact name: {0}")]
pub struct InvalidArtifactName(pub String);

impl ArtifactName {
    /// Generates `<prefix>_<uuid hex>.<ext>`, keeping `extension` only when it is
    /// a short alphanumeric token.
    pub fn generate(kind: ArtifactKind, extension: Option<&str>) -> Self {
        let extension = extension
            .filter(|ext| is_valid_extension(ext) && ext.len() <= MAX_EXTENSION_LENGTH)
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_else(|| kind.default_extension().to_string());

        Self(format!(
            "{}_{}.{}",
            kind.prefix(),
            Uuid::new_v4().simple(),
            extension
        ))
    }

    pub fn parse(raw: &str) -> Result<Self, InvalidArtifactName> {
        let invalid = || InvalidArtifactName(raw.to_string());

        if raw.is_empty() || raw.len() > MAX_NAME_LENGTH {
            return Err(invalid());
        }

        let (stem, extension) = raw.rsplit_once('.').ok_or_else(invalid)?;
        let stem_ok = !stem.is_empty()
            && stem
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

        if !stem_ok || !is_valid_extension(extension) {
            return Err(invalid());
        }

        Ok(Self(raw.to_string()))
    }

    pub fn kind(&self) -> Option<ArtifactKind> {
        self.0
            .split_once('_')
            .and_then(|(prefix, _)| ArtifactKind::from_prefix(prefix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_extension(extension: &str) -> bool {
    !extension.is_empty() && extension.chars().all(|c| c.is_ascii_alphanumeric())
}

impl FromStr for ArtifactName {
    type Err = InvalidArtifactName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ArtifactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
