//! Site categories.

use strum_macros::{Display, EnumIter, EnumString};

use crate::error_handling::TracerError;

/// The fixed set of categories a site definition can belong to.
///
/// Category names are matched case-insensitively wherever user input is
/// resolved (filter rules, registry data).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[allow(missing_docs)] // variant names are the documentation
pub enum Category {
    SocialMedia,
    Adult,
    Blog,
    Art,
    Programming,
    Video,
    Messaging,
    Dating,
    Music,
    Sport,
    Memes,
    Office,
    News,
    Games,
    Other,
}

impl Category {
    /// Resolves a user-supplied category name.
    ///
    /// Unlike the `FromStr` impl this maps failures to the engine's error
    /// taxonomy: an unresolvable name is an input error, never a silent
    /// no-op.
    pub fn resolve(name: &str) -> Result<Self, TracerError> {
        name.parse()
            .map_err(|_| TracerError::UnknownCategory(name.to_string()))
    }
}
