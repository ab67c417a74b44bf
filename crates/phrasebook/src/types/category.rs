use serde::{Deserialize, Serialize};

/// A CLDR cardinal plural category.
///
/// Languages partition quantities into a subset of these six categories:
/// English uses `one`/`other`, Russian uses `one`/`few`/`many`/`other`, and
/// Arabic uses all six. `Other` is the universal catch-all — every language
/// rule ends in it, and it is the `Default`.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    #[default]
    Other,
}

impl PluralCategory {
    /// Number of categories, for sizing per-category storage.
    pub const COUNT: usize = 6;

    /// The CLDR name of the category.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
