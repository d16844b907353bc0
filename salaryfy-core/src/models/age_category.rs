use serde::{Deserialize, Serialize};
use tracing::warn;

/// Age bracket of the taxpayer, which selects the old-regime exemption limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AgeCategory {
    /// Below 60 years.
    #[default]
    #[serde(rename = "<60")]
    Below60,
    /// Senior citizen, 60 to 80 years.
    #[serde(rename = "60-80")]
    Senior,
    /// Super senior citizen, above 80 years.
    #[serde(rename = ">80")]
    SuperSenior,
}

impl AgeCategory {
    pub fn all() -> &'static [AgeCategory] {
        &[
            AgeCategory::Below60,
            AgeCategory::Senior,
            AgeCategory::SuperSenior,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Below60 => "<60",
            Self::Senior => "60-80",
            Self::SuperSenior => ">80",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Below60 => "Below 60",
            Self::Senior => "60 - 80",
            Self::SuperSenior => "Above 80",
        }
    }

    /// Strict parse of the short label (`"<60"`, `"60-80"`, `">80"`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "<60" => Some(Self::Below60),
            "60-80" => Some(Self::Senior),
            ">80" => Some(Self::SuperSenior),
            _ => None,
        }
    }

    /// Lossy parse: any unrecognised label is treated as [`AgeCategory::Below60`].
    ///
    /// ```
    /// use salaryfy_core::AgeCategory;
    ///
    /// assert_eq!(AgeCategory::from_label(">80"), AgeCategory::SuperSenior);
    /// assert_eq!(AgeCategory::from_label("ninety"), AgeCategory::Below60);
    /// ```
    pub fn from_label(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            warn!(label = %s, "unrecognised age category, using <60");
            Self::default()
        })
    }
}

impl std::fmt::Display for AgeCategory {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
