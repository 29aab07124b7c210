/// Upper bound of the AQI scale used to normalise the gauge.
pub const AQI_SCALE_MAX: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    pub const ALL: [Self; 6] = [
        Self::Good,
        Self::Moderate,
        Self::UnhealthyForSensitiveGroups,
        Self::Unhealthy,
        Self::VeryUnhealthy,
        Self::Hazardous,
    ];

    /// Inclusive upper bound of the band, `None` for the open-ended top band.
    pub const fn upper_bound(self) -> Option<f64> {
        match self {
            Self::Good => Some(50.0),
            Self::Moderate => Some(100.0),
            Self::UnhealthyForSensitiveGroups => Some(150.0),
            Self::Unhealthy => Some(200.0),
            Self::VeryUnhealthy => Some(300.0),
            Self::Hazardous => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }

    /// Compact label used on the per-day forecast cards.
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::UnhealthyForSensitiveGroups => "Unhealthy (SG)",
            other => other.label(),
        }
    }

    pub const fn color_name(self) -> &'static str {
        match self {
            Self::Good => "green",
            Self::Moderate => "yellow",
            Self::UnhealthyForSensitiveGroups => "orange",
            Self::Unhealthy => "red",
            Self::VeryUnhealthy => "purple",
            Self::Hazardous => "maroon",
        }
    }

    pub const fn hex(self) -> &'static str {
        match self {
            Self::Good => "#2ecc71",
            Self::Moderate => "#f1c40f",
            Self::UnhealthyForSensitiveGroups => "#e67e22",
            Self::Unhealthy => "#e74c3c",
            Self::VeryUnhealthy => "#8e44ad",
            Self::Hazardous => "#7E0023",
        }
    }

    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Good => (0x2e, 0xcc, 0x71),
            Self::Moderate => (0xf1, 0xc4, 0x0f),
            Self::UnhealthyForSensitiveGroups => (0xe6, 0x7e, 0x22),
            Self::Unhealthy => (0xe7, 0x4c, 0x3c),
            Self::VeryUnhealthy => (0x8e, 0x44, 0xad),
            Self::Hazardous => (0x7e, 0x00, 0x23),
        }
    }
}

/// Maps an AQI value onto its band. Boundaries belong to the lower band and
/// anything above 300 (or NaN) is `Hazardous`.
pub fn classify(aqi: f64) -> AqiCategory {
    AqiCategory::ALL
        .into_iter()
        .find(|category| category.upper_bound().is_some_and(|bound| aqi <= bound))
        .unwrap_or(AqiCategory::Hazardous)
}
