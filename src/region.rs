//! The closed set of supported forecast regions and their static bindings.

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown region index {0}; expected 0 (東京), 1 (大阪) or 2 (札幌)")]
pub struct RegionError(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Region {
    #[default]
    Tokyo,
    Osaka,
    Sapporo,
}

impl Region {
    /// All regions in dropdown order
    pub const ALL: [Region; 3] = [Region::Tokyo, Region::Osaka, Region::Sapporo];

    pub fn index(self) -> u8 {
        match self {
            Self::Tokyo => 0,
            Self::Osaka => 1,
            Self::Sapporo => 2,
        }
    }

    /// Label shown for the region in the option list
    pub fn label(self) -> &'static str {
        match self {
            Self::Tokyo => "東京",
            Self::Osaka => "大阪",
            Self::Sapporo => "札幌",
        }
    }

    /// JMA forecast office code used in the endpoint path
    pub fn office_code(self) -> &'static str {
        match self {
            Self::Tokyo => "130000",
            Self::Osaka => "270000",
            Self::Sapporo => "016000",
        }
    }

    /// Area name used to look up the daily weather series
    pub fn area_name(self) -> &'static str {
        match self {
            Self::Tokyo => "東京地方",
            Self::Osaka => "大阪府",
            Self::Sapporo => "石狩地方",
        }
    }

    /// Area name used to look up the temperature series
    pub fn temp_area_name(self) -> &'static str {
        match self {
            Self::Tokyo => "東京",
            Self::Osaka => "大阪",
            Self::Sapporo => "札幌",
        }
    }

    /// Builds the forecast URL for this region under `base`
    pub fn endpoint(self, base: &str) -> String {
        format!("{}/{}.json", base.trim_end_matches('/'), self.office_code())
    }
}

impl TryFrom<u8> for Region {
    type Error = RegionError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::Tokyo),
            1 => Ok(Self::Osaka),
            2 => Ok(Self::Sapporo),
            other => Err(RegionError(other)),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::JMA_FORECAST_BASE;

    #[test]
    fn test_index_round_trips_through_try_from() {
        for region in Region::ALL {
            assert_eq!(Region::try_from(region.index()), Ok(region));
        }
    }

    #[test]
    fn test_out_of_range_index_fails_closed() {
        assert_eq!(Region::try_from(3), Err(RegionError(3)));
        assert_eq!(Region::try_from(u8::MAX), Err(RegionError(u8::MAX)));
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(
            Region::Tokyo.endpoint(JMA_FORECAST_BASE),
            "https://www.jma.go.jp/bosai/forecast/data/forecast/130000.json"
        );
        assert_eq!(
            Region::Sapporo.endpoint("http://127.0.0.1:8080/"),
            "http://127.0.0.1:8080/016000.json"
        );
    }

    #[test]
    fn test_area_bindings() {
        assert_eq!(Region::Osaka.area_name(), "大阪府");
        assert_eq!(Region::Osaka.temp_area_name(), "大阪");
        assert_eq!(Region::Sapporo.area_name(), "石狩地方");
    }
}
