use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::DateError;
use crate::limits::{self, ValidityRange};
use crate::month::Month;

/// A class of calendar title. Declaration order is the order auto-detection
/// tries them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormatKind {
    MonthName,
    Number,
    YearAD,
    YearBC,
    DecadeAD,
    DecadeBC,
    CenturyAD,
    CenturyBC,
    CenturyADCat,
    CenturyBCCat,
    MillenniumAD,
    MillenniumBC,
    CatYearMusicAlbums,
    CatBirthsAD,
    CatDeathsAD,
    CatBirthsBC,
    CatDeathsBC,
    CurrEvents,
    /// Day-of-month titles such as "March 3".
    DayOfMonth(Month),
    /// Month-of-year titles such as "March 2004".
    MonthOfYear(Month),
}

const SIMPLE_KINDS: [FormatKind; 18] = [
    FormatKind::MonthName,
    FormatKind::Number,
    FormatKind::YearAD,
    FormatKind::YearBC,
    FormatKind::DecadeAD,
    FormatKind::DecadeBC,
    FormatKind::CenturyAD,
    FormatKind::CenturyBC,
    FormatKind::CenturyADCat,
    FormatKind::CenturyBCCat,
    FormatKind::MillenniumAD,
    FormatKind::MillenniumBC,
    FormatKind::CatYearMusicAlbums,
    FormatKind::CatBirthsAD,
    FormatKind::CatDeathsAD,
    FormatKind::CatBirthsBC,
    FormatKind::CatDeathsBC,
    FormatKind::CurrEvents,
];

impl FormatKind {
    /// Every kind, in declaration order.
    pub fn all() -> Vec<FormatKind> {
        let mut kinds = SIMPLE_KINDS.to_vec();
        kinds.extend(Month::ALL.map(Self::DayOfMonth));
        kinds.extend(Month::ALL.map(Self::MonthOfYear));
        kinds
    }

    pub fn name(self) -> String {
        match self {
            Self::DayOfMonth(month) => format!("Day_{month}"),
            Self::MonthOfYear(month) => format!("Year_{month}"),
            simple => simple.simple_name().to_string(),
        }
    }

    fn simple_name(self) -> &'static str {
        match self {
            Self::MonthName => "MonthName",
            Self::Number => "Number",
            Self::YearAD => "YearAD",
            Self::YearBC => "YearBC",
            Self::DecadeAD => "DecadeAD",
            Self::DecadeBC => "DecadeBC",
            Self::CenturyAD => "CenturyAD",
            Self::CenturyBC => "CenturyBC",
            Self::CenturyADCat => "CenturyAD_Cat",
            Self::CenturyBCCat => "CenturyBC_Cat",
            Self::MillenniumAD => "MillenniumAD",
            Self::MillenniumBC => "MillenniumBC",
            Self::CatYearMusicAlbums => "Cat_Year_MusicAlbums",
            Self::CatBirthsAD => "Cat_BirthsAD",
            Self::CatDeathsAD => "Cat_DeathsAD",
            Self::CatBirthsBC => "Cat_BirthsBC",
            Self::CatDeathsBC => "Cat_DeathsBC",
            Self::CurrEvents => "CurrEvents",
            Self::DayOfMonth(_) => "Day",
            Self::MonthOfYear(_) => "Year",
        }
    }

    pub fn limit(self) -> ValidityRange {
        match self {
            Self::MonthName => limits::MONTH_OF_YEAR,
            Self::Number => limits::NUMBER,
            Self::YearAD | Self::CatBirthsAD | Self::CatDeathsAD => limits::YEAR_AD,
            Self::YearBC | Self::CatBirthsBC | Self::CatDeathsBC => limits::YEAR_BC,
            Self::DecadeAD => limits::DECADE_AD,
            Self::DecadeBC => limits::DECADE_BC,
            Self::CenturyAD | Self::CenturyADCat => limits::CENTURY_AD,
            Self::CenturyBC => limits::CENTURY_BC,
            Self::CenturyBCCat => limits::CENTURY_BC_CAT,
            Self::MillenniumAD => limits::MILLENNIUM_AD,
            Self::MillenniumBC => limits::MILLENNIUM_BC,
            Self::CatYearMusicAlbums => limits::MUSIC_ALBUMS,
            Self::CurrEvents => limits::CURRENT_EVENTS,
            Self::DayOfMonth(month) => limits::day_of_month(month.max_days()),
            Self::MonthOfYear(_) => limits::YEAR_OF_MONTH,
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for FormatKind {
    type Err = DateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let unknown = || DateError::UnknownFormatKind(value.to_string());
        if let Some(month) = value.strip_prefix("Day_") {
            return Month::from_name(month)
                .map(Self::DayOfMonth)
                .ok_or_else(unknown);
        }
        if let Some(month) = value.strip_prefix("Year_") {
            return Month::from_name(month)
                .map(Self::MonthOfYear)
                .ok_or_else(unknown);
        }
        SIMPLE_KINDS
            .into_iter()
            .find(|kind| kind.simple_name() == value)
            .ok_or_else(unknown)
    }
}

impl Serialize for FormatKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::FormatKind;
    use crate::month::Month;

    #[test]
    fn names_round_trip() {
        for kind in FormatKind::all() {
            let parsed: FormatKind = kind.name().parse().expect("parse kind");
            assert_eq!(parsed, kind);
        }
        assert_eq!(FormatKind::all().len(), 42);
    }

    #[test]
    fn uses_wiki_style_names() {
        assert_eq!(FormatKind::CenturyADCat.to_string(), "CenturyAD_Cat");
        assert_eq!(FormatKind::CatBirthsAD.to_string(), "Cat_BirthsAD");
        assert_eq!(
            FormatKind::DayOfMonth(Month::March).to_string(),
            "Day_March"
        );
        assert_eq!(
            FormatKind::MonthOfYear(Month::May).to_string(),
            "Year_May"
        );
    }

    #[test]
    fn rejects_unknown_names() {
        assert!("Eon".parse::<FormatKind>().is_err());
        assert!("Day_Smarch".parse::<FormatKind>().is_err());
        assert!("Day".parse::<FormatKind>().is_err());
    }

    #[test]
    fn declaration_order_matches_ord() {
        let kinds = FormatKind::all();
        let mut sorted = kinds.clone();
        sorted.sort();
        assert_eq!(kinds, sorted);
    }

    #[test]
    fn day_limits_follow_the_month() {
        assert!(FormatKind::DayOfMonth(Month::February).limit().contains(29));
        assert!(!FormatKind::DayOfMonth(Month::February).limit().contains(30));
        assert!(FormatKind::DayOfMonth(Month::January).limit().contains(31));
    }
}
