use std::fmt::Display;
use std::str::FromStr;

use crate::ServiceUrl;

/// Platform routing value used by the summoner and league endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    BR1,
    EUN1,
    EUW1,
    JP1,
    KR,
    LA1,
    LA2,
    NA1,
    OC1,
    PH2,
    RU,
    SG2,
    TH2,
    TR1,
    TW2,
    VN2,
}

const ALL: [Region; 16] = [
    Region::BR1,
    Region::EUN1,
    Region::EUW1,
    Region::JP1,
    Region::KR,
    Region::LA1,
    Region::LA2,
    Region::NA1,
    Region::OC1,
    Region::PH2,
    Region::RU,
    Region::SG2,
    Region::TH2,
    Region::TR1,
    Region::TW2,
    Region::VN2,
];

impl Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let region = match self {
            Region::BR1 => "br1",
            Region::EUN1 => "eun1",
            Region::EUW1 => "euw1",
            Region::JP1 => "jp1",
            Region::KR => "kr",
            Region::LA1 => "la1",
            Region::LA2 => "la2",
            Region::NA1 => "na1",
            Region::OC1 => "oc1",
            Region::PH2 => "ph2",
            Region::RU => "ru",
            Region::SG2 => "sg2",
            Region::TH2 => "th2",
            Region::TR1 => "tr1",
            Region::TW2 => "tw2",
            Region::VN2 => "vn2",
        };
        write!(f, "{}", region)
    }
}
impl ServiceUrl for Region {}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase();
        ALL.iter()
            .copied()
            .find(|r| r.to_string() == wanted)
            .ok_or_else(|| format!("unknown platform region `{}`", s))
    }
}
