/// Shard a summoner account lives on. Every platform-routed API call needs
/// its endpoint host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Na,
    Euw,
    Eune,
    Br,
    Lan,
    Las,
    Tr,
    Ru,
    Kr,
    Jp,
    Oce,
}

impl Region {
    pub fn to_endpoint(&self) -> String {
        match self {
            Region::Na => "na1.api.riotgames.com".to_string(),
            Region::Euw => "euw1.api.riotgames.com".to_string(),
            Region::Eune => "eun1.api.riotgames.com".to_string(),
            Region::Br => "br1.api.riotgames.com".to_string(),
            Region::Lan => "la1.api.riotgames.com".to_string(),
            Region::Las => "la2.api.riotgames.com".to_string(),
            Region::Tr => "tr1.api.riotgames.com".to_string(),
            Region::Ru => "ru.api.riotgames.com".to_string(),
            Region::Kr => "kr.api.riotgames.com".to_string(),
            Region::Jp => "jp1.api.riotgames.com".to_string(),
            Region::Oce => "oc1.api.riotgames.com".to_string(),
        }
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        match region {
            Region::Na => "NA".to_string(),
            Region::Euw => "EUW".to_string(),
            Region::Eune => "EUNE".to_string(),
            Region::Br => "BR".to_string(),
            Region::Lan => "LAN".to_string(),
            Region::Las => "LAS".to_string(),
            Region::Tr => "TR".to_string(),
            Region::Ru => "RU".to_string(),
            Region::Kr => "KR".to_string(),
            Region::Jp => "JP".to_string(),
            Region::Oce => "OCE".to_string(),
        }
    }
}

impl TryFrom<String> for Region {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_uppercase().as_str() {
            "NA" => Ok(Region::Na),
            "EUW" => Ok(Region::Euw),
            "EUNE" => Ok(Region::Eune),
            "BR" => Ok(Region::Br),
            "LAN" => Ok(Region::Lan),
            "LAS" => Ok(Region::Las),
            "TR" => Ok(Region::Tr),
            "RU" => Ok(Region::Ru),
            "KR" => Ok(Region::Kr),
            "JP" => Ok(Region::Jp),
            "OCE" => Ok(Region::Oce),
            _ => Err(format!("Unknown region: {}", value)),
        }
    }
}
