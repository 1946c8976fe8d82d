//! Search-index and search-parameter vocabularies.
//!
//! Both lists are fixed by the remote service; anything outside them is
//! rejected before a request is signed or sent.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Product categories accepted as `SearchIndex`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SearchIndex {
    #[default]
    All,
    Apparel,
    Appliances,
    ArtsAndCrafts,
    Automotive,
    Baby,
    Beauty,
    Blended,
    Books,
    Classical,
    Collectibles,
    Dvd,
    DigitalMusic,
    Electronics,
    GiftCards,
    GourmetFood,
    Grocery,
    HealthPersonalCare,
    HomeGarden,
    Industrial,
    Jewelry,
    KindleStore,
    Kitchen,
    LawnAndGarden,
    Marketplace,
    Mp3Downloads,
    Magazines,
    Miscellaneous,
    Music,
    MusicTracks,
    MusicalInstruments,
    MobileApps,
    OfficeProducts,
    OutdoorLiving,
    PcHardware,
    PetSupplies,
    Photo,
    Shoes,
    Software,
    SportingGoods,
    Tools,
    Toys,
    UnboxVideo,
    Vhs,
    Video,
    VideoGames,
    Watches,
    Wireless,
    WirelessAccessories,
    /// Legacy alias still accepted by some regional endpoints.
    MoviesTv,
}

impl SearchIndex {
    /// The exact string sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchIndex::All => "All",
            SearchIndex::Apparel => "Apparel",
            SearchIndex::Appliances => "Appliances",
            SearchIndex::ArtsAndCrafts => "ArtsAndCrafts",
            SearchIndex::Automotive => "Automotive",
            SearchIndex::Baby => "Baby",
            SearchIndex::Beauty => "Beauty",
            SearchIndex::Blended => "Blended",
            SearchIndex::Books => "Books",
            SearchIndex::Classical => "Classical",
            SearchIndex::Collectibles => "Collectibles",
            SearchIndex::Dvd => "DVD",
            SearchIndex::DigitalMusic => "DigitalMusic",
            SearchIndex::Electronics => "Electronics",
            SearchIndex::GiftCards => "GiftCards",
            SearchIndex::GourmetFood => "GourmetFood",
            SearchIndex::Grocery => "Grocery",
            SearchIndex::HealthPersonalCare => "HealthPersonalCare",
            SearchIndex::HomeGarden => "HomeGarden",
            SearchIndex::Industrial => "Industrial",
            SearchIndex::Jewelry => "Jewelry",
            SearchIndex::KindleStore => "KindleStore",
            SearchIndex::Kitchen => "Kitchen",
            SearchIndex::LawnAndGarden => "LawnAndGarden",
            SearchIndex::Marketplace => "Marketplace",
            SearchIndex::Mp3Downloads => "MP3Downloads",
            SearchIndex::Magazines => "Magazines",
            SearchIndex::Miscellaneous => "Miscellaneous",
            SearchIndex::Music => "Music",
            SearchIndex::MusicTracks => "MusicTracks",
            SearchIndex::MusicalInstruments => "MusicalInstruments",
            SearchIndex::MobileApps => "MobileApps",
            SearchIndex::OfficeProducts => "OfficeProducts",
            SearchIndex::OutdoorLiving => "OutdoorLiving",
            SearchIndex::PcHardware => "PCHardware",
            SearchIndex::PetSupplies => "PetSupplies",
            SearchIndex::Photo => "Photo",
            SearchIndex::Shoes => "Shoes",
            SearchIndex::Software => "Software",
            SearchIndex::SportingGoods => "SportingGoods",
            SearchIndex::Tools => "Tools",
            SearchIndex::Toys => "Toys",
            SearchIndex::UnboxVideo => "UnboxVideo",
            SearchIndex::Vhs => "VHS",
            SearchIndex::Video => "Video",
            SearchIndex::VideoGames => "VideoGames",
            SearchIndex::Watches => "Watches",
            SearchIndex::Wireless => "Wireless",
            SearchIndex::WirelessAccessories => "WirelessAccessories",
            SearchIndex::MoviesTv => "movies-tv",
        }
    }

    /// Returns all accepted search indices.
    pub fn all() -> &'static [SearchIndex] {
        &[
            SearchIndex::All,
            SearchIndex::Apparel,
            SearchIndex::Appliances,
            SearchIndex::ArtsAndCrafts,
            SearchIndex::Automotive,
            SearchIndex::Baby,
            SearchIndex::Beauty,
            SearchIndex::Blended,
            SearchIndex::Books,
            SearchIndex::Classical,
            SearchIndex::Collectibles,
            SearchIndex::Dvd,
            SearchIndex::DigitalMusic,
            SearchIndex::Electronics,
            SearchIndex::GiftCards,
            SearchIndex::GourmetFood,
            SearchIndex::Grocery,
            SearchIndex::HealthPersonalCare,
            SearchIndex::HomeGarden,
            SearchIndex::Industrial,
            SearchIndex::Jewelry,
            SearchIndex::KindleStore,
            SearchIndex::Kitchen,
            SearchIndex::LawnAndGarden,
            SearchIndex::Marketplace,
            SearchIndex::Mp3Downloads,
            SearchIndex::Magazines,
            SearchIndex::Miscellaneous,
            SearchIndex::Music,
            SearchIndex::MusicTracks,
            SearchIndex::MusicalInstruments,
            SearchIndex::MobileApps,
            SearchIndex::OfficeProducts,
            SearchIndex::OutdoorLiving,
            SearchIndex::PcHardware,
            SearchIndex::PetSupplies,
            SearchIndex::Photo,
            SearchIndex::Shoes,
            SearchIndex::Software,
            SearchIndex::SportingGoods,
            SearchIndex::Tools,
            SearchIndex::Toys,
            SearchIndex::UnboxVideo,
            SearchIndex::Vhs,
            SearchIndex::Video,
            SearchIndex::VideoGames,
            SearchIndex::Watches,
            SearchIndex::Wireless,
            SearchIndex::WirelessAccessories,
            SearchIndex::MoviesTv,
        ]
    }
}

impl fmt::Display for SearchIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SearchIndex {
    type Err = IndexParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchIndex::all()
            .iter()
            .copied()
            .find(|index| index.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| IndexParseError(s.to_string()))
    }
}

/// Error for an unrecognized search index.
#[derive(Debug, Clone)]
pub struct IndexParseError(String);

impl fmt::Display for IndexParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown search index '{}'. Valid indices include: Books, DVD, Electronics, Music, Video, All",
            self.0
        )
    }
}

impl std::error::Error for IndexParseError {}

/// Parameter names accepted as search criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchParam {
    Keywords,
    Title,
    Power,
    BrowseNode,
    Artist,
    Author,
    Actor,
    Director,
    AudienceRating,
    Manufacturer,
    MusicLabel,
    Composer,
    Publisher,
    Brand,
    Conductor,
    Orchestra,
    TextStream,
    Cuisine,
    City,
    Neighborhood,
}

impl SearchParam {
    /// The exact parameter name sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchParam::Keywords => "Keywords",
            SearchParam::Title => "Title",
            SearchParam::Power => "Power",
            SearchParam::BrowseNode => "BrowseNode",
            SearchParam::Artist => "Artist",
            SearchParam::Author => "Author",
            SearchParam::Actor => "Actor",
            SearchParam::Director => "Director",
            SearchParam::AudienceRating => "AudienceRating",
            SearchParam::Manufacturer => "Manufacturer",
            SearchParam::MusicLabel => "MusicLabel",
            SearchParam::Composer => "Composer",
            SearchParam::Publisher => "Publisher",
            SearchParam::Brand => "Brand",
            SearchParam::Conductor => "Conductor",
            SearchParam::Orchestra => "Orchestra",
            SearchParam::TextStream => "TextStream",
            SearchParam::Cuisine => "Cuisine",
            SearchParam::City => "City",
            SearchParam::Neighborhood => "Neighborhood",
        }
    }

    /// Returns all accepted search parameters.
    pub fn all() -> &'static [SearchParam] {
        &[
            SearchParam::Keywords,
            SearchParam::Title,
            SearchParam::Power,
            SearchParam::BrowseNode,
            SearchParam::Artist,
            SearchParam::Author,
            SearchParam::Actor,
            SearchParam::Director,
            SearchParam::AudienceRating,
            SearchParam::Manufacturer,
            SearchParam::MusicLabel,
            SearchParam::Composer,
            SearchParam::Publisher,
            SearchParam::Brand,
            SearchParam::Conductor,
            SearchParam::Orchestra,
            SearchParam::TextStream,
            SearchParam::Cuisine,
            SearchParam::City,
            SearchParam::Neighborhood,
        ]
    }

    /// Wire names of all accepted parameters.
    pub fn names() -> Vec<&'static str> {
        Self::all().iter().map(|param| param.as_str()).collect()
    }
}

impl fmt::Display for SearchParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SearchParam {
    type Err = ParamParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchParam::all()
            .iter()
            .copied()
            .find(|param| param.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParamParseError(s.to_string()))
    }
}

/// Error for an unrecognized search parameter name.
#[derive(Debug, Clone)]
pub struct ParamParseError(String);

impl fmt::Display for ParamParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown search parameter '{}'. Valid parameters: {}",
            self.0,
            SearchParam::names().join(", ")
        )
    }
}

impl std::error::Error for ParamParseError {}
