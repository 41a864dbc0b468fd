//! Result records produced by the alert query engine.
//!
//! These are plain domain values; the HTTP adapter owns the wire field
//! names and maps them per endpoint.

/// One child living at the queried address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildAlert {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

/// One resident of a fire-struck address, with the covering station.
///
/// Every row of one query carries the same `station_number`: it is
/// resolved once for the address, not per person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FireResident {
    pub last_name: String,
    pub phone: String,
    pub age: i32,
    pub medications: Vec<String>,
    pub allergies: Vec<String>,
    pub station_number: u32,
}

/// One member of a household in a flood roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HouseholdMember {
    pub last_name: String,
    pub phone: String,
    pub age: i32,
    pub medications: Vec<String>,
    pub allergies: Vec<String>,
}

/// All residents of one address, keyed for the flood response.
///
/// Kept as an ordered sequence rather than a map so the address order
/// from the station-to-address resolution survives serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HouseholdRoster {
    pub address: String,
    pub members: Vec<HouseholdMember>,
}

/// Full profile row for a last-name search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonProfile {
    pub last_name: String,
    pub address: String,
    pub email: String,
    pub age: i32,
    pub medications: Vec<String>,
    pub allergies: Vec<String>,
}

/// One firestation coverage row echoed back for a station query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationCoverage {
    pub address: String,
    pub station: u32,
}
