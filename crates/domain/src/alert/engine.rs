use serde::{Deserialize, Serialize};
use time::Date;

use crate::age::{self, BirthdateAge};
use crate::firestation::entity::Firestation;
use crate::medical::entity::MedicalRecord;
use crate::person::entity::Person;

use super::report::{
    ChildAlert, FireResident, HouseholdMember, HouseholdRoster, PersonProfile, StationCoverage,
};

/// How a person is matched to their medical record.
///
/// `Id` is the historical contract: the record's id must equal the
/// person's id. `Name` matches on exact first + last name instead, for
/// stores whose id sequences cannot be kept aligned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinMode {
    #[default]
    Id,
    Name,
}

/// The alert query engine: seven pure, read-only queries over full
/// snapshots of the three record collections.
///
/// Every query is deterministic given the snapshots and `as_of`, and
/// preserves the relative order of the underlying scan. Absent matches
/// produce empty collections, never errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertEngine {
    join: JoinMode,
}

impl AlertEngine {
    pub fn new(join: JoinMode) -> Self {
        Self { join }
    }

    pub fn join_mode(&self) -> JoinMode {
        self.join
    }

    /// Children (age ≤ 18) living at the given address, exact match.
    ///
    /// Unlike every other joining query, a person with no medical
    /// record is skipped entirely: without a birthdate there is no age
    /// to classify on.
    pub fn children_at_address(
        &self,
        persons: &[Person],
        records: &[MedicalRecord],
        address: &str,
        as_of: Date,
    ) -> Vec<ChildAlert> {
        persons
            .iter()
            .filter(|p| p.address == address)
            .filter_map(|p| {
                let record = self.record_for(records, p)?;
                let age = age::age_on(&record.birthdate, as_of).or_zero();
                age::is_child(age).then(|| ChildAlert {
                    first_name: p.first_name.clone(),
                    last_name: p.last_name.clone(),
                    age,
                })
            })
            .collect()
    }

    /// Phone numbers of everyone living at an address covered by the
    /// station. Not de-duplicated: a shared phone is listed once per
    /// person.
    pub fn phones_for_station(
        &self,
        persons: &[Person],
        firestations: &[Firestation],
        station: u32,
    ) -> Vec<String> {
        let addresses = Self::covered_addresses(firestations, &[station]);
        persons
            .iter()
            .filter(|p| addresses.iter().any(|a| *a == p.address))
            .map(|p| p.phone.clone())
            .collect()
    }

    /// Residents of one address plus the station covering it.
    ///
    /// The station is resolved from the *first* firestation row whose
    /// address matches, in store order; duplicate rows for one address
    /// are an inherited data-entry hazard and the tie-break is
    /// deliberately left as-is. No matching row means an empty result.
    pub fn residents_at_address(
        &self,
        persons: &[Person],
        firestations: &[Firestation],
        records: &[MedicalRecord],
        address: &str,
        as_of: Date,
    ) -> Vec<FireResident> {
        let Some(station) = firestations
            .iter()
            .find(|f| f.address == address)
            .map(|f| f.station)
        else {
            return Vec::new();
        };

        persons
            .iter()
            .filter(|p| p.address == address)
            .map(|p| {
                let (age, medications, allergies) = self.medical_details(records, p, as_of);
                FireResident {
                    last_name: p.last_name.clone(),
                    phone: p.phone.clone(),
                    age,
                    medications,
                    allergies,
                    station_number: station,
                }
            })
            .collect()
    }

    /// Household rosters for every address covered by any of the given
    /// stations (union). An address with no residents still gets an
    /// entry with an empty member list. Address order follows the
    /// firestation scan, first occurrence wins.
    pub fn households_for_stations(
        &self,
        persons: &[Person],
        firestations: &[Firestation],
        records: &[MedicalRecord],
        stations: &[u32],
        as_of: Date,
    ) -> Vec<HouseholdRoster> {
        Self::covered_addresses(firestations, stations)
            .into_iter()
            .map(|address| {
                let members = persons
                    .iter()
                    .filter(|p| p.address == address)
                    .map(|p| {
                        let (age, medications, allergies) = self.medical_details(records, p, as_of);
                        HouseholdMember {
                            last_name: p.last_name.clone(),
                            phone: p.phone.clone(),
                            age,
                            medications,
                            allergies,
                        }
                    })
                    .collect();
                HouseholdRoster { address, members }
            })
            .collect()
    }

    /// Profiles for every person with the given last name,
    /// case-insensitive.
    pub fn profiles_by_last_name(
        &self,
        persons: &[Person],
        records: &[MedicalRecord],
        last_name: &str,
        as_of: Date,
    ) -> Vec<PersonProfile> {
        persons
            .iter()
            .filter(|p| p.last_name.eq_ignore_ascii_case(last_name))
            .map(|p| {
                let (age, medications, allergies) = self.medical_details(records, p, as_of);
                PersonProfile {
                    last_name: p.last_name.clone(),
                    address: p.address.clone(),
                    email: p.email.clone(),
                    age,
                    medications,
                    allergies,
                }
            })
            .collect()
    }

    /// Email of every person in the given city, case-insensitive.
    /// Not de-duplicated.
    pub fn emails_for_city(&self, persons: &[Person], city: &str) -> Vec<String> {
        persons
            .iter()
            .filter(|p| p.city.eq_ignore_ascii_case(city))
            .map(|p| p.email.clone())
            .collect()
    }

    /// One row per firestation record with the given station number,
    /// in store order.
    pub fn coverage_for_station(
        &self,
        firestations: &[Firestation],
        station: u32,
    ) -> Vec<StationCoverage> {
        firestations
            .iter()
            .filter(|f| f.station == station)
            .map(|f| StationCoverage {
                address: f.address.clone(),
                station: f.station,
            })
            .collect()
    }

    // ── Private helpers ────────────────────────────────────────────────

    /// Addresses covered by any of `stations`, scan order, first
    /// occurrence of a duplicate address wins.
    fn covered_addresses(firestations: &[Firestation], stations: &[u32]) -> Vec<String> {
        let mut addresses: Vec<String> = Vec::new();
        for f in firestations {
            if stations.contains(&f.station) && !addresses.contains(&f.address) {
                addresses.push(f.address.clone());
            }
        }
        addresses
    }

    /// Resolve the medical record for a person under the configured
    /// join mode.
    fn record_for<'a>(
        &self,
        records: &'a [MedicalRecord],
        person: &Person,
    ) -> Option<&'a MedicalRecord> {
        match self.join {
            JoinMode::Id => {
                let id = person.id?;
                records.iter().find(|r| r.id == Some(id))
            }
            JoinMode::Name => records
                .iter()
                .find(|r| r.first_name == person.first_name && r.last_name == person.last_name),
        }
    }

    /// Age plus medication and allergy lists, defaulting to
    /// `(0, [], [])` when the person has no medical record. The
    /// default never drops the person from the result.
    fn medical_details(
        &self,
        records: &[MedicalRecord],
        person: &Person,
        as_of: Date,
    ) -> (i32, Vec<String>, Vec<String>) {
        match self.record_for(records, person) {
            Some(record) => {
                let age = match age::age_on(&record.birthdate, as_of) {
                    BirthdateAge::Years(years) => years,
                    BirthdateAge::Unparseable => 0,
                };
                (age, record.medications.clone(), record.allergies.clone())
            }
            None => (0, Vec::new(), Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::entity::RecordId;
    use time::macros::date;

    const AS_OF: Date = date!(2024 - 01 - 01);

    fn person(id: u64, first: &str, last: &str, address: &str) -> Person {
        Person {
            id: Some(RecordId(id)),
            first_name: first.to_string(),
            last_name: last.to_string(),
            address: address.to_string(),
            city: "Culver".to_string(),
            zip: "97451".to_string(),
            phone: format!("841-874-{id:04}"),
            email: format!("{first}.{last}@email.com").to_lowercase(),
        }
    }

    fn record(id: u64, first: &str, last: &str, birthdate: &str) -> MedicalRecord {
        MedicalRecord {
            id: Some(RecordId(id)),
            first_name: first.to_string(),
            last_name: last.to_string(),
            birthdate: birthdate.to_string(),
            medications: vec!["aznol:350mg".to_string()],
            allergies: vec!["nillacilan".to_string()],
        }
    }

    fn station(id: u64, address: &str, number: u32) -> Firestation {
        Firestation {
            id: Some(RecordId(id)),
            address: address.to_string(),
            station: number,
        }
    }

    #[test]
    fn children_filters_by_inclusive_threshold() {
        let persons = vec![
            person(1, "Tenley", "Boyd", "1509 Culver St"),
            person(2, "John", "Boyd", "1509 Culver St"),
            person(3, "Eve", "Walker", "29 15th St"),
        ];
        let records = vec![
            record(1, "Tenley", "Boyd", "01/01/2006"), // exactly 18
            record(2, "John", "Boyd", "03/06/1984"),
            record(3, "Eve", "Walker", "01/01/2010"),
        ];
        let engine = AlertEngine::default();

        let children = engine.children_at_address(&persons, &records, "1509 Culver St", AS_OF);
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].first_name, "Tenley");
        assert_eq!(children[0].age, 18);
    }

    #[test]
    fn children_drops_person_without_record() {
        let persons = vec![person(1, "Tenley", "Boyd", "1509 Culver St")];
        let engine = AlertEngine::default();

        let children = engine.children_at_address(&persons, &[], "1509 Culver St", AS_OF);
        assert!(children.is_empty());
    }

    #[test]
    fn children_counts_unparseable_birthdate_as_newborn() {
        let persons = vec![person(1, "Tenley", "Boyd", "1509 Culver St")];
        let records = vec![record(1, "Tenley", "Boyd", "garbage")];
        let engine = AlertEngine::default();

        let children = engine.children_at_address(&persons, &records, "1509 Culver St", AS_OF);
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].age, 0);
    }

    #[test]
    fn children_never_returns_adults() {
        let persons: Vec<Person> = (1..=5)
            .map(|i| person(i, "P", "Boyd", "1509 Culver St"))
            .collect();
        let records: Vec<MedicalRecord> = (1..=5)
            .map(|i| record(i, "P", "Boyd", &format!("01/01/{}", 1980 + i)))
            .collect();
        let engine = AlertEngine::default();

        for child in engine.children_at_address(&persons, &records, "1509 Culver St", AS_OF) {
            assert!(child.age <= 18);
        }
    }

    #[test]
    fn phones_cover_all_station_addresses_without_dedup() {
        let firestations = vec![
            station(1, "1509 Culver St", 3),
            station(2, "834 Binoc Ave", 3),
            station(3, "29 15th St", 2),
        ];
        let mut persons = vec![
            person(1, "John", "Boyd", "1509 Culver St"),
            person(2, "Jacob", "Boyd", "834 Binoc Ave"),
            person(3, "Eve", "Walker", "29 15th St"),
        ];
        // Two residents sharing one phone must both be listed.
        let shared_phone = persons[0].phone.clone();
        persons[1].phone = shared_phone;
        let engine = AlertEngine::default();

        let phones = engine.phones_for_station(&persons, &firestations, 3);
        assert_eq!(phones, vec![persons[0].phone.clone(), persons[1].phone.clone()]);
    }

    #[test]
    fn fire_query_matches_reference_scenario() {
        // One station, one person, one aligned medical record.
        let firestations = vec![station(1, "1509 Culver St", 3)];
        let persons = vec![person(1, "John", "Boyd", "1509 Culver St")];
        let records = vec![record(1, "John", "Boyd", "03/06/1984")];
        let engine = AlertEngine::default();

        let rows =
            engine.residents_at_address(&persons, &firestations, &records, "1509 Culver St", AS_OF);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.last_name, "Boyd");
        assert_eq!(row.phone, persons[0].phone);
        assert_eq!(row.age, 39);
        assert_eq!(row.medications, vec!["aznol:350mg".to_string()]);
        assert_eq!(row.allergies, vec!["nillacilan".to_string()]);
        assert_eq!(row.station_number, 3);
    }

    #[test]
    fn fire_query_without_station_is_empty() {
        let persons = vec![person(1, "John", "Boyd", "1509 Culver St")];
        let records = vec![record(1, "John", "Boyd", "03/06/1984")];
        let engine = AlertEngine::default();

        let rows = engine.residents_at_address(&persons, &[], &records, "1509 Culver St", AS_OF);
        assert!(rows.is_empty());
    }

    #[test]
    fn fire_query_takes_first_station_row_for_ambiguous_address() {
        let firestations = vec![
            station(1, "1509 Culver St", 3),
            station(2, "1509 Culver St", 4),
        ];
        let persons = vec![person(1, "John", "Boyd", "1509 Culver St")];
        let records = vec![record(1, "John", "Boyd", "03/06/1984")];
        let engine = AlertEngine::default();

        let rows =
            engine.residents_at_address(&persons, &firestations, &records, "1509 Culver St", AS_OF);
        assert_eq!(rows[0].station_number, 3);
    }

    #[test]
    fn fire_query_keeps_person_without_record() {
        let firestations = vec![station(1, "1509 Culver St", 3)];
        let persons = vec![person(1, "John", "Boyd", "1509 Culver St")];
        let engine = AlertEngine::default();

        let rows = engine.residents_at_address(&persons, &firestations, &[], "1509 Culver St", AS_OF);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].age, 0);
        assert!(rows[0].medications.is_empty());
        assert!(rows[0].allergies.is_empty());
    }

    #[test]
    fn households_union_addresses_and_keep_empty_ones() {
        let firestations = vec![
            station(1, "1509 Culver St", 3),
            station(2, "834 Binoc Ave", 1),
            station(3, "29 15th St", 2),
        ];
        let persons = vec![person(1, "John", "Boyd", "1509 Culver St")];
        let records = vec![record(1, "John", "Boyd", "03/06/1984")];
        let engine = AlertEngine::default();

        let rosters =
            engine.households_for_stations(&persons, &firestations, &records, &[3, 1], AS_OF);
        assert_eq!(rosters.len(), 2);
        assert_eq!(rosters[0].address, "1509 Culver St");
        assert_eq!(rosters[0].members.len(), 1);
        // Covered address with nobody home still gets its entry.
        assert_eq!(rosters[1].address, "834 Binoc Ave");
        assert!(rosters[1].members.is_empty());
    }

    #[test]
    fn households_for_no_stations_is_empty() {
        let firestations = vec![station(1, "1509 Culver St", 3)];
        let engine = AlertEngine::default();

        let rosters = engine.households_for_stations(&[], &firestations, &[], &[], AS_OF);
        assert!(rosters.is_empty());
    }

    #[test]
    fn households_dedup_repeated_address_rows() {
        let firestations = vec![
            station(1, "1509 Culver St", 3),
            station(2, "1509 Culver St", 3),
        ];
        let engine = AlertEngine::default();

        let rosters = engine.households_for_stations(&[], &firestations, &[], &[3], AS_OF);
        assert_eq!(rosters.len(), 1);
    }

    #[test]
    fn profiles_match_last_name_case_insensitively() {
        let persons = vec![
            person(1, "John", "Boyd", "1509 Culver St"),
            person(2, "Eve", "Walker", "29 15th St"),
        ];
        let records = vec![record(1, "John", "Boyd", "03/06/1984")];
        let engine = AlertEngine::default();

        let profiles = engine.profiles_by_last_name(&persons, &records, "BOYD", AS_OF);
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].age, 39);
        assert_eq!(profiles[0].email, "john.boyd@email.com");
    }

    #[test]
    fn profiles_keep_person_without_record() {
        let persons = vec![person(1, "John", "Boyd", "1509 Culver St")];
        let engine = AlertEngine::default();

        let profiles = engine.profiles_by_last_name(&persons, &[], "boyd", AS_OF);
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].age, 0);
        assert!(profiles[0].medications.is_empty());
    }

    #[test]
    fn emails_match_city_case_insensitively_without_dedup() {
        let mut persons = vec![
            person(1, "John", "Boyd", "1509 Culver St"),
            person(2, "Jacob", "Boyd", "1509 Culver St"),
        ];
        let shared_email = persons[0].email.clone();
        persons[1].email = shared_email;
        let engine = AlertEngine::default();

        let emails = engine.emails_for_city(&persons, "CULVER");
        assert_eq!(emails.len(), 2);
        assert_eq!(emails[0], emails[1]);
    }

    #[test]
    fn coverage_returns_matching_rows_in_store_order() {
        let firestations = vec![
            station(1, "1509 Culver St", 3),
            station(2, "29 15th St", 2),
            station(3, "834 Binoc Ave", 3),
        ];
        let engine = AlertEngine::default();

        let rows = engine.coverage_for_station(&firestations, 3);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].address, "1509 Culver St");
        assert_eq!(rows[1].address, "834 Binoc Ave");
        assert!(rows.iter().all(|r| r.station == 3));
    }

    #[test]
    fn name_join_survives_diverged_ids() {
        let persons = vec![person(1, "John", "Boyd", "1509 Culver St")];
        // Record id 9 does not match person id 1.
        let records = vec![record(9, "John", "Boyd", "03/06/1984")];

        let by_id = AlertEngine::new(JoinMode::Id);
        let by_name = AlertEngine::new(JoinMode::Name);

        let id_profiles = by_id.profiles_by_last_name(&persons, &records, "Boyd", AS_OF);
        assert_eq!(id_profiles[0].age, 0, "id join misses the record");

        let name_profiles = by_name.profiles_by_last_name(&persons, &records, "Boyd", AS_OF);
        assert_eq!(name_profiles[0].age, 39, "name join finds it");
    }

    #[test]
    fn every_query_is_empty_on_empty_stores() {
        let engine = AlertEngine::default();
        assert!(engine.children_at_address(&[], &[], "x", AS_OF).is_empty());
        assert!(engine.phones_for_station(&[], &[], 1).is_empty());
        assert!(engine.residents_at_address(&[], &[], &[], "x", AS_OF).is_empty());
        assert!(engine.households_for_stations(&[], &[], &[], &[1], AS_OF).is_empty());
        assert!(engine.profiles_by_last_name(&[], &[], "x", AS_OF).is_empty());
        assert!(engine.emails_for_city(&[], "x").is_empty());
        assert!(engine.coverage_for_station(&[], 1).is_empty());
    }
}
