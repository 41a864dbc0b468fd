use std::sync::Arc;

use domain::alert::engine::{AlertEngine, JoinMode};
use domain::alert::report::{
    ChildAlert, FireResident, HouseholdRoster, PersonProfile, StationCoverage,
};
use domain::common::error::DomainError;
use ports::secondary::firestation_store::FirestationStore;
use ports::secondary::medical_record_store::MedicalRecordStore;
use ports::secondary::person_store::PersonStore;
use time::{Date, OffsetDateTime};

/// Application-level alert query service.
///
/// Pulls full snapshots from the three stores, hands them to the pure
/// domain engine, and logs the query. Ages are computed against the
/// current UTC date at call time; the `*_on` variants exist so tests
/// can pin the date.
pub struct AlertAppService {
    persons: Arc<dyn PersonStore>,
    firestations: Arc<dyn FirestationStore>,
    medical_records: Arc<dyn MedicalRecordStore>,
    engine: AlertEngine,
}

impl AlertAppService {
    pub fn new(
        persons: Arc<dyn PersonStore>,
        firestations: Arc<dyn FirestationStore>,
        medical_records: Arc<dyn MedicalRecordStore>,
        join: JoinMode,
    ) -> Self {
        Self {
            persons,
            firestations,
            medical_records,
            engine: AlertEngine::new(join),
        }
    }

    fn today() -> Date {
        OffsetDateTime::now_utc().date()
    }

    pub fn children_at_address(&self, address: &str) -> Result<Vec<ChildAlert>, DomainError> {
        self.children_at_address_on(address, Self::today())
    }

    pub fn children_at_address_on(
        &self,
        address: &str,
        as_of: Date,
    ) -> Result<Vec<ChildAlert>, DomainError> {
        let persons = self.persons.find_all()?;
        let records = self.medical_records.find_all()?;
        let children = self
            .engine
            .children_at_address(&persons, &records, address, as_of);
        tracing::debug!(address, count = children.len(), "child alert query");
        Ok(children)
    }

    pub fn phones_for_station(&self, station: u32) -> Result<Vec<String>, DomainError> {
        let persons = self.persons.find_all()?;
        let firestations = self.firestations.find_all()?;
        let phones = self.engine.phones_for_station(&persons, &firestations, station);
        tracing::debug!(station, count = phones.len(), "phone alert query");
        Ok(phones)
    }

    pub fn residents_at_address(&self, address: &str) -> Result<Vec<FireResident>, DomainError> {
        self.residents_at_address_on(address, Self::today())
    }

    pub fn residents_at_address_on(
        &self,
        address: &str,
        as_of: Date,
    ) -> Result<Vec<FireResident>, DomainError> {
        let persons = self.persons.find_all()?;
        let firestations = self.firestations.find_all()?;
        let records = self.medical_records.find_all()?;
        let residents =
            self.engine
                .residents_at_address(&persons, &firestations, &records, address, as_of);
        tracing::debug!(address, count = residents.len(), "fire query");
        Ok(residents)
    }

    pub fn households_for_stations(
        &self,
        stations: &[u32],
    ) -> Result<Vec<HouseholdRoster>, DomainError> {
        self.households_for_stations_on(stations, Self::today())
    }

    pub fn households_for_stations_on(
        &self,
        stations: &[u32],
        as_of: Date,
    ) -> Result<Vec<HouseholdRoster>, DomainError> {
        let persons = self.persons.find_all()?;
        let firestations = self.firestations.find_all()?;
        let records = self.medical_records.find_all()?;
        let rosters = self.engine.households_for_stations(
            &persons,
            &firestations,
            &records,
            stations,
            as_of,
        );
        tracing::debug!(?stations, households = rosters.len(), "flood query");
        Ok(rosters)
    }

    pub fn profiles_by_last_name(
        &self,
        last_name: &str,
    ) -> Result<Vec<PersonProfile>, DomainError> {
        self.profiles_by_last_name_on(last_name, Self::today())
    }

    pub fn profiles_by_last_name_on(
        &self,
        last_name: &str,
        as_of: Date,
    ) -> Result<Vec<PersonProfile>, DomainError> {
        let persons = self.persons.find_all()?;
        let records = self.medical_records.find_all()?;
        let profiles = self
            .engine
            .profiles_by_last_name(&persons, &records, last_name, as_of);
        tracing::debug!(last_name, count = profiles.len(), "person info query");
        Ok(profiles)
    }

    pub fn emails_for_city(&self, city: &str) -> Result<Vec<String>, DomainError> {
        let persons = self.persons.find_all()?;
        let emails = self.engine.emails_for_city(&persons, city);
        tracing::debug!(city, count = emails.len(), "community email query");
        Ok(emails)
    }

    pub fn coverage_for_station(
        &self,
        station: u32,
    ) -> Result<Vec<StationCoverage>, DomainError> {
        let firestations = self.firestations.find_all()?;
        let coverage = self.engine.coverage_for_station(&firestations, station);
        tracing::debug!(station, count = coverage.len(), "station coverage query");
        Ok(coverage)
    }
}
