//! The reservation store: an insertion-ordered collection synchronized with
//! a comma-delimited storage file after every mutation.
//!
//! The backing file is rewritten in full on every successful add, cancel, or
//! update, so memory and disk never diverge after a successful mutation. If a
//! write fails the in-memory state stays authoritative for the rest of the
//! session and the failure is reported as [`StoreError::Persist`].
//!
//! Cancel and update take a 1-based position in the time-sorted view, and the
//! view is recomputed at call time so positions always match what the caller
//! was last shown.

mod error;

pub use error::StoreError;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::config::StoreConfig;
use crate::reservation::{Reservation, parse_party_size, parse_reservation_time};

/// Row counts from reading the storage file. Malformed rows are skipped
/// rather than failing the load, and the count is surfaced here so the
/// policy is visible to callers instead of buried in a log line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
    /// The storage file did not exist; the store started empty.
    pub file_missing: bool,
}

/// Optional replacements for an update. `None` keeps the existing value.
/// Fields arrive as raw text and are validated by the store, same as add.
#[derive(Debug, Clone, Default)]
pub struct ReservationUpdate {
    pub name: Option<String>,
    pub party_size: Option<String>,
    pub reservation_time: Option<String>,
}

pub struct ReservationStore {
    config: StoreConfig,
    reservations: Vec<Reservation>,
}

impl ReservationStore {
    /// Open the store, reading every persisted row from the configured file.
    ///
    /// A missing file is not an error: the store starts empty. An unreadable
    /// file is logged and likewise yields an empty store; the session
    /// continues with in-memory state as the source of truth.
    pub fn load(config: StoreConfig) -> (Self, LoadReport) {
        let mut store = ReservationStore {
            config,
            reservations: Vec::new(),
        };
        let report = store.read_storage();
        (store, report)
    }

    fn read_storage(&mut self) -> LoadReport {
        let path = self.config.storage_path();
        if !path.exists() {
            log::info!(
                "{} not found, starting with an empty store",
                path.display()
            );
            return LoadReport {
                file_missing: true,
                ..LoadReport::default()
            };
        }

        // flexible: rows with the wrong field count are still yielded as
        // records, so they can be counted as skipped instead of poisoning
        // the whole read.
        let mut reader = match ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
        {
            Ok(reader) => reader,
            Err(err) => {
                log::error!("failed to open {}: {}", path.display(), err);
                return LoadReport::default();
            }
        };

        let mut report = LoadReport::default();
        for record in reader.records() {
            let record = match record {
                Ok(record) => record,
                Err(err) => {
                    log::warn!("skipping unreadable row: {err}");
                    report.skipped += 1;
                    continue;
                }
            };
            match decode_row(&record) {
                Some(reservation) => {
                    self.reservations.push(reservation);
                    report.loaded += 1;
                }
                None => {
                    log::warn!("skipping malformed row: {record:?}");
                    report.skipped += 1;
                }
            }
        }
        report
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    /// All records in insertion order.
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Validate and append a reservation, then rewrite the storage file.
    /// On a validation failure nothing is mutated.
    pub fn add(
        &mut self,
        name: &str,
        party_size: &str,
        reservation_time: &str,
    ) -> Result<(), StoreError> {
        let party_size = parse_party_size(party_size)?;
        let reservation_time = parse_reservation_time(reservation_time)?;
        self.reservations.push(Reservation {
            name: name.trim().to_string(),
            party_size,
            reservation_time,
        });
        self.persist()
    }

    /// Records ordered ascending by reservation time. The sort is stable, so
    /// records with equal timestamps keep their original relative order.
    pub fn list_sorted(&self) -> Vec<&Reservation> {
        let mut sorted: Vec<&Reservation> = self.reservations.iter().collect();
        sorted.sort_by_key(|r| r.reservation_time);
        sorted
    }

    /// Look up a record by its 1-based position in the time-sorted view.
    pub fn get_sorted(&self, position: usize) -> Option<&Reservation> {
        let index = self.resolve_position(position).ok()?;
        self.reservations.get(index)
    }

    /// Remove the record at the given 1-based position in the time-sorted
    /// view and rewrite the storage file. Returns the removed record.
    pub fn cancel(&mut self, position: usize) -> Result<Reservation, StoreError> {
        let index = self.resolve_position(position)?;
        let removed = self.reservations.remove(index);
        self.persist()?;
        Ok(removed)
    }

    /// Replace fields of the record at the given 1-based position in the
    /// time-sorted view. Omitted fields keep their prior value; supplied
    /// fields are validated exactly as in [`ReservationStore::add`]. Any
    /// failure leaves all records unchanged.
    pub fn update(
        &mut self,
        position: usize,
        changes: ReservationUpdate,
    ) -> Result<Reservation, StoreError> {
        let index = self.resolve_position(position)?;
        let current = &self.reservations[index];

        // Validate everything before touching the record.
        let party_size = match &changes.party_size {
            Some(raw) => parse_party_size(raw)?,
            None => current.party_size,
        };
        let reservation_time = match &changes.reservation_time {
            Some(raw) => parse_reservation_time(raw)?,
            None => current.reservation_time,
        };
        let name = match changes.name {
            Some(name) => name.trim().to_string(),
            None => current.name.clone(),
        };

        let updated = Reservation {
            name,
            party_size,
            reservation_time,
        };
        self.reservations[index] = updated.clone();
        self.persist()?;
        Ok(updated)
    }

    /// Rewrite the whole storage file from the in-memory collection.
    pub fn persist(&self) -> Result<(), StoreError> {
        let path = self.config.storage_path();
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(path)
            .map_err(|err| self.persist_error(err))?;
        for reservation in &self.reservations {
            writer
                .serialize(reservation)
                .map_err(|err| self.persist_error(err))?;
        }
        writer
            .flush()
            .map_err(|err| self.persist_error(csv::Error::from(err)))?;
        log::debug!(
            "persisted {} reservation(s) to {}",
            self.reservations.len(),
            path.display()
        );
        Ok(())
    }

    /// Map a 1-based position in the time-sorted view to an index into the
    /// backing vector. Position 0 and positions past the end are lookup errors.
    fn resolve_position(&self, position: usize) -> Result<usize, StoreError> {
        if position == 0 || position > self.reservations.len() {
            return Err(StoreError::InvalidPosition(position));
        }
        let mut order: Vec<usize> = (0..self.reservations.len()).collect();
        order.sort_by_key(|&i| self.reservations[i].reservation_time);
        Ok(order[position - 1])
    }

    fn persist_error(&self, source: csv::Error) -> StoreError {
        StoreError::Persist {
            path: self.config.storage_path().display().to_string(),
            source,
        }
    }
}

/// A row is accepted only if it has exactly three fields, a positive party
/// size, and a timestamp in the fixed pattern.
fn decode_row(record: &StringRecord) -> Option<Reservation> {
    if record.len() != 3 {
        return None;
    }
    let name = record.get(0)?.to_string();
    let party_size = parse_party_size(record.get(1)?).ok()?;
    let reservation_time = parse_reservation_time(record.get(2)?).ok()?;
    Some(Reservation {
        name,
        party_size,
        reservation_time,
    })
}
