//! Flight catalog.
//!
//! A small file-backed store of flights with their cabin dimensions and
//! booked seats. It stands in for the flight metadata and booking
//! persistence the recommendation core consumes: the core only ever sees a
//! `SeatLayout` and a `BookedSet` snapshot taken from a `Flight`.
//!
//! File format (JSON):
//! ```json
//! { "flights": [ { "id": 1, "origin": "LCY", "destination": "BUD",
//!                  "departureDate": "2025-11-15", "rows": 18,
//!                  "seatsPerRow": 6, "bookedSeats": ["1C", "4F"] } ] }
//! ```

use crate::error::{CatalogError, Result};
use crate::types::{BookedSet, RowNumber, SeatLayout};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Unique identifier for a flight
pub type FlightId = u64;

/// A single flight with its cabin and current bookings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: FlightId,
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    pub rows: RowNumber,
    pub seats_per_row: u8,
    #[serde(default)]
    pub booked_seats: BTreeSet<String>,
}

impl Flight {
    /// Validated cabin layout for this flight
    pub fn layout(&self) -> Result<SeatLayout> {
        SeatLayout::new(self.rows, self.seats_per_row)
    }

    /// Snapshot of the booked seats, safe to hand to a concurrent request
    pub fn booked_set(&self) -> BookedSet {
        self.booked_seats.iter().cloned().collect()
    }

    pub fn is_seat_booked(&self, seat_number: &str) -> bool {
        self.booked_seats.contains(seat_number)
    }

    pub fn add_booked_seat(&mut self, seat_number: impl Into<String>) {
        self.booked_seats.insert(seat_number.into());
    }

    pub fn clear_booked_seats(&mut self) {
        self.booked_seats.clear();
    }
}

/// On-disk shape of the catalog
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    flights: Vec<Flight>,
}

/// All known flights, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct FlightCatalog {
    flights: BTreeMap<FlightId, Flight>,
}

impl FlightCatalog {
    pub fn new() -> Self {
        Self {
            flights: BTreeMap::new(),
        }
    }

    /// Insert a flight, replacing any existing flight with the same id
    pub fn insert_flight(&mut self, flight: Flight) {
        self.flights.insert(flight.id, flight);
    }

    pub fn get_flight(&self, id: FlightId) -> Option<&Flight> {
        self.flights.get(&id)
    }

    /// Flights in ascending id order
    pub fn flights(&self) -> impl Iterator<Item = &Flight> {
        self.flights.values()
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Parse a catalog from JSON and validate it
    pub fn from_json_str(json: &str) -> std::result::Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let mut catalog = Self::new();
        for flight in file.flights {
            if catalog.flights.contains_key(&flight.id) {
                return Err(CatalogError::DuplicateFlight { id: flight.id });
            }
            catalog.insert_flight(flight);
        }

        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a JSON file
    pub fn load_from_file(path: &Path) -> std::result::Result<Self, CatalogError> {
        if !path.exists() {
            return Err(CatalogError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let json = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        info!("Loaded {} flights from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Serialize the catalog as pretty-printed JSON
    pub fn to_json_string(&self) -> std::result::Result<String, CatalogError> {
        let file = CatalogFile {
            flights: self.flights.values().cloned().collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Write the catalog to a JSON file, creating parent directories
    pub fn save_to_file(&self, path: &Path) -> std::result::Result<(), CatalogError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_json_string()?)?;
        debug!("Wrote {} flights to {}", self.len(), path.display());
        Ok(())
    }

    /// Check that every flight has a layout the generator can build
    pub fn validate(&self) -> std::result::Result<(), CatalogError> {
        for flight in self.flights.values() {
            flight
                .layout()
                .map_err(|source| CatalogError::InvalidFlight {
                    id: flight.id,
                    source,
                })?;
        }
        Ok(())
    }
}
