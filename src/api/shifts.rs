//! Shift data access.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::ClientResult;
use crate::models::{NewShift, Shift};

use super::client::ApiClient;

const SHIFTS: &str = "shifts";

#[derive(Serialize)]
struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

/// CRUD access to shifts under `shifts/`.
#[derive(Debug, Clone)]
pub struct ShiftService {
    client: ApiClient,
}

impl ShiftService {
    /// Creates a service on top of `client`.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Lists every shift visible to the tenant.
    pub async fn list(&self) -> ClientResult<Vec<Shift>> {
        self.client.get(&[SHIFTS]).await
    }

    /// Lists shifts dated between `from` and `to`, inclusive.
    pub async fn list_between(&self, from: NaiveDate, to: NaiveDate) -> ClientResult<Vec<Shift>> {
        self.client
            .get_with_query(&[SHIFTS], &DateRange { from, to })
            .await
    }

    /// Fetches one shift.
    pub async fn get(&self, id: &str) -> ClientResult<Shift> {
        self.client.get(&[SHIFTS, id]).await
    }

    /// Creates a shift, returning it as stored.
    pub async fn create(&self, shift: &NewShift) -> ClientResult<Shift> {
        self.client.post(&[SHIFTS], shift).await
    }

    /// Replaces a shift, returning it as stored.
    pub async fn update(&self, id: &str, shift: &NewShift) -> ClientResult<Shift> {
        self.client.put(&[SHIFTS, id], shift).await
    }

    /// Deletes a shift.
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client.delete(&[SHIFTS, id]).await
    }
}
