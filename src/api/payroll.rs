//! Payroll data access.

use crate::error::ClientResult;
use crate::models::{NewPayroll, PayrollRecord};

use super::client::ApiClient;

const PAYROLL: &str = "payroll";

/// CRUD access to payroll records under `payroll/`.
#[derive(Debug, Clone)]
pub struct PayrollService {
    client: ApiClient,
}

impl PayrollService {
    /// Creates a service on top of `client`.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Lists every payroll record visible to the tenant.
    pub async fn list(&self) -> ClientResult<Vec<PayrollRecord>> {
        self.client.get(&[PAYROLL]).await
    }

    /// Lists the payroll records of one employee.
    pub async fn list_for_employee(&self, employee_id: &str) -> ClientResult<Vec<PayrollRecord>> {
        self.client
            .get_with_query(&[PAYROLL], &[("employee_id", employee_id)])
            .await
    }

    /// Fetches one payroll record.
    pub async fn get(&self, id: &str) -> ClientResult<PayrollRecord> {
        self.client.get(&[PAYROLL, id]).await
    }

    /// Creates a payroll record, returning it as stored.
    pub async fn create(&self, payroll: &NewPayroll) -> ClientResult<PayrollRecord> {
        self.client.post(&[PAYROLL], payroll).await
    }

    /// Replaces a payroll record, returning it as stored.
    pub async fn update(&self, id: &str, payroll: &NewPayroll) -> ClientResult<PayrollRecord> {
        self.client.put(&[PAYROLL, id], payroll).await
    }

    /// Deletes a payroll record.
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.client.delete(&[PAYROLL, id]).await
    }

    /// Approves a draft payroll record for payment.
    pub async fn approve(&self, id: &str) -> ClientResult<PayrollRecord> {
        self.client.post_empty(&[PAYROLL, id, "approve"]).await
    }
}
