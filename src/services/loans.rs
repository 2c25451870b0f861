//! Loan management service
//!
//! The loan form edits the possession dimension of a hardware record.
//! Normalization rule: only "Loaned Out" carries a borrower; submitting
//! any other status writes `loaned_to_employee_id: null`, even if an
//! employee was picked earlier in the form.

use crate::api::{self, ApiClient};
use crate::error::AppError;
use crate::models::{Hardware, LoanStatus, LoanUpdate, UpdateHardware};
use crate::AppResult;

/// Loan form state as submitted: the chosen status plus whatever borrower
/// selection the form was holding at the time.
#[derive(Debug, Clone)]
pub struct LoanForm {
    pub loan_status: LoanStatus,
    pub selected_employee_id: Option<i64>,
}

#[derive(Clone)]
pub struct LoansService {
    client: ApiClient,
}

impl LoansService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// All hardware with its loan columns (the loaned-devices view shows
    /// every record, loaned or not).
    pub async fn list(&self) -> AppResult<Vec<Hardware>> {
        api::hardware::list(&self.client).await
    }

    /// Hardware currently out on loan
    pub async fn loaned_out(&self) -> AppResult<Vec<Hardware>> {
        let all = self.list().await?;
        Ok(all
            .into_iter()
            .filter(|item| item.loan_status() == LoanStatus::LoanedOut)
            .collect())
    }

    /// Apply a loan form submission to one hardware record.
    pub async fn update_loan(&self, id: i64, form: &LoanForm) -> AppResult<Hardware> {
        let normalized = normalize(form)?;
        let update = UpdateHardware {
            loan_status: Some(normalized.loan_status),
            loaned_to_employee_id: Some(normalized.loaned_to_employee_id),
            ..Default::default()
        };
        api::hardware::update(&self.client, id, &update).await
    }
}

/// Normalize a form submission into the wire payload.
pub fn normalize(form: &LoanForm) -> AppResult<LoanUpdate> {
    let loaned_to_employee_id = if form.loan_status.requires_borrower() {
        match form.selected_employee_id {
            Some(id) => Some(id),
            None => {
                return Err(AppError::Validation(
                    "An employee must be selected to loan out a device.".to_string(),
                ))
            }
        }
    } else {
        None
    };
    Ok(LoanUpdate {
        loaned_to_employee_id,
        loan_status: form.loan_status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_loaned_statuses_always_clear_the_borrower() {
        // Even with an employee still selected in the form
        for status in [
            LoanStatus::Available,
            LoanStatus::InRepair,
            LoanStatus::ReturnedToStock,
        ] {
            let normalized = normalize(&LoanForm {
                loan_status: status,
                selected_employee_id: Some(3),
            })
            .unwrap();
            assert_eq!(normalized.loaned_to_employee_id, None, "{status}");
            assert_eq!(normalized.loan_status, status);
        }
    }

    #[test]
    fn loaning_out_keeps_the_borrower() {
        let normalized = normalize(&LoanForm {
            loan_status: LoanStatus::LoanedOut,
            selected_employee_id: Some(3),
        })
        .unwrap();
        assert_eq!(normalized.loaned_to_employee_id, Some(3));
    }

    #[test]
    fn loaning_out_without_a_borrower_is_rejected() {
        let err = normalize(&LoanForm {
            loan_status: LoanStatus::LoanedOut,
            selected_employee_id: None,
        })
        .unwrap_err();
        assert!(err.is_validation());
    }
}
