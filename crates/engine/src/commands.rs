//! Command structs for engine operations.
//!
//! These types group parameters for the multi-field write operations,
//! keeping call sites readable and avoiding long argument lists. Every
//! command carries the `audit_api_call_uuid` that attributes the mutation.

use chrono::NaiveDate;

/// Create a budget for a `(month, year, subcategory)` tuple.
#[derive(Clone, Debug)]
pub struct CreateBudgetCmd {
    pub audit_api_call_uuid: String,
    pub subcategory_uuid: String,
    pub month: i32,
    pub year: i32,
    pub amount_cents: i64,
    pub notes: String,
}

impl CreateBudgetCmd {
    #[must_use]
    pub fn new(
        audit_api_call_uuid: impl Into<String>,
        subcategory_uuid: impl Into<String>,
        month: i32,
        year: i32,
        amount_cents: i64,
    ) -> Self {
        Self {
            audit_api_call_uuid: audit_api_call_uuid.into(),
            subcategory_uuid: subcategory_uuid.into(),
            month,
            year,
            amount_cents,
            notes: String::new(),
        }
    }

    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// Update a budget. All fields are replaced; unchanged values produce no
/// audit entries.
#[derive(Clone, Debug)]
pub struct UpdateBudgetCmd {
    pub audit_api_call_uuid: String,
    pub budget_uuid: String,
    pub subcategory_uuid: String,
    pub month: i32,
    pub year: i32,
    pub amount_cents: i64,
    pub notes: String,
}

impl UpdateBudgetCmd {
    #[must_use]
    pub fn new(
        audit_api_call_uuid: impl Into<String>,
        budget_uuid: impl Into<String>,
        subcategory_uuid: impl Into<String>,
        month: i32,
        year: i32,
        amount_cents: i64,
    ) -> Self {
        Self {
            audit_api_call_uuid: audit_api_call_uuid.into(),
            budget_uuid: budget_uuid.into(),
            subcategory_uuid: subcategory_uuid.into(),
            month,
            year,
            amount_cents,
            notes: String::new(),
        }
    }

    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// Create an expense.
#[derive(Clone, Debug)]
pub struct CreateExpenseCmd {
    pub audit_api_call_uuid: String,
    pub subcategory_uuid: String,
    pub vendor_uuid: String,
    pub household_member_uuid: String,
    pub fund_uuid: Option<String>,
    pub date: NaiveDate,
    pub amount_cents: i64,
    pub reimbursed_cents: i64,
    pub description: String,
}

impl CreateExpenseCmd {
    #[must_use]
    pub fn new(
        audit_api_call_uuid: impl Into<String>,
        subcategory_uuid: impl Into<String>,
        vendor_uuid: impl Into<String>,
        household_member_uuid: impl Into<String>,
        date: NaiveDate,
        amount_cents: i64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            audit_api_call_uuid: audit_api_call_uuid.into(),
            subcategory_uuid: subcategory_uuid.into(),
            vendor_uuid: vendor_uuid.into(),
            household_member_uuid: household_member_uuid.into(),
            fund_uuid: None,
            date,
            amount_cents,
            reimbursed_cents: 0,
            description: description.into(),
        }
    }

    #[must_use]
    pub fn fund_uuid(mut self, fund_uuid: impl Into<String>) -> Self {
        self.fund_uuid = Some(fund_uuid.into());
        self
    }

    #[must_use]
    pub fn reimbursed_cents(mut self, reimbursed_cents: i64) -> Self {
        self.reimbursed_cents = reimbursed_cents;
        self
    }
}

/// Update an expense. All fields are replaced.
#[derive(Clone, Debug)]
pub struct UpdateExpenseCmd {
    pub audit_api_call_uuid: String,
    pub expense_uuid: String,
    pub subcategory_uuid: String,
    pub vendor_uuid: String,
    pub household_member_uuid: String,
    pub fund_uuid: Option<String>,
    pub date: NaiveDate,
    pub amount_cents: i64,
    pub reimbursed_cents: i64,
    pub description: String,
}

impl UpdateExpenseCmd {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        audit_api_call_uuid: impl Into<String>,
        expense_uuid: impl Into<String>,
        subcategory_uuid: impl Into<String>,
        vendor_uuid: impl Into<String>,
        household_member_uuid: impl Into<String>,
        date: NaiveDate,
        amount_cents: i64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            audit_api_call_uuid: audit_api_call_uuid.into(),
            expense_uuid: expense_uuid.into(),
            subcategory_uuid: subcategory_uuid.into(),
            vendor_uuid: vendor_uuid.into(),
            household_member_uuid: household_member_uuid.into(),
            fund_uuid: None,
            date,
            amount_cents,
            reimbursed_cents: 0,
            description: description.into(),
        }
    }

    #[must_use]
    pub fn fund_uuid(mut self, fund_uuid: impl Into<String>) -> Self {
        self.fund_uuid = Some(fund_uuid.into());
        self
    }

    #[must_use]
    pub fn reimbursed_cents(mut self, reimbursed_cents: i64) -> Self {
        self.reimbursed_cents = reimbursed_cents;
        self
    }
}

/// Create an income.
#[derive(Clone, Debug)]
pub struct CreateIncomeCmd {
    pub audit_api_call_uuid: String,
    pub household_member_uuid: String,
    pub employer_uuid: Option<String>,
    pub date: NaiveDate,
    pub amount_cents: i64,
    pub description: String,
}

impl CreateIncomeCmd {
    #[must_use]
    pub fn new(
        audit_api_call_uuid: impl Into<String>,
        household_member_uuid: impl Into<String>,
        date: NaiveDate,
        amount_cents: i64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            audit_api_call_uuid: audit_api_call_uuid.into(),
            household_member_uuid: household_member_uuid.into(),
            employer_uuid: None,
            date,
            amount_cents,
            description: description.into(),
        }
    }

    #[must_use]
    pub fn employer_uuid(mut self, employer_uuid: impl Into<String>) -> Self {
        self.employer_uuid = Some(employer_uuid.into());
        self
    }
}

/// Update an income. All fields are replaced.
#[derive(Clone, Debug)]
pub struct UpdateIncomeCmd {
    pub audit_api_call_uuid: String,
    pub income_uuid: String,
    pub household_member_uuid: String,
    pub employer_uuid: Option<String>,
    pub date: NaiveDate,
    pub amount_cents: i64,
    pub description: String,
}

impl UpdateIncomeCmd {
    #[must_use]
    pub fn new(
        audit_api_call_uuid: impl Into<String>,
        income_uuid: impl Into<String>,
        household_member_uuid: impl Into<String>,
        date: NaiveDate,
        amount_cents: i64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            audit_api_call_uuid: audit_api_call_uuid.into(),
            income_uuid: income_uuid.into(),
            household_member_uuid: household_member_uuid.into(),
            employer_uuid: None,
            date,
            amount_cents,
            description: description.into(),
        }
    }

    #[must_use]
    pub fn employer_uuid(mut self, employer_uuid: impl Into<String>) -> Self {
        self.employer_uuid = Some(employer_uuid.into());
        self
    }
}

/// Create a deposit into a fund.
#[derive(Clone, Debug)]
pub struct CreateDepositCmd {
    pub audit_api_call_uuid: String,
    pub fund_uuid: String,
    pub date: NaiveDate,
    pub amount_cents: i64,
}

impl CreateDepositCmd {
    #[must_use]
    pub fn new(
        audit_api_call_uuid: impl Into<String>,
        fund_uuid: impl Into<String>,
        date: NaiveDate,
        amount_cents: i64,
    ) -> Self {
        Self {
            audit_api_call_uuid: audit_api_call_uuid.into(),
            fund_uuid: fund_uuid.into(),
            date,
            amount_cents,
        }
    }
}

/// Update a deposit, possibly retargeting it to another fund.
#[derive(Clone, Debug)]
pub struct UpdateDepositCmd {
    pub audit_api_call_uuid: String,
    pub deposit_uuid: String,
    pub fund_uuid: String,
    pub date: NaiveDate,
    pub amount_cents: i64,
}

impl UpdateDepositCmd {
    #[must_use]
    pub fn new(
        audit_api_call_uuid: impl Into<String>,
        deposit_uuid: impl Into<String>,
        fund_uuid: impl Into<String>,
        date: NaiveDate,
        amount_cents: i64,
    ) -> Self {
        Self {
            audit_api_call_uuid: audit_api_call_uuid.into(),
            deposit_uuid: deposit_uuid.into(),
            fund_uuid: fund_uuid.into(),
            date,
            amount_cents,
        }
    }
}

/// Create a loan. The balance starts at the loan amount.
#[derive(Clone, Debug)]
pub struct CreateLoanCmd {
    pub audit_api_call_uuid: String,
    pub name: String,
    pub amount_cents: i64,
}

impl CreateLoanCmd {
    #[must_use]
    pub fn new(
        audit_api_call_uuid: impl Into<String>,
        name: impl Into<String>,
        amount_cents: i64,
    ) -> Self {
        Self {
            audit_api_call_uuid: audit_api_call_uuid.into(),
            name: name.into(),
            amount_cents,
        }
    }
}

/// Update a loan's name and amount. Adjusting the amount shifts the
/// remaining balance by the same delta.
#[derive(Clone, Debug)]
pub struct UpdateLoanCmd {
    pub audit_api_call_uuid: String,
    pub loan_uuid: String,
    pub name: String,
    pub amount_cents: i64,
}

impl UpdateLoanCmd {
    #[must_use]
    pub fn new(
        audit_api_call_uuid: impl Into<String>,
        loan_uuid: impl Into<String>,
        name: impl Into<String>,
        amount_cents: i64,
    ) -> Self {
        Self {
            audit_api_call_uuid: audit_api_call_uuid.into(),
            loan_uuid: loan_uuid.into(),
            name: name.into(),
            amount_cents,
        }
    }
}

/// Create a loan payment; the principal reduces the loan balance.
#[derive(Clone, Debug)]
pub struct CreateLoanPaymentCmd {
    pub audit_api_call_uuid: String,
    pub loan_uuid: String,
    pub date: NaiveDate,
    pub principal_amount_cents: i64,
    pub interest_amount_cents: i64,
}

impl CreateLoanPaymentCmd {
    #[must_use]
    pub fn new(
        audit_api_call_uuid: impl Into<String>,
        loan_uuid: impl Into<String>,
        date: NaiveDate,
        principal_amount_cents: i64,
        interest_amount_cents: i64,
    ) -> Self {
        Self {
            audit_api_call_uuid: audit_api_call_uuid.into(),
            loan_uuid: loan_uuid.into(),
            date,
            principal_amount_cents,
            interest_amount_cents,
        }
    }
}

/// Update a loan payment. The payment stays on its loan; principal changes
/// adjust the loan balance by the delta.
#[derive(Clone, Debug)]
pub struct UpdateLoanPaymentCmd {
    pub audit_api_call_uuid: String,
    pub loan_payment_uuid: String,
    pub date: NaiveDate,
    pub principal_amount_cents: i64,
    pub interest_amount_cents: i64,
}

impl UpdateLoanPaymentCmd {
    #[must_use]
    pub fn new(
        audit_api_call_uuid: impl Into<String>,
        loan_payment_uuid: impl Into<String>,
        date: NaiveDate,
        principal_amount_cents: i64,
        interest_amount_cents: i64,
    ) -> Self {
        Self {
            audit_api_call_uuid: audit_api_call_uuid.into(),
            loan_payment_uuid: loan_payment_uuid.into(),
            date,
            principal_amount_cents,
            interest_amount_cents,
        }
    }
}

/// Register attachment metadata against an expense.
#[derive(Clone, Debug)]
pub struct CreateAttachmentCmd {
    pub audit_api_call_uuid: String,
    pub expense_uuid: String,
    pub name: String,
}

impl CreateAttachmentCmd {
    #[must_use]
    pub fn new(
        audit_api_call_uuid: impl Into<String>,
        expense_uuid: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            audit_api_call_uuid: audit_api_call_uuid.into(),
            expense_uuid: expense_uuid.into(),
            name: name.into(),
        }
    }
}

/// Rename an attachment.
#[derive(Clone, Debug)]
pub struct UpdateAttachmentCmd {
    pub audit_api_call_uuid: String,
    pub attachment_uuid: String,
    pub name: String,
}

impl UpdateAttachmentCmd {
    #[must_use]
    pub fn new(
        audit_api_call_uuid: impl Into<String>,
        attachment_uuid: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            audit_api_call_uuid: audit_api_call_uuid.into(),
            attachment_uuid: attachment_uuid.into(),
            name: name.into(),
        }
    }
}
