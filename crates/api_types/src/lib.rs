use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub mod household {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct HouseholdUpdate {
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct HouseholdView {
        pub uuid: String,
        pub name: String,
        pub created_at: DateTime<Utc>,
    }
}

pub mod category {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryCreate {
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryUpdate {
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryView {
        pub uuid: String,
        pub name: String,
        pub created_at: DateTime<Utc>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct SubcategoryCreate {
        pub category_uuid: String,
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct SubcategoryUpdate {
        pub category_uuid: String,
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct SubcategoryView {
        pub uuid: String,
        pub category_uuid: String,
        pub name: String,
        pub created_at: DateTime<Utc>,
    }
}

pub mod vendor {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct VendorCreate {
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct VendorUpdate {
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct VendorView {
        pub uuid: String,
        pub name: String,
        pub created_at: DateTime<Utc>,
    }
}

pub mod household_member {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct HouseholdMemberCreate {
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct HouseholdMemberUpdate {
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct HouseholdMemberView {
        pub uuid: String,
        pub name: String,
        pub created_at: DateTime<Utc>,
    }
}

pub mod employer {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct EmployerCreate {
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct EmployerUpdate {
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct EmployerView {
        pub uuid: String,
        pub name: String,
        pub created_at: DateTime<Utc>,
    }
}

pub mod budget {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetCreate {
        pub subcategory_uuid: String,
        /// Zero-based month (0 = January).
        pub month: i32,
        pub year: i32,
        pub amount_cents: i64,
        pub notes: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetUpdate {
        pub subcategory_uuid: String,
        pub month: i32,
        pub year: i32,
        pub amount_cents: i64,
        pub notes: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetView {
        pub uuid: String,
        pub subcategory_uuid: String,
        pub month: i32,
        pub year: i32,
        pub amount_cents: i64,
        pub notes: String,
        pub created_at: DateTime<Utc>,
    }
}

pub mod expense {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseCreate {
        pub subcategory_uuid: String,
        pub vendor_uuid: String,
        pub household_member_uuid: String,
        pub fund_uuid: Option<String>,
        pub date: NaiveDate,
        pub amount_cents: i64,
        pub reimbursed_cents: Option<i64>,
        pub description: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseUpdate {
        pub subcategory_uuid: String,
        pub vendor_uuid: String,
        pub household_member_uuid: String,
        pub fund_uuid: Option<String>,
        pub date: NaiveDate,
        pub amount_cents: i64,
        pub reimbursed_cents: Option<i64>,
        pub description: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseView {
        pub uuid: String,
        pub subcategory_uuid: String,
        pub vendor_uuid: String,
        pub household_member_uuid: String,
        pub fund_uuid: Option<String>,
        pub date: NaiveDate,
        pub amount_cents: i64,
        pub reimbursed_cents: i64,
        pub description: String,
        pub created_at: DateTime<Utc>,
    }
}

pub mod income {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct IncomeCreate {
        pub household_member_uuid: String,
        pub employer_uuid: Option<String>,
        pub date: NaiveDate,
        pub amount_cents: i64,
        pub description: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct IncomeUpdate {
        pub household_member_uuid: String,
        pub employer_uuid: Option<String>,
        pub date: NaiveDate,
        pub amount_cents: i64,
        pub description: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct IncomeView {
        pub uuid: String,
        pub household_member_uuid: String,
        pub employer_uuid: Option<String>,
        pub date: NaiveDate,
        pub amount_cents: i64,
        pub description: String,
        pub created_at: DateTime<Utc>,
    }
}

pub mod fund {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct FundCreate {
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct FundUpdate {
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct FundView {
        pub uuid: String,
        pub name: String,
        pub balance_cents: i64,
        pub created_at: DateTime<Utc>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct DepositCreate {
        pub fund_uuid: String,
        pub date: NaiveDate,
        pub amount_cents: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct DepositUpdate {
        pub fund_uuid: String,
        pub date: NaiveDate,
        pub amount_cents: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct DepositView {
        pub uuid: String,
        pub fund_uuid: String,
        pub date: NaiveDate,
        pub amount_cents: i64,
        pub created_at: DateTime<Utc>,
    }
}

pub mod loan {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LoanCreate {
        pub name: String,
        pub amount_cents: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LoanUpdate {
        pub name: String,
        pub amount_cents: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LoanView {
        pub uuid: String,
        pub name: String,
        pub amount_cents: i64,
        pub balance_cents: i64,
        pub archived_at: Option<DateTime<Utc>>,
        pub created_at: DateTime<Utc>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LoanPaymentCreate {
        pub loan_uuid: String,
        pub date: NaiveDate,
        pub principal_amount_cents: i64,
        pub interest_amount_cents: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LoanPaymentUpdate {
        pub date: NaiveDate,
        pub principal_amount_cents: i64,
        pub interest_amount_cents: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LoanPaymentView {
        pub uuid: String,
        pub loan_uuid: String,
        pub date: NaiveDate,
        pub principal_amount_cents: i64,
        pub interest_amount_cents: i64,
        pub created_at: DateTime<Utc>,
    }
}

pub mod attachment {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct AttachmentCreate {
        pub expense_uuid: String,
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct AttachmentUpdate {
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct AttachmentView {
        pub uuid: String,
        pub entity_type: String,
        pub entity_uuid: String,
        pub name: String,
        pub created_at: DateTime<Utc>,
    }
}
