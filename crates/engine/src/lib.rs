pub use audit::{AttributeChange, AuditValue, Audited, ChangeSet};
pub use commands::{
    CreateAttachmentCmd, CreateBudgetCmd, CreateDepositCmd, CreateExpenseCmd, CreateIncomeCmd,
    CreateLoanCmd, CreateLoanPaymentCmd, UpdateAttachmentCmd, UpdateBudgetCmd, UpdateDepositCmd,
    UpdateExpenseCmd, UpdateIncomeCmd, UpdateLoanCmd, UpdateLoanPaymentCmd,
};
pub use error::EngineError;
pub use ops::{Engine, EngineBuilder};

mod audit;
mod commands;
mod error;
mod ops;
mod util;

pub mod attachments;
pub mod audit_api_calls;
pub mod audit_changes;
pub mod audit_logs;
pub mod budgets;
pub mod categories;
pub mod deposits;
pub mod employers;
pub mod expenses;
pub mod funds;
pub mod household_members;
pub mod households;
pub mod incomes;
pub mod loan_payments;
pub mod loans;
pub mod subcategories;
pub mod users;
pub mod vendors;

type ResultEngine<T> = Result<T, EngineError>;
