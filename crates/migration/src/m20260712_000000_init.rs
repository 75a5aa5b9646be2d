//! Initial schema migration - creates all tables from scratch.
//!
//! It creates the complete schema for Hearth:
//!
//! - `households`: the tenant boundary
//! - `users`: authentication and audit attribution
//! - `categories` / `subcategories`: expense classification
//! - `vendors`, `household_members`, `employers`: lookup entities
//! - `budgets`: monthly amounts per subcategory
//! - `expenses`, `incomes`: money movements
//! - `funds` / `deposits`: savings buckets with derived balances
//! - `loans` / `loan_payments`: debts with derived balances
//! - `attachments`: blob-storage metadata for expenses
//! - `audit_api_calls` / `audit_logs` / `audit_changes`: the append-only
//!   audit ledger
//!
//! Domain tables carry `uuid` text primary keys, `created_at`/`updated_at`
//! timestamps, and a nullable `deleted_at` for soft deletion. Duplicate
//! budgets are rejected by the controller, not by a unique constraint, so
//! soft-deleted rows never block a re-create.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
enum Households {
    Table,
    Uuid,
    Name,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Uuid,
    HouseholdUuid,
    Email,
    FirstName,
    LastName,
    Password,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Categories {
    Table,
    Uuid,
    HouseholdUuid,
    Name,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum Subcategories {
    Table,
    Uuid,
    CategoryUuid,
    Name,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum Vendors {
    Table,
    Uuid,
    HouseholdUuid,
    Name,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum HouseholdMembers {
    Table,
    Uuid,
    HouseholdUuid,
    Name,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum Employers {
    Table,
    Uuid,
    HouseholdUuid,
    Name,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum Budgets {
    Table,
    Uuid,
    SubcategoryUuid,
    Month,
    Year,
    AmountCents,
    Notes,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum Expenses {
    Table,
    Uuid,
    SubcategoryUuid,
    VendorUuid,
    HouseholdMemberUuid,
    FundUuid,
    Date,
    AmountCents,
    ReimbursedCents,
    Description,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum Incomes {
    Table,
    Uuid,
    HouseholdMemberUuid,
    EmployerUuid,
    Date,
    AmountCents,
    Description,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum Funds {
    Table,
    Uuid,
    HouseholdUuid,
    Name,
    BalanceCents,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum Deposits {
    Table,
    Uuid,
    FundUuid,
    Date,
    AmountCents,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum Loans {
    Table,
    Uuid,
    HouseholdUuid,
    Name,
    AmountCents,
    BalanceCents,
    ArchivedAt,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum LoanPayments {
    Table,
    Uuid,
    LoanUuid,
    Date,
    PrincipalAmountCents,
    InterestAmountCents,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum Attachments {
    Table,
    Uuid,
    EntityType,
    EntityUuid,
    Name,
    AwsBucket,
    AwsKey,
    AwsContentType,
    AwsContentLength,
    AwsEtag,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum AuditApiCalls {
    Table,
    Uuid,
    HttpMethod,
    Route,
    IpAddress,
    UserAgent,
    UserUuid,
    CreatedAt,
}

#[derive(Iden)]
enum AuditLogs {
    Table,
    Uuid,
    AuditApiCallUuid,
    CreatedAt,
}

#[derive(Iden)]
enum AuditChanges {
    Table,
    Uuid,
    AuditLogUuid,
    #[iden = "table"]
    TableName,
    Key,
    Attribute,
    OldValue,
    NewValue,
    CreatedAt,
}

// ─────────────────────────────────────────────────────────────────────────────
// Migration implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ───────────────────────────────────────────────────────────────────
        // 1. Households
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Households::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Households::Uuid)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Households::Name).string().not_null())
                    .col(
                        ColumnDef::new(Households::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Households::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Households::DeletedAt).timestamp())
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 2. Users
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Uuid)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::HouseholdUuid).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(ColumnDef::new(Users::FirstName).string().not_null())
                    .col(ColumnDef::new(Users::LastName).string().not_null())
                    .col(ColumnDef::new(Users::Password).string().not_null())
                    .col(ColumnDef::new(Users::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-users-household_uuid")
                            .from(Users::Table, Users::HouseholdUuid)
                            .to(Households::Table, Households::Uuid),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-users-email-unique")
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 3. Categories / Subcategories
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Categories::Uuid)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Categories::HouseholdUuid)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Categories::Name).string().not_null())
                    .col(
                        ColumnDef::new(Categories::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Categories::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Categories::DeletedAt).timestamp())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-categories-household_uuid")
                            .from(Categories::Table, Categories::HouseholdUuid)
                            .to(Households::Table, Households::Uuid),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Subcategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subcategories::Uuid)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Subcategories::CategoryUuid)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Subcategories::Name).string().not_null())
                    .col(
                        ColumnDef::new(Subcategories::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Subcategories::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Subcategories::DeletedAt).timestamp())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-subcategories-category_uuid")
                            .from(Subcategories::Table, Subcategories::CategoryUuid)
                            .to(Categories::Table, Categories::Uuid),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-subcategories-category_uuid")
                    .table(Subcategories::Table)
                    .col(Subcategories::CategoryUuid)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 4. Vendors / Household members / Employers
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Vendors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Vendors::Uuid)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Vendors::HouseholdUuid).string().not_null())
                    .col(ColumnDef::new(Vendors::Name).string().not_null())
                    .col(ColumnDef::new(Vendors::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Vendors::UpdatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Vendors::DeletedAt).timestamp())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-vendors-household_uuid")
                            .from(Vendors::Table, Vendors::HouseholdUuid)
                            .to(Households::Table, Households::Uuid),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(HouseholdMembers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HouseholdMembers::Uuid)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(HouseholdMembers::HouseholdUuid)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(HouseholdMembers::Name).string().not_null())
                    .col(
                        ColumnDef::new(HouseholdMembers::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HouseholdMembers::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(ColumnDef::new(HouseholdMembers::DeletedAt).timestamp())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-household_members-household_uuid")
                            .from(HouseholdMembers::Table, HouseholdMembers::HouseholdUuid)
                            .to(Households::Table, Households::Uuid),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Employers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employers::Uuid)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employers::HouseholdUuid).string().not_null())
                    .col(ColumnDef::new(Employers::Name).string().not_null())
                    .col(ColumnDef::new(Employers::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Employers::UpdatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Employers::DeletedAt).timestamp())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-employers-household_uuid")
                            .from(Employers::Table, Employers::HouseholdUuid)
                            .to(Households::Table, Households::Uuid),
                    )
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 5. Budgets
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Budgets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Budgets::Uuid)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Budgets::SubcategoryUuid)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Budgets::Month).integer().not_null())
                    .col(ColumnDef::new(Budgets::Year).integer().not_null())
                    .col(
                        ColumnDef::new(Budgets::AmountCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Budgets::Notes).string().not_null())
                    .col(ColumnDef::new(Budgets::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Budgets::UpdatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Budgets::DeletedAt).timestamp())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-budgets-subcategory_uuid")
                            .from(Budgets::Table, Budgets::SubcategoryUuid)
                            .to(Subcategories::Table, Subcategories::Uuid),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-budgets-subcategory_uuid-year-month")
                    .table(Budgets::Table)
                    .col(Budgets::SubcategoryUuid)
                    .col(Budgets::Year)
                    .col(Budgets::Month)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 6. Funds / Deposits
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Funds::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Funds::Uuid)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Funds::HouseholdUuid).string().not_null())
                    .col(ColumnDef::new(Funds::Name).string().not_null())
                    .col(
                        ColumnDef::new(Funds::BalanceCents)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Funds::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Funds::UpdatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Funds::DeletedAt).timestamp())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-funds-household_uuid")
                            .from(Funds::Table, Funds::HouseholdUuid)
                            .to(Households::Table, Households::Uuid),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Deposits::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Deposits::Uuid)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Deposits::FundUuid).string().not_null())
                    .col(ColumnDef::new(Deposits::Date).date().not_null())
                    .col(
                        ColumnDef::new(Deposits::AmountCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Deposits::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Deposits::UpdatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Deposits::DeletedAt).timestamp())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-deposits-fund_uuid")
                            .from(Deposits::Table, Deposits::FundUuid)
                            .to(Funds::Table, Funds::Uuid),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-deposits-fund_uuid")
                    .table(Deposits::Table)
                    .col(Deposits::FundUuid)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 7. Expenses / Incomes
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Expenses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Expenses::Uuid)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Expenses::SubcategoryUuid)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Expenses::VendorUuid).string().not_null())
                    .col(
                        ColumnDef::new(Expenses::HouseholdMemberUuid)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Expenses::FundUuid).string())
                    .col(ColumnDef::new(Expenses::Date).date().not_null())
                    .col(
                        ColumnDef::new(Expenses::AmountCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Expenses::ReimbursedCents)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Expenses::Description).string().not_null())
                    .col(ColumnDef::new(Expenses::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Expenses::UpdatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Expenses::DeletedAt).timestamp())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-expenses-subcategory_uuid")
                            .from(Expenses::Table, Expenses::SubcategoryUuid)
                            .to(Subcategories::Table, Subcategories::Uuid),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-expenses-vendor_uuid")
                            .from(Expenses::Table, Expenses::VendorUuid)
                            .to(Vendors::Table, Vendors::Uuid),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-expenses-household_member_uuid")
                            .from(Expenses::Table, Expenses::HouseholdMemberUuid)
                            .to(HouseholdMembers::Table, HouseholdMembers::Uuid),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-expenses-fund_uuid")
                            .from(Expenses::Table, Expenses::FundUuid)
                            .to(Funds::Table, Funds::Uuid),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-expenses-subcategory_uuid")
                    .table(Expenses::Table)
                    .col(Expenses::SubcategoryUuid)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-expenses-household_member_uuid")
                    .table(Expenses::Table)
                    .col(Expenses::HouseholdMemberUuid)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Incomes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Incomes::Uuid)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Incomes::HouseholdMemberUuid)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Incomes::EmployerUuid).string())
                    .col(ColumnDef::new(Incomes::Date).date().not_null())
                    .col(
                        ColumnDef::new(Incomes::AmountCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Incomes::Description).string().not_null())
                    .col(ColumnDef::new(Incomes::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Incomes::UpdatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Incomes::DeletedAt).timestamp())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-incomes-household_member_uuid")
                            .from(Incomes::Table, Incomes::HouseholdMemberUuid)
                            .to(HouseholdMembers::Table, HouseholdMembers::Uuid),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-incomes-employer_uuid")
                            .from(Incomes::Table, Incomes::EmployerUuid)
                            .to(Employers::Table, Employers::Uuid),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-incomes-household_member_uuid")
                    .table(Incomes::Table)
                    .col(Incomes::HouseholdMemberUuid)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 8. Loans / Loan payments
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Loans::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Loans::Uuid)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Loans::HouseholdUuid).string().not_null())
                    .col(ColumnDef::new(Loans::Name).string().not_null())
                    .col(
                        ColumnDef::new(Loans::AmountCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Loans::BalanceCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Loans::ArchivedAt).timestamp())
                    .col(ColumnDef::new(Loans::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Loans::UpdatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Loans::DeletedAt).timestamp())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-loans-household_uuid")
                            .from(Loans::Table, Loans::HouseholdUuid)
                            .to(Households::Table, Households::Uuid),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LoanPayments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LoanPayments::Uuid)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LoanPayments::LoanUuid).string().not_null())
                    .col(ColumnDef::new(LoanPayments::Date).date().not_null())
                    .col(
                        ColumnDef::new(LoanPayments::PrincipalAmountCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LoanPayments::InterestAmountCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LoanPayments::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LoanPayments::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(ColumnDef::new(LoanPayments::DeletedAt).timestamp())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-loan_payments-loan_uuid")
                            .from(LoanPayments::Table, LoanPayments::LoanUuid)
                            .to(Loans::Table, Loans::Uuid),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-loan_payments-loan_uuid")
                    .table(LoanPayments::Table)
                    .col(LoanPayments::LoanUuid)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 9. Attachments
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Attachments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Attachments::Uuid)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Attachments::EntityType).string().not_null())
                    .col(ColumnDef::new(Attachments::EntityUuid).string().not_null())
                    .col(ColumnDef::new(Attachments::Name).string().not_null())
                    .col(ColumnDef::new(Attachments::AwsBucket).string())
                    .col(ColumnDef::new(Attachments::AwsKey).string())
                    .col(ColumnDef::new(Attachments::AwsContentType).string())
                    .col(ColumnDef::new(Attachments::AwsContentLength).big_integer())
                    .col(ColumnDef::new(Attachments::AwsEtag).string())
                    .col(
                        ColumnDef::new(Attachments::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Attachments::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Attachments::DeletedAt).timestamp())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-attachments-entity")
                    .table(Attachments::Table)
                    .col(Attachments::EntityType)
                    .col(Attachments::EntityUuid)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 10. Audit ledger
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(AuditApiCalls::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AuditApiCalls::Uuid)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AuditApiCalls::HttpMethod)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AuditApiCalls::Route).string().not_null())
                    .col(ColumnDef::new(AuditApiCalls::IpAddress).string())
                    .col(ColumnDef::new(AuditApiCalls::UserAgent).string())
                    .col(ColumnDef::new(AuditApiCalls::UserUuid).string())
                    .col(
                        ColumnDef::new(AuditApiCalls::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-audit_api_calls-user_uuid")
                            .from(AuditApiCalls::Table, AuditApiCalls::UserUuid)
                            .to(Users::Table, Users::Uuid),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AuditLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AuditLogs::Uuid)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AuditLogs::AuditApiCallUuid)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AuditLogs::CreatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-audit_logs-audit_api_call_uuid")
                            .from(AuditLogs::Table, AuditLogs::AuditApiCallUuid)
                            .to(AuditApiCalls::Table, AuditApiCalls::Uuid),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-audit_logs-audit_api_call_uuid")
                    .table(AuditLogs::Table)
                    .col(AuditLogs::AuditApiCallUuid)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AuditChanges::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AuditChanges::Uuid)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AuditChanges::AuditLogUuid)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AuditChanges::TableName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AuditChanges::Key).string().not_null())
                    .col(ColumnDef::new(AuditChanges::Attribute).string().not_null())
                    .col(ColumnDef::new(AuditChanges::OldValue).string())
                    .col(ColumnDef::new(AuditChanges::NewValue).string())
                    .col(
                        ColumnDef::new(AuditChanges::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-audit_changes-audit_log_uuid")
                            .from(AuditChanges::Table, AuditChanges::AuditLogUuid)
                            .to(AuditLogs::Table, AuditLogs::Uuid),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-audit_changes-audit_log_uuid")
                    .table(AuditChanges::Table)
                    .col(AuditChanges::AuditLogUuid)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in reverse order of creation (respecting FK dependencies)
        manager
            .drop_table(Table::drop().table(AuditChanges::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AuditLogs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AuditApiCalls::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Attachments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LoanPayments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Loans::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Incomes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Expenses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Deposits::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Funds::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Budgets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Employers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(HouseholdMembers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Vendors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subcategories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Households::Table).to_owned())
            .await?;
        Ok(())
    }
}
