//! Household ownership guards.
//!
//! Every entity referenced by a mutation must resolve to the acting user's
//! household, directly or through its parent chain. A missing row and a row
//! owned by another household are indistinguishable to the caller: both
//! surface as `NotFound`.

use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, JoinType, QueryFilter, QuerySelect, RelationTrait,
};

use crate::{
    EngineError, ResultEngine, attachments, budgets, categories, deposits, employers, expenses,
    funds, household_members, households, incomes, loan_payments, loans, subcategories, vendors,
};

use super::Engine;

/// Generates a `require_*_in_household` guard for entities that carry
/// `household_uuid` directly.
macro_rules! impl_target_in_household {
    ($require_fn:ident, $module:ident, $err_msg:literal) => {
        pub(super) async fn $require_fn<C: ConnectionTrait>(
            &self,
            db: &C,
            household_uuid: &str,
            target_uuid: &str,
        ) -> ResultEngine<$module::Model> {
            $module::Entity::find_by_id(target_uuid.to_string())
                .filter($module::Column::HouseholdUuid.eq(household_uuid.to_string()))
                .filter($module::Column::DeletedAt.is_null())
                .one(db)
                .await?
                .ok_or_else(|| EngineError::NotFound($err_msg.to_string()))
        }
    };
}

impl Engine {
    impl_target_in_household!(require_category_in_household, categories, "Category not found");

    impl_target_in_household!(require_vendor_in_household, vendors, "Vendor not found");

    impl_target_in_household!(
        require_household_member_in_household,
        household_members,
        "Household member not found"
    );

    impl_target_in_household!(require_employer_in_household, employers, "Employer not found");

    impl_target_in_household!(require_fund_in_household, funds, "Fund not found");

    impl_target_in_household!(require_loan_in_household, loans, "Loan not found");

    pub(super) async fn require_household<C: ConnectionTrait>(
        &self,
        db: &C,
        household_uuid: &str,
    ) -> ResultEngine<households::Model> {
        households::Entity::find_by_id(household_uuid.to_string())
            .filter(households::Column::DeletedAt.is_null())
            .one(db)
            .await?
            .ok_or_else(|| EngineError::NotFound("Household not found".to_string()))
    }

    /// Subcategories reach the household through their parent category.
    ///
    /// The message deliberately says "Category": callers reference
    /// subcategories as categories.
    pub(super) async fn require_subcategory_in_household<C: ConnectionTrait>(
        &self,
        db: &C,
        household_uuid: &str,
        subcategory_uuid: &str,
    ) -> ResultEngine<subcategories::Model> {
        subcategories::Entity::find_by_id(subcategory_uuid.to_string())
            .filter(subcategories::Column::DeletedAt.is_null())
            .join(JoinType::InnerJoin, subcategories::Relation::Categories.def())
            .filter(categories::Column::HouseholdUuid.eq(household_uuid.to_string()))
            .filter(categories::Column::DeletedAt.is_null())
            .one(db)
            .await?
            .ok_or_else(|| EngineError::NotFound("Category not found".to_string()))
    }

    pub(super) async fn require_budget_in_household<C: ConnectionTrait>(
        &self,
        db: &C,
        household_uuid: &str,
        budget_uuid: &str,
    ) -> ResultEngine<budgets::Model> {
        budgets::Entity::find_by_id(budget_uuid.to_string())
            .filter(budgets::Column::DeletedAt.is_null())
            .join(JoinType::InnerJoin, budgets::Relation::Subcategories.def())
            .filter(subcategories::Column::DeletedAt.is_null())
            .join(JoinType::InnerJoin, subcategories::Relation::Categories.def())
            .filter(categories::Column::HouseholdUuid.eq(household_uuid.to_string()))
            .filter(categories::Column::DeletedAt.is_null())
            .one(db)
            .await?
            .ok_or_else(|| EngineError::NotFound("Budget not found".to_string()))
    }

    pub(super) async fn require_expense_in_household<C: ConnectionTrait>(
        &self,
        db: &C,
        household_uuid: &str,
        expense_uuid: &str,
    ) -> ResultEngine<expenses::Model> {
        expenses::Entity::find_by_id(expense_uuid.to_string())
            .filter(expenses::Column::DeletedAt.is_null())
            .join(
                JoinType::InnerJoin,
                expenses::Relation::HouseholdMembers.def(),
            )
            .filter(household_members::Column::HouseholdUuid.eq(household_uuid.to_string()))
            .filter(household_members::Column::DeletedAt.is_null())
            .one(db)
            .await?
            .ok_or_else(|| EngineError::NotFound("Expense not found".to_string()))
    }

    pub(super) async fn require_income_in_household<C: ConnectionTrait>(
        &self,
        db: &C,
        household_uuid: &str,
        income_uuid: &str,
    ) -> ResultEngine<incomes::Model> {
        incomes::Entity::find_by_id(income_uuid.to_string())
            .filter(incomes::Column::DeletedAt.is_null())
            .join(
                JoinType::InnerJoin,
                incomes::Relation::HouseholdMembers.def(),
            )
            .filter(household_members::Column::HouseholdUuid.eq(household_uuid.to_string()))
            .filter(household_members::Column::DeletedAt.is_null())
            .one(db)
            .await?
            .ok_or_else(|| EngineError::NotFound("Income not found".to_string()))
    }

    pub(super) async fn require_deposit_in_household<C: ConnectionTrait>(
        &self,
        db: &C,
        household_uuid: &str,
        deposit_uuid: &str,
    ) -> ResultEngine<deposits::Model> {
        deposits::Entity::find_by_id(deposit_uuid.to_string())
            .filter(deposits::Column::DeletedAt.is_null())
            .join(JoinType::InnerJoin, deposits::Relation::Funds.def())
            .filter(funds::Column::HouseholdUuid.eq(household_uuid.to_string()))
            .filter(funds::Column::DeletedAt.is_null())
            .one(db)
            .await?
            .ok_or_else(|| EngineError::NotFound("Deposit not found".to_string()))
    }

    pub(super) async fn require_loan_payment_in_household<C: ConnectionTrait>(
        &self,
        db: &C,
        household_uuid: &str,
        loan_payment_uuid: &str,
    ) -> ResultEngine<loan_payments::Model> {
        loan_payments::Entity::find_by_id(loan_payment_uuid.to_string())
            .filter(loan_payments::Column::DeletedAt.is_null())
            .join(JoinType::InnerJoin, loan_payments::Relation::Loans.def())
            .filter(loans::Column::HouseholdUuid.eq(household_uuid.to_string()))
            .filter(loans::Column::DeletedAt.is_null())
            .one(db)
            .await?
            .ok_or_else(|| EngineError::NotFound("Loan payment not found".to_string()))
    }

    /// Attachments reach the household through the expense they belong to.
    pub(super) async fn require_attachment_in_household<C: ConnectionTrait>(
        &self,
        db: &C,
        household_uuid: &str,
        attachment_uuid: &str,
    ) -> ResultEngine<attachments::Model> {
        let attachment = attachments::Entity::find_by_id(attachment_uuid.to_string())
            .filter(attachments::Column::DeletedAt.is_null())
            .one(db)
            .await?
            .ok_or_else(|| EngineError::NotFound("Attachment not found".to_string()))?;

        if attachment.entity_type != "expense" {
            return Err(EngineError::NotFound("Attachment not found".to_string()));
        }
        match self
            .require_expense_in_household(db, household_uuid, &attachment.entity_uuid)
            .await
        {
            Ok(_) => Ok(attachment),
            Err(EngineError::NotFound(_)) => {
                Err(EngineError::NotFound("Attachment not found".to_string()))
            }
            Err(err) => Err(err),
        }
    }
}
