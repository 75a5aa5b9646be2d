//! Attribute-level change tracking.
//!
//! Every mutation the engine performs is described by a [`ChangeSet`]: one
//! entry per attribute that actually changed value, plus any scheduled soft
//! deletes. The set is persisted by `Engine::track_changes` on the same
//! transaction as the business mutation, so the ledger and the mutation
//! commit or roll back together.
//!
//! Entities opt in by implementing [`Audited`], which declares the table
//! name, the primary key column, whether the model is soft-deletable, and an
//! explicit list of tracked attributes. Attribute values are compared and
//! stored in their stringified form, produced by [`AuditValue`].

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Deterministic string coercion for audited column values.
///
/// `None` stays `None` (SQL NULL), never the literal string "null". The
/// produced strings are what gets compared during diffing and what lands in
/// `audit_changes.old_value`/`new_value`, so the rules here must stay stable.
pub trait AuditValue {
    fn audit_value(&self) -> Option<String>;
}

impl AuditValue for i32 {
    fn audit_value(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl AuditValue for i64 {
    fn audit_value(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl AuditValue for str {
    fn audit_value(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl AuditValue for String {
    fn audit_value(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl AuditValue for NaiveDate {
    fn audit_value(&self) -> Option<String> {
        Some(self.format("%Y-%m-%d").to_string())
    }
}

impl AuditValue for DateTime<Utc> {
    fn audit_value(&self) -> Option<String> {
        Some(self.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

impl<T: AuditValue> AuditValue for Option<T> {
    fn audit_value(&self) -> Option<String> {
        self.as_ref().and_then(AuditValue::audit_value)
    }
}

/// Capability interface for entities whose mutations are recorded in the
/// audit ledger.
///
/// `attributes` is the explicit tracked-field list: domain columns only.
/// The primary key, `created_at`/`updated_at`, `deleted_at`, and credential
/// material are excluded; deletions are recorded separately through
/// [`ChangeSet::track_delete`].
pub trait Audited {
    /// Table name as stored in `audit_changes.table`.
    const TABLE: &'static str;
    /// Declared primary key column.
    const PRIMARY_KEY: &'static str = "uuid";
    /// Whether destroy means setting `deleted_at` rather than removing the
    /// row.
    const PARANOID: bool = true;

    /// Primary key value of this row.
    fn key(&self) -> String;

    /// Current `deleted_at`, for soft-delete attribution.
    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        None
    }

    /// Tracked attributes with their stringified current values.
    fn attributes(&self) -> Vec<(&'static str, Option<String>)>;
}

/// One attribute-level before/after delta.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeChange {
    pub table: &'static str,
    pub key: String,
    pub attribute: &'static str,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}

#[derive(Clone, Debug)]
pub(crate) struct PendingDelete {
    pub(crate) table: &'static str,
    pub(crate) primary_key: &'static str,
    pub(crate) key: String,
    pub(crate) deleted_at: DateTime<Utc>,
}

/// The set of attribute changes and soft deletes produced by one mutation.
///
/// Controllers fill a `ChangeSet` while they mutate and hand it to
/// `Engine::track_changes` together with the open transaction.
#[derive(Debug, Default)]
pub struct ChangeSet {
    entries: Vec<AttributeChange>,
    deletes: Vec<PendingDelete>,
}

impl ChangeSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.deletes.is_empty()
    }

    pub fn entries(&self) -> &[AttributeChange] {
        &self.entries
    }

    pub(crate) fn deletes(&self) -> &[PendingDelete] {
        &self.deletes
    }

    /// Record every tracked attribute of a newly created row, with
    /// `old_value = NULL`.
    pub fn track_new<M: Audited>(&mut self, model: &M) {
        let key = model.key();
        for (attribute, value) in model.attributes() {
            self.push(AttributeChange {
                table: M::TABLE,
                key: key.clone(),
                attribute,
                old_value: None,
                new_value: value,
            });
        }
    }

    /// Record only the attributes whose value differs between the last
    /// persisted state and the updated state.
    ///
    /// The diff is computed against `before` as loaded from storage, so
    /// setting an attribute and reverting it before the commit produces no
    /// entry.
    pub fn track_update<M: Audited>(&mut self, before: &M, after: &M) {
        let key = before.key();
        for ((attribute, old_value), (_, new_value)) in
            before.attributes().into_iter().zip(after.attributes())
        {
            if old_value == new_value {
                continue;
            }
            self.push(AttributeChange {
                table: M::TABLE,
                key: key.clone(),
                attribute,
                old_value,
                new_value,
            });
        }
    }

    /// Schedule a soft delete and record its `deleted_at` change.
    ///
    /// Only paranoid models are deleted through the audit path; for any
    /// other model this is a no-op returning `false` and the caller must
    /// delete manually (no audit entry is produced for such a delete).
    pub fn track_delete<M: Audited>(&mut self, before: &M, deleted_at: DateTime<Utc>) -> bool {
        if !M::PARANOID {
            return false;
        }
        let key = before.key();
        self.push(AttributeChange {
            table: M::TABLE,
            key: key.clone(),
            attribute: "deleted_at",
            old_value: before.deleted_at().audit_value(),
            new_value: deleted_at.audit_value(),
        });
        self.deletes.push(PendingDelete {
            table: M::TABLE,
            primary_key: M::PRIMARY_KEY,
            key,
            deleted_at,
        });
        true
    }

    /// At most one entry per `(table, key, attribute)`: a later entry
    /// replaces the earlier one.
    fn push(&mut self, change: AttributeChange) {
        if let Some(existing) = self.entries.iter_mut().find(|e| {
            e.table == change.table && e.key == change.key && e.attribute == change.attribute
        }) {
            *existing = change;
        } else {
            self.entries.push(change);
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    struct Sample {
        uuid: String,
        name: String,
        amount_cents: i64,
        note: Option<String>,
        deleted_at: Option<DateTime<Utc>>,
    }

    impl Audited for Sample {
        const TABLE: &'static str = "samples";

        fn key(&self) -> String {
            self.uuid.clone()
        }

        fn deleted_at(&self) -> Option<DateTime<Utc>> {
            self.deleted_at
        }

        fn attributes(&self) -> Vec<(&'static str, Option<String>)> {
            vec![
                ("name", self.name.audit_value()),
                ("amount_cents", self.amount_cents.audit_value()),
                ("note", self.note.audit_value()),
            ]
        }
    }

    struct Plain {
        uuid: String,
    }

    impl Audited for Plain {
        const TABLE: &'static str = "plains";
        const PARANOID: bool = false;

        fn key(&self) -> String {
            self.uuid.clone()
        }

        fn attributes(&self) -> Vec<(&'static str, Option<String>)> {
            Vec::new()
        }
    }

    fn sample() -> Sample {
        Sample {
            uuid: "a6c9e2a0-0000-4000-8000-000000000001".to_string(),
            name: "Groceries".to_string(),
            amount_cents: 1250,
            note: None,
            deleted_at: None,
        }
    }

    #[test]
    fn integer_values_use_decimal_form() {
        assert_eq!(42_i64.audit_value(), Some("42".to_string()));
        assert_eq!((-7_i32).audit_value(), Some("-7".to_string()));
    }

    #[test]
    fn date_values_use_iso_form() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(date.audit_value(), Some("2024-03-09".to_string()));
    }

    #[test]
    fn datetime_values_use_rfc3339_utc() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 12, 30, 0).unwrap();
        assert_eq!(at.audit_value(), Some("2024-03-09T12:30:00Z".to_string()));
    }

    #[test]
    fn none_stays_null_not_the_word_null() {
        let note: Option<String> = None;
        assert_eq!(note.audit_value(), None);
    }

    #[test]
    fn track_new_records_every_attribute_with_null_old_value() {
        let mut changes = ChangeSet::new();
        changes.track_new(&sample());

        assert_eq!(changes.entries().len(), 3);
        assert!(changes.entries().iter().all(|e| e.old_value.is_none()));
        let amount = changes
            .entries()
            .iter()
            .find(|e| e.attribute == "amount_cents")
            .unwrap();
        assert_eq!(amount.new_value, Some("1250".to_string()));
    }

    #[test]
    fn track_update_records_only_differing_attributes() {
        let before = sample();
        let mut after = sample();
        after.amount_cents = 1500;

        let mut changes = ChangeSet::new();
        changes.track_update(&before, &after);

        assert_eq!(changes.entries().len(), 1);
        let entry = &changes.entries()[0];
        assert_eq!(entry.attribute, "amount_cents");
        assert_eq!(entry.old_value, Some("1250".to_string()));
        assert_eq!(entry.new_value, Some("1500".to_string()));
    }

    #[test]
    fn set_then_revert_produces_no_entry() {
        let before = sample();
        let after = sample();

        let mut changes = ChangeSet::new();
        changes.track_update(&before, &after);
        assert!(changes.is_empty());
    }

    #[test]
    fn duplicate_attribute_keeps_the_latest_entry() {
        let before = sample();
        let mut mid = sample();
        mid.amount_cents = 1500;
        let mut last = sample();
        last.amount_cents = 2000;

        let mut changes = ChangeSet::new();
        changes.track_update(&before, &mid);
        changes.track_update(&before, &last);

        assert_eq!(changes.entries().len(), 1);
        assert_eq!(changes.entries()[0].new_value, Some("2000".to_string()));
    }

    #[test]
    fn track_delete_records_deleted_at_for_paranoid_models() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 12, 30, 0).unwrap();
        let mut changes = ChangeSet::new();
        assert!(changes.track_delete(&sample(), at));

        assert_eq!(changes.entries().len(), 1);
        let entry = &changes.entries()[0];
        assert_eq!(entry.attribute, "deleted_at");
        assert_eq!(entry.old_value, None);
        assert_eq!(entry.new_value, Some("2024-03-09T12:30:00Z".to_string()));
        assert_eq!(changes.deletes().len(), 1);
    }

    #[test]
    fn track_delete_skips_non_paranoid_models() {
        let plain = Plain {
            uuid: "a6c9e2a0-0000-4000-8000-000000000002".to_string(),
        };
        let mut changes = ChangeSet::new();
        assert!(!changes.track_delete(&plain, Utc::now()));
        assert!(changes.is_empty());
    }
}
