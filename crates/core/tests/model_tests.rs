use budget_tracker_core::errors::CoreError;
use budget_tracker_core::models::entry::{Entry, EntryKind};
use budget_tracker_core::models::ledger::{Ledger, LedgerRow};
use budget_tracker_core::models::month::MonthKey;
use budget_tracker_core::models::settings::Settings;
use budget_tracker_core::models::summary::Summary;
use budget_tracker_core::storage::encryption::KdfParams;
use chrono::NaiveDate;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  EntryKind
// ═══════════════════════════════════════════════════════════════════

mod entry_kind {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(EntryKind::Income.to_string(), "Income");
        assert_eq!(EntryKind::Expense.to_string(), "Expense");
    }

    #[test]
    fn parse_canonical_labels() {
        assert_eq!("Income".parse::<EntryKind>().unwrap(), EntryKind::Income);
        assert_eq!("Expense".parse::<EntryKind>().unwrap(), EntryKind::Expense);
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(" expense ".parse::<EntryKind>().unwrap(), EntryKind::Expense);
        assert_eq!("INCOME".parse::<EntryKind>().unwrap(), EntryKind::Income);
    }

    #[test]
    fn parse_rejects_other_values() {
        for bad in ["", "Transfer", "Incomes", "-"] {
            assert!(
                matches!(bad.parse::<EntryKind>(), Err(CoreError::ValidationError(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn income_orders_before_expense() {
        assert!(EntryKind::Income < EntryKind::Expense);
    }

    #[test]
    fn serde_roundtrip_json() {
        for kind in [EntryKind::Income, EntryKind::Expense] {
            let json = serde_json::to_string(&kind).unwrap();
            let back: EntryKind = serde_json::from_str(&json).unwrap();
            assert_eq!(kind, back);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Entry
// ═══════════════════════════════════════════════════════════════════

mod entry {
    use super::*;

    #[test]
    fn constructors_set_kind() {
        let i = Entry::income("alice", d(2024, 1, 5), "salary", 1000.0);
        let e = Entry::expense("alice", d(2024, 1, 10), "rent", 400.0);
        assert!(i.is_income() && !i.is_expense());
        assert!(e.is_expense() && !e.is_income());
        assert_eq!(e.owner, "alice");
        assert_eq!(e.description, "rent");
        assert_eq!(e.amount, 400.0);
    }

    #[test]
    fn ids_are_unique() {
        let a = Entry::income("alice", d(2024, 1, 5), "", 1.0);
        let b = Entry::income("alice", d(2024, 1, 5), "", 1.0);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn description_may_be_empty() {
        let e = Entry::expense("bob", d(2024, 3, 1), "", 0.0);
        assert!(e.description.is_empty());
        assert_eq!(e.amount, 0.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  MonthKey
// ═══════════════════════════════════════════════════════════════════

mod month_key {
    use super::*;

    #[test]
    fn from_date_and_display() {
        let key = MonthKey::from_date(d(2024, 1, 31));
        assert_eq!(key.to_string(), "2024-01");
        assert_eq!(MonthKey::from(d(987, 11, 2)).to_string(), "0987-11");
    }

    #[test]
    fn parse_roundtrips_display() {
        let key: MonthKey = "2024-02".parse().unwrap();
        assert_eq!(key, MonthKey::new(2024, 2).unwrap());
        assert_eq!(key.to_string(), "2024-02");
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in ["2024", "2024-1", "2024-13", "2024-00", "24-01", "abcd-ef", "2024/01", ""] {
            assert!(
                matches!(bad.parse::<MonthKey>(), Err(CoreError::InvalidMonthKey(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn new_rejects_out_of_range_month() {
        assert!(MonthKey::new(2024, 0).is_err());
        assert!(MonthKey::new(2024, 13).is_err());
        assert!(MonthKey::new(2024, 12).is_ok());
    }

    #[test]
    fn ordering_is_chronological() {
        let mut keys = vec![
            MonthKey::new(2024, 2).unwrap(),
            MonthKey::new(2023, 12).unwrap(),
            MonthKey::new(2024, 1).unwrap(),
        ];
        keys.sort();
        let labels: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        assert_eq!(labels, ["2023-12", "2024-01", "2024-02"]);
    }

    #[test]
    fn contains_matches_only_that_month() {
        let jan = MonthKey::new(2024, 1).unwrap();
        assert!(jan.contains(d(2024, 1, 1)));
        assert!(jan.contains(d(2024, 1, 31)));
        assert!(!jan.contains(d(2024, 2, 1)));
        assert!(!jan.contains(d(2023, 1, 15)));
    }

    #[test]
    fn first_day() {
        let key = MonthKey::new(2024, 2).unwrap();
        assert_eq!(key.first_day(), Some(d(2024, 2, 1)));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Summary
// ═══════════════════════════════════════════════════════════════════

mod summary {
    use super::*;

    #[test]
    fn profit_is_income_minus_expense() {
        let s = Summary::new(1000.0, 400.0);
        assert_eq!(s.profit, 600.0);
        let loss = Summary::new(0.0, 400.0);
        assert_eq!(loss.profit, -400.0);
    }

    #[test]
    fn default_is_zero() {
        let s = Summary::default();
        assert!(s.is_zero());
        assert_eq!(s.profit, 0.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Settings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.currency_symbol, "₹");
        assert_eq!(s.decimal_places, 2);
        assert_eq!(s.credential_kdf, KdfParams::default());
    }

    #[test]
    fn format_thousands_and_decimals() {
        let s = Settings::default();
        assert_eq!(s.format_amount(1000.0), "₹1,000.00");
        assert_eq!(s.format_amount(1234567.891), "₹1,234,567.89");
        assert_eq!(s.format_amount(999.0), "₹999.00");
        assert_eq!(s.format_amount(0.0), "₹0.00");
    }

    #[test]
    fn format_negative() {
        let s = Settings::default();
        assert_eq!(s.format_amount(-1234.5), "-₹1,234.50");
        assert_eq!(s.format_amount(-400.0), "-₹400.00");
    }

    #[test]
    fn format_negative_rounding_to_zero_has_no_sign() {
        let s = Settings::default();
        assert_eq!(s.format_amount(-0.001), "₹0.00");
    }

    #[test]
    fn format_custom_symbol_and_no_decimals() {
        let s = Settings {
            currency_symbol: "$".into(),
            decimal_places: 0,
            ..Settings::default()
        };
        assert_eq!(s.format_amount(1234.4), "$1,234");
        assert_eq!(s.format_amount(12.0), "$12");
    }

    #[test]
    fn serde_roundtrip_json() {
        let s = Settings::default();
        let json = serde_json::to_string(&s).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  LedgerRow / Ledger
// ═══════════════════════════════════════════════════════════════════

mod ledger_row {
    use super::*;

    #[test]
    fn new_stores_canonical_text() {
        let row = LedgerRow::new("alice", d(2024, 1, 5), EntryKind::Income, "salary", 1000.0);
        assert_eq!(row.date, "2024-01-05");
        assert_eq!(row.kind, "Income");
    }

    #[test]
    fn parse_roundtrip() {
        let row = LedgerRow::new("alice", d(2024, 2, 29), EntryKind::Expense, "rent", 400.0);
        let entry = row.parse().unwrap();
        assert_eq!(entry.id, row.id);
        assert_eq!(entry.owner, "alice");
        assert_eq!(entry.date, d(2024, 2, 29));
        assert_eq!(entry.kind, EntryKind::Expense);
        assert_eq!(entry.description, "rent");
        assert_eq!(entry.amount, 400.0);
    }

    #[test]
    fn parse_rejects_bad_date() {
        for bad in ["2024-02-30", "05/01/2024", "", "2024-1-5x", "1000.0"] {
            let mut row = LedgerRow::new("alice", d(2024, 1, 1), EntryKind::Income, "", 1.0);
            row.date = bad.to_string();
            match row.parse() {
                Err(CoreError::MalformedDate { value, .. }) => assert_eq!(value, bad),
                other => panic!("expected MalformedDate for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn parse_rejects_bad_kind() {
        let mut row = LedgerRow::new("alice", d(2024, 1, 1), EntryKind::Income, "", 1.0);
        row.kind = "Transfer".into();
        assert!(matches!(row.parse(), Err(CoreError::MalformedKind { .. })));
    }

    #[test]
    fn parse_rejects_negative_or_non_finite_amount() {
        for bad in [-0.01, -400.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let row = LedgerRow::new("alice", d(2024, 1, 5), EntryKind::Expense, "", bad);
            match row.parse() {
                Err(e @ CoreError::MalformedAmount { .. }) => assert!(e.is_malformed_input()),
                other => panic!("expected MalformedAmount for {bad}, got {other:?}"),
            }
        }
    }

    #[test]
    fn parse_accepts_zero_amount() {
        let row = LedgerRow::new("alice", d(2024, 1, 5), EntryKind::Income, "", 0.0);
        assert_eq!(row.parse().unwrap().amount, 0.0);
    }

    #[test]
    fn rows_for_filters_by_owner() {
        let mut ledger = Ledger::new();
        ledger.rows.push(LedgerRow::new("alice", d(2024, 1, 1), EntryKind::Income, "", 1.0));
        ledger.rows.push(LedgerRow::new("bob", d(2024, 1, 1), EntryKind::Income, "", 2.0));
        ledger.rows.push(LedgerRow::new("alice", d(2024, 1, 2), EntryKind::Expense, "", 3.0));
        let amounts: Vec<f64> = ledger.rows_for("alice").map(|r| r.amount).collect();
        assert_eq!(amounts, [1.0, 3.0]);
        assert_eq!(ledger.rows_for("carol").count(), 0);
    }
}
