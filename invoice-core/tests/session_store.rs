//! A session handing its store to the next session, the way a page reload
//! would, and the saved records flowing into a generated invoice.

use chrono::NaiveDate;
use invoice_core::{
    BankDetails, BusinessDetails, BusinessProfile, ClientDetails, GstInclusion, InvoiceDetails,
    InvoiceItem, InvoiceSession, MemoryStore, SessionError, StoreError, ValidationError,
};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn profile() -> BusinessProfile {
    BusinessProfile {
        business: BusinessDetails {
            name: "Kiwi Consulting Ltd".into(),
            gst_number: Some("123-456-789".into()),
            email: "accounts@kiwi.example".into(),
            phone: None,
            address: "1 Queen Street, Auckland".into(),
        },
        bank: BankDetails {
            bank_name: "ANZ".into(),
            account_name: "Kiwi Consulting Ltd".into(),
            account_number: "01-0123-0123456-00".into(),
        },
    }
}

fn client(name: &str) -> ClientDetails {
    ClientDetails {
        name: name.into(),
        address: "5 Lambton Quay, Wellington".into(),
        ..ClientDetails::default()
    }
}

#[test]
fn gst_preference_survives_reload() {
    let mut first = InvoiceSession::new(MemoryStore::new());
    assert_eq!(first.gst_inclusion(), GstInclusion::Included);

    assert_eq!(first.toggle_gst(), Ok(GstInclusion::Excluded));

    let second = InvoiceSession::new(first.into_store());
    assert_eq!(second.gst_inclusion(), GstInclusion::Excluded);
}

#[test]
fn reload_starts_with_fresh_items() {
    let mut first = InvoiceSession::new(MemoryStore::new());
    first.add_item(InvoiceItem::generic("Licence", dec!(1), dec!(500)));

    let second = InvoiceSession::new(first.into_store());

    assert_eq!(second.items().len(), 1);
    assert_eq!(second.totals().total, dec!(0));
}

#[test]
fn saved_records_are_reused_across_sessions() {
    let mut first = InvoiceSession::new(MemoryStore::new());
    first.save_profile(&profile()).unwrap();
    first.save_client(&client("Tui Holdings")).unwrap();
    first.save_client(&client("Kea Ltd")).unwrap();

    let second = InvoiceSession::new(first.into_store());

    assert_eq!(second.load_profile().unwrap(), Some(profile()));
    let names: Vec<String> = second
        .saved_clients()
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Tui Holdings", "Kea Ltd"]);
    assert_eq!(second.select_client("Kea Ltd").unwrap(), client("Kea Ltd"));
}

#[test]
fn invalid_records_are_not_saved() {
    let mut session = InvoiceSession::new(MemoryStore::new());

    let result = session.save_client(&ClientDetails::default());

    assert_eq!(
        result,
        Err(SessionError::Invalid(vec![
            ValidationError::Required("Client Name"),
            ValidationError::Required("Client Address"),
        ]))
    );
    assert_eq!(session.saved_clients().unwrap(), Vec::new());
}

#[test]
fn deleting_unknown_client_is_not_found() {
    let mut session = InvoiceSession::new(MemoryStore::new());

    assert!(matches!(
        session.delete_client("Nobody"),
        Err(StoreError::NotFound(_))
    ));
}

#[test]
fn saved_records_generate_an_invoice() {
    let mut session = InvoiceSession::new(MemoryStore::with_gst_preference(true));
    session.save_profile(&profile()).unwrap();
    session.save_client(&client("Tui Holdings")).unwrap();
    session.reset();
    if let Some(item) = session.items_mut().get_mut(0) {
        item.set_description("Monthly retainer");
        item.set_unit_price(dec!(100));
    }

    let saved_profile = session.load_profile().unwrap().unwrap_or_default();
    let saved_client = session.select_client("Tui Holdings").unwrap();
    let details = InvoiceDetails {
        number: "INV-2026-001".into(),
        date: NaiveDate::from_ymd_opt(2026, 1, 31),
        period_start: NaiveDate::from_ymd_opt(2026, 1, 1),
        period_end: NaiveDate::from_ymd_opt(2026, 1, 31),
        ..InvoiceDetails::default()
    };

    let document = session
        .generate(&saved_profile, &saved_client, &details)
        .unwrap();

    assert_eq!(document.totals.subtotal, dec!(100.00));
    assert_eq!(document.totals.gst, dec!(15.00));
    assert_eq!(document.totals.total, dec!(115.00));
    assert_eq!(document.due_date, NaiveDate::from_ymd_opt(2026, 3, 2));
    assert_eq!(
        document.period.as_deref(),
        Some("1 January 2026 to 31 January 2026")
    );
    assert_eq!(document.table.rows.len(), 1);
}

#[test]
fn reset_keeps_saved_records_and_gst_preference() {
    let mut session = InvoiceSession::new(MemoryStore::new());
    session.save_profile(&profile()).unwrap();
    session.set_gst_inclusion(GstInclusion::Excluded).unwrap();
    session.add_item(InvoiceItem::generic("Extra", dec!(2), dec!(10)));

    session.reset();

    assert_eq!(session.items().len(), 1);
    assert_eq!(session.gst_inclusion(), GstInclusion::Excluded);
    assert_eq!(session.load_profile().unwrap(), Some(profile()));
}
