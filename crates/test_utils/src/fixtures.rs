//! Pre-built Test Fixtures
//!
//! Ready-to-use lease terms, records and labels. The terms fixtures are
//! fixed so ledger expectations can be written by hand; the record fixtures
//! use generated names and addresses.

use std::sync::Mutex;

use chrono::NaiveDate;
use fake::faker::address::en::{BuildingNumber, CityName, StreetName, ZipCode};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::i18n::month_labels;
use core_kernel::FlatTranslator;
use domain_rental::{
    InMemoryRentalStore, PriceSchedule, Property, PropertyKind, Rental, RentalTerms, Tenant,
};
use domain_receipt::{Notice, Notifier};

static ENGLISH: Lazy<FlatTranslator> = Lazy::new(|| FlatTranslator::builtin("en").unwrap_or_default());

/// Fixture for month labels
pub struct LabelFixtures;

impl LabelFixtures {
    /// English month names, January first
    pub fn english() -> [String; 12] {
        month_labels(&*ENGLISH)
    }

    /// The shared English translator
    pub fn translator() -> FlatTranslator {
        ENGLISH.clone()
    }
}

/// Fixture for lease terms
pub struct TermsFixtures;

impl TermsFixtures {
    pub fn rent() -> Decimal {
        dec!(800)
    }

    pub fn charges() -> Decimal {
        dec!(50)
    }

    /// Lease starting 01/06/2024, rent 800 and charges 50 from the start
    pub fn june_2024() -> RentalTerms {
        Self::starting(2024, 6)
    }

    /// Lease starting 01/01/2024, rent 800 and charges 50 from the start
    pub fn january_2024() -> RentalTerms {
        Self::starting(2024, 1)
    }

    /// Lease starting on the first of `month`, rent 800 and charges 50
    pub fn starting(year: i32, month: u32) -> RentalTerms {
        let from = date(year, month, 1);
        RentalTerms::new(format!("01/{:02}/{}", month, year))
            .with_rent(PriceSchedule::starting(from, Self::rent()))
            .with_charges(PriceSchedule::starting(from, Self::charges()))
    }

    /// January 2024 lease whose rent rises to 850 on 01/09/2024
    pub fn with_rent_increase() -> RentalTerms {
        let from = date(2024, 1, 1);
        RentalTerms::new("01/01/2024")
            .with_rent(PriceSchedule::starting(from, Self::rent()).with_change(date(2024, 9, 1), dec!(850)))
            .with_charges(PriceSchedule::starting(from, Self::charges()))
    }
}

/// Fixture for rental records
pub struct RecordFixtures;

impl RecordFixtures {
    pub fn property() -> Property {
        let street: String = StreetName().fake();
        let number: String = BuildingNumber().fake();
        let postal_code: String = ZipCode().fake();
        let city: String = CityName().fake();
        Property::new(format!("{} flat", city), format!("{} {}", number, street), PropertyKind::Apartment)
            .with_city(postal_code, city)
            .with_surface(dec!(54.5))
    }

    pub fn tenant() -> Tenant {
        let first_name: String = FirstName().fake();
        let last_name: String = LastName().fake();
        let email: String = SafeEmail().fake();
        Tenant::new(first_name, last_name).with_email(email)
    }

    /// A property, a tenant and a June 2024 rental binding them
    pub fn rental_set() -> (Property, Tenant, Rental) {
        let property = Self::property();
        let tenant = Self::tenant();
        let rental = Rental::new(property.id, tenant.id, TermsFixtures::june_2024()).with_deposit(dec!(800));
        (property, tenant, rental)
    }

    /// An in-memory store holding one [`rental_set`](Self::rental_set)
    pub async fn seeded_store() -> (InMemoryRentalStore, Rental) {
        let (property, tenant, rental) = Self::rental_set();
        let store = InMemoryRentalStore::seeded(vec![property], vec![tenant], vec![rental.clone()]).await;
        (store, rental)
    }
}

/// Notifier that keeps every notice it receives
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().map(|n| n.clone()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.notices().is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }
}

/// Shorthand for a calendar date known to be valid
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
