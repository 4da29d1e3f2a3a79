use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

/// Placeholder in fixture files replaced by the signature date.
const DATE_PLACEHOLDER: &str = "{{DATE}}";

pub fn load_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(format!("{}.html", name));

    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to load fixture '{}' from {:?}: {}", name, path, e))
}

/// The conforming "About AIX" page, signed on `date`.
pub fn about_aix_page(date: NaiveDate) -> String {
    load_fixture("about_aix").replace(DATE_PLACEHOLDER, &date.format("%Y.%m.%d").to_string())
}

/// The conforming page signed today.
pub fn about_aix_page_today() -> String {
    about_aix_page(chrono::Local::now().date_naive())
}

pub fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 30).unwrap()
}
