//! filename
//!
//! Date-stamped file name composition.
//!
//! # Features
//!
//! - Compose `subject_YYYYMMDD.ext` from free-text subject and extension
//! - Optional uppercased classification prefix
//! - Configurable component separator
//!
//! Names are assembled from an ordered component list (classification if
//! any, subject slug, date) joined by the separator, with the extension
//! appended last and no separator before it.

use chrono::{Local, NaiveDate};

use crate::slug::slugify;

/// Separator placed between file name components when none is given.
pub const DEFAULT_SEPARATOR: &str = "_";

/// Substituted for the subject when it slugs to the empty string.
const FALLBACK_SUBJECT: &str = "untitled";

/// Basic ISO-8601 date, 8 digits, no separators.
const DATE_FORMAT: &str = "%Y%m%d";

/// Compose a file name from a subject and extension, stamped with today's
/// date.
///
/// Equivalent to [`generate_filename_with`] with no classification and the
/// [`DEFAULT_SEPARATOR`]. Reads the system clock once per call.
///
/// # Example
///
/// ```
/// use casefile::filename::generate_filename;
///
/// let name = generate_filename("My Report", "pdf");
/// assert!(name.starts_with("my-report_"));
/// assert!(name.ends_with(".pdf"));
/// ```
pub fn generate_filename(subject: &str, ext: &str) -> String {
    generate_filename_with(subject, ext, "", DEFAULT_SEPARATOR)
}

/// Compose a file name with an optional classification prefix and a chosen
/// separator, stamped with today's date.
///
/// An empty `classification` means no prefix segment at all. A non-empty
/// one is slugged, uppercased, and placed ahead of the subject. That
/// emptiness check is on the raw string, not its slug, so a classification
/// of pure punctuation still claims a (empty) leading segment.
///
/// Reads the system clock once per call; each call reflects the date at
/// the moment of invocation.
///
/// # Example
///
/// ```
/// use casefile::filename::generate_filename_with;
///
/// let name = generate_filename_with("My Report", ".pdf", "internal", "_");
/// assert!(name.starts_with("INTERNAL_my-report_"));
/// assert!(name.ends_with(".pdf"));
/// ```
pub fn generate_filename_with(
    subject: &str,
    ext: &str,
    classification: &str,
    separator: &str,
) -> String {
    generate_filename_on(Local::now().date_naive(), subject, ext, classification, separator)
}

/// Compose a file name for an explicit date.
///
/// This is the full composition: [`generate_filename`] and
/// [`generate_filename_with`] delegate here after reading the clock.
/// Given the same date and inputs the output is fully deterministic,
/// which is what tests and batch jobs that pin a date want.
///
/// Rules applied, in order:
///
/// - Subject is slugged; an empty slug becomes `"untitled"`
/// - The date is formatted as `YYYYMMDD`
/// - A non-empty extension gains a leading dot unless it already has one;
///   an empty extension appends nothing (no trailing dot)
/// - A non-empty classification is slugged, uppercased, and prepended
///
/// # Example
///
/// ```
/// use casefile::filename::generate_filename_on;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
///
/// assert_eq!(
///     generate_filename_on(date, "My Report", "pdf", "internal", "_"),
///     "INTERNAL_my-report_20240309.pdf"
/// );
/// assert_eq!(
///     generate_filename_on(date, "", "txt", "", "_"),
///     "untitled_20240309.txt"
/// );
/// ```
pub fn generate_filename_on(
    date: NaiveDate,
    subject: &str,
    ext: &str,
    classification: &str,
    separator: &str,
) -> String {
    let stamp = date.format(DATE_FORMAT).to_string();

    let mut subject_slug = slugify(subject);
    if subject_slug.is_empty() {
        subject_slug = FALLBACK_SUBJECT.to_string();
    }

    let mut components = vec![subject_slug, stamp];

    // Checked against the raw label, not its slug: an all-punctuation
    // classification still inserts an empty leading segment.
    if !classification.is_empty() {
        components.insert(0, slugify(classification).to_uppercase());
    }

    let mut name = components.join(separator);
    name.push_str(&normalize_extension(ext));
    name
}

/// Ensure a non-empty extension carries exactly one leading dot.
fn normalize_extension(ext: &str) -> String {
    if ext.is_empty() || ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}
