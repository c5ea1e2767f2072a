use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::asserts::collation::{Collation, LocaleCollator};
use crate::config::QaConfig;
use crate::dates::{parse_list_date, LIST_DATE_PATTERN};
use crate::error::AssertError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ascending => write!(f, "ascending"),
            Direction::Descending => write!(f, "descending"),
        }
    }
}

/// The comparison rule requested for a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingMode {
    NaturalAsc,
    NaturalDesc,
    CyrillicAsc,
    CyrillicDesc,
    DateAsc,
    DateDesc,
}

impl OrderingMode {
    pub const ALL: [OrderingMode; 6] = [
        OrderingMode::NaturalAsc,
        OrderingMode::NaturalDesc,
        OrderingMode::CyrillicAsc,
        OrderingMode::CyrillicDesc,
        OrderingMode::DateAsc,
        OrderingMode::DateDesc,
    ];

    pub fn direction(self) -> Direction {
        match self {
            OrderingMode::NaturalAsc | OrderingMode::CyrillicAsc | OrderingMode::DateAsc => {
                Direction::Ascending
            }
            OrderingMode::NaturalDesc | OrderingMode::CyrillicDesc | OrderingMode::DateDesc => {
                Direction::Descending
            }
        }
    }
}

impl fmt::Display for OrderingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = match self {
            OrderingMode::NaturalAsc | OrderingMode::NaturalDesc => "natural",
            OrderingMode::CyrillicAsc | OrderingMode::CyrillicDesc => "cyrillic",
            OrderingMode::DateAsc | OrderingMode::DateDesc => "date",
        };
        write!(f, "{} {}", rule, self.direction())
    }
}

/// Runs the check selected by `mode` against `seq`.
pub fn verify<S: AsRef<str>>(seq: &[S], mode: OrderingMode) -> Result<(), AssertError> {
    match mode {
        OrderingMode::NaturalAsc => check_natural_ascending(&as_strs(seq)),
        OrderingMode::NaturalDesc => check_natural_descending(&as_strs(seq)),
        OrderingMode::CyrillicAsc => check_cyrillic_ascending(seq),
        OrderingMode::CyrillicDesc => check_cyrillic_descending(seq),
        OrderingMode::DateAsc => check_date_ascending(seq),
        OrderingMode::DateDesc => check_date_descending(seq),
    }
}

/// Like [`verify`], but Cyrillic modes use the collator for the configured
/// `collation_locale`.
pub fn verify_with_config<S: AsRef<str>>(
    seq: &[S],
    mode: OrderingMode,
    config: &QaConfig,
) -> Result<(), AssertError> {
    match mode {
        OrderingMode::CyrillicAsc => {
            check_collated_ascending(seq, &LocaleCollator::from_config(config)?)
        }
        OrderingMode::CyrillicDesc => {
            check_collated_descending(seq, &LocaleCollator::from_config(config)?)
        }
        other => verify(seq, other),
    }
}

pub fn check_natural_ascending<T: Ord + ToString>(seq: &[T]) -> Result<(), AssertError> {
    check_order(seq, "natural", Direction::Ascending, T::cmp, T::to_string)
}

pub fn check_natural_descending<T: Ord + ToString>(seq: &[T]) -> Result<(), AssertError> {
    check_order(seq, "natural", Direction::Descending, T::cmp, T::to_string)
}

/// Checks ascending order under the Ukrainian Cyrillic collation.
pub fn check_cyrillic_ascending<S: AsRef<str>>(seq: &[S]) -> Result<(), AssertError> {
    let collator = LocaleCollator::ukrainian()?;
    check_collated_ascending(seq, &collator)
}

/// Checks descending order under the Ukrainian Cyrillic collation.
pub fn check_cyrillic_descending<S: AsRef<str>>(seq: &[S]) -> Result<(), AssertError> {
    let collator = LocaleCollator::ukrainian()?;
    check_collated_descending(seq, &collator)
}

pub fn check_collated_ascending<S: AsRef<str>>(
    seq: &[S],
    collation: &dyn Collation,
) -> Result<(), AssertError> {
    check_collated(seq, collation, Direction::Ascending)
}

pub fn check_collated_descending<S: AsRef<str>>(
    seq: &[S],
    collation: &dyn Collation,
) -> Result<(), AssertError> {
    check_collated(seq, collation, Direction::Descending)
}

fn check_collated<S: AsRef<str>>(
    seq: &[S],
    collation: &dyn Collation,
    direction: Direction,
) -> Result<(), AssertError> {
    check_order(
        &as_strs(seq),
        &collation.name(),
        direction,
        |a, b| collation.compare(a, b),
        |s| s.to_string(),
    )
}

/// Checks ascending order of `dd.MM.yyyy HH:mm` dates.
pub fn check_date_ascending<S: AsRef<str>>(seq: &[S]) -> Result<(), AssertError> {
    check_dates(seq, Direction::Ascending)
}

/// Checks descending order of `dd.MM.yyyy HH:mm` dates.
pub fn check_date_descending<S: AsRef<str>>(seq: &[S]) -> Result<(), AssertError> {
    check_dates(seq, Direction::Descending)
}

fn check_dates<S: AsRef<str>>(seq: &[S], direction: Direction) -> Result<(), AssertError> {
    let parsed = parse_dates(seq)?;
    check_order(
        &parsed,
        &format!("date {}", LIST_DATE_PATTERN),
        direction,
        |a, b| a.0.cmp(&b.0),
        |(_, raw)| raw.to_string(),
    )
}

fn parse_dates<S: AsRef<str>>(seq: &[S]) -> Result<Vec<(NaiveDateTime, &str)>, AssertError> {
    seq.iter()
        .enumerate()
        .map(|(index, value)| {
            let value = value.as_ref();
            parse_list_date(value)
                .map(|date| (date, value))
                .map_err(|e| AssertError::DateParse {
                    index,
                    value: value.to_string(),
                    reason: e.to_string(),
                })
        })
        .collect()
}

/// Asserts both lists hold the same number of elements.
pub fn assert_list_size<A, B>(expected: &[A], actual: &[B]) -> Result<(), AssertError> {
    if expected.len() != actual.len() {
        return Err(AssertError::SizeMismatch {
            expected: expected.len(),
            actual: actual.len(),
        });
    }
    Ok(())
}

fn as_strs<S: AsRef<str>>(seq: &[S]) -> Vec<&str> {
    seq.iter().map(AsRef::as_ref).collect()
}

/// Compares `seq` against a stably sorted copy of itself.
///
/// Elements that compare equal keep their relative order in the copy, so
/// duplicates never cause a mismatch in either direction.
fn check_order<T, C, R>(
    seq: &[T],
    rule: &str,
    direction: Direction,
    compare: C,
    render: R,
) -> Result<(), AssertError>
where
    C: Fn(&T, &T) -> Ordering,
    R: Fn(&T) -> String,
{
    let mut expected: Vec<&T> = seq.iter().collect();
    match direction {
        Direction::Ascending => expected.sort_by(|a, b| compare(*a, *b)),
        Direction::Descending => expected.sort_by(|a, b| compare(*b, *a)),
    }

    let mismatch = expected
        .iter()
        .zip(seq)
        .position(|(e, a)| compare(*e, a) != Ordering::Equal);

    match mismatch {
        None => {
            debug!(rule, %direction, len = seq.len(), "list ordering check passed");
            Ok(())
        }
        Some(index) => {
            warn!(rule, %direction, index, "list ordering check failed");
            Err(AssertError::OrderingMismatch {
                rule: rule.to_string(),
                direction,
                index,
                expected: expected.into_iter().map(&render).collect(),
                actual: seq.iter().map(&render).collect(),
            })
        }
    }
}
