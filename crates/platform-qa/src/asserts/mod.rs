//! List assertions for UI and API results.
//!
//! Every check takes the sequence by reference and never reorders it. A
//! failed check is an [`AssertError`](crate::error::AssertError) carrying the
//! expected and actual sequences.

pub mod collation;
pub mod ordering;

pub use collation::{Collation, CodePointCollation, LocaleCollator, DEFAULT_COLLATION_LOCALE};
pub use ordering::{
    assert_list_size, check_collated_ascending, check_collated_descending,
    check_cyrillic_ascending, check_cyrillic_descending, check_date_ascending,
    check_date_descending, check_natural_ascending, check_natural_descending, verify,
    verify_with_config, Direction, OrderingMode,
};
