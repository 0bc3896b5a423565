//! Project-level filters on top of the built-in toolchain rules.

use crate::catalog::names::{ALPAKA, BOOST, DEVELOP};
use crate::catalog::{CmpOp, Row};
use crate::filter::{FilterChain, RowFilter, Stage};

/// Framework releases after 0.8.0, and `develop`, need Boost 1.74.0 or
/// newer.
pub fn framework_boost_filter(row: &Row<'_>) -> bool {
    let recent_framework = row.check_version(ALPAKA, CmpOp::Gt, "0.8.0")
        || row.check_version(ALPAKA, CmpOp::Eq, DEVELOP);
    !(recent_framework && row.check_version(BOOST, CmpOp::Lt, "1.74.0"))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FrameworkBoostFilter;

impl RowFilter for FrameworkBoostFilter {
    fn name(&self) -> &str {
        "framework-boost"
    }

    fn accept(&self, row: &Row<'_>) -> bool {
        framework_boost_filter(row)
    }
}

/// [`FilterChain::standard`] plus [`FrameworkBoostFilter`] as post-filter.
pub fn reference_chain() -> FilterChain {
    FilterChain::standard().with_filter(Stage::Post, FrameworkBoostFilter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::testing::RowFixture;

    fn check(alpaka: Option<&str>, boost: Option<&str>) -> bool {
        RowFixture::new()
            .maybe(ALPAKA, alpaka.map(|v| (ALPAKA, v)))
            .maybe(BOOST, boost.map(|v| (BOOST, v)))
            .eval(framework_boost_filter)
    }

    #[test]
    fn test_old_boost_with_new_framework() {
        assert!(!check(Some("0.9.0"), Some("1.73.0")));
        assert!(!check(Some(DEVELOP), Some("1.73.0")));
        assert!(check(Some("0.9.0"), Some("1.74.0")));
        assert!(check(Some("0.8.0"), Some("1.73.0")));
    }

    #[test]
    fn test_partial_rows() {
        assert!(check(Some(DEVELOP), None));
        assert!(check(None, Some("1.70.0")));
    }

    #[test]
    fn test_reference_chain_order() {
        let chain = reference_chain();
        assert_eq!(chain.len(), 5);
        assert_eq!(chain.filter_names().last(), Some(&"framework-boost"));
        assert_eq!(chain.stages().last(), Some(&Stage::Post));
    }
}
