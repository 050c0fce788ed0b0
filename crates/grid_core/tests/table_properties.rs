//! End-to-end behaviour of interpolated tables and time grids.

use approx::assert_relative_eq;
use grid_core::market_data::tables::{
    DataTable, DataTableBasic, DataTableLinear, ScheduleMetaData, TableConvention,
};
use grid_core::market_data::{QueryError, TableError};
use grid_core::math::interpolators::BilinearInterpolator;
use grid_core::time_discretization::{TimeDiscretization, TimeDiscretizationFromArray};
use grid_core::types::Date;
use proptest::prelude::*;

fn reference_date() -> Date {
    Date::from_ymd(2025, 6, 30).unwrap()
}

fn linear(
    convention: TableConvention,
    maturities: &[i32],
    terminations: &[i32],
    values: &[f64],
) -> DataTableLinear {
    DataTableLinear::new(
        "properties",
        convention,
        reference_date(),
        ScheduleMetaData::default(),
        maturities,
        terminations,
        values,
    )
    .unwrap()
}

// ========================================
// Interpolation Laws
// ========================================

#[test]
fn test_bilinear_midpoint_law_on_unit_square() {
    let (v00, v01, v10, v11) = (0.1, 0.7, -0.3, 2.5);
    let row0 = [v00, v01];
    let row1 = [v10, v11];
    let surface =
        BilinearInterpolator::new(&[0.0, 1.0], &[0.0, 1.0], &[&row0[..], &row1[..]]).unwrap();
    assert_relative_eq!(
        surface.interpolate(0.5, 0.5).unwrap(),
        (v00 + v01 + v10 + v11) / 4.0,
        epsilon = 1e-15
    );
}

#[test]
fn test_bilinear_midpoint_law_through_table() {
    let (v00, v01, v10, v11) = (1.0, 2.0, 4.0, 8.0);
    let t = linear(
        TableConvention::Years,
        &[0, 0, 2, 2],
        &[0, 2, 0, 2],
        &[v00, v01, v10, v11],
    );
    assert_relative_eq!(
        t.value(1, 1).unwrap(),
        (v00 + v01 + v10 + v11) / 4.0,
        epsilon = 1e-15
    );
}

#[test]
fn test_single_maturity_slice_midpoint() {
    let (a, b, c) = (0.12, 0.18, 0.15);
    let t = linear(TableConvention::Months, &[6, 6, 6], &[10, 20, 40], &[a, b, c]);
    assert_relative_eq!(t.value(6, 15).unwrap(), (a + b) / 2.0, epsilon = 1e-15);
}

#[test]
fn test_irregular_grid_outside_shortcuts() {
    let maturities = [1, 1, 1, 2, 2, 2, 3];
    let terminations = [1, 2, 3, 1, 2, 3, 1];
    let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
    let t = linear(TableConvention::Years, &maturities, &terminations, &values);

    assert!(matches!(
        t.value(3, 2),
        Err(TableError::Query(QueryError::IrregularGrid { size: 7, .. }))
    ));
    assert!(matches!(
        t.value_continuous(2.6, 6.4),
        Err(TableError::Query(QueryError::IrregularGrid { .. }))
    ));
}

// ========================================
// Continuous Coordinates
// ========================================

#[test]
fn test_months_convention_rounding() {
    let t = linear(
        TableConvention::Months,
        &[12, 12, 24, 24],
        &[12, 24, 12, 24],
        &[0.1, 0.2, 0.3, 0.4],
    );
    assert_eq!(t.value_continuous(1.04, 2.00).unwrap(), 0.1);
}

#[test]
fn test_exact_before_interpolation_for_continuous_queries() {
    // (1y, 3y) is stored as maturity 1, tenor 2; the surface would also cover it
    let t = linear(
        TableConvention::Years,
        &[0, 0, 1, 2, 2, 1, 0, 1, 2],
        &[1, 4, 2, 1, 4, 1, 2, 4, 2],
        &[0.0, 3.0, 9.99, 2.0, 5.0, 1.0, 1.0, 4.0, 3.0],
    );
    assert_eq!(t.value_continuous(1.0, 3.0).unwrap(), 9.99);
    assert!(t.contains_entry_for_continuous(1.0, 3.0));
    assert!(!t.contains_entry_for_continuous(1.2, 3.0));
}

// ========================================
// Degenerate Tables
// ========================================

#[test]
fn test_degenerate_sizes() {
    let empty = DataTableLinear::empty(
        "empty",
        TableConvention::Weeks,
        reference_date(),
        ScheduleMetaData::default(),
    );
    assert!(empty.is_empty());
    assert!(empty.value(1, 1).is_err());

    let single = linear(TableConvention::Weeks, &[4], &[8], &[0.3]);
    assert_eq!(single.size(), 1);
    assert_eq!(single.value(4, 8).unwrap(), 0.3);
    assert!(single.value(4, 9).is_err());
    assert!(single.value(5, 8).is_err());
    assert!(single.value(5, 9).is_err());
}

// ========================================
// Time Grid Algebra
// ========================================

#[test]
fn test_search_sentinels() {
    let g = TimeDiscretizationFromArray::equidistant(0.5, 3, 0.5, 0.01).unwrap();
    assert_eq!(g.time_index_nearest_less_or_equal(0.0), -1);
    assert_eq!(
        g.time_index_nearest_greater_or_equal(10.0),
        g.number_of_times()
    );
}

#[test]
fn test_set_algebra_with_mixed_ticks() {
    let a = TimeDiscretizationFromArray::new(&[0.0, 1.0, 2.0], 1.0).unwrap();
    let b = TimeDiscretizationFromArray::new(&[0.5, 1.5], 0.5).unwrap();

    let union = a.union(&b);
    assert_eq!(union.tick_size(), 0.5);
    assert_eq!(a.intersect(&union), a);

    // Points of the finer grid move when rounded to tick 1: 0.5 -> 0, 1.5 -> 2
    let common = b.intersect(&a);
    assert_eq!(common.as_slice(), &[0.0, 2.0]);
    let restored = b.union(&common);
    assert_ne!(restored, b);
    assert_eq!(restored.number_of_times(), 4);
}

// ========================================
// Property-based Tests
// ========================================

fn grid_table_strategy() -> impl Strategy<Value = Vec<(i32, i32, f64)>> {
    prop::collection::btree_map((0i32..60, 0i32..120), -1.0f64..1.0, 1..50)
        .prop_map(|map| map.into_iter().map(|((m, t), v)| (m, t, v)).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_exact_round_trip(entries in grid_table_strategy()) {
        let maturities: Vec<i32> = entries.iter().map(|e| e.0).collect();
        let terminations: Vec<i32> = entries.iter().map(|e| e.1).collect();
        let values: Vec<f64> = entries.iter().map(|e| e.2).collect();

        let t = linear(TableConvention::Months, &maturities, &terminations, &values);
        for (m, term, v) in &entries {
            prop_assert_eq!(t.value(*m, *term).unwrap(), *v);
        }

        let materialised = DataTableLinear::from_table(t.base()).unwrap();
        prop_assert_eq!(materialised.base(), t.base());
    }

    #[test]
    fn test_regular_surface_stays_within_bounds(
        values in prop::collection::vec(-10.0f64..10.0, 9),
        m in -12i32..48,
        term in -12i32..72,
    ) {
        let maturities = [0, 0, 0, 12, 12, 12, 36, 36, 36];
        let terminations = [12, 24, 60, 12, 24, 60, 12, 24, 60];
        let t = linear(TableConvention::Months, &maturities, &terminations, &values);

        let v = t.value(m, term).unwrap();
        let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(v >= lo - 1e-12 && v <= hi + 1e-12);
    }
}

#[test]
fn test_basic_and_linear_agree_on_stored_points() {
    let basic = DataTableBasic::new(
        "agree",
        TableConvention::Days,
        reference_date(),
        ScheduleMetaData::default(),
        &[30, 30, 90],
        &[365, 730, 365],
        &[0.01, 0.02, 0.03],
    )
    .unwrap();
    let linear = DataTableLinear::from_table(&basic).unwrap();

    for &m in basic.maturities() {
        for term in basic.terminations_for_maturity(m) {
            assert_eq!(basic.value(m, term).unwrap(), linear.value(m, term).unwrap());
        }
    }
    assert_eq!(linear.maturities(), basic.maturities());
    assert_eq!(linear.terminations(), basic.terminations());
}
