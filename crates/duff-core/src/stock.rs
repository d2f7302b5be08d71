//! Paired carbon/nitrogen stocks and the per-patch [`LitterStore`].

use crate::LitterPool;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Sub, SubAssign};

/// A carbon/nitrogen pair, the element vector of one litter pool.
///
/// Depending on context this holds a density (mass per unit area) or an
/// absolute mass; multiplying a density by a patch area yields the mass
/// form used for transfer arithmetic, and dividing converts back. All
/// arithmetic is component-wise — carbon and nitrogen never mix.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementStock {
    /// Carbon component.
    pub carbon: f64,
    /// Nitrogen component.
    pub nitrogen: f64,
}

impl ElementStock {
    /// The zero stock.
    pub const ZERO: ElementStock = ElementStock {
        carbon: 0.0,
        nitrogen: 0.0,
    };

    /// Construct from carbon and nitrogen components.
    pub fn new(carbon: f64, nitrogen: f64) -> Self {
        Self { carbon, nitrogen }
    }

    /// `true` if both components are finite (neither NaN nor infinite).
    pub fn is_finite(&self) -> bool {
        self.carbon.is_finite() && self.nitrogen.is_finite()
    }

    /// `true` if both components strictly exceed the corresponding
    /// component of `other`.
    pub fn both_above(&self, other: &ElementStock) -> bool {
        self.carbon > other.carbon && self.nitrogen > other.nitrogen
    }

    /// `true` if both components are strictly below the corresponding
    /// component of `other`.
    pub fn both_below(&self, other: &ElementStock) -> bool {
        self.carbon < other.carbon && self.nitrogen < other.nitrogen
    }

    /// `true` if both components are at or above the corresponding
    /// component of `other`.
    pub fn both_at_or_above(&self, other: &ElementStock) -> bool {
        self.carbon >= other.carbon && self.nitrogen >= other.nitrogen
    }

    /// `true` if both components are strictly positive.
    pub fn both_positive(&self) -> bool {
        self.carbon > 0.0 && self.nitrogen > 0.0
    }
}

impl Add for ElementStock {
    type Output = ElementStock;

    fn add(self, rhs: ElementStock) -> ElementStock {
        ElementStock::new(self.carbon + rhs.carbon, self.nitrogen + rhs.nitrogen)
    }
}

impl AddAssign for ElementStock {
    fn add_assign(&mut self, rhs: ElementStock) {
        self.carbon += rhs.carbon;
        self.nitrogen += rhs.nitrogen;
    }
}

impl Sub for ElementStock {
    type Output = ElementStock;

    fn sub(self, rhs: ElementStock) -> ElementStock {
        ElementStock::new(self.carbon - rhs.carbon, self.nitrogen - rhs.nitrogen)
    }
}

impl SubAssign for ElementStock {
    fn sub_assign(&mut self, rhs: ElementStock) {
        self.carbon -= rhs.carbon;
        self.nitrogen -= rhs.nitrogen;
    }
}

impl Mul<f64> for ElementStock {
    type Output = ElementStock;

    fn mul(self, rhs: f64) -> ElementStock {
        ElementStock::new(self.carbon * rhs, self.nitrogen * rhs)
    }
}

impl Div<f64> for ElementStock {
    type Output = ElementStock;

    fn div(self, rhs: f64) -> ElementStock {
        ElementStock::new(self.carbon / rhs, self.nitrogen / rhs)
    }
}

impl fmt::Display for ElementStock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C {:.6} / N {:.6}", self.carbon, self.nitrogen)
    }
}

/// Per-patch litter state: one [`ElementStock`] density per pool.
///
/// Indexed by [`LitterPool`]. Densities are non-negative by invariant;
/// the redistribution pass never drives a pool negative, and validated
/// construction (in the terrain crate) rejects negative initial values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LitterStore([ElementStock; 4]);

impl LitterStore {
    /// A store with all pools empty.
    pub const EMPTY: LitterStore = LitterStore([ElementStock::ZERO; 4]);

    /// Construct from per-pool densities in [`LitterPool::ALL`] order.
    pub fn new(pools: [ElementStock; 4]) -> Self {
        Self(pools)
    }

    /// Iterate over `(pool, density)` pairs in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (LitterPool, ElementStock)> + '_ {
        LitterPool::ALL.into_iter().map(move |p| (p, self.0[p.index()]))
    }

    /// Sum of all pool densities, per element.
    pub fn total(&self) -> ElementStock {
        self.0
            .iter()
            .fold(ElementStock::ZERO, |acc, &s| acc + s)
    }
}

impl Index<LitterPool> for LitterStore {
    type Output = ElementStock;

    fn index(&self, pool: LitterPool) -> &ElementStock {
        &self.0[pool.index()]
    }
}

impl IndexMut<LitterPool> for LitterStore {
    fn index_mut(&mut self, pool: LitterPool) -> &mut ElementStock {
        &mut self.0[pool.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_stock() -> impl Strategy<Value = ElementStock> {
        (-1e6f64..1e6, -1e6f64..1e6).prop_map(|(c, n)| ElementStock::new(c, n))
    }

    proptest! {
        #[test]
        fn add_commutative(a in arb_stock(), b in arb_stock()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn add_sub_roundtrip(a in arb_stock(), b in arb_stock()) {
            let back = (a + b) - b;
            prop_assert!((back.carbon - a.carbon).abs() <= 1e-6);
            prop_assert!((back.nitrogen - a.nitrogen).abs() <= 1e-6);
        }

        #[test]
        fn mul_div_roundtrip(a in arb_stock(), k in 1e-3f64..1e3) {
            let back = (a * k) / k;
            prop_assert!((back.carbon - a.carbon).abs() <= 1e-6 * a.carbon.abs().max(1.0));
            prop_assert!((back.nitrogen - a.nitrogen).abs() <= 1e-6 * a.nitrogen.abs().max(1.0));
        }

        #[test]
        fn zero_is_additive_identity(a in arb_stock()) {
            prop_assert_eq!(a + ElementStock::ZERO, a);
        }
    }

    #[test]
    fn comparisons_are_componentwise() {
        let lo = ElementStock::new(1.0, 1.0);
        let hi = ElementStock::new(2.0, 2.0);
        let mixed = ElementStock::new(2.0, 0.5);

        assert!(hi.both_above(&lo));
        assert!(!mixed.both_above(&lo));
        assert!(lo.both_below(&hi));
        assert!(!mixed.both_below(&hi));
        assert!(hi.both_at_or_above(&hi));
        assert!(hi.both_positive());
        assert!(!ElementStock::ZERO.both_positive());
    }

    #[test]
    fn non_finite_components_detected() {
        assert!(ElementStock::new(1.0, 2.0).is_finite());
        assert!(!ElementStock::new(f64::NAN, 2.0).is_finite());
        assert!(!ElementStock::new(1.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn store_indexes_by_pool() {
        let mut store = LitterStore::EMPTY;
        store[LitterPool::Lignin] = ElementStock::new(4.0, 0.4);
        store[LitterPool::Labile] = ElementStock::new(1.0, 0.1);

        assert_eq!(store[LitterPool::Lignin], ElementStock::new(4.0, 0.4));
        assert_eq!(store[LitterPool::Labile], ElementStock::new(1.0, 0.1));
        assert_eq!(store[LitterPool::ShieldedCellulose], ElementStock::ZERO);
    }

    #[test]
    fn store_total_sums_all_pools() {
        let store = LitterStore::new([
            ElementStock::new(1.0, 0.1),
            ElementStock::new(2.0, 0.2),
            ElementStock::new(3.0, 0.3),
            ElementStock::new(4.0, 0.4),
        ]);
        let total = store.total();
        assert!((total.carbon - 10.0).abs() < 1e-12);
        assert!((total.nitrogen - 1.0).abs() < 1e-12);
    }

    #[test]
    fn store_iter_follows_pool_order() {
        let store = LitterStore::new([
            ElementStock::new(1.0, 0.0),
            ElementStock::new(2.0, 0.0),
            ElementStock::new(3.0, 0.0),
            ElementStock::new(4.0, 0.0),
        ]);
        let carbons: Vec<f64> = store.iter().map(|(_, s)| s.carbon).collect();
        assert_eq!(carbons, vec![1.0, 2.0, 3.0, 4.0]);
    }
}
