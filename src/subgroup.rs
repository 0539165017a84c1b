//! Multiplicative subgroup exploration and generator discovery.
//!
//! The multiplicative group of GF(p^n) is cyclic of order p^n - 1. This
//! module walks the cyclic subgroup generated by an element, tests whether
//! an element generates the full group, and searches for generators by
//! uniform random sampling.

use std::collections::HashSet;

use rand::Rng;

use crate::element::Element;
use crate::error::{Error, Result};
use crate::field::Field;

impl Element {
    /// The cyclic subgroup generated by this element under multiplication.
    ///
    /// Starting from the element itself, products are collected until the
    /// cycle closes back to the first power. The returned set is
    /// {e, e^2, ..., e^k} with e^k the identity, so its size equals the
    /// multiplicative order of e and it contains the identity as the final
    /// power. The zero element yields the singleton {0}.
    ///
    /// # Examples
    ///
    /// ```
    /// use evariste::{Element, Field};
    ///
    /// let gf7 = Field::prime(7).unwrap();
    /// let two = Element::from_integer(&gf7, 2);
    ///
    /// // 2 generates {2, 4, 1}: its multiplicative order is 3
    /// let subgroup = two.generated_subgroup();
    /// assert_eq!(subgroup.len(), 3);
    /// assert!(subgroup.contains(&Element::one(&gf7)));
    /// ```
    #[must_use]
    pub fn generated_subgroup(&self) -> HashSet<Element> {
        let mut subgroup = HashSet::new();
        subgroup.insert(self.clone());
        let mut acc = self.mul_unchecked(self);
        while acc != *self {
            subgroup.insert(acc.clone());
            acc = acc.mul_unchecked(self);
        }
        subgroup
    }

    /// Check whether this element generates the full multiplicative group,
    /// i.e. whether its multiplicative order is `field.size() - 1`.
    ///
    /// The zero element is never a generator.
    #[must_use]
    pub fn is_generator(&self) -> bool {
        !self.is_zero() && self.generated_subgroup().len() as u64 == self.field().size() - 1
    }

    /// Draw a uniformly random element of `field`.
    ///
    /// Each of the n coefficients is drawn uniformly and independently
    /// from [0, p-1]. The result is not guaranteed to be nonzero, let
    /// alone a generator.
    pub fn random<R: Rng + ?Sized>(field: &Field, rng: &mut R) -> Self {
        let p = field.characteristic();
        let coeffs: Vec<u64> = (0..field.dimension())
            .map(|_| rng.gen_range(0..p))
            .collect();
        Self::from_parts(
            crate::poly::Polynomial::from_reduced(coeffs, field.clone()),
            field.clone(),
        )
    }

    /// Sample random elements until one generates the full multiplicative
    /// group.
    ///
    /// `attempts` bounds the number of samples; `None` searches without
    /// bound, so callers wanting guaranteed termination must pass a
    /// budget (and may wrap unbounded calls in their own timeout).
    ///
    /// # Errors
    ///
    /// Returns [`Error::GeneratorNotFound`] once a bounded budget is
    /// exhausted.
    ///
    /// # Examples
    ///
    /// ```
    /// use evariste::{Element, Field};
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let gf7 = Field::prime(7).unwrap();
    /// let mut rng = StdRng::seed_from_u64(1);
    ///
    /// let g = Element::draw_generator(&gf7, Some(1000), &mut rng).unwrap();
    /// assert!(g.is_generator());
    /// ```
    pub fn draw_generator<R: Rng + ?Sized>(
        field: &Field,
        attempts: Option<u32>,
        rng: &mut R,
    ) -> Result<Self> {
        let mut tried = 0u32;
        loop {
            if let Some(limit) = attempts {
                if tried >= limit {
                    return Err(Error::GeneratorNotFound { attempts: limit });
                }
            }
            let candidate = Self::random(field, rng);
            tried = tried.saturating_add(1);
            if candidate.is_generator() {
                return Ok(candidate);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly::Polynomial;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn gf8() -> Field {
        let gf2 = Field::prime(2).unwrap();
        let irr = Polynomial::new(&[1, 1, 0, 1], &gf2);
        Field::extension(2, 3, irr).unwrap()
    }

    #[test]
    fn test_subgroup_of_identity() {
        let f = Field::prime(7).unwrap();
        let one = Element::one(&f);
        let subgroup = one.generated_subgroup();
        assert_eq!(subgroup.len(), 1);
        assert!(subgroup.contains(&one));
    }

    #[test]
    fn test_subgroup_of_zero() {
        let f = Field::prime(7).unwrap();
        let zero = Element::zero(&f);
        assert_eq!(zero.generated_subgroup().len(), 1);
        assert!(!zero.is_generator());
    }

    #[test]
    fn test_subgroup_contents_mod_7() {
        let f = Field::prime(7).unwrap();
        let two = Element::from_integer(&f, 2);
        let subgroup = two.generated_subgroup();

        let expected: HashSet<Element> = [2, 4, 1]
            .iter()
            .map(|&v| Element::from_integer(&f, v))
            .collect();
        assert_eq!(subgroup, expected);
    }

    #[test]
    fn test_subgroup_size_divides_group_order() {
        let f = Field::prime(7).unwrap();
        for e in f.units() {
            let order = e.generated_subgroup().len() as u64;
            assert_eq!(6 % order, 0, "order {order} of {e:?}");
        }

        let g = gf8();
        for e in g.units() {
            let order = e.generated_subgroup().len() as u64;
            assert_eq!(7 % order, 0, "order {order} of {e:?}");
        }
    }

    #[test]
    fn test_generator_count_gf8() {
        // |GF(8)*| = 7 is prime, so every non-identity unit generates:
        // phi(7) = 6 of the 7 units
        let f = gf8();
        let generators = f.units().filter(Element::is_generator).count();
        assert_eq!(generators, 6);
    }

    #[test]
    fn test_generator_count_gf7() {
        // Z/6 has phi(6) = 2 generators: 3 and 5
        let f = Field::prime(7).unwrap();
        let generators: Vec<u64> = f
            .units()
            .filter(Element::is_generator)
            .map(|e| e.poly().coeffs()[0])
            .collect();
        assert_eq!(generators, vec![3, 5]);
    }

    #[test]
    fn test_generator_in_gf2() {
        // GF(2)* is trivial: 1 is its own generator, zero never is
        let f = Field::prime(2).unwrap();
        assert!(Element::one(&f).is_generator());
        assert!(!Element::zero(&f).is_generator());
    }

    #[test]
    fn test_full_cycle_of_generator() {
        let f = gf8();
        let x = f.element(2);
        let subgroup = x.generated_subgroup();
        assert_eq!(subgroup.len(), 7);
        for e in f.units() {
            assert!(subgroup.contains(&e), "missing {e:?}");
        }
    }

    #[test]
    fn test_random_element_in_range() {
        let f = gf8();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let e = Element::random(&f, &mut rng);
            assert!(e.poly().coeff_count() <= 3);
            assert!(e.poly().coeffs().iter().all(|&c| c < 2));
        }

        let g = Field::prime(13).unwrap();
        for _ in 0..50 {
            let e = Element::random(&g, &mut rng);
            assert!(e.poly().is_const());
            assert!(e.poly().coeffs()[0] < 13);
        }
    }

    #[test]
    fn test_draw_generator() {
        let f = gf8();
        let mut rng = StdRng::seed_from_u64(7);
        let g = Element::draw_generator(&f, Some(1000), &mut rng).unwrap();
        assert!(g.is_generator());

        let gf7 = Field::prime(7).unwrap();
        let g = Element::draw_generator(&gf7, Some(1000), &mut rng).unwrap();
        let v = g.poly().coeffs()[0];
        assert!(v == 3 || v == 5);
    }

    #[test]
    fn test_draw_generator_budget_exhausted() {
        let f = gf8();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(
            Element::draw_generator(&f, Some(0), &mut rng),
            Err(Error::GeneratorNotFound { attempts: 0 })
        ));
    }
}
