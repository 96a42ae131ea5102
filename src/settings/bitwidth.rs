//! Computation of the number of bits a setting occupies in an encoded
//! settings string.
//!
//! The results must stay stable across versions. Previously encoded settings
//! strings can only be decoded if every setting keeps its width.

use super::{ChoiceSet, ValueType};

/// An explicit numeric range of an integer setting. Both ends are inclusive.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NumericRange {
    /// The smallest allowed value.
    pub min: i64,
    /// The largest allowed value.
    pub max: i64,
    /// The distance between two selectable values.
    pub step: i64,
}

impl NumericRange {
    /// Creates a range with a step of 1.
    #[inline]
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max, step: 1 }
    }

    /// Creates a range with the given step.
    #[inline]
    pub const fn with_step(min: i64, max: i64, step: i64) -> Self {
        Self { min, max, step }
    }

    /// Returns the number of integers between `min` and `max`, inclusive,
    /// regardless of the step. An inverted range is empty. The full `i64`
    /// range holds 2^64 integers, which is why this is a `u128`.
    #[inline]
    pub fn span(&self) -> u128 {
        if self.max < self.min {
            0
        } else {
            u128::from(self.max.abs_diff(self.min)) + 1
        }
    }

    /// Returns the number of bits needed to encode any integer of the range.
    #[inline]
    pub fn bits(&self) -> u32 {
        match u64::try_from(self.span()) {
            Ok(span) => ceil_log2(span),
            Err(_) => u64::BITS,
        }
    }

    /// Returns an iterator over the selectable values in ascending order.
    ///
    /// Only positive steps select anything. A step of 0 or less yields no
    /// values, so a stepped widget with such a step ends up without choices.
    pub fn values(&self) -> impl Iterator<Item = i64> {
        let Self { min, max, step } = *self;
        usize::try_from(step)
            .ok()
            .filter(|&step| step > 0)
            .into_iter()
            .flat_map(move |step| (min..=max).step_by(step))
    }
}

/// The number of values a list setting reserves in addition to its choices:
/// one to terminate the list of added options and one to terminate the list
/// of removed options.
pub const LIST_TERMINATORS: usize = 2;

/// Returns `ceil(log2(n))`, the number of bits needed to distinguish `n`
/// values. Both 0 and 1 values need no bits at all.
#[inline]
pub fn ceil_log2(n: u64) -> u32 {
    if n <= 1 {
        0
    } else {
        u64::BITS - (n - 1).leading_zeros()
    }
}

/// Computes the bitwidth of a setting from its value type, choices and
/// explicit range.
///
/// A range only counts if there are no choices; it then costs
/// `ceil(log2(max - min + 1))` bits. Otherwise the choices are counted, plus
/// [`LIST_TERMINATORS`] for list settings. Settings with neither are free-form
/// and are not encoded.
///
/// Whether the setting is shared at all is up to the caller: settings that
/// aren't shared always have a bitwidth of 0.
pub fn compute_bitwidth(
    value_type: ValueType,
    choices: &ChoiceSet,
    range: Option<NumericRange>,
) -> u32 {
    match range {
        Some(range) if choices.is_empty() => range.bits(),
        _ if !choices.is_empty() => {
            let mut count = choices.len();
            if value_type == ValueType::List {
                count += LIST_TERMINATORS;
            }
            ceil_log2(count as u64)
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn float_ceil_log2(n: u64) -> u32 {
        (n as f64).log2().ceil() as u32
    }

    #[test]
    fn ceil_log2_small_values() {
        let expected = [0, 0, 1, 2, 2, 3, 3, 3, 3, 4];
        for (n, bits) in expected.into_iter().enumerate() {
            assert_eq!(ceil_log2(n as u64), bits, "n = {n}");
        }
        assert_eq!(ceil_log2(u64::MAX), 64);
    }

    #[test]
    fn range_without_choices() {
        let bits = compute_bitwidth(ValueType::Integer, &ChoiceSet::empty(), Some(NumericRange::new(0, 7)));
        assert_eq!(bits, 3);
        let bits = compute_bitwidth(ValueType::Integer, &ChoiceSet::empty(), Some(NumericRange::new(-4, 4)));
        assert_eq!(bits, 4);
        let bits = compute_bitwidth(ValueType::Integer, &ChoiceSet::empty(), Some(NumericRange::new(5, 2)));
        assert_eq!(bits, 0);
    }

    #[test]
    fn choices_take_precedence_over_range() {
        let choices = ChoiceSet::from_keys([0, 2, 4]);
        let bits = compute_bitwidth(ValueType::Integer, &choices, Some(NumericRange::with_step(0, 4, 2)));
        assert_eq!(bits, 2);
    }

    #[test]
    fn list_reserves_terminators() {
        let choices = ChoiceSet::from_keys(["a", "b", "c", "d", "e"]);
        assert_eq!(compute_bitwidth(ValueType::List, &choices, None), 3);
        assert_eq!(compute_bitwidth(ValueType::String, &choices, None), 3);
        let six = ChoiceSet::from_keys(["a", "b", "c", "d", "e", "f"]);
        assert_eq!(compute_bitwidth(ValueType::List, &six, None), 3);
        let seven = ChoiceSet::from_keys(["a", "b", "c", "d", "e", "f", "g"]);
        assert_eq!(compute_bitwidth(ValueType::List, &seven, None), 4);
    }

    #[test]
    fn single_choice_is_free() {
        let choices = ChoiceSet::from_keys(["only"]);
        assert_eq!(compute_bitwidth(ValueType::String, &choices, None), 0);
        assert_eq!(compute_bitwidth(ValueType::String, &ChoiceSet::empty(), None), 0);
    }

    #[test]
    fn stepped_values() {
        let values: Vec<i64> = NumericRange::with_step(0, 10, 5).values().collect();
        assert_eq!(values, [0, 5, 10]);
    }

    #[test]
    fn non_positive_steps_select_nothing() {
        assert_eq!(NumericRange::with_step(0, 10, 0).values().count(), 0);
        assert_eq!(NumericRange::with_step(0, 10, -2).values().count(), 0);
        assert_eq!(NumericRange::with_step(i64::MIN, 0, 0).values().count(), 0);
    }

    #[test]
    fn full_i64_range() {
        let range = NumericRange::new(i64::MIN, i64::MAX);
        assert_eq!(range.span(), 1 << 64);
        assert_eq!(range.bits(), 64);
        assert_eq!(compute_bitwidth(ValueType::Integer, &ChoiceSet::empty(), Some(range)), 64);
        assert_eq!(NumericRange::new(0, i64::MAX).bits(), 63);
    }

    proptest! {
        #[test]
        fn choice_count_formula(n in 1usize..300) {
            let choices = ChoiceSet::from_keys((0..n as i64).collect::<Vec<_>>());
            prop_assert_eq!(compute_bitwidth(ValueType::Integer, &choices, None), float_ceil_log2(n as u64));
            prop_assert_eq!(
                compute_bitwidth(ValueType::List, &choices, None),
                float_ceil_log2(n as u64 + 2)
            );
        }

        #[test]
        fn range_formula(min in -1000i64..1000, len in 1i64..5000) {
            let range = NumericRange::new(min, min + len - 1);
            prop_assert_eq!(
                compute_bitwidth(ValueType::Integer, &ChoiceSet::empty(), Some(range)),
                float_ceil_log2(len as u64)
            );
        }
    }
}
