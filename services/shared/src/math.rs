//! Small aggregation helpers shared by the analysis code

use std::iter::Sum;

/// Larger of two values; `b` wins ties
pub fn max<T: Ord>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// Smaller of two values; `b` wins ties
pub fn min<T: Ord>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// Sum of all values; zero for an empty slice
pub fn sum<T>(values: &[T]) -> T
where
    T: Copy + Sum<T>,
{
    values.iter().copied().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max() {
        let cases: [(&str, i64, i64, i64); 4] = [
            ("positive numbers", 5, 3, 5),
            ("negative numbers", -5, -3, -3),
            ("equal numbers", 5, 5, 5),
            ("zero and positive", 0, 5, 5),
        ];

        for (name, a, b, want) in cases {
            assert_eq!(max(a, b), want, "{}", name);
        }
    }

    #[test]
    fn test_min() {
        let cases: [(&str, i64, i64, i64); 4] = [
            ("positive numbers", 5, 3, 3),
            ("negative numbers", -5, -3, -5),
            ("equal numbers", 5, 5, 5),
            ("zero and positive", 0, 5, 0),
        ];

        for (name, a, b, want) in cases {
            assert_eq!(min(a, b), want, "{}", name);
        }
    }

    #[test]
    fn test_sum() {
        let cases: [(&str, &[i64], i64); 5] = [
            ("empty slice", &[], 0),
            ("single number", &[5], 5),
            ("multiple numbers", &[1, 2, 3, 4, 5], 15),
            ("negative numbers", &[-1, -2, -3], -6),
            ("mixed numbers", &[-5, 10, -3, 8], 10),
        ];

        for (name, values, want) in cases {
            assert_eq!(sum(values), want, "{}", name);
        }
    }

    #[test]
    fn test_unsigned_counts() {
        let heads: [u64; 3] = [24, 51, 77];
        assert_eq!(sum(&heads), 152);
        assert_eq!(max(heads[0], heads[2]), 77);
    }
}
