use {crate::Ordered, std::cmp::Ordering};

/// Reports whether `x` sorts before `y`.
///
/// For floating-point values, a NaN is considered less than any non-NaN, and a NaN is not less
/// than another NaN.
pub fn less<T: Ordered>(x: &T, y: &T) -> bool {
    (x.is_nan() && !y.is_nan()) || x < y
}

/// Performs a total three-way comparison of `x` and `y`.
///
/// For floating-point values, a NaN is considered less than any non-NaN, and NaNs compare equal
/// to each other. On NaN-free inputs this agrees with the native `<`/`>` ordering.
pub fn compare<T: Ordered>(x: &T, y: &T) -> Ordering {
    let x_nan = x.is_nan();
    let y_nan = y.is_nan();
    if x_nan && y_nan {
        return Ordering::Equal;
    }
    if x_nan || x < y {
        return Ordering::Less;
    }
    if y_nan || x > y {
        return Ordering::Greater;
    }
    Ordering::Equal
}
