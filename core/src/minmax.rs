use {crate::Ordered, std::cmp::Ordering};

/// Returns the minimal value in `x` and `ys`.
///
/// For floating-point values, `min` propagates NaNs: any NaN in `x` or `ys` forces the output to
/// be NaN. If `ys` is empty, `x` is returned unchanged.
pub fn min<T, I>(x: T, ys: I) -> T
where
    T: Ordered,
    I: IntoIterator<Item = T>,
{
    ys.into_iter().fold(x, min2)
}

/// Returns the maximal value in `x` and `ys`.
///
/// For floating-point values, `max` propagates NaNs: any NaN in `x` or `ys` forces the output to
/// be NaN. If `ys` is empty, `x` is returned unchanged.
pub fn max<T, I>(x: T, ys: I) -> T
where
    T: Ordered,
    I: IntoIterator<Item = T>,
{
    ys.into_iter().fold(x, max2)
}

/// Returns the minimal value in `x` and `ys`, using `cmp` to compare elements.
///
/// If there is more than one minimal element according to `cmp`, the first one encountered is
/// returned: a later element only displaces the current minimum when `cmp` orders it strictly
/// before it.
pub fn min_by<T, I, F>(mut cmp: F, x: T, ys: I) -> T
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut best = x;
    for y in ys {
        if cmp(&y, &best) == Ordering::Less {
            best = y;
        }
    }
    best
}

/// Returns the maximal value in `x` and `ys`, using `cmp` to compare elements.
///
/// If there is more than one maximal element according to `cmp`, the first one encountered is
/// returned: a later element only displaces the current maximum when `cmp` orders it strictly
/// after it.
pub fn max_by<T, I, F>(mut cmp: F, x: T, ys: I) -> T
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut best = x;
    for y in ys {
        if cmp(&y, &best) == Ordering::Greater {
            best = y;
        }
    }
    best
}

// Two-argument ordered minimum. A NaN accumulator is never displaced, and an incoming NaN wins
// because no comparison against it is true.
fn min2<T: Ordered>(x: T, y: T) -> T {
    if x < y || x.is_nan() {
        x
    } else {
        y
    }
}

fn max2<T: Ordered>(x: T, y: T) -> T {
    if x > y || x.is_nan() {
        x
    } else {
        y
    }
}
