/// A type whose values can be compared directly with `<` and `>`.
///
/// This is the capability required by [crate::min] and [crate::max]. Most implementations have a
/// total order and inherit the default [Ordered::is_nan], which is always false. Floating-point
/// implementations override it so that NaN values can be recognized and propagated.
pub trait Ordered: PartialOrd {
    /// Reports whether this value is NaN.
    ///
    /// NaN is the only value that compares unequal to itself, so the floating-point
    /// implementations test exactly that. For every other implementation this is always false.
    fn is_nan(&self) -> bool {
        false
    }
}

impl Ordered for i8 {}
impl Ordered for i16 {}
impl Ordered for i32 {}
impl Ordered for i64 {}
impl Ordered for i128 {}
impl Ordered for isize {}
impl Ordered for u8 {}
impl Ordered for u16 {}
impl Ordered for u32 {}
impl Ordered for u64 {}
impl Ordered for u128 {}
impl Ordered for usize {}
impl Ordered for char {}
impl Ordered for &str {}
impl Ordered for String {}

impl Ordered for f32 {
    fn is_nan(&self) -> bool {
        *self != *self
    }
}

impl Ordered for f64 {
    fn is_nan(&self) -> bool {
        *self != *self
    }
}
