use super::FuzzyEq;

/// Trait representing a real number (e.g. 1.1, -3.5, etc.) that can be fuzzy compared and ordered.
///
/// The constant methods cover the values the geometry functions reach for
/// repeatedly: small integer weights and the degree-domain constants used by
/// the angle conventions.
pub trait Real:
    num_traits::real::Real + FuzzyEq + std::default::Default + std::fmt::Debug + 'static
{
    #[inline]
    fn half() -> Self {
        Self::one() / Self::two()
    }

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline]
    fn six() -> Self {
        Self::from(6.0).unwrap()
    }

    #[inline]
    fn ten() -> Self {
        Self::from(10.0).unwrap()
    }

    #[inline]
    fn ninety() -> Self {
        Self::from(90.0).unwrap()
    }

    #[inline]
    fn one_eighty() -> Self {
        Self::from(180.0).unwrap()
    }

    #[inline]
    fn three_sixty() -> Self {
        Self::from(360.0).unwrap()
    }
}

impl Real for f32 {
    #[inline]
    fn two() -> Self {
        2.0f32
    }

    #[inline]
    fn six() -> Self {
        6.0f32
    }

    #[inline]
    fn ten() -> Self {
        10.0f32
    }

    #[inline]
    fn ninety() -> Self {
        90.0f32
    }

    #[inline]
    fn one_eighty() -> Self {
        180.0f32
    }

    #[inline]
    fn three_sixty() -> Self {
        360.0f32
    }
}

impl Real for f64 {
    #[inline]
    fn two() -> Self {
        2.0f64
    }

    #[inline]
    fn six() -> Self {
        6.0f64
    }

    #[inline]
    fn ten() -> Self {
        10.0f64
    }

    #[inline]
    fn ninety() -> Self {
        90.0f64
    }

    #[inline]
    fn one_eighty() -> Self {
        180.0f64
    }

    #[inline]
    fn three_sixty() -> Self {
        360.0f64
    }
}
