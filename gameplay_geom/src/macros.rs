/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Macro used for implementing the point list macro. Used for extracting macro repetition count
/// for reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct a `Vec` of [Vector2](crate::core::math::Vector2) vertexes from a list of `(x, y)`
/// tuples.
///
/// # Examples
///
/// ```
/// # use gameplay_geom::points;
/// # use gameplay_geom::core::math::Vector2;
/// let square = points![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
/// assert_eq!(square.len(), 4);
/// assert_eq!(square[0], Vector2::new(0.0, 0.0));
/// assert_eq!(square[3], Vector2::new(0.0, 1.0));
/// ```
#[macro_export]
macro_rules! points {
    ($( $xy:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($xy) ())),*]);
            let mut pts = ::std::vec::Vec::with_capacity(size);
            $(
                pts.push($crate::core::math::Vector2::new($xy.0, $xy.1));
            )*
            pts
        }
    };
}
