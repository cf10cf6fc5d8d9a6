/// Checks that a numerical value is in the interval `[a,b]`, returning early with an
/// [`Error::InvalidArgument`](crate::error::Error::InvalidArgument) naming the offending expression if not
///
/// ### Example
/// ```ignore
/// let alpha = 2.0;
/// ensure_interval!(alpha, 0.0, 1.0);
/// ```
/// This returns an error with the message "invalid argument: \`alpha\` = 2 is outside the interval \[0, 1\]".
#[macro_export]
macro_rules! ensure_interval {
    ($var:expr, $a:expr, $b:expr) => {
        if !($var >= $a && $var <= $b) {
            return Err($crate::error::Error::InvalidArgument(format!(
                "`{}` = {} is outside the interval [{}, {}]",
                stringify!($var),
                $var,
                $a,
                $b,
            )));
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::error::{Error, Result};

    fn check(value: f32) -> Result<()> {
        ensure_interval!(value, 0.0, 1.0);
        Ok(())
    }

    #[test]
    fn ensure_interval_bounds_are_inclusive() {
        assert!(check(0.0).is_ok());
        assert!(check(1.0).is_ok());
        assert!(check(0.5).is_ok());
    }

    #[test]
    fn ensure_interval_rejects_outside_and_nan() {
        assert!(matches!(check(-0.1), Err(Error::InvalidArgument(_))));
        assert!(matches!(check(1.5), Err(Error::InvalidArgument(_))));
        assert!(check(f32::NAN).is_err());

        let Err(Error::InvalidArgument(msg)) = check(2.0) else {
            panic!("expected InvalidArgument");
        };
        assert!(msg.contains("`value`"), "message names the expression: {msg}");
    }
}
