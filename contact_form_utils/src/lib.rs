mod macros;

/// The version string reported by the CLI, e.g. `0.0.0`.
pub const fn contact_form_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub trait Apply {
    /// Applies the function `f` with a mutable reference to `self`.
    fn with<X>(mut self, f: impl FnOnce(&mut Self) -> X) -> Self
    where
        Self: Sized,
    {
        f(&mut self);
        self
    }
}

impl<T> Apply for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with() {
        let values = Vec::new().with(|v| v.push(1));
        assert_eq!(values, [1]);
    }

    #[test]
    fn assert_matches_guard() {
        let value: Result<u8, ()> = Ok(3);
        assert_matches!(value, Ok(x) if *x == 3);
    }

    #[test]
    #[should_panic(expected = "did not match pattern")]
    fn assert_matches_mismatch() {
        let value: Option<u8> = None;
        assert_matches!(value, Some(_));
    }
}
