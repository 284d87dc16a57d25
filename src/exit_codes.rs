//! Exit code constants for the agent-launcher CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable settings file)
//! - 2: No registered launcher can run the package

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an unreadable/unparseable settings file.
pub const USER_ERROR: i32 = 1;

/// No launcher variant supports the package's target runtime.
pub const NO_LAUNCHER: i32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, NO_LAUNCHER];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
