use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
/// Error codes for the jazz token contract. Common errors are codes that match up with the built-in
/// token contract's error reporting. Jazz token specific errors start at 1400.
pub enum JazzTokenError {
    // Common Errors
    AlreadyInitialized = 3,

    InsufficientAllowance = 9,
    InsufficientBalance = 10,
    Overflow = 12,

    // Jazz Token
    UnauthorizedMint = 1400,
    UnauthorizedBurn = 1401,
    UnauthorizedSetRole = 1402,
    NullAddress = 1403,
}

impl JazzTokenError {
    /// The revert reason shown to a user when an operation is rejected
    pub fn message(&self) -> &'static str {
        match self {
            JazzTokenError::AlreadyInitialized => "The token is already initialized.",
            JazzTokenError::InsufficientAllowance => {
                "You are not approved to transfer these doinks."
            }
            JazzTokenError::InsufficientBalance => "Your balance is too low.",
            JazzTokenError::Overflow => "The total supply would overflow.",
            JazzTokenError::UnauthorizedMint => "Only an admin may create tokens.",
            JazzTokenError::UnauthorizedBurn => "Only an admin may destroy tokens.",
            JazzTokenError::UnauthorizedSetRole => "Only an admin may set roles.",
            JazzTokenError::NullAddress => "The null address cannot hold doinks.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            JazzTokenError::InsufficientBalance.message(),
            "Your balance is too low."
        );
        assert_eq!(
            JazzTokenError::InsufficientAllowance.message(),
            "You are not approved to transfer these doinks."
        );
        assert_eq!(
            JazzTokenError::UnauthorizedMint.message(),
            "Only an admin may create tokens."
        );
        assert_eq!(
            JazzTokenError::UnauthorizedBurn.message(),
            "Only an admin may destroy tokens."
        );
        assert_eq!(
            JazzTokenError::UnauthorizedSetRole.message(),
            "Only an admin may set roles."
        );
    }

}
