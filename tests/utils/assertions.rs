/// Custom assertions for FactFund client results
use fact_fund::{Error, ErrorKind};

/// Assert a `try_*` client call failed with a specific contract error
#[macro_export]
macro_rules! assert_contract_error {
    ($result:expr, $expected_error:expr) => {
        match $result {
            Err(Ok(code)) => assert_eq!(code, $expected_error, "Contract error code mismatch"),
            Err(Err(invoke)) => panic!("Expected contract error, host failed with {:?}", invoke),
            Ok(_) => panic!("Expected contract error but succeeded"),
        }
    };
    ($result:expr, $expected_error:expr, $($msg:tt)*) => {
        match $result {
            Err(Ok(code)) => assert_eq!(code, $expected_error, $($msg)*),
            Err(Err(invoke)) => panic!("Expected contract error, host failed with {:?}", invoke),
            Ok(_) => panic!("Expected contract error but succeeded"),
        }
    };
}

/// Assert a `try_*` client call succeeded
#[macro_export]
macro_rules! assert_success {
    ($result:expr) => {
        let result = $result;
        assert!(
            matches!(result, Ok(Ok(_))),
            "Contract operation failed: {:?}",
            result
        )
    };
}

/// Assert value is within range (inclusive)
#[macro_export]
macro_rules! assert_in_range {
    ($value:expr, $min:expr, $max:expr) => {
        assert!(
            $value >= $min && $value <= $max,
            "Value {} not in range [{}, {}]",
            $value,
            $min,
            $max
        )
    };
}

pub fn assert_error_kind(error: Error, kind: ErrorKind) {
    assert_eq!(error.kind(), kind, "{:?} classified wrongly", error);
}

pub fn assert_amount_between(amount: i128, min: i128, max: i128) {
    assert!(
        amount >= min && amount <= max,
        "Amount {} not between {} and {}",
        amount,
        min,
        max
    );
}
