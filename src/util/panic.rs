/// Asserts that a block panics, optionally with a message containing the given text.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert!(
            std::panic::catch_unwind(|| $run).is_err(),
            "expected the block to panic"
        )
    };
    ($run:block, $expected:expr) => {
        match std::panic::catch_unwind(|| $run) {
            Ok(_) => panic!("expected the block to panic with {:?}", $expected),
            Err(payload) => {
                let message = payload
                    .downcast_ref::<String>()
                    .map(String::as_str)
                    .or_else(|| payload.downcast_ref::<&str>().copied())
                    .unwrap_or_default();
                assert!(
                    message.contains($expected),
                    "panic message {message:?} doesn't contain {:?}",
                    $expected
                );
            },
        }
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
