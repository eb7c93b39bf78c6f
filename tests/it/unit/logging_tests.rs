//! Unit tests for log subscriber setup.

use regionkit::logging;

#[test]
fn test_init_is_idempotent() {
    logging::init();
    logging::init();
    assert!(logging::try_init().is_err());
}
