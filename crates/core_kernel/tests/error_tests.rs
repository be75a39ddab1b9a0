//! Tests for the port error type

use core_kernel::ports::PortError;

#[test]
fn test_port_error_classification() {
    let not_found = PortError::not_found("Client", "abc");
    assert!(not_found.is_not_found());
    assert!(!not_found.is_transient());
    assert!(not_found.to_string().contains("abc"));

    let conflict = PortError::conflict("cpf already stored");
    assert!(conflict.is_conflict());

    let connection = PortError::connection("pool closed");
    assert!(connection.is_transient());
}

#[test]
fn test_internal_error_is_not_retried() {
    let internal = PortError::internal("row mapping failed");
    assert!(!internal.is_transient());
    assert!(!internal.is_conflict());
    assert!(internal.to_string().contains("row mapping failed"));
}
