use crate::Supplier;

use uuid::Uuid;

#[test]
fn given_new_supplier_then_id_is_generated_and_active() {
    let a = Supplier::new("Acme".to_string(), None);
    let b = Supplier::new("Acme".to_string(), None);

    assert_ne!(a.id, b.id);
    assert!(a.active);
}

#[test]
fn given_with_id_then_caller_id_is_preserved() {
    let id = Uuid::new_v4();
    let supplier = Supplier::with_id(id, "Acme".to_string(), Some("123".to_string()), false);

    assert_eq!(supplier.id, id);
    assert_eq!(supplier.document.as_deref(), Some("123"));
    assert!(!supplier.active);
}
