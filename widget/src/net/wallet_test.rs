use super::*;

#[test]
fn parse_bridge_receipt_reads_signature() {
    let receipt = parse_bridge_receipt(r#"{"signature":"5xSig","err":null}"#).unwrap();
    assert_eq!(receipt.signature, "5xSig");
    assert_eq!(receipt.err, None);
}

#[test]
fn parse_bridge_receipt_keeps_transaction_error() {
    let receipt = parse_bridge_receipt(r#"{"signature":"5xSig","err":"custom program error: 0x1"}"#).unwrap();
    assert_eq!(receipt.err.as_deref(), Some("custom program error: 0x1"));
}

#[test]
fn parse_bridge_receipt_rejects_missing_signature() {
    assert!(matches!(parse_bridge_receipt(r#"{"err":null}"#), Err(ChainError::Bridge(_))));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn wallet_is_unavailable_off_browser() {
    assert!(!wallet_available());
    assert_eq!(futures::executor::block_on(connect_wallet(true)), Err(ChainError::Unavailable));
    assert_eq!(futures::executor::block_on(bridge_mint("{}")), Err(ChainError::Unavailable));
}
