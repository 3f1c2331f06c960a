use super::*;

#[test]
fn wallet_state_default_is_disconnected() {
    let state = WalletState::default();
    assert!(state.address.is_none());
    assert!(!state.connecting);
    assert!(!state.provider_missing);
    assert!(state.can_connect());
}

#[test]
fn cannot_connect_while_connecting_or_connected() {
    let connecting = WalletState { connecting: true, ..WalletState::default() };
    assert!(!connecting.can_connect());

    let connected = WalletState { address: Some("Payer1".to_owned()), ..WalletState::default() };
    assert!(!connected.can_connect());
}

#[test]
fn cannot_connect_without_provider() {
    let missing = WalletState { provider_missing: true, ..WalletState::default() };
    assert!(!missing.can_connect());
}
