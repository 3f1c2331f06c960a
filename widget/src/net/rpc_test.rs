use super::*;
use crate::net::types::{DropDescriptor, GuardDescriptor, SolPayment};

// =============================================================
// account_info_request
// =============================================================

#[test]
fn account_info_request_asks_for_base64() {
    let body = account_info_request("Cm1");
    assert_eq!(body["method"], "getAccountInfo");
    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["params"][0], "Cm1");
    assert_eq!(body["params"][1]["encoding"], "base64");
    assert_eq!(body["params"][1]["commitment"], "confirmed");
}

// =============================================================
// parse_account_info_response
// =============================================================

#[test]
fn parse_response_decodes_account_data() {
    let body = r#"{
        "jsonrpc": "2.0",
        "id": 1,
        "result": {
            "context": { "slot": 100 },
            "value": {
                "data": ["AQID", "base64"],
                "executable": false,
                "lamports": 1000,
                "owner": "Owner1",
                "rentEpoch": 0
            }
        }
    }"#;
    let account = parse_account_info_response(body).unwrap().unwrap();
    assert_eq!(account, RawAccount { owner: "Owner1".to_owned(), data: vec![1, 2, 3] });
}

#[test]
fn parse_response_null_value_is_missing_account() {
    let body = r#"{"jsonrpc":"2.0","id":1,"result":{"context":{"slot":1},"value":null}}"#;
    assert_eq!(parse_account_info_response(body).unwrap(), None);
}

#[test]
fn parse_response_surfaces_rpc_error() {
    let body = r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32602,"message":"Invalid param"}}"#;
    assert_eq!(
        parse_account_info_response(body),
        Err(ChainError::Rpc { code: -32602, message: "Invalid param".to_owned() })
    );
}

#[test]
fn parse_response_requires_result() {
    let body = r#"{"jsonrpc":"2.0","id":1}"#;
    assert!(matches!(parse_account_info_response(body), Err(ChainError::ResponseParse(_))));
}

#[test]
fn parse_response_rejects_other_encodings() {
    let body = r#"{"jsonrpc":"2.0","id":1,"result":{"value":{"data":["AQID","base58"],"owner":"O"}}}"#;
    let err = parse_account_info_response(body).unwrap_err();
    assert!(matches!(err, ChainError::ResponseParse(msg) if msg.contains("base58")));
}

#[test]
fn parse_response_rejects_bad_base64() {
    let body = r#"{"jsonrpc":"2.0","id":1,"result":{"value":{"data":["!!!","base64"],"owner":"O"}}}"#;
    assert!(matches!(parse_account_info_response(body), Err(ChainError::ResponseParse(_))));
}

#[test]
fn parse_response_rejects_non_json() {
    assert!(matches!(parse_account_info_response("<html>"), Err(ChainError::ResponseParse(_))));
}

// =============================================================
// expect_owner
// =============================================================

#[test]
fn expect_owner_accepts_matching_program() {
    let account = RawAccount { owner: CANDY_MACHINE_PROGRAM.to_owned(), data: Vec::new() };
    assert!(expect_owner("Cm1", &account, CANDY_MACHINE_PROGRAM).is_ok());
}

#[test]
fn expect_owner_rejects_other_program() {
    let account = RawAccount { owner: "Other".to_owned(), data: Vec::new() };
    assert_eq!(
        expect_owner("Cm1", &account, CANDY_GUARD_PROGRAM),
        Err(ChainError::UnexpectedOwner {
            address: "Cm1".to_owned(),
            owner: "Other".to_owned(),
            expected: CANDY_GUARD_PROGRAM,
        })
    );
}

// =============================================================
// RpcChainClient
// =============================================================

#[test]
fn bridge_payload_flattens_request_with_endpoint() {
    let client = RpcChainClient::new("https://rpc.test");
    let drop = DropDescriptor::new(
        "Cm1".to_owned(),
        "Auth1".to_owned(),
        "G1".to_owned(),
        "Col1".to_owned(),
        10,
        0,
    )
    .unwrap();
    let guard = GuardDescriptor {
        address: "G1".to_owned(),
        start_date: None,
        sol_payment: Some(SolPayment { lamports: 1, destination: "Dest1".to_owned() }),
    };
    let request = MintRequest::new(&drop, Some(&guard), "Payer1").unwrap();
    let payload: serde_json::Value = serde_json::from_str(&client.bridge_payload(&request).unwrap()).unwrap();
    assert_eq!(payload["rpcEndpoint"], "https://rpc.test");
    assert_eq!(payload["candyMachine"], "Cm1");
    assert_eq!(payload["candyGuard"], "G1");
    assert_eq!(payload["payer"], "Payer1");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetches_are_unavailable_off_browser() {
    let client = RpcChainClient::new("https://rpc.test");
    assert_eq!(client.endpoint(), "https://rpc.test");
    assert_eq!(futures::executor::block_on(client.fetch_drop("Cm1")), Err(ChainError::Unavailable));
    assert_eq!(futures::executor::block_on(client.fetch_guard("G1")), Err(ChainError::Unavailable));
}
