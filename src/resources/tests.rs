//! Tests for resource namespaces and handles

use super::{segment, ListOptions};
use crate::client::MangopayClient;
use crate::types::{BankAccountType, ClientConfig, UserType};
use crate::MangopayError;
use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::json;

const CLIENT_ID: &str = "resources-tests";

fn test_client(server: &ServerGuard) -> MangopayClient {
    let config = ClientConfig::new().with_api_base_url(server.url());
    MangopayClient::new(CLIENT_ID, "secret", config).unwrap()
}

fn resource_path(path: &str) -> String {
    format!("/v2.01/{}/{}", CLIENT_ID, path)
}

async fn mock_token(server: &mut ServerGuard) -> Mock {
    server
        .mock("POST", "/v2.01/oauth/token")
        .with_status(200)
        .with_body(json!({ "access_token": "t", "token_type": "Bearer" }).to_string())
        .create_async()
        .await
}

async fn mock_ok(server: &mut ServerGuard, method: &str, path: &str) -> Mock {
    server
        .mock(method, resource_path(path).as_str())
        .with_status(200)
        .with_body(json!({ "Id": "ok" }).to_string())
        .expect(1)
        .create_async()
        .await
}

#[test]
fn test_list_options_query() {
    assert!(ListOptions::new().to_query().is_empty());

    let options = ListOptions::new()
        .with_page(2)
        .with_per_page(50)
        .with_sort("CreationDate:DESC")
        .with_filter("Status", "SUCCEEDED");
    assert_eq!(
        options.to_query(),
        vec![
            ("page".to_string(), "2".to_string()),
            ("per_page".to_string(), "50".to_string()),
            ("Sort".to_string(), "CreationDate:DESC".to_string()),
            ("Status".to_string(), "SUCCEEDED".to_string()),
        ]
    );
}

#[test]
fn test_ids_are_escaped_in_paths() {
    assert_eq!(segment("8494514"), "8494514");
    assert_eq!(segment("wlt_m_01-A.b~c"), "wlt_m_01-A.b~c");
    assert_eq!(segment("../users"), "..%2Fusers");
    assert_eq!(segment("a b?c"), "a%20b%3Fc");
}

#[tokio::test]
async fn test_list_sends_pagination() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server).await;
    let users = server
        .mock("GET", resource_path("users").as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "3".into()),
            Matcher::UrlEncoded("per_page".into(), "10".into()),
        ]))
        .with_status(200)
        .with_body(json!([{ "Id": "1" }]).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = test_client(&server);
    let options = ListOptions::new().with_page(3).with_per_page(10);
    let list = client.users().list(Some(&options)).await.unwrap();

    assert_eq!(list[0]["Id"], "1");
    users.assert_async().await;
}

#[tokio::test]
async fn test_user_update_uses_type_segment() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server).await;
    let update = mock_ok(&mut server, "PUT", "users/legal/7").await;

    let client = test_client(&server);
    client
        .user("7")
        .update(UserType::Legal, json!({ "Name": "Acme" }))
        .await
        .unwrap();

    update.assert_async().await;
}

#[tokio::test]
async fn test_user_wallet_defaults_owner() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server).await;
    let create = server
        .mock("POST", resource_path("wallets").as_str())
        .match_body(Matcher::Json(json!({
            "Owners": ["7"],
            "Description": "Main",
            "Currency": "EUR"
        })))
        .with_status(200)
        .with_body(json!({ "Id": "w1" }).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = test_client(&server);
    let wallet = client
        .user("7")
        .create_wallet(json!({ "Description": "Main", "Currency": "EUR" }))
        .await
        .unwrap();

    assert_eq!(wallet["Id"], "w1");
    create.assert_async().await;
}

#[tokio::test]
async fn test_wallet_update_accepts_partial_body() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server).await;
    let update = mock_ok(&mut server, "PUT", "wallets/w1").await;

    let client = test_client(&server);
    client
        .wallet("w1")
        .update(json!({ "Description": "Renamed" }))
        .await
        .unwrap();

    update.assert_async().await;
}

#[tokio::test]
async fn test_wallet_create_rejects_bad_currency() {
    let server = Server::new_async().await;
    let client = test_client(&server);

    let err = client
        .wallets()
        .create(json!({ "Owners": ["7"], "Description": "Main", "Currency": "EURO" }))
        .await
        .unwrap_err();

    match err {
        MangopayError::Validation(e) => assert_eq!(e.paths(), vec!["Currency"]),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_card_registration_create_checks_card_type() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server).await;
    let created = server
        .mock("POST", resource_path("cardRegistration").as_str())
        .match_body(Matcher::Json(json!({
            "UserId": "7",
            "Currency": "EUR",
            "CardType": "MAESTRO"
        })))
        .with_status(200)
        .with_body(json!({ "Id": "cr1", "Status": "CREATED" }).to_string())
        .expect(1)
        .create_async()
        .await;
    let client = test_client(&server);

    let err = client
        .card_registrations()
        .create(json!({ "UserId": "7", "Currency": "EUR", "CardType": "AMEX" }))
        .await
        .unwrap_err();
    match err {
        MangopayError::Validation(e) => assert_eq!(e.paths(), vec!["CardType"]),
        other => panic!("expected validation error, got {:?}", other),
    }

    let registration = client
        .card_registrations()
        .create(json!({ "UserId": "7", "Currency": "EUR", "CardType": "MAESTRO", "Extra": 1 }))
        .await
        .unwrap();
    assert_eq!(registration["Id"], "cr1");
    created.assert_async().await;
}

#[tokio::test]
async fn test_bank_account_create_validates_per_type() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server).await;
    let create = mock_ok(&mut server, "POST", "users/7/bankAccounts/GB").await;

    let client = test_client(&server);
    let accounts = client.user("7").bank_accounts();

    let err = accounts
        .create(
            BankAccountType::Gb,
            json!({ "OwnerName": "Victor Hugo", "AccountNumber": "11696419" }),
        )
        .await
        .unwrap_err();
    let violations = match err {
        MangopayError::Validation(e) => e,
        other => panic!("expected validation error, got {:?}", other),
    };
    assert!(violations.has_violation("SortCode"));
    assert!(violations.has_violation("OwnerAddress"));

    accounts
        .create(
            BankAccountType::Gb,
            json!({
                "OwnerName": "Victor Hugo",
                "OwnerAddress": {
                    "AddressLine1": "1 Mangopay Street",
                    "City": "London",
                    "Country": "GB"
                },
                "AccountNumber": "11696419",
                "SortCode": "010039"
            }),
        )
        .await
        .unwrap();

    create.assert_async().await;
}

#[tokio::test]
async fn test_payment_paths() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server).await;
    let mocks = vec![
        mock_ok(&mut server, "POST", "payIns/bankWire/direct").await,
        mock_ok(&mut server, "POST", "payIns/directDebit/web").await,
        mock_ok(&mut server, "POST", "payIns/preAuthorized/direct").await,
        mock_ok(&mut server, "POST", "payIns/card/web").await,
        mock_ok(&mut server, "POST", "payIns/p1/refunds").await,
        mock_ok(&mut server, "POST", "payouts/bankWire").await,
        mock_ok(&mut server, "POST", "transfers/t1/refunds").await,
        mock_ok(&mut server, "POST", "preAuthorizations/card/direct").await,
        mock_ok(&mut server, "PUT", "preAuthorizations/pa1").await,
        mock_ok(&mut server, "PUT", "cardRegistration/cr1").await,
    ];

    let client = test_client(&server);
    let body = json!({ "Tag": "test" });
    client.pay_ins().bank_wire_direct(body.clone()).await.unwrap();
    client.pay_ins().direct_debit_web(body.clone()).await.unwrap();
    client.pay_ins().preauthorized_direct(body.clone()).await.unwrap();
    client.pay_ins().card_web(body.clone()).await.unwrap();
    client.pay_in("p1").refund(body.clone()).await.unwrap();
    client.pay_outs().bank_wire(body.clone()).await.unwrap();
    client.transfer("t1").refund(body.clone()).await.unwrap();
    client.preauthorizations().card_direct(body.clone()).await.unwrap();
    client.preauthorization("pa1").update(body.clone()).await.unwrap();
    client.card_registration("cr1").update(body).await.unwrap();

    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_dispute_contest_and_resubmit_share_endpoint() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server).await;
    let contest = server
        .mock("PUT", resource_path("disputes/d1/submit").as_str())
        .match_body(Matcher::Json(json!({
            "ContestedFunds": { "Currency": "EUR", "Amount": 100 }
        })))
        .with_status(200)
        .with_body(json!({ "Id": "d1", "Status": "SUBMITTED" }).to_string())
        .expect(1)
        .create_async()
        .await;
    let resubmit = server
        .mock("PUT", resource_path("disputes/d1/submit").as_str())
        .match_body(Matcher::Exact(String::new()))
        .with_status(200)
        .with_body(json!({ "Id": "d1", "Status": "SUBMITTED" }).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = test_client(&server);
    client
        .disputes()
        .contest(
            "d1",
            Some(json!({ "ContestedFunds": { "Currency": "EUR", "Amount": 100 } })),
        )
        .await
        .unwrap();
    client.dispute("d1").resubmit().await.unwrap();

    contest.assert_async().await;
    resubmit.assert_async().await;
}

#[tokio::test]
async fn test_user_kyc_document_pages() {
    let mut server = Server::new_async().await;
    let _token = mock_token(&mut server).await;
    let create = mock_ok(&mut server, "POST", "users/7/KYC/documents").await;
    let page = mock_ok(&mut server, "POST", "users/7/KYC/documents/k1/pages").await;
    let submit = mock_ok(&mut server, "PUT", "users/7/KYC/documents/k1").await;
    let global = mock_ok(&mut server, "GET", "KYC/documents/k1").await;

    let client = test_client(&server);
    let user = client.user("7");
    user.kyc_documents()
        .create(json!({ "Type": "IDENTITY_PROOF" }))
        .await
        .unwrap();
    let document = user.kyc_document("k1");
    document
        .create_page(json!({ "File": "aGVsbG8=" }))
        .await
        .unwrap();
    document
        .update(json!({ "Status": "VALIDATION_ASKED" }))
        .await
        .unwrap();
    client.kyc_document("k1").reload().await.unwrap();

    create.assert_async().await;
    page.assert_async().await;
    submit.assert_async().await;
    global.assert_async().await;
}
