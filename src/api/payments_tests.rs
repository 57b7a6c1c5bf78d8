//! Tests for payments.

use std::sync::Arc;

use crate::api::{LocalPayment, PaymentAmount, RecurrenceRule, ScheduledPayment};
use crate::client::{Client, Error};
use crate::transport::mock::MockClient;

fn client_with(mock: Arc<MockClient>) -> Client<Arc<MockClient>> {
    Client::new("test-token")
        .with_base_url(url::Url::parse("https://api.example.test").unwrap())
        .with_http_client(mock)
}

fn local_payment() -> LocalPayment {
    LocalPayment {
        payment: PaymentAmount {
            currency: "GBP".to_string(),
            amount: 12.50,
        },
        destination_account_uid: "6221ef72-2b2c-44e4-a8f5-a1b66b582a10".to_string(),
        reference: "Dinner".to_string(),
    }
}

mod local {
    use super::*;

    #[tokio::test]
    async fn accepted_payment_returns_unit() {
        let mock = Arc::new(MockClient::status_only(http::StatusCode::ACCEPTED));
        let client = client_with(Arc::clone(&mock));

        client.make_local_payment(&local_payment()).await.unwrap();

        let sent = &mock.captured_requests()[0];
        assert_eq!(sent.method, http::Method::POST);
        assert_eq!(sent.url.path(), "/api/v1/payments/local");

        let body: serde_json::Value = serde_json::from_slice(sent.body.as_ref().unwrap()).unwrap();
        assert_eq!(body["payment"]["currency"], "GBP");
        assert_eq!(
            body["destinationAccountUid"],
            "6221ef72-2b2c-44e4-a8f5-a1b66b582a10"
        );
        assert_eq!(body["reference"], "Dinner");
    }

    #[tokio::test]
    async fn rejected_payment_surfaces_the_status() {
        let mock = Arc::new(MockClient::json(
            http::StatusCode::FORBIDDEN,
            r#"{"Message": "insufficient funds"}"#,
        ));
        let client = client_with(Arc::clone(&mock));

        let err = client.make_local_payment(&local_payment()).await.unwrap_err();

        assert_eq!(err.status(), Some(http::StatusCode::FORBIDDEN));
        match err {
            Error::Api { detail, .. } => assert_eq!(detail.message, "insufficient funds"),
            other => panic!("expected Error::Api, got {other:?}"),
        }
    }
}

mod scheduled {
    use super::*;

    const ORDERS: &str = r#"{
        "_links": {
            "nextPage": {"href": "NOT_YET_IMPLEMENTED"}
        },
        "paymentOrders": [
            {
                "paymentOrderId": "8927f54e-8b2f-4a70-b25c-b767bfd92f0c",
                "currency": "GBP",
                "amount": 13.95,
                "reference": "Rent",
                "receivingContactAccountId": "6221ef72-2b2c-44e4-a8f5-a1b66b582a10",
                "recipientName": "Landlord",
                "immediate": false,
                "recurrenceRule": {
                    "startDate": "2017-09-23",
                    "frequency": "MONTHLY",
                    "interval": 1,
                    "weekStart": "MONDAY"
                },
                "startDate": "2017-09-23",
                "nextDate": "2017-10-23",
                "paymentType": "STANDING_ORDER"
            }
        ]
    }"#;

    #[tokio::test]
    async fn decodes_the_order_page() {
        let mock = Arc::new(MockClient::json(http::StatusCode::OK, ORDERS));
        let client = client_with(Arc::clone(&mock));

        let page = client.scheduled_payments().await.unwrap();

        assert_eq!(page.payment_orders.len(), 1);
        let order = &page.payment_orders[0];
        assert_eq!(order.uid, "8927f54e-8b2f-4a70-b25c-b767bfd92f0c");
        assert!((order.amount - 13.95).abs() < f64::EPSILON);
        assert_eq!(
            order.receiving_contact_account_uid,
            "6221ef72-2b2c-44e4-a8f5-a1b66b582a10"
        );
        assert_eq!(order.recurrence_rule.frequency, "MONTHLY");
        assert_eq!(order.recurrence_rule.interval, Some(1));
        assert_eq!(
            mock.captured_requests()[0].url.path(),
            "/api/v1/payments/scheduled"
        );
    }

    #[tokio::test]
    async fn create_flattens_the_local_payment_fields() {
        let mock = Arc::new(MockClient::status_only(http::StatusCode::ACCEPTED));
        let client = client_with(Arc::clone(&mock));

        let payment = ScheduledPayment {
            local_payment: local_payment(),
            recurrence_rule: RecurrenceRule {
                start_date: "2017-09-23".to_string(),
                frequency: "WEEKLY".to_string(),
                week_start: "MONDAY".to_string(),
                ..RecurrenceRule::default()
            },
        };
        client.create_scheduled_payment(&payment).await.unwrap();

        let sent = &mock.captured_requests()[0];
        assert_eq!(sent.method, http::Method::PUT);

        // The local payment serializes inline, not under a nested key.
        let body: serde_json::Value = serde_json::from_slice(sent.body.as_ref().unwrap()).unwrap();
        assert_eq!(body["reference"], "Dinner");
        assert!(body.get("localPayment").is_none());
        assert_eq!(body["recurrenceRule"]["frequency"], "WEEKLY");
        assert!(body["recurrenceRule"].get("count").is_none());
    }
}
