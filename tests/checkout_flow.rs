mod common;

use async_trait::async_trait;
use mockall::mock;

use soundforge::domain::checkout::{
    CheckoutFlow, CheckoutOutcome, CheckoutState, PurchaseSubmission,
};
use soundforge::domain::gateways::{PurchaseError, PurchaseGateway};

mock! {
    Gateway {}

    #[async_trait]
    impl PurchaseGateway for Gateway {
        async fn submit(&self, submission: &PurchaseSubmission) -> Result<(), PurchaseError>;
    }
}

fn cart() -> Vec<soundforge::domain::catalog::Track> {
    vec![
        common::make_track(1, "Midnight Drive", "Trap", 2999),
        common::make_track(3, "Smoke Rings", "Lo-Fi", 1999),
    ]
}

#[tokio::test]
async fn test_successful_submission_clears_cart_on_acknowledge() {
    let mut gateway = MockGateway::new();
    gateway
        .expect_submit()
        .times(1)
        .withf(|s: &PurchaseSubmission| {
            s.name == "Asha" && s.email == "asha@example.com" && s.beats.len() == 2
        })
        .returning(|_| Ok(()));

    let mut flow = CheckoutFlow::new(cart());
    flow.set_name("Asha");
    flow.set_email("asha@example.com");

    assert_eq!(flow.submit(&gateway).await, &CheckoutState::Success);
    assert_eq!(flow.acknowledge(), CheckoutOutcome::ClearCartAndLeave);
}

#[tokio::test]
async fn test_invalid_email_never_reaches_gateway() {
    let mut gateway = MockGateway::new();
    gateway.expect_submit().times(0);

    let mut flow = CheckoutFlow::new(cart());
    flow.set_name("Asha");
    flow.set_email("not-an-email");

    assert_eq!(flow.submit(&gateway).await, &CheckoutState::Selecting);
    assert!(flow.field_errors().email.is_some());
    assert_eq!(flow.acknowledge(), CheckoutOutcome::Stay);
}

#[tokio::test]
async fn test_whitespace_is_trimmed_before_submission() {
    let mut gateway = MockGateway::new();
    gateway
        .expect_submit()
        .withf(|s: &PurchaseSubmission| s.name == "Asha" && s.email == "asha@example.com")
        .returning(|_| Ok(()));

    let mut flow = CheckoutFlow::new(cart());
    flow.set_name("  Asha  ");
    flow.set_email(" asha@example.com ");

    assert_eq!(flow.submit(&gateway).await, &CheckoutState::Success);
}

#[tokio::test]
async fn test_gateway_rejection_surfaces_message_and_allows_retry() {
    let mut gateway = MockGateway::new();
    gateway
        .expect_submit()
        .times(1)
        .returning(|_| Err(PurchaseError::Rejected("Domain not verified".to_string())));

    let mut flow = CheckoutFlow::new(cart());
    flow.set_name("Asha");
    flow.set_email("asha@example.com");

    assert_eq!(
        flow.submit(&gateway).await,
        &CheckoutState::Error("Domain not verified".to_string())
    );
    assert_eq!(flow.acknowledge(), CheckoutOutcome::Stay);

    // A second attempt from the error state goes back through the gateway.
    let mut retry_gateway = MockGateway::new();
    retry_gateway.expect_submit().times(1).returning(|_| Ok(()));

    assert_eq!(flow.submit(&retry_gateway).await, &CheckoutState::Success);
    assert_eq!(flow.acknowledge(), CheckoutOutcome::ClearCartAndLeave);
}

#[tokio::test]
async fn test_submission_after_success_is_ignored() {
    let mut gateway = MockGateway::new();
    gateway.expect_submit().times(1).returning(|_| Ok(()));

    let mut flow = CheckoutFlow::new(cart());
    flow.set_name("Asha");
    flow.set_email("asha@example.com");

    assert_eq!(flow.submit(&gateway).await, &CheckoutState::Success);
    // The gateway expectation of one call guards against a second dispatch.
    assert_eq!(flow.submit(&gateway).await, &CheckoutState::Success);
}

#[tokio::test]
async fn test_timeout_is_a_retryable_error() {
    let mut gateway = MockGateway::new();
    gateway
        .expect_submit()
        .times(1)
        .returning(|_| Err(PurchaseError::TimedOut));

    let mut flow = CheckoutFlow::new(cart());
    flow.set_name("Asha");
    flow.set_email("asha@example.com");

    assert_eq!(
        flow.submit(&gateway).await,
        &CheckoutState::Error("request timed out".to_string())
    );
    assert_eq!(flow.acknowledge(), CheckoutOutcome::Stay);
}
