//! Tests for AdvertisementService::track_click.

use super::*;

use crate::client::{store::session::Session, util::test::TEST_TOKEN};

/// Expect the bearer token to be attached when the session has one
#[tokio::test]
async fn attaches_token_when_signed_in() {
    let setup = test_setup(FakeBackend::new(vec![mock_advertisement(8)]));
    let service = AdvertisementService::new(setup.api.clone());

    service.track_click(8, &signed_in()).await;

    let requests = setup.backend.requests();
    assert_eq!(requests[0].route(), "POST /advertisements/8/click");
    assert_eq!(requests[0].bearer.as_deref(), Some(TEST_TOKEN));
    assert_eq!(requests[0].body.as_deref(), Some("{}"));
    assert_eq!(setup.backend.ads()[0].click_count, 1);
}

/// Expect the click to be sent unauthenticated without a session
#[tokio::test]
async fn proceeds_without_token() {
    let setup = test_setup(FakeBackend::new(vec![mock_advertisement(8)]));
    let service = AdvertisementService::new(setup.api.clone());

    service.track_click(8, &Session::anonymous()).await;

    let requests = setup.backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].bearer, None);
    assert_eq!(setup.backend.ads()[0].click_count, 1);
}

/// Expect transport failures to be swallowed
#[tokio::test]
async fn swallows_transport_failure() {
    let setup = test_setup(FakeBackend::new(vec![mock_advertisement(8)]));
    setup.backend.drop_next();
    let service = AdvertisementService::new(setup.api.clone());

    service.track_click(8, &signed_in()).await;

    assert_eq!(setup.backend.requests().len(), 1);
    assert_eq!(setup.backend.ads()[0].click_count, 0);
}
