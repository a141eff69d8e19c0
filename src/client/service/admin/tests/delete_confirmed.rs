//! Tests for AdvertisementAdmin::delete_confirmed.

use super::*;

/// Expect no request at all when the operator did not confirm
#[tokio::test]
async fn unconfirmed_sends_nothing() {
    let setup = test_setup(FakeBackend::new(vec![mock_advertisement(1)]));
    let admin = AdvertisementAdmin::new(setup.api.clone(), signed_in());

    let result = admin.delete_confirmed(1, false).await;

    assert_eq!(result, Ok(None));
    assert!(setup.backend.requests().is_empty());
    assert_eq!(setup.backend.ads().len(), 1);
}

/// Expect exactly one delete followed by one refetch when confirmed
#[tokio::test]
async fn confirmed_deletes_then_refetches() {
    let setup = test_setup(FakeBackend::new(vec![
        mock_advertisement(1),
        mock_advertisement(2),
    ]));
    let admin = AdvertisementAdmin::new(setup.api.clone(), signed_in());

    let ads = refreshed_list(admin.delete_confirmed(1, true).await.unwrap().unwrap());

    assert_eq!(
        setup.backend.routes(),
        vec!["DELETE /advertisements/1", "GET /advertisements/admin/all"]
    );
    let ids: Vec<i64> = ads.iter().map(|ad| ad.id).collect();
    assert_eq!(ids, vec![2]);
}

/// Expect no refetch when the delete fails
#[tokio::test]
async fn failed_delete_skips_refetch() {
    let setup = test_setup(FakeBackend::new(Vec::new()));
    let admin = AdvertisementAdmin::new(setup.api.clone(), signed_in());

    let result = admin.delete_confirmed(9, true).await;

    assert!(matches!(
        result,
        Err(ClientError::Status { status: 404, .. })
    ));
    assert_eq!(setup.backend.routes(), vec!["DELETE /advertisements/9"]);
}

/// Expect a delete whose refetch fails to still count as applied
#[tokio::test]
async fn failed_refetch_after_delete_is_stale() {
    let setup = test_setup(FakeBackend::new(vec![mock_advertisement(1)]));
    setup.backend.pass_next();
    setup.backend.drop_next();
    let admin = AdvertisementAdmin::new(setup.api.clone(), signed_in());

    let result = admin.delete_confirmed(1, true).await;

    assert!(matches!(result, Ok(Some(Refreshed::Stale(_)))));
    assert!(setup.backend.ads().is_empty());
}
