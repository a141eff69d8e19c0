//! Tests for AdvertisementAdmin::toggle_and_refresh.

use super::*;

/// Expect only the targeted record's active flag to flip
#[tokio::test]
async fn flips_only_target() {
    let mut inactive = mock_advertisement(3);
    inactive.is_active = false;
    let before = vec![mock_advertisement(1), mock_advertisement(2), inactive];
    let setup = test_setup(FakeBackend::new(before.clone()));
    let admin = AdvertisementAdmin::new(setup.api.clone(), signed_in());

    let after = refreshed_list(admin.toggle_and_refresh(2).await.unwrap());

    assert_eq!(
        setup.backend.routes(),
        vec!["PATCH /advertisements/2/toggle", "GET /advertisements/admin/all"]
    );
    assert_eq!(after.len(), before.len());
    for (old, new) in before.iter().zip(after.iter()) {
        if old.id == 2 {
            assert_eq!(new.is_active, !old.is_active);
            assert_eq!(
                AdvertisementDto {
                    is_active: old.is_active,
                    ..new.clone()
                },
                *old
            );
        } else {
            assert_eq!(new, old);
        }
    }
}

/// Expect an expired session to surface as Unauthorized with no refetch
#[tokio::test]
async fn unauthorized_toggle_skips_refetch() {
    let setup = test_setup(FakeBackend::new(vec![mock_advertisement(1)]));
    let admin = AdvertisementAdmin::new(
        setup.api.clone(),
        Session::new(Some("expired".to_string())),
    );

    let result = admin.toggle_and_refresh(1).await;

    assert!(matches!(result, Err(ClientError::Unauthorized(_))));
    assert_eq!(setup.backend.routes(), vec!["PATCH /advertisements/1/toggle"]);
    assert!(setup.backend.ads()[0].is_active);
}

/// Expect a toggle whose refetch fails to still count as applied
#[tokio::test]
async fn failed_refetch_after_toggle_is_stale() {
    let setup = test_setup(FakeBackend::new(vec![mock_advertisement(1)]));
    setup.backend.pass_next();
    setup.backend.fail_next(500, "Internal server error");
    let admin = AdvertisementAdmin::new(setup.api.clone(), signed_in());

    let result = admin.toggle_and_refresh(1).await;

    assert!(matches!(
        result,
        Ok(Refreshed::Stale(ClientError::Status { status: 500, .. }))
    ));
    assert!(!setup.backend.ads()[0].is_active);
}
