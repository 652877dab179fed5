use std::sync::Arc;

use proptest::prelude::*;
use subguide_core::{
    AppId, Catalog, CopyRequest, Environment, Platform, SelectionController, SelectionError,
    detect_platform,
};

fn catalog() -> Arc<Catalog> {
    match Catalog::embedded() {
        Ok(catalog) => Arc::new(catalog),
        Err(err) => panic!("embedded catalog invalid: {err}"),
    }
}

fn listed_ids(catalog: &Catalog, platform: Platform) -> Vec<AppId> {
    catalog
        .platform(platform)
        .map(|entry| entry.apps().to_vec())
        .unwrap_or_default()
        .into_iter()
        .filter_map(|index| catalog.app(index))
        .map(|app| app.id.clone())
        .collect()
}

#[test]
fn every_platform_switch_lands_on_first_listed_app() -> Result<(), SelectionError> {
    let catalog = catalog();
    let mut ctl = SelectionController::new(Arc::clone(&catalog), Platform::Windows)?;
    for platform in Platform::ALL {
        ctl.select_platform(platform)?;
        let first = listed_ids(&catalog, platform).first().cloned();
        assert_eq!(ctl.current_app().map(|app| app.id.clone()), first);
    }
    Ok(())
}

#[test]
fn every_listed_app_is_selectable_on_its_platform() -> Result<(), SelectionError> {
    let catalog = catalog();
    for platform in Platform::ALL {
        for id in listed_ids(&catalog, platform) {
            let mut ctl = SelectionController::new(Arc::clone(&catalog), Platform::Windows)?;
            ctl.select_platform(platform)?;
            ctl.select_app(&id)?;
            assert_eq!(ctl.current_app().map(|app| &app.id), Some(&id));
            let listed = ctl
                .current_platform()
                .is_some_and(|entry| entry.contains(ctl.state().app));
            assert!(listed);
        }
    }
    Ok(())
}

#[test]
fn reselecting_same_app_is_idempotent() -> Result<(), SelectionError> {
    let mut once = SelectionController::new(catalog(), Platform::Android)?;
    once.select_app(&AppId::from("hiddify"))?;
    let mut twice = once.clone();
    twice.select_app(&AppId::from("hiddify"))?;
    assert_eq!(once, twice);
    Ok(())
}

#[test]
fn documented_detection_scenarios() {
    let cases = [
        ("mozilla/5.0 (linux; android 13)", 1200, Platform::AndroidTv),
        ("mozilla/5.0 (linux; android 13)", 800, Platform::Android),
        ("mozilla/5.0 (iphone; cpu iphone os 17_0)", 390, Platform::Ios),
        ("", 1280, Platform::Windows),
    ];
    for (ua, width, expected) in cases {
        assert_eq!(detect_platform(&Environment::new(ua, width)), expected, "{ua}");
    }
}

#[test]
fn copy_request_matches_documented_example() -> Result<(), Box<dyn std::error::Error>> {
    let request = CopyRequest::new("https://example.com", "/sub/abc", "MyApp")?;
    assert_eq!(request.url, "https://example.com/sub/abc");
    assert_eq!(request.label, "MyApp");
    Ok(())
}

fn platform_strategy() -> impl Strategy<Value = Platform> {
    prop::sample::select(Platform::ALL.to_vec())
}

proptest! {
    #[test]
    fn selection_never_leaves_platform_list(
        steps in prop::collection::vec((platform_strategy(), 0usize..12), 1..40)
    ) {
        let catalog = catalog();
        let all: Vec<AppId> = catalog.apps().iter().map(|app| app.id.clone()).collect();
        let mut ctl = SelectionController::new(Arc::clone(&catalog), Platform::Windows)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        for (platform, pick) in steps {
            if pick % 3 == 0 {
                ctl.select_platform(platform)
                    .map_err(|err| TestCaseError::fail(err.to_string()))?;
            } else if let Some(id) = all.get(pick % all.len()) {
                let before = ctl.state();
                if ctl.select_app(id).is_err() {
                    prop_assert_eq!(ctl.state(), before);
                }
            }
            let state = ctl.state();
            let listed = catalog
                .platform(state.platform)
                .is_some_and(|entry| entry.contains(state.app));
            prop_assert!(listed);
        }
    }
}
