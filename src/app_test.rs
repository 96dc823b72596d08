use super::*;
use crate::routes::TinOreStage;

fn table() -> RouteTable<Page> {
    route_table().unwrap()
}

#[test]
fn loading_phase_decides_loading() {
    let table = table();
    assert_eq!(decide(&table, &GuardConfig::default(), "/logsheet", AuthPhase::Loading), Decision::Loading);
}

#[test]
fn protected_page_redirects_with_preserved_request() {
    let table = table();
    let decision = decide(&table, &GuardConfig::default(), "/ship/7/operation", AuthPhase::Unauthenticated);
    assert_eq!(decision, Decision::Redirect("/auth/signin?redirect=%2Fship%2F7%2Foperation".to_owned()));
}

#[test]
fn ship_page_renders_inside_main_layout() {
    let table = table();
    let Decision::Render { page, layouts, params } =
        decide(&table, &GuardConfig::default(), "/ship/7", AuthPhase::Authenticated)
    else {
        panic!("expected render");
    };
    assert_eq!(page, Page::Ship);
    assert_eq!(layouts, vec![Page::MainLayout]);
    assert_eq!(params.get("id").map(String::as_str), Some("7"));
}

#[test]
fn tin_ore_stage_renders_inside_default_layout() {
    let table = table();
    let decision = decide(&table, &GuardConfig::default(), "/tin-ore/processing", AuthPhase::Authenticated);
    assert!(matches!(
        decision,
        Decision::Render { page: Page::TinOre(TinOreStage::Processing), ref layouts, .. }
            if layouts == &vec![Page::DefaultLayout]
    ));
}

#[test]
fn unknown_page_is_not_found_when_authenticated() {
    let table = table();
    assert_eq!(
        decide(&table, &GuardConfig::default(), "/nowhere", AuthPhase::Authenticated),
        Decision::NotFound
    );
}
