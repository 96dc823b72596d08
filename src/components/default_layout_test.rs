use super::*;

#[test]
fn nav_links_cover_dashboard_sections() {
    let links = nav_links();
    assert_eq!(links.first().map(|(_, href)| href.as_str()), Some("/"));
    assert!(links.iter().any(|(label, href)| *label == "Tin Ore Unloading" && href == "/tin-ore/unloading"));
    assert_eq!(links.len(), 8);
}

#[test]
fn nav_links_resolve_to_declared_routes() {
    let table = crate::routes::route_table().unwrap();
    for (_, href) in nav_links() {
        assert!(table.find(&href).is_some(), "{href}");
    }
}
