use super::*;

fn fleet_table() -> RouteTable<&'static str> {
    RouteTable::new([
        Route::public("/auth/signin", "sign-in"),
        Route::protected("/ship/:id", "main-layout").with_children([
            Route::protected(RoutePath::Index, "ship"),
            Route::protected("/ship/:id/operation", "operation"),
        ]),
        Route::protected(RoutePath::Layout, "default-layout").with_children([
            Route::protected(RoutePath::Index, "dashboard"),
            Route::protected("/logsheet", "logsheet"),
            Route::protected("/ship/:id/tin-ore/production", "production"),
        ]),
    ])
    .unwrap()
}

// =============================================================
// Construction
// =============================================================

#[test]
fn flattens_leaves_in_declaration_order() {
    let table = fleet_table();
    let paths: Vec<String> = table.entries().map(|(p, _)| p.to_string()).collect();
    assert_eq!(
        paths,
        ["/auth/signin", "/ship/:id", "/ship/:id/operation", "/", "/logsheet", "/ship/:id/tin-ore/production"]
    );
    assert_eq!(table.len(), 6);
}

#[test]
fn protection_is_inherited_from_ancestors() {
    let table = RouteTable::new([
        Route::protected(RoutePath::Layout, "layout").with_children([Route::public("/inner", "inner")]),
    ])
    .unwrap();
    let (_, access) = table.entries().next().unwrap();
    assert_eq!(access, Access::Protected);
}

#[test]
fn rejects_duplicate_leaf_paths() {
    let err = RouteTable::new([Route::public("/ship/:id", "a"), Route::protected("/ship/:ship_id", "b")])
        .err()
        .unwrap();
    assert_eq!(
        err,
        NavigationError::DuplicatePath { path: "/ship/:ship_id".to_owned(), existing: "/ship/:id".to_owned() }
    );
}

#[test]
fn rejects_duplicate_index_and_path_leaf() {
    let result = RouteTable::new([
        Route::public("/", "home"),
        Route::public(RoutePath::Layout, "layout").with_children([Route::public(RoutePath::Index, "index")]),
    ]);
    assert!(matches!(result, Err(NavigationError::DuplicatePath { .. })));
}

#[test]
fn rejects_absolute_child_outside_parent() {
    let result = RouteTable::new([
        Route::protected("/ship/:id", "layout").with_children([Route::protected("/logsheet", "logsheet")]),
    ]);
    assert!(matches!(result, Err(NavigationError::NestedPathMismatch { .. })));
}

#[test]
fn rejects_index_with_children() {
    let result = RouteTable::new([
        Route::public(RoutePath::Index, "index").with_children([Route::public("child", "child")]),
    ]);
    assert!(matches!(result, Err(NavigationError::IndexWithChildren { .. })));
}

#[test]
fn rejects_layout_without_children() {
    let result = RouteTable::new([Route::public(RoutePath::Layout, "empty")]);
    assert!(matches!(result, Err(NavigationError::EmptyLayout { .. })));
}

#[test]
fn relative_child_paths_join_parent_prefix() {
    let table = RouteTable::new([
        Route::protected("/ship/:id", "layout").with_children([Route::protected("operation", "operation")]),
    ])
    .unwrap();
    let m = table.find("/ship/3/operation").unwrap();
    assert_eq!(*m.target, "operation");
}

// =============================================================
// Matching
// =============================================================

#[test]
fn index_route_resolves_parent_path_with_layout_chain() {
    let table = fleet_table();
    let m = table.find("/ship/7").unwrap();
    assert_eq!(*m.target, "ship");
    assert_eq!(m.layouts, vec![&"main-layout"]);
    assert_eq!(m.params["id"], "7");
    assert_eq!(m.access, Access::Protected);
}

#[test]
fn root_resolves_dashboard_index() {
    let table = fleet_table();
    let m = table.find("/").unwrap();
    assert_eq!(*m.target, "dashboard");
    assert_eq!(m.layouts, vec![&"default-layout"]);
}

#[test]
fn deep_absolute_path_under_pathless_layout() {
    let table = fleet_table();
    let m = table.find("/ship/9/tin-ore/production").unwrap();
    assert_eq!(*m.target, "production");
    assert_eq!(m.pattern.to_string(), "/ship/:id/tin-ore/production");
}

#[test]
fn unknown_path_finds_nothing() {
    assert!(fleet_table().find("/nowhere").is_none());
}

#[test]
fn literal_segment_beats_parameter() {
    let table = RouteTable::new([Route::public("/ship/:id", "param"), Route::public("/ship/new", "literal")])
        .unwrap();
    assert_eq!(*table.find("/ship/new").unwrap().target, "literal");
    assert_eq!(*table.find("/ship/5").unwrap().target, "param");
}

#[test]
fn deeper_match_beats_shallower_with_equal_literals() {
    let table = RouteTable::new([
        Route::public("/:kind/log", "shallow"),
        Route::public("/ship", "layout").with_children([Route::public(":id", "deep")]),
    ])
    .unwrap();
    assert_eq!(*table.find("/ship/log").unwrap().target, "deep");
}

#[test]
fn first_declared_wins_on_full_tie() {
    let table = RouteTable::new([Route::public("/:a/x", "first"), Route::public("/y/:b", "second")]).unwrap();
    assert_eq!(*table.find("/y/x").unwrap().target, "first");
}
