use marquee::app::{handle_event, AppContext, Event, Route, Session, Store};
use marquee::catalog::{self, Catalog};
use marquee::{initialize, Action, Config, Content, ContentKind, MarqueeError, Theme};
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

const SMALL_CATALOG: &str = r#"
[featured]
id = "f1"
title = "Arrival"
kind = "movie"
year = 2016
genres = ["Sci-Fi"]

[[rows]]
id = "picks"
title = "Picks"

[[rows.items]]
id = "p1"
title = "Dune"
kind = "movie"
year = 2021
genres = ["Sci-Fi", "Adventure"]

[[rows.items]]
id = "p2"
title = "Dark"
kind = "series"
year = 2017
seasons = 3
genres = ["Mystery"]

[[rows.items]]
id = "p3"
title = "Ozark"
kind = "series"
year = 2017
seasons = 4
genres = ["Crime", "Drama"]
"#;

fn apply(session: &mut Session, event: Event) -> Vec<Action> {
    let (_, actions) = handle_event(session, &event).unwrap();
    for action in &actions {
        if let Action::Navigate(route) = action {
            session.navigate(route.clone());
        }
    }
    actions
}

#[test]
fn dune_query_against_three_items() {
    let items = vec![
        Content::new("a", "Dune", ContentKind::Movie, 2021),
        Content::new("b", "Dark", ContentKind::Series, 2017),
        Content::new("c", "Ozark", ContentKind::Series, 2017),
    ];

    let mut store = Store::default();
    store.set_search_query("dune");
    store.set_search_active(true);

    let results = catalog::filter_content(&store.state().search_query, &items, None);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Dune");
    assert!(store.state().search_active);
}

#[test]
fn search_submit_lands_on_results_page() {
    let mut session = Session::new(
        AppContext::with_store(Store::default()),
        Catalog::from_toml_str(SMALL_CATALOG).unwrap(),
        Theme::default(),
        100,
    );

    apply(&mut session, Event::OpenSearch);
    apply(&mut session, Event::TypeText("da".into()));
    assert_eq!(session.search_bar.suggestions().len(), 1);

    let actions = apply(&mut session, Event::SubmitSearch);
    assert_eq!(actions, vec![Action::Navigate(Route::Search { query: "da".into() })]);

    let vm = session.compute_viewmodel().unwrap();
    assert_eq!(vm.grid.len(), 1);
    assert_eq!(vm.grid[0].title, "Dark");
    assert!(vm.search_bar.is_none());
}

#[test]
fn list_round_trip_through_modal() {
    let mut session = initialize(&Config::default()).unwrap();

    apply(&mut session, Event::SelectContent("sf1".into()));
    apply(&mut session, Event::ToggleList("sf1".into()));
    apply(&mut session, Event::CloseModal);
    apply(&mut session, Event::Navigate(Route::MyList));

    let vm = session.compute_viewmodel().unwrap();
    assert!(vm.modal.is_none());
    assert_eq!(vm.navbar.list_count, 1);
    assert_eq!(vm.grid.len(), 1);
    assert!(vm.grid[0].in_list);

    apply(&mut session, Event::RemoveFromList("sf1".into()));
    let vm = session.compute_viewmodel().unwrap();
    assert!(vm.empty_state.is_some());
}

#[test]
fn subscribers_see_every_dispatch() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut store = Store::default();
    let sink = Rc::clone(&seen);
    store.subscribe(move |state| sink.borrow_mut().push(state.is_muted));

    let mut session = Session::new(
        AppContext::with_store(store),
        Catalog::built_in().unwrap(),
        Theme::default(),
        100,
    );
    apply(&mut session, Event::ToggleMute);
    apply(&mut session, Event::ToggleMute);

    assert_eq!(*seen.borrow(), vec![false, true]);
}

#[test]
fn config_file_drives_initialize() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_path = dir.path().join("catalog.toml");
    std::fs::write(&catalog_path, SMALL_CATALOG).unwrap();

    let config_path = dir.path().join("config.toml");
    let mut file = std::fs::File::create(&config_path).unwrap();
    writeln!(file, "theme = \"marquee-light\"").unwrap();
    writeln!(file, "catalog_file = {:?}", catalog_path.display().to_string()).unwrap();
    writeln!(file, "width = 62").unwrap();

    let config = Config::from_file(&config_path).unwrap();
    let session = initialize(&config).unwrap();

    assert_eq!(session.theme.name, "marquee-light");
    assert_eq!(session.width, 62);
    assert_eq!(session.catalog.all_content().len(), 3);
}

#[test]
fn invalid_catalog_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dupes.toml");
    let duplicated = SMALL_CATALOG.replace("id = \"p2\"", "id = \"p1\"");
    std::fs::write(&path, duplicated).unwrap();

    let config = Config {
        catalog_file: Some(path.display().to_string()),
        ..Config::default()
    };
    assert!(matches!(initialize(&config), Err(MarqueeError::Catalog(_))));
}
