use doctor_locator::app::{handle_event, Event, ViewMode, ViewportWidth};
use doctor_locator::search::{DirectorySearch, SearchProvider, SearchQuery};
use doctor_locator::storage::JsonDirectory;
use doctor_locator::{initialize, Config, Doctor, LocatorError, Result};
use futures::executor::block_on;
use futures_util::future::{BoxFuture, FutureExt};
use std::collections::BTreeMap;
use std::rc::Rc;
use tempfile::TempDir;

struct Rejecting;

impl SearchProvider for Rejecting {
    fn search<'a>(&'a self, _query: &'a SearchQuery) -> BoxFuture<'a, Result<Vec<Doctor>>> {
        async { Err(LocatorError::Search("503 from directory service".to_string())) }.boxed()
    }
}

fn ten_doctors() -> Vec<Doctor> {
    (0..10)
        .map(|i| {
            Doctor::new(format!("Dr. {i}"), if i % 2 == 0 { "Cardiology" } else { "Oncology" })
                .with_phone(format!("555 01{i:02}"))
        })
        .collect()
}

#[test]
fn rejected_search_renders_empty_state() {
    let mut block = initialize(&Config::default(), Rejecting, ViewportWidth::new(1280));
    block_on(block.initialize(&SearchQuery::default()));

    assert!(block.items().is_empty());
    assert_eq!(block.state().total_count(), 0);
    let html = block.html();
    assert!(html.contains("No results found"));
    assert!(html.contains("0 doctors found"));
}

#[test]
fn directory_file_feeds_the_block() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doctors.json");
    let mut directory = JsonDirectory::open(&path).unwrap();
    directory.replace(&ten_doctors());
    directory.save().unwrap();

    let search = DirectorySearch::from_source(&JsonDirectory::open(&path).unwrap()).unwrap();
    let mut block = initialize(&Config::default(), search, ViewportWidth::new(1280));
    block_on(block.initialize(&SearchQuery::default().with_specialty("oncology")));

    assert_eq!(block.items().len(), 5);
    assert!(block.html().contains(r#"href="tel:5550101""#));
}

#[test]
fn filter_then_page_through_grid() {
    let mut rows = BTreeMap::new();
    rows.insert("Page Size Desktop".to_string(), "1".to_string());
    let config = Config::from_block(&rows);

    let search = DirectorySearch::new(vec![
        Doctor::new("A", "X"),
        Doctor::new("B", "Y"),
        Doctor::new("C", "X"),
    ]);
    let mut block = initialize(&config, search, config.viewport(1280));
    block_on(block.initialize(&SearchQuery::default()));

    handle_event(&mut block, &Event::SelectFilter("X".to_string()));
    assert_eq!(block.state().total_count(), 2);
    let names: Vec<&str> = block.state().visible_slice().into_iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["A", "C"]);

    handle_event(&mut block, &Event::SetViewMode(ViewMode::Grid));
    handle_event(&mut block, &Event::NextPage);
    let list = block.list_html();
    assert!(list.contains(">C<") && !list.contains(">A<"));
    assert!(block.pagination_html().contains("Page 2 of 2"));
}

#[test]
fn shrinking_viewport_resets_page_once() {
    let viewport = Rc::new(ViewportWidth::new(1280));
    let mut block = initialize(
        &Config::default(),
        DirectorySearch::new(ten_doctors()),
        Rc::clone(&viewport),
    );
    block_on(block.initialize(&SearchQuery::default()));
    handle_event(&mut block, &Event::SetViewMode(ViewMode::Grid));
    handle_event(&mut block, &Event::NextPage);
    assert_eq!(block.state().page_index(), 1);

    let renders_before = block.list_renders();
    viewport.set_width(800);
    assert!(handle_event(&mut block, &Event::ViewportChanged));

    assert_eq!(block.state().page_size(), 5);
    assert_eq!(block.state().page_index(), 0);
    assert_eq!(block.list_renders(), renders_before + 1);
    assert!(block.html().contains(r#"<nav class="find-a-doctor-pagination" hidden></nav>"#));
}
