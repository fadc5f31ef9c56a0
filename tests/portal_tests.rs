//! End-to-end tests over a small catalog: sign in, gate, filter, render

use campus_erp::core::catalog::Catalog;
use campus_erp::core::filter::{apply_filters, StudentFilter};
use campus_erp::core::hierarchy::resolve_branch;
use campus_erp::core::models::Role;
use campus_erp::core::pages::{render_route, PageOptions, Rendered};
use campus_erp::core::roll_number::next_roll_number;
use campus_erp::core::routes::Route;
use campus_erp::core::session::{
    Credentials, DemoAuthenticator, DenyReason, Session, LOGIN_PATH,
};
use chrono::NaiveDate;
use std::fs;
use tempfile::TempDir;

const SMALL_CATALOG: &str = r#"
institution = "Hillside College"

[[admins]]
id = "office"
name = "Office Admin"
email = "office@hillside.edu"

[[degrees]]
id = "deg-bsc"
name = "Bachelor of Science"
code = "B.Sc"
type = "undergraduate"
duration = 3
total_semesters = 6

[[courses]]
id = "crs-sci"
degree_id = "deg-bsc"
name = "Sciences"
code = "SCI"

[[branches]]
id = "br-phy"
course_id = "crs-sci"
name = "Physics"
code = "PHY"
capacity = 30

[[branches]]
id = "br-chm"
course_id = "crs-sci"
name = "Chemistry"
code = "CHM"
capacity = 30

[[students]]
id = "s1"
roll_no = "23PHY001"
name = "Ada Lovelace"
degree_id = "deg-bsc"
branch_id = "br-phy"
semester = 3
batch = 2023
status = "active"
email = "ada@hillside.edu"
phone = ""

[[students]]
id = "s2"
roll_no = "23PHY002"
name = "Niels Bohr"
degree_id = "deg-bsc"
branch_id = "br-phy"
semester = 3
batch = 2023
status = "active"
email = "niels@hillside.edu"
phone = ""

[[students]]
id = "s3"
roll_no = "23CHM001"
name = "Marie Curie"
degree_id = "deg-bsc"
branch_id = "br-chm"
semester = 3
batch = 2023
status = "active"
email = "marie@hillside.edu"
phone = ""

[[students]]
id = "s4"
roll_no = "24CHM001"
name = "Rosalind Franklin"
degree_id = "deg-bsc"
branch_id = "br-chm"
semester = 1
batch = 2024
status = "active"
email = "rosalind@hillside.edu"
phone = ""

[[students]]
id = "s5"
roll_no = "24PHY001"
name = "Enrico Fermi"
degree_id = "deg-bsc"
branch_id = "br-phy"
semester = 1
batch = 2024
status = "inactive"
email = "enrico@hillside.edu"
phone = ""
"#;

fn load_small_catalog() -> (TempDir, Catalog) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("catalog.toml");
    fs::write(&path, SMALL_CATALOG).expect("Failed to write catalog");
    let catalog = Catalog::load(&path).expect("Failed to load catalog");
    (temp_dir, catalog)
}

fn options(search: Option<&str>, page: usize, page_size: usize) -> PageOptions {
    let mut opts = PageOptions::new(page_size, 30, NaiveDate::from_ymd_opt(2024, 11, 1).unwrap());
    opts.search = search.map(str::to_string);
    opts.page = page;
    opts
}

fn admin_session(catalog: &Catalog) -> Session {
    let mut session = Session::new();
    session
        .login(
            &DemoAuthenticator::new(catalog),
            &Credentials {
                user_id: "office".to_string(),
                password: "secret".to_string(),
                role: Role::Admin,
            },
        )
        .expect("Admin should sign in");
    session
}

#[test]
fn test_small_catalog_links_resolve() {
    let (_dir, catalog) = load_small_catalog();

    assert_eq!(catalog.validate_links(), Ok(()));
    let path = resolve_branch(&catalog, "br-chm").expect("Chemistry should resolve");
    assert_eq!(path.label(), "B.Sc / Sciences / Chemistry");
}

#[test]
fn test_search_without_hits_is_empty() {
    let (_dir, catalog) = load_small_catalog();

    let filter = StudentFilter::default().with_search(Some("zzz"));
    let result = apply_filters(&catalog.students, &filter);
    assert!(result.is_empty());
    assert_eq!(result.total, 5);

    let session = admin_session(&catalog);
    let route = Route::parse("/admin/students").unwrap();
    let rendered = render_route(&catalog, &session, &route, &options(Some("zzz"), 1, 10))
        .expect("List should render");
    let html = rendered.html().expect("Admin should see the list");
    assert!(html.contains("No matches"));
    assert!(!html.contains("<table>"));
}

#[test]
fn test_student_list_paginates() {
    let (_dir, catalog) = load_small_catalog();
    let session = admin_session(&catalog);
    let route = Route::parse("/admin/students").unwrap();

    let last = render_route(&catalog, &session, &route, &options(None, 3, 2)).unwrap();
    let html = last.html().unwrap();
    assert!(html.contains("5 record(s). Page 3 of 3"));
    assert!(html.contains("24PHY001"));
    assert!(!html.contains("23PHY001"));

    // past the end clamps to the last page
    let past = render_route(&catalog, &session, &route, &options(None, 9, 2)).unwrap();
    assert_eq!(past, last);
}

#[test]
fn test_branch_picker_follows_degree_across_pages() {
    let (_dir, catalog) = load_small_catalog();
    let session = admin_session(&catalog);
    let route = Route::parse("/admin/students").unwrap();

    let mut opts = options(None, 1, 2);
    opts.students = StudentFilter::default()
        .with_degree(Some("deg-bsc"))
        .with_branch(Some("br-chm"));

    let html = render_route(&catalog, &session, &route, &opts).unwrap();
    let html = html.html().unwrap();
    assert!(html.contains("2 record(s). Page 1 of 1"));
    assert!(html.contains("23CHM001"));
    assert!(!html.contains("23PHY001"));
    assert!(html.contains(r#"<option value="br-chm" selected>"#));
    assert!(html.contains(r#"<option value="br-phy">"#));
}

#[test]
fn test_unsigned_visitor_is_redirected() {
    let (_dir, catalog) = load_small_catalog();
    let route = Route::parse("/admin/students").unwrap();

    let rendered = render_route(&catalog, &Session::new(), &route, &options(None, 1, 10)).unwrap();
    assert_eq!(
        rendered,
        Rendered::Redirect {
            to: LOGIN_PATH,
            reason: DenyReason::Unauthenticated,
        }
    );
}

#[test]
fn test_admission_takes_next_serial() {
    let (_dir, catalog) = load_small_catalog();

    let physics = catalog.branch("br-phy").unwrap();
    assert_eq!(next_roll_number(&catalog, 2023, physics), "23PHY003");
    assert_eq!(next_roll_number(&catalog, 2025, physics), "25PHY001");
}
