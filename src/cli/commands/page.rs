//! `page` command: render a portal route to HTML

use super::{fail, Context};
use crate::args::{ListArgs, PageCriteriaArgs};
use campus_erp::core::filter::{BookFilter, EventFilter, StudentFilter, TeacherFilter};
use campus_erp::core::pages::{render_route, PageOptions, Rendered};
use campus_erp::core::routes::Route;
use campus_erp::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Render `path` and print it, or save it under the pages directory
pub fn run(ctx: &Context, path: &str, save: bool, list: ListArgs, criteria: &PageCriteriaArgs) {
    let Some(route) = Route::parse(path) else {
        fail(&format!("Unknown page: {path}"));
    };

    let mut opts = PageOptions::from_config(&ctx.config, chrono::Local::now().date_naive());
    opts.search = list.search;
    opts.page = list.page;
    apply_criteria(&mut opts, criteria);

    let html = match render_route(&ctx.catalog, &ctx.session, &route, &opts) {
        Ok(Rendered::Html(html)) => html,
        Ok(Rendered::Redirect { to, reason }) => fail(&format!("{reason}; redirected to {to}")),
        Err(e) => fail(&format!("Failed to render {route}: {e}")),
    };

    if !save {
        println!("{html}");
        return;
    }

    let dir = PathBuf::from(&ctx.config.paths.pages_dir);
    if let Err(e) = fs::create_dir_all(&dir) {
        fail(&format!(
            "Failed to create pages directory {}: {e}",
            dir.display()
        ));
    }
    let out = output_path(&dir, &route);
    debug!("Writing {route} to {}", out.display());
    if let Err(e) = fs::write(&out, html) {
        fail(&format!("Failed to write {}: {e}", out.display()));
    }
    info!("Saved {route}");
    println!("✓ Page saved: {}", out.display());
}

fn apply_criteria(opts: &mut PageOptions, criteria: &PageCriteriaArgs) {
    let status = criteria.status.map(Into::into);
    // degree first: choosing a degree resets the dependent branch
    opts.students = StudentFilter::default()
        .with_degree(criteria.degree.as_deref())
        .with_branch(criteria.branch.as_deref())
        .with_status(status);
    opts.teachers = TeacherFilter::default()
        .with_department(criteria.department.as_deref())
        .with_status(status);
    opts.events = EventFilter::default().with_range(criteria.from, criteria.to);
    opts.books = BookFilter::default()
        .with_category(criteria.category.as_deref())
        .with_stock(criteria.stock.map(Into::into));
}

/// `/admin/students/stu-001` → `<dir>/admin_students_stu-001.html`
fn output_path(dir: &Path, route: &Route) -> PathBuf {
    let name: String = route
        .path()
        .trim_matches('/')
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    dir.join(format!("{name}.html"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_flattens_route() {
        let route = Route::parse("/admin/students/stu-001").unwrap();
        let out = output_path(Path::new("/tmp/pages"), &route);
        assert_eq!(out, PathBuf::from("/tmp/pages/admin_students_stu-001.html"));
    }

    #[test]
    fn test_criteria_reach_page_options() {
        let mut opts = PageOptions::new(10, 30, chrono::NaiveDate::default());
        let criteria = PageCriteriaArgs {
            degree: Some("deg-mtech".to_string()),
            branch: Some("br-mtech-cse".to_string()),
            department: Some("dept-cse".to_string()),
            ..PageCriteriaArgs::default()
        };

        apply_criteria(&mut opts, &criteria);
        assert_eq!(opts.students.degree_id.as_deref(), Some("deg-mtech"));
        assert_eq!(opts.students.branch_id.as_deref(), Some("br-mtech-cse"));
        assert_eq!(opts.teachers.department_id.as_deref(), Some("dept-cse"));
        assert!(opts.books.category.is_none());
    }

    #[test]
    fn test_output_path_login() {
        let out = output_path(Path::new("out"), &Route::Login);
        assert_eq!(out, PathBuf::from("out/login.html"));
    }
}
