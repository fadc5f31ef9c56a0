//! List commands: students, teachers, events, library

use super::{print_listing, Context};
use crate::args::{ListArgs, StatusArg, StockArg};
use campus_erp::core::filter::{
    apply_filters, BookFilter, EventFilter, StudentFilter, TeacherFilter,
};
use campus_erp::core::hierarchy::resolve_student;
use chrono::NaiveDate;

/// Student list filters from the command line
pub struct StudentArgs {
    pub degree: Option<String>,
    pub branch: Option<String>,
    pub semester: Option<u8>,
    pub batch: Option<u16>,
    pub status: Option<StatusArg>,
}

/// Teacher list filters from the command line
pub struct TeacherArgs {
    pub department: Option<String>,
    pub designation: Option<String>,
    pub subject: Option<String>,
    pub status: Option<StatusArg>,
}

/// `students`
pub fn students(ctx: &Context, args: &StudentArgs, list: &ListArgs) {
    // branch is dependent on degree, so the degree goes first
    let filter = StudentFilter::default()
        .with_search(list.search.as_deref())
        .with_degree(args.degree.as_deref())
        .with_branch(args.branch.as_deref())
        .with_semester(args.semester)
        .with_batch(args.batch)
        .with_status(args.status.map(Into::into));

    if let Some(branch) = &filter.branch_id {
        let offered = filter.branch_options(&ctx.catalog);
        if !offered.iter().any(|b| &b.id == branch) {
            campus_erp::warn!("Branch '{branch}' is not offered under the selected degree");
        }
    }

    let result = apply_filters(&ctx.catalog.students, &filter);
    print_listing(
        &result,
        list,
        ctx.config.ui.page_size,
        &["ROLL NO", "NAME", "PROGRAM", "SEM", "STATUS"],
        |s| {
            let program = resolve_student(&ctx.catalog, s)
                .map_or_else(|| "-".to_string(), |p| p.label());
            vec![
                s.roll_no.clone(),
                s.name.clone(),
                program,
                s.semester.to_string(),
                s.status.to_string(),
            ]
        },
    );
}

/// `teachers`
pub fn teachers(ctx: &Context, args: &TeacherArgs, list: &ListArgs) {
    let filter = TeacherFilter::default()
        .with_search(list.search.as_deref())
        .with_department(args.department.as_deref())
        .with_designation(args.designation.as_deref())
        .with_subject(args.subject.as_deref())
        .with_status(args.status.map(Into::into));

    let result = apply_filters(&ctx.catalog.teachers, &filter);
    print_listing(
        &result,
        list,
        ctx.config.ui.page_size,
        &["EMP ID", "NAME", "DEPARTMENT", "DESIGNATION", "SUBJECTS"],
        |t| {
            let department = ctx
                .catalog
                .department(&t.department_id)
                .map_or_else(|| "-".to_string(), |d| d.code.clone());
            vec![
                t.employee_id.clone(),
                t.name.clone(),
                department,
                t.designation.clone(),
                t.subjects.join(", "),
            ]
        },
    );
}

/// `events`
pub fn events(ctx: &Context, from: Option<NaiveDate>, to: Option<NaiveDate>, list: &ListArgs) {
    let filter = EventFilter::default()
        .with_search(list.search.as_deref())
        .with_range(from, to);

    let result = apply_filters(&ctx.catalog.events, &filter);
    print_listing(
        &result,
        list,
        ctx.config.ui.page_size,
        &["TITLE", "TYPE", "FROM", "TO", "VENUE", "STATUS"],
        |e| {
            vec![
                e.title.clone(),
                e.event_type.to_string(),
                e.start_date.to_string(),
                e.end_date.to_string(),
                e.venue.clone(),
                e.status.to_string(),
            ]
        },
    );
}

/// `library`
pub fn library(ctx: &Context, category: Option<&str>, stock: Option<StockArg>, list: &ListArgs) {
    let threshold = ctx.config.library.low_stock_percent;
    let filter = BookFilter::default()
        .with_threshold(threshold)
        .with_search(list.search.as_deref())
        .with_category(category)
        .with_stock(stock.map(Into::into));

    let result = apply_filters(&ctx.catalog.books, &filter);
    print_listing(
        &result,
        list,
        ctx.config.ui.page_size,
        &["ISBN", "TITLE", "AUTHOR", "CATEGORY", "COPIES", "STOCK"],
        |b| {
            vec![
                b.isbn.clone(),
                b.title.clone(),
                b.author.clone(),
                b.category.clone(),
                format!("{}/{}", b.available_copies, b.total_copies),
                b.stock_status(threshold).to_string(),
            ]
        },
    );
}
