//! `academics` command: degree → course → branch lookups

use super::{fail, find_branch, print_table, Context};
use crate::args::AcademicsSubcommand;
use campus_erp::core::hierarchy::{
    branches_by_course, branches_by_degree, courses_by_degree, resolve_branch,
};
use campus_erp::core::models::Branch;

/// Dispatch academics subcommands
pub fn run(ctx: &Context, subcommand: AcademicsSubcommand) {
    match subcommand {
        AcademicsSubcommand::Resolve { branch } => resolve(ctx, &branch),
        AcademicsSubcommand::Courses { degree_id } => courses(ctx, &degree_id),
        AcademicsSubcommand::Branches { course, degree } => {
            branches(ctx, course.as_deref(), degree.as_deref());
        }
        AcademicsSubcommand::Tree => tree(ctx),
    }
}

fn resolve(ctx: &Context, branch: &str) {
    let Some(found) = find_branch(&ctx.catalog, branch) else {
        fail(&format!("Branch '{branch}' not found"));
    };
    match resolve_branch(&ctx.catalog, &found.id) {
        Some(path) => {
            println!("{}", path.label());
            println!("  degree: {} ({})", path.degree.name, path.degree.id);
            println!("  course: {} ({})", path.course.name, path.course.id);
            println!("  branch: {} ({})", path.branch.name, path.branch.id);
        }
        None => fail(&format!(
            "Branch '{}' does not link to a known course and degree",
            found.id
        )),
    }
}

fn courses(ctx: &Context, degree_id: &str) {
    if ctx.catalog.degree(degree_id).is_none() {
        fail(&format!("Degree '{degree_id}' not found"));
    }
    let rows: Vec<Vec<String>> = courses_by_degree(&ctx.catalog, degree_id)
        .into_iter()
        .map(|c| vec![c.id.clone(), c.code.clone(), c.name.clone()])
        .collect();
    if rows.is_empty() {
        println!("No matches");
    } else {
        print_table(&["ID", "CODE", "NAME"], &rows);
    }
}

fn branches(ctx: &Context, course: Option<&str>, degree: Option<&str>) {
    let found: Vec<&Branch> = match (course, degree) {
        (Some(course_id), _) => branches_by_course(&ctx.catalog, course_id),
        (None, Some(degree_id)) => branches_by_degree(&ctx.catalog, degree_id),
        (None, None) => ctx.catalog.branches.iter().collect(),
    };
    if found.is_empty() {
        println!("No matches");
        return;
    }
    let rows: Vec<Vec<String>> = found
        .into_iter()
        .map(|b| {
            vec![
                b.id.clone(),
                b.code.clone(),
                b.name.clone(),
                b.capacity.to_string(),
            ]
        })
        .collect();
    print_table(&["ID", "CODE", "NAME", "CAPACITY"], &rows);
}

fn tree(ctx: &Context) {
    for degree in &ctx.catalog.degrees {
        println!("{} - {} ({})", degree.code, degree.name, degree.degree_type);
        for course in courses_by_degree(&ctx.catalog, &degree.id) {
            println!("  {} - {}", course.code, course.name);
            for branch in branches_by_course(&ctx.catalog, &course.id) {
                println!("    {} - {} [{}]", branch.code, branch.name, branch.capacity);
            }
        }
    }
}
