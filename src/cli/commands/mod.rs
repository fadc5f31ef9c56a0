//! CLI command handlers for `campuserp`.
//!
//! Each command is implemented in its own submodule. Handlers print results
//! to stdout and failures to stderr prefixed with `✗`.

pub mod academics;
pub mod admit;
pub mod config;
pub mod dashboard;
pub mod leave;
pub mod lists;
pub mod page;
pub mod roll;

use crate::args::ListArgs;
use campus_erp::config::Config;
use campus_erp::core::catalog::Catalog;
use campus_erp::core::filter::{paginate, FilterResult};
use campus_erp::core::models::{Branch, Role};
use campus_erp::core::session::{require_role, DenyReason, Gate, Identity, Session};
use campus_erp::error;

/// Everything a handler needs for one run
pub struct Context {
    /// Effective configuration (file + CLI overrides)
    pub config: Config,
    /// Reference data
    pub catalog: Catalog,
    /// Signed-in user, if `--user` was given
    pub session: Session,
}

/// Print `message` to stderr and exit with status 1
pub fn fail(message: &str) -> ! {
    error!("{message}");
    eprintln!("✗ {message}");
    std::process::exit(1);
}

/// Branch by id or by code
pub fn find_branch<'a>(catalog: &'a Catalog, id_or_code: &str) -> Option<&'a Branch> {
    catalog
        .branch(id_or_code)
        .or_else(|| catalog.branch_by_code(id_or_code))
}

/// Require one of `roles`, or exit with the gate's reason
pub fn require_any<'a>(session: &'a Session, roles: &[Role]) -> &'a Identity {
    admit_any(session, roles).unwrap_or_else(|message| fail(&message))
}

/// First role in `roles` whose gate admits the session
fn admit_any<'a>(session: &'a Session, roles: &[Role]) -> Result<&'a Identity, String> {
    let mut refused = None;
    for &role in roles {
        match require_role(session, role) {
            Gate::Allow(identity) => return Ok(identity),
            Gate::Redirect { to, reason } => refused = Some((to, reason)),
        }
    }
    match refused {
        Some((_, DenyReason::WrongRole { actual, .. })) => {
            let allowed: Vec<&str> = roles.iter().map(|r| r.as_str()).collect();
            Err(format!(
                "This command needs one of: {} (signed in as {actual})",
                allowed.join(", ")
            ))
        }
        Some((to, reason)) => Err(format!("{reason}; sign in at {to}")),
        None => Err("This command admits no role".to_string()),
    }
}

fn print_row<S: AsRef<str>>(cells: &[S], widths: &[usize]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell.as_ref()))
        .collect();
    println!("{}", padded.join("  ").trim_end());
}

/// Print rows as an aligned text table
pub fn print_table(columns: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    print_row(columns, &widths);
    print_row(&rule, &widths);
    for row in rows {
        print_row(row, &widths);
    }
}

/// Print one page of a filter result, or the empty state
pub fn print_listing<T, F>(
    result: &FilterResult<'_, T>,
    list: &ListArgs,
    page_size: usize,
    columns: &[&str],
    to_row: F,
) where
    F: Fn(&T) -> Vec<String>,
{
    if result.is_empty() {
        println!("No matches");
        return;
    }

    let rows: Vec<Vec<String>> = result.iter().map(to_row).collect();
    let page = paginate(&rows, list.page, page_size);
    print_table(columns, &page.items);
    println!(
        "\n{} of {} record(s), page {} of {}",
        result.len(),
        result.total,
        page.number,
        page.total_pages
    );
}
