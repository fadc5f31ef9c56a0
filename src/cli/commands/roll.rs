//! `roll` command

use super::{fail, find_branch, Context};
use campus_erp::core::roll_number::{generate_roll_number, next_roll_number};
use campus_erp::verbose;

/// Print a roll number for `batch` and `branch`
pub fn run(ctx: &Context, batch: u16, branch: &str, serial: Option<u32>) {
    let Some(found) = find_branch(&ctx.catalog, branch) else {
        fail(&format!("Branch '{branch}' not found"));
    };
    if ctx.catalog.batch_by_year(batch).is_none() {
        verbose!("No batch record for {batch}; generating anyway");
    }

    let roll_no = serial.map_or_else(
        || next_roll_number(&ctx.catalog, batch, found),
        |n| generate_roll_number(batch, &found.code, n),
    );
    println!("{roll_no}");
}
