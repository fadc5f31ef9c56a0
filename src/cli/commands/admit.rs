//! `admit` command: simulated new-student admission

use super::{fail, find_branch, require_any, Context};
use campus_erp::core::models::Role;
use campus_erp::core::submit::{PendingControl, SimulatedSubmitter, StudentDraft, Submission};
use campus_erp::{info, verbose};

/// Admission form fields from the command line
pub struct AdmitArgs {
    pub name: String,
    pub email: String,
    pub branch: String,
    pub batch: u16,
    pub semester: u8,
}

/// Validate and submit an admission as the signed-in admin
pub fn run(ctx: &Context, args: AdmitArgs) {
    require_any(&ctx.session, &[Role::Admin]);

    // accept a branch code as well as an id
    let branch_id = find_branch(&ctx.catalog, &args.branch)
        .map_or(args.branch, |b| b.id.clone());
    let draft = StudentDraft {
        name: args.name,
        email: args.email,
        branch_id,
        batch: args.batch,
        semester: args.semester,
    };

    let submission = match draft.validate(&ctx.catalog) {
        Ok(submission) => submission,
        Err(e) => fail(&e.to_string()),
    };
    if let Submission::Student {
        roll_no, degree_id, ..
    } = &submission
    {
        verbose!("Assigned roll number {roll_no} under {degree_id}");
    }

    let submitter = SimulatedSubmitter::new(ctx.config.submit_delay());
    let mut control = PendingControl::default();
    match control.run(&submitter, &submission) {
        Some(Ok(receipt)) => {
            info!("Admission submitted: {}", receipt.reference);
            println!("✓ Submitted {} (ref {})", receipt.summary, receipt.reference);
        }
        Some(Err(e)) => fail(&format!("Submission failed: {e}")),
        None => fail("A submission is already pending"),
    }
}
