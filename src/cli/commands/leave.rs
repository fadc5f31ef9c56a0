//! `leave` command: list, apply, review

use super::{fail, print_listing, require_any, Context};
use crate::args::LeaveSubcommand;
use campus_erp::core::filter::{apply_filters, LeaveFilter};
use campus_erp::core::local_state::LeaveQueue;
use campus_erp::core::models::{LeaveKind, Role};
use campus_erp::core::submit::{LeaveDraft, PendingControl, SimulatedSubmitter};
use campus_erp::{info, verbose};
use chrono::NaiveDate;

/// Dispatch leave subcommands
pub fn run(ctx: &Context, subcommand: LeaveSubcommand) {
    match subcommand {
        LeaveSubcommand::List {
            status,
            applicant_role,
            list,
        } => {
            let filter = LeaveFilter::default()
                .with_search(list.search.as_deref())
                .with_status(status.map(Into::into))
                .with_role(applicant_role.map(Into::into));
            let result = apply_filters(&ctx.catalog.leave_requests, &filter);
            print_listing(
                &result,
                &list,
                ctx.config.ui.page_size,
                &["ID", "APPLICANT", "ROLE", "KIND", "FROM", "TO", "DAYS", "STATUS"],
                |l| {
                    vec![
                        l.id.clone(),
                        ctx.catalog
                            .applicant_name(l)
                            .unwrap_or(l.applicant_id.as_str())
                            .to_string(),
                        l.applicant_role.to_string(),
                        l.kind.to_string(),
                        l.from.to_string(),
                        l.to.to_string(),
                        l.days().to_string(),
                        l.status.to_string(),
                    ]
                },
            );
        }
        LeaveSubcommand::Apply {
            kind,
            from,
            to,
            reason,
        } => apply(ctx, kind.into(), from, to, reason),
        LeaveSubcommand::Review {
            id,
            approve,
            reject: _,
        } => review(ctx, &id, approve),
    }
}

fn apply(ctx: &Context, kind: LeaveKind, from: NaiveDate, to: NaiveDate, reason: String) {
    let identity = require_any(&ctx.session, &[Role::Student, Role::Teacher]);
    let draft = LeaveDraft {
        applicant_id: identity.id.clone(),
        applicant_role: identity.role,
        kind,
        from,
        to,
        reason,
    };

    let submission = match draft.validate() {
        Ok(submission) => submission,
        Err(e) => fail(&e.to_string()),
    };

    let submitter = SimulatedSubmitter::new(ctx.config.submit_delay());
    verbose!("Submitting (simulated, {:?})...", submitter.delay());
    let mut control = PendingControl::default();
    match control.run(&submitter, &submission) {
        Some(Ok(receipt)) => {
            info!("Leave submitted: {}", receipt.reference);
            println!("✓ Submitted {} (ref {})", receipt.summary, receipt.reference);
        }
        Some(Err(e)) => fail(&format!("Submission failed: {e}")),
        None => fail("A submission is already pending"),
    }
}

fn review(ctx: &Context, id: &str, approve: bool) {
    let identity = require_any(&ctx.session, &[Role::Admin, Role::Teacher]);
    let mut queue = match identity.role {
        Role::Teacher => LeaveQueue::for_applicants(&ctx.catalog, Role::Student),
        Role::Admin | Role::Student => LeaveQueue::from_catalog(&ctx.catalog),
    };

    let outcome = if approve {
        queue.approve(id)
    } else {
        queue.reject(id)
    };
    match outcome {
        Ok(request) => {
            info!("{} set {} to {}", identity.id, request.id, request.status);
            println!("✓ {} is now {}", request.id, request.status);
            println!("  {} pending request(s) left", queue.pending_count());
        }
        Err(e) => fail(&e.to_string()),
    }
}
