//! `dashboard` command: text version of the signed-in user's landing page

use super::{fail, require_any, Context};
use campus_erp::core::dashboard::{AdminSummary, StudentSummary, TeacherSummary};
use campus_erp::core::local_state::Inbox;
use campus_erp::core::models::{Event, Role};

/// Print the dashboard for the session's role
pub fn run(ctx: &Context) {
    let identity = require_any(&ctx.session, &Role::ALL);
    println!("\n=== {} | {} ({}) ===\n", ctx.catalog.institution, identity.name, identity.role);

    match identity.role {
        Role::Admin => admin(ctx),
        Role::Teacher => teacher(ctx, &identity.id),
        Role::Student => student(ctx, &identity.id),
    }
    print_unread(ctx, identity.role);
}

fn admin(ctx: &Context) {
    let s = AdminSummary::build(&ctx.catalog, ctx.config.library.low_stock_percent);
    println!("Students:       {} ({} active)", s.total_students, s.active_students);
    println!("Teachers:       {} ({} active)", s.total_teachers, s.active_teachers);
    println!(
        "Library:        {} low stock, {} out of stock",
        s.low_stock_books, s.out_of_stock_books
    );
    println!("Pending leave:  {}", s.pending_leave);
    println!("Notifications:  {} unread", s.unread_notifications);
    print_events(&s.upcoming_events);
}

fn teacher(ctx: &Context, id: &str) {
    let Some(s) = TeacherSummary::build(&ctx.catalog, id) else {
        fail(&format!("Teacher '{id}' not found"));
    };
    println!("Subjects:       {}", s.subjects.join(", "));
    println!("Materials:      {}", s.materials.len());
    println!("Student leave:  {} pending", s.pending_student_leave);
    println!("Notifications:  {} unread", s.unread_notifications);
    print_events(&s.upcoming_events);
}

fn student(ctx: &Context, id: &str) {
    let today = chrono::Local::now().date_naive();
    let Some(s) = StudentSummary::build(&ctx.catalog, id, today) else {
        fail(&format!("Student '{id}' not found"));
    };
    println!("Roll no:        {}", s.roll_no);
    println!("Program:        {}", s.program.as_deref().unwrap_or("-"));
    match s.attendance_percent {
        Some(p) => println!("Attendance:     {p:.1}%"),
        None => println!("Attendance:     -"),
    }
    println!("Books on loan:  {} ({} overdue)", s.loans.len(), s.overdue_loans);
    println!("Fees due:       {}", s.fees_outstanding);
    println!("Pending leave:  {}", s.pending_leave);
    if s.activities.is_empty() {
        println!("Activities:     -");
    } else {
        let names: Vec<&str> = s.activities.iter().map(|a| a.name.as_str()).collect();
        println!("Activities:     {}", names.join(", "));
    }
}

fn print_events(events: &[&Event]) {
    println!("\nUpcoming events:");
    if events.is_empty() {
        println!("  Nothing to show");
    }
    for e in events {
        println!("  {}  {} ({})", e.start_date, e.title, e.venue);
    }
}

fn print_unread(ctx: &Context, role: Role) {
    let inbox = Inbox::for_role(&ctx.catalog, role);
    if inbox.unread_count() == 0 {
        return;
    }
    println!("\nUnread notifications:");
    for n in inbox.notifications().iter().filter(|n| !n.read) {
        println!("  {}  {}: {}", n.created_on, n.title, n.message);
    }
}
