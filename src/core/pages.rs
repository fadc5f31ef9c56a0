//! HTML pages for each route
//!
//! Every section page passes through [`require_role`] first. A refused gate
//! yields [`Rendered::Redirect`] and no markup at all.

use super::catalog::Catalog;
use super::config::Config;
use super::dashboard::{AdminSummary, StudentSummary, TeacherSummary};
use super::filter::{
    apply_filters, paginate, ActivityFilter, BookFilter, EventFilter, FeeFilter, LeaveFilter,
    MaterialFilter, Page, StudentFilter, TeacherFilter,
};
use super::hierarchy::{branches_by_course, courses_by_degree, resolve_branch, resolve_student};
use super::models::{attendance_percentage, Role, Status, StockStatus, Student, Teacher};
use super::routes::{Route, View};
use super::session::{require_role, DenyReason, Gate, Identity, Session};
use askama::Template;
use chrono::NaiveDate;

/// Outcome of rendering a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// Finished HTML document
    Html(String),
    /// The gate refused; nothing was rendered
    Redirect {
        /// Where to send the caller
        to: &'static str,
        /// Why
        reason: DenyReason,
    },
}

impl Rendered {
    /// The document, if one was rendered
    #[must_use]
    pub fn html(&self) -> Option<&str> {
        match self {
            Self::Html(html) => Some(html),
            Self::Redirect { .. } => None,
        }
    }
}

/// Per-request rendering options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    /// List search text
    pub search: Option<String>,
    /// 1-based list page
    pub page: usize,
    /// Rows per list page
    pub page_size: usize,
    /// Threshold for the library stock column
    pub low_stock_percent: u8,
    /// Reference day for overdue loans
    pub today: NaiveDate,
    /// Student list criteria; the search text comes from `search`
    pub students: StudentFilter,
    /// Faculty list criteria
    pub teachers: TeacherFilter,
    /// Event calendar criteria
    pub events: EventFilter,
    /// Library criteria; the threshold comes from `low_stock_percent`
    pub books: BookFilter,
}

impl PageOptions {
    /// First page, no search, no list criteria
    #[must_use]
    pub fn new(page_size: usize, low_stock_percent: u8, today: NaiveDate) -> Self {
        Self {
            search: None,
            page: 1,
            page_size,
            low_stock_percent,
            today,
            students: StudentFilter::default(),
            teachers: TeacherFilter::default(),
            events: EventFilter::default(),
            books: BookFilter::default(),
        }
    }

    /// Options from the configured page size and stock threshold
    #[must_use]
    pub fn from_config(config: &Config, today: NaiveDate) -> Self {
        Self::new(config.ui.page_size, config.library.low_stock_percent, today)
    }
}

/// Navigation entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    /// Link text
    pub label: &'static str,
    /// Target path
    pub path: String,
}

/// Shared page header data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chrome {
    /// Institution name
    pub institution: String,
    /// Page heading
    pub title: String,
    /// Signed-in user, empty on the login page
    pub user: String,
    /// Role of the signed-in user
    pub role: String,
    /// Section navigation
    pub nav: Vec<NavLink>,
}

const NAV: [(View, &str); 11] = [
    (View::Dashboard, "Dashboard"),
    (View::Students, "Students"),
    (View::Teachers, "Faculty"),
    (View::Events, "Events"),
    (View::Library, "Library"),
    (View::Leave, "Leave"),
    (View::Academics, "Academics"),
    (View::Attendance, "Attendance"),
    (View::Materials, "Materials"),
    (View::Activities, "Activities"),
    (View::Fees, "Fees"),
];

impl Chrome {
    fn new(catalog: &Catalog, identity: &Identity, title: impl Into<String>) -> Self {
        let nav = NAV
            .into_iter()
            .filter_map(|(view, label)| {
                Route::section(identity.role, view).map(|route| NavLink {
                    label,
                    path: route.path(),
                })
            })
            .collect();

        Self {
            institution: catalog.institution.clone(),
            title: title.into(),
            user: identity.name.clone(),
            role: identity.role.to_string(),
            nav,
        }
    }
}

/// One table row; `link` is empty when the row has no detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Detail page path
    pub link: String,
    /// Cell text
    pub cells: Vec<String>,
}

impl Row {
    fn plain(cells: Vec<String>) -> Self {
        Self {
            link: String::new(),
            cells,
        }
    }

    fn linked(route: Option<Route>, cells: Vec<String>) -> Self {
        Self {
            link: route.map(|r| r.path()).unwrap_or_default(),
            cells,
        }
    }
}

/// One choice in a picker
#[derive(Debug, Clone, PartialEq, Eq)]
struct Choice {
    value: String,
    label: String,
    selected: bool,
}

/// A `<select>` in the list filter form
#[derive(Debug, Clone, PartialEq, Eq)]
struct Picker {
    name: &'static str,
    label: &'static str,
    choices: Vec<Choice>,
}

impl Picker {
    fn new<I>(name: &'static str, label: &'static str, current: Option<&str>, choices: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let choices = choices
            .into_iter()
            .map(|(value, label)| Choice {
                selected: current == Some(value.as_str()),
                value,
                label,
            })
            .collect();
        Self {
            name,
            label,
            choices,
        }
    }
}

/// Filter form state carried by a list page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Controls {
    pickers: Vec<Picker>,
    /// Query parameters repeated on the pager links
    query: Vec<(&'static str, String)>,
}

impl Controls {
    fn param(mut self, key: &'static str, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.query.push((key, value));
        }
        self
    }

    fn picker(mut self, picker: Picker) -> Self {
        self.pickers.push(picker);
        self
    }
}

/// Filterable, paginated table
#[derive(Template)]
#[template(path = "list.html")]
pub struct ListPage {
    chrome: Chrome,
    columns: Vec<&'static str>,
    search: String,
    pickers: Vec<Picker>,
    query: Vec<(&'static str, String)>,
    total: usize,
    page: Page<Row>,
}

/// Single record
#[derive(Template)]
#[template(path = "detail.html")]
pub struct DetailPage {
    chrome: Chrome,
    heading: String,
    fields: Vec<(&'static str, String)>,
    back: String,
}

/// Fallback for an id that matches nothing
#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundPage {
    chrome: Chrome,
    what: &'static str,
    back: String,
}

/// Role landing page
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    chrome: Chrome,
    cards: Vec<(&'static str, String)>,
    items_heading: &'static str,
    items: Vec<String>,
}

/// Sign-in form
#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage {
    chrome: Chrome,
    roles: Vec<&'static str>,
}

/// Render `route` for `session`
///
/// # Errors
/// Returns the template engine's error if a page fails to render
pub fn render_route(
    catalog: &Catalog,
    session: &Session,
    route: &Route,
    opts: &PageOptions,
) -> askama::Result<Rendered> {
    let Route::Section { role, view } = route else {
        return render_login(catalog).map(Rendered::Html);
    };

    let identity = match require_role(session, *role) {
        Gate::Allow(identity) => identity,
        Gate::Redirect { to, reason } => {
            crate::debug!("Redirecting {route} to {to}: {reason}");
            return Ok(Rendered::Redirect { to, reason });
        }
    };

    crate::verbose!("Rendering {route} for {}", identity.id);
    let renderer = Renderer {
        catalog,
        identity,
        opts,
    };
    renderer.render(view).map(Rendered::Html)
}

fn render_login(catalog: &Catalog) -> askama::Result<String> {
    LoginPage {
        chrome: Chrome {
            institution: catalog.institution.clone(),
            title: "Sign in".to_string(),
            user: String::new(),
            role: String::new(),
            nav: Vec::new(),
        },
        roles: Role::ALL.into_iter().map(Role::as_str).collect(),
    }
    .render()
}

fn status_picker(current: Option<&str>) -> Picker {
    let choices = [Status::Active, Status::Inactive].map(|s| (s.to_string(), s.to_string()));
    Picker::new("status", "statuses", current, choices)
}

fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

fn percent(value: Option<f32>) -> String {
    value.map_or_else(|| "n/a".to_string(), |p| format!("{p:.1}%"))
}

/// Dashboard cards, list heading, list items
type Cards = (Vec<(&'static str, String)>, &'static str, Vec<String>);

struct Renderer<'a> {
    catalog: &'a Catalog,
    identity: &'a Identity,
    opts: &'a PageOptions,
}

impl Renderer<'_> {
    fn role(&self) -> Role {
        self.identity.role
    }

    fn search(&self) -> Option<&str> {
        self.opts.search.as_deref()
    }

    fn back_to(&self, view: View) -> String {
        Route::section(self.role(), view)
            .unwrap_or_else(|| Route::home(self.role()))
            .path()
    }

    fn render(&self, view: &View) -> askama::Result<String> {
        match view {
            View::Dashboard => self.dashboard(),
            View::Students => self.students(),
            View::Student(id) => self.student(id),
            View::Teachers => self.teachers(),
            View::Teacher(id) => self.teacher(id),
            View::Events => self.events(),
            View::Library => self.library(),
            View::Leave => self.leave(),
            View::Academics => self.academics(),
            View::Attendance => self.attendance(),
            View::Materials => self.materials(),
            View::Activities => self.activities(),
            View::Fees => self.fees(),
        }
    }

    fn list(&self, title: &str, columns: Vec<&'static str>, rows: &[Row]) -> askama::Result<String> {
        self.list_with(title, columns, rows, self.search_controls())
    }

    fn list_with(
        &self,
        title: &str,
        columns: Vec<&'static str>,
        rows: &[Row],
        controls: Controls,
    ) -> askama::Result<String> {
        ListPage {
            chrome: Chrome::new(self.catalog, self.identity, title),
            columns,
            search: self.search().unwrap_or_default().to_string(),
            pickers: controls.pickers,
            query: controls.query,
            total: rows.len(),
            page: paginate(rows, self.opts.page, self.opts.page_size),
        }
        .render()
    }

    fn search_controls(&self) -> Controls {
        Controls::default().param("q", self.search().map(str::to_string))
    }

    fn not_found(&self, title: &str, what: &'static str, back: View) -> askama::Result<String> {
        NotFoundPage {
            chrome: Chrome::new(self.catalog, self.identity, title),
            what,
            back: self.back_to(back),
        }
        .render()
    }

    fn dashboard(&self) -> askama::Result<String> {
        let summary = match self.role() {
            Role::Admin => Some(self.admin_cards()),
            Role::Teacher => self.teacher_cards(),
            Role::Student => self.student_cards(),
        };
        let Some((cards, items_heading, items)) = summary else {
            let what = if self.role() == Role::Teacher { "Teacher" } else { "Student" };
            return self.not_found("Dashboard", what, View::Dashboard);
        };

        DashboardPage {
            chrome: Chrome::new(
                self.catalog,
                self.identity,
                format!("Welcome, {}", self.identity.name),
            ),
            cards,
            items_heading,
            items,
        }
        .render()
    }

    fn admin_cards(&self) -> Cards {
        let s = AdminSummary::build(self.catalog, self.opts.low_stock_percent);
        let cards = vec![
            ("Students", format!("{} ({} active)", s.total_students, s.active_students)),
            ("Faculty", format!("{} ({} active)", s.total_teachers, s.active_teachers)),
            ("Low-stock titles", s.low_stock_books.to_string()),
            ("Out-of-stock titles", s.out_of_stock_books.to_string()),
            ("Pending leave", s.pending_leave.to_string()),
            ("Unread notifications", s.unread_notifications.to_string()),
        ];
        let events = s
            .upcoming_events
            .iter()
            .map(|e| format!("{} ({}, {})", e.title, e.start_date, e.venue))
            .collect();
        (cards, "Upcoming events", events)
    }

    fn teacher_cards(&self) -> Option<Cards> {
        let s = TeacherSummary::build(self.catalog, &self.identity.id)?;
        let cards = vec![
            ("Subjects", s.subjects.join(", ")),
            ("Materials shared", s.materials.len().to_string()),
            ("Student leave to review", s.pending_student_leave.to_string()),
            ("Unread notifications", s.unread_notifications.to_string()),
        ];
        let events = s
            .upcoming_events
            .iter()
            .map(|e| format!("{} ({})", e.title, e.start_date))
            .collect();
        Some((cards, "Upcoming events", events))
    }

    fn student_cards(&self) -> Option<Cards> {
        let s = StudentSummary::build(self.catalog, &self.identity.id, self.opts.today)?;
        let cards = vec![
            ("Roll number", s.roll_no.to_string()),
            ("Program", or_dash(s.program.as_deref())),
            ("Attendance", percent(s.attendance_percent)),
            ("Books on loan", format!("{} ({} overdue)", s.loans.len(), s.overdue_loans)),
            ("Fees outstanding", s.fees_outstanding.to_string()),
            ("Pending leave", s.pending_leave.to_string()),
        ];
        let activities = s.activities.iter().map(|a| a.name.clone()).collect();
        Some((cards, "Activities", activities))
    }

    fn student_row(&self, s: &Student) -> Row {
        let branch = self.catalog.branch(&s.branch_id).map(|b| b.code.as_str());
        Row::linked(
            Route::section(self.role(), View::Student(s.id.clone())),
            vec![
                s.roll_no.clone(),
                s.name.clone(),
                or_dash(branch),
                s.semester.to_string(),
                s.batch.to_string(),
                s.status.to_string(),
            ],
        )
    }

    fn students(&self) -> askama::Result<String> {
        let filter = self.opts.students.clone().with_search(self.search());
        let rows: Vec<Row> = apply_filters(&self.catalog.students, &filter)
            .iter()
            .map(|s| self.student_row(s))
            .collect();

        let degrees = self
            .catalog
            .degrees
            .iter()
            .map(|d| (d.id.clone(), d.code.clone()));
        // branch choices depend on the selected degree
        let branches = filter
            .branch_options(self.catalog)
            .into_iter()
            .map(|b| (b.id.clone(), b.name.clone()));
        let status = filter.status.map(|s| s.to_string());
        let controls = self
            .search_controls()
            .param("degree", filter.degree_id.clone())
            .param("branch", filter.branch_id.clone())
            .param("semester", filter.semester.map(|n| n.to_string()))
            .param("batch", filter.batch.map(|y| y.to_string()))
            .param("status", status.clone())
            .picker(Picker::new("degree", "degrees", filter.degree_id.as_deref(), degrees))
            .picker(Picker::new("branch", "branches", filter.branch_id.as_deref(), branches))
            .picker(status_picker(status.as_deref()));

        self.list_with(
            "Students",
            vec!["Roll No", "Name", "Branch", "Semester", "Batch", "Status"],
            &rows,
            controls,
        )
    }

    fn student(&self, id: &str) -> askama::Result<String> {
        let Some(s) = self.catalog.student(id) else {
            return self.not_found("Students", "Student", View::Students);
        };

        let program = resolve_student(self.catalog, s).map(|p| p.label());
        let fees: u32 = self.catalog.fees_of(&s.id).map(|f| f.balance()).sum();
        DetailPage {
            chrome: Chrome::new(self.catalog, self.identity, "Students"),
            heading: s.name.clone(),
            fields: vec![
                ("Roll number", s.roll_no.clone()),
                ("Program", or_dash(program.as_deref())),
                ("Semester", s.semester.to_string()),
                ("Batch", s.batch.to_string()),
                ("Status", s.status.to_string()),
                ("Email", s.email.clone()),
                ("Phone", or_dash(Some(s.phone.as_str()).filter(|p| !p.is_empty()))),
                ("Attendance", percent(attendance_percentage(self.catalog.attendance_of(&s.id)))),
                ("Fees outstanding", fees.to_string()),
            ],
            back: self.back_to(View::Students),
        }
        .render()
    }

    fn teacher_row(&self, t: &Teacher) -> Row {
        let department = self.catalog.department(&t.department_id).map(|d| d.code.as_str());
        Row::linked(
            Route::section(self.role(), View::Teacher(t.id.clone())),
            vec![
                t.employee_id.clone(),
                t.name.clone(),
                or_dash(department),
                t.designation.clone(),
                t.subjects.join(", "),
                t.status.to_string(),
            ],
        )
    }

    fn teachers(&self) -> askama::Result<String> {
        let filter = self.opts.teachers.clone().with_search(self.search());
        let rows: Vec<Row> = apply_filters(&self.catalog.teachers, &filter)
            .iter()
            .map(|t| self.teacher_row(t))
            .collect();

        let departments = self
            .catalog
            .departments
            .iter()
            .map(|d| (d.id.clone(), d.name.clone()));
        let status = filter.status.map(|s| s.to_string());
        let controls = self
            .search_controls()
            .param("department", filter.department_id.clone())
            .param("designation", filter.designation.clone())
            .param("subject", filter.subject.clone())
            .param("status", status.clone())
            .picker(Picker::new(
                "department",
                "departments",
                filter.department_id.as_deref(),
                departments,
            ))
            .picker(status_picker(status.as_deref()));

        self.list_with(
            "Faculty",
            vec!["Employee ID", "Name", "Department", "Designation", "Subjects", "Status"],
            &rows,
            controls,
        )
    }

    fn teacher(&self, id: &str) -> askama::Result<String> {
        let Some(t) = self.catalog.teacher(id) else {
            return self.not_found("Faculty", "Teacher", View::Teachers);
        };

        let department = self.catalog.department(&t.department_id).map(|d| d.name.as_str());
        DetailPage {
            chrome: Chrome::new(self.catalog, self.identity, "Faculty"),
            heading: t.name.clone(),
            fields: vec![
                ("Employee ID", t.employee_id.clone()),
                ("Department", or_dash(department)),
                ("Designation", t.designation.clone()),
                ("Subjects", t.subjects.join(", ")),
                ("Status", t.status.to_string()),
                ("Email", t.email.clone()),
            ],
            back: self.back_to(View::Teachers),
        }
        .render()
    }

    fn events(&self) -> askama::Result<String> {
        let filter = self.opts.events.clone().with_search(self.search());
        let rows: Vec<Row> = apply_filters(&self.catalog.events, &filter)
            .iter()
            .map(|e| {
                let dates = if e.start_date == e.end_date {
                    e.start_date.to_string()
                } else {
                    format!("{} to {}", e.start_date, e.end_date)
                };
                Row::plain(vec![
                    e.title.clone(),
                    e.event_type.to_string(),
                    dates,
                    e.venue.clone(),
                    e.status.to_string(),
                ])
            })
            .collect();
        let controls = self
            .search_controls()
            .param("from", filter.from.map(|d| d.to_string()))
            .param("to", filter.to.map(|d| d.to_string()));
        self.list_with(
            "Events",
            vec!["Title", "Type", "Dates", "Venue", "Status"],
            &rows,
            controls,
        )
    }

    fn library(&self) -> askama::Result<String> {
        let filter = self
            .opts
            .books
            .clone()
            .with_search(self.search())
            .with_threshold(self.opts.low_stock_percent);
        let rows: Vec<Row> = apply_filters(&self.catalog.books, &filter)
            .iter()
            .map(|b| {
                Row::plain(vec![
                    b.title.clone(),
                    b.author.clone(),
                    b.category.clone(),
                    format!("{}/{}", b.available_copies, b.total_copies),
                    b.stock_status(self.opts.low_stock_percent).to_string(),
                ])
            })
            .collect();
        let mut categories: Vec<&str> = self.catalog.books.iter().map(|b| b.category.as_str()).collect();
        categories.sort_unstable();
        categories.dedup();
        let stock = filter.stock.map(|s| s.to_string());
        let stock_choices = [StockStatus::Available, StockStatus::LowStock, StockStatus::OutOfStock]
            .map(|s| (s.to_string(), s.to_string()));
        let controls = self
            .search_controls()
            .param("category", filter.category.clone())
            .param("stock", stock.clone())
            .picker(Picker::new(
                "category",
                "categories",
                filter.category.as_deref(),
                categories.into_iter().map(|c| (c.to_string(), c.to_string())),
            ))
            .picker(Picker::new("stock", "stock levels", stock.as_deref(), stock_choices));

        self.list_with(
            "Library",
            vec!["Title", "Author", "Category", "Available", "Stock"],
            &rows,
            controls,
        )
    }

    fn leave(&self) -> askama::Result<String> {
        let filter = LeaveFilter::default().with_search(self.search());
        let filter = match self.role() {
            Role::Admin => filter,
            // teachers review student requests
            Role::Teacher => filter.with_role(Some(Role::Student)),
            Role::Student => filter.with_applicant(Some(self.identity.id.as_str())),
        };

        let rows: Vec<Row> = apply_filters(&self.catalog.leave_requests, &filter)
            .iter()
            .map(|l| {
                Row::plain(vec![
                    or_dash(self.catalog.applicant_name(l)),
                    l.kind.to_string(),
                    l.from.to_string(),
                    l.to.to_string(),
                    l.days().to_string(),
                    l.status.to_string(),
                ])
            })
            .collect();
        self.list(
            "Leave Requests",
            vec!["Applicant", "Kind", "From", "To", "Days", "Status"],
            &rows,
        )
    }

    fn academics(&self) -> askama::Result<String> {
        let catalog = self.catalog;
        let mut rows = Vec::new();
        for degree in &catalog.degrees {
            for course in courses_by_degree(catalog, &degree.id) {
                for branch in branches_by_course(catalog, &course.id) {
                    let resolved = resolve_branch(catalog, &branch.id).is_some();
                    rows.push(Row::plain(vec![
                        degree.code.clone(),
                        course.name.clone(),
                        branch.name.clone(),
                        branch.code.clone(),
                        branch.capacity.to_string(),
                        if resolved { "linked" } else { "broken" }.to_string(),
                    ]));
                }
            }
        }
        self.list(
            "Academic Structure",
            vec!["Degree", "Course", "Branch", "Code", "Capacity", "Hierarchy"],
            &rows,
        )
    }

    fn attendance(&self) -> askama::Result<String> {
        let catalog = self.catalog;
        if self.role() == Role::Student {
            let rows: Vec<Row> = catalog
                .attendance_of(&self.identity.id)
                .map(|r| {
                    Row::plain(vec![
                        r.date.to_string(),
                        r.subject.clone(),
                        if r.present { "present" } else { "absent" }.to_string(),
                    ])
                })
                .collect();
            return self.list("Attendance", vec!["Date", "Subject", "Mark"], &rows);
        }

        let filter = StudentFilter::default().with_search(self.search());
        let rows: Vec<Row> = apply_filters(&catalog.students, &filter)
            .iter()
            .map(|s| {
                let sessions = catalog.attendance_of(&s.id).count();
                Row::plain(vec![
                    s.roll_no.clone(),
                    s.name.clone(),
                    sessions.to_string(),
                    percent(attendance_percentage(catalog.attendance_of(&s.id))),
                ])
            })
            .collect();
        self.list(
            "Attendance",
            vec!["Roll No", "Name", "Sessions", "Attendance"],
            &rows,
        )
    }

    fn materials(&self) -> askama::Result<String> {
        let mut filter = MaterialFilter::default().with_search(self.search());
        match self.role() {
            Role::Teacher => filter.teacher_id = Some(self.identity.id.clone()),
            Role::Student => {
                if let Some(s) = self.catalog.student(&self.identity.id) {
                    filter.branch_id = Some(s.branch_id.clone());
                    filter.semester = Some(s.semester);
                }
            }
            Role::Admin => {}
        }

        let rows: Vec<Row> = apply_filters(&self.catalog.materials, &filter)
            .iter()
            .map(|m| {
                Row::plain(vec![
                    m.title.clone(),
                    m.subject.clone(),
                    m.kind.to_string(),
                    m.semester.to_string(),
                    m.uploaded_on.to_string(),
                ])
            })
            .collect();
        self.list(
            "Study Materials",
            vec!["Title", "Subject", "Kind", "Semester", "Uploaded"],
            &rows,
        )
    }

    fn activities(&self) -> askama::Result<String> {
        let filter = ActivityFilter::default().with_search(self.search());
        let id = self.identity.id.as_str();
        let rows: Vec<Row> = apply_filters(&self.catalog.activities, &filter)
            .iter()
            .map(|a| {
                Row::plain(vec![
                    a.name.clone(),
                    a.category.to_string(),
                    if a.open { "open" } else { "closed" }.to_string(),
                    if a.has_member(id) { "yes" } else { "no" }.to_string(),
                ])
            })
            .collect();
        self.list(
            "Activities",
            vec!["Name", "Category", "Enrolment", "Joined"],
            &rows,
        )
    }

    fn fees(&self) -> askama::Result<String> {
        let filter = FeeFilter {
            student_id: Some(self.identity.id.clone()),
            ..FeeFilter::default()
        };
        let rows: Vec<Row> = apply_filters(&self.catalog.fees, &filter)
            .iter()
            .map(|f| {
                Row::plain(vec![
                    f.semester.to_string(),
                    f.amount.to_string(),
                    f.paid.to_string(),
                    f.balance().to_string(),
                    f.due_date.to_string(),
                    f.status.to_string(),
                ])
            })
            .collect();
        self.list(
            "Fees",
            vec!["Semester", "Amount", "Paid", "Balance", "Due", "Status"],
            &rows,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::demo_catalog;
    use crate::core::session::{Credentials, DemoAuthenticator};

    fn signed_in(catalog: &Catalog, user_id: &str, role: Role) -> Session {
        let mut session = Session::new();
        session
            .login(
                &DemoAuthenticator::new(catalog),
                &Credentials {
                    user_id: user_id.to_string(),
                    password: "pw".to_string(),
                    role,
                },
            )
            .unwrap();
        session
    }

    fn options() -> PageOptions {
        PageOptions::new(25, 30, NaiveDate::from_ymd_opt(2024, 11, 20).unwrap())
    }

    fn render(catalog: &Catalog, session: &Session, path: &str, opts: &PageOptions) -> Rendered {
        render_route(catalog, session, &Route::parse(path).unwrap(), opts).unwrap()
    }

    #[test]
    fn test_gate_redirect_renders_nothing() {
        let catalog = demo_catalog();
        let session = signed_in(&catalog, "stu-001", Role::Student);

        let rendered = render(&catalog, &session, "/admin/students", &options());
        assert!(rendered.html().is_none());
        assert!(matches!(
            rendered,
            Rendered::Redirect {
                to: "/login",
                reason: DenyReason::WrongRole { .. }
            }
        ));
    }

    #[test]
    fn test_student_list_links_to_detail() {
        let catalog = demo_catalog();
        let session = signed_in(&catalog, "admin", Role::Admin);

        let rendered = render(&catalog, &session, "/admin/students", &options());
        let html = rendered.html().unwrap();
        assert!(html.contains("21CSE007"));
        assert!(html.contains("href=\"/admin/students/stu-001\""));
        assert!(!html.contains("No matches"));
    }

    #[test]
    fn test_search_without_hits_shows_empty_state() {
        let catalog = demo_catalog();
        let session = signed_in(&catalog, "admin", Role::Admin);
        let opts = PageOptions {
            search: Some("zzz-nobody".to_string()),
            ..options()
        };

        let rendered = render(&catalog, &session, "/admin/teachers", &opts);
        assert!(rendered.html().unwrap().contains("No matches"));
    }

    #[test]
    fn test_unknown_student_is_not_found_page() {
        let catalog = demo_catalog();
        let session = signed_in(&catalog, "EMP1001", Role::Teacher);

        let rendered = render(&catalog, &session, "/teacher/students/stu-404", &options());
        let html = rendered.html().unwrap();
        assert!(html.contains("Student not found"));
        assert!(html.contains("href=\"/teacher/students\""));
    }

    #[test]
    fn test_student_sees_only_own_fees() {
        let catalog = demo_catalog();
        let session = signed_in(&catalog, "stu-002", Role::Student);

        let rendered = render(&catalog, &session, "/student/fees", &options());
        let html = rendered.html().unwrap();
        assert!(html.contains("45000"));
        assert!(html.contains("1 record(s)"));
    }

    #[test]
    fn test_library_uses_threshold() {
        let catalog = demo_catalog();
        let session = signed_in(&catalog, "admin", Role::Admin);

        let html = render(&catalog, &session, "/admin/library", &options())
            .html()
            .unwrap()
            .to_string();
        assert!(html.contains("<td>low-stock</td>"));
        assert!(html.contains("<td>out-of-stock</td>"));
    }

    #[test]
    fn test_selecting_degree_clears_branch_on_student_page() {
        let catalog = demo_catalog();
        let session = signed_in(&catalog, "admin", Role::Admin);
        let mut opts = options();
        opts.students = StudentFilter::default()
            .with_degree(Some("deg-btech"))
            .with_branch(Some("br-cse"));

        let html = render(&catalog, &session, "/admin/students", &opts)
            .html()
            .unwrap()
            .to_string();
        assert!(html.contains("21CSE007"));
        assert!(!html.contains("22ECE003"));
        assert!(html.contains(r#"<option value="br-cse" selected>"#));

        opts.students = opts.students.with_degree(Some("deg-mtech"));
        let html = render(&catalog, &session, "/admin/students", &opts)
            .html()
            .unwrap()
            .to_string();
        assert!(html.contains("24MCS004"));
        assert!(!html.contains("21CSE007"));
        assert!(html.contains(r#"<option value="deg-mtech" selected>"#));
        // only M.Tech branches are offered, none selected
        assert!(html.contains(r#"<option value="br-mtech-cse">"#));
        assert!(!html.contains(r#"value="br-cse""#));
    }

    #[test]
    fn test_student_page_ands_criteria() {
        let catalog = demo_catalog();
        let session = signed_in(&catalog, "admin", Role::Admin);
        let mut opts = options();
        opts.students = StudentFilter::default()
            .with_degree(Some("deg-btech"))
            .with_status(Some(Status::Inactive));

        let html = render(&catalog, &session, "/admin/students", &opts)
            .html()
            .unwrap()
            .to_string();
        assert!(html.contains("22ME042"));
        assert!(!html.contains("24DME009"));
        assert!(html.contains("1 record(s)"));
    }

    #[test]
    fn test_pager_links_keep_search_and_criteria() {
        let catalog = demo_catalog();
        let session = signed_in(&catalog, "admin", Role::Admin);
        let mut opts = options();
        opts.page_size = 1;
        opts.search = Some("cse".to_string());
        opts.students = StudentFilter::default().with_degree(Some("deg-btech"));

        let html = render(&catalog, &session, "/admin/students", &opts)
            .html()
            .unwrap()
            .to_string();
        assert!(html.contains("3 record(s). Page 1 of 3"));
        assert!(html.contains(r#"href="?page=2&amp;q=cse&amp;degree=deg-btech""#));
    }

    #[test]
    fn test_faculty_and_library_criteria() {
        let catalog = demo_catalog();
        let session = signed_in(&catalog, "admin", Role::Admin);
        let mut opts = options();
        opts.teachers = TeacherFilter::default()
            .with_department(Some("dept-cse"))
            .with_status(Some(Status::Active));
        opts.books = BookFilter::default().with_category(Some("Mathematics"));

        let faculty = render(&catalog, &session, "/admin/teachers", &opts)
            .html()
            .unwrap()
            .to_string();
        assert!(faculty.contains("EMP1001"));
        assert!(faculty.contains("EMP1002"));
        assert!(!faculty.contains("EMP1006"));

        let library = render(&catalog, &session, "/admin/library", &opts)
            .html()
            .unwrap()
            .to_string();
        assert!(library.contains("Advanced Engineering Mathematics"));
        assert!(!library.contains("Digital Design"));
    }

    #[test]
    fn test_login_page_needs_no_session() {
        let catalog = demo_catalog();

        let rendered = render(&catalog, &Session::new(), "/login", &options());
        assert!(rendered.html().unwrap().contains("Sign in"));
    }

    #[test]
    fn test_dashboard_per_role() {
        let catalog = demo_catalog();

        let admin = signed_in(&catalog, "admin", Role::Admin);
        let html = render(&catalog, &admin, "/admin", &options());
        assert!(html.html().unwrap().contains("Annual Sports Meet"));

        let student = signed_in(&catalog, "21CSE007", Role::Student);
        let html = render(&catalog, &student, "/student", &options());
        assert!(html.html().unwrap().contains("75.0%"));
        assert!(html.html().unwrap().contains("Coding Club"));
    }
}
