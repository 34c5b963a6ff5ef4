//! Static figures and tables shown in the portals.

use crate::Role;

/// A headline number on a dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    pub detail: &'static str,
}

/// A fixed table: column headers plus rows of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockTable {
    pub title: &'static str,
    pub columns: &'static [&'static str],
    pub rows: &'static [&'static [&'static str]],
}

impl MockTable {
    /// True when every row has one cell per column.
    pub fn is_rectangular(&self) -> bool {
        self.rows.iter().all(|row| row.len() == self.columns.len())
    }
}

const CLIENT_STATS: &[StatCard] = &[
    StatCard { label: "Lessons completed", value: "12", detail: "of 20 in your package" },
    StatCard { label: "Next lesson", value: "Thu 09:00", detail: "with M. Rossi" },
    StatCard { label: "Theory score", value: "86%", detail: "last mock exam" },
    StatCard { label: "Balance due", value: "$180", detail: "due in 14 days" },
];

const EMPLOYEE_STATS: &[StatCard] = &[
    StatCard { label: "Lessons today", value: "6", detail: "2 remaining" },
    StatCard { label: "Active students", value: "18", detail: "3 new this month" },
    StatCard { label: "Exam pass rate", value: "91%", detail: "last 90 days" },
    StatCard { label: "Hours this week", value: "27", detail: "of 35 scheduled" },
];

const ADMIN_STATS: &[StatCard] = &[
    StatCard { label: "Enrolled students", value: "214", detail: "+12 this month" },
    StatCard { label: "Instructors", value: "11", detail: "2 on leave" },
    StatCard { label: "Monthly revenue", value: "$48,300", detail: "+6% vs last month" },
    StatCard { label: "Survey leads", value: "37", detail: "awaiting follow-up" },
];

/// Dashboard figures per role.
pub const ROLE_STATS: &[(Role, &[StatCard])] = &[
    (Role::Client, CLIENT_STATS),
    (Role::Employee, EMPLOYEE_STATS),
    (Role::Admin, ADMIN_STATS),
];

pub fn dashboard_stats(role: Role) -> &'static [StatCard] {
    ROLE_STATS
        .iter()
        .find(|(r, _)| *r == role)
        .map(|(_, stats)| *stats)
        .unwrap_or(&[])
}

pub const CLIENT_LESSONS: MockTable = MockTable {
    title: "Upcoming lessons",
    columns: &["Date", "Time", "Instructor", "Type"],
    rows: &[
        &["Thu 14 Nov", "09:00", "Marco Rossi", "City driving"],
        &["Mon 18 Nov", "17:30", "Marco Rossi", "Highway"],
        &["Wed 20 Nov", "08:00", "Lena Park", "Parking"],
        &["Sat 23 Nov", "10:00", "Lena Park", "Mock exam"],
    ],
};

pub const CLIENT_PROGRESS: MockTable = MockTable {
    title: "Skills",
    columns: &["Skill", "Level", "Instructor note"],
    rows: &[
        &["Mirror checks", "Confident", "Consistent"],
        &["Roundabouts", "Improving", "Watch lane choice"],
        &["Parallel parking", "Learning", "Practice reference points"],
        &["Highway merging", "Not started", "Scheduled 18 Nov"],
    ],
};

pub const EMPLOYEE_SCHEDULE: MockTable = MockTable {
    title: "Today",
    columns: &["Time", "Student", "Vehicle", "Pickup"],
    rows: &[
        &["08:00", "Sara Lind", "Car 3", "Central station"],
        &["09:30", "Omar Haddad", "Car 3", "Home address"],
        &["11:00", "Jin Wu", "Car 1", "School office"],
        &["14:00", "Eva Novak", "Car 3", "University gate"],
        &["15:30", "Tom Becker", "Car 2", "School office"],
        &["17:00", "Ana Silva", "Car 3", "Home address"],
    ],
};

pub const EMPLOYEE_STUDENTS: MockTable = MockTable {
    title: "My students",
    columns: &["Name", "License", "Lessons", "Exam date"],
    rows: &[
        &["Sara Lind", "Car (B)", "14 / 20", "2 Dec"],
        &["Omar Haddad", "Car (B)", "6 / 20", "-"],
        &["Jin Wu", "Motorcycle (A)", "9 / 12", "28 Nov"],
        &["Eva Novak", "Car (B)", "19 / 20", "21 Nov"],
    ],
};

pub const ADMIN_STAFF: MockTable = MockTable {
    title: "Staff",
    columns: &["Name", "Role", "Students", "Status"],
    rows: &[
        &["Marco Rossi", "Instructor", "18", "Active"],
        &["Lena Park", "Instructor", "15", "Active"],
        &["Kofi Mensah", "Instructor", "0", "On leave"],
        &["Ines Duarte", "Office", "-", "Active"],
    ],
};

pub const ADMIN_REPORTS: MockTable = MockTable {
    title: "Monthly summary",
    columns: &["Month", "New students", "Lessons given", "Pass rate"],
    rows: &[
        &["August", "19", "612", "88%"],
        &["September", "24", "655", "90%"],
        &["October", "21", "701", "92%"],
    ],
};
