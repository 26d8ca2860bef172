//! Built-in sample data
//!
//! The department and menu trees the console shows before a real backend is
//! wired in.

use crate::models::{Department, MenuItem};

/// Menu ids expanded when the menu view first opens
pub const DEFAULT_EXPANDED_MENU_IDS: [&str; 2] = ["1", "3"];

#[allow(clippy::too_many_arguments)]
fn department(
    id: &str,
    name: &str,
    manager: &str,
    member_count: u32,
    location: &str,
    token_limit: &str,
    storage_limit: &str,
    usage: f64,
) -> Department {
    Department {
        manager: manager.to_string(),
        member_count,
        location: location.to_string(),
        token_limit: token_limit.to_string(),
        storage_limit: storage_limit.to_string(),
        usage,
        ..Department::new_with_id(id, name)
    }
}

pub fn departments() -> Vec<Department> {
    vec![
        department("1", "Engineering", "Alice Zhang", 48, "Shanghai", "10M", "2 TB", 72.0)
            .with_sub_departments(vec![
                department("1-1", "Backend", "Bob Li", 18, "Shanghai", "4M", "800 GB", 65.0)
                    .with_sub_departments(vec![department(
                        "1-1-1",
                        "Data Platform",
                        "Chen Wu",
                        7,
                        "Hangzhou",
                        "2M",
                        "500 GB",
                        88.0,
                    )]),
                department("1-2", "Frontend", "Diana Zhou", 14, "Shanghai", "2M", "200 GB", 41.0),
                department("1-3", "AI Research", "Ethan Sun", 16, "Beijing", "Unlimited", "1 TB", 93.0),
            ]),
        department("2", "Sales", "Fiona Wang", 32, "Beijing", "1M", "100 GB", 23.0).with_sub_departments(
            vec![
                department("2-1", "Enterprise Accounts", "George Liu", 12, "Beijing", "500K", "50 GB", 35.0),
                department("2-2", "Channel Partners", "Helen Xu", 9, "Shenzhen", "300K", "50 GB", 12.0),
            ],
        ),
        department("3", "Operations", "Ivan Qian", 21, "Shenzhen", "2M", "300 GB", 58.0)
            .with_sub_departments(vec![department(
                "3-1",
                "Customer Support",
                "Julia Ma",
                15,
                "Chengdu",
                "1M",
                "100 GB",
                61.0,
            )]),
        department("4", "Finance", "Kevin Zhao", 8, "Shanghai", "200K", "20 GB", 9.0),
    ]
}

pub fn menus() -> Vec<MenuItem> {
    vec![
        MenuItem::new("1", "Dashboard", "/dashboard")
            .with_icon("LayoutDashboard")
            .with_sort_order(1)
            .with_items(vec![
                MenuItem::new("1-1", "Overview", "/dashboard/overview")
                    .with_icon("Gauge")
                    .with_sort_order(1),
                MenuItem::new("1-2", "Analytics", "/dashboard/analytics")
                    .with_icon("BarChart3")
                    .with_sort_order(2),
            ]),
        MenuItem::new("2", "Knowledge Base", "/knowledge")
            .with_icon("BookOpen")
            .with_sort_order(2),
        MenuItem::new("3", "System", "/system")
            .with_icon("Settings")
            .with_sort_order(3)
            .with_items(vec![
                MenuItem::new("3-1", "Users", "/system/users")
                    .with_icon("Users")
                    .with_sort_order(1),
                MenuItem::new("3-2", "Roles", "/system/roles")
                    .with_icon("Shield")
                    .with_sort_order(2),
                MenuItem::new("3-3", "Departments", "/system/departments")
                    .with_icon("Building")
                    .with_sort_order(3),
                MenuItem::new("3-4", "Menus", "/system/menus")
                    .with_icon("Menu")
                    .with_sort_order(4)
                    .with_items(vec![MenuItem::new(
                        "3-4-1",
                        "Menu Permissions",
                        "/system/menus/permissions",
                    )
                    .with_icon("Lock")
                    .with_sort_order(1)
                    .hidden()]),
            ]),
        MenuItem::new("4", "Audit Logs", "/audit")
            .with_icon("FileText")
            .with_sort_order(4),
    ]
}
